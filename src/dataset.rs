/*!
 * Dataset ingestion and the repeated threshold-count workload.
 */

use std::io::BufRead;

use anyhow::Result;

use crate::Value;

/// In-memory dataset for one counting run. Built once from the input
/// stream and never mutated afterwards.
pub struct Dataset {
    values: Vec<Value>,
}

/// A line is numeric when, stripped of trailing whitespace, it is non-empty
/// and consists solely of ASCII decimal digits. No sign, so negative values
/// never pass the filter.
fn is_numeric_line(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl Dataset {
    /// Read `input` to end-of-stream, keeping numeric lines in input order.
    /// Non-numeric lines are skipped silently, they are not an error.
    pub fn read(input: impl BufRead) -> Result<Self> {
        let mut values = Vec::new();
        for line in input.lines() {
            let line = line?;
            let s = line.trim_end();
            if !is_numeric_line(s) {
                continue;
            }
            // Digit runs too wide for Value are outside the intended
            // ranges; treat them like any other non-qualifying line.
            if let Ok(v) = s.parse::<Value>() {
                values.push(v);
            }
        }
        Ok(Dataset { values })
    }

    #[allow(dead_code)]
    pub fn from_values(values: Vec<Value>) -> Self {
        Dataset { values }
    }

    /// One full pass: number of elements strictly below `lessthan`.
    fn count_below(&self, lessthan: Value) -> u64 {
        let mut n = 0;
        for v in &self.values {
            if *v < lessthan {
                n += 1;
            }
        }
        n
    }

    /// `times` full passes over the dataset, accumulating the per-pass
    /// count. The repetition exists to create a measurable workload, so
    /// this stays a literal repeated scan rather than a single pass
    /// multiplied out.
    pub fn count_times(&self, lessthan: Value, times: u32) -> u64 {
        let mut total = 0;
        for _ in 0..times {
            total += self.count_below(lessthan);
        }
        total
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
/// Tests
///
