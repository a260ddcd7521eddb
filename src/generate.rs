/*!
 * Random dataset generation: uniform integers in `[0, modulo)`, one
 * decimal value per output line.
 */

use std::io::Write;

use anyhow::Result;
use rand::Rng;

use crate::Value;

/// Write `count` values drawn uniformly from `[0, modulo)` to `out`.
/// The random source is passed in by the caller, there is no hidden
/// global generator state here. Caller guarantees `modulo >= 1`.
pub fn generate(out: &mut impl Write, rng: &mut impl Rng, count: u64, modulo: Value) -> Result<()> {
    for _ in 0..count {
        let num = rng.gen_range(0, modulo);
        writeln!(out, "{}", num)?;
    }
    Ok(())
}

///////////////////////////////////////////////////////////////////////////////////////////////////
/// Tests
///
