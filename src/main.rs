/*!
    Small benchmarking utility: generate a dataset of random integers, or
    count how many of them fall below a threshold, repeated enough times
    to make the scan measurable.
 ```
Usage:
   countbench gen <count> <modulo>     [>data.txt]
   countbench count <lessthan> <times> [<data.txt]
where:
   count    - number of random values to generate, one per line on stdout
   modulo   - exclusive upper bound of generated values (range is [0, modulo))
   lessthan - threshold; elements strictly below it are counted
   times    - number of full counting passes over the dataset (workload size)
```
   The `count` command reads the dataset from stdin, makes one untimed
   warm-up pass, then reports the accumulated count together with the
   process CPU time spent in the timed passes.
 */

#[macro_use] extern crate anyhow;

use std::env;
use std::io::{stdin, stdout};

use anyhow::{Context, Result};
use cpu_time::ProcessTime;

/// Dataset element type. 32 bits cover the intended value ranges.
pub type Value = i32;

mod dataset;
mod generate;

use dataset::Dataset;

/// Usage text. Printed to stderr both for `help` and for argument errors;
/// the two cases differ only in exit code.
fn usage(prog: &str) -> String {
    format!(
        r#"usage: {} <options>
where options could be
  gen <count> <modulo>
  count <lessthan> <times>
"#, prog)
}

/// Program main function.
fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect(); // TODO: use clap here
    if args.len() < 2 {
        bail!("missing args\n\n{}", usage(&args[0]));
    }

    match args[1].as_str() {
        "-h" | "help" => {
            eprint!("{}", usage(&args[0]));
            Ok(())
        },
        "gen" => {
            if args.len() < 4 {
                bail!("missing options for gen command\n\n{}", usage(&args[0]));
            }
            let count = args[2].parse::<u64>()
                .with_context(|| format!("invalid count argument: {:?}", args[2]))?;
            let modulo = args[3].parse::<Value>()
                .with_context(|| format!("invalid modulo argument: {:?}", args[3]))?;
            if modulo < 1 {
                bail!("modulo must be at least 1, got {}", modulo);
            }

            let stdout = stdout();
            let mut rng = rand::thread_rng();
            generate::generate(&mut stdout.lock(), &mut rng, count, modulo)
        },
        "count" => {
            if args.len() < 4 {
                bail!("missing options for count command\n\n{}", usage(&args[0]));
            }
            let lessthan = args[2].parse::<Value>()
                .with_context(|| format!("invalid lessthan argument: {:?}", args[2]))?;
            let times = args[3].parse::<u32>()
                .with_context(|| format!("invalid times argument: {:?}", args[3]))?;
            if times < 1 {
                bail!("times must be at least 1, got {}", times);
            }

            let stdin = stdin();
            let data = Dataset::read(stdin.lock())?;

            // One untimed warm-up pass before measurement.
            data.count_times(lessthan, 1);

            let start = ProcessTime::now();
            let matched = data.count_times(lessthan, times);
            let elapsed = start.elapsed();

            println!("Number of matching entries = {}. Time taken = {}s",
                matched, elapsed.as_secs_f64());
            Ok(())
        },
        other => bail!("unrecognized command: {:?}\n\n{}", other, usage(&args[0])),
    }
}
