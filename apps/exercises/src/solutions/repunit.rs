use std::io::Write;

use anyhow::{Context, Result};
use math::{RepunitDivisorFinder, SearchStrategy};
use tracing::info;

use crate::input::parse_divisors;

/// Knobs for the repunit exercise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RepunitOptions {
    pub strategy: SearchStrategy,
    pub max_length: Option<usize>,
    pub parallel: bool,
}

impl RepunitOptions {
    fn finder(&self) -> RepunitDivisorFinder {
        let finder = RepunitDivisorFinder::with_strategy(self.strategy);
        match self.max_length {
            Some(limit) => finder.max_length(limit),
            None => finder,
        }
    }
}

/// Write one shortest repunit length per divisor, in input order.
///
/// Lines for divisors before a failing one are written before the error is
/// returned.
pub fn run<W: Write>(input: &str, options: &RepunitOptions, out: &mut W) -> Result<()> {
    let divisors = parse_divisors(input)?;
    info!(
        count = divisors.len(),
        strategy = ?options.strategy,
        parallel = options.parallel,
        "searching repunit multiples"
    );

    let mut finder = options.finder();
    if options.parallel {
        let results = finder.find_each_parallel(&divisors);
        for (position, (divisor, result)) in divisors.iter().zip(results).enumerate() {
            let length = result
                .with_context(|| format!("divisor #{} ({})", position + 1, divisor))?;
            writeln!(out, "{}", length)?;
        }
    } else {
        for (position, &divisor) in divisors.iter().enumerate() {
            let length = finder
                .find_min_repunit_length(divisor)
                .with_context(|| format!("divisor #{} ({})", position + 1, divisor))?;
            writeln!(out, "{}", length)?;
        }
    }

    info!(cached_repunits = finder.table().cached_len(), "repunit search done");
    Ok(())
}

pub fn solve(input: &str, options: &RepunitOptions) -> Result<String> {
    let mut out = Vec::new();
    run(input, options, &mut out)?;
    Ok(String::from_utf8(out)?)
}
