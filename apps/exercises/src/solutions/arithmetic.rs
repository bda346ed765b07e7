use std::io::Write;

use anyhow::{Context, Result};
use math::PairSummary;
use tracing::debug;

use crate::input::parse_pairs;

/// Write sum, product, difference and floor quotient/remainder for each pair.
pub fn run<W: Write>(input: &str, out: &mut W) -> Result<()> {
    for (a, b) in parse_pairs(input)? {
        let s = PairSummary::compute(a, b).with_context(|| format!("pair {} {}", a, b))?;
        debug!(a, b, "formatting pair");
        writeln!(out, "{}+{}={}", a, b, s.sum)?;
        writeln!(out, "{}*{}={}", a, b, s.product)?;
        writeln!(out, "{}-{}={}", a, b, s.difference)?;
        writeln!(out, "{}/{}={}...{}", a, b, s.quotient, s.remainder)?;
    }
    Ok(())
}

pub fn solve(input: &str) -> Result<String> {
    let mut out = Vec::new();
    run(input, &mut out)?;
    Ok(String::from_utf8(out)?)
}
