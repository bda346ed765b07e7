//! Whitespace-separated token parsing for the exercise inputs.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;
use math::{MathError, Result};

/// Read the whole input, from `path` if given, otherwise from stdin.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read standard input")?;
            Ok(buf)
        }
    }
}

/// Parse `n d1 d2 ... dn`. Tokens after the n-th divisor are ignored.
///
/// # Example
///
/// ```
/// use exercises::input::parse_divisors;
///
/// assert_eq!(parse_divisors("3\n3 7 11").unwrap(), vec![3, 7, 11]);
/// ```
pub fn parse_divisors(input: &str) -> Result<Vec<u64>> {
    let mut tokens = input.split_whitespace();
    let count_token = tokens
        .next()
        .ok_or_else(|| MathError::InvalidInput("missing divisor count".to_string()))?;
    let count: usize = count_token.parse().map_err(|_| {
        MathError::InvalidInput(format!("invalid divisor count {:?}", count_token))
    })?;

    let divisors = tokens
        .take(count)
        .map(parse_divisor)
        .collect::<Result<Vec<u64>>>()?;

    if divisors.len() < count {
        return Err(MathError::InvalidInput(format!(
            "expected {} divisors, found {}",
            count,
            divisors.len()
        )));
    }
    Ok(divisors)
}

fn parse_divisor(token: &str) -> Result<u64> {
    match token.parse::<i128>() {
        Ok(value) if value > 0 => u64::try_from(value).map_err(|_| {
            MathError::InvalidInput(format!("divisor {} does not fit in 64 bits", value))
        }),
        Ok(value) => Err(MathError::InvalidInput(format!(
            "divisor must be positive, got {}",
            value
        ))),
        Err(_) => Err(MathError::InvalidInput(format!("{:?} is not an integer", token))),
    }
}

/// Parse `a b` pairs until the input runs out.
pub fn parse_pairs(input: &str) -> Result<Vec<(i64, i64)>> {
    let values = input
        .split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| {
                MathError::InvalidInput(format!("{:?} is not a 64-bit integer", token))
            })
        })
        .collect::<Result<Vec<i64>>>()?;

    if values.len() % 2 != 0 {
        return Err(MathError::InvalidInput(format!(
            "unpaired trailing value {}",
            values[values.len() - 1]
        )));
    }
    Ok(values.chunks_exact(2).map(|p| (p[0], p[1])).collect())
}
