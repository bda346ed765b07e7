pub mod input;
pub mod logging;
pub mod solutions;

use std::io::Write;

use solutions::repunit::RepunitOptions;

/// Available exercises with a one-line description
pub const EXERCISES: &[(&str, &str)] = &[
    (
        "repunit",
        "Shortest repunit (1, 11, 111, ...) divisible by each input integer",
    ),
    (
        "arith",
        "Sum, product, difference and floor quotient/remainder of integer pairs",
    ),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exercise {
    Repunit(RepunitOptions),
    Arith,
}

/// Run an exercise over `input`, writing its answer lines to `out`
pub fn run_exercise<W: Write>(
    exercise: &Exercise,
    input: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    match exercise {
        Exercise::Repunit(options) => solutions::repunit::run(input, options, out),
        Exercise::Arith => solutions::arithmetic::run(input, out),
    }
}
