use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use exercises::solutions::repunit::RepunitOptions;
use exercises::{EXERCISES, Exercise, input, logging, run_exercise};
use math::SearchStrategy;

#[derive(Parser)]
#[command(name = "exercises")]
#[command(version, about = "Run the exercise programs over standard input")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shortest repunit divisible by each integer (input: n d1 .. dn)
    Repunit {
        /// How divisibility of each repunit is tested
        #[arg(short, long, value_enum, default_value = "remainder")]
        strategy: Strategy,

        /// Fail once repunits longer than this would be needed
        #[arg(long, value_name = "DIGITS")]
        max_length: Option<usize>,

        /// Search divisors in parallel (output order is unchanged)
        #[arg(short, long)]
        parallel: bool,

        /// Read input from a file instead of stdin
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Sum, product, difference and floor division of each pair (input: a b ...)
    Arith {
        /// Read input from a file instead of stdin
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// List available exercises
    List,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    /// Divide memoized big-integer repunits (memory grows with the square of the answer)
    Table,
    /// Track the remainder incrementally
    Remainder,
}

impl From<Strategy> for SearchStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Table => SearchStrategy::Table,
            Strategy::Remainder => SearchStrategy::Remainder,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let (exercise, path) = match cli.command {
        Commands::Repunit {
            strategy,
            max_length,
            parallel,
            input,
        } => {
            let options = RepunitOptions {
                strategy: strategy.into(),
                max_length,
                parallel,
            };
            (Exercise::Repunit(options), input)
        }
        Commands::Arith { input } => (Exercise::Arith, input),
        Commands::List => {
            for (name, description) in EXERCISES {
                println!("{:<10}{}", name, description);
            }
            return Ok(());
        }
    };

    let text = input::read_input(path.as_deref())?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = run_exercise(&exercise, &text, &mut out);
    out.flush()?;
    result
}
