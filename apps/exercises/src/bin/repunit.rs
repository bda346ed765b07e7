use std::io::{self, BufWriter, Write};

use exercises::solutions::repunit::{self, RepunitOptions};
use exercises::{input, logging};

fn main() -> anyhow::Result<()> {
    logging::init(0, false);

    let text = input::read_input(None)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = repunit::run(&text, &RepunitOptions::default(), &mut out);
    out.flush()?;
    result
}
