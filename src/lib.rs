pub mod cli;
pub mod fruit;

pub use fruit::{DEFAULT_NAME, Food, Fruit, Fruits};

use anyhow::{Context, Result};
use std::io::Write;

pub fn run(out: &mut dyn Write) -> Result<()> {
    let fruit: Box<dyn Fruit> = Box::new(Food::new());
    fruit.display(out).context("Failed to write display line")?;
    out.flush().context("Failed to flush output")?;
    Ok(())
}
