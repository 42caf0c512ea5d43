use anyhow::Result;
use clap::Parser;
use fruits::cli::Cli;

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    fruits::run(&mut out)?;

    Ok(())
}
