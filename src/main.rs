use anyhow::Result;
use clap::Parser;
use kmz_jsonl::{config::Config, logs, run};

pub fn main() -> Result<()> {
    let config = Config::parse();
    logs::init(config.verbose)?;

    let lines = run(&config)?;
    println!("Wrote {} lines to {}", lines, config.outfile.display());
    Ok(())
}
