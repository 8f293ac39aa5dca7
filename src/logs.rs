use anyhow::Result;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    }
}

// stdout carries the echoed records and the status line, so logs go to stderr.
pub fn init(verbose: bool) -> Result<()> {
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    TermLogger::init(
        level_for(verbose),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}
