use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::File;

/// Terminal logger for the whole process. Calling it twice is an error of the `log` crate.
pub fn init_logger(level: LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;
    Ok(())
}

/// terminal logger plus a copy of the log in file
pub fn init_logger_with_file(
    level: LevelFilter,
    log_file: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let loggers: Vec<Box<dyn SharedLogger>> = vec![
        TermLogger::new(
            level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(level, Config::default(), File::create(log_file)?),
    ];
    CombinedLogger::init(loggers)?;
    Ok(())
}
