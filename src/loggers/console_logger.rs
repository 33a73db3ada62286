use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::error::LoggerError;

pub fn build_console_config(level: LevelFilter) -> Result<LogConfig, LoggerError> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{l} - {m}\n")))
        .build();

    let log_config = LogConfig::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;

    Ok(log_config)
}

pub fn init_console_logger(level: LevelFilter) -> Result<(), LoggerError> {
    log4rs::init_config(build_console_config(level)?)?;
    Ok(())
}
