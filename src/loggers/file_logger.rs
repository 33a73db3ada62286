use log::info;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::{config::Config, error::LoggerError};

/// One file per UTC day under the configured log directory.
pub fn build_file_config(config: &Config) -> Result<LogConfig, LoggerError> {
    let current_date = chrono::offset::Utc::now().date_naive().to_string();
    let path = config.log_dir.join(format!("{}.log", current_date));

    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S)(utc)} {l} - {m}\n",
        )))
        .build(path)?;

    let log_config = LogConfig::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(config.log_level))?;

    Ok(log_config)
}

pub fn init_file_logger(config: &Config) -> Result<(), LoggerError> {
    log4rs::init_config(build_file_config(config)?)?;
    info!("File logger initialized");

    Ok(())
}
