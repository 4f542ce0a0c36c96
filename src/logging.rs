use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle;
use crate::config::General;
use crate::errors::ConfigError;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Sets up logging to file and, if asked for, to stdout
///
/// # Arguments
///
/// * 'general' - general configuration holding log path, level and stdout flag
pub fn setup_logger(general: &General) -> Result<Handle, ConfigError> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(&general.log_path)?;

    let mut builder = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)));
    let mut root = Root::builder().appender("file");

    if general.log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    let config = builder.build(root.build(general.log_level))?;

    Ok(log4rs::init_config(config)?)
}
