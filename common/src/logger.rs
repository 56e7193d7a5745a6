use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
}

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    pub fn format_line(&self, level: LogLevel, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let level_tag = match level {
            LogLevel::Info => "",
            LogLevel::Warn => "[WARN]",
        };
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}]{} {}", timestamp, prefix, level_tag, message),
            None => format!("[{}]{} {}", timestamp, level_tag, message),
        }
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        let line = self.format_line(level, message);
        match level {
            LogLevel::Info => println!("{}", line),
            LogLevel::Warn => eprintln!("{}", line),
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn log(level: LogLevel, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, message);
    } else {
        eprintln!("{}", message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Warn, &format!($($arg)*))
    };
}
