// Tue Jan 13 2026 - Alex

use crate::config::Config;
use colored::*;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

pub struct LoggingUtils;

impl LoggingUtils {
    /// Installs the logger the configuration asks for. With `generate_log`
    /// everything goes to the run log file; otherwise to stderr, or to
    /// `env_logger` when `RUST_LOG` is set and debug output was not forced.
    pub fn init(config: &Config, target: &Path) -> std::io::Result<()> {
        let level = Self::level_for(config);

        if config.generate_log {
            return Self::init_logger_with_file(level, &config.log_file, target);
        }

        if !config.debug_msgs && std::env::var_os("RUST_LOG").is_some() {
            init_from_env();
            return Ok(());
        }

        Self::init_logger(level);
        Ok(())
    }

    pub fn level_for(config: &Config) -> LevelFilter {
        if config.debug_msgs {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn init_logger(level: LevelFilter) {
        let logger = Box::new(ColoredLogger::new(level));
        log::set_boxed_logger(logger).ok();
        log::set_max_level(level);
    }

    pub fn init_logger_with_file(level: LevelFilter, file_path: &Path, target: &Path) -> std::io::Result<()> {
        let logger = Box::new(FileLogger::open(level, file_path, target)?);
        log::set_boxed_logger(logger).ok();
        log::set_max_level(level);
        Ok(())
    }

    /// Closes the run's section of the log file.
    pub fn finish(config: &Config, target: &Path) -> std::io::Result<()> {
        log::logger().flush();
        if !config.generate_log {
            return Ok(());
        }
        let mut file = OpenOptions::new().create(true).append(true).open(&config.log_file)?;
        write_banner(&mut file, "End", target)?;
        writeln!(file)
    }
}

struct ColoredLogger {
    level: LevelFilter,
    use_color: AtomicBool,
}

impl ColoredLogger {
    fn new(level: LevelFilter) -> Self {
        Self {
            level,
            use_color: AtomicBool::new(true),
        }
    }

    fn format_level(&self, level: Level) -> ColoredString {
        match level {
            Level::Error => "ERROR".red().bold(),
            Level::Warn => "WARN ".yellow().bold(),
            Level::Info => "INFO ".green().bold(),
            Level::Debug => "DEBUG".blue().bold(),
            Level::Trace => "TRACE".magenta().bold(),
        }
    }
}

impl Log for ColoredLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let level_str = if self.use_color.load(Ordering::Relaxed) {
                self.format_level(record.level()).to_string()
            } else {
                format!("{:5}", record.level())
            };

            eprintln!("{} {}", level_str, record.args());
        }
    }

    fn flush(&self) {}
}

struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl FileLogger {
    fn open(level: LevelFilter, file_path: &Path, target: &Path) -> std::io::Result<Self> {
        let mut file = OpenOptions::new().create(true).append(true).open(file_path)?;
        write_banner(&mut file, "Start", target)?;
        Ok(Self {
            level,
            file: Mutex::new(file),
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = format!("[{}] {}\n", record.level(), record.args());

            if let Ok(mut file) = self.file.lock() {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

fn write_banner<W: Write>(out: &mut W, phase: &str, target: &Path) -> std::io::Result<()> {
    writeln!(out, "---[ {} @ {} ]---", phase, timestamp())?;
    writeln!(out, "---[ Target: {} ]---", target.display())
}

fn timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();

    format!("{}.{:03}", duration.as_secs(), duration.subsec_millis())
}

pub struct ScopedTimer {
    name: String,
    start: std::time::Instant,
}

impl ScopedTimer {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        log::debug!("[TIMER] {} took {:.2}ms", self.name, elapsed.as_secs_f64() * 1000.0);
    }
}

pub fn init_from_env() {
    let _ = env_logger::try_init();
}

pub fn scoped_timer(name: &str) -> ScopedTimer {
    ScopedTimer::new(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_file_logger_banner_and_level_gate() {
        let path = std::env::temp_dir().join(format!("uefi-service-mapper-log-{}.log", std::process::id()));
        let _ = fs::remove_file(&path);

        let logger = FileLogger::open(LevelFilter::Info, &path, Path::new("/fw/Foo/body.bin")).unwrap();
        logger.log(
            &Record::builder()
                .level(Level::Error)
                .args(format_args!("Can't find a valid code segment!"))
                .build(),
        );
        logger.log(&Record::builder().level(Level::Debug).args(format_args!("hidden")).build());
        logger.flush();

        let contents = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);

        let lines: Vec<&str> = contents.lines().collect();
        assert!(lines[0].starts_with("---[ Start @ "));
        assert_eq!(lines[1], "---[ Target: /fw/Foo/body.bin ]---");
        assert_eq!(lines[2], "[ERROR] Can't find a valid code segment!");
        assert!(!contents.contains("hidden"));
    }

    #[test]
    fn test_level_from_config() {
        assert_eq!(LoggingUtils::level_for(&Config::default()), LevelFilter::Info);
        assert_eq!(LoggingUtils::level_for(&Config::batch()), LevelFilter::Debug);
    }
}
