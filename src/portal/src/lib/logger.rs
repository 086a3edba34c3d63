use slog::{Drain, Level, Logger};
use std::fs::File;
use std::path::PathBuf;

pub const DEFAULT_LOG_FILE: &str = "portal.log";

/// Where log records go.
pub enum LoggingMode {
    /// Undecorated output to STDERR.
    Stderr,

    /// STDERR plus a copy of every record in a file, like `portal ... |& tee file`.
    Tee(PathBuf),

    /// Records go to a file only.
    File(PathBuf),
}

impl LoggingMode {
    pub fn from_flags(mode: &str, logfile: Option<&str>) -> Self {
        let path = || PathBuf::from(logfile.unwrap_or(DEFAULT_LOG_FILE));
        match mode {
            "tee" => LoggingMode::Tee(path()),
            "file" => LoggingMode::File(path()),
            _ => LoggingMode::Stderr,
        }
    }
}

/// A Slog formatter that writes to a term decorator, prefixing warnings and worse with their level.
pub struct PortalFormat<D>
where
    D: slog_term::Decorator,
{
    decorator: D,
}

impl<D: slog_term::Decorator> PortalFormat<D> {
    pub fn new(decorator: D) -> PortalFormat<D> {
        PortalFormat { decorator }
    }
}

impl<D: slog_term::Decorator> slog::Drain for PortalFormat<D> {
    type Ok = ();
    type Err = std::io::Error;

    fn log(
        &self,
        record: &slog::Record<'_>,
        values: &slog::OwnedKVList,
    ) -> Result<Self::Ok, Self::Err> {
        self.decorator.with_record(record, values, |decorator| {
            if record.level() <= slog::Level::Warning {
                decorator.start_level()?;
                write!(decorator, "{}: ", record.level().as_str())?;
                // start_whitespace resets to normal coloring after printing the level
                decorator.start_whitespace()?;
            }

            decorator.start_msg()?;
            write!(decorator, "{}", record.msg())?;

            decorator.start_whitespace()?;
            writeln!(decorator)?;

            decorator.flush()?;
            Ok(())
        })
    }
}

fn create_drain(mode: LoggingMode) -> std::io::Result<Logger> {
    Ok(match mode {
        LoggingMode::Stderr => {
            let decorator = slog_term::TermDecorator::new().stderr().build();
            let drain = PortalFormat::new(decorator).fuse();
            let async_drain = slog_async::Async::new(drain).build().fuse();
            Logger::root(async_drain, slog::o!())
        }
        LoggingMode::File(out) => {
            let file = File::create(out)?;
            let decorator = slog_term::PlainDecorator::new(file);
            let drain = slog_term::FullFormat::new(decorator).build().fuse();
            Logger::root(slog_async::Async::new(drain).build().fuse(), slog::o!())
        }
        LoggingMode::Tee(out) => Logger::root(
            slog::Duplicate::new(
                create_drain(LoggingMode::Stderr)?,
                create_drain(LoggingMode::File(out))?,
            )
            .fuse(),
            slog::o!(),
        ),
    })
}

/// Maps the `-v`/`-q` balance to a level. `None` means logging is off entirely.
pub fn level_for(verbose_level: i64) -> Option<Level> {
    match verbose_level {
        -3 => Some(Level::Critical),
        -2 => Some(Level::Error),
        -1 => Some(Level::Warning),
        0 => Some(Level::Info),
        1 => Some(Level::Debug),
        x if x > 0 => Some(Level::Trace),
        _ => None,
    }
}

/// Create a root logger.
/// The verbose_level can be negative, in which case it's a quiet mode which removes warnings,
/// then errors entirely.
pub fn create_root_logger(verbose_level: i64, mode: LoggingMode) -> std::io::Result<Logger> {
    let Some(log_level) = level_for(verbose_level) else {
        return Ok(Logger::root(slog::Discard, slog::o!()));
    };

    let drain = slog::LevelFilter::new(create_drain(mode)?, log_level).fuse();
    let drain = slog_async::Async::new(drain).build().fuse();

    Ok(Logger::root(
        drain,
        slog::o!("version" => env!("CARGO_PKG_VERSION")),
    ))
}
