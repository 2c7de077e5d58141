//! Installs a stderr logger for programs that embed the picture mapper.

use alloc::boxed::Box;

use log::Log as _;

/// Options controlling log output to stderr.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[expect(clippy::exhaustive_structs)]
#[expect(clippy::module_name_repetitions)]
pub struct LoggingOptions {
    /// Log at [`log::Level::Trace`] instead of [`log::Level::Debug`].
    pub verbose: bool,
    /// Also log every [`GridPicture`](crate::GridPicture) construction and rescale.
    /// Has no effect unless `verbose` is set.
    pub trace_boxes: bool,
    /// Remove timestamps from logs so that they are deterministic.
    pub simplify_log_format: bool,
}

/// Installs a [`log`] global logger writing to stderr, filtered by
/// [`amrvis_base::util::log::standard_filter()`].
///
/// Returns an error if a global logger was already installed.
pub fn install(options: LoggingOptions) -> Result<(), log::SetLoggerError> {
    use log::LevelFilter::{Debug, Error, Off, Trace};

    let LoggingOptions {
        verbose,
        trace_boxes,
        simplify_log_format,
    } = options;

    let stderr_logger = *simplelog::WriteLogger::new(
        if verbose { Trace } else { Debug },
        // No target filters here; `AmrvisLogger` applies `standard_filter`.
        simplelog::ConfigBuilder::new()
            .set_target_level(Off)
            .set_location_level(Off)
            .set_time_level(if simplify_log_format { Off } else { Error })
            .build(),
        std::io::stderr(),
    );
    let max_level = simplelog::SharedLogger::level(&stderr_logger);

    log::set_boxed_logger(Box::new(AmrvisLogger {
        stderr_logger,
        trace_boxes,
    }))?;
    log::set_max_level(max_level);
    log::debug!("logging installed at {max_level}");
    Ok(())
}

/// [`log::Log`] implementation that [`install()`] registers globally.
struct AmrvisLogger {
    stderr_logger: simplelog::WriteLogger<std::io::Stderr>,
    trace_boxes: bool,
}

impl log::Log for AmrvisLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        amrvis_base::util::log::standard_filter(metadata, self.trace_boxes)
            && self.stderr_logger.enabled(metadata)
    }

    fn log(&self, record: &log::Record<'_>) {
        if !amrvis_base::util::log::standard_filter(record.metadata(), self.trace_boxes) {
            return;
        }
        self.stderr_logger.log(record);
    }

    fn flush(&self) {
        self.stderr_logger.flush();
    }
}
