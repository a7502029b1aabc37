//! Main logger implementation
//!
//! A [`Logger`] is the whole logging context: routing resolved by `init`,
//! the stack-dump cutoff, the configured output, and the slot that carries a
//! captured fatal condition into `close`. The process-wide instance lives in
//! [`crate::global`]; independent instances are useful for tests and for
//! embedding.

use super::{
    config::LoggerConfig,
    destination::SharedDestination,
    error::{LoggerError, Result},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    router::RoutingTable,
    timestamp::TimestampFormat,
};
use crate::destinations::{StderrDestination, StdoutDestination};
use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use std::any::Any;
use std::backtrace::Backtrace;
use std::fmt;
use std::panic::{catch_unwind, resume_unwind, AssertUnwindSafe, Location};
use std::sync::Arc;

/// Panic payload captured by a recovery boundary
pub type FatalPayload = Box<dyn Any + Send + 'static>;

/// Exit status used by `critical`/`criticalf`
pub const CRITICAL_EXIT_CODE: i32 = 1;

struct LoggerState {
    routes: RoutingTable,
    stack_level: LogLevel,
    output: SharedDestination,
}

pub struct Logger {
    state: RwLock<Option<LoggerState>>,
    stdout: SharedDestination,
    /// Receives the logger's own diagnostics
    bootstrap: SharedDestination,
    fatal: Mutex<Option<FatalPayload>>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// An uninitialized logger bound to the process's stdout, reporting its
    /// own diagnostics on stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::with_destinations(
            Arc::new(StdoutDestination::new()),
            Arc::new(StderrDestination::new()),
        )
    }

    fn with_destinations(stdout: SharedDestination, bootstrap: SharedDestination) -> Self {
        Self {
            state: RwLock::new(None),
            stdout,
            bootstrap,
            fatal: Mutex::new(None),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Configure routing and mark the logger initialized.
    ///
    /// Levels at or above `stdout_level` go to standard output, levels at or
    /// above `output_level` go to `out` (unless `out` is standard output
    /// itself), and levels at or above `stack_level` append a stack trace
    /// to `out`.
    ///
    /// # Errors
    ///
    /// [`LoggerError::AlreadyInitialized`] if called again before `close`;
    /// the existing configuration is left untouched.
    pub fn init(
        &self,
        out: SharedDestination,
        stdout_level: LogLevel,
        output_level: LogLevel,
        stack_level: LogLevel,
        include_location: bool,
    ) -> Result<()> {
        let config = LoggerConfig::new()
            .with_stdout_level(stdout_level)
            .with_output_level(output_level)
            .with_stack_level(stack_level)
            .with_include_location(include_location);
        self.init_with_config(out, &config)
    }

    /// Same as [`Logger::init`], taking cutoffs and formatting from `config`
    pub fn init_with_config(&self, out: SharedDestination, config: &LoggerConfig) -> Result<()> {
        let mut state = self.state.write();
        if state.is_some() {
            return Err(LoggerError::AlreadyInitialized);
        }

        let routes = RoutingTable::resolve(
            &self.stdout,
            &out,
            &config.thresholds(),
            config.effective_formatter(),
        );
        *state = Some(LoggerState {
            routes,
            stack_level: config.stack_level,
            output: out,
        });
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.state.read().is_some()
    }

    /// Tear the logger down.
    ///
    /// A fatal condition left by [`Logger::record_fatal`] is logged at
    /// Critical first (without exiting), then the logger is marked
    /// uninitialized, the output is closed if it supports closing (errors are
    /// ignored), and finally the fatal condition is re-raised as a panic.
    ///
    /// # Errors
    ///
    /// [`LoggerError::NotInitialized`] if `init` has not been called; a
    /// recorded fatal condition stays in place in that case.
    #[track_caller]
    pub fn close(&self) -> Result<()> {
        if !self.is_initialized() {
            return Err(LoggerError::NotInitialized);
        }

        let fatal = self.fatal.lock().take();
        match fatal {
            Some(payload) => self.teardown_fatal(payload, Location::caller()),
            None => {
                self.teardown();
                Ok(())
            }
        }
    }

    /// Run `f` under a recovery boundary, then `close`.
    ///
    /// A panic escaping `f` is logged at Critical, the logger is torn down,
    /// and the panic resumes. If the logger was never initialized the panic
    /// resumes untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use logz::destinations::MemoryDestination;
    /// use logz::{LogLevel, Logger};
    /// use std::sync::Arc;
    ///
    /// let logger = Logger::new();
    /// let out = Arc::new(MemoryDestination::new());
    /// logger
    ///     .init(out.clone(), LogLevel::Critical, LogLevel::Info, LogLevel::Critical, false)
    ///     .unwrap();
    ///
    /// let answer = logger.run(|| {
    ///     logger.info("working");
    ///     42
    /// });
    ///
    /// assert_eq!(answer.unwrap(), 42);
    /// assert!(!logger.is_initialized());
    /// assert!(out.contents().contains("working"));
    /// ```
    #[track_caller]
    pub fn run<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce() -> R,
    {
        let location = Location::caller();
        match catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => {
                self.close()?;
                Ok(value)
            }
            Err(payload) => {
                if !self.is_initialized() {
                    resume_unwind(payload);
                }
                self.teardown_fatal(payload, location)
            }
        }
    }

    /// Park a captured panic payload for the next `close` to log and re-raise
    pub fn record_fatal(&self, payload: FatalPayload) {
        *self.fatal.lock() = Some(payload);
    }

    pub fn has_fatal(&self) -> bool {
        self.fatal.lock().is_some()
    }

    fn teardown_fatal(&self, payload: FatalPayload, location: &'static Location<'static>) -> ! {
        let message = describe_panic(&*payload);
        self.emit(LogLevel::Critical, location, &message);
        self.teardown();
        resume_unwind(payload)
    }

    fn teardown(&self) {
        let state = self.state.write().take();
        if let Some(state) = state {
            let _ = state.output.flush();
            let _ = self.stdout.flush();
            let _ = state.output.close();
        }
    }

    /// Write one record at `level`.
    ///
    /// Never fails: an uninitialized logger prints a notice to the bootstrap
    /// destination, a disabled level is a no-op, and destination errors are
    /// swallowed.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        self.emit(level, Location::caller(), &message);
    }

    #[track_caller]
    pub fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.emit(level, Location::caller(), &args);
    }

    #[track_caller]
    pub fn trace(&self, message: impl fmt::Display) {
        self.emit(LogLevel::Trace, Location::caller(), &message);
    }

    #[track_caller]
    pub fn tracef(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Trace, Location::caller(), &args);
    }

    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.emit(LogLevel::Info, Location::caller(), &message);
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Info, Location::caller(), &args);
    }

    #[track_caller]
    pub fn warning(&self, message: impl fmt::Display) {
        self.emit(LogLevel::Warning, Location::caller(), &message);
    }

    #[track_caller]
    pub fn warningf(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Warning, Location::caller(), &args);
    }

    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.emit(LogLevel::Error, Location::caller(), &message);
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Error, Location::caller(), &args);
    }

    /// Log at Critical, then terminate the process with a non-zero status.
    ///
    /// **Once initialized, this never returns.** Do not use it on paths where
    /// failing a single request or task is acceptable. An uninitialized
    /// logger only prints its notice and returns, like every other call.
    #[track_caller]
    pub fn critical(&self, message: impl fmt::Display) {
        if self.emit(LogLevel::Critical, Location::caller(), &message) {
            self.exit()
        }
    }

    /// Formatted variant of [`Logger::critical`]
    #[track_caller]
    pub fn criticalf(&self, args: fmt::Arguments<'_>) {
        if self.emit(LogLevel::Critical, Location::caller(), &args) {
            self.exit()
        }
    }

    /// Map a level name to a [`LogLevel`].
    ///
    /// Recognises `trace`, `info`, `information`, `warning`, `warn`, `error`
    /// and `fatal` (case-sensitive). Anything else is reported on the
    /// bootstrap destination and yields `Trace`.
    pub fn get_log_level(&self, name: &str) -> LogLevel {
        match name.parse() {
            Ok(level) => level,
            Err(e) => {
                self.diagnostic(&e);
                LogLevel::Trace
            }
        }
    }

    /// Whether a record at `level` would reach any destination
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.state
            .read()
            .as_ref()
            .is_some_and(|state| state.routes.is_enabled(level))
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        let output = self
            .state
            .read()
            .as_ref()
            .map(|state| Arc::clone(&state.output));
        if let Some(output) = output {
            output.flush()?;
        }
        self.stdout.flush()?;
        Ok(())
    }

    /// Returns `false` when the logger is not initialized
    fn emit(
        &self,
        level: LogLevel,
        location: &'static Location<'static>,
        message: &dyn fmt::Display,
    ) -> bool {
        // Clone what we need so no lock is held while destinations block
        let resolved = self.state.read().as_ref().map(|state| {
            (
                state.routes.route(level).cloned(),
                level >= state.stack_level,
                Arc::clone(&state.output),
            )
        });

        let Some((route, dump_stack, output)) = resolved else {
            self.metrics.record_uninitialized();
            self.diagnostic(&LoggerError::NotInitialized);
            return false;
        };

        match route {
            Some(route) => {
                let message = message.to_string();
                let result = catch_unwind(AssertUnwindSafe(|| route.output(location, &message)));
                if matches!(result, Ok(Ok(_))) {
                    self.metrics.record_written();
                } else {
                    self.metrics.record_write_failure();
                }
            }
            None => {
                self.metrics.record_suppressed();
            }
        }

        if dump_stack {
            let trace = format!("{}\n", Backtrace::force_capture());
            let _ = catch_unwind(AssertUnwindSafe(|| output.write(trace.as_bytes())));
            self.metrics.record_stack_dump();
        }
        true
    }

    fn diagnostic(&self, message: &dyn fmt::Display) {
        let line = format!(
            "{} {}\n",
            TimestampFormat::Standard.format(&Utc::now()),
            message
        );
        let _ = catch_unwind(AssertUnwindSafe(|| self.bootstrap.write(line.as_bytes())));
    }

    fn exit(&self) -> ! {
        let _ = self.flush();
        std::process::exit(CRITICAL_EXIT_CODE)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        // Final flush so nothing written through a buffered sink is lost
        if let Err(e) = self.flush() {
            self.diagnostic(&e);
        }
    }
}

fn describe_panic(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(e) = payload.downcast_ref::<LoggerError>() {
        e.to_string()
    } else {
        "Unknown panic".to_string()
    }
}

/// Builder for constructing a [`Logger`] with non-default console streams
///
/// # Example
/// ```
/// use logz::destinations::MemoryDestination;
/// use logz::Logger;
/// use std::sync::Arc;
///
/// let console = Arc::new(MemoryDestination::new());
/// let logger = Logger::builder()
///     .stdout(console.clone())
///     .bootstrap(console.clone())
///     .build();
///
/// logger.info("not yet");
/// assert!(console.contents().contains("Logz is not initialized"));
/// ```
pub struct LoggerBuilder {
    stdout: SharedDestination,
    bootstrap: SharedDestination,
}

impl LoggerBuilder {
    /// Create a new builder with the process's stdout and stderr
    pub fn new() -> Self {
        Self {
            stdout: Arc::new(StdoutDestination::new()),
            bootstrap: Arc::new(StderrDestination::new()),
        }
    }

    /// Destination that stands in for standard output
    #[must_use = "builder methods return a new value"]
    pub fn stdout(mut self, stdout: SharedDestination) -> Self {
        self.stdout = stdout;
        self
    }

    /// Destination for the logger's own diagnostics
    #[must_use = "builder methods return a new value"]
    pub fn bootstrap(mut self, bootstrap: SharedDestination) -> Self {
        self.bootstrap = bootstrap;
        self
    }

    pub fn build(self) -> Logger {
        Logger::with_destinations(self.stdout, self.bootstrap)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FormatterConfig;
    use crate::destinations::{MemoryDestination, WriterDestination};

    struct Harness {
        logger: Logger,
        stdout: Arc<MemoryDestination>,
        bootstrap: Arc<MemoryDestination>,
        out: Arc<MemoryDestination>,
    }

    fn harness() -> Harness {
        let stdout = Arc::new(MemoryDestination::new());
        let bootstrap = Arc::new(MemoryDestination::new());
        let logger = Logger::builder()
            .stdout(stdout.clone())
            .bootstrap(bootstrap.clone())
            .build();
        Harness {
            logger,
            stdout,
            bootstrap,
            out: Arc::new(MemoryDestination::new()),
        }
    }

    #[test]
    fn test_init_twice_fails_and_keeps_first_config() {
        let h = harness();
        h.logger
            .init(h.out.clone(), LogLevel::Critical, LogLevel::Info, LogLevel::Critical, false)
            .unwrap();

        let other = Arc::new(MemoryDestination::new());
        let result = h.logger.init(
            other.clone(),
            LogLevel::Trace,
            LogLevel::Trace,
            LogLevel::Trace,
            true,
        );
        assert!(matches!(result, Err(LoggerError::AlreadyInitialized)));

        h.logger.info("still routed");
        h.logger.trace("still hidden");
        assert!(h.out.contents().contains("still routed"));
        assert!(!h.out.contents().contains("still hidden"));
        assert!(other.is_empty());
        assert!(h.stdout.is_empty());
    }

    #[test]
    fn test_close_before_init() {
        let h = harness();
        assert!(matches!(h.logger.close(), Err(LoggerError::NotInitialized)));
    }

    #[test]
    fn test_close_then_emit_falls_back() {
        let h = harness();
        h.logger
            .init(h.out.clone(), LogLevel::Trace, LogLevel::Trace, LogLevel::Critical, false)
            .unwrap();
        h.logger.close().unwrap();
        assert!(!h.logger.is_initialized());

        h.logger.warning("after close");
        assert!(h.out.is_empty());
        assert!(h.stdout.is_empty());
        assert!(h.bootstrap.contents().contains("Logz is not initialized"));
        assert_eq!(h.logger.metrics().uninitialized_calls(), 1);

        // Closing again is an error, re-init works
        assert!(matches!(h.logger.close(), Err(LoggerError::NotInitialized)));
        assert!(h
            .logger
            .init(h.out.clone(), LogLevel::Trace, LogLevel::Trace, LogLevel::Critical, false)
            .is_ok());
    }

    #[test]
    fn test_close_closes_output() {
        let h = harness();
        let out = Arc::new(WriterDestination::new(Vec::new()).closable());
        h.logger
            .init(out.clone(), LogLevel::Critical, LogLevel::Trace, LogLevel::Critical, false)
            .unwrap();
        h.logger.close().unwrap();
        assert!(out.is_closed());
    }

    #[test]
    fn test_emit_while_uninitialized() {
        let h = harness();
        h.logger.info("nobody listens");
        h.logger.logf(LogLevel::Error, format_args!("code {}", 7));

        assert!(h.stdout.is_empty());
        assert_eq!(h.bootstrap.lines().len(), 2);
        assert!(h.bootstrap.lines()[0].ends_with(" Logz is not initialized"));
    }

    #[test]
    fn test_critical_while_uninitialized_returns() {
        let h = harness();
        h.logger.critical("nobody listens");
        h.logger.criticalf(format_args!("code {}", 9));

        assert!(h.stdout.is_empty());
        assert_eq!(h.bootstrap.lines().len(), 2);
        assert!(h.bootstrap.contents().contains("Logz is not initialized"));
        assert_eq!(h.logger.metrics().uninitialized_calls(), 2);
    }

    #[test]
    fn test_routing_end_to_end() {
        let h = harness();
        h.logger
            .init(h.out.clone(), LogLevel::Info, LogLevel::Warning, LogLevel::Error, false)
            .unwrap();

        h.logger.trace("t");
        assert!(h.stdout.is_empty());
        assert!(h.out.is_empty());

        h.logger.info("i");
        assert!(h.stdout.contents().contains(" INFO| i"));
        assert!(h.out.is_empty());

        h.logger.warning("w");
        assert!(h.out.contents().contains(" WARN| w"));
        assert!(h.stdout.contents().contains(" WARN| w"));

        let before = h.out.contents().len();
        h.logger.error("e");
        let tail = h.out.contents()[before..].to_string();
        assert!(tail.contains("ERROR| e\n"));
        // Stack trace follows the record on the raw output only
        assert!(tail.lines().count() >= 2);
        assert_eq!(h.stdout.lines().len(), 3);

        let metrics = h.logger.metrics();
        assert_eq!(metrics.records_suppressed(), 1);
        assert_eq!(metrics.records_written(), 3);
        assert_eq!(metrics.stack_dumps(), 1);
    }

    #[test]
    fn test_stack_dump_goes_to_output_even_when_level_disabled() {
        let h = harness();
        h.logger
            .init(h.out.clone(), LogLevel::Critical, LogLevel::Critical, LogLevel::Trace, false)
            .unwrap();

        h.logger.trace("invisible");
        assert!(!h.out.contents().contains("invisible"));
        assert!(!h.out.is_empty());
        assert!(h.stdout.is_empty());
        assert_eq!(h.logger.metrics().stack_dumps(), 1);
    }

    #[test]
    fn test_caller_location() {
        let h = harness();
        let config = LoggerConfig::new()
            .with_stdout_level(LogLevel::Critical)
            .with_output_level(LogLevel::Trace)
            .with_include_location(true)
            .with_formatter(FormatterConfig::new().without_timestamp());
        h.logger.init_with_config(h.out.clone(), &config).unwrap();

        let line = line!() + 1;
        h.logger.infof(format_args!("at {}", "here"));

        assert_eq!(h.out.contents(), format!(" INFO|logger.rs:{}: at here\n", line));
    }

    #[test]
    fn test_generic_and_specific_entry_points_agree() {
        let h = harness();
        let config = LoggerConfig::new()
            .with_stdout_level(LogLevel::Critical)
            .with_output_level(LogLevel::Trace)
            .with_formatter(FormatterConfig::new().without_timestamp());
        h.logger.init_with_config(h.out.clone(), &config).unwrap();

        h.logger.log(LogLevel::Warning, "a");
        h.logger.warning("a");
        h.logger.logf(LogLevel::Warning, format_args!("{}", "a"));
        h.logger.warningf(format_args!("{}", "a"));

        assert_eq!(h.out.lines(), vec![" WARN| a"; 4]);
    }

    #[test]
    fn test_get_log_level() {
        let h = harness();
        assert_eq!(h.logger.get_log_level("warn"), LogLevel::Warning);
        assert_eq!(h.logger.get_log_level("warning"), LogLevel::Warning);
        assert_eq!(h.logger.get_log_level("fatal"), LogLevel::Critical);
        assert!(h.bootstrap.is_empty());

        assert_eq!(h.logger.get_log_level("bogus"), LogLevel::Trace);
        assert!(h.bootstrap.contents().contains("Invalid LogLevel bogus"));
    }

    #[test]
    fn test_run_without_panic_closes() {
        let h = harness();
        h.logger
            .init(h.out.clone(), LogLevel::Critical, LogLevel::Trace, LogLevel::Critical, false)
            .unwrap();

        let value = h.logger.run(|| 7).unwrap();
        assert_eq!(value, 7);
        assert!(!h.logger.is_initialized());
    }

    #[test]
    fn test_run_captures_logs_and_reraises_panic() {
        let h = harness();
        let seen = Arc::new(MemoryDestination::new());
        let config = LoggerConfig::new()
            .with_stdout_level(LogLevel::Critical)
            .with_output_level(LogLevel::Trace);
        h.logger.init_with_config(seen.clone(), &config).unwrap();

        let result = catch_unwind(AssertUnwindSafe(|| {
            h.logger.run(|| {
                panic!("boom");
            })
        }));

        let payload = result.unwrap_err();
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"boom"));
        assert!(seen.contents().contains("FATAL| boom"));
        assert!(h.stdout.contents().contains("FATAL| boom"));
        assert!(!h.logger.is_initialized());
    }

    #[test]
    fn test_recorded_fatal_reraised_after_teardown() {
        let h = harness();
        let out = Arc::new(WriterDestination::new(Vec::new()).closable());
        h.logger
            .init(out.clone(), LogLevel::Critical, LogLevel::Trace, LogLevel::Critical, false)
            .unwrap();

        h.logger
            .record_fatal(Box::new(LoggerError::fatal("worker died")));
        assert!(h.logger.has_fatal());

        let result = catch_unwind(AssertUnwindSafe(|| h.logger.close()));
        assert!(result.is_err());
        assert!(out.is_closed());
        assert!(!h.logger.has_fatal());
        assert!(h.stdout.contents().contains("Fatal condition: worker died"));
    }

    #[test]
    fn test_run_uninitialized_panic_passes_through() {
        let h = harness();
        let result = catch_unwind(AssertUnwindSafe(|| {
            h.logger.run(|| {
                panic!("early");
            })
        }));
        assert!(result.is_err());
        assert!(h.bootstrap.is_empty());
    }

    #[test]
    fn test_is_enabled() {
        let h = harness();
        assert!(!h.logger.is_enabled(LogLevel::Critical));
        h.logger
            .init(h.out.clone(), LogLevel::Error, LogLevel::Warning, LogLevel::Critical, false)
            .unwrap();
        assert!(!h.logger.is_enabled(LogLevel::Info));
        assert!(h.logger.is_enabled(LogLevel::Warning));
    }
}
