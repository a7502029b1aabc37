//! Per-level routing
//!
//! Resolves, once per `init`, which destination each severity writes to.

use super::destination::{same_destination, SharedDestination};
use super::log_level::LogLevel;
use super::timestamp::FormatterConfig;
use crate::destinations::compose;
use chrono::Utc;
use std::io;
use std::panic::Location;
use std::sync::Arc;

/// The three cutoffs that drive routing and stack dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// Levels at or above this go to standard output
    pub stdout: LogLevel,
    /// Levels at or above this go to the configured output
    pub output: LogLevel,
    /// Levels at or above this append a stack trace to the configured output
    pub stack: LogLevel,
}

impl Thresholds {
    pub fn new(stdout: LogLevel, output: LogLevel, stack: LogLevel) -> Self {
        Self {
            stdout,
            output,
            stack,
        }
    }
}

/// Where one severity's records end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Stdout,
    Output,
    Both,
}

impl Target {
    /// Decide the target for `level`; `None` means the level is disabled.
    ///
    /// When `output_is_stdout`, the output leg is skipped only for levels that
    /// already go to stdout, so a record reaches stdout once and is never lost.
    pub fn select(level: LogLevel, thresholds: &Thresholds, output_is_stdout: bool) -> Option<Self> {
        let to_stdout = level >= thresholds.stdout;
        let to_output = level >= thresholds.output && !(to_stdout && output_is_stdout);

        match (to_stdout, to_output) {
            (true, true) => Some(Target::Both),
            (true, false) => Some(Target::Stdout),
            (false, true) => Some(Target::Output),
            (false, false) => None,
        }
    }
}

/// A resolved, enabled severity: its writer and how to format for it.
#[derive(Clone)]
pub struct Route {
    level: LogLevel,
    target: Target,
    writer: SharedDestination,
    formatter: Arc<FormatterConfig>,
}

impl Route {
    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn writer(&self) -> &SharedDestination {
        &self.writer
    }

    /// Format `message` and write it as one line
    pub fn output(&self, location: &Location<'_>, message: &str) -> io::Result<usize> {
        let line = self
            .formatter
            .render(&Utc::now(), self.level.prefix(), Some(location), message);
        self.writer.write(line.as_bytes())
    }
}

/// Immutable per-severity routing, built once by `init`.
#[derive(Clone)]
pub struct RoutingTable {
    routes: [Option<Route>; 5],
}

impl RoutingTable {
    /// Resolve every severity against `stdout` and the configured `output`.
    ///
    /// The output counts as standard output when it is the same shared
    /// instance as `stdout` or reports itself as stdout.
    pub fn resolve(
        stdout: &SharedDestination,
        output: &SharedDestination,
        thresholds: &Thresholds,
        formatter: FormatterConfig,
    ) -> Self {
        let output_is_stdout = same_destination(stdout, output) || output.is_stdout();
        let formatter = Arc::new(formatter);

        let routes = LogLevel::ALL.map(|level| {
            Target::select(level, thresholds, output_is_stdout).map(|target| {
                let writer = match target {
                    Target::Stdout => Arc::clone(stdout),
                    Target::Output => Arc::clone(output),
                    Target::Both => compose([Arc::clone(stdout), Arc::clone(output)]),
                };
                Route {
                    level,
                    target,
                    writer,
                    formatter: Arc::clone(&formatter),
                }
            })
        });

        Self { routes }
    }

    pub fn route(&self, level: LogLevel) -> Option<&Route> {
        self.routes[level.index()].as_ref()
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.route(level).is_some()
    }

    /// Every distinct writer, for flushing
    pub fn writers(&self) -> impl Iterator<Item = &SharedDestination> {
        self.routes.iter().flatten().map(Route::writer)
    }
}
