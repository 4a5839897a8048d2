//! Observer events emitted during a pass
//!
//! The core never talks to a UI directly. It pushes one-way events into an
//! `EventSink`, which may be a channel drained on another thread, a set of
//! callbacks, or nothing at all.

use std::fmt;
use std::sync::mpsc::Sender;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// A single notification from the rename worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameEvent {
    /// Free-text log line
    Log { level: LogLevel, message: String },
    /// Entries processed so far out of the total planned for this pass
    Progress { done: usize, total: usize },
    /// Work started on a group; an empty code means no group is active
    GroupChanged(String),
}

impl fmt::Display for RenameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameEvent::Log { level: LogLevel::Info, message } => write!(f, "{message}"),
            RenameEvent::Log { level: LogLevel::Warn, message } => write!(f, "[WARN] {message}"),
            RenameEvent::Log { level: LogLevel::Error, message } => write!(f, "[ERROR] {message}"),
            RenameEvent::Progress { done, total } => write!(f, "{done}/{total}"),
            RenameEvent::GroupChanged(code) if code.is_empty() => write!(f, "–"),
            RenameEvent::GroupChanged(code) => write!(f, "{code}"),
        }
    }
}

/// Receiver of worker events
///
/// Delivery is fire-and-forget: implementations must not block and the
/// worker ignores whether anyone is still listening.
pub trait EventSink {
    fn emit(&self, event: RenameEvent);
}

/// Discards every event
impl EventSink for () {
    fn emit(&self, _event: RenameEvent) {}
}

/// Queue drained by the caller on its own schedule
impl EventSink for Sender<RenameEvent> {
    fn emit(&self, event: RenameEvent) {
        // Receiver gone means nobody is watching; the pass still completes.
        let _ = self.send(event);
    }
}

type LogFn = Box<dyn Fn(&str) + Send>;
type ProgressFn = Box<dyn Fn(usize, usize) + Send>;
type GroupFn = Box<dyn Fn(&str) + Send>;

/// Three optional callbacks: log line, progress pair, current group label
#[derive(Default)]
pub struct Callbacks {
    on_log: Option<LogFn>,
    on_progress: Option<ProgressFn>,
    on_group_change: Option<GroupFn>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_log(mut self, f: impl Fn(&str) + Send + 'static) -> Self {
        self.on_log = Some(Box::new(f));
        self
    }

    pub fn on_progress(mut self, f: impl Fn(usize, usize) + Send + 'static) -> Self {
        self.on_progress = Some(Box::new(f));
        self
    }

    pub fn on_group_change(mut self, f: impl Fn(&str) + Send + 'static) -> Self {
        self.on_group_change = Some(Box::new(f));
        self
    }
}

impl EventSink for Callbacks {
    fn emit(&self, event: RenameEvent) {
        match &event {
            RenameEvent::Log { .. } => {
                if let Some(f) = &self.on_log {
                    f(&event.to_string());
                }
            }
            RenameEvent::Progress { done, total } => {
                if let Some(f) = &self.on_progress {
                    f(*done, *total);
                }
            }
            RenameEvent::GroupChanged(code) => {
                if let Some(f) = &self.on_group_change {
                    f(code);
                }
            }
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_log", &self.on_log.is_some())
            .field("on_progress", &self.on_progress.is_some())
            .field("on_group_change", &self.on_group_change.is_some())
            .finish()
    }
}

/// Writes every event to both `tracing` and the sink
pub struct Reporter<'a> {
    sink: &'a dyn EventSink,
}

impl<'a> Reporter<'a> {
    pub fn new(sink: &'a dyn EventSink) -> Self {
        Reporter { sink }
    }

    pub fn info(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("{}", message);
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{}", message);
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!("{}", message);
        self.log(LogLevel::Error, message);
    }

    pub fn progress(&self, done: usize, total: usize) {
        tracing::debug!(done, total, "progress");
        self.sink.emit(RenameEvent::Progress { done, total });
    }

    pub fn group(&self, code: &str) {
        self.sink.emit(RenameEvent::GroupChanged(code.to_string()));
    }

    fn log(&self, level: LogLevel, message: String) {
        self.sink.emit(RenameEvent::Log { level, message });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_channel_sink_receives_events_in_order() {
        let (tx, rx) = mpsc::channel();
        let reporter = Reporter::new(&tx);

        reporter.info("scanning");
        reporter.group("415445-101");
        reporter.progress(1, 3);
        reporter.warn("exists");

        let events: Vec<RenameEvent> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                RenameEvent::Log { level: LogLevel::Info, message: "scanning".into() },
                RenameEvent::GroupChanged("415445-101".into()),
                RenameEvent::Progress { done: 1, total: 3 },
                RenameEvent::Log { level: LogLevel::Warn, message: "exists".into() },
            ]
        );
    }

    #[test]
    fn test_dropped_receiver_is_ignored() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        Reporter::new(&tx).error("nobody listening");
    }

    #[test]
    fn test_callbacks_dispatch_by_kind() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let groups = Arc::new(Mutex::new(Vec::new()));
        let lines_cb = Arc::clone(&lines);
        let groups_cb = Arc::clone(&groups);

        let callbacks = Callbacks::new()
            .on_log(move |line| lines_cb.lock().unwrap().push(line.to_string()))
            .on_group_change(move |code| groups_cb.lock().unwrap().push(code.to_string()));
        let reporter = Reporter::new(&callbacks);

        reporter.warn("123456-00.jpg already exists");
        reporter.progress(1, 1);
        reporter.group("");

        assert_eq!(*lines.lock().unwrap(), vec!["[WARN] 123456-00.jpg already exists"]);
        assert_eq!(*groups.lock().unwrap(), vec![String::new()]);
    }
}
