//! In-memory recording sink.

use std::fmt::Display;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::sink::LogSink;

/// Which sink method was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    Fatal,
    Fatalf,
    Error,
    Errorf,
    Warn,
    Warnf,
    Info,
    Infof,
}

/// One recorded sink invocation. Values are kept as their `Display` strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub call: Call,
    /// Template as received, for the `*f` calls.
    pub template: Option<String>,
    pub values: Vec<String>,
}

/// Sink that records calls instead of writing them. Fatal calls are
/// recorded and return normally.
#[derive(Debug, Default)]
pub struct CaptureSink {
    records: Mutex<Vec<Record>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far, in call order.
    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    pub fn last(&self) -> Option<Record> {
        self.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, call: Call, template: Option<&str>, values: &[&dyn Display]) {
        let record = Record {
            call,
            template: template.map(str::to_string),
            values: values.iter().map(|v| v.to_string()).collect(),
        };
        self.lock().push(record);
    }
}

impl LogSink for CaptureSink {
    fn fatal(&self, values: &[&dyn Display]) {
        self.push(Call::Fatal, None, values);
    }

    fn fatalf(&self, template: &str, values: &[&dyn Display]) {
        self.push(Call::Fatalf, Some(template), values);
    }

    fn error(&self, values: &[&dyn Display]) {
        self.push(Call::Error, None, values);
    }

    fn errorf(&self, template: &str, values: &[&dyn Display]) {
        self.push(Call::Errorf, Some(template), values);
    }

    fn warn(&self, values: &[&dyn Display]) {
        self.push(Call::Warn, None, values);
    }

    fn warnf(&self, template: &str, values: &[&dyn Display]) {
        self.push(Call::Warnf, Some(template), values);
    }

    fn info(&self, values: &[&dyn Display]) {
        self.push(Call::Info, None, values);
    }

    fn infof(&self, template: &str, values: &[&dyn Display]) {
        self.push(Call::Infof, Some(template), values);
    }
}
