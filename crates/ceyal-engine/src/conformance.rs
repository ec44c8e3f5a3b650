use ceyal_types::EventLogRecord;
use std::collections::HashMap;

// NOTE: Conformance Status
//
// No process model ships with ceyal. `conformance_check` therefore always
// reports the log as conformant; treat that verdict as "not checked", never as
// a validated guarantee. Real control-flow rules plug in through
// `ProcessModel` and are looked up by name in `ProcessModels`.

/// Control-flow rules a trace of event names can be checked against
pub trait ProcessModel: Send + Sync {
    /// Name under which the model is registered (the expected process id)
    fn name(&self) -> &str;

    /// Whether the observed sequence of event names follows this model
    fn conforms(&self, trace: &[&str]) -> bool;
}

/// Fallback model: accepts every trace.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeConformant;

impl ProcessModel for AssumeConformant {
    fn name(&self) -> &str {
        "assume-conformant"
    }

    fn conforms(&self, _trace: &[&str]) -> bool {
        true
    }
}

/// Registry of process models keyed by name.
#[derive(Default)]
pub struct ProcessModels {
    models: HashMap<String, Box<dyn ProcessModel>>,
}

impl ProcessModels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model under its own name, returning any model it replaces
    pub fn register(&mut self, model: Box<dyn ProcessModel>) -> Option<Box<dyn ProcessModel>> {
        self.models.insert(model.name().to_string(), model)
    }

    pub fn get(&self, name: &str) -> Option<&dyn ProcessModel> {
        self.models.get(name).map(|model| &**model)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Check the log's event-name sequence against `expected_process`.
    ///
    /// Unknown process names fall back to [`AssumeConformant`].
    pub fn check(&self, log: &[EventLogRecord], expected_process: &str) -> bool {
        let trace: Vec<&str> = log.iter().map(EventLogRecord::event_name).collect();

        match self.get(expected_process) {
            Some(model) => model.conforms(&trace),
            None => {
                tracing::debug!(
                    expected_process,
                    "no process model registered; assuming conformance"
                );
                AssumeConformant.conforms(&trace)
            }
        }
    }
}

/// Conformance verdict for `log` against the process named `expected_process`.
///
/// Always `true` until a process model is supplied; use
/// [`ProcessModels::check`] with registered models for a real verdict.
pub fn conformance_check(log: &[EventLogRecord], expected_process: &str) -> bool {
    ProcessModels::new().check(log, expected_process)
}
