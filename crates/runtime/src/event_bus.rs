use crate::frame::Frame;

/// Event kinds emitted by the viewer.
pub const KIND_DATASET: &str = "dataset";
pub const KIND_SELECTION: &str = "selection";
pub const KIND_BACKGROUND: &str = "background";

/// Structured trace event.
///
/// Selection changes, dataset loads and background toggles are recorded here
/// so the app can show what happened without the core crates printing
/// anything themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub frame_index: u64,
    pub kind: &'static str,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct EventBus {
    events: Vec<Event>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, frame: Frame, kind: &'static str, message: impl Into<String>) {
        self.events.push(Event {
            frame_index: frame.index,
            kind,
            message: message.into(),
        });
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Most recent event of the given kind, if any.
    pub fn latest_of_kind(&self, kind: &str) -> Option<&Event> {
        self.events.iter().rev().find(|e| e.kind == kind)
    }

    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}
