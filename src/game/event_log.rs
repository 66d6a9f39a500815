//! Event log.
//!
//! Messages queued during a turn and shown once by the next display cycle.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct EventLog {
    messages: Vec<String>,
}

impl EventLog {
    pub fn new() -> Self {
        Self { messages: Vec::new() }
    }

    /// Append a message. Empty strings are kept and render as a blank line.
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Take every pending message in push order, leaving the log empty.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_keeps_order_and_empties() {
        let mut log = EventLog::new();
        log.push("first");
        log.push("");
        log.push("first");

        assert_eq!(log.drain(), vec!["first", "", "first"]);
        assert!(log.is_empty());
        assert!(log.drain().is_empty());
    }
}
