use serde::{Deserialize, Serialize};

/// Diagnostic trace of randomization decisions, drained by the front end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    BpCostRolled {
        name: String,
        before: i64,
        after: i64,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
