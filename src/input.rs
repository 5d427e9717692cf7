//! Blocking input sources for the main loop.
//!
//! The engine only needs one primitive from the terminal driver: "block
//! until the next event arrives". Abstracting it behind [`EventSource`]
//! lets the whole editor run headlessly against scripted input in tests.

use std::collections::VecDeque;

use anyhow::{anyhow, Result};
use ratatui::crossterm::event::{self, Event};

/// Blocking "read the next terminal event" primitive.
pub trait EventSource {
    fn next(&mut self) -> Result<Event>;
}

/// The real terminal: blocks on crossterm until a key, resize, or other
/// event arrives.
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next(&mut self) -> Result<Event> {
        Ok(event::read()?)
    }
}

/// A predetermined sequence of events, consumed front to back. Running out
/// of events is an error rather than a hang.
#[derive(Default)]
pub struct ScriptedEvents {
    queue: VecDeque<Event>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            queue: events.into_iter().collect(),
        }
    }

    pub fn push(&mut self, event: Event) {
        self.queue.push_back(event);
    }
}

impl EventSource for ScriptedEvents {
    fn next(&mut self) -> Result<Event> {
        self.queue
            .pop_front()
            .ok_or_else(|| anyhow!("scripted input exhausted"))
    }
}
