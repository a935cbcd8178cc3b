use std::collections::VecDeque;

use super::event::GenerationEvent;
use super::metrics::{compute_stats, GenerationStats};

const MAX_EVENTS: usize = 10_000;

#[derive(Debug, Default)]
pub struct TelemetryRecorder {
    buffer: VecDeque<GenerationEvent>,
}

impl TelemetryRecorder {
    pub fn new() -> Self {
        Self {
            buffer: VecDeque::new(),
        }
    }

    /// Oldest events are dropped once the buffer is full.
    pub fn record(&mut self, event: GenerationEvent) {
        if self.buffer.len() >= MAX_EVENTS {
            self.buffer.pop_front();
        }
        self.buffer.push_back(event);
    }

    pub fn stats(&self) -> GenerationStats {
        compute_stats(&self.buffer)
    }

    pub fn events(&self) -> impl Iterator<Item = &GenerationEvent> {
        self.buffer.iter()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn capacity() -> usize {
        MAX_EVENTS
    }
}
