//! Test doubles and helpers shared by whitebox tests.
//!
//! Provides a manually advanced clock, a recording submitter with scripted
//! responses, and a buffer-to-string helper for rendering assertions.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::model::{SchemaCatalog, SegmentPayload, SubmitError};
use crate::state::{Clock, SegmentBuilder};
use crate::submit::SegmentSubmitter;

/// Clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Scripted collaborator behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Respond with this HTTP status.
    Status(u16),
    /// Fail before any response arrives.
    TransportFailure,
}

/// Submitter that records every payload and answers with a scripted reply.
#[derive(Clone)]
pub struct RecordingSubmitter {
    calls: Rc<RefCell<Vec<SegmentPayload>>>,
    reply: Rc<Cell<Reply>>,
}

impl RecordingSubmitter {
    pub fn new(reply: Reply) -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
            reply: Rc::new(Cell::new(reply)),
        }
    }

    pub fn set_reply(&self, reply: Reply) {
        self.reply.set(reply);
    }

    pub fn calls(&self) -> Vec<SegmentPayload> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl SegmentSubmitter for RecordingSubmitter {
    fn submit(&self, payload: &SegmentPayload) -> Result<(), SubmitError> {
        self.calls.borrow_mut().push(payload.clone());
        match self.reply.get() {
            Reply::Status(code) if (200..300).contains(&code) => Ok(()),
            Reply::Status(code) => Err(SubmitError::Status(code)),
            Reply::TransportFailure => Err(SubmitError::Transport(transport_error())),
        }
    }
}

/// A genuine `reqwest::Error`, produced without touching the network.
fn transport_error() -> reqwest::Error {
    reqwest::blocking::Client::new()
        .post("not a url")
        .build()
        .expect_err("invalid URL must fail to build")
}

/// Builder wired to the given submitter and clock.
pub fn builder_with(submitter: &RecordingSubmitter, clock: &ManualClock) -> SegmentBuilder {
    SegmentBuilder::new(SchemaCatalog::default(), Box::new(submitter.clone()))
        .with_clock(Box::new(clock.clone()))
}

/// Convert a ratatui buffer to text, one line per row, trailing blanks trimmed.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}
