//! The mock transmission medium.
//!
//! A first-in-first-out queue of text payloads stands in for the real network
//! link. It is the sole storage in the system: unbounded, in-memory, gone when
//! the process exits. Both endpoints of the link share one queue, which works
//! because the exchange is strictly turn-based (one producer and one consumer
//! operating in alternation).
//!
//! # Blocking
//!
//! The original's receive blocks until an item is available. With a single
//! thread of control a blocking pop could only deadlock, so pulling from an
//! empty queue is surfaced as `Error::MediumEmpty` instead.

use crate::error::{Error, Result};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// The in-memory FIFO link between the two endpoints.
#[derive(Debug, Default)]
pub struct Medium {
    queue: VecDeque<String>,

    // Statistics
    payloads_sent: u64,
    payloads_received: u64,
    bytes_sent: u64,
    peak_depth: usize,
}

impl Medium {
    /// Create an empty medium.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a payload to the tail of the queue.
    pub fn send(&mut self, payload: String) {
        self.payloads_sent += 1;
        self.bytes_sent += payload.len() as u64;

        self.queue.push_back(payload);
        self.peak_depth = self.peak_depth.max(self.queue.len());
    }

    /// Remove and return the payload at the head of the queue.
    ///
    /// # Errors
    /// `Error::MediumEmpty` if nothing is in flight.
    pub fn receive(&mut self) -> Result<String> {
        let payload = self.queue.pop_front().ok_or(Error::MediumEmpty)?;
        self.payloads_received += 1;
        Ok(payload)
    }

    /// Number of payloads currently in flight.
    pub fn depth(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is in flight.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Transfer statistics observed so far.
    pub fn stats(&self) -> MediumStats {
        MediumStats {
            payloads_sent: self.payloads_sent,
            payloads_received: self.payloads_received,
            bytes_sent: self.bytes_sent,
            peak_depth: self.peak_depth,
        }
    }
}

/// Statistics about traffic through the mock medium.
#[derive(Debug, Clone, Copy)]
pub struct MediumStats {
    /// Payloads pushed onto the queue
    pub payloads_sent: u64,

    /// Payloads pulled off the queue
    pub payloads_received: u64,

    /// Total bytes pushed onto the queue
    pub bytes_sent: u64,

    /// Highest queue depth observed
    pub peak_depth: usize,
}

impl MediumStats {
    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("=== Transfer Summary ===");
        println!("Payloads sent: {}", self.payloads_sent);
        println!("Payloads received: {}", self.payloads_received);
        println!("Bytes on the wire: {}", self.bytes_sent);
        println!("Peak queue depth: {}", self.peak_depth);
        println!();
    }
}

/// Single-threaded shared handle to the medium.
pub type SharedMedium = Rc<RefCell<Medium>>;

/// Create a shared medium handle.
pub fn shared() -> SharedMedium {
    Rc::new(RefCell::new(Medium::new()))
}
