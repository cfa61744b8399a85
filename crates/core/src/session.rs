//! Session layer: the boolean gate.
//!
//! The one stateful stage. While the session is inactive, `send` and
//! `receive` forward nothing and emit nothing. `start_session` opens the gate
//! once; there is no stop or teardown, and the flag is never reset.

use crate::error::Result;
use crate::layer::Layer;
use crate::trace::SharedTrace;

const LAYER: &str = "Session Layer";

/// Gating stage.
pub struct SessionLayer<L> {
    active: bool,
    inner: L,
    trace: SharedTrace,
}

impl<L: Layer> SessionLayer<L> {
    /// Create a session layer with the gate closed.
    pub fn new(inner: L, trace: SharedTrace) -> Self {
        Self {
            active: false,
            inner,
            trace,
        }
    }

    /// Open the gate. Calls are forwarded unconditionally from here on.
    pub fn start_session(&mut self) {
        self.active = true;
        self.trace.borrow_mut().layer(LAYER, "session started");
    }

    /// Whether the gate is open.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl<L: Layer> Layer for SessionLayer<L> {
    fn send(&mut self, payload: &str) -> Result<()> {
        if !self.active {
            return Ok(());
        }

        self.inner.send(payload)
    }

    fn receive(&mut self) -> Result<Option<String>> {
        if !self.active {
            return Ok(None);
        }

        self.inner.receive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physical::PhysicalLayer;
    use crate::{medium, trace};

    #[test]
    fn test_send_is_swallowed_before_start() {
        let medium = medium::shared();
        let trace = trace::shared(true);
        let physical = PhysicalLayer::new(medium.clone(), trace.clone());
        let mut session = SessionLayer::new(physical, trace.clone());

        session.send("lost").unwrap();

        // Nothing forwarded, nothing traced
        assert!(medium.borrow().is_empty());
        assert!(trace.borrow().is_empty());
    }

    #[test]
    fn test_receive_is_swallowed_before_start() {
        let medium = medium::shared();
        let trace = trace::shared(true);
        let physical = PhysicalLayer::new(medium.clone(), trace.clone());
        let mut session = SessionLayer::new(physical, trace.clone());

        medium.borrow_mut().send("waiting".to_string());

        // The gate swallows the call without touching the lower layer
        assert_eq!(session.receive().unwrap(), None);
        assert_eq!(medium.borrow().depth(), 1);
        assert!(trace.borrow().is_empty());
    }

    #[test]
    fn test_calls_forward_after_start() {
        let medium = medium::shared();
        let trace = trace::shared(true);
        let physical = PhysicalLayer::new(medium.clone(), trace.clone());
        let mut session = SessionLayer::new(physical, trace);

        assert!(!session.is_active());
        session.start_session();
        assert!(session.is_active());

        session.send("through").unwrap();
        assert_eq!(session.receive().unwrap(), Some("through".to_string()));
    }

    #[test]
    fn test_start_session_is_idempotent() {
        let medium = medium::shared();
        let trace = trace::shared(true);
        let physical = PhysicalLayer::new(medium, trace.clone());
        let mut session = SessionLayer::new(physical, trace);

        session.start_session();
        session.start_session();

        assert!(session.is_active());
    }
}
