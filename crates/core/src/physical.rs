//! Physical layer: the bottom of the stack.
//!
//! Performs no textual transformation of its own; it hands payloads to the
//! mock medium on the way down and pulls them back on the way up.

use crate::error::Result;
use crate::layer::Layer;
use crate::medium::SharedMedium;
use crate::trace::SharedTrace;

const LAYER: &str = "Physical Layer";

/// Bottom stage, attached to the shared mock medium.
pub struct PhysicalLayer {
    medium: SharedMedium,
    trace: SharedTrace,
}

impl PhysicalLayer {
    /// Attach a physical layer to the given medium.
    pub fn new(medium: SharedMedium, trace: SharedTrace) -> Self {
        Self { medium, trace }
    }
}

impl Layer for PhysicalLayer {
    fn send(&mut self, payload: &str) -> Result<()> {
        self.trace
            .borrow_mut()
            .layer(LAYER, &format!("transmitting payload:\n{}", payload));

        self.medium.borrow_mut().send(payload.to_string());
        Ok(())
    }

    fn receive(&mut self) -> Result<Option<String>> {
        let payload = self.medium.borrow_mut().receive()?;

        self.trace
            .borrow_mut()
            .layer(LAYER, &format!("received payload:\n{}", payload));

        Ok(Some(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{medium, trace};

    #[test]
    fn test_send_reaches_medium() {
        let medium = medium::shared();
        let trace = trace::shared(true);
        let mut physical = PhysicalLayer::new(medium.clone(), trace);

        physical.send("hello").unwrap();

        assert_eq!(medium.borrow_mut().receive().unwrap(), "hello");
    }

    #[test]
    fn test_receive_pulls_from_medium() {
        let medium = medium::shared();
        let trace = trace::shared(true);
        let mut physical = PhysicalLayer::new(medium.clone(), trace);

        medium.borrow_mut().send("inbound".to_string());

        assert_eq!(physical.receive().unwrap(), Some("inbound".to_string()));
    }

    #[test]
    fn test_receive_on_empty_medium_errors() {
        let medium = medium::shared();
        let trace = trace::shared(true);
        let mut physical = PhysicalLayer::new(medium, trace);

        assert!(physical.receive().is_err());
    }

    #[test]
    fn test_traces_both_directions() {
        let medium = medium::shared();
        let trace = trace::shared(true);
        let mut physical = PhysicalLayer::new(medium, trace.clone());

        physical.send("x").unwrap();
        physical.receive().unwrap();

        let recorded = trace.borrow();
        assert_eq!(recorded.len(), 2);
        assert!(recorded.lines()[0].starts_with("[Physical Layer]"));
    }
}
