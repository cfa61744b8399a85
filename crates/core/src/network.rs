//! Network layer: source/destination routing tag.
//!
//! On the way down, the payload is wrapped in a routing header of the form
//! `<source>><destination>|<payload>`. On the way up, the header is stripped
//! and its route is reported in the trace. The addresses are cosmetic; no
//! routing decision is ever made from them.

use crate::error::Result;
use crate::layer::Layer;
use crate::trace::SharedTrace;
use std::net::Ipv4Addr;

const LAYER: &str = "Network Layer";

/// Routing tag stage.
pub struct NetworkLayer<L> {
    source: Ipv4Addr,
    destination: Ipv4Addr,
    inner: L,
    trace: SharedTrace,
}

impl<L: Layer> NetworkLayer<L> {
    /// Create a network layer with the given route.
    pub fn new(source: Ipv4Addr, destination: Ipv4Addr, inner: L, trace: SharedTrace) -> Self {
        trace.borrow_mut().layer(
            LAYER,
            &format!("initialized with route {} > {}", source, destination),
        );

        Self {
            source,
            destination,
            inner,
            trace,
        }
    }
}

impl<L: Layer> Layer for NetworkLayer<L> {
    fn send(&mut self, payload: &str) -> Result<()> {
        let packet = format!("{}>{}|{}", self.source, self.destination, payload);

        self.trace
            .borrow_mut()
            .layer(LAYER, &format!("routing packet:\n{}", packet));

        self.inner.send(&packet)
    }

    fn receive(&mut self) -> Result<Option<String>> {
        let packet = match self.inner.receive()? {
            Some(packet) => packet,
            None => return Ok(None),
        };

        match packet.split_once('|') {
            Some((route, payload)) => {
                self.trace
                    .borrow_mut()
                    .layer(LAYER, &format!("packet info: {}", route));

                Ok(Some(payload.to_string()))
            }
            None => Ok(Some(packet)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physical::PhysicalLayer;
    use crate::{medium, trace};

    fn make_layer(
        medium: crate::medium::SharedMedium,
        trace: crate::trace::SharedTrace,
    ) -> NetworkLayer<PhysicalLayer> {
        let physical = PhysicalLayer::new(medium, trace.clone());
        NetworkLayer::new(
            Ipv4Addr::new(192, 168, 1, 57),
            Ipv4Addr::new(192, 168, 1, 100),
            physical,
            trace,
        )
    }

    #[test]
    fn test_send_prepends_route_tag() {
        let medium = medium::shared();
        let trace = trace::shared(true);
        let mut network = make_layer(medium.clone(), trace);

        network.send("payload").unwrap();

        let packet = medium.borrow_mut().receive().unwrap();
        assert_eq!(packet, "192.168.1.57>192.168.1.100|payload");
    }

    #[test]
    fn test_receive_strips_route_and_reports_it() {
        let medium = medium::shared();
        let trace = trace::shared(true);
        let mut network = make_layer(medium.clone(), trace.clone());

        medium
            .borrow_mut()
            .send("192.168.1.100>192.168.1.57|reply".to_string());

        assert_eq!(network.receive().unwrap(), Some("reply".to_string()));

        let recorded = trace.borrow();
        assert!(recorded
            .lines()
            .iter()
            .any(|line| line.contains("packet info: 192.168.1.100>192.168.1.57")));
    }

    #[test]
    fn test_receive_without_separator_passes_through() {
        let medium = medium::shared();
        let trace = trace::shared(true);
        let mut network = make_layer(medium.clone(), trace);

        medium.borrow_mut().send("untagged".to_string());

        assert_eq!(network.receive().unwrap(), Some("untagged".to_string()));
    }
}
