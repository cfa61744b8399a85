//! The answering endpoint.
//!
//! The server owns its own seven-stage stack over the same shared medium,
//! configured with the reply route (source and destination swapped) and its
//! own MAC. Confirmations therefore descend a real layer stack instead of
//! being hand-assembled and injected into the medium.

use crate::config::StackConfig;
use crate::error::Result;
use crate::medium::SharedMedium;
use crate::stack::{build_stack, FullStack};
use crate::trace::SharedTrace;

/// Peer endpoint that answers orders with confirmations.
pub struct Server {
    stack: FullStack,
}

impl Server {
    /// Attach a server endpoint to the shared medium.
    pub fn new(config: StackConfig, medium: SharedMedium, trace: SharedTrace) -> Self {
        Self {
            stack: build_stack(config, medium, trace),
        }
    }

    /// Open the server's session gate.
    pub fn start_session(&mut self) {
        self.stack.start_session();
    }

    /// Take the next order off the medium and answer it.
    ///
    /// # Returns
    /// The confirmation text that was sent back, or `None` if the server's
    /// session gate is still closed.
    pub fn handle_next(&mut self) -> Result<Option<String>> {
        let order = match self.stack.receive_order()? {
            Some(order) => order,
            None => return Ok(None),
        };

        let confirmation = format!("Order received, preparing {}!", order.food);
        self.stack.send_confirmation(&confirmation)?;

        Ok(Some(confirmation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Order;
    use crate::{medium, trace};

    #[test]
    fn test_answers_an_order_with_a_confirmation() {
        let medium = medium::shared();
        let trace = trace::shared(true);

        let (client_config, server_config) = StackConfig::synthesized_pair(42);

        let mut client = build_stack(client_config, medium.clone(), trace.clone());
        let mut server = Server::new(server_config, medium.clone(), trace);

        client.start_session();
        server.start_session();

        client
            .place_order(&Order::new("Al Glenrey", "Pizza", 2, "Lahug, Cebu City"))
            .unwrap();

        let confirmation = server.handle_next().unwrap();
        assert_eq!(
            confirmation,
            Some("Order received, preparing Pizza!".to_string())
        );

        // The reply is now the only payload in flight
        assert_eq!(medium.borrow().depth(), 1);
    }

    #[test]
    fn test_gated_server_leaves_the_order_in_flight() {
        let medium = medium::shared();
        let trace = trace::shared(true);

        let (client_config, server_config) = StackConfig::synthesized_pair(7);

        let mut client = build_stack(client_config, medium.clone(), trace.clone());
        let mut server = Server::new(server_config, medium.clone(), trace);

        client.start_session();
        client
            .place_order(&Order::new("Al Glenrey", "Pizza", 2, "Lahug, Cebu City"))
            .unwrap();

        // Session never started on the server side
        assert_eq!(server.handle_next().unwrap(), None);
        assert_eq!(medium.borrow().depth(), 1);
    }
}
