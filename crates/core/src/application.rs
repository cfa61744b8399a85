//! Application layer: the top of the stack.
//!
//! The client side places orders and displays confirmations; the server side
//! takes orders back off the stack and answers them. Both directions speak
//! through the same layer type, one instance per endpoint.

use crate::error::Result;
use crate::layer::Layer;
use crate::order::Order;
use crate::presentation::{PresentationLayer, CONFIRMATION_MARKER};
use crate::session::SessionLayer;
use crate::trace::SharedTrace;

const LAYER: &str = "Application Layer";

/// Top stage: order entry and confirmation display.
pub struct ApplicationLayer<L> {
    inner: L,
    trace: SharedTrace,
}

impl<L: Layer> ApplicationLayer<L> {
    /// Create an application layer.
    pub fn new(inner: L, trace: SharedTrace) -> Self {
        Self { inner, trace }
    }

    /// Serialize the order and send it down the stack.
    pub fn place_order(&mut self, order: &Order) -> Result<()> {
        let payload = order.to_payload()?;

        self.trace
            .borrow_mut()
            .layer(LAYER, &format!("placing order:\n{}", payload));

        self.inner.send(&payload)
    }

    /// Pull the fully unwrapped confirmation, if any, and display it.
    pub fn receive_confirmation(&mut self) -> Result<Option<String>> {
        let message = match self.inner.receive()? {
            Some(message) => message,
            None => return Ok(None),
        };

        self.trace
            .borrow_mut()
            .layer(LAYER, &format!("order confirmed:\n{}", message));

        Ok(Some(message))
    }

    /// Pull the fully unwrapped order payload, if any, and reconstruct it.
    pub fn receive_order(&mut self) -> Result<Option<Order>> {
        let payload = match self.inner.receive()? {
            Some(payload) => payload,
            None => return Ok(None),
        };

        let order = Order::from_payload(&payload)?;

        self.trace.borrow_mut().layer(
            LAYER,
            &format!(
                "took order from {}: {} x {}",
                order.customer, order.quantity, order.food
            ),
        );

        Ok(Some(order))
    }

    /// Mark a confirmation and send it down the stack.
    pub fn send_confirmation(&mut self, message: &str) -> Result<()> {
        self.trace
            .borrow_mut()
            .layer(LAYER, &format!("confirming order: {}", message));

        self.inner
            .send(&format!("{}{}", CONFIRMATION_MARKER, message))
    }
}

impl<L: Layer> ApplicationLayer<PresentationLayer<SessionLayer<L>>> {
    /// Open the session gate two stages below.
    pub fn start_session(&mut self) {
        self.inner.start_session();
    }
}
