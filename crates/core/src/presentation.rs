//! Presentation layer: transfer encoding.
//!
//! On the way down, the text payload is base64-encoded so the lower stages
//! only ever see a flat token stream. On the way up, the encoding is
//! reversed.
//!
//! The one exception is the confirmation marker: a payload carrying the
//! literal `CONFIRMATION|` prefix is a presentation-level control payload and
//! is exempt from the transfer encoding in BOTH directions. On receive it
//! short-circuits past the decode step and the text after the marker is
//! returned verbatim; on send it is forwarded verbatim. The symmetry is what
//! lets the reply path reuse the same layer stack as the order path.

use crate::error::Result;
use crate::layer::Layer;
use crate::session::SessionLayer;
use crate::trace::SharedTrace;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

const LAYER: &str = "Presentation Layer";

/// Literal marker identifying a confirmation control payload.
pub const CONFIRMATION_MARKER: &str = "CONFIRMATION|";

/// Transfer encoding stage.
pub struct PresentationLayer<L> {
    inner: L,
    trace: SharedTrace,
}

impl<L: Layer> PresentationLayer<L> {
    /// Create a presentation layer.
    pub fn new(inner: L, trace: SharedTrace) -> Self {
        Self { inner, trace }
    }
}

impl<L: Layer> PresentationLayer<SessionLayer<L>> {
    /// Open the session gate one stage below.
    pub fn start_session(&mut self) {
        self.inner.start_session();
    }
}

impl<L: Layer> Layer for PresentationLayer<L> {
    fn send(&mut self, payload: &str) -> Result<()> {
        if payload.starts_with(CONFIRMATION_MARKER) {
            self.trace
                .borrow_mut()
                .layer(LAYER, "forwarding confirmation unencoded");

            return self.inner.send(payload);
        }

        let encoded = STANDARD.encode(payload.as_bytes());

        self.trace
            .borrow_mut()
            .layer(LAYER, &format!("encoding payload:\n{}", encoded));

        self.inner.send(&encoded)
    }

    fn receive(&mut self) -> Result<Option<String>> {
        let payload = match self.inner.receive()? {
            Some(payload) => payload,
            None => return Ok(None),
        };

        if let Some(message) = payload.strip_prefix(CONFIRMATION_MARKER) {
            return Ok(Some(message.to_string()));
        }

        let decoded = String::from_utf8(STANDARD.decode(payload.as_bytes())?)?;

        self.trace
            .borrow_mut()
            .layer(LAYER, &format!("decoded payload:\n{}", decoded));

        Ok(Some(decoded))
    }
}
