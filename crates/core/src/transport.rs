//! Transport layer: sequencing tag.
//!
//! On the way down, each segment is tagged with a monotonically increasing
//! sequence token `SEQ:<n>`. On the way up, the leading sequencing tag is
//! stripped; no reordering or validation happens, since the medium is already
//! strictly FIFO. The counter only makes the "sequencing header" honest.

use crate::error::Result;
use crate::layer::{strip_tag, Layer};
use crate::trace::SharedTrace;

const LAYER: &str = "Transport Layer";

/// Sequencing tag stage.
pub struct TransportLayer<L> {
    next_seq: u64,
    inner: L,
    trace: SharedTrace,
}

impl<L: Layer> TransportLayer<L> {
    /// Create a transport layer with its sequence counter at zero.
    pub fn new(inner: L, trace: SharedTrace) -> Self {
        Self {
            next_seq: 0,
            inner,
            trace,
        }
    }
}

impl<L: Layer> Layer for TransportLayer<L> {
    fn send(&mut self, payload: &str) -> Result<()> {
        let segment = format!("SEQ:{}|{}", self.next_seq, payload);
        self.next_seq += 1;

        self.trace
            .borrow_mut()
            .layer(LAYER, &format!("adding sequencing:\n{}", segment));

        self.inner.send(&segment)
    }

    fn receive(&mut self) -> Result<Option<String>> {
        match self.inner.receive()? {
            Some(segment) => Ok(Some(strip_tag(&segment).to_string())),
            None => Ok(None),
        }
    }
}
