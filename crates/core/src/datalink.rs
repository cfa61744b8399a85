//! Data link layer: MAC framing.
//!
//! On the way down, the payload is framed with the endpoint's MAC-address
//! token: `<MAC>|<payload>`. On the way up, the leading frame tag is stripped.
//! The address is cosmetic; nothing validates it on receive.

use crate::addr::MacAddr;
use crate::error::Result;
use crate::layer::{strip_tag, Layer};
use crate::trace::SharedTrace;

const LAYER: &str = "Data Link Layer";

/// MAC framing stage.
pub struct DataLinkLayer<L> {
    mac: MacAddr,
    inner: L,
    trace: SharedTrace,
}

impl<L: Layer> DataLinkLayer<L> {
    /// Create a data link layer with the given MAC token.
    pub fn new(mac: MacAddr, inner: L, trace: SharedTrace) -> Self {
        trace
            .borrow_mut()
            .layer(LAYER, &format!("initialized with MAC {}", mac));

        Self { mac, inner, trace }
    }

    /// The MAC token used for framing.
    pub fn mac(&self) -> MacAddr {
        self.mac
    }
}

impl<L: Layer> Layer for DataLinkLayer<L> {
    fn send(&mut self, payload: &str) -> Result<()> {
        let frame = format!("{}|{}", self.mac, payload);

        self.trace
            .borrow_mut()
            .layer(LAYER, &format!("framing payload:\n{}", frame));

        self.inner.send(&frame)
    }

    fn receive(&mut self) -> Result<Option<String>> {
        match self.inner.receive()? {
            Some(frame) => Ok(Some(strip_tag(&frame).to_string())),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physical::PhysicalLayer;
    use crate::{medium, trace};

    fn test_mac() -> MacAddr {
        MacAddr::new([0x02, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE])
    }

    #[test]
    fn test_send_prepends_mac_tag() {
        let medium = medium::shared();
        let trace = trace::shared(true);
        let physical = PhysicalLayer::new(medium.clone(), trace.clone());
        let mut datalink = DataLinkLayer::new(test_mac(), physical, trace);

        datalink.send("payload").unwrap();

        let frame = medium.borrow_mut().receive().unwrap();
        assert_eq!(frame, "02:AA:BB:CC:DD:EE|payload");
    }

    #[test]
    fn test_receive_strips_frame_tag() {
        let medium = medium::shared();
        let trace = trace::shared(true);
        let physical = PhysicalLayer::new(medium.clone(), trace.clone());
        let mut datalink = DataLinkLayer::new(test_mac(), physical, trace);

        medium
            .borrow_mut()
            .send("SOME_OTHER_MAC|payload".to_string());

        assert_eq!(datalink.receive().unwrap(), Some("payload".to_string()));
    }

    #[test]
    fn test_receive_without_separator_passes_through() {
        let medium = medium::shared();
        let trace = trace::shared(true);
        let physical = PhysicalLayer::new(medium.clone(), trace.clone());
        let mut datalink = DataLinkLayer::new(test_mac(), physical, trace);

        medium.borrow_mut().send("untagged".to_string());

        assert_eq!(datalink.receive().unwrap(), Some("untagged".to_string()));
    }
}
