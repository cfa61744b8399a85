//! Composition of the seven stages into one endpoint stack.
//!
//! Each stage holds exclusive ownership of the stage below it, so a full
//! endpoint is a single nested value with no dynamic dispatch:
//!
//! ```text
//! Application
//!   └─ Presentation   (transfer encoding)
//!        └─ Session   (gate)
//!             └─ Transport   (sequencing tag)
//!                  └─ Network   (routing tag)
//!                       └─ Data Link   (MAC framing tag)
//!                            └─ Physical ── mock medium
//! ```

use crate::application::ApplicationLayer;
use crate::config::StackConfig;
use crate::datalink::DataLinkLayer;
use crate::medium::SharedMedium;
use crate::network::NetworkLayer;
use crate::physical::PhysicalLayer;
use crate::presentation::PresentationLayer;
use crate::session::SessionLayer;
use crate::trace::SharedTrace;
use crate::transport::TransportLayer;

/// A complete endpoint stack, top to bottom.
pub type FullStack = ApplicationLayer<
    PresentationLayer<
        SessionLayer<TransportLayer<NetworkLayer<DataLinkLayer<PhysicalLayer>>>>,
    >,
>;

/// Assemble an endpoint stack over the shared medium.
///
/// The session gate starts closed; callers must `start_session` before any
/// payload can descend past the presentation layer.
pub fn build_stack(config: StackConfig, medium: SharedMedium, trace: SharedTrace) -> FullStack {
    let physical = PhysicalLayer::new(medium, trace.clone());
    let datalink = DataLinkLayer::new(config.mac, physical, trace.clone());
    let network = NetworkLayer::new(
        config.source_ip,
        config.destination_ip,
        datalink,
        trace.clone(),
    );
    let transport = TransportLayer::new(network, trace.clone());
    let session = SessionLayer::new(transport, trace.clone());
    let presentation = PresentationLayer::new(session, trace.clone());

    ApplicationLayer::new(presentation, trace)
}
