//! Stack configuration: the injected network identifiers.
//!
//! The original queried the host for its local IP and MAC address at layer
//! construction time. Those lookups were purely cosmetic, so here the values
//! are injected as configuration instead: either synthesized deterministically
//! from a seed (reproducible runs) or supplied explicitly. A loopback fallback
//! stands in for the original's behavior when address resolution failed.

use crate::addr::MacAddr;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::net::Ipv4Addr;

/// The fixed "server side" address the original always routed orders to.
pub const DEFAULT_DESTINATION: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 100);

/// Network identifiers for one endpoint's layer stack.
#[derive(Debug, Clone, Copy)]
pub struct StackConfig {
    /// MAC-address-like token used by the data link layer's framing tag
    pub mac: MacAddr,

    /// Source address for the network layer's routing tag
    pub source_ip: Ipv4Addr,

    /// Destination address for the network layer's routing tag
    pub destination_ip: Ipv4Addr,
}

impl StackConfig {
    /// Create a configuration from explicit identifiers.
    pub fn new(mac: MacAddr, source_ip: Ipv4Addr, destination_ip: Ipv4Addr) -> Self {
        Self {
            mac,
            source_ip,
            destination_ip,
        }
    }

    /// Synthesize client-side identifiers from a seed.
    ///
    /// Given the same seed, the identifiers are bit-identical across runs.
    pub fn synthesized(seed: u64) -> Self {
        Self::synthesized_pair(seed).0
    }

    /// Synthesize a matched (client, server) configuration pair from a seed.
    ///
    /// The server configuration carries its own MAC and the reply route
    /// (source and destination swapped).
    pub fn synthesized_pair(seed: u64) -> (Self, Self) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let client_mac = MacAddr::synthesized(&mut rng);
        let server_mac = MacAddr::synthesized(&mut rng);

        // Any host on the same /24 as the fixed destination, excluding it
        let host: u8 = loop {
            let candidate = rng.gen_range(2..=254);
            if candidate != DEFAULT_DESTINATION.octets()[3] {
                break candidate;
            }
        };

        let client = Self {
            mac: client_mac,
            source_ip: Ipv4Addr::new(192, 168, 1, host),
            destination_ip: DEFAULT_DESTINATION,
        };
        let server = client.reversed(server_mac);

        (client, server)
    }

    /// Fallback configuration when no identifiers are available.
    pub fn loopback() -> Self {
        Self {
            mac: MacAddr::PLACEHOLDER,
            source_ip: Ipv4Addr::LOCALHOST,
            destination_ip: Ipv4Addr::LOCALHOST,
        }
    }

    /// The peer endpoint's configuration: same link, reply route.
    pub fn reversed(&self, mac: MacAddr) -> Self {
        Self {
            mac,
            source_ip: self.destination_ip,
            destination_ip: self.source_ip,
        }
    }
}
