//! Cosmetic network identifiers.
//!
//! The original system looked up the host's real MAC address for display
//! flavor only; nothing is ever routed. Here the identifiers are plain values
//! injected at construction time, so tests can supply deterministic fixtures
//! and the simulation never touches the host environment.

use crate::error::Error;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// A MAC-address-like token used by the data link layer's framing tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacAddr([u8; 6]);

impl MacAddr {
    /// Placeholder address used by the loopback fallback configuration.
    pub const PLACEHOLDER: MacAddr = MacAddr([0x02, 0x00, 0x00, 0x00, 0x00, 0x00]);

    /// Create an address from raw octets.
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// The raw octets.
    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Synthesize an address from the given randomness source.
    ///
    /// The result is always a locally-administered unicast address, so it can
    /// never collide with a real vendor-assigned one.
    pub fn synthesized(rng: &mut impl Rng) -> Self {
        let mut octets = [0u8; 6];
        rng.fill(&mut octets[..]);

        // Locally administered (bit 1 set), unicast (bit 0 clear)
        octets[0] = (octets[0] | 0x02) & 0xFE;

        Self(octets)
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = self.0;
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            o[0], o[1], o[2], o[3], o[4], o[5]
        )
    }
}

impl FromStr for MacAddr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut octets = [0u8; 6];
        let mut parts = s.split(':');

        for octet in octets.iter_mut() {
            let part = parts
                .next()
                .ok_or_else(|| Error::Config(format!("MAC address too short: {}", s)))?;
            *octet = u8::from_str_radix(part, 16)
                .map_err(|_| Error::Config(format!("invalid MAC octet {:?} in {}", part, s)))?;
        }

        if parts.next().is_some() {
            return Err(Error::Config(format!("MAC address too long: {}", s)));
        }

        Ok(Self(octets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_display_format() {
        let mac = MacAddr::new([0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x42]);
        assert_eq!(mac.to_string(), "DE:AD:BE:EF:00:42");
    }

    #[test]
    fn test_parse_round_trip() {
        let mac = MacAddr::new([0x02, 0x1A, 0x2B, 0x3C, 0x4D, 0x5E]);
        let parsed: MacAddr = mac.to_string().parse().unwrap();

        assert_eq!(parsed, mac);
    }

    #[test]
    fn test_parse_lowercase() {
        let parsed: MacAddr = "de:ad:be:ef:00:42".parse().unwrap();
        assert_eq!(parsed.octets(), [0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x42]);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("DE:AD:BE:EF:00".parse::<MacAddr>().is_err()); // too short
        assert!("DE:AD:BE:EF:00:42:99".parse::<MacAddr>().is_err()); // too long
        assert!("DE:AD:BE:EF:00:GG".parse::<MacAddr>().is_err()); // not hex
    }

    #[test]
    fn test_synthesized_is_locally_administered_unicast() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..100 {
            let mac = MacAddr::synthesized(&mut rng);
            let first = mac.octets()[0];

            assert_eq!(first & 0x02, 0x02, "locally administered bit must be set");
            assert_eq!(first & 0x01, 0x00, "multicast bit must be clear");
        }
    }

    #[test]
    fn test_synthesized_determinism() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(42);
        let mut rng2 = ChaCha8Rng::seed_from_u64(42);

        assert_eq!(
            MacAddr::synthesized(&mut rng1),
            MacAddr::synthesized(&mut rng2)
        );
    }
}
