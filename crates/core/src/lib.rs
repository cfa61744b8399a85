//! osi-sim-core: Educational simulation of the OSI communication model
//!
//! This library provides the components for a learning-focused system that
//! walks one food order down a seven-stage layer stack, across a mocked
//! transmission medium, and walks the confirmation back up:
//!
//! - `order`: the order record and its structured text payload
//! - `application`: order entry and confirmation display (top stage)
//! - `presentation`: base64 transfer encoding, confirmation marker bypass
//! - `session`: the boolean gate in front of the lower stages
//! - `transport`: sequencing tag
//! - `network`: source/destination routing tag
//! - `datalink`: MAC framing tag
//! - `physical`: queue put/get (bottom stage)
//! - `medium`: the FIFO queue standing in for the network link
//! - `stack`: composition of the stages into one endpoint
//! - `server`: the answering endpoint
//! - `addr` / `config`: injected cosmetic network identifiers
//! - `trace`: the human-readable layer-by-layer output
//!
//! # Design Principles
//!
//! - **Symmetric transformations**: every tag added on the way down is
//!   stripped, in reverse order, on the way up
//! - **No hidden lookups**: network identifiers are injected configuration,
//!   deterministic given a seed
//! - **Single thread**: one producer and one consumer, strictly in turn
//! - **Observable**: every transition emits a recordable trace line

pub mod addr;
pub mod application;
pub mod config;
pub mod datalink;
pub mod error;
pub mod layer;
pub mod medium;
pub mod network;
pub mod order;
pub mod physical;
pub mod presentation;
pub mod server;
pub mod session;
pub mod stack;
pub mod trace;
pub mod transport;

// Re-export commonly used types
pub use error::{Error, Result};
