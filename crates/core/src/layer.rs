//! The layer contract shared by every stage of the stack.
//!
//! Control flows strictly downward on `send` and strictly upward on
//! `receive`; each stage holds exclusive ownership of the stage below it.
//! Stages transform the payload by prepending a literal tag token plus the
//! `|` separator on the way down and stripping their own leading tag on the
//! way up.

use crate::error::Result;

/// One stage of the pipeline, responsible for one reversible textual
/// transformation.
pub trait Layer {
    /// Transform the payload and forward it to the stage below.
    fn send(&mut self, payload: &str) -> Result<()>;

    /// Pull from the stage below and reverse this stage's transformation.
    ///
    /// `Ok(None)` means the session gate swallowed the call.
    fn receive(&mut self) -> Result<Option<String>>;
}

/// Strip the leading `<tag>|` segment from an envelope.
///
/// A payload with no separator is returned unchanged; the missing tag is a
/// silent pass-through, never an error.
pub(crate) fn strip_tag(payload: &str) -> &str {
    match payload.split_once('|') {
        Some((_tag, rest)) => rest,
        None => payload,
    }
}
