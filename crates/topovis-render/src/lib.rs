#![forbid(unsafe_code)]

//! Edge geometry for topology rendering.
//!
//! An edge with a terminal glyph (arrowhead, connector) must stop its
//! visible stroke short of the node so the glyph has room, while the wider
//! invisible hit-test path keeps covering the full endpoint region for
//! hover/click usability. This crate computes both paths; drawing them is
//! the consumer's job.

pub mod path;
pub mod terminal;

pub use path::EdgePath;
pub use terminal::{DEFAULT_TERMINAL_SIZE, TerminalType, terminal_anchor};

#[cfg(test)]
mod tests;
