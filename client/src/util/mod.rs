//! Browser utilities shared by page sections.
//!
//! Everything here no-ops (or returns a neutral value) during SSR so server
//! rendering stays deterministic.

pub mod clock;
pub mod motion;
pub mod reveal;
pub mod scroll;
pub mod video;
