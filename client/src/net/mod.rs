//! Network layer.

pub mod api;
