//! Client-side UI state modules.
//!
//! DESIGN
//! ======
//! Each section owns a small plain struct with explicit transitions. Components
//! wrap them in `RwSignal`s and share them via context where more than one
//! section needs access (the showcase and its detail modal, toasts).

pub mod contact;
pub mod detail;
pub mod nav;
pub mod rotation;
pub mod showcase;
pub mod toast;
