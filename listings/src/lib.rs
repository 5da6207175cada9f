//! Shared listing model, catalog, and contact contract for the site.
//!
//! This crate owns everything both `server` and `client` need to agree on:
//! the project records shown in the showcase, the status filter, the detail
//! projection rendered by the modal, and the contact-form payload with its
//! validation rules. It has no browser or runtime dependencies so it builds
//! for native tests and `wasm32` alike.

pub mod catalog;
pub mod contact;
pub mod content;
pub mod detail;
pub mod icon;
pub mod project;
pub mod seo;

pub use catalog::{FILTERS, FilterOption, catalog, filter_by_status, filter_by_tag};
pub use contact::{ContactErrors, ContactField, ContactForm, ContactResponse};
pub use project::{ElevatorType, ParkingAvailability, Project, ProjectDetails, ProjectStatus};
