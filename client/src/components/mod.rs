//! Page section and shared UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections render static content from `listings` and read/write the shared
//! showcase, detail-modal, and toast state from Leptos context providers.

pub mod about;
pub mod contact_section;
pub mod featured_projects;
pub mod floating_contact;
pub mod footer;
pub mod hero;
pub mod icon;
pub mod navbar;
pub mod project_detail_modal;
pub mod seo_head;
pub mod testimonials;
pub mod toaster;
pub mod why_choose_us;
