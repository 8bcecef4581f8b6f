//! Request handler module
//!
//! Routing dispatch plus one submodule per area of the site: content pages,
//! the contact form, the AI placeholder, health probes and static assets.

pub mod ai;
pub mod contact;
pub mod health;
pub mod pages;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::{handle_request, RequestContext};
