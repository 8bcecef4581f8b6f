//! HTML views
//!
//! Pages are askama templates (under `templates/`) extending a shared base
//! layout. Template output is HTML-escaped by default.

mod layout;
mod pages;

pub use pages::{
    ai_page, contact_page, contact_success_page, courses_page, error_page, home_page,
    module_page, register_page, schedule_page, tool_page, tools_page,
};
