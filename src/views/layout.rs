//! Page chrome shared by every view: the title and the navigation bar

use crate::content::{CourseInfo, COURSE};

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/courses", "Courses"),
    ("/schedule", "Schedule"),
    ("/tools", "Tools"),
    ("/ai", "AI Assistant"),
    ("/contact", "Contact"),
];

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Data the shared base template needs on every page
pub struct Chrome {
    pub title: String,
    pub nav: Vec<NavLink>,
    pub course: &'static CourseInfo,
}

impl Chrome {
    pub fn new(title: &str, current_path: &str) -> Self {
        Self {
            title: title.to_string(),
            nav: NAV_LINKS
                .iter()
                .map(|&(href, label)| NavLink {
                    href,
                    label,
                    active: is_active(href, current_path),
                })
                .collect(),
            course: &COURSE,
        }
    }
}

fn is_active(href: &str, current_path: &str) -> bool {
    if href == "/" {
        current_path == "/"
    } else {
        current_path == href || current_path.starts_with(&format!("{href}/"))
    }
}
