//! Static site content
//!
//! All records are compile-time constants. [`Catalog`] indexes the ones that
//! are looked up by id so detail pages resolve in O(1).

mod courses;
mod schedule;
mod site;
mod tools;

pub use courses::{CourseModule, SdlcPhase, COURSE_MODULES, SDLC_PHASES};
pub use schedule::{SchedulePhase, ScheduleWeek, Timing, PHASES, TIMING, WEEKLY_SCHEDULE};
pub use site::{Card, CourseInfo, AI_FEATURES, COURSE, HIGHLIGHTS};
pub use tools::{Tool, TOOLS};

use tools::group_by_category;

use std::collections::HashMap;

/// Id-indexed view over the course modules and tools
pub struct Catalog {
    modules: HashMap<&'static str, &'static CourseModule>,
    tools: HashMap<&'static str, &'static Tool>,
    tools_by_category: Vec<(&'static str, Vec<&'static Tool>)>,
}

impl Catalog {
    pub fn build() -> Self {
        Self {
            modules: COURSE_MODULES.iter().map(|m| (m.id, m)).collect(),
            tools: TOOLS.iter().map(|t| (t.id, t)).collect(),
            tools_by_category: group_by_category(TOOLS),
        }
    }

    pub const fn modules(&self) -> &'static [CourseModule] {
        COURSE_MODULES
    }

    pub fn module(&self, id: &str) -> Option<&'static CourseModule> {
        self.modules.get(id).copied()
    }

    pub const fn tools(&self) -> &'static [Tool] {
        TOOLS
    }

    pub fn tool(&self, id: &str) -> Option<&'static Tool> {
        self.tools.get(id).copied()
    }

    pub fn tools_by_category(&self) -> &[(&'static str, Vec<&'static Tool>)] {
        &self.tools_by_category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_lookup() {
        let catalog = Catalog::build();
        let module = catalog.module("jsm").expect("jsm module exists");
        assert_eq!(module.title, "Jira Service Management (JSM)");
        assert!(catalog.module("unknown-id").is_none());
    }

    #[test]
    fn test_tool_lookup() {
        let catalog = Catalog::build();
        assert_eq!(catalog.tool("n8n").map(|t| t.category), Some("Automation"));
        assert!(catalog.tool("unknown-id").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let catalog = Catalog::build();
        assert_eq!(catalog.modules.len(), COURSE_MODULES.len());
        assert_eq!(catalog.tools.len(), TOOLS.len());
    }

    #[test]
    fn test_grouping_keeps_first_appearance_order() {
        let catalog = Catalog::build();
        let categories: Vec<&str> = catalog
            .tools_by_category()
            .iter()
            .map(|(category, _)| *category)
            .collect();
        assert_eq!(
            categories,
            ["Atlassian", "Marketplace Apps", "Automation", "AWS", "Foundations", "AI Tools"]
        );
        let atlassian: Vec<&str> = catalog.tools_by_category()[0]
            .1
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(atlassian, ["jira-software", "jsm", "bitbucket", "statuspage", "rovo"]);
    }

    #[test]
    fn test_schedule_totals_match_timing() {
        let sessions: usize = WEEKLY_SCHEDULE.iter().map(|w| w.sessions.len()).sum();
        assert_eq!(sessions, usize::from(TIMING.total_sessions));
        assert_eq!(WEEKLY_SCHEDULE.len(), usize::from(TIMING.total_weeks));
    }
}
