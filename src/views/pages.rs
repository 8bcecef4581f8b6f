//! Page templates
//!
//! One askama template struct per page. Each render function fills in the
//! shared chrome for its path and returns the finished HTML.

use askama::Template;

use super::layout::Chrome;
use crate::contact::ContactForm;
use crate::content::{Card, CourseModule, SchedulePhase, ScheduleWeek, SdlcPhase, Timing, Tool};
use crate::error::ErrorPage;
use crate::handler::ai::{AiStatus, ProviderStatus};

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate<'a> {
    page: Chrome,
    banner_url: &'a str,
    highlights: &'static [Card],
}

#[derive(Template)]
#[template(path = "register.html")]
struct RegisterTemplate {
    page: Chrome,
}

#[derive(Template)]
#[template(path = "courses.html")]
struct CoursesTemplate {
    page: Chrome,
    modules: &'static [CourseModule],
    phases: &'static [SdlcPhase],
}

#[derive(Template)]
#[template(path = "module.html")]
struct ModuleTemplate {
    page: Chrome,
    module: &'static CourseModule,
}

#[derive(Template)]
#[template(path = "schedule.html")]
struct ScheduleTemplate {
    page: Chrome,
    weeks: &'static [ScheduleWeek],
    phases: &'static [SchedulePhase],
    timing: &'static Timing,
}

#[derive(Template)]
#[template(path = "tools.html")]
struct ToolsTemplate<'a> {
    page: Chrome,
    groups: &'a [(&'static str, Vec<&'static Tool>)],
    total: usize,
}

#[derive(Template)]
#[template(path = "tool.html")]
struct ToolTemplate {
    page: Chrome,
    tool: &'static Tool,
}

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate<'a> {
    page: Chrome,
    name: &'a str,
    email: &'a str,
    whatsapp: &'a str,
    message: &'a str,
    errors: &'a [String],
}

#[derive(Template)]
#[template(path = "contact_success.html")]
struct ContactSuccessTemplate {
    page: Chrome,
}

#[derive(Template)]
#[template(path = "ai.html")]
struct AiTemplate<'a> {
    page: Chrome,
    providers: [(&'static str, &'a ProviderStatus); 3],
    any_configured: bool,
    features: &'static [Card],
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate<'a> {
    page: Chrome,
    status: u16,
    message: &'a str,
    detail: Option<&'a str>,
}

pub fn home_page(banner_url: &str, highlights: &'static [Card]) -> askama::Result<String> {
    HomeTemplate {
        page: Chrome::new("Home", "/"),
        banner_url,
        highlights,
    }
    .render()
}

pub fn register_page() -> askama::Result<String> {
    RegisterTemplate {
        page: Chrome::new("Register Interest", "/register"),
    }
    .render()
}

pub fn courses_page(
    modules: &'static [CourseModule],
    phases: &'static [SdlcPhase],
) -> askama::Result<String> {
    CoursesTemplate {
        page: Chrome::new("Course Curriculum", "/courses"),
        modules,
        phases,
    }
    .render()
}

pub fn module_page(module: &'static CourseModule) -> askama::Result<String> {
    ModuleTemplate {
        page: Chrome::new(module.title, &format!("/courses/{}", module.id)),
        module,
    }
    .render()
}

pub fn schedule_page(
    weeks: &'static [ScheduleWeek],
    phases: &'static [SchedulePhase],
    timing: &'static Timing,
) -> askama::Result<String> {
    ScheduleTemplate {
        page: Chrome::new("Bootcamp Schedule", "/schedule"),
        weeks,
        phases,
        timing,
    }
    .render()
}

pub fn tools_page(
    groups: &[(&'static str, Vec<&'static Tool>)],
    total: usize,
) -> askama::Result<String> {
    ToolsTemplate {
        page: Chrome::new("Tools Covered", "/tools"),
        groups,
        total,
    }
    .render()
}

pub fn tool_page(tool: &'static Tool) -> askama::Result<String> {
    ToolTemplate {
        page: Chrome::new(tool.name, &format!("/tools/{}", tool.id)),
        tool,
    }
    .render()
}

/// Render the contact form, re-populated with `form` and listing `errors`
pub fn contact_page(form: &ContactForm, errors: &[String]) -> askama::Result<String> {
    ContactTemplate {
        page: Chrome::new("Contact Us", "/contact"),
        name: form.name.as_deref().unwrap_or_default(),
        email: form.email.as_deref().unwrap_or_default(),
        whatsapp: form.whatsapp.as_deref().unwrap_or_default(),
        message: form.message.as_deref().unwrap_or_default(),
        errors,
    }
    .render()
}

pub fn contact_success_page() -> askama::Result<String> {
    ContactSuccessTemplate {
        page: Chrome::new("Thank You", "/contact/success"),
    }
    .render()
}

pub fn ai_page(status: &AiStatus, features: &'static [Card]) -> askama::Result<String> {
    AiTemplate {
        page: Chrome::new("AI Assistant", "/ai"),
        providers: status.providers(),
        any_configured: status.any_configured(),
        features,
    }
    .render()
}

pub fn error_page(error: &ErrorPage) -> askama::Result<String> {
    ErrorTemplate {
        page: Chrome::new("Error", ""),
        status: error.status.as_u16(),
        message: &error.message,
        detail: error.detail.as_deref(),
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AiConfig;
    use crate::content::{
        AI_FEATURES, COURSE_MODULES, HIGHLIGHTS, PHASES, SDLC_PHASES, TIMING, TOOLS, WEEKLY_SCHEDULE,
    };
    use hyper::StatusCode;

    #[test]
    fn test_home_page_shows_highlights() {
        let html = home_page("banner.png", HIGHLIGHTS).expect("renders");
        assert!(html.contains(r#"src="banner.png""#));
        assert!(html.contains("Live Interactive Sessions"));
    }

    #[test]
    fn test_courses_page_lists_every_module() {
        let html = courses_page(COURSE_MODULES, SDLC_PHASES).expect("renders");
        for module in COURSE_MODULES {
            assert!(html.contains(&format!(r#"id="{}""#, module.id)));
        }
        assert!(html.contains("Bitbucket &amp; CI"));
    }

    #[test]
    fn test_schedule_page_has_all_sessions() {
        let html = schedule_page(WEEKLY_SCHEDULE, PHASES, &TIMING).expect("renders");
        assert_eq!(html.matches("<tr><td").count(), usize::from(TIMING.total_sessions));
        assert_eq!(html.matches("rowspan=").count(), usize::from(TIMING.total_weeks));
        assert!(html.contains("Final Project Presentations"));
    }

    #[test]
    fn test_tool_page_shows_category() {
        let html = tool_page(&TOOLS[0]).expect("renders");
        assert!(html.contains(r#"<p class="meta">Atlassian</p>"#));
    }

    #[test]
    fn test_contact_page_repopulates_and_escapes() {
        let form = ContactForm {
            name: Some("<Ravi>".to_string()),
            ..ContactForm::default()
        };
        let html = contact_page(&form, &["Valid email is required".to_string()]).expect("renders");
        assert!(html.contains(r#"value="&lt;Ravi&gt;""#));
        assert!(html.contains("<li>Valid email is required</li>"));
        assert!(!html.contains("<Ravi>"));
    }

    #[test]
    fn test_empty_contact_page_has_no_error_box() {
        let html = contact_page(&ContactForm::default(), &[]).expect("renders");
        assert!(!html.contains(r#"class="errors""#));
    }

    #[test]
    fn test_ai_page_lists_providers() {
        let status = AiStatus::from_config(&AiConfig::default());
        let html = ai_page(&status, AI_FEATURES).expect("renders");
        assert!(html.contains("openai: not_configured"));
        assert!(html.contains("No AI provider is configured yet"));
        assert!(html.contains("JQL Helper"));
    }

    #[test]
    fn test_error_page_detail_is_optional() {
        let page = ErrorPage {
            status: StatusCode::NOT_FOUND,
            message: "Page not found".to_string(),
            detail: None,
        };
        let html = error_page(&page).expect("renders");
        assert!(html.contains("<h1>404</h1>"));
        assert!(!html.contains(r#"class="stack""#));

        let page = ErrorPage {
            detail: Some("trail".to_string()),
            ..page
        };
        assert!(error_page(&page).expect("renders").contains(r#"<pre class="stack">trail</pre>"#));
    }
}
