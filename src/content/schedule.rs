//! Weekly schedule and phase breakdown.

#[derive(Debug)]
pub struct Session {
    pub day: &'static str,
    pub topic: &'static str,
    pub duration: &'static str,
}

#[derive(Debug)]
pub struct ScheduleWeek {
    pub week: u8,
    pub theme: &'static str,
    pub sessions: &'static [Session],
}

#[derive(Debug)]
pub struct SchedulePhase {
    pub name: &'static str,
    pub weeks: &'static str,
    pub description: &'static str,
    /// CSS color used for the phase badge
    pub color: &'static str,
}

/// Summary of when classes happen
#[derive(Debug)]
pub struct Timing {
    pub time: &'static str,
    pub days: &'static str,
    pub duration: &'static str,
    pub total_weeks: u8,
    pub total_sessions: u8,
}

macro_rules! week {
    ($week:expr, $theme:expr, [$mon:expr, $tue:expr, $wed:expr, $thu:expr, $fri:expr]) => {
        ScheduleWeek {
            week: $week,
            theme: $theme,
            sessions: &[
                Session { day: "Monday", topic: $mon, duration: "90 min" },
                Session { day: "Tuesday", topic: $tue, duration: "90 min" },
                Session { day: "Wednesday", topic: $wed, duration: "90 min" },
                Session { day: "Thursday", topic: $thu, duration: "90 min" },
                Session { day: "Friday", topic: $fri, duration: "90 min" },
            ],
        }
    };
}

pub static WEEKLY_SCHEDULE: &[ScheduleWeek] = &[
    week!(1, "Jira Software Foundations", [
        "Introduction to Jira Cloud & Project Setup",
        "Issue Types, Workflows & Screens",
        "Custom Fields & Field Configurations",
        "Permissions & Security Schemes",
        "Week 1 Lab: Hands-on Jira Project Setup"
    ]),
    week!(2, "Agile with Jira", [
        "Sprint Planning & Backlog Management",
        "Roadmaps & Release Planning",
        "JQL Fundamentals & Advanced Queries",
        "Dashboards & Reporting",
        "Week 2 Lab: End-to-End Sprint Management"
    ]),
    week!(3, "Jira Service Management", [
        "JSM Setup & Service Desk Configuration",
        "Incident & Problem Management",
        "Change Management & Service Requests",
        "AIOps, Alerts & Alert Grouping",
        "Week 3 Lab: Complete ITSM Workflow"
    ]),
    week!(4, "Bitbucket & CI/CD", [
        "Git Fundamentals & Bitbucket Setup",
        "Branching Strategies & Pull Requests",
        "Bitbucket Pipelines Introduction",
        "Docker Builds & AWS ECR Push",
        "Week 4 Lab: Complete CI/CD Pipeline"
    ]),
    week!(5, "Statuspage & AI Tools", [
        "Statuspage Setup & Configuration",
        "Incident Communication & Automations",
        "Atlassian Intelligence & Rovo AI",
        "AI Agents & Custom Automations",
        "Week 5 Lab: AI-Assisted Workflow"
    ]),
    week!(6, "Marketplace Apps", [
        "ScriptRunner for Jira Cloud",
        "Custom Scripts & Listeners",
        "JMWE Advanced Workflows",
        "eazyBI Reports & Dashboards",
        "Week 6 Lab: Custom Automation Rules"
    ]),
    week!(7, "Integration & Automation", [
        "Python + Jira REST API Basics",
        "Python Automation Scripts",
        "Ansible Fundamentals & Jira Module",
        "n8n Visual Workflow Automation",
        "Week 7 Lab: Multi-Tool Integration"
    ]),
    week!(8, "Cloud & DevOps", [
        "Linux Command Line Essentials",
        "AWS Basics: EC2, IAM, CloudWatch",
        "ECS & Container Deployment",
        "DevOps Best Practices & Review",
        "Final Project Presentations"
    ]),
];

pub static PHASES: &[SchedulePhase] = &[
    SchedulePhase {
        name: "Phase 1: Jira Fundamentals",
        weeks: "1-2",
        description: "Master Jira Software Cloud for project management",
        color: "#0052CC",
    },
    SchedulePhase {
        name: "Phase 2: Service Management",
        weeks: "3",
        description: "Learn ITSM with Jira Service Management",
        color: "#00875A",
    },
    SchedulePhase {
        name: "Phase 3: DevOps Pipeline",
        weeks: "4",
        description: "Git, Bitbucket, and CI/CD with Pipelines",
        color: "#6554C0",
    },
    SchedulePhase {
        name: "Phase 4: AI & Extensions",
        weeks: "5-6",
        description: "Statuspage, Rovo AI, and Marketplace apps",
        color: "#FF5630",
    },
    SchedulePhase {
        name: "Phase 5: Automation & Cloud",
        weeks: "7-8",
        description: "Python, Ansible, n8n, AWS, and final project",
        color: "#FFAB00",
    },
];

pub static TIMING: Timing = Timing {
    time: "7:00 – 8:30 AM IST",
    days: "Monday to Friday",
    duration: "90 minutes per session",
    total_weeks: 8,
    total_sessions: 40,
};
