//! Course-wide facts and the small card lists shown on the home and AI pages.

#[derive(Debug)]
pub struct CourseInfo {
    pub name: &'static str,
    pub short_name: &'static str,
    pub duration: &'static str,
    pub schedule: &'static str,
    pub audience: &'static str,
    pub start_date: &'static str,
}

/// Icon + title + description card
#[derive(Debug)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static COURSE: CourseInfo = CourseInfo {
    name: "AI Assisted Jira Cloud Administration & Automation Live Mastery Bootcamp",
    short_name: "Jira Cloud Bootcamp",
    duration: "2 months (60 days)",
    schedule: "Monday to Friday, 7:00–8:30 AM IST",
    audience: "Telugu-speaking IT beginners and professionals",
    start_date: "Coming Soon",
};

pub static HIGHLIGHTS: &[Card] = &[
    Card {
        icon: "🎯",
        title: "Live Interactive Sessions",
        description: "Daily 90-minute live classes with Q&A",
    },
    Card {
        icon: "🛠️",
        title: "Hands-on Practice",
        description: "Real-world projects and exercises",
    },
    Card {
        icon: "🤖",
        title: "AI-Assisted Learning",
        description: "Learn to leverage ChatGPT, Claude & Rovo",
    },
    Card {
        icon: "📜",
        title: "Telugu Medium",
        description: "Explained in Telugu for better understanding",
    },
];

pub static AI_FEATURES: &[Card] = &[
    Card {
        icon: "💬",
        title: "Course Q&A",
        description: "Ask questions about Jira, DevOps, or any bootcamp topic",
    },
    Card {
        icon: "📝",
        title: "JQL Helper",
        description: "Get help writing Jira Query Language expressions",
    },
    Card {
        icon: "🔧",
        title: "Script Assistant",
        description: "Generate ScriptRunner or Python code snippets",
    },
    Card {
        icon: "📚",
        title: "Documentation",
        description: "Quick access to Atlassian documentation and best practices",
    },
];
