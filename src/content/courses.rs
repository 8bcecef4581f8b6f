//! Course curriculum: one module per topic block, in teaching order.

/// A curriculum module
#[derive(Debug)]
pub struct CourseModule {
    pub id: &'static str,
    pub title: &'static str,
    pub duration: &'static str,
    pub sdlc_phase: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub topics: &'static [&'static str],
}

/// A software development lifecycle phase used to tag modules
#[derive(Debug)]
pub struct SdlcPhase {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

pub static COURSE_MODULES: &[CourseModule] = &[
    CourseModule {
        id: "jira-software",
        title: "Jira Software Cloud",
        duration: "Week 1-2",
        sdlc_phase: "Requirements & Planning, Development",
        icon: "📋",
        description: "Master Jira for agile project management",
        topics: &[
            "Project creation and configuration",
            "Issue types, workflows, and screens",
            "Sprint planning and backlog management",
            "Roadmaps and release planning",
            "Dev tasks and QA task management",
            "Custom fields and field configurations",
            "Permissions and security schemes",
            "JQL (Jira Query Language)",
            "Dashboards and reporting",
        ],
    },
    CourseModule {
        id: "jsm",
        title: "Jira Service Management (JSM)",
        duration: "Week 3",
        sdlc_phase: "Operations & Support",
        icon: "🎫",
        description: "ITSM and service desk operations",
        topics: &[
            "Service desk setup and configuration",
            "Incident management",
            "Problem management",
            "Change management",
            "Service request management",
            "SLAs and escalations",
            "AIOps and alert management",
            "Alert grouping and noise reduction",
            "Root Cause Analysis (RCA)",
            "Customer portal customization",
        ],
    },
    CourseModule {
        id: "bitbucket",
        title: "Bitbucket & CI/CD",
        duration: "Week 4",
        sdlc_phase: "Development, Deployment",
        icon: "🔀",
        description: "Git version control and continuous integration",
        topics: &[
            "Git fundamentals and branching strategies",
            "Bitbucket repository management",
            "Pull requests and code reviews",
            "Bitbucket Pipelines configuration",
            "Building and testing automation",
            "Docker image builds",
            "Deployment to AWS (ECR, ECS)",
            "Jira-Bitbucket integration",
            "Smart commits and automation",
        ],
    },
    CourseModule {
        id: "statuspage",
        title: "Statuspage",
        duration: "Week 5 (Part 1)",
        sdlc_phase: "Operations & Support",
        icon: "📊",
        description: "Status communication and incident updates",
        topics: &[
            "Statuspage setup and configuration",
            "Component and metric management",
            "Incident communication",
            "Scheduled maintenance",
            "Subscriber notifications",
            "Integration with monitoring tools",
            "Automation with APIs",
        ],
    },
    CourseModule {
        id: "rovo",
        title: "Atlassian Rovo & AI",
        duration: "Week 5 (Part 2)",
        sdlc_phase: "All Phases",
        icon: "🤖",
        description: "AI-powered productivity and automation",
        topics: &[
            "Atlassian Intelligence overview",
            "Rovo AI agents",
            "AI-assisted issue creation",
            "Smart suggestions and automation",
            "Natural language JQL",
            "AI-powered search",
            "Custom AI agents development",
        ],
    },
    CourseModule {
        id: "marketplace-apps",
        title: "ScriptRunner, JMWE & eazyBI",
        duration: "Week 6",
        sdlc_phase: "Development, Reporting",
        icon: "🔧",
        description: "Powerful Jira extensions and reporting",
        topics: &[
            "ScriptRunner for Jira Cloud",
            "Custom scripts and automation",
            "JMWE (Jira Misc Workflow Extensions)",
            "Advanced workflow conditions and validators",
            "eazyBI for advanced reporting",
            "Custom reports and dashboards",
            "Data import and cube configuration",
        ],
    },
    CourseModule {
        id: "python-jira",
        title: "Python + Jira REST API",
        duration: "Week 7 (Part 1)",
        sdlc_phase: "Development, Automation",
        icon: "🐍",
        description: "Programmatic Jira automation with Python",
        topics: &[
            "Jira REST API fundamentals",
            "Authentication (API tokens, OAuth)",
            "Python requests library",
            "Creating and updating issues",
            "Bulk operations",
            "Custom field handling",
            "Automation scripts",
            "Error handling and logging",
        ],
    },
    CourseModule {
        id: "ansible",
        title: "Ansible + Jira Module",
        duration: "Week 7 (Part 2)",
        sdlc_phase: "Deployment, Operations",
        icon: "⚙️",
        description: "Infrastructure automation with Jira integration",
        topics: &[
            "Ansible fundamentals",
            "Playbooks and roles",
            "Jira module for Ansible",
            "Automated issue creation on deployment",
            "Inventory management",
            "Integration with CI/CD",
            "Infrastructure as Code concepts",
        ],
    },
    CourseModule {
        id: "n8n",
        title: "n8n No-Code Workflows",
        duration: "Week 7 (Part 3)",
        sdlc_phase: "Automation",
        icon: "🔄",
        description: "Visual workflow automation",
        topics: &[
            "n8n installation and setup",
            "Visual workflow builder",
            "Jira node configuration",
            "Webhooks and triggers",
            "Multi-app integrations",
            "Error handling in workflows",
            "Scheduling and automation",
        ],
    },
    CourseModule {
        id: "linux-aws",
        title: "Linux & AWS Basics",
        duration: "Week 8 (Part 1)",
        sdlc_phase: "Deployment, Operations",
        icon: "☁️",
        description: "Cloud infrastructure fundamentals",
        topics: &[
            "Linux command line essentials",
            "File system and permissions",
            "Process management",
            "AWS account setup and IAM",
            "EC2 instance management",
            "CloudWatch monitoring and logging",
            "Security groups and networking",
            "Cost management basics",
        ],
    },
    CourseModule {
        id: "devops",
        title: "DevOps Fundamentals",
        duration: "Week 8 (Part 2)",
        sdlc_phase: "All Phases",
        icon: "🚀",
        description: "DevOps culture and practices",
        topics: &[
            "DevOps principles and culture",
            "CI/CD pipeline design",
            "Container basics (Docker)",
            "Container orchestration (ECS)",
            "Infrastructure as Code",
            "Monitoring and observability",
            "Incident response",
            "Course project presentation",
        ],
    },
];

pub static SDLC_PHASES: &[SdlcPhase] = &[
    SdlcPhase { id: "planning", name: "Requirements & Planning", icon: "📝" },
    SdlcPhase { id: "design", name: "Design", icon: "🎨" },
    SdlcPhase { id: "development", name: "Development", icon: "💻" },
    SdlcPhase { id: "testing", name: "Testing & QA", icon: "🧪" },
    SdlcPhase { id: "deployment", name: "Deployment", icon: "🚀" },
    SdlcPhase { id: "operations", name: "Operations & Support", icon: "🔧" },
    SdlcPhase { id: "reporting", name: "Reporting", icon: "📊" },
];
