//! Tools covered in the bootcamp, grouped by category on the tools page.

#[derive(Debug)]
pub struct Tool {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub icon: &'static str,
    pub purpose: &'static str,
    pub sdlc_phases: &'static [&'static str],
    pub sdlc_fit: &'static str,
    pub link: &'static str,
}

pub static TOOLS: &[Tool] = &[
    Tool {
        id: "jira-software",
        name: "Jira Software Cloud",
        category: "Atlassian",
        icon: "📋",
        purpose: "Agile project management and issue tracking",
        sdlc_phases: &["Requirements & Planning", "Development", "Testing & QA"],
        sdlc_fit: "Central hub for planning sprints, tracking development tasks, and managing QA workflows. Create user stories, track bugs, and monitor team progress.",
        link: "https://www.atlassian.com/software/jira",
    },
    Tool {
        id: "jsm",
        name: "Jira Service Management",
        category: "Atlassian",
        icon: "🎫",
        purpose: "IT service management and customer support",
        sdlc_phases: &["Operations & Support"],
        sdlc_fit: "Manage incidents, problems, and changes in production. Handle service requests and maintain SLAs. AIOps capabilities for alert management.",
        link: "https://www.atlassian.com/software/jira/service-management",
    },
    Tool {
        id: "bitbucket",
        name: "Bitbucket",
        category: "Atlassian",
        icon: "🔀",
        purpose: "Git repository hosting and CI/CD pipelines",
        sdlc_phases: &["Development", "Deployment"],
        sdlc_fit: "Store and version code, conduct code reviews via pull requests, and automate builds and deployments with Bitbucket Pipelines.",
        link: "https://bitbucket.org",
    },
    Tool {
        id: "statuspage",
        name: "Statuspage",
        category: "Atlassian",
        icon: "📊",
        purpose: "Status communication and incident updates",
        sdlc_phases: &["Operations & Support"],
        sdlc_fit: "Communicate system status to users, announce scheduled maintenance, and provide real-time incident updates during outages.",
        link: "https://www.atlassian.com/software/statuspage",
    },
    Tool {
        id: "rovo",
        name: "Atlassian Rovo / Intelligence",
        category: "Atlassian",
        icon: "🤖",
        purpose: "AI-powered productivity and knowledge assistant",
        sdlc_phases: &["Requirements & Planning", "Development", "Operations & Support"],
        sdlc_fit: "AI agents that help with issue creation, smart suggestions, natural language queries, and knowledge discovery across Atlassian products.",
        link: "https://www.atlassian.com/software/rovo",
    },
    Tool {
        id: "scriptrunner",
        name: "ScriptRunner for Jira Cloud",
        category: "Marketplace Apps",
        icon: "⚡",
        purpose: "Advanced scripting and automation for Jira",
        sdlc_phases: &["Development", "Automation"],
        sdlc_fit: "Extend Jira with custom scripts, listeners, and automation rules. Implement complex business logic and integrations.",
        link: "https://marketplace.atlassian.com/apps/1211542/scriptrunner-for-jira-cloud",
    },
    Tool {
        id: "jmwe",
        name: "JMWE (Jira Misc Workflow Extensions)",
        category: "Marketplace Apps",
        icon: "🔧",
        purpose: "Enhanced workflow conditions and validators",
        sdlc_phases: &["Development"],
        sdlc_fit: "Add powerful conditions, validators, and post functions to Jira workflows without coding.",
        link: "https://marketplace.atlassian.com/apps/1211572/jira-misc-workflow-extensions-jmwe",
    },
    Tool {
        id: "eazybi",
        name: "eazyBI",
        category: "Marketplace Apps",
        icon: "📈",
        purpose: "Advanced reporting and business intelligence",
        sdlc_phases: &["Reporting"],
        sdlc_fit: "Create sophisticated reports and dashboards. Analyze Jira data with custom dimensions and measures. Track team metrics and KPIs.",
        link: "https://marketplace.atlassian.com/apps/1211051/eazybi-reports-and-charts-for-jira",
    },
    Tool {
        id: "n8n",
        name: "n8n",
        category: "Automation",
        icon: "🔄",
        purpose: "Visual workflow automation platform",
        sdlc_phases: &["Automation"],
        sdlc_fit: "Build automated workflows connecting Jira with 200+ other services. No-code/low-code automation for complex integrations.",
        link: "https://n8n.io",
    },
    Tool {
        id: "ansible",
        name: "Ansible",
        category: "Automation",
        icon: "⚙️",
        purpose: "IT automation and configuration management",
        sdlc_phases: &["Deployment", "Operations & Support"],
        sdlc_fit: "Automate infrastructure provisioning and deployments. Use Jira module to create issues on deployment events.",
        link: "https://www.ansible.com",
    },
    Tool {
        id: "python-jira",
        name: "Python + Jira REST API",
        category: "Automation",
        icon: "🐍",
        purpose: "Programmatic Jira automation and scripting",
        sdlc_phases: &["Development", "Automation"],
        sdlc_fit: "Build custom integrations and automation scripts. Bulk operations, data migration, and custom reporting.",
        link: "https://jira.readthedocs.io/en/master/",
    },
    Tool {
        id: "aws-ec2",
        name: "AWS EC2",
        category: "AWS",
        icon: "🖥️",
        purpose: "Virtual servers in the cloud",
        sdlc_phases: &["Deployment"],
        sdlc_fit: "Run applications and services on scalable virtual machines. Foundation for cloud deployments.",
        link: "https://aws.amazon.com/ec2/",
    },
    Tool {
        id: "aws-cloudwatch",
        name: "AWS CloudWatch",
        category: "AWS",
        icon: "👁️",
        purpose: "Monitoring and observability",
        sdlc_phases: &["Operations & Support"],
        sdlc_fit: "Monitor application logs and metrics. Set up alarms for critical thresholds. Integrate with JSM for incident management.",
        link: "https://aws.amazon.com/cloudwatch/",
    },
    Tool {
        id: "aws-iam",
        name: "AWS IAM",
        category: "AWS",
        icon: "🔐",
        purpose: "Identity and access management",
        sdlc_phases: &["All Phases"],
        sdlc_fit: "Manage user permissions and service roles. Essential for security in all AWS deployments.",
        link: "https://aws.amazon.com/iam/",
    },
    Tool {
        id: "linux",
        name: "Linux",
        category: "Foundations",
        icon: "🐧",
        purpose: "Operating system for servers and development",
        sdlc_phases: &["Development", "Deployment", "Operations & Support"],
        sdlc_fit: "Essential for server management, container operations, and DevOps workflows. Command line skills for automation.",
        link: "https://www.linux.org",
    },
    Tool {
        id: "chatgpt",
        name: "ChatGPT",
        category: "AI Tools",
        icon: "💬",
        purpose: "AI assistant for coding and documentation",
        sdlc_phases: &["Requirements & Planning", "Development"],
        sdlc_fit: "Get help writing code, documentation, and solving problems. Accelerate learning and productivity.",
        link: "https://chat.openai.com",
    },
    Tool {
        id: "claude",
        name: "Claude",
        category: "AI Tools",
        icon: "🧠",
        purpose: "AI assistant for analysis and content",
        sdlc_phases: &["Requirements & Planning", "Development"],
        sdlc_fit: "Analyze requirements, generate documentation, and assist with complex problem-solving.",
        link: "https://claude.ai",
    },
];

/// Group tools by category.
///
/// Categories appear in the order they are first seen; tools keep catalog
/// order within their category.
pub fn group_by_category(tools: &'static [Tool]) -> Vec<(&'static str, Vec<&'static Tool>)> {
    let mut groups: Vec<(&'static str, Vec<&'static Tool>)> = Vec::new();
    for tool in tools {
        match groups.iter_mut().find(|(category, _)| *category == tool.category) {
            Some((_, members)) => members.push(tool),
            None => groups.push((tool.category, vec![tool])),
        }
    }
    groups
}
