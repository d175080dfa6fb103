use folio_domain::experience::{EmploymentKind, ExperienceEntry, Reference, SkillGroup};
use folio_domain::profile::ExperienceContent;
use folio_domain::skills::Highlight;

pub(crate) const EXPERIENCE: ExperienceContent = ExperienceContent {
    intro: "2.8+ years of progressive growth from intern to mid-level engineer, building scalable solutions",
    entries: &[
        ExperienceEntry {
            id: "one-day-digital",
            company: "ONE DAY DIGITAL",
            position: "Mid-Level Software Engineer",
            duration: "2+ Years",
            period: "Mar 2023 – Aug 2025",
            progression: Some("Promoted from Intern → Junior → Mid-Level"),
            kind: EmploymentKind::FullTime,
            logo: "🚀",
            responsibilities: &[
                "Built and maintained cross-platform POS solutions delivering desktop, web, and mobile interfaces",
                "Developed microservice-based backends with JWT authentication and RESTful APIs",
                "Architected solutions ensuring 99.9% uptime on Digital Ocean infrastructure",
                "Led development of 10+ applications using diverse tech stacks for various clients",
            ],
            achievements: &[
                "Enhanced efficiency and scalability for retail clients",
                "Achieved 92% reduction in production bugs through TypeScript and Zod validation",
                "Successfully delivered cross-platform solutions across desktop, web, and mobile",
                "Streamlined transaction workflows and reporting systems",
                "Implemented clean, maintainable code practices with thorough code reviews",
            ],
            technologies: &[
                "MERN Stack",
                "TypeScript",
                "PHP/Laravel",
                "Python/Flask",
                "Digital Ocean",
                "Docker",
                "JWT Authentication",
                "RESTful APIs",
                "WebSocket (WSS)",
                "Microservices",
                "Agile/Scrum",
                "Bitbucket",
                "MongoDB",
                "MySQL",
            ],
        },
        ExperienceEntry {
            id: "synapse-solution",
            company: "SYNAPSE SOLUTION PVT LTD",
            position: "Intern Software Engineer",
            duration: "5 Months",
            period: "Oct 2022 – Mar 2023",
            progression: None,
            kind: EmploymentKind::Internship,
            logo: "💻",
            responsibilities: &[
                "Developed dynamic React web pages using state management and modern JavaScript",
                "Designed SEO-optimized modern UIs enhancing user experience",
                "Collaborated with designers, developers, and product managers",
                "Built microservice-based Java (Spring Boot) backends with SOLID principles",
            ],
            achievements: &[
                "Boosted website leads by 15% through improved React interfaces",
                "Enhanced user experience and client satisfaction with modern UI designs",
                "Delivered high-quality features on schedule through effective collaboration",
                "Improved legacy software performance by 30%",
                "Applied data structures & algorithms best practices in backend development",
            ],
            technologies: &[
                "React",
                "JavaScript (ES6+)",
                "Java Spring Boot",
                "HTML5/CSS3",
                "SOLID Principles",
                "Data Structures & Algorithms",
                "SEO Optimization",
                "UI/UX Design",
                "Legacy System Maintenance",
            ],
        },
    ],
    skill_groups: &[
        SkillGroup {
            category: "Frontend",
            skills: &["React", "TypeScript", "Tailwind CSS", "State Management"],
        },
        SkillGroup {
            category: "Backend",
            skills: &["Node.js", "PHP/Laravel", "Python/Flask", "Java Spring Boot"],
        },
        SkillGroup {
            category: "Database",
            skills: &["MongoDB", "MySQL", "Database Design", "Query Optimization"],
        },
        SkillGroup { category: "DevOps", skills: &["Digital Ocean", "Docker", "CI/CD", "Linux/Ubuntu"] },
        SkillGroup {
            category: "Architecture",
            skills: &["Microservices", "RESTful APIs", "JWT Auth", "MVC Pattern"],
        },
        SkillGroup {
            category: "Soft Skills",
            skills: &["Agile/Scrum", "Team Leadership", "Code Reviews", "Mentoring"],
        },
    ],
    milestones: &[
        Highlight {
            icon: "🎓",
            title: "Intern (2022)",
            description: "Started as an intern, focused on learning React and Java Spring Boot fundamentals",
        },
        Highlight {
            icon: "🚀",
            title: "Junior Developer (2023)",
            description: "Promoted to junior role, began building full-stack applications independently",
        },
        Highlight {
            icon: "👨‍💼",
            title: "Mid-Level Engineer (2024+)",
            description: "Leading projects, mentoring juniors, and architecting scalable solutions",
        },
    ],
    reference: Reference {
        name: "Reshika Sandeepa",
        role: "Cloud Engineer - Codegen International (Pvt) Ltd",
        email: "reshika@codegen.net",
        phone: "+94 771504161",
    },
};
