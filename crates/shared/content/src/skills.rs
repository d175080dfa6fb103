use folio_domain::profile::SkillsContent;
use folio_domain::skills::{Certification, Highlight, Skill, SkillCategory};

const fn skill(
    name: &'static str,
    level: u8,
    years: &'static str,
    icon: &'static str,
    color: &'static str,
) -> Skill {
    Skill { name, level, years, icon, color }
}

pub(crate) const SKILLS: SkillsContent = SkillsContent {
    intro: "Comprehensive expertise across the full development stack with hands-on experience in modern technologies",
    categories: &[
        SkillCategory {
            title: "Languages & Frameworks",
            icon: "⚡",
            skills: &[
                skill("JavaScript (ES6+)", 95, "2.8", "⚡", "from-yellow-400 to-yellow-600"),
                skill("TypeScript", 88, "2", "📘", "from-blue-400 to-blue-600"),
                skill("React.js", 92, "2.5", "⚛️", "from-cyan-400 to-blue-500"),
                skill("Node.js", 90, "2.8", "🟢", "from-green-400 to-green-600"),
                skill("Python", 85, "2", "🐍", "from-green-400 to-blue-500"),
                skill("PHP/Laravel", 82, "2.5", "🔥", "from-red-400 to-red-600"),
            ],
        },
        SkillCategory {
            title: "Databases & APIs",
            icon: "🗃️",
            skills: &[
                skill("MongoDB", 85, "2.5", "🍃", "from-green-500 to-green-700"),
                skill("MySQL", 88, "2.8", "🐬", "from-blue-500 to-blue-700"),
                skill("RESTful APIs", 92, "2.8", "🔗", "from-purple-400 to-purple-600"),
                skill("GraphQL", 75, "1.5", "📊", "from-pink-400 to-pink-600"),
                skill("Socket.IO", 80, "2", "⚡", "from-yellow-500 to-orange-500"),
            ],
        },
        SkillCategory {
            title: "DevOps & Cloud",
            icon: "☁️",
            skills: &[
                skill("Digital Ocean", 85, "2.5", "🌊", "from-blue-400 to-blue-700"),
                skill("Docker", 75, "1.5", "🐳", "from-blue-400 to-blue-800"),
                skill("Git/GitHub", 92, "2.8", "📋", "from-gray-600 to-gray-800"),
                skill("CI/CD", 78, "2", "🔄", "from-green-500 to-blue-500"),
                skill("Linux/Ubuntu", 80, "2.5", "🐧", "from-orange-400 to-red-500"),
            ],
        },
        SkillCategory {
            title: "Architecture & Tools",
            icon: "🏗️",
            skills: &[
                skill("Microservices", 82, "2", "🔧", "from-purple-500 to-purple-700"),
                skill("MVC Pattern", 90, "2.8", "📐", "from-indigo-400 to-indigo-600"),
                skill("Tailwind CSS", 88, "2", "🎨", "from-cyan-400 to-teal-500"),
                skill("Agile/Scrum", 85, "2.5", "🏃‍♂️", "from-green-400 to-emerald-500"),
                skill("AI/ML Basics", 70, "1", "🤖", "from-violet-400 to-violet-600"),
            ],
        },
    ],
    certifications: &[
        Certification { name: "Full Stack Development", issuer: "Industry Experience", icon: "🏆" },
        Certification { name: "Cloud Deployment", issuer: "Digital Ocean", icon: "☁️" },
        Certification { name: "Agile Methodology", issuer: "Scrum Practice", icon: "⚡" },
        Certification { name: "AI/ML Integration", issuer: "Practical Projects", icon: "🤖" },
    ],
    highlights: &[
        Highlight {
            icon: "🔥",
            title: "Clean Code",
            description: "Following SOLID principles and best practices for maintainable, scalable code",
        },
        Highlight {
            icon: "⚡",
            title: "Performance",
            description: "Optimized applications with 99.9% uptime and 30% performance improvements",
        },
        Highlight {
            icon: "🚀",
            title: "Innovation",
            description: "Integrating cutting-edge technologies like AI/ML and microservices architecture",
        },
    ],
    philosophy: "Technology evolves rapidly, and I embrace this change by continuously learning new frameworks, languages, and methodologies. My goal is to stay at the forefront of software development while maintaining a strong foundation in computer science principles.",
    values: &["Always Learning", "Innovation Focused", "Quality Driven"],
};
