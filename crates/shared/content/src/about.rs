use folio_domain::profile::AboutContent;
use folio_domain::skills::{Education, Highlight, TechLevel};

pub(crate) const ABOUT: AboutContent = AboutContent {
    intro: "Passionate full-stack developer with expertise in modern web technologies and a drive for creating impactful solutions",
    paragraphs: &[
        "With 2.8+ years of professional experience, I specialize in building scalable cross-platform solutions using modern technologies. My expertise spans from MERN stack development to AI/ML integration, delivering high-quality software that drives business growth.",
        "I've successfully delivered projects across various domains including e-commerce platforms, management systems, and AI-powered applications. My approach focuses on clean, maintainable code and user-centric design.",
    ],
    achievements: &[
        Highlight {
            icon: "🚀",
            title: "Cross-Platform Solutions",
            description: "Built POS systems with desktop, web, and mobile interfaces",
        },
        Highlight {
            icon: "🤖",
            title: "AI/ML Integration",
            description: "Developed AI-powered salon management systems for Europe & Middle East",
        },
        Highlight {
            icon: "⚡",
            title: "Performance Optimization",
            description: "Achieved 30% performance improvement and 92% bug reduction",
        },
        Highlight {
            icon: "🌍",
            title: "Global Scale",
            description: "Deployed applications serving customers across multiple continents",
        },
    ],
    tech_levels: &[
        TechLevel { name: "JavaScript", level: 95, icon: "⚡", color: "from-yellow-400 to-yellow-600" },
        TechLevel { name: "React", level: 90, icon: "⚛️", color: "from-blue-400 to-blue-600" },
        TechLevel { name: "Node.js", level: 88, icon: "🟢", color: "from-green-400 to-green-600" },
        TechLevel { name: "Python", level: 85, icon: "🐍", color: "from-green-400 to-blue-500" },
        TechLevel { name: "PHP/Laravel", level: 82, icon: "🔥", color: "from-red-400 to-red-600" },
        TechLevel { name: "MongoDB", level: 80, icon: "🍃", color: "from-green-500 to-green-700" },
        TechLevel { name: "MySQL", level: 85, icon: "🐬", color: "from-blue-500 to-blue-700" },
        TechLevel { name: "Docker", level: 75, icon: "🐳", color: "from-blue-400 to-blue-800" },
    ],
    education: &[
        Education {
            icon: "🎓",
            title: "B.Sc. (Hons)",
            field: "Software Engineering",
            institution: "Cardiff Metropolitan University",
        },
        Education { icon: "📜", title: "HND", field: "Software Engineering", institution: "NIBM" },
        Education {
            icon: "🤖",
            title: "AI/ML",
            field: "Machine Learning",
            institution: "Specialized Training",
        },
        Education {
            icon: "☁️",
            title: "Cloud Computing",
            field: "Digital Ocean",
            institution: "Production Experience",
        },
    ],
};
