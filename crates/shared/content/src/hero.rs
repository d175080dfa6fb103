use folio_domain::profile::HeroContent;
use folio_domain::skills::{Stat, TechBadge};

pub(crate) const HERO: HeroContent = HeroContent {
    roles: &[
        "Full-Stack Software Engineer",
        "MERN Stack Developer",
        "Python Developer",
        "AI/ML Enthusiast",
    ],
    stats: &[
        Stat { value: 2.8, suffix: "+", label: "Years Experience" },
        Stat { value: 15.0, suffix: "+", label: "Projects Delivered" },
        Stat { value: 99.9, suffix: "%", label: "Uptime" },
    ],
    tech: &[
        TechBadge { name: "React", icon: "⚛️" },
        TechBadge { name: "Node.js", icon: "🟢" },
        TechBadge { name: "Python", icon: "🐍" },
        TechBadge { name: "JavaScript", icon: "📜" },
        TechBadge { name: "MongoDB", icon: "🍃" },
        TechBadge { name: "Laravel", icon: "🔥" },
    ],
};
