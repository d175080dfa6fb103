use folio_domain::project::{Project, ProjectCategory, ProjectStatus};

pub const GITHUB_PROFILE: &str = "http://github.com/shinanmohamed363";

pub const PROJECTS: &[Project] = &[
    Project {
        id: "smartco",
        title: "SmartCo Management Platform",
        description: "Fully automated cross-platform software solution for customer transactions and internal operations, significantly enhancing efficiency and scalability.",
        tech: &["MERN Stack", "PayPal/KNET", "Socket.IO", "MongoDB", "Digital Ocean"],
        live_url: Some("https://app.smartco.live"),
        github_url: None,
        category: ProjectCategory::Industrial,
        featured: true,
        impact: Some("Enhanced efficiency and scalability"),
        icon: "💼",
        status: ProjectStatus::Completed,
    },
    Project {
        id: "oran",
        title: "Oran - AI Salon Management",
        description: "Large-scale AI-powered salon management system targeting Europe and the Middle East with intelligent scheduling and customer management.",
        tech: &["Python", "LLM", "ML", "Flask", "React", "TypeScript", "Microservices"],
        live_url: Some("https://www.oranesalon.com"),
        github_url: None,
        category: ProjectCategory::Industrial,
        featured: true,
        impact: Some("AI-driven optimization for salon operations"),
        icon: "💇‍♀️",
        status: ProjectStatus::Completed,
    },
    Project {
        id: "akira",
        title: "Akira E-commerce Platform",
        description: "WordPress/WooCommerce e-commerce platform with custom plugin development and third-party delivery integration.",
        tech: &["WordPress", "WooCommerce", "MySQL", "PHP", "Digital Ocean"],
        live_url: Some("https://akira.lk"),
        github_url: None,
        category: ProjectCategory::Industrial,
        featured: true,
        impact: Some("Streamlined order management and fulfillment"),
        icon: "🛒",
        status: ProjectStatus::Completed,
    },
    Project {
        id: "ministore",
        title: "Multi-tenant E-commerce Platforms",
        description: "Laravel-based multi-tenant e-commerce platforms (MiniStore.lk & LocalShop.lk) with dynamic store creation and management.",
        tech: &["Laravel", "PHP", "MySQL", "Livewire", "Digital Ocean"],
        live_url: Some("https://ministore.lk"),
        github_url: None,
        category: ProjectCategory::Industrial,
        featured: true,
        impact: Some("Enabled multiple business launches"),
        icon: "🏪",
        status: ProjectStatus::Completed,
    },
    Project {
        id: "netflix-clone",
        title: "Netflix Clone",
        description: "Full-featured Netflix clone with user authentication, movie browsing, and streaming interface built with modern React.",
        tech: &["React", "Node.js", "MongoDB", "Express", "JWT"],
        live_url: Some("https://sanan-netflix-clone-w39d.vercel.app"),
        github_url: Some(GITHUB_PROFILE),
        category: ProjectCategory::Personal,
        featured: true,
        impact: None,
        icon: "🎬",
        status: ProjectStatus::Completed,
    },
    Project {
        id: "apple-clone",
        title: "Apple Website Clone",
        description: "Pixel-perfect recreation of Apple's website with smooth animations and responsive design using React and Tailwind CSS.",
        tech: &["React", "Tailwind CSS", "Framer Motion", "TypeScript"],
        live_url: Some("https://sanan-apple-clone.vercel.app"),
        github_url: Some(GITHUB_PROFILE),
        category: ProjectCategory::Personal,
        featured: true,
        impact: None,
        icon: "🍎",
        status: ProjectStatus::Completed,
    },
    Project {
        id: "tesla-clone",
        title: "Tesla Website Clone",
        description: "Interactive Tesla website clone featuring 3D elements, smooth scrolling, and modern UI/UX design patterns.",
        tech: &["React", "Three.js", "Tailwind CSS", "Framer Motion"],
        live_url: Some("https://tesla-clone-silk-beta.vercel.app"),
        github_url: Some(GITHUB_PROFILE),
        category: ProjectCategory::Personal,
        featured: true,
        impact: None,
        icon: "🚗",
        status: ProjectStatus::Completed,
    },
    Project {
        id: "portfolio",
        title: "Portfolio Website",
        description: "Previous portfolio website showcasing projects and skills with modern design and smooth animations.",
        tech: &["React", "Next.js", "Tailwind CSS", "Framer Motion"],
        live_url: Some("https://shinanportfolio.vercel.app"),
        github_url: Some(GITHUB_PROFILE),
        category: ProjectCategory::Personal,
        featured: false,
        impact: None,
        icon: "💼",
        status: ProjectStatus::Completed,
    },
];
