use folio_domain::contact::{ContactChannel, Post, PostKind, SocialLink};
use folio_domain::profile::ContactContent;

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "📧",
        label: "Email",
        value: "Shinanmohamed363@gmail.com",
        href: "mailto:Shinanmohamed363@gmail.com",
    },
    ContactChannel {
        icon: "📱",
        label: "Phone",
        value: "(+94) 74 024 5152",
        href: "tel:+94740245152",
    },
    ContactChannel {
        icon: "📍",
        label: "Location",
        value: "Negombo, Western Province, Sri Lanka",
        href: "https://maps.google.com/?q=Negombo,Western+Province,Sri+Lanka",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        platform: "GitHub",
        icon: "💻",
        url: "http://github.com/shinanmohamed363",
        handle: "@shinanmohamed363",
    },
    SocialLink {
        platform: "LinkedIn",
        icon: "💼",
        url: "https://www.linkedin.com/in/shinanmohamed363",
        handle: "Najimudeen Sanan",
    },
    SocialLink {
        platform: "Portfolio",
        icon: "🌐",
        url: "https://shinanportfolio.vercel.app",
        handle: "Previous Portfolio",
    },
];

pub const POSTS: &[Post] = &[
    Post {
        title: "New Project Journey Begins",
        url: "https://www.linkedin.com/posts/shinanmohamed363_day-1-new-project-journey-begins-activity-7277336239916163072-iizR",
        kind: PostKind::Text,
    },
    Post {
        title: "Exciting New Project Alert",
        url: "https://www.linkedin.com/posts/shinanmohamed363_exciting-new-project-alert-thrilled-to-activity-7259960468239196160-kjBO",
        kind: PostKind::Text,
    },
    Post {
        title: "MERN Stack Development",
        url: "https://www.linkedin.com/posts/shinanmohamed363_mernstack-react-webdevelopment-activity-7225453493904453633-Vnxa",
        kind: PostKind::Video,
    },
    Post {
        title: "Web Development Showcase",
        url: "https://www.linkedin.com/posts/shinanmohamed363_mernstack-webdevelopment-softwareengineering-activity-7223383964541972481-BKWr",
        kind: PostKind::Video,
    },
];

pub const FOOTER_SOCIAL: &[SocialLink] = &[
    SocialLink { platform: "GitHub", icon: "💻", url: "http://github.com/shinanmohamed363", handle: "" },
    SocialLink {
        platform: "LinkedIn",
        icon: "💼",
        url: "https://www.linkedin.com/in/shinanmohamed363",
        handle: "",
    },
    SocialLink {
        platform: "Email",
        icon: "📧",
        url: "mailto:Shinanmohamed363@gmail.com",
        handle: "",
    },
    SocialLink { platform: "Phone", icon: "📱", url: "tel:+94740245152", handle: "" },
];

pub(crate) const CONTACT: ContactContent = ContactContent {
    intro: "Ready to collaborate on your next project? Let's discuss how we can build something amazing together",
    channels: CONTACT_CHANNELS,
    social: SOCIAL_LINKS,
    posts: POSTS,
    availability: "Open to full-time opportunities, freelance projects, and collaborations",
};
