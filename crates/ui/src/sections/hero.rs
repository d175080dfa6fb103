use crate::actions::scroll_to_section;
use crate::hooks::{use_blink, use_typewriter};
use crate::widgets::{BadgeRow, FloatingOrbs, StatRow};
use dioxus::prelude::*;
use folio::content::PROFILE;
use folio::domain::SectionId;
use folio::domain::config::FolioConfig;
use folio::features::motion::TypewriterTiming;

#[component]
pub fn Hero() -> Element {
    let config = use_context::<FolioConfig>();
    let identity = &PROFILE.identity;
    let hero = &PROFILE.hero;

    let typewriter = use_typewriter(hero.roles, TypewriterTiming::from(&config.motion));
    let blink = use_blink(config.motion.cursor_blink());

    let role = typewriter.read().text();
    let cursor = if blink.read().visible() { "cursor visible" } else { "cursor" };

    rsx! {
        section { id: SectionId::Hero.id(), class: "hero",
            FloatingOrbs { count: 4 }
            div { class: "container hero-inner",
                div { class: "portrait-frame",
                    img {
                        class: "portrait",
                        src: identity.portrait,
                        alt: "{identity.full_name} - {identity.headline}",
                    }
                }
                h1 { class: "hero-greeting fade-in-up", "Hello, I'm" }
                h2 {
                    class: "hero-name text-gradient fade-in-up",
                    style: "animation-delay: 0.2s",
                    "{identity.display_name}"
                }
                h3 { class: "hero-role",
                    "{role}"
                    span { class: cursor }
                }
                p { class: "hero-tagline fade-in-up", style: "animation-delay: 0.6s", "{identity.tagline}" }
                StatRow { stats: hero.stats }
                div { class: "hero-actions fade-in-up",
                    button {
                        class: "btn-primary hover-glow",
                        onclick: move |_| scroll_to_section(SectionId::Projects, 0),
                        "View My Projects"
                    }
                    a {
                        class: "btn-secondary hover-glow",
                        href: identity.resume_path,
                        download: identity.resume_file_name,
                        "Download Resume"
                    }
                }
                BadgeRow { badges: hero.tech, class: "fade-in-up" }
                button {
                    class: "scroll-indicator",
                    onclick: move |_| scroll_to_section(SectionId::About, 0),
                    span { "Scroll Down" }
                    div { class: "mouse",
                        div { class: "wheel" }
                    }
                }
            }
        }
    }
}
