use crate::actions::{scroll_to_section, scroll_to_top};
use crate::widgets::{link_rel, link_target};
use chrono::Datelike;
use dioxus::prelude::*;
use folio::content::PROFILE;
use folio::domain::SectionId;
use folio::domain::contact::SocialLink;
use folio::features::navigation::{NavItem, nav_items};

#[component]
pub fn Footer() -> Element {
    let identity = &PROFILE.identity;
    let footer = &PROFILE.footer;
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "footer",
            div { class: "footer-rule" }
            div { class: "container",
                div { class: "grid footer-grid",
                    div { class: "footer-brand",
                        button { class: "brand text-gradient", onclick: move |_| scroll_to_top(),
                            "{identity.display_name}"
                        }
                        p { class: "muted small", "{footer.blurb}" }
                        div { class: "badge-row compact",
                            for badge in footer.tech {
                                div { key: "{badge.name}", class: "glass tech-icon small hover-glow", title: badge.name,
                                    "{badge.icon}"
                                }
                            }
                        }
                    }
                    div {
                        h3 { "Quick Links" }
                        QuickLinks { items: nav_items(), on_select: move |section: SectionId| scroll_to_section(section, 0) }
                    }
                    div {
                        h3 { "Connect" }
                        FooterSocial { links: footer.social }
                    }
                }
                div { class: "footer-bottom",
                    div { class: "muted small", "© {year} {identity.full_name}. All rights reserved." }
                    div { class: "footer-meta",
                        button { class: "link-button", onclick: move |_| scroll_to_top(), "Back to Top ↑" }
                        span { class: "muted", "Made with ❤️ & ☕" }
                    }
                }
                div { class: "center",
                    div { class: "glass availability-pill",
                        span { class: "pulse-dot" }
                        span { class: "green small", "Available for new opportunities" }
                    }
                }
                div { class: "center muted tiny",
                    p { "📍 Based in {identity.location}" }
                    p { "🕐 {identity.timezone}" }
                }
            }
        }
    }
}

#[component]
pub fn QuickLinks(items: Vec<NavItem>, on_select: EventHandler<SectionId>) -> Element {
    rsx! {
        ul { class: "quick-links",
            for item in items {
                li { key: "{item.section}",
                    button { class: "link-button", onclick: move |_| on_select.call(item.section),
                        "{item.label}"
                    }
                }
            }
        }
    }
}

#[component]
fn FooterSocial(links: &'static [SocialLink]) -> Element {
    rsx! {
        div { class: "stack tight",
            for link in links {
                a {
                    key: "{link.platform}",
                    class: "footer-social",
                    href: link.url,
                    target: link_target(link.opens_externally()),
                    rel: link_rel(link.opens_externally()),
                    span { "{link.icon}" }
                    span { class: "small", "{link.platform}" }
                }
            }
        }
    }
}
