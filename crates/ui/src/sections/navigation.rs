use crate::actions::scroll_to_section;
use crate::hooks::use_viewport;
use dioxus::prelude::*;
use folio::content::PROFILE;
use folio::domain::SectionId;
use folio::features::navigation::{NavItem, nav_items};

/// Fixed top bar with the scroll spy and the mobile menu.
#[component]
pub fn Navigation() -> Element {
    let mut nav = use_viewport();
    let state = nav();

    let mut go = move |section: SectionId| {
        let target = nav.write().navigate(section);
        scroll_to_section(target.section, target.offset);
    };

    let bar_class = if state.scrolled { "nav glass-strong scrolled" } else { "nav" };
    let menu_class = if state.menu_open { "mobile-menu open" } else { "mobile-menu" };
    let burger_class = if state.menu_open { "burger open" } else { "burger" };
    let burger_label = if state.menu_open { "Close menu" } else { "Open menu" };

    rsx! {
        nav { class: bar_class, "data-nav": "true",
            div { class: "container nav-inner",
                button { class: "brand text-gradient", onclick: move |_| go(SectionId::Hero),
                    "{PROFILE.identity.display_name}"
                }
                div { class: "nav-links desktop-only",
                    NavLinks { items: nav_items(), active: state.active, on_select: go }
                }
                button {
                    class: "btn-primary small desktop-only",
                    onclick: move |_| go(SectionId::Contact),
                    "Get In Touch"
                }
                button {
                    class: "{burger_class} glass mobile-only",
                    aria_label: burger_label,
                    onclick: move |_| nav.write().toggle_menu(),
                    span {}
                    span {}
                    span {}
                }
            }
            div { class: "{menu_class} mobile-only",
                div { class: "glass-strong mobile-panel",
                    NavLinks { items: nav_items(), active: state.active, on_select: go }
                    button {
                        class: "btn-primary wide",
                        onclick: move |_| go(SectionId::Contact),
                        "Get In Touch"
                    }
                }
            }
        }
    }
}

/// Section links with the active one underlined.
#[component]
pub fn NavLinks(items: Vec<NavItem>, active: SectionId, on_select: EventHandler<SectionId>) -> Element {
    rsx! {
        for item in items {
            a {
                key: "{item.section}",
                class: link_class(item.section == active),
                href: item.href,
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    on_select.call(item.section);
                },
                "{item.label}"
            }
        }
    }
}

const fn link_class(active: bool) -> &'static str {
    if active { "nav-link active" } else { "nav-link" }
}
