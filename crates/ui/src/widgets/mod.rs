//! Small presentational building blocks shared by several sections.

use dioxus::prelude::*;
use folio::domain::skills::{Highlight, Stat, TechBadge};
use folio::features::motion::{Counter, Stagger, bar_width};

/// `target="_blank"` for web links; `mailto:`/`tel:` stay in place.
pub(crate) const fn link_target(external: bool) -> Option<&'static str> {
    if external { Some("_blank") } else { None }
}

pub(crate) const fn link_rel(external: bool) -> Option<&'static str> {
    if external { Some("noopener noreferrer") } else { None }
}

/// Stat figure as written on the page (`2.8+`, `99.9%`).
pub fn stat_text(value: f64, suffix: &str) -> String {
    format!("{}{suffix}", Counter::new(value, 0).display())
}

#[component]
pub fn SectionHeader(title: &'static str, intro: &'static str, class: &'static str) -> Element {
    rsx! {
        div { class: "section-header",
            h2 { class: "section-title text-gradient {class}", "{title}" }
            p { class: "section-intro {class}", "{intro}" }
        }
    }
}

/// Decorative blurred circles behind a section.
#[component]
pub fn FloatingOrbs(count: usize) -> Element {
    rsx! {
        div { class: "orbs",
            for i in 0..count {
                div { key: "{i}", class: "orb orb-{i} animate-float" }
            }
        }
    }
}

#[component]
pub fn BadgeRow(badges: &'static [TechBadge], class: &'static str) -> Element {
    let stagger = Stagger::new(500);
    rsx! {
        div { class: "badge-row {class}",
            for (i, badge) in badges.iter().enumerate() {
                div {
                    key: "{badge.name}",
                    class: "glass tech-icon hover-glow",
                    title: badge.name,
                    style: "animation-delay: {stagger.css(i)}",
                    span { "{badge.icon}" }
                }
            }
        }
    }
}

#[component]
pub fn StatRow(stats: &'static [Stat]) -> Element {
    rsx! {
        div { class: "stat-row fade-in-up",
            for stat in stats {
                div { key: "{stat.label}", class: "stat",
                    div { class: "stat-number text-gradient-green", {stat_text(stat.value, stat.suffix)} }
                    div { class: "stat-label", "{stat.label}" }
                }
            }
        }
    }
}

/// Proficiency bar that grows from zero once its section is revealed.
#[component]
pub fn ProgressBar(level: u8, color: &'static str, revealed: bool, delay: String) -> Element {
    let width = bar_width(level, revealed);
    rsx! {
        div { class: "bar-track",
            div {
                class: "bar-fill {color}",
                style: "width: {width}; transition-delay: {delay}",
            }
        }
    }
}

/// Grid of icon cards (achievements, highlights, milestones).
#[component]
pub fn HighlightGrid(
    items: &'static [Highlight],
    card_class: &'static str,
    stagger: Option<Stagger>,
) -> Element {
    rsx! {
        div { class: "grid highlight-grid",
            for (i, item) in items.iter().enumerate() {
                div {
                    key: "{item.title}",
                    class: "glass highlight-card hover-glow {card_class}",
                    style: stagger.map(|s| format!("animation-delay: {}", s.css(i))),
                    div { class: "highlight-icon", "{item.icon}" }
                    h4 { "{item.title}" }
                    p { class: "muted", "{item.description}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_text_drops_trailing_zero() {
        assert_eq!(stat_text(15.0, "+"), "15+");
        assert_eq!(stat_text(2.8, "+"), "2.8+");
        assert_eq!(stat_text(99.9, "%"), "99.9%");
    }

    #[test]
    fn only_web_links_open_new_tab() {
        assert_eq!(link_target(true), Some("_blank"));
        assert_eq!(link_rel(false), None);
    }
}
