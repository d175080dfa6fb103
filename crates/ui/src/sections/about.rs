use crate::hooks::{use_counter, use_reveal};
use crate::widgets::{HighlightGrid, ProgressBar, SectionHeader, stat_text};
use dioxus::prelude::*;
use folio::content::PROFILE;
use folio::domain::SectionId;
use folio::domain::config::FolioConfig;
use folio::domain::skills::{Education, Stat, TechLevel};
use folio::features::motion::{CounterSchedule, Reveal, Stagger};

#[component]
pub fn About() -> Element {
    let config = use_context::<FolioConfig>();
    let reveal = use_reveal(SectionId::About);
    let about = &PROFILE.about;
    let state = reveal();

    let schedule = CounterSchedule {
        stagger: config.motion.counter_stagger(),
        interval: config.motion.counter_interval(),
        steps: config.motion.counter_steps,
    };
    let reveal_class = state.section_class();

    rsx! {
        section { id: SectionId::About.id(), class: "section",
            div { class: "container",
                SectionHeader { title: "About Me", intro: about.intro, class: reveal_class }
                div { class: "grid two-col",
                    div { class: "about-story {reveal_class}",
                        h3 { "{PROFILE.identity.headline}" }
                        for paragraph in about.paragraphs {
                            p { class: "lead muted", "{paragraph}" }
                        }
                        div { class: "grid three-col counters",
                            for (i, stat) in PROFILE.hero.stats.iter().enumerate() {
                                CounterCard { key: "{stat.label}", stat: *stat, index: i, schedule, reveal }
                            }
                        }
                        h4 { "Key Achievements" }
                        HighlightGrid {
                            items: about.achievements,
                            card_class: state.card_class(),
                            stagger: Stagger::new(100),
                        }
                    }
                    div { class: reveal_class,
                        div { class: "glass panel",
                            h4 { class: "center", "Technical Expertise" }
                            TechLevels { levels: about.tech_levels, revealed: state.is_revealed() }
                        }
                    }
                }
                div { class: "education {reveal_class}",
                    h4 { class: "center", "Education & Professional Development" }
                    EducationGrid { items: about.education }
                }
            }
        }
    }
}

/// Stat that counts up once the section is revealed.
#[component]
pub fn CounterCard(
    stat: Stat,
    index: usize,
    schedule: CounterSchedule,
    reveal: Signal<Reveal>,
) -> Element {
    let counter = use_counter(stat.value, schedule, index, reveal);
    let shown = counter.read().value();

    rsx! {
        div { class: "glass stat-card hover-glow",
            div { class: "stat-number text-gradient-green", {stat_text(shown, stat.suffix)} }
            div { class: "stat-label", "{stat.label}" }
        }
    }
}

#[component]
pub fn TechLevels(levels: &'static [TechLevel], revealed: bool) -> Element {
    let stagger = Stagger::new(100).offset(500);
    let card_class = if revealed { "card-stagger animate" } else { "card-stagger" };

    rsx! {
        div { class: "tech-levels",
            for (i, tech) in levels.iter().enumerate() {
                div {
                    key: "{tech.name}",
                    class: "tech-level {card_class}",
                    style: "animation-delay: {stagger.css(i)}",
                    div { class: "bar-label",
                        span { "{tech.icon} {tech.name}" }
                        span { class: "accent", "{tech.level}%" }
                    }
                    ProgressBar { level: tech.level, color: tech.color, revealed, delay: stagger.css(i) }
                }
            }
        }
    }
}

#[component]
pub fn EducationGrid(items: &'static [Education]) -> Element {
    rsx! {
        div { class: "grid four-col",
            for item in items {
                div { key: "{item.title}", class: "glass education-card hover-glow center",
                    div { class: "highlight-icon", "{item.icon}" }
                    h5 { "{item.title}" }
                    p { class: "muted", "{item.field}" }
                    p { class: "accent small", "{item.institution}" }
                }
            }
        }
    }
}
