use crate::hooks::use_reveal;
use crate::widgets::{HighlightGrid, ProgressBar, SectionHeader};
use dioxus::prelude::*;
use folio::content::PROFILE;
use folio::domain::SectionId;
use folio::domain::skills::{Certification, SkillCategory};
use folio::features::motion::Stagger;

#[component]
pub fn Skills() -> Element {
    let reveal = use_reveal(SectionId::Skills);
    let skills = &PROFILE.skills;
    let state = reveal();
    let reveal_class = state.section_class();

    rsx! {
        section { id: SectionId::Skills.id(), class: "section",
            div { class: "container",
                SectionHeader { title: "Technical Skills", intro: skills.intro, class: reveal_class }
                div { class: "grid two-col skill-categories",
                    for (i, category) in skills.categories.iter().enumerate() {
                        SkillCategoryCard {
                            key: "{category.title}",
                            category: *category,
                            index: i,
                            revealed: state.is_revealed(),
                        }
                    }
                }
                div { class: "glass panel {reveal_class}",
                    div { class: "center",
                        h3 { "Certifications & Achievements" }
                        p { class: "muted", "Professional development and continuous learning journey" }
                    }
                    Certifications { items: skills.certifications, card_class: state.card_class() }
                }
                div { class: "highlights center {reveal_class}",
                    h3 { "Technical Highlights" }
                    HighlightGrid { items: skills.highlights, card_class: "" }
                }
                div { class: "philosophy center {reveal_class}",
                    div { class: "glass panel narrow",
                        h3 { "Continuous Learning Philosophy" }
                        p { class: "lead muted", "\"{skills.philosophy}\"" }
                        div { class: "pill-row",
                            for value in skills.values {
                                span { class: "glass pill", "{value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One category of skills with animated proficiency bars.
#[component]
pub fn SkillCategoryCard(category: SkillCategory, index: usize, revealed: bool) -> Element {
    let card_class = if revealed { "card-stagger animate" } else { "card-stagger" };
    let card_delay = Stagger::new(200).css(index);
    let bar_stagger = Stagger::new(100).offset(200 * index as u64);

    rsx! {
        div {
            class: "glass panel skill-category hover-glow {card_class}",
            style: "animation-delay: {card_delay}",
            div { class: "category-header",
                span { class: "category-icon", "{category.icon}" }
                h3 { "{category.title}" }
            }
            div { class: "skill-list",
                for (i, skill) in category.skills.iter().enumerate() {
                    div { key: "{skill.name}", class: "skill",
                        div { class: "bar-label",
                            span {
                                "{skill.icon} {skill.name} "
                                span { class: "years", "{skill.years}y" }
                            }
                            span { class: "accent", "{skill.level}%" }
                        }
                        ProgressBar {
                            level: skill.level,
                            color: skill.color,
                            revealed,
                            delay: bar_stagger.css(i),
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Certifications(items: &'static [Certification], card_class: &'static str) -> Element {
    let stagger = Stagger::new(100).offset(500);
    rsx! {
        div { class: "grid four-col",
            for (i, cert) in items.iter().enumerate() {
                div {
                    key: "{cert.name}",
                    class: "glass cert-card hover-glow center {card_class}",
                    style: "animation-delay: {stagger.css(i)}",
                    div { class: "highlight-icon", "{cert.icon}" }
                    h4 { "{cert.name}" }
                    p { class: "muted", "{cert.issuer}" }
                }
            }
        }
    }
}
