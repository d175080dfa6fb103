use crate::hooks::use_reveal;
use crate::widgets::{FloatingOrbs, HighlightGrid, SectionHeader};
use dioxus::prelude::*;
use folio::content::PROFILE;
use folio::domain::SectionId;
use folio::domain::experience::{EmploymentKind, ExperienceEntry, Reference, SkillGroup};
use folio::features::motion::Stagger;
use folio::features::showcase::TimelineSide;

#[component]
pub fn Experience() -> Element {
    let reveal = use_reveal(SectionId::Experience);
    let experience = &PROFILE.experience;
    let state = reveal();
    let reveal_class = state.section_class();

    rsx! {
        section { id: SectionId::Experience.id(), class: "section",
            FloatingOrbs { count: 3 }
            div { class: "container",
                SectionHeader { title: "Professional Experience", intro: experience.intro, class: reveal_class }
                ExperienceTimeline { entries: experience.entries, revealed: state.is_revealed() }
                div { class: "skill-groups {reveal_class}",
                    h3 { class: "center", "Skills Developed Through Experience" }
                    SkillGroups { groups: experience.skill_groups, card_class: state.card_class() }
                }
                div { class: "glass panel milestones {reveal_class}",
                    h3 { class: "center", "Career Progression & Growth" }
                    HighlightGrid { items: experience.milestones, card_class: "plain" }
                }
                div { class: "reference center {reveal_class}",
                    h3 { "Professional Reference" }
                    ReferenceCard { reference: experience.reference }
                }
            }
        }
    }
}

/// Vertical timeline; cards alternate sides and the latest position glows.
#[component]
pub fn ExperienceTimeline(entries: &'static [ExperienceEntry], revealed: bool) -> Element {
    let stagger = Stagger::new(300);
    let card_class = if revealed { "card-stagger animate" } else { "card-stagger" };

    rsx! {
        div { class: "timeline",
            div { class: "timeline-line" }
            for (i, entry) in entries.iter().enumerate() {
                div {
                    key: "{entry.id}",
                    class: "timeline-item {TimelineSide::for_index(i).class()} {card_class}",
                    style: "animation-delay: {stagger.css(i)}",
                    div { class: node_class(i) }
                    ExperienceCard { entry: *entry }
                }
            }
        }
    }
}

const fn node_class(index: usize) -> &'static str {
    if TimelineSide::glows(index) { "timeline-node animate-glow" } else { "timeline-node" }
}

#[component]
pub fn ExperienceCard(entry: ExperienceEntry) -> Element {
    let kind_class = match entry.kind {
        EmploymentKind::FullTime => "badge badge-green",
        EmploymentKind::Internship => "badge badge-cyan",
    };

    rsx! {
        div { class: "glass panel experience-card hover-glow",
            div { class: "company-header",
                div { class: "company-logo", "{entry.logo}" }
                div { class: "company-meta",
                    h3 { "{entry.company}" }
                    p { class: "accent", "{entry.position}" }
                    div { class: "period",
                        span { class: "muted small", "{entry.period}" }
                        span { class: "green small", "• {entry.duration}" }
                        if let Some(progression) = entry.progression {
                            span { class: "badge badge-purple", "{progression}" }
                        }
                    }
                }
                span { class: kind_class, "{entry.kind.label()}" }
            }
            h4 { "Role & Responsibilities" }
            ul { class: "bullets",
                for line in entry.responsibilities {
                    li { span { class: "accent", "▪ " } "{line}" }
                }
            }
            h4 { "Key Achievements" }
            ul { class: "bullets",
                for line in entry.achievements {
                    li { span { class: "green", "✓ " } "{line}" }
                }
            }
            h4 { "Technologies & Tools" }
            div { class: "tech-tags",
                for tech in entry.technologies {
                    span { key: "{tech}", class: "tech-tag pill", "{tech}" }
                }
            }
        }
    }
}

#[component]
pub fn SkillGroups(groups: &'static [SkillGroup], card_class: &'static str) -> Element {
    let stagger = Stagger::new(100).offset(500);
    rsx! {
        div { class: "grid three-col",
            for (i, group) in groups.iter().enumerate() {
                div {
                    key: "{group.category}",
                    class: "glass skill-group hover-glow {card_class}",
                    style: "animation-delay: {stagger.css(i)}",
                    h4 { class: "center", "{group.category}" }
                    for skill in group.skills {
                        div { class: "dot-item muted small", span { class: "dot" } "{skill}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ReferenceCard(reference: Reference) -> Element {
    rsx! {
        div { class: "glass panel narrow",
            div { class: "highlight-icon", "👨‍💼" }
            h4 { "{reference.name}" }
            p { class: "accent", "{reference.role}" }
            p { class: "muted small", "📧 {reference.email}" }
            p { class: "muted small", "📞 {reference.phone}" }
        }
    }
}
