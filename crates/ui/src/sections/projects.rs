use crate::hooks::use_reveal;
use crate::widgets::{FloatingOrbs, SectionHeader, link_rel};
use dioxus::prelude::*;
use folio::content::PROFILE;
use folio::domain::SectionId;
use folio::domain::project::{Project, ProjectCategory, ProjectStatus};
use folio::features::motion::Stagger;
use folio::features::showcase::{
    FilterTab, ProjectFilter, ProjectStats, TechPreview, filter_projects, filter_tabs,
};

const INTRO: &str =
    "A showcase of industrial solutions and personal projects demonstrating full-stack expertise";

#[component]
pub fn Projects() -> Element {
    let reveal = use_reveal(SectionId::Projects);
    let mut filter = use_signal(ProjectFilter::default);
    let state = reveal();
    let reveal_class = state.section_class();

    rsx! {
        section { id: SectionId::Projects.id(), class: "section",
            FloatingOrbs { count: 3 }
            div { class: "container",
                SectionHeader { title: "Featured Projects", intro: INTRO, class: reveal_class }
                div { class: "filter-bar {reveal_class}",
                    FilterTabs {
                        tabs: filter_tabs(PROFILE.projects),
                        active: filter(),
                        on_select: move |selected: ProjectFilter| {
                            tracing::debug!(filter = selected.as_ref(), "Project filter changed");
                            filter.set(selected);
                        },
                    }
                }
                ProjectGrid { projects: PROFILE.projects, filter: filter(), revealed: state.is_revealed() }
                div { class: reveal_class,
                    ProjectStatsPanel { stats: ProjectStats::collect(PROFILE.projects) }
                }
                div { class: "cta center {reveal_class}",
                    h3 { "Want to see more?" }
                    p { class: "muted",
                        "Check out my GitHub profile for additional projects and open-source contributions"
                    }
                    a {
                        class: "btn-primary hover-glow",
                        href: PROFILE.identity.github,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Visit GitHub Profile"
                    }
                }
            }
        }
    }
}

#[component]
pub fn FilterTabs(
    tabs: Vec<FilterTab>,
    active: ProjectFilter,
    on_select: EventHandler<ProjectFilter>,
) -> Element {
    rsx! {
        div { class: "glass filter-tabs",
            {tabs.iter().map(|tab| {
                let selected = tab.filter;
                let tab_class = if selected == active { "filter-tab active" } else { "filter-tab" };
                rsx! {
                    button {
                        key: "{selected.as_ref()}",
                        class: tab_class,
                        onclick: move |_| on_select.call(selected),
                        "{tab.label()}"
                    }
                }
            })}
        }
    }
}

/// Cards for the projects matching `filter`, in source order.
#[component]
pub fn ProjectGrid(projects: &'static [Project], filter: ProjectFilter, revealed: bool) -> Element {
    let stagger = Stagger::new(100);
    let card_class = if revealed { "card-stagger animate" } else { "card-stagger" };

    rsx! {
        div { class: "grid three-col project-grid",
            for (i, project) in filter_projects(projects, filter).into_iter().enumerate() {
                ProjectCard {
                    key: "{project.id}",
                    project,
                    class: card_class,
                    delay: stagger.css(i),
                }
            }
        }
    }
}

#[component]
pub fn ProjectCard(project: Project, class: &'static str, delay: String) -> Element {
    let preview = TechPreview::of(project.tech, 3);
    let category_class = match project.category {
        ProjectCategory::Industrial => "badge badge-cyan",
        ProjectCategory::Personal => "badge badge-purple",
    };
    let status_class = match project.status {
        ProjectStatus::Completed => "badge badge-green",
        ProjectStatus::Ongoing => "badge badge-yellow",
    };

    rsx! {
        div { class: "glass project-card hover-glow {class}", style: "animation-delay: {delay}",
            div { class: "project-banner",
                div { class: "project-icon", "{project.icon}" }
                span { class: "{category_class} top-left", "{project.category.label()}" }
                span { class: "{status_class} top-right", "{project.status.label()}" }
            }
            div { class: "project-body",
                h3 { "{project.title}" }
                p { class: "muted small clamp-3", "{project.description}" }
                if let Some(impact) = project.impact {
                    div { class: "impact", "💡 {impact}" }
                }
                div { class: "tech-tags",
                    for tech in preview.shown.iter() {
                        span { key: "{tech}", class: "tech-tag", "{tech}" }
                    }
                    if let Some(more) = preview.overflow_label() {
                        span { class: "tech-tag accent", "{more}" }
                    }
                }
                div { class: "project-actions",
                    if let Some(url) = project.live_url {
                        a {
                            class: "btn-demo",
                            href: url,
                            target: "_blank",
                            rel: link_rel(true),
                            "Live Demo"
                        }
                    }
                    if let Some(url) = project.github_url {
                        a {
                            class: "btn-ghost glass",
                            href: url,
                            target: "_blank",
                            rel: link_rel(true),
                            "GitHub"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProjectStatsPanel(stats: ProjectStats) -> Element {
    let figures = [
        (stats.industrial.to_string(), "Industrial Projects"),
        (stats.personal.to_string(), "Personal Projects"),
        (format!("{}%", stats.success_rate), "Success Rate"),
        (stats.completed.to_string(), "Completed"),
    ];

    rsx! {
        div { class: "glass panel project-stats",
            h3 { class: "center", "Project Statistics" }
            div { class: "grid four-col",
                for (value, label) in figures {
                    div { key: "{label}", class: "stat center",
                        div { class: "stat-number text-gradient-green", "{value}" }
                        div { class: "stat-label", "{label}" }
                    }
                }
            }
        }
    }
}
