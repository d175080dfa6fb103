use dioxus::prelude::*;
use folio::content::PROFILE;
use folio::domain::SectionId;
use folio::features::contact::SubmitStatus;
use folio::features::navigation::nav_items;
use folio::features::showcase::{ProjectFilter, filter_projects, filter_tabs};
use folio_ui::sections::{
    Certifications, ContactChannels, EducationGrid, ExperienceTimeline, FilterTabs, Footer,
    PostList, ProjectGrid, QuickLinks, SkillCategoryCard, SkillGroups, SocialLinks, SubmitBanner,
    TechLevels,
};
use folio_ui::widgets::{BadgeRow, HighlightGrid, StatRow};
use strum::IntoEnumIterator;

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Tabs and grid wired to the same filter, as the projects section renders them.
#[component]
fn Catalog(filter: ProjectFilter) -> Element {
    rsx! {
        FilterTabs { tabs: filter_tabs(PROFILE.projects), active: filter, on_select: move |_: ProjectFilter| {} }
        ProjectGrid { projects: PROFILE.projects, filter, revealed: true }
    }
}

fn render_catalog(filter: ProjectFilter) -> String {
    let mut dom = VirtualDom::new_with_props(Catalog, CatalogProps { filter });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn grid_renders_every_project_under_all() {
    fn app() -> Element {
        rsx! { ProjectGrid { projects: PROFILE.projects, filter: ProjectFilter::All, revealed: true } }
    }

    let html = render(app);
    assert_eq!(count(&html, "project-card"), PROFILE.projects.len());
    assert!(html.contains("card-stagger animate"));
}

#[test]
fn industrial_filter_narrows_the_grid() {
    fn app() -> Element {
        rsx! {
            ProjectGrid { projects: PROFILE.projects, filter: ProjectFilter::Industrial, revealed: false }
        }
    }

    let html = render(app);
    let expected = filter_projects(PROFILE.projects, ProjectFilter::Industrial).len();
    assert_eq!(count(&html, "project-card"), expected);
    assert!(expected < PROFILE.projects.len());
    assert!(!html.contains("card-stagger animate"));
}

#[test]
fn switching_filter_moves_the_active_tab_and_the_grid() {
    let tabs = filter_tabs(PROFILE.projects);
    for filter in ProjectFilter::iter() {
        let html = render_catalog(filter);
        let tab = tabs.iter().find(|tab| tab.filter == filter).unwrap();

        assert_eq!(count(&html, "filter-tab active"), 1);
        let active = html.find("filter-tab active").unwrap();
        let active_button = &html[active..active + html[active..].find("</button>").unwrap()];
        assert!(active_button.contains(&tab.label()), "{filter:?}: {active_button}");
        assert_eq!(count(&html, "project-card"), tab.count, "{filter:?}");
    }

    let industrial = render_catalog(ProjectFilter::Industrial);
    assert_eq!(count(&industrial, "badge-purple"), 0);
    assert_eq!(count(&industrial, "badge-cyan"), count(&industrial, "project-card"));

    let personal = render_catalog(ProjectFilter::Personal);
    assert_eq!(count(&personal, "badge-cyan"), 0);
    assert_eq!(count(&personal, "badge-purple"), count(&personal, "project-card"));
}

#[test]
fn filter_tabs_mark_the_active_tab() {
    fn app() -> Element {
        rsx! {
            FilterTabs {
                tabs: filter_tabs(PROFILE.projects),
                active: ProjectFilter::Personal,
                on_select: move |_: ProjectFilter| {},
            }
        }
    }

    let html = render(app);
    assert_eq!(count(&html, "class=\"filter-tab"), 3);
    assert_eq!(count(&html, "filter-tab active"), 1);
    for tab in filter_tabs(PROFILE.projects) {
        assert!(html.contains(&tab.label()), "missing tab {}", tab.label());
    }
}

#[test]
fn skill_card_lists_each_skill() {
    fn app() -> Element {
        rsx! { SkillCategoryCard { category: PROFILE.skills.categories[0], index: 0, revealed: true } }
    }

    let html = render(app);
    let category = PROFILE.skills.categories[0];
    assert_eq!(count(&html, "class=\"skill\""), category.skills.len());
    assert!(html.contains(category.icon));
    assert_eq!(count(&html, "bar-fill"), category.skills.len());
}

#[test]
fn every_skill_category_renders_in_full() {
    fn app() -> Element {
        rsx! {
            for (index, category) in PROFILE.skills.categories.iter().enumerate() {
                SkillCategoryCard { category: *category, index, revealed: false }
            }
        }
    }

    let html = render(app);
    let skills: usize = PROFILE.skills.categories.iter().map(|c| c.skills.len()).sum();
    assert_eq!(count(&html, "skill-category "), PROFILE.skills.categories.len());
    assert_eq!(count(&html, "class=\"skill\""), skills);
    assert_eq!(count(&html, "width: 0%"), skills);
}

#[test]
fn timeline_alternates_sides() {
    fn app() -> Element {
        rsx! { ExperienceTimeline { entries: PROFILE.experience.entries, revealed: true } }
    }

    let html = render(app);
    let entries = PROFILE.experience.entries.len();
    assert_eq!(count(&html, "timeline-item "), entries);
    assert_eq!(count(&html, "timeline-left"), entries.div_ceil(2));
    assert_eq!(count(&html, "timeline-right"), entries / 2);
}

#[test]
fn contact_channels_render_one_link_each() {
    fn app() -> Element {
        rsx! { ContactChannels { channels: PROFILE.contact.channels } }
    }

    let html = render(app);
    assert_eq!(count(&html, "contact-channel"), PROFILE.contact.channels.len());
    assert!(html.contains("mailto:"));
}

#[test]
fn quick_links_cover_every_section() {
    fn app() -> Element {
        rsx! { QuickLinks { items: nav_items(), on_select: move |_: SectionId| {} } }
    }

    let html = render(app);
    assert_eq!(count(&html, "link-button"), nav_items().len());
    assert!(html.contains("Projects"));
}

#[test]
fn about_arrays_render_in_full() {
    fn app() -> Element {
        rsx! {
            TechLevels { levels: PROFILE.about.tech_levels, revealed: true }
            EducationGrid { items: PROFILE.about.education }
            HighlightGrid { items: PROFILE.about.achievements, card_class: "about-achievement" }
        }
    }

    let html = render(app);
    assert_eq!(count(&html, "class=\"tech-level "), PROFILE.about.tech_levels.len());
    assert_eq!(count(&html, "education-card"), PROFILE.about.education.len());
    assert_eq!(count(&html, "about-achievement"), PROFILE.about.achievements.len());
}

#[test]
fn hero_arrays_render_in_full() {
    fn app() -> Element {
        rsx! {
            StatRow { stats: PROFILE.hero.stats }
            BadgeRow { badges: PROFILE.hero.tech, class: "" }
        }
    }

    let html = render(app);
    assert_eq!(count(&html, "class=\"stat\""), PROFILE.hero.stats.len());
    assert_eq!(count(&html, "tech-icon hover-glow"), PROFILE.hero.tech.len());
}

#[test]
fn skills_and_experience_extras_render_in_full() {
    fn app() -> Element {
        rsx! {
            Certifications { items: PROFILE.skills.certifications, card_class: "" }
            HighlightGrid { items: PROFILE.skills.highlights, card_class: "skills-highlight" }
            SkillGroups { groups: PROFILE.experience.skill_groups, card_class: "" }
            HighlightGrid { items: PROFILE.experience.milestones, card_class: "career-milestone" }
        }
    }

    let html = render(app);
    assert_eq!(count(&html, "cert-card"), PROFILE.skills.certifications.len());
    assert_eq!(count(&html, "skills-highlight"), PROFILE.skills.highlights.len());
    assert_eq!(count(&html, "skill-group hover-glow"), PROFILE.experience.skill_groups.len());
    let group_skills: usize = PROFILE.experience.skill_groups.iter().map(|g| g.skills.len()).sum();
    assert_eq!(count(&html, "dot-item"), group_skills);
    assert_eq!(count(&html, "career-milestone"), PROFILE.experience.milestones.len());
}

#[test]
fn contact_lists_render_in_full() {
    fn app() -> Element {
        rsx! {
            SocialLinks { links: PROFILE.contact.social }
            PostList { posts: PROFILE.contact.posts }
        }
    }

    let html = render(app);
    assert_eq!(count(&html, "social-link"), PROFILE.contact.social.len());
    assert_eq!(count(&html, "post-link"), PROFILE.contact.posts.len());
}

#[test]
fn footer_renders_every_link_and_badge() {
    fn app() -> Element {
        rsx! { Footer {} }
    }

    let html = render(app);
    assert_eq!(count(&html, "footer-social"), PROFILE.footer.social.len());
    assert_eq!(count(&html, "tech-icon small"), PROFILE.footer.tech.len());
    assert_eq!(count(&html, "class=\"link-button\""), nav_items().len() + 1);
}

#[test]
fn banner_follows_submit_status() {
    fn success() -> Element {
        rsx! { SubmitBanner { status: SubmitStatus::Success } }
    }
    fn failed() -> Element {
        rsx! { SubmitBanner { status: SubmitStatus::Failed } }
    }
    fn idle() -> Element {
        rsx! { SubmitBanner { status: SubmitStatus::Idle } }
    }

    let html = render(success);
    assert!(html.contains("Message sent successfully"));
    assert!(html.contains("banner-success"));

    let html = render(failed);
    assert!(html.contains("banner-error"));

    assert!(!render(idle).contains("banner"));
}
