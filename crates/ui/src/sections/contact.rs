use crate::hooks::use_reveal;
use crate::widgets::{FloatingOrbs, SectionHeader, link_rel, link_target};
use dioxus::prelude::*;
use folio::content::PROFILE;
use folio::domain::SectionId;
use folio::domain::config::FolioConfig;
use folio::domain::contact::{ContactChannel, Post, SocialLink};
use folio::features::contact::{
    ContactField, ContactSession, SimulatedTransport, SubmitStatus, submit,
};
use folio::kernel::time::sleep;
use std::time::Duration;

#[component]
pub fn Contact() -> Element {
    let config = use_context::<FolioConfig>();
    let reveal = use_reveal(SectionId::Contact);
    let contact = &PROFILE.contact;
    let reveal_class = reveal().section_class();

    rsx! {
        section { id: SectionId::Contact.id(), class: "section",
            FloatingOrbs { count: 3 }
            div { class: "container",
                SectionHeader { title: "Get In Touch", intro: contact.intro, class: reveal_class }
                div { class: "grid two-col",
                    div { class: reveal_class,
                        div { class: "glass panel",
                            h3 { "Send Me a Message" }
                            ContactFormView {
                                submit_delay_ms: config.contact.submit_delay_ms,
                                status_reset_ms: config.contact.status_reset_ms,
                            }
                        }
                    }
                    div { class: "contact-side {reveal_class}",
                        div { class: "glass panel",
                            h3 { "Contact Information" }
                            ContactChannels { channels: contact.channels }
                        }
                        div { class: "glass panel",
                            h3 { "Connect With Me" }
                            SocialLinks { links: contact.social }
                        }
                        div { class: "glass panel",
                            h3 { "Recent LinkedIn Posts" }
                            PostList { posts: contact.posts }
                        }
                        div { class: "glass panel center",
                            h3 { "Availability Status" }
                            div { class: "availability",
                                span { class: "pulse-dot" }
                                span { class: "green", "Available for New Projects" }
                            }
                            p { class: "muted small", "{contact.availability}" }
                        }
                    }
                }
                div { class: "cta center {reveal_class}",
                    div { class: "glass panel narrow",
                        h3 { class: "text-gradient", "Let's Build Something Amazing Together" }
                        p { class: "lead muted",
                            "Whether you need a full-stack web application, AI-powered solution, or want to discuss a technical challenge, I'm here to help bring your ideas to life."
                        }
                        div { class: "cta-actions",
                            a { class: "btn-primary hover-glow", href: "mailto:{PROFILE.identity.email}", "Start a Conversation" }
                            a {
                                class: "btn-secondary hover-glow",
                                href: PROFILE.identity.linkedin,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "Connect on LinkedIn"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The message form. Submission goes through [`SimulatedTransport`].
#[component]
pub fn ContactFormView(submit_delay_ms: u64, status_reset_ms: u64) -> Element {
    let mut session = use_signal(ContactSession::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let submission = match session.write().begin() {
            Ok(submission) => submission,
            Err(e) => {
                tracing::debug!(error = %e, "Contact form rejected");
                return;
            }
        };

        spawn(async move {
            let transport = SimulatedTransport { delay: Duration::from_millis(submit_delay_ms) };
            let outcome = submit(&transport, &submission).await;
            session.write().finish(outcome);

            sleep(Duration::from_millis(status_reset_ms)).await;
            session.write().expire(submission.id);
        });
    };

    let (form, status, rejection) = {
        let current = session.read();
        (current.form.clone(), current.status(), current.rejection().map(str::to_owned))
    };
    let button_class =
        if status.is_busy() { "btn-primary hover-glow wide busy" } else { "btn-primary hover-glow wide" };

    rsx! {
        form { class: "contact-form", onsubmit: onsubmit,
            div { class: "grid two-col tight",
                FormField {
                    field: ContactField::Name,
                    value: form.name,
                    on_input: move |value: String| session.write().edit(ContactField::Name, value),
                }
                FormField {
                    field: ContactField::Email,
                    value: form.email,
                    on_input: move |value: String| session.write().edit(ContactField::Email, value),
                }
            }
            FormField {
                field: ContactField::Subject,
                value: form.subject,
                on_input: move |value: String| session.write().edit(ContactField::Subject, value),
            }
            FormField {
                field: ContactField::Message,
                value: form.message,
                on_input: move |value: String| session.write().edit(ContactField::Message, value),
            }
            button {
                r#type: "submit",
                class: button_class,
                disabled: status.is_busy(),
                if status.is_busy() {
                    span { class: "spinner" }
                }
                "{status.button_label()}"
            }
            if let Some(message) = rejection {
                p { class: "form-error", "{message}" }
            }
            SubmitBanner { status }
        }
    }
}

#[component]
pub fn FormField(field: ContactField, value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        div { class: "form-field",
            label { r#for: field.id(), "{field.label()}" }
            if field == ContactField::Message {
                textarea {
                    id: field.id(),
                    name: field.id(),
                    class: "form-input",
                    rows: "6",
                    required: true,
                    placeholder: field.placeholder(),
                    value: "{value}",
                    oninput: move |evt: FormEvent| on_input.call(evt.value()),
                }
            } else {
                input {
                    id: field.id(),
                    name: field.id(),
                    r#type: field.input_type(),
                    class: "form-input",
                    required: true,
                    placeholder: field.placeholder(),
                    value: "{value}",
                    oninput: move |evt: FormEvent| on_input.call(evt.value()),
                }
            }
        }
    }
}

/// Success or failure notice under the form; nothing while idle.
#[component]
pub fn SubmitBanner(status: SubmitStatus) -> Element {
    let banner_class = match status {
        SubmitStatus::Failed => "banner banner-error",
        _ => "banner banner-success",
    };
    rsx! {
        if let Some(text) = status.banner() {
            div { class: banner_class,
                p { "{text}" }
            }
        }
    }
}

#[component]
pub fn ContactChannels(channels: &'static [ContactChannel]) -> Element {
    rsx! {
        div { class: "stack",
            for channel in channels {
                a {
                    key: "{channel.label}",
                    class: "glass contact-channel hover-glow",
                    href: channel.href,
                    target: link_target(channel.opens_externally()),
                    rel: link_rel(channel.opens_externally()),
                    div { class: "channel-icon", "{channel.icon}" }
                    div {
                        div { class: "muted small", "{channel.label}" }
                        div { class: "channel-value", "{channel.value}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SocialLinks(links: &'static [SocialLink]) -> Element {
    rsx! {
        div { class: "stack",
            for link in links {
                a {
                    key: "{link.platform}",
                    class: "glass social-link hover-glow",
                    href: link.url,
                    target: link_target(link.opens_externally()),
                    rel: link_rel(link.opens_externally()),
                    div { class: "social-main",
                        div { class: "channel-icon", "{link.icon}" }
                        div {
                            div { class: "channel-value", "{link.platform}" }
                            div { class: "muted small", "{link.handle}" }
                        }
                    }
                    span { class: "arrow", "→" }
                }
            }
        }
    }
}

#[component]
pub fn PostList(posts: &'static [Post]) -> Element {
    rsx! {
        div { class: "stack tight",
            for post in posts {
                a {
                    key: "{post.url}",
                    class: "glass post-link hover-glow",
                    href: post.url,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    span { "{post.kind.icon()} {post.title}" }
                    span { class: "arrow", "→" }
                }
            }
        }
    }
}
