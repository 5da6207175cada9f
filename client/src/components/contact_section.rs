//! Contact section: office info cards and the enquiry form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation and submit bookkeeping live in [`ContactFormState`]; this
//! component only wires inputs to it, performs the network call, and pushes
//! the resulting notice onto the shared toast stack.

use leptos::prelude::*;
use listings::ContactField;
use listings::content::CONTACT_INFO;

use crate::components::icon::IconSvg;
use crate::state::contact::{ContactFormState, SubmitRejected};
use crate::state::toast::ToastState;
use crate::util::reveal::use_reveal;

const SECTION_ID: &str = "contact";

#[component]
pub fn ContactSection() -> impl IntoView {
    let revealed = use_reveal(SECTION_ID);

    view! {
        <section id=SECTION_ID class="section contact reveal" class:is-visible=move || revealed.get()>
            <div class="section__header">
                <p class="section__eyebrow">"Contact Us"</p>
                <h2 class="section__title">"Let's Discuss Your Dream Home"</h2>
                <p class="section__lead">
                    "Reach out to our team for project details, site visits, or investment advice."
                </p>
            </div>
            <div class="contact__grid">
                <div class="contact__info">
                    {CONTACT_INFO
                        .iter()
                        .map(|info| {
                            view! {
                                <div class="info-card">
                                    <div class="info-card__icon">
                                        <IconSvg icon=info.icon/>
                                    </div>
                                    <div>
                                        <h3 class="info-card__title">{info.title}</h3>
                                        {info.details.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <ContactForm/>
            </div>
        </section>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let state = RwSignal::new(ContactFormState::default());
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut begun = None;
        state.update(|s| begun = Some(s.begin_submit()));
        match begun {
            Some(Ok(payload)) => {
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::submit_contact(&payload).await;
                    if let Err(e) = &result {
                        log::warn!("contact submit failed: {e}");
                    }
                    let mut notice = None;
                    state.update(|s| notice = Some(s.finish(result)));
                    if let Some(notice) = notice {
                        toasts.update(|t| {
                            t.push(notice);
                        });
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                let _ = payload;
            }
            Some(Err(SubmitRejected::Invalid(notice))) => toasts.update(|t| {
                t.push(notice);
            }),
            Some(Err(SubmitRejected::Busy)) | None => {}
        }
    };

    let submitting = move || state.with(|s| s.submitting);

    view! {
        <form class="contact-form" on:submit=on_submit novalidate>
            <div class="contact-form__row">
                <FormField state=state field=ContactField::Name label="Full Name" kind="text" placeholder="Your name"/>
                <FormField state=state field=ContactField::Email label="Email" kind="email" placeholder="you@example.com"/>
            </div>
            <FormField state=state field=ContactField::Phone label="Phone (optional)" kind="tel" placeholder="+880 1XXX-XXXXXX"/>
            <FormField state=state field=ContactField::Message label="Message" kind="textarea" placeholder="Tell us about your requirements"/>
            <button class="btn btn--primary contact-form__submit" type="submit" disabled=submitting>
                {move || if submitting() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}

#[component]
fn FormField(
    state: RwSignal<ContactFormState>,
    field: ContactField,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let id = format!("contact-{}", field.as_str());
    let error_id = format!("{id}-error");
    let value = move || state.with(|s| s.form.field(field).to_owned());
    let error = move || state.with(|s| s.error(field).map(str::to_owned));
    let on_input = move |ev: leptos::ev::Event| state.update(|s| s.set_field(field, event_target_value(&ev)));
    let disabled = move || state.with(|s| s.submitting);
    let invalid = move || error().is_some().to_string();

    let control = if kind == "textarea" {
        view! {
            <textarea
                id=id.clone()
                class="contact-form__input contact-form__textarea"
                name=field.as_str()
                rows="5"
                placeholder=placeholder
                prop:value=value
                on:input=on_input
                disabled=disabled
                aria-invalid=invalid
                aria-describedby=error_id.clone()
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id.clone()
                class="contact-form__input"
                type=kind
                name=field.as_str()
                placeholder=placeholder
                prop:value=value
                on:input=on_input
                disabled=disabled
                aria-invalid=invalid
                aria-describedby=error_id.clone()
            />
        }
        .into_any()
    };

    view! {
        <div class="contact-form__field">
            <label class="contact-form__label" for=id>{label}</label>
            {control}
            <p id=error_id class="contact-form__error" role="alert">{error}</p>
        </div>
    }
}
