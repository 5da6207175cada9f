//! "Why Choose Us" feature cards.

use leptos::prelude::*;
use listings::content::FEATURES;

use crate::components::icon::IconSvg;
use crate::util::reveal::use_reveal;

const SECTION_ID: &str = "services";

#[component]
pub fn WhyChooseUs() -> impl IntoView {
    let revealed = use_reveal(SECTION_ID);

    view! {
        <section id=SECTION_ID class="section features reveal" class:is-visible=move || revealed.get()>
            <div class="section__header">
                <p class="section__eyebrow">"Why Choose Us"</p>
                <h2 class="section__title">"Building Trust, Delivering Excellence"</h2>
            </div>
            <div class="features__grid">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="feature-card">
                                <div class="feature-card__icon">
                                    <IconSvg icon=feature.icon/>
                                </div>
                                <h3 class="feature-card__title">{feature.title}</h3>
                                <p class="feature-card__text">{feature.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
