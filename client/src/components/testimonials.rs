//! Auto-rotating testimonials with dot navigation.
//!
//! Each index change starts a fresh `spawn_local` timer, so a dot pick stays
//! up for a full interval. An alive flag cleared by `on_cleanup` keeps late
//! timers from touching the signal after unmount.

use leptos::prelude::*;
use listings::content::TESTIMONIALS;
use listings::icon::Icon;

use crate::components::icon::IconSvg;
use crate::state::rotation::Rotation;
use crate::util::reveal::use_reveal;

const SECTION_ID: &str = "testimonials";

#[component]
pub fn Testimonials() -> impl IntoView {
    let revealed = use_reveal(SECTION_ID);
    let rotation = RwSignal::new(Rotation::new(TESTIMONIALS.len()));

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_timer = alive.clone();
        Effect::new(move |_| {
            let epoch = rotation.with(Rotation::epoch);
            let alive = alive_timer.clone();
            leptos::task::spawn_local(async move {
                let interval = std::time::Duration::from_millis(crate::state::rotation::ROTATION_INTERVAL_MS);
                gloo_timers::future::sleep(interval).await;
                if alive.load(Ordering::Relaxed) {
                    rotation.try_update(|r| r.advance_if(epoch));
                }
            });
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    view! {
        <section id=SECTION_ID class="section testimonials reveal" class:is-visible=move || revealed.get()>
            <div class="section__header">
                <p class="section__eyebrow">"Testimonials"</p>
                <h2 class="section__title">"What Our Clients Say"</h2>
            </div>
            <div class="testimonials__stage">
                {TESTIMONIALS
                    .iter()
                    .enumerate()
                    .map(|(index, t)| {
                        view! {
                            <figure
                                class="testimonial"
                                class:testimonial--active=move || rotation.with(|r| r.current() == index)
                                aria-hidden=move || rotation.with(|r| r.current() != index).to_string()
                            >
                                <IconSvg icon=Icon::Quote class="testimonial__quote-mark"/>
                                <blockquote class="testimonial__quote">{t.quote}</blockquote>
                                <figcaption class="testimonial__author">
                                    <strong>{t.author}</strong>
                                    <span>{t.role}</span>
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="carousel-dots">
                {(0..TESTIMONIALS.len())
                    .map(|index| {
                        view! {
                            <button
                                class="carousel-dot"
                                class:carousel-dot--active=move || rotation.with(|r| r.current() == index)
                                aria-label=format!("Show testimonial {}", index + 1)
                                on:click=move |_| rotation.update(|r| r.jump_to(index))
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
