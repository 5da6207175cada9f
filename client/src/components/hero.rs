//! Full-viewport hero with a muted looping background video.
//!
//! The iframe is resized to cover the hero on mount and on every window
//! resize (see [`crate::util::video`]). Before hydration CSS gives it a
//! reasonable 16:9 default.

use leptos::prelude::*;
use listings::content::{HERO_VIDEO_ID, HERO_VIDEO_START_SECS, HERO_VIDEO_TITLE, crafting_text, youtube_embed_url};

use crate::util::scroll::scroll_to_anchor;
use crate::util::video::measure_cover;

const HERO_ID: &str = "home";

#[component]
pub fn Hero() -> impl IntoView {
    let cover = RwSignal::new(None::<(f64, f64)>);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || cover.set(measure_cover(HERO_ID)));
        let handle = window_event_listener(leptos::ev::resize, move |_| cover.set(measure_cover(HERO_ID)));
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = measure_cover;

    let video_style = move || {
        cover
            .get()
            .map(|(w, h)| format!("width: {w:.0}px; height: {h:.0}px;"))
            .unwrap_or_default()
    };

    let on_cta = |href: &'static str| {
        move |ev: leptos::ev::MouseEvent| {
            if scroll_to_anchor(href) {
                ev.prevent_default();
            }
        }
    };

    view! {
        <section id=HERO_ID class="hero">
            <div class="hero__video" aria-hidden="true">
                <iframe
                    class="hero__iframe"
                    style=video_style
                    src=youtube_embed_url(HERO_VIDEO_ID, HERO_VIDEO_START_SECS)
                    title=HERO_VIDEO_TITLE
                    allow="autoplay; encrypted-media; picture-in-picture"
                    tabindex="-1"
                    {::leptos::tachys::html::attribute::custom::custom_attribute("loading", "eager")}
                ></iframe>
            </div>
            <div class="hero__overlay"></div>

            <div class="hero__content">
                <p class="hero__eyebrow">{crafting_text()}</p>
                <h1 class="hero__title">
                    "Where Luxury Meets "
                    <span class="hero__title-accent">"Living"</span>
                </h1>
                <p class="hero__subtitle">
                    "Premium residential and commercial developments across Dhaka, built with \
                     uncompromising quality and timeless design."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="#projects" on:click=on_cta("#projects")>
                        "Explore Projects"
                    </a>
                    <a class="btn btn--outline" href="#about" on:click=on_cta("#about")>
                        "Learn More"
                    </a>
                </div>
            </div>
        </section>
    }
}
