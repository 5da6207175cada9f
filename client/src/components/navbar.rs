//! Fixed top navigation bar.
//!
//! Transparent over the hero, solid once the page scrolls past the threshold
//! in [`NavState`]. On small screens the links collapse behind a menu toggle
//! that closes again when a link is followed.

use leptos::prelude::*;
use listings::content::NAV_LINKS;

use crate::state::nav::NavState;
use crate::util::scroll::{scroll_to_anchor, scroll_y};

fn follow_anchor(ev: &leptos::ev::MouseEvent, href: &str) {
    if scroll_to_anchor(href) {
        ev.prevent_default();
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());

    #[cfg(feature = "hydrate")]
    {
        // Page may be restored mid-scroll; sync once after hydration.
        Effect::new(move || {
            let mut next = nav.get_untracked();
            if next.on_scroll(scroll_y()) {
                nav.set(next);
            }
        });
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let mut next = nav.get_untracked();
            if next.on_scroll(scroll_y()) {
                nav.set(next);
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = scroll_y;

    let header_class = move || {
        if nav.with(|s| s.scrolled) { "navbar navbar--scrolled" } else { "navbar" }
    };

    let links = move |mobile: bool| {
        NAV_LINKS
            .iter()
            .map(|link| {
                let href = link.href;
                let class = if mobile { "navbar__mobile-link" } else { "navbar__link" };
                view! {
                    <a
                        class=class
                        href=href
                        on:click=move |ev| {
                            follow_anchor(&ev, href);
                            nav.update(NavState::close_menu);
                        }
                    >
                        {link.name}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class=header_class>
            <nav class="navbar__inner">
                <a class="navbar__brand" href="#home" on:click=move |ev| follow_anchor(&ev, "#home")>
                    <img src="/assets/logo.png" alt="Shelter Housing Ltd." class="navbar__logo"/>
                </a>

                <div class="navbar__links">
                    {links(false)}
                    <a class="btn btn--primary navbar__cta" href="#contact" on:click=move |ev| follow_anchor(&ev, "#contact")>
                        "Enquire"
                    </a>
                </div>

                <button
                    class="navbar__toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || nav.with(|s| s.menu_open).to_string()
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    {move || if nav.with(|s| s.menu_open) { "✕" } else { "☰" }}
                </button>
            </nav>

            <Show when=move || nav.with(|s| s.menu_open)>
                <div class="navbar__mobile">
                    {links(true)}
                    <a
                        class="btn btn--primary navbar__mobile-cta"
                        href="#contact"
                        on:click=move |ev| {
                            follow_anchor(&ev, "#contact");
                            nav.update(NavState::close_menu);
                        }
                    >
                        "Enquire"
                    </a>
                </div>
            </Show>
        </header>
    }
}
