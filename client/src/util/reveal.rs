//! Reveal-on-scroll.
//!
//! DESIGN
//! ======
//! A section registers its element id and gets back a signal that flips to
//! `true` the first time the element intersects the viewport. The observer
//! disconnects after that first hit; sections animate in once and stay.
//!
//! TRADE-OFFS
//! ==========
//! The observer callback closure is leaked (`forget`) because it must outlive
//! the component scope. It is one small closure per section and the page is
//! never torn down, so this is bounded. Under a reduced-motion preference no
//! observer is created and the signal starts visible.

use leptos::prelude::*;

/// Fraction of the element that must be visible before it reveals.
#[cfg(feature = "hydrate")]
const REVEAL_THRESHOLD: f64 = 0.1;

/// Signal tracking whether the element with `id` has been revealed.
pub fn use_reveal(id: &'static str) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if crate::util::motion::prefers_reduced_motion() || !observe_once(id, set_visible) {
            set_visible.set(true);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (id, set_visible);

    visible
}

#[cfg(feature = "hydrate")]
fn observe_once(id: &str, set_visible: WriteSignal<bool>) -> bool {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::Closure;

    let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id)) else {
        return false;
    };

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let hit = entries.iter().any(|entry| {
                entry
                    .dyn_into::<web_sys::IntersectionObserverEntry>()
                    .map_or(false, |e| e.is_intersecting())
            });
            if hit {
                set_visible.set(true);
                observer.disconnect();
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
    let Ok(observer) = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) else {
        log::warn!("reveal: IntersectionObserver unavailable for #{id}");
        return false;
    };
    observer.observe(&el);
    callback.forget();
    true
}
