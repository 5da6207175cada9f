//! Floating contact shortcuts pinned to the bottom-right corner.

use leptos::prelude::*;
use listings::content::{PHONE_NUMBER_HOTLINE, facebook_link, tel_href};
use listings::icon::Icon;

use crate::components::icon::IconSvg;

#[component]
pub fn FloatingContact() -> impl IntoView {
    let facebook = facebook_link().map(|link| {
        view! {
            <a
                class="floating-contact__button floating-contact__button--facebook"
                href=link.href
                target="_blank"
                rel="noopener noreferrer"
                aria-label="Message us on Facebook"
            >
                <IconSvg icon=Icon::Facebook/>
            </a>
        }
    });

    view! {
        <div class="floating-contact">
            {facebook}
            <a
                class="floating-contact__button floating-contact__button--phone"
                href=tel_href(PHONE_NUMBER_HOTLINE)
                aria-label="Call our hotline"
            >
                <IconSvg icon=Icon::Phone/>
            </a>
        </div>
    }
}
