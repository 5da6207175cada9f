//! Site footer.

use leptos::prelude::*;
use listings::content::{FOOTER_COMPANY_LINKS, FOOTER_RESOURCE_LINKS, NavLink, SOCIAL_LINKS, copyright_line};

use crate::components::icon::IconSvg;
use crate::util::clock::current_year;

fn link_list(title: &'static str, links: &'static [NavLink]) -> impl IntoView {
    view! {
        <div class="footer__column">
            <h4 class="footer__heading">{title}</h4>
            <ul class="footer__links">
                {links
                    .iter()
                    .map(|link| view! { <li><a href=link.href>{link.name}</a></li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__brand">
                    <img src="/assets/logo.png" alt="Shelter Housing Ltd." class="footer__logo"/>
                    <p>
                        "Creating exceptional living spaces that combine luxury, comfort, and \
                         sustainability for discerning homeowners."
                    </p>
                    <div class="footer__social">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                let external = link.href.starts_with("http");
                                view! {
                                    <a
                                        class="footer__social-link"
                                        href=link.href
                                        aria-label=link.label
                                        target=external.then_some("_blank")
                                        rel=external.then_some("noopener noreferrer")
                                    >
                                        <IconSvg icon=link.icon class="icon--sm"/>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                {link_list("Company", FOOTER_COMPANY_LINKS)}
                {link_list("Resources", FOOTER_RESOURCE_LINKS)}
            </div>
            <div class="footer__bottom">
                <p>{copyright_line(current_year())}</p>
            </div>
        </footer>
    }
}
