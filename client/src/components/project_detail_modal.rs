//! Project detail modal.
//!
//! Renders nothing unless [`DetailModalState::view`] yields a projection.
//! Close is reachable three ways: the close button, a backdrop click, and
//! Escape. All of them clear the project, not just the open flag.

use leptos::prelude::*;
use listings::ProjectStatus;
use listings::detail::{Brochure, DetailView};
use listings::icon::Icon;

use crate::components::icon::IconSvg;
use crate::state::detail::DetailModalState;

#[component]
pub fn ProjectDetailModal() -> impl IntoView {
    let detail = expect_context::<RwSignal<DetailModalState>>();
    let on_close = Callback::new(move |()| detail.update(DetailModalState::close));

    move || detail.with(DetailModalState::view).map(|view| view! { <DetailDialog view=view on_close=on_close/> })
}

#[component]
fn DetailDialog(view: DetailView, on_close: Callback<()>) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(el) = dialog_ref.get() {
            let _ = el.focus();
        }
    });

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let DetailView { title, status, image, address, rows, flat_sizes_title, flat_sizes, brochure, .. } = view;
    let alt = title.clone();
    let has_rows = !rows.is_empty();
    let heading_id = "project-detail-title";

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                node_ref=dialog_ref
                class="dialog project-detail"
                role="dialog"
                aria-modal="true"
                aria-labelledby=heading_id
                tabindex="-1"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <button class="dialog__close" aria-label="Close" on:click=on_close_click>
                    "✕"
                </button>

                <div class="project-detail__media">
                    <img src=image alt=alt/>
                </div>

                <div class="project-detail__body">
                    <span class=status_badge_class(status)>{status.label()}</span>
                    <h2 id=heading_id class="project-detail__title">{title}</h2>
                    <p class="project-detail__address">
                        <IconSvg icon=Icon::MapPin class="icon--sm"/>
                        {address}
                    </p>

                    {has_rows.then(|| view! { <h3 class="project-detail__heading">"Project Specifications"</h3> })}
                    <dl class="project-detail__facts">
                        {rows
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <div class="project-detail__fact">
                                        <IconSvg icon=row.icon class="icon--accent"/>
                                        <dt>{row.label}</dt>
                                        <dd>{row.value}</dd>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </dl>

                    {flat_sizes_title.map(|heading| {
                        view! {
                            <h3 class="project-detail__heading">{heading}</h3>
                            <ul class="project-detail__sizes">
                                {flat_sizes
                                    .into_iter()
                                    .map(|size| view! { <li class="size-chip">{size}</li> })
                                    .collect_view()}
                            </ul>
                        }
                    })}

                    {brochure.map(brochure_link)}
                </div>
            </div>
        </div>
    }
}

pub(crate) fn status_badge_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Ongoing => "status-badge status-badge--ongoing",
        ProjectStatus::Completed => "status-badge status-badge--completed",
        ProjectStatus::Upcoming => "status-badge status-badge--upcoming",
    }
}

fn brochure_link(brochure: Brochure) -> impl IntoView {
    let Brochure { url, openable } = brochure;
    let on_click = move |ev: leptos::ev::MouseEvent| {
        if !openable {
            ev.prevent_default();
        }
    };
    view! {
        <a
            class="btn btn--primary project-detail__brochure"
            href=url
            target="_blank"
            rel="noopener noreferrer"
            download=""
            aria-disabled=(!openable).to_string()
            on:click=on_click
        >
            <IconSvg icon=Icon::Download class="icon--sm"/>
            "Download Brochure"
        </a>
    }
}
