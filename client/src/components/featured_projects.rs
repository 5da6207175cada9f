//! "Featured Projects" section: status filter bar, carousel, detail modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes the shared [`ShowcaseState`] and [`DetailModalState`]
//! provided by `App`. The card strip is rebuilt whenever the reveal sequence
//! changes, which is what replays the entrance animation after a filter
//! switch. Focus changes only toggle card classes and never rebuild the strip.

use leptos::prelude::*;
use listings::icon::Icon;
use listings::{FILTERS, Project};

use crate::components::icon::IconSvg;
use crate::components::project_detail_modal::{ProjectDetailModal, status_badge_class};
use crate::state::detail::DetailModalState;
use crate::state::showcase::{CENTER_THRESHOLD, ShowcaseState};
use crate::util::motion::prefers_reduced_motion;
use crate::util::reveal::use_reveal;

const SECTION_ID: &str = "projects";

#[component]
pub fn FeaturedProjects() -> impl IntoView {
    let showcase = expect_context::<RwSignal<ShowcaseState>>();
    let revealed = use_reveal(SECTION_ID);
    let reduced_motion = RwSignal::new(false);
    Effect::new(move || reduced_motion.set(prefers_reduced_motion()));

    let reveal_seq = Memo::new(move |_| showcase.with(ShowcaseState::reveal_seq));

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "ArrowLeft" => {
            ev.prevent_default();
            showcase.update(ShowcaseState::previous);
        }
        "ArrowRight" => {
            ev.prevent_default();
            showcase.update(ShowcaseState::next);
        }
        _ => {}
    };

    let strip = move || {
        let seq = reveal_seq.get();
        let cards: Vec<Project> = showcase.with_untracked(|s| s.visible().cloned().collect());
        if cards.is_empty() {
            return view! {
                <p class="showcase__empty">"No projects in this category yet. Check back soon."</p>
            }
            .into_any();
        }
        let class = format!(
            "showcase__track{}{}",
            if cards.len() < CENTER_THRESHOLD { " showcase__track--centered" } else { "" },
            if reduced_motion.get_untracked() { "" } else { " showcase__track--reveal" },
        );
        view! {
            <div class=class data-reveal=seq.to_string()>
                {cards
                    .into_iter()
                    .enumerate()
                    .map(|(index, project)| view! { <ProjectCard index=index project=project/> })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <section
            id=SECTION_ID
            class="section showcase reveal"
            class:is-visible=move || revealed.get()
        >
            <div class="section__header">
                <p class="section__eyebrow">"Our Portfolio"</p>
                <h2 class="section__title">"Featured Projects"</h2>
                <p class="section__lead">
                    "Explore our portfolio of landmark developments, each a testament to quality and design."
                </p>
            </div>

            <FilterBar/>

            <div
                class="showcase__carousel"
                role="region"
                aria-roledescription="carousel"
                aria-label="Projects"
                tabindex="0"
                on:keydown=on_keydown
            >
                {strip}
            </div>

            <Show when=move || showcase.with(|s| s.len() > 1)>
                <CarouselControls/>
            </Show>

            <ProjectDetailModal/>
        </section>
    }
}

#[component]
fn FilterBar() -> impl IntoView {
    let showcase = expect_context::<RwSignal<ShowcaseState>>();

    view! {
        <div class="showcase__filters" role="group" aria-label="Filter projects by status">
            {FILTERS
                .iter()
                .map(|option| {
                    let status = option.status;
                    let active = move || showcase.with(|s| s.active_filter() == status);
                    view! {
                        <button
                            class="filter-button"
                            class:filter-button--active=active
                            aria-pressed=move || active().to_string()
                            on:click=move |_| showcase.update(|s| s.select_filter(status))
                        >
                            {option.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectCard(index: usize, project: Project) -> impl IntoView {
    let showcase = expect_context::<RwSignal<ShowcaseState>>();
    let detail = expect_context::<RwSignal<DetailModalState>>();

    let class = move || format!("showcase-card {}", showcase.with(|s| s.slot(index).class()));
    let status = project.status;
    let title = project.title.clone();
    let location = project.location.clone();
    let image = project.image.clone();
    let alt = project.title.clone();

    let on_open = move |_| detail.update(|d| d.open(project.clone()));

    view! {
        <article class=class on:click=on_open>
            <div class="showcase-card__media">
                <img src=image alt=alt loading="lazy"/>
                <span class=status_badge_class(status)>{status.label()}</span>
            </div>
            <div class="showcase-card__body">
                <h3 class="showcase-card__title">{title}</h3>
                <p class="showcase-card__location">
                    <IconSvg icon=Icon::MapPin class="icon--sm"/>
                    {location}
                </p>
                <span class="showcase-card__more">"View Details"</span>
            </div>
        </article>
    }
}

#[component]
fn CarouselControls() -> impl IntoView {
    let showcase = expect_context::<RwSignal<ShowcaseState>>();
    let count = move || showcase.with(ShowcaseState::len);

    view! {
        <div class="showcase__controls">
            <button
                class="carousel-arrow"
                aria-label="Previous project"
                on:click=move |_| showcase.update(ShowcaseState::previous)
            >
                "‹"
            </button>
            <div class="carousel-dots">
                {move || {
                    (0..count())
                        .map(|index| {
                            let active = move || showcase.with(|s| s.active_index() == index);
                            view! {
                                <button
                                    class="carousel-dot"
                                    class:carousel-dot--active=active
                                    aria-label=format!("Go to project {}", index + 1)
                                    on:click=move |_| {
                                        showcase.update(|s| {
                                            s.jump_to(index);
                                        });
                                    }
                                ></button>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <button
                class="carousel-arrow"
                aria-label="Next project"
                on:click=move |_| showcase.update(ShowcaseState::next)
            >
                "›"
            </button>
        </div>
    }
}
