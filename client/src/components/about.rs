//! About section: company story, stats, and office gallery.

use leptos::prelude::*;
use listings::content::{OFFICE_IMAGES, company_stats, founding_year_text};

use crate::util::clock::current_year;
use crate::util::reveal::use_reveal;

const SECTION_ID: &str = "about";

#[component]
pub fn About() -> impl IntoView {
    let revealed = use_reveal(SECTION_ID);
    let stats = company_stats(current_year());

    let stat_items = [
        (stats.founding_year.to_string(), "Founded"),
        (format!("{}+", stats.years_of_experience), "Years of Experience"),
        (format!("{}+", stats.completed_projects), "Completed Projects"),
        (format!("{}+", stats.happy_residents), "Happy Residents"),
    ];

    view! {
        <section id=SECTION_ID class="section about reveal" class:is-visible=move || revealed.get()>
            <div class="about__grid">
                <div class="about__copy">
                    <p class="section__eyebrow">"About Us"</p>
                    <h2 class="section__title">"A Legacy of Excellence"</h2>
                    <p class="section__lead">{founding_year_text()}</p>
                    <p>
                        "Shelter Housing Bangladesh has been a pioneer in premium real estate development \
                         within Dhaka. We combine architectural vision with meticulous construction to \
                         deliver homes and workspaces that stand the test of time."
                    </p>
                    <dl class="about__stats">
                        {stat_items
                            .into_iter()
                            .map(|(value, label)| {
                                view! {
                                    <div class="about__stat">
                                        <dt>{label}</dt>
                                        <dd>{value}</dd>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </dl>
                </div>
                <div class="about__gallery">
                    {OFFICE_IMAGES
                        .iter()
                        .map(|img| view! { <img class="about__photo" src=img.src alt=img.alt loading="lazy"/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
