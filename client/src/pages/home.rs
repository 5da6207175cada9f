//! The single landing page.
//!
//! Sections are rendered in scroll order; each owns its anchor id so navbar
//! links and CTAs can smooth-scroll to it.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact_section::ContactSection;
use crate::components::featured_projects::FeaturedProjects;
use crate::components::floating_contact::FloatingContact;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::seo_head::SeoHead;
use crate::components::testimonials::Testimonials;
use crate::components::why_choose_us::WhyChooseUs;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <SeoHead/>
        <Navbar/>
        <main class="home">
            <Hero/>
            <FeaturedProjects/>
            <About/>
            <WhyChooseUs/>
            <Testimonials/>
            <ContactSection/>
        </main>
        <Footer/>
        <FloatingContact/>
    }
}
