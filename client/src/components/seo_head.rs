//! Document head metadata: title, description, Open Graph, Twitter card, and
//! the `Organization` JSON-LD block.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Script, Title};
use listings::seo::SeoMeta;

#[component]
pub fn SeoHead(#[prop(optional)] meta: Option<SeoMeta>) -> impl IntoView {
    let meta = meta.unwrap_or_default();
    let image = meta.image_url();
    let json_ld = meta.organization_json_ld().to_string();
    let kind = meta.kind.as_str();

    view! {
        <Title text=meta.title.clone()/>
        <Meta name="description" content=meta.description.clone()/>
        <Link rel="canonical" href=meta.canonical.clone()/>
        <Link rel="icon" href="/favicon.ico"/>

        <Meta property="og:type" content=kind/>
        <Meta property="og:url" content=meta.canonical.clone()/>
        <Meta property="og:title" content=meta.title.clone()/>
        <Meta property="og:description" content=meta.description.clone()/>
        <Meta property="og:image" content=image.clone()/>

        <Meta name="twitter:card" content="summary_large_image"/>
        <Meta name="twitter:title" content=meta.title.clone()/>
        <Meta name="twitter:description" content=meta.description/>
        <Meta name="twitter:image" content=image/>

        <Script type_="application/ld+json">{json_ld}</Script>
    }
}
