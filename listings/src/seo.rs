//! Page metadata and `Organization` structured data.

#[cfg(test)]
#[path = "seo_test.rs"]
mod seo_test;

use serde_json::{Value, json};

use crate::content::{COMPANY_NAME, PHONE_NUMBER_MAIN, SITE_URL, SOCIAL_LINKS};

/// Open Graph object type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageKind {
    #[default]
    Website,
    Article,
}

impl PageKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
        }
    }
}

/// Head metadata for one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub canonical: String,
    /// Absolute URL or site-relative path of the share image.
    pub image: String,
    pub kind: PageKind,
}

impl Default for SeoMeta {
    fn default() -> Self {
        Self {
            title: "Shelter Housing Ltd. | Premium Real Estate Development".to_owned(),
            description: "Crafting Luxury Living Since 2006. Shelter Housing Bangladesh has been a pioneer in \
                          premium real estate development within Dhaka for nearly three decades."
                .to_owned(),
            canonical: format!("{SITE_URL}/"),
            image: "/og-image.jpg".to_owned(),
            kind: PageKind::Website,
        }
    }
}

impl SeoMeta {
    /// Share image resolved against the site URL.
    #[must_use]
    pub fn image_url(&self) -> String {
        if self.image.starts_with("http") {
            self.image.clone()
        } else {
            format!("{SITE_URL}{}", self.image)
        }
    }

    /// schema.org `Organization` block for the JSON-LD script tag.
    #[must_use]
    pub fn organization_json_ld(&self) -> Value {
        let same_as: Vec<&str> = SOCIAL_LINKS
            .iter()
            .map(|link| link.href)
            .filter(|href| href.starts_with("http"))
            .collect();

        json!({
            "@context": "https://schema.org",
            "@type": "Organization",
            "name": COMPANY_NAME,
            "url": SITE_URL,
            "logo": format!("{SITE_URL}/android-chrome-512x512.png"),
            "sameAs": same_as,
            "contactPoint": {
                "@type": "ContactPoint",
                "telephone": PHONE_NUMBER_MAIN,
                "contactType": "customer service"
            },
            "description": self.description,
        })
    }
}
