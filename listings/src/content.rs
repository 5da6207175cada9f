//! Static copy and link tables rendered by the page sections.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::icon::Icon;

pub const COMPANY_NAME: &str = "Shelter Housing Ltd.";
pub const COMPANY_FOUNDING_YEAR: i32 = 2006;
pub const SITE_URL: &str = "https://www.shelterhousinglimited.com";

pub const PHONE_NUMBER_MAIN: &str = "+8801755605080";
pub const PHONE_NUMBER_HOTLINE: &str = "+8809617335588";

/// Background video shown behind the hero headline.
pub const HERO_VIDEO_ID: &str = "cBPAdYMjTA8";
pub const HERO_VIDEO_TITLE: &str = "Luxury Real Estate Showcase";
pub const HERO_VIDEO_START_SECS: u32 = 11;

// =============================================================================
// TABLE ROW TYPES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: Icon,
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactInfo {
    pub icon: Icon,
    pub title: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OfficeImage {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompanyStats {
    pub founding_year: i32,
    pub years_of_experience: i32,
    pub completed_projects: u32,
    pub happy_residents: u32,
}

// =============================================================================
// TABLES
// =============================================================================

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", href: "#home" },
    NavLink { name: "Projects", href: "#projects" },
    NavLink { name: "About", href: "#about" },
    NavLink { name: "Services", href: "#services" },
    NavLink { name: "Contact", href: "#contact" },
];

pub const FOOTER_COMPANY_LINKS: &[NavLink] = &[
    NavLink { name: "About Us", href: "#about" },
    NavLink { name: "Projects", href: "#projects" },
    NavLink { name: "Services", href: "#services" },
    NavLink { name: "Contact", href: "#contact" },
];

pub const FOOTER_RESOURCE_LINKS: &[NavLink] = &[
    NavLink { name: "Blog", href: "#" },
    NavLink { name: "Careers", href: "#" },
    NavLink { name: "Privacy Policy", href: "#" },
    NavLink { name: "Terms of Service", href: "#" },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { icon: Icon::Facebook, href: "https://www.facebook.com/shelterhousinglimited", label: "Facebook" },
    SocialLink { icon: Icon::Instagram, href: "https://www.instagram.com/shelterhousingltd/", label: "Instagram" },
    SocialLink { icon: Icon::Linkedin, href: "https://linkedin.com/in/Shelter%20Housing%20Limited", label: "LinkedIn" },
    SocialLink { icon: Icon::Mail, href: "mailto:shelterhousinglimited@gmail.com", label: "Email" },
];

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        icon: Icon::MapPin,
        title: "Visit Us",
        details: &["Level 7, Grameen Banglar Akshay Tower", "51 Madani Ave, Dhaka 1212", "Bangladesh"],
    },
    ContactInfo {
        icon: Icon::Phone,
        title: "Call Us",
        details: &["+8801755605080", "+8801755605073", "+8801755605075", "+8801755605072"],
    },
    ContactInfo { icon: Icon::Mail, title: "Email Us", details: &["shelterhousinglimited@gmail.com"] },
    ContactInfo { icon: Icon::Clock, title: "Business Hours", details: &["Sat-Thu: 10:00 AM - 5:00 PM"] },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::Award,
        title: "Award-Winning Design",
        description: "Recognized internationally for architectural excellence and innovative design solutions.",
    },
    Feature {
        icon: Icon::Shield,
        title: "Quality Assurance",
        description: "Rigorous quality checks and premium materials ensure lasting value and satisfaction.",
    },
    Feature {
        icon: Icon::Users,
        title: "Customer-Centric",
        description: "Dedicated support team and transparent processes for a seamless experience.",
    },
    Feature {
        icon: Icon::TrendingUp,
        title: "Smart Investment",
        description: "Prime locations and appreciation potential for long-term investment value.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Shelter Housing Bangladesh exceeded our expectations with their beautiful apartment in Dhaka. \
                The craftsmanship and attention to detail are outstanding. Our family feels right at home in this vibrant city.",
        author: "Fatima Rahman",
        role: "Bashundhara Residency Owner",
    },
    Testimonial {
        quote: "As a local entrepreneur, I needed an office space that represents our growing business. \
                The modern workspace in Jolshiri provided by Shelter Housing Bangladesh perfectly matches our vision for success in Bangladesh.",
        author: "Ahmed Hossain",
        role: "Jolshiri Business Center Tenant",
    },
    Testimonial {
        quote: "The team at Shelter Housing Bangladesh was incredibly professional and transparent. \
                From start to finish, they made building our dream home in Dhaka a smooth and enjoyable experience. We're proud residents now.",
        author: "Nazia Karim",
        role: "Aftab Nagar Villa Homeowner",
    },
];

pub const OFFICE_IMAGES: &[OfficeImage] = &[
    OfficeImage { src: "/assets/office/office-1.jpg", alt: "Modern office workspace with natural lighting" },
    OfficeImage { src: "/assets/office/office-2.jpg", alt: "Elegant office reception area" },
    OfficeImage { src: "/assets/office/office-3.jpg", alt: "Contemporary collaborative workspace" },
    OfficeImage { src: "/assets/office/office-4.jpg", alt: "Executive meeting room with city view" },
];

// =============================================================================
// DERIVED COPY
// =============================================================================

/// Company statistics as of `current_year`.
#[must_use]
pub fn company_stats(current_year: i32) -> CompanyStats {
    CompanyStats {
        founding_year: COMPANY_FOUNDING_YEAR,
        years_of_experience: (current_year - COMPANY_FOUNDING_YEAR).max(0),
        completed_projects: 25,
        happy_residents: 500,
    }
}

#[must_use]
pub fn founding_year_text() -> String {
    format!("Building exceptional residential homes in Dhaka since {COMPANY_FOUNDING_YEAR}")
}

#[must_use]
pub fn crafting_text() -> String {
    format!("Crafting Luxury Living Since {COMPANY_FOUNDING_YEAR}")
}

#[must_use]
pub fn copyright_line(current_year: i32) -> String {
    format!("© {current_year} Shelter Housing Bangladesh. All rights reserved.")
}

/// `tel:` link for a phone number.
#[must_use]
pub fn tel_href(number: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
    format!("tel:{digits}")
}

/// Privacy-enhanced embed URL for a muted, looping, chrome-less background video.
#[must_use]
pub fn youtube_embed_url(video_id: &str, start_secs: u32) -> String {
    format!(
        "https://www.youtube-nocookie.com/embed/{video_id}?autoplay=1&mute=1&controls=0&modestbranding=1\
         &loop=1&playlist={video_id}&playsinline=1&rel=0&showinfo=0&iv_load_policy=3&start={start_secs}&enablejsapi=0"
    )
}

/// The social link used by the floating contact widget.
#[must_use]
pub fn facebook_link() -> Option<&'static SocialLink> {
    SOCIAL_LINKS.iter().find(|l| l.label == "Facebook")
}
