use super::*;

#[test]
fn years_of_experience_counts_from_founding() {
    let stats = company_stats(2026);
    assert_eq!(stats.founding_year, 2006);
    assert_eq!(stats.years_of_experience, 20);
}

#[test]
fn years_of_experience_never_negative() {
    assert_eq!(company_stats(2000).years_of_experience, 0);
}

#[test]
fn founding_copy_mentions_year() {
    assert!(founding_year_text().ends_with("since 2006"));
    assert_eq!(crafting_text(), "Crafting Luxury Living Since 2006");
}

#[test]
fn copyright_uses_given_year() {
    assert!(copyright_line(2031).starts_with("© 2031 "));
}

#[test]
fn tel_href_strips_formatting() {
    assert_eq!(tel_href("+880 1755-605080"), "tel:+8801755605080");
    assert_eq!(tel_href(PHONE_NUMBER_HOTLINE), "tel:+8809617335588");
}

#[test]
fn embed_url_loops_same_video_from_start() {
    let url = youtube_embed_url("abc123", 11);
    assert!(url.starts_with("https://www.youtube-nocookie.com/embed/abc123?"));
    assert!(url.contains("playlist=abc123"));
    assert!(url.contains("mute=1"));
    assert!(url.contains("start=11"));
    assert!(!url.contains(' '));
}

#[test]
fn nav_links_target_section_anchors() {
    assert!(NAV_LINKS.iter().all(|l| l.href.starts_with('#')));
    assert!(NAV_LINKS.iter().any(|l| l.href == "#projects"));
}

#[test]
fn facebook_link_is_present() {
    let link = facebook_link().unwrap();
    assert_eq!(link.icon, Icon::Facebook);
    assert!(link.href.starts_with("https://"));
}

#[test]
fn testimonials_and_features_are_populated() {
    assert_eq!(TESTIMONIALS.len(), 3);
    assert_eq!(FEATURES.len(), 4);
    assert!(TESTIMONIALS.iter().all(|t| !t.quote.contains("  ")));
}
