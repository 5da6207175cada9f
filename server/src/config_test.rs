use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_environment_is_empty() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.assets_dir.ends_with("../assets"));
    assert_eq!(cfg.contact, ContactConfig::default());
    assert_eq!(cfg.contact.rate_limit.window, Duration::from_secs(600));
}

#[test]
fn invalid_port_is_an_error() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".to_owned()));
}

#[test]
fn mail_requires_all_three_settings() {
    let partial = ServerConfig::from_lookup(lookup(&[("RESEND_API_KEY", "re_123"), ("CONTACT_FROM", "site@x.com")])).unwrap();
    assert!(partial.contact.mail.is_none());

    let full = ServerConfig::from_lookup(lookup(&[
        ("RESEND_API_KEY", "re_123"),
        ("CONTACT_FROM", "site@x.com"),
        ("CONTACT_TO", " sales@x.com , ops@x.com ,"),
    ]))
    .unwrap();
    let mail = full.contact.mail.unwrap();
    assert_eq!(mail.api_key, "re_123");
    assert_eq!(mail.to, vec!["sales@x.com".to_owned(), "ops@x.com".to_owned()]);
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("RESEND_API_KEY", "  "),
        ("CONTACT_FROM", "site@x.com"),
        ("CONTACT_TO", "sales@x.com"),
        ("CONTACT_RECIPIENT_LABEL", ""),
    ]))
    .unwrap();
    assert!(cfg.contact.mail.is_none());
    assert_eq!(cfg.contact.recipient_label, DEFAULT_RECIPIENT_LABEL);
}

#[test]
fn limits_and_flags_parse_with_fallbacks() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("CONTACT_DEV_MODE", "Yes"),
        ("TRUST_FORWARDED_FOR", "off"),
        ("CONTACT_RATE_LIMIT", "3"),
        ("CONTACT_RATE_WINDOW_SECS", "not-a-number"),
        ("CONTACT_GLOBAL_RATE_LIMIT", "100"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert!(cfg.contact.dev_mode);
    assert!(!cfg.contact.trust_forwarded_for);
    assert_eq!(cfg.contact.rate_limit.per_client_limit, 3);
    assert_eq!(cfg.contact.rate_limit.global_limit, 100);
    assert_eq!(cfg.contact.rate_limit.window, Duration::from_secs(DEFAULT_CONTACT_RATE_WINDOW_SECS));
}

#[test]
fn parse_bool_words() {
    for v in ["1", "true", "YES", " on "] {
        assert_eq!(parse_bool(v), Some(true), "{v:?}");
    }
    for v in ["0", "False", "no", "OFF"] {
        assert_eq!(parse_bool(v), Some(false), "{v:?}");
    }
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}
