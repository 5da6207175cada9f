use std::net::{Ipv4Addr, Ipv6Addr};

use super::*;

const PER_CLIENT_LIMIT: usize = 3;
const GLOBAL_LIMIT: usize = 5;
const WINDOW: Duration = Duration::from_secs(60);

fn limiter() -> RateLimiter {
    RateLimiter::new(RateLimitConfig { per_client_limit: PER_CLIENT_LIMIT, global_limit: GLOBAL_LIMIT, window: WINDOW })
}

fn ip(last: u8) -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(10, 0, 0, last))
}

#[test]
fn per_client_allows_up_to_limit() {
    let rl = limiter();
    let client = ip(1);
    let now = Instant::now();

    for i in 0..PER_CLIENT_LIMIT {
        assert!(rl.check_and_record_at(client, now).is_ok(), "request {i} should succeed");
    }
    assert_eq!(
        rl.check_and_record_at(client, now),
        Err(RateLimitError::PerClientExceeded { limit: PER_CLIENT_LIMIT, window_secs: 60 })
    );
}

#[test]
fn global_allows_up_to_limit() {
    let rl = limiter();
    let now = Instant::now();

    // Use distinct clients to avoid hitting per-client limit first.
    for i in 0..GLOBAL_LIMIT {
        let client = ip(u8::try_from(i).unwrap());
        assert!(rl.check_and_record_at(client, now).is_ok(), "request {i} should succeed");
    }
    assert!(matches!(
        rl.check_and_record_at(ip(200), now),
        Err(RateLimitError::GlobalExceeded { limit: GLOBAL_LIMIT, .. })
    ));
}

#[test]
fn rejected_requests_are_not_recorded() {
    let rl = limiter();
    let client = ip(1);
    let start = Instant::now();

    for _ in 0..PER_CLIENT_LIMIT {
        rl.check_and_record_at(client, start).unwrap();
    }
    for _ in 0..10 {
        assert!(rl.check_and_record_at(client, start).is_err());
    }

    // Only the accepted requests count toward the global window.
    for i in 0..(GLOBAL_LIMIT - PER_CLIENT_LIMIT) {
        assert!(rl.check_and_record_at(ip(50 + u8::try_from(i).unwrap()), start).is_ok());
    }
}

#[test]
fn window_expiry_allows_new_requests() {
    let rl = limiter();
    let client = ip(1);
    let start = Instant::now();

    for _ in 0..PER_CLIENT_LIMIT {
        rl.check_and_record_at(client, start).unwrap();
    }
    assert!(rl.check_and_record_at(client, start).is_err());

    let after_window = start + WINDOW + Duration::from_millis(1);
    assert!(rl.check_and_record_at(client, after_window).is_ok());
}

#[test]
fn distinct_clients_do_not_interfere() {
    let rl = limiter();
    let client_a = ip(1);
    let client_b = IpAddr::V6(Ipv6Addr::LOCALHOST);
    let now = Instant::now();

    for _ in 0..PER_CLIENT_LIMIT {
        rl.check_and_record_at(client_a, now).unwrap();
    }
    assert!(rl.check_and_record_at(client_a, now).is_err());
    assert!(rl.check_and_record_at(client_b, now).is_ok());
}

#[test]
fn idle_clients_are_forgotten() {
    let rl = limiter();
    let start = Instant::now();
    rl.check_and_record_at(ip(1), start).unwrap();
    rl.check_and_record_at(ip(2), start).unwrap();
    assert_eq!(rl.tracked_clients(), 2);

    let later = start + WINDOW + Duration::from_secs(1);
    rl.check_and_record_at(ip(3), later).unwrap();
    assert_eq!(rl.tracked_clients(), 1);
}
