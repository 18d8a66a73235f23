//! Tests for `ReqwestClient`.
//!
//! Only construction is covered here; delivery goes through recording
//! clients in the sender tests.

use super::*;

#[test]
fn with_timeout_builds_client() {
    assert!(ReqwestClient::with_timeout(std::time::Duration::from_secs(5)).is_ok());
}

#[test]
fn usable_as_webhook_transport() {
    fn assert_transport<T: HttpClient + Clone + Default>() {}
    assert_transport::<ReqwestClient>();
}

#[test]
fn timeout_is_reported_only_when_set() {
    let timed = ReqwestClient::with_timeout(std::time::Duration::from_secs(5)).unwrap();

    assert_eq!(timed.timeout(), Some(std::time::Duration::from_secs(5)));
    assert_eq!(ReqwestClient::new().timeout(), None);
    assert_eq!(ReqwestClient::from_client(reqwest::Client::new()).timeout(), None);
}
