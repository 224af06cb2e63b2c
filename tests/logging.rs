use lenient_uri::{location, resolve::resolve_str, sanitize};
use tracing_test::traced_test;

#[traced_test]
#[test]
fn unsafe_scheme_is_logged() {
    assert_eq!(sanitize::remove_unsafe_protocol("JavaScript:alert(1)"), "about:blank");
    assert!(logs_contain("replacing URL with unsafe scheme"));
    assert!(logs_contain("JavaScript"));
}

#[traced_test]
#[test]
fn safe_url_is_not_logged() {
    assert_eq!(sanitize::remove_unsafe_protocol("https://example.com/"), "https://example.com/");
    assert!(!logs_contain("unsafe scheme"));
}

#[traced_test]
#[test]
fn resolution_is_traced() {
    assert_eq!(resolve_str("c", "http://a/b"), "http://a/c");
    assert!(logs_contain("resolved reference"));
    assert!(logs_contain("http://a/c"));
}

#[traced_test]
#[test]
fn missing_location_is_logged() {
    assert_eq!(location::get_location(&()), "");
    assert!(logs_contain("no document location available"));
}
