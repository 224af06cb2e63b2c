use lenient_uri::{
    cmp::{locale_compare, sort_function},
    Uri,
};
use std::cmp::Ordering;

#[test]
fn equals() {
    let eq = |a: &str, b: &str| Uri::parse(a).equals(&Uri::parse(b));

    assert!(eq("http://EXAMPLE.com/x", "http://example.com/x"));
    assert!(eq("HTTP://example.com/x", "http://example.com/x"));
    assert!(eq("http://User@Example.COM:80/x", "http://user@example.com:80/x"));
    assert!(eq("http://a/%7Efoo%2fbar", "http://a/~foo/bar"));
    assert!(eq("http://a/x?q#f", "http://a/x?q#f"));

    assert!(!eq("http://a/x", "https://a/x"));
    assert!(!eq("http://a/x", "http://b/x"));
    assert!(!eq("http://a/X", "http://a/x"));
    assert!(!eq("http://a/x?Q", "http://a/x?q"));
    assert!(!eq("http://a/x?%7E", "http://a/x?~"));
    // Fragments are compared with fragments.
    assert!(!eq("http://a/x?q#q", "http://a/x?q#f"));
    assert!(!eq("http://a/x#F", "http://a/x#f"));
    assert!(!eq("http://a/x?q", "http://a/x?q#q"));
}

#[test]
fn same_resource() {
    let same = |a: &str, b: &str| Uri::parse(a).is_same_resource(&Uri::parse(b));

    assert!(same("foo.html", "foo.html#bar"));
    assert!(same("http://a/b?c#d", "http://a/b?c#e"));
    assert!(same("http://a/b?c", "http://a/b?c#"));
    assert!(!same("http://a/b", "HTTP://a/b"));
    assert!(!same("http://a/b", "http://A/b"));
    assert!(!same("http://a/b?c", "http://a/b?d"));
    assert!(!same("http://a/b", "http://a/b/"));
}

#[test]
fn sort_by_depth() {
    assert_eq!(sort_function("/a", "/a/b"), Ordering::Less);
    assert_eq!(sort_function("/a/b", "/a"), Ordering::Greater);

    let mut links = vec!["/a/b", "/a"];
    links.sort_by(|a, b| sort_function(a, b));
    assert_eq!(links, ["/a", "/a/b"]);
}

#[test]
fn sort_tie_breaks() {
    // Hostname first, normalized.
    assert_eq!(
        sort_function("http://B.example/z", "http://a.example/a"),
        Ordering::Greater
    );
    // Then the path.
    assert_eq!(sort_function("http://a/x/b", "http://a/x/a"), Ordering::Greater);
    // Then the query.
    assert_eq!(sort_function("/a?2", "/a?10"), Ordering::Greater);
    // Then the fragment.
    assert_eq!(sort_function("/a?q#b", "/a?q#a"), Ordering::Greater);
    // Then the scheme.
    assert_eq!(sort_function("https:/a", "http:/a"), Ordering::Greater);
    assert_eq!(sort_function("http:/a", "http:/a"), Ordering::Equal);

    let mut links = vec![
        "https://example.com/docs/b.html",
        "/index.html",
        "https://example.com/docs/A.html",
        "https://example.com/docs/api/x.html",
        "#top",
    ];
    links.sort_by(|a, b| sort_function(a, b));
    assert_eq!(
        links,
        [
            "#top",
            "/index.html",
            "https://example.com/docs/A.html",
            "https://example.com/docs/b.html",
            "https://example.com/docs/api/x.html",
        ]
    );
}

#[test]
fn locale_order() {
    assert_eq!(locale_compare("", ""), Ordering::Equal);
    assert_eq!(locale_compare("", "a"), Ordering::Less);
    assert_eq!(locale_compare("a", "B"), Ordering::Less);
    assert_eq!(locale_compare("B", "c"), Ordering::Less);
    assert_eq!(locale_compare("b", "B"), Ordering::Less);
    assert_eq!(locale_compare("B", "b"), Ordering::Greater);
    assert_eq!(locale_compare("a-b", "ab"), Ordering::Less);
    assert_eq!(locale_compare("10", "9"), Ordering::Less);
    assert_eq!(locale_compare("z", "\u{e9}"), Ordering::Less);
}

#[test]
fn uri_sort_cmp() {
    let a = Uri::parse("/a/b/c");
    let b = Uri::parse(String::from("/z"));
    assert_eq!(a.sort_cmp(&b), Ordering::Greater);
    assert_eq!(b.sort_cmp(&a), Ordering::Less);
    // The standard ordering is bytewise instead.
    assert!(a.as_str() < b.as_str());
}
