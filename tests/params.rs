use lenient_uri::{
    params::{encode_params, parse_query_params, to_hash_params, to_query_params, Params},
    pct_enc::{encode_uri_component, encode_uri_fragment},
    Uri,
};
use std::borrow::Cow;

#[test]
fn query_params() {
    assert_eq!(to_query_params([("a", Some("1")), ("b", None)]), "?a=1&b");
    assert_eq!(
        to_query_params([("q", Some("caf\u{e9} & cr\u{e8}me")), ("n", Some("1/2"))]),
        "?q=caf%C3%A9%20%26%20cr%C3%A8me&n=1%2F2"
    );
    assert_eq!(to_query_params([("keep", Some("-_.!~*'()"))]), "?keep=-_.!~*'()");
    assert_eq!(to_query_params(Vec::<(String, Option<String>)>::new()), "");

    // Owned names and values work as well.
    let owned = vec![(String::from("x"), Some(String::from("y z")))];
    assert_eq!(to_query_params(owned), "?x=y%20z");
}

#[test]
fn hash_params() {
    assert_eq!(to_hash_params([("a", Some("1")), ("b", None)]), "#a=1&b");
    assert_eq!(
        to_hash_params([("text", Some("a b\0c\td\re\nf&g"))]),
        "#text=a bcdef&g"
    );
    assert_eq!(to_hash_params(Vec::<(&str, Option<&str>)>::new()), "");
}

#[test]
fn names_are_not_escaped() {
    assert_eq!(
        encode_params([("a b", Some("c d"))], encode_uri_component),
        "a b=c%20d"
    );
    assert_eq!(encode_params([("", None::<&str>), ("b", None)], encode_uri_fragment), "&b");
}

#[test]
fn parse_params() {
    let params = parse_query_params("?a=1&b=");
    let expected: Params = [("a", "1"), ("b", "")]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect();
    assert_eq!(params, expected);

    // Only a single leading "?" is stripped.
    let params = parse_query_params("??a=1");
    assert_eq!(params["?a"], "1");

    // Later duplicates win.
    let params = parse_query_params("k=first&k=second&k=third");
    assert_eq!(params.len(), 1);
    assert_eq!(params["k"], "third");

    // Names and values are decoded, "+" is not a space.
    let params = parse_query_params("n%61me=a+b%20c&%E4%B8%AD=%E6%96%87");
    assert_eq!(params["name"], "a+b c");
    assert_eq!(params["\u{4e2d}"], "\u{6587}");

    // Malformed escapes are kept, invalid UTF-8 is replaced.
    let params = parse_query_params("a=100%&b=%zz&c=%FF");
    assert_eq!(params["a"], "100%");
    assert_eq!(params["b"], "%zz");
    assert_eq!(params["c"], "\u{fffd}");

    // Empty pairs map the empty name.
    let params = parse_query_params("a&&b");
    assert_eq!(params.len(), 3);
    assert_eq!(params[""], "");
}

#[test]
fn round_trip_through_uri() {
    let query = to_query_params([("q", Some("a&b=c")), ("lang", Some("en"))]);
    let uri = Uri::parse(query.as_str());
    let params = uri.params().unwrap();
    assert_eq!(params["q"], "a&b=c");
    assert_eq!(params["lang"], "en");
}

#[test]
fn custom_escaper() {
    let encoded = encode_params([("a", Some("<x>"))], |s: &str| {
        Cow::Owned(s.replace('<', "&lt;").replace('>', "&gt;"))
    });
    assert_eq!(encoded, "a=&lt;x&gt;");
}
