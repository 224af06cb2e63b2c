#![no_main]
use lenient_uri::sanitize::{
    escape_html, from_iri, remove_invalid_characters, remove_unsafe_protocol,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let cleaned = remove_invalid_characters(data);
    assert_eq!(remove_invalid_characters(&cleaned), cleaned);

    let safe = remove_unsafe_protocol(data);
    assert_eq!(remove_unsafe_protocol(&safe), safe);

    let escaped = escape_html(data);
    assert!(escaped.bytes().all(|x| (0x20..=0x7e).contains(&x)));

    let uri = from_iri(data);
    assert!(uri.is_ascii());
    assert_eq!(from_iri(&uri), uri);
});
