#![no_main]
use lenient_uri::params::{parse_query_params, to_query_params};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<(&str, &str)>| {
    // Names are emitted unescaped, so only those that survive a round trip are checked.
    if data
        .iter()
        .any(|(k, _)| k.is_empty() || k.contains(['&', '=', '%']) || k.starts_with('?'))
    {
        return;
    }

    let query = to_query_params(data.iter().map(|&(k, v)| (k, Some(v))));
    let params = parse_query_params(&query);
    for (k, v) in &data {
        if data.iter().rev().find(|(k2, _)| k2 == k).map(|(_, v2)| v2) == Some(v) {
            assert_eq!(params[*k], *v);
        }
    }
});
