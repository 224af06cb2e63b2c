#![no_main]
use lenient_uri::Uri;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let r = Uri::parse(data);
    let mut buf = String::with_capacity(data.len());
    if let Some(s) = r.scheme() {
        buf.push_str(s.as_str());
        buf.push(':');
    }
    if let Some(a) = r.authority() {
        buf.push_str("//");
        let start = buf.len();
        if let Some(ui) = a.userinfo() {
            buf.push_str(ui);
            buf.push('@');
        }
        buf.push_str(a.host());
        if let Some(p) = a.raw_port() {
            buf.push(':');
            buf.push_str(p);
        }
        assert_eq!(&buf[start..], a.as_str());
    }
    buf.push_str(r.path().as_str());
    if let Some(q) = r.query() {
        buf.push('?');
        buf.push_str(q);
    }
    if let Some(f) = r.fragment() {
        buf.push('#');
        buf.push_str(f);
    }
    assert_eq!(data, buf);
    assert_eq!(data, r.components().to_string());
    assert!(r.is_absolute() != r.is_relative());

    let dirs: Vec<_> = r.dirs().collect();
    let file = r.file();
    assert!(dirs.iter().all(|d| !d.is_empty()));
    assert!(r.path().segments().eq(dirs.iter().copied().chain((!file.is_empty()).then_some(file))));
});
