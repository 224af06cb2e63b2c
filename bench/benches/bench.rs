use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lenient_uri::{
    params::{parse_query_params, to_query_params},
    sanitize::{escape_html, from_iri, remove_unsafe_protocol},
    Uri,
};

criterion_group!(
    benches,
    bench_parse,
    bench_parse_accessors,
    bench_resolve,
    bench_sort,
    bench_sanitize,
    bench_escape,
    bench_params,
);
criterion_main!(benches);

const PARSE_CASE: &str = "https://user@example.com/search?q=%E6%B5%8B%E8%AF%95#fragment";
const RESOLVE_CASE_BASE: &str = "http://example.com/foo/bar";
const RESOLVE_CASE_REF: &str = "../baz";
const SANITIZE_CASE: &str = "java\tscript:alert(document.cookie)";
const IRI_CASE: &str = "http://例え.テスト/パス?q=値";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse", |b| b.iter(|| Uri::parse(black_box(PARSE_CASE))));
}

fn bench_parse_accessors(c: &mut Criterion) {
    c.bench_function("parse_accessors", |b| {
        b.iter(|| {
            let uri = Uri::parse(black_box(PARSE_CASE));
            (uri.hostname(), uri.port(), uri.dirs().count(), uri.params())
        })
    });
}

fn bench_resolve(c: &mut Criterion) {
    let base = Uri::parse(RESOLVE_CASE_BASE);
    let r = Uri::parse(RESOLVE_CASE_REF);

    c.bench_function("resolve", |b| {
        b.iter(|| black_box(base).resolve(&black_box(r)))
    });
}

fn bench_sort(c: &mut Criterion) {
    let links = [
        "https://example.com/docs/b.html",
        "/index.html",
        "https://example.com/docs/A.html",
        "https://example.com/docs/api/x.html",
        "#top",
    ];

    c.bench_function("sort", |b| {
        b.iter(|| {
            let mut links = black_box(links);
            links.sort_by(|a, b| lenient_uri::cmp::sort_function(a, b));
            links
        })
    });
}

fn bench_sanitize(c: &mut Criterion) {
    c.bench_function("sanitize", |b| {
        b.iter(|| remove_unsafe_protocol(black_box(SANITIZE_CASE)))
    });
}

fn bench_escape(c: &mut Criterion) {
    c.bench_function("escape_html", |b| b.iter(|| escape_html(black_box(IRI_CASE))));
    c.bench_function("from_iri", |b| b.iter(|| from_iri(black_box(IRI_CASE))));
}

fn bench_params(c: &mut Criterion) {
    c.bench_function("params", |b| {
        b.iter(|| {
            let query = to_query_params(black_box([
                ("q", Some("caf\u{e9} cr\u{e8}me")),
                ("page", Some("2")),
                ("debug", None),
            ]));
            parse_query_params(&query)
        })
    });
}
