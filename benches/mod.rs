use criterion::{criterion_group, criterion_main};

mod network;

criterion_group!(
    benches,
    network::application::http::client::bench_encode,
    network::application::http::client::bench_parse,
    network::application::http::client::bench_chunked_decode,
    network::application::http::client::bench_get
);
criterion_main!(benches);
