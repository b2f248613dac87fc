use criterion::{BatchSize, Criterion, Throughput};
use libff::network::application::http::{Client, Request, Response, chunked};
use libff::network::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::net::{IpAddr, Ipv4Addr, SocketAddrV4};

const BODY_SIZE: usize = 16 * 1024;

fn payload(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut body = vec![0u8; len];
    rng.fill(&mut body[..]);
    body
}

/// Split `body` into chunks of random size and frame them.
fn chunked_payload(seed: u64, body: &[u8]) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(body.len() + body.len() / 8);
    let mut rest = body;
    while !rest.is_empty() {
        let size = rng.gen_range(1..=512).min(rest.len());
        out.extend_from_slice(format!("{size:x}\r\n").as_bytes());
        out.extend_from_slice(&rest[..size]);
        out.extend_from_slice(b"\r\n");
        rest = &rest[size..];
    }
    out.extend_from_slice(b"0\r\n\r\n");
    out
}

fn response_with_body(body: &[u8], chunked: bool) -> Vec<u8> {
    let mut raw = b"HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nServer: bench\r\n".to_vec();
    if chunked {
        raw.extend_from_slice(b"Transfer-Encoding: chunked\r\n\r\n");
        raw.extend_from_slice(&chunked_payload(7, body));
    } else {
        raw.extend_from_slice(format!("Content-Length: {}\r\n\r\n", body.len()).as_bytes());
        raw.extend_from_slice(body);
    }
    raw
}

struct MemorySocket {
    response: Vec<u8>,
    offset: usize,
}

impl Read for MemorySocket {
    type Error = ();
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, ()> {
        let n = buf.len().min(self.response.len() - self.offset);
        buf[..n].copy_from_slice(&self.response[self.offset..self.offset + n]);
        self.offset += n;
        Ok(n)
    }
}

impl Write for MemorySocket {
    type Error = ();
    fn write(&mut self, buf: &[u8]) -> Result<usize, ()> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), ()> {
        Ok(())
    }
}

impl Close for MemorySocket {
    type Error = ();
    fn close(self) -> Result<(), ()> {
        Ok(())
    }
}

impl Connection for MemorySocket {}

/// Replays the same canned response on every socket.
#[derive(Debug)]
struct MemoryStack {
    response: Vec<u8>,
}

impl Stack for MemoryStack {
    type Socket = MemorySocket;
    type Error = ();

    fn init(&mut self) -> Result<(), ()> {
        Ok(())
    }

    fn deinit(&mut self) {}

    fn local_address(&mut self) -> Ipv4Addr {
        Ipv4Addr::LOCALHOST
    }

    fn socket(&mut self) -> Result<MemorySocket, ()> {
        Ok(MemorySocket {
            response: self.response.clone(),
            offset: 0,
        })
    }

    fn resolve(&mut self, _hostname: &str) -> Result<IpAddr, ()> {
        Ok(IpAddr::V4(Ipv4Addr::LOCALHOST))
    }

    fn connect(&mut self, _socket: &mut MemorySocket, _remote: SocketAddrV4) -> Result<(), ()> {
        Ok(())
    }
}

pub fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let body = payload(1, BODY_SIZE);
    let get = Request::get("api.example.com", "/v1/status")
        .header("Accept", "application/json")
        .header("X-Console", "wii");
    let post = Request::post("api.example.com", "/v1/upload", body.clone()).header("Content-Type", "application/octet-stream");

    group.bench_function("get", |b| b.iter(|| get.encode().expect("Failed to encode")));
    group.throughput(Throughput::Bytes(body.len() as u64));
    group.bench_function("post_16k", |b| b.iter(|| post.encode().expect("Failed to encode")));
    group.finish();
}

pub fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let raw = response_with_body(&payload(2, BODY_SIZE), false);
    group.throughput(Throughput::Bytes(raw.len() as u64));
    group.bench_function("identity_16k", |b| b.iter(|| Response::parse(&raw)));
    group.finish();
}

pub fn bench_chunked_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunked_decode");
    let body = payload(3, BODY_SIZE);
    let framed = chunked_payload(4, &body);
    assert_eq!(chunked::decode(&framed), body);

    group.throughput(Throughput::Bytes(framed.len() as u64));
    group.bench_function("random_chunks_16k", |b| b.iter(|| chunked::decode(&framed)));
    group.finish();
}

pub fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    let response = response_with_body(&payload(5, BODY_SIZE), true);
    group.throughput(Throughput::Bytes(response.len() as u64));
    group.bench_function("chunked_16k", |b| {
        b.iter_batched_ref(
            || Client::new(MemoryStack { response: response.clone() }).expect("Failed to init"),
            |client| {
                client
                    .get(&Request::get("api.example.com", "/v1/blob"))
                    .expect("Failed to get")
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}
