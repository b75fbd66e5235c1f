//! Scanner Benchmarks
//!
//! Run with: `cargo bench --package zc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use zc_lex::tokenize;

fn token_count(source: &str) -> usize {
    tokenize(source.as_bytes()).tokens.len()
}

fn bench_scan_declarations(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    let source = "const x = 42; fn main() void { var y = x + 1; return y; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_const", |b| {
        b.iter(|| token_count(black_box("const x = 42;")))
    });

    group.bench_function("function_with_body", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_scan_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_complex");

    let source = r#"
        const std = @import("std");

        /// Returns the nth Fibonacci number.
        fn fibonacci(n: u32) u32 {
            if (n <= 1) {
                return n;
            }
            return fibonacci(n - 1) + fibonacci(n - 2);
        }

        const Point = struct {
            x: i32,
            y: i32,

            pub fn scale(self: *Point, k: i32) void {
                self.x *%= k;
                self.y <<= 1;
            }
        };

        pub fn main() !void {
            const msg =
                \\Hello,
                \\world!
            ;
            var i: usize = 0;
            while (i < 10) : (i += 1) {
                std.debug.print("{d} {s}\n", .{ fibonacci(i), msg });
            }
        }
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("complex_source", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_scan_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| token_count(black_box("const s = \"hello\";")))
    });

    group.bench_function("escaped_string", |b| {
        let source = r#"const s = "tab\tnewline\nhex\x41 unicodeé wide\U01F600";"#;
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_scan_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_numbers");

    group.bench_function("integer", |b| {
        b.iter(|| token_count(black_box("const x = 123456;")))
    });

    group.bench_function("float", |b| {
        b.iter(|| token_count(black_box("const x = 3.14159e-2;")))
    });

    group.bench_function("hex_float", |b| {
        b.iter(|| token_count(black_box("const x = 0x1.921fb54442d18p1;")))
    });

    group.bench_function("big_integer", |b| {
        b.iter(|| {
            token_count(black_box(
                "const x = 340282366920938463463374607431768211456;",
            ))
        })
    });

    group.finish();
}

fn bench_scan_large_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_large");

    let source = "pub const value = 0xDEADBEEF; // mask\n".repeat(2000);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("repeated_decls", |b| {
        b.iter(|| token_count(black_box(&source)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scan_declarations,
    bench_scan_complex,
    bench_scan_strings,
    bench_scan_numbers,
    bench_scan_large_file
);
criterion_main!(benches);
