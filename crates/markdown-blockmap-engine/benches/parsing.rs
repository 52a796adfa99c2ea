use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use markdown_blockmap_engine::parse_document;

fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with some content.\nAnd a second line.\n\n- Bullet point\n    - Nested item\n- Another item\n\n> Quoted text\nlazily continued\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n    indented code\n\n<div>html</div>\n\n---\n\n";
    base.repeat(size)
}

fn generate_nested_list(depth: usize) -> String {
    (0..depth)
        .map(|i| format!("{}+ level {i}\n", "    ".repeat(i)))
        .collect()
}

fn bench_document_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    for size in [10, 100, 1000] {
        let content = generate_markdown_content(size);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::new("document", size), &content, |b, content| {
            b.iter(|| parse_document(std::hint::black_box(content.as_bytes())));
        });
    }

    group.finish();
}

fn bench_deep_nesting(c: &mut Criterion) {
    let mut group = c.benchmark_group("nesting");
    group.sample_size(10);

    for depth in [6, 50, 200] {
        let list = generate_nested_list(depth);
        group.bench_with_input(BenchmarkId::new("list", depth), &list, |b, list| {
            b.iter(|| parse_document(std::hint::black_box(list.as_bytes())));
        });
    }

    let quotes = format!("{}deep\n", ">".repeat(10_000));
    group.bench_function("quote_10000", |b| {
        b.iter(|| parse_document(std::hint::black_box(quotes.as_bytes())));
    });

    group.finish();
}

criterion_group!(benches, bench_document_throughput, bench_deep_nesting);
criterion_main!(benches);
