//! Performance benchmarks for ferroblock
//!
//! Run with: cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Sample Markdown documents of various sizes
mod samples {
    pub const TINY: &str = "Hello, world!";

    pub const SMALL: &str = r#"# Heading

This is a paragraph with some text.

- Item 1
- Item 2
- Item 3

> A short quote.
"#;

    pub const MEDIUM: &str = r#"# Project README

This is a sample README file that demonstrates various block structures.

## Features

- Fast parsing
- Arena tree
- Bounded nesting

### Code Example

```rust
fn main() {
    println!("Hello, world!");
}
```

## Details

> A blockquote that spans
> multiple lines,
lazily continued here.
>
> - with a list
> - inside it

1. First
2. Second

   With a second paragraph.

3. Third
"#;

    /// Generate a large document by repeating sections
    pub fn large() -> String {
        let section = r#"
## Section Title

This paragraph contains enough text to exercise continuation lines
across several physical lines of input.

- First bullet point
- Second bullet point
  - Nested bullet
  - Another nested bullet
- Third point

> A blockquote that spans
> multiple lines.

```rust
fn example() {
    let x = 42;
}
```

    indented code
    more code

"#;
        section.repeat(50)
    }

    /// Document with deeply nested blockquotes
    pub fn pathological_nested_quotes() -> String {
        "> ".repeat(1000) + "deep\n"
    }

    /// Document with deeply nested list items
    pub fn pathological_nested_lists() -> String {
        (0..200)
            .map(|depth| format!("{}- item\n", "  ".repeat(depth)))
            .collect()
    }

    /// Long runs of blank lines between list items
    pub fn pathological_blank_runs() -> String {
        "- a\n\n\n\n\n\n\n\n".repeat(500)
    }
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for (name, input) in [
        ("tiny", samples::TINY),
        ("small", samples::SMALL),
        ("medium", samples::MEDIUM),
    ] {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(name, |b| b.iter(|| ferroblock::parse(black_box(input))));
    }

    let large = samples::large();
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("large", |b| {
        b.iter(|| ferroblock::parse(black_box(&large)))
    });

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(20); // Fewer samples for slow cases

    let quotes = samples::pathological_nested_quotes();
    group.throughput(Throughput::Bytes(quotes.len() as u64));
    group.bench_function("nested_quotes", |b| {
        b.iter(|| ferroblock::parse(black_box(&quotes)))
    });

    let lists = samples::pathological_nested_lists();
    group.throughput(Throughput::Bytes(lists.len() as u64));
    group.bench_function("nested_lists", |b| {
        b.iter(|| ferroblock::parse(black_box(&lists)))
    });

    let blanks = samples::pathological_blank_runs();
    group.throughput(Throughput::Bytes(blanks.len() as u64));
    group.bench_function("blank_runs", |b| {
        b.iter(|| ferroblock::parse(black_box(&blanks)))
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_pathological);
criterion_main!(benches);
