use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use toklex::{Lexer, LexerConfig};

/// Generate source content of various sizes
fn generate_source(size_category: &str) -> String {
    match size_category {
        "small" => {
            // ~1KB of mixed tokens
            let mut content = String::new();
            for i in 0..16 {
                content.push_str(&format!(
                    "let field_{i} = {i}; // entry {i}\nlet tag_{i} = 'T{i:02}';\nlet name_{i} = \"value-{i}\\n\";\n"
                ));
            }
            content
        }
        "medium" => {
            // ~10KB
            let mut content = String::new();
            for i in 0..160 {
                content.push_str(&format!(
                    "fn handler_{i}(a, b) {{\n    let mask = 0x{i:x};\n    emit(a - b, -{i}, \"label {i}\");\n}}\n/* block {i} */\n"
                ));
            }
            content
        }
        "large" => {
            // ~100KB
            let mut content = String::new();
            for i in 0..1600 {
                content.push_str(&format!(
                    "let item_{i} = {{ id = {i}, tag = 'I{:03}', path = \"/data/item-{i}\" }};\n",
                    i % 1000
                ));
            }
            content
        }
        _ => String::new(),
    }
}

fn bench_config() -> LexerConfig {
    LexerConfig {
        operators: b"(){}=,;-".to_vec(),
        keywords: vec!["fn".to_string(), "let".to_string(), "emit".to_string()],
        ..LexerConfig::default()
    }
}

fn bench_full_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pass");

    for size in ["small", "medium", "large"] {
        let content = generate_source(size);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| {
                let lexer = Lexer::new(black_box(content), bench_config()).unwrap();
                black_box(lexer.run())
            })
        });
    }

    group.finish();
}

fn bench_session_construction(c: &mut Criterion) {
    let content = generate_source("small");
    c.bench_function("session_construction", |b| {
        b.iter(|| {
            let lexer = Lexer::new(black_box(&content), bench_config()).unwrap();
            black_box(lexer)
        })
    });
}

fn bench_escape_heavy_strings(c: &mut Criterion) {
    let mut content = String::new();
    for i in 0..200 {
        content.push_str(&format!("let s_{i} = \"\\x41\\t\\\\escaped\\n\\101 {i}\";\n"));
    }

    let mut group = c.benchmark_group("escape_heavy");
    group.throughput(Throughput::Bytes(content.len() as u64));
    group.bench_function("decode", |b| {
        b.iter(|| {
            let lexer = Lexer::new(black_box(&content), bench_config()).unwrap();
            black_box(lexer.run())
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_full_pass,
    bench_session_construction,
    bench_escape_heavy_strings
);
criterion_main!(benches);
