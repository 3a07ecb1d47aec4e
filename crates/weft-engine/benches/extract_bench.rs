//! Candidate extraction throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use weft_engine::CandidateExtractor;

fn synthetic_template(repeats: usize) -> String {
    let row = r#"<tr class="border-gray-200 hover:bg-gray-50">
  <td class="p-4 text-gray-700">cell</td>
  <td class="px-2 py-1 text-brand">cell</td>
  <td class="bg-emerald-100 mx-auto">{{ value }}</td>
</tr>
"#;
    let mut out = String::with_capacity(row.len() * repeats + 64);
    out.push_str("<table class=\"m-4 bg-white\">\n");
    for _ in 0..repeats {
        out.push_str(row);
    }
    out.push_str("</table>\n");
    out
}

fn bench_extract(c: &mut Criterion) {
    let extractor = CandidateExtractor::new().unwrap();
    let small = synthetic_template(10);
    let large = synthetic_template(2_000);

    c.bench_function("extract_small_template", |b| {
        b.iter(|| extractor.extract(black_box(&small)))
    });
    c.bench_function("extract_large_template", |b| {
        b.iter(|| extractor.extract(black_box(&large)))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
