use char_category_engine::CharacterCategory;
use criterion::{Criterion, criterion_group, criterion_main};

const MIXED_TEXT: &str = "東京都に住むAlice は 2024年にカタカナとひらがなを学び、ΑΒΓ と АБВ も読めます。";

fn bench_load_default(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    group.sample_size(20);

    group.bench_function("default_char_def", |b| {
        b.iter(|| {
            let cc = CharacterCategory::load_default().unwrap();
            std::hint::black_box(cc);
        });
    });

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let cc = CharacterCategory::load_default().unwrap();
    let mut group = c.benchmark_group("classify");

    group.bench_function("mixed_text", |b| {
        b.iter(|| {
            for ch in std::hint::black_box(MIXED_TEXT).chars() {
                std::hint::black_box(cc.classify(ch));
            }
        });
    });

    group.bench_function("uncovered_code_point", |b| {
        b.iter(|| std::hint::black_box(cc.classify(std::hint::black_box(0xE000u32))));
    });

    group.finish();
}

fn bench_longest_run(c: &mut Criterion) {
    let cc = CharacterCategory::load_default().unwrap();
    let text = "カタカナ".repeat(64) + "abc";
    let range = cc.ranges_containing('カ').next().unwrap().clone();

    c.bench_function("longest_run_within_single_range", |b| {
        b.iter(|| {
            std::hint::black_box(
                cc.longest_run_within_single_range(&range, std::hint::black_box(&text)),
            )
        });
    });
}

criterion_group!(benches, bench_load_default, bench_classify, bench_longest_run);
criterion_main!(benches);
