// Criterion benchmark suite: property lookups and normalization.
//
// Run: cargo bench
// Specific group: cargo bench -- lookup
// HTML report: target/criterion/report/index.html

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use glifo::funcs::UnicodeFuncs;
use glifo::normalize::{compose, decompose};
use glifo::script::Script;

// A spread of codepoints across the planes: ASCII, marks, Indic, CJK,
// Hangul, astral, and an unassigned gap.
const SAMPLE: &[u32] = &[
    0x0041, 0x0061, 0x0300, 0x05B0, 0x0651, 0x094D, 0x0E38, 0x1100, 0x3042, 0x4E2D, 0xAC01,
    0xFF21, 0x10400, 0x11082, 0x1E900, 0x0378,
];

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    let funcs = UnicodeFuncs::builtin();

    group.bench_function("combining_class", |b| {
        b.iter(|| {
            for &cp in SAMPLE {
                black_box(funcs.combining_class(black_box(cp)));
            }
        })
    });
    group.bench_function("general_category", |b| {
        b.iter(|| {
            for &cp in SAMPLE {
                black_box(funcs.general_category(black_box(cp)));
            }
        })
    });
    group.bench_function("script", |b| {
        b.iter(|| {
            for &cp in SAMPLE {
                black_box(funcs.script(black_box(cp)));
            }
        })
    });
    group.finish();
}

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain");

    // Three levels of providers; only the bottom one overrides, so every
    // query walks the whole chain.
    let level0 = UnicodeFuncs::new(Some(&UnicodeFuncs::builtin()));
    level0.set_script_func(|f, cp| {
        if cp == 0x61 {
            Script::Arabic
        } else {
            f.parent().script(cp)
        }
    });
    let level1 = UnicodeFuncs::new(Some(&level0));
    let level2 = UnicodeFuncs::new(Some(&level1));
    level2.make_immutable();

    group.bench_function("script_depth_3", |b| {
        b.iter(|| {
            for &cp in SAMPLE {
                black_box(level2.script(black_box(cp)));
            }
        })
    });
    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("compose", |b| {
        b.iter(|| {
            black_box(compose(black_box(0x0041), black_box(0x030A)));
            black_box(compose(black_box(0x1111), black_box(0x1171)));
            black_box(compose(black_box(0x0308), black_box(0x0301)));
            black_box(compose(black_box(0x0041), black_box(0x0042)));
        })
    });
    group.bench_function("decompose", |b| {
        b.iter(|| {
            black_box(decompose(black_box(0x00C5)));
            black_box(decompose(black_box(0xD4DB)));
            black_box(decompose(black_box(0x212B)));
            black_box(decompose(black_box(0x0041)));
        })
    });
    group.finish();
}

criterion_group!(benches, bench_lookup, bench_chain, bench_normalize);
criterion_main!(benches);
