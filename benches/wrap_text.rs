use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use thoughtui::{
    domain::text::{truncate_text, wrap_text},
    presentation::widgets::shrink_text::ShrinkText,
};

const ENTRY: &str = r#"Woke up before the alarm and watched the light move across the kitchen table for a while.
Nothing urgent today. I want to finish the chapter I started last week, call my sister, and walk to the market before it closes.
Lately I keep noticing how much calmer the mornings are when I write a few lines first. Maybe that is the whole point of keeping this journal: not remembering everything, just noticing something.
Hoje o café estava forte demais, mas a conversa com a vizinha compensou. Amanhã tento de novo.
日記を書くと、一日の終わりが少しだけ静かになる。"#;

fn journal() -> String {
    ENTRY.repeat(8)
}

fn benchmark(c: &mut Criterion) {
    let text = journal();

    c.bench_function("wrap-card-width", |b| {
        b.iter(|| wrap_text(black_box(&text), black_box(76)))
    });

    c.bench_function("wrap-narrow", |b| {
        b.iter(|| wrap_text(black_box(&text), black_box(20)))
    });

    c.bench_function("wrap-then-truncate", |b| {
        b.iter(|| truncate_text(&wrap_text(black_box(&text), 76), black_box(12)))
    });

    c.bench_function("shrink-text-height", |b| {
        b.iter(|| ShrinkText::new(black_box(text.as_str()), 76, 40).height())
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
