// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use understory_resize::canvas::Canvas;
use understory_resize::{HandlePosition, OverlayConfig, ResizeOverlay};

fn bench_apply_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize/apply_drag");

    for steps in [64usize, 1_024, 16_384] {
        let deltas: Vec<Vec2> = (0..steps)
            .map(|i| {
                let t = i as f64;
                Vec2::new((t * 0.37).sin() * 12.0, (t * 0.23).cos() * 12.0)
            })
            .collect();
        group.throughput(Throughput::Elements(steps as u64));

        group.bench_with_input(BenchmarkId::new("corner", steps), &deltas, |b, deltas| {
            let mut canvas = Canvas::new();
            let id = canvas.insert(Rect::new(100.0, 100.0, 300.0, 250.0));
            let mut overlay = ResizeOverlay::attach(&canvas, id, OverlayConfig::default()).unwrap();
            b.iter(|| {
                for &delta in deltas {
                    overlay.apply_drag(&mut canvas, HandlePosition::TopLeft, delta);
                }
                black_box(canvas.rect(id));
            });
        });

        group.bench_with_input(BenchmarkId::new("all_handles", steps), &deltas, |b, deltas| {
            let mut canvas = Canvas::new();
            let id = canvas.insert(Rect::new(100.0, 100.0, 300.0, 250.0));
            let mut overlay = ResizeOverlay::attach(&canvas, id, OverlayConfig::default()).unwrap();
            b.iter(|| {
                for (i, &delta) in deltas.iter().enumerate() {
                    let position = HandlePosition::ALL[i % HandlePosition::COUNT];
                    overlay.apply_drag(&mut canvas, position, delta);
                }
                black_box(canvas.rect(id));
            });
        });
    }

    group.finish();
}

fn bench_arrange_and_hit_test(c: &mut Criterion) {
    let mut canvas = Canvas::new();
    let id = canvas.insert(Rect::new(0.0, 0.0, 400.0, 300.0));
    let mut overlay = ResizeOverlay::attach(&canvas, id, OverlayConfig::default()).unwrap();

    c.bench_function("resize/arrange", |b| {
        b.iter(|| {
            overlay.arrange(&mut canvas, black_box(Size::new(400.0, 300.0)));
        });
    });

    let probes: Vec<Point> = (0..256)
        .map(|i| Point::new(f64::from(i % 16) * 26.0 - 5.0, f64::from(i / 16) * 20.0 - 5.0))
        .collect();
    c.bench_function("resize/hit_test", |b| {
        b.iter(|| {
            let hits = probes
                .iter()
                .filter(|&&p| overlay.hit_test(p).is_some())
                .count();
            black_box(hits);
        });
    });
}

criterion_group!(benches, bench_apply_drag, bench_arrange_and_hit_test);
criterion_main!(benches);
