// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use hashbrown::HashMap;
use kurbo::Rect;
use understory_selection_overlay::{
    ElementPath, FocusColors, OutlineCache, OutlineResolver, OverlayList, OverlayTheme,
};

/// A flat canvas of `len` elements laid out on a grid.
fn snapshot(len: usize) -> (Vec<ElementPath>, HashMap<ElementPath, Rect>) {
    let root = ElementPath::parse("storyboard/scene");
    let mut paths = Vec::with_capacity(len);
    let mut frames = HashMap::with_capacity(len);
    for i in 0..len {
        let path = root.child(&format!("el-{i}"));
        let col = (i % 64) as f64;
        let row = (i / 64) as f64;
        frames.insert(
            path.clone(),
            Rect::from_origin_size((col * 40.0, row * 40.0), (32.0, 24.0)),
        );
        paths.push(path);
    }
    (paths, frames)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay/render");
    let theme = OverlayTheme::default();
    let colors = FocusColors::new(None);

    for len in [1usize, 16, 256, 4_096] {
        let (paths, frames) = snapshot(len);
        let resolver = OutlineResolver::new(&frames, &colors, &theme, 1.25);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("uncached", len), &paths, |b, paths| {
            b.iter(|| black_box(resolver.render(paths)));
        });

        group.bench_with_input(BenchmarkId::new("cached_warm", len), &paths, |b, paths| {
            let mut cache = OutlineCache::new();
            cache.render(&resolver, 0, paths);
            b.iter(|| black_box(cache.render(&resolver, 0, paths)));
        });
    }

    group.finish();
}

fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay/reconcile");
    let theme = OverlayTheme::default();
    let colors = FocusColors::new(None);

    // Hypothesis: toggling one element at the end of a large selection costs
    // one linear scan per entry, dominated by slot comparisons.
    for len in [16usize, 256, 1_024] {
        let (paths, frames) = snapshot(len);
        let resolver = OutlineResolver::new(&frames, &colors, &theme, 1.0);
        let full = resolver.render(&paths);
        let shorter = resolver.render(&paths[..len - 1]);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_function(BenchmarkId::new("toggle_last", len), |b| {
            let mut shown = OverlayList::new();
            shown.update(full.clone());
            let mut flip = false;
            b.iter(|| {
                let next = if flip { full.clone() } else { shorter.clone() };
                flip = !flip;
                black_box(shown.update(next))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render, bench_reconcile);
criterion_main!(benches);
