// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use velograph_fit::{RiderProfile, RidingStyle};
use velograph_frame_svg::{FrameStyle, render_frame_svg};
use velograph_geometry::{FrameGeometry, FrameProjector, OutputBox, WheelSpec};

fn geometries(count: usize) -> Vec<FrameGeometry> {
    (0..count)
        .map(|i| {
            let step = (i % 40) as f64;
            FrameGeometry {
                stack: 520.0 + step * 3.0,
                reach: 360.0 + step * 1.5,
                top_tube_effective: Some(520.0 + step * 4.0),
                seat_tube_length: (i % 3 != 0).then_some(460.0 + step * 5.0),
                head_tube_length: (i % 4 != 0).then_some(110.0 + step * 3.0),
                chainstay: 410.0 + (i % 5) as f64 * 5.0,
                wheelbase: 980.0 + step * 4.0,
                bb_drop: 65.0 + (i % 6) as f64,
                head_tube_angle: 70.0 + (i % 7) as f64 * 0.5,
                seat_tube_angle: 72.0 + (i % 5) as f64 * 0.5,
            }
        })
        .collect()
}

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection/project");
    for len in [16usize, 256, 4_096] {
        let frames = geometries(len);
        group.throughput(Throughput::Elements(len as u64));

        for (name, output) in [
            ("open", OutputBox::default()),
            ("width", OutputBox::with_width(640.0)),
            ("box", OutputBox::new(640.0, 400.0)),
        ] {
            group.bench_with_input(BenchmarkId::new(name, len), &frames, |b, frames| {
                b.iter(|| {
                    for g in frames {
                        let projector = FrameProjector::new(g, Some(WheelSpec::default()), output);
                        black_box(projector.view_points());
                    }
                });
            });
        }
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection/render_svg");
    let frames = geometries(64);
    let style = FrameStyle::default();
    group.throughput(Throughput::Elements(frames.len() as u64));
    group.bench_function("64_frames", |b| {
        b.iter(|| {
            for g in &frames {
                let projector =
                    FrameProjector::new(g, Some(WheelSpec::default()), OutputBox::with_width(480.0));
                black_box(render_frame_svg(&projector, &style));
            }
        });
    });
    group.finish();
}

fn bench_fit(c: &mut Criterion) {
    let frames = geometries(1_024);
    let rider = RiderProfile {
        inseam_cm: Some(84.0),
        torso_cm: Some(62.0),
        arm_cm: Some(64.0),
        style: RidingStyle::Balanced,
    };
    c.bench_function("fit/report_1024", |b| {
        b.iter(|| {
            for g in &frames {
                black_box(rider.report(Some(g.stack), Some(g.reach)));
            }
        });
    });
}

criterion_group!(benches, bench_project, bench_render, bench_fit);
criterion_main!(benches);
