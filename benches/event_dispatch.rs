// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for widget event handling.
//!
//! Measures the performance of:
//! - Time updates (label formatting + scrubber write)
//! - Click dispatch (ancestry walk + selector rules)
//! - Binding a block to the standard template

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::time::Duration;
use video_block::domain::video::{IdleTimeout, Volume};
use video_block::markup::{NodePath, Selector};
use video_block::media::{MediaEvent, SimulatedMedia};
use video_block::scheduler::ManualScheduler;
use video_block::widget::{template, VideoBlock};

type Block = VideoBlock<SimulatedMedia, ManualScheduler>;

fn playing_block() -> Block {
    let mut block = VideoBlock::bind(
        template(),
        SimulatedMedia::new(Volume::new(0.8)),
        ManualScheduler::new(),
        IdleTimeout::default(),
    )
    .unwrap();
    block.media_mut().load(3600.0);
    block.pump_media_events();
    block.handle_media_event(MediaEvent::Play);
    block
}

fn target(block: &Block, selector: &str) -> NodePath {
    block
        .container()
        .query_selector(&Selector::parse(selector).unwrap())
        .unwrap()
}

fn bench_time_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_dispatch");
    let mut block = playing_block();

    group.bench_function("time_update", |b| {
        b.iter(|| {
            block.handle_media_event(black_box(MediaEvent::TimeUpdate));
        });
    });

    group.finish();
}

fn bench_click(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_dispatch");
    let mut block = playing_block();
    let surface = target(&block, "video");
    let elapsed = target(&block, ".elapsed");

    // Two surface clicks leave the block playing again.
    group.bench_function("surface_click_pair", |b| {
        b.iter(|| {
            block.handle_click(black_box(&surface)).unwrap();
            block.pump_media_events();
            block.handle_click(black_box(&surface)).unwrap();
            block.pump_media_events();
        });
    });

    group.bench_function("native_control_click", |b| {
        b.iter(|| black_box(block.handle_click(black_box(&elapsed)).unwrap()));
    });

    group.finish();
}

fn bench_idle_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_dispatch");
    let mut block = playing_block();

    group.bench_function("pointer_move_then_idle", |b| {
        b.iter(|| {
            block.handle_pointer_move();
            for id in block.scheduler_mut().advance(Duration::from_millis(3000)) {
                block.handle_idle_timeout(id);
            }
        });
    });

    group.finish();
}

fn bench_bind(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_dispatch");

    group.bench_function("bind_template", |b| {
        b.iter(|| {
            black_box(
                VideoBlock::bind(
                    template(),
                    SimulatedMedia::default(),
                    ManualScheduler::new(),
                    IdleTimeout::default(),
                )
                .unwrap(),
            )
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_time_update,
    bench_click,
    bench_idle_cycle,
    bench_bind
);
criterion_main!(benches);
