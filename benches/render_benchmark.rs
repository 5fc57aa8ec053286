//! Performance benchmarks for list rendering
//!
//! Measures one frame of the user list for growing list sizes, at the top
//! and at the bottom of the list.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ratatui::{buffer::Buffer, layout::Rect};
use userfeed::models::{User, UserLogin, UserName, UserPicture};
use userfeed::scroll::{IntersectionObserver, ObserverOptions};
use userfeed::ui::{content_height, InfiniteList};

fn generate_users(count: usize) -> Vec<User> {
    (0..count)
        .map(|i| User {
            email: format!("person{}@example.com", i),
            login: UserLogin {
                uuid: format!("00000000-0000-0000-0000-{:012}", i),
            },
            name: UserName {
                title: "Mr".to_string(),
                first: format!("Person{}", i),
                last: "Example".to_string(),
            },
            picture: UserPicture {
                thumbnail: format!("https://randomuser.me/api/portraits/thumb/men/{}.jpg", i % 100),
                ..UserPicture::default()
            },
        })
        .collect()
}

/// Benchmark rendering the first screen
fn bench_list_render_top(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_render_top");
    let area = Rect::new(0, 0, 120, 40);

    for size in [20, 100, 1000].iter() {
        let users = generate_users(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &users, |b, users| {
            let mut buf = Buffer::empty(area);
            b.iter(|| {
                buf.reset();
                let geometry = InfiniteList::new(black_box(users)).render_list(area, &mut buf);
                black_box(geometry)
            });
        });
    }

    group.finish();
}

/// Benchmark rendering the last screen, with the sentinel and spinner visible
fn bench_list_render_bottom(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_render_bottom");
    let area = Rect::new(0, 0, 120, 40);

    for size in [20, 100, 1000].iter() {
        let users = generate_users(*size);
        let offset = content_height(*size).saturating_sub(area.height as u32);

        group.bench_with_input(BenchmarkId::from_parameter(size), &users, |b, users| {
            let mut buf = Buffer::empty(area);
            b.iter(|| {
                buf.reset();
                let geometry = InfiniteList::new(black_box(users))
                    .offset(offset)
                    .loading(true)
                    .render_list(area, &mut buf);
                black_box(geometry)
            });
        });
    }

    group.finish();
}

/// Benchmark a render followed by the sentinel check, as the event loop does
fn bench_render_and_observe(c: &mut Criterion) {
    let users = generate_users(100);
    let area = Rect::new(0, 0, 120, 40);
    let options = ObserverOptions::new().with_root_margin(10).with_threshold(0.0);

    c.bench_function("render_and_observe", |b| {
        let mut buf = Buffer::empty(area);
        let mut observer = IntersectionObserver::new(options, 1);
        let mut offset = 0u32;
        b.iter(|| {
            buf.reset();
            offset = (offset + 7) % content_height(users.len());
            let geometry = InfiniteList::new(&users)
                .offset(offset)
                .render_list(area, &mut buf);
            black_box(observer.observe(geometry))
        });
    });
}

criterion_group!(
    benches,
    bench_list_render_top,
    bench_list_render_bottom,
    bench_render_and_observe,
);

criterion_main!(benches);
