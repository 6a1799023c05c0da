use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use clickrank::ranking::{ClickEvent, ListingRecord, RankingPolicy, aggregate, merge, rank};

#[derive(Clone)]
struct BenchListing {
    id: i64,
    deadline: NaiveDate,
}

impl ListingRecord for BenchListing {
    fn listing_id(&self) -> i64 {
        self.id
    }

    fn deadline(&self) -> NaiveDate {
        self.deadline
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
}

fn fixture(listings: i64, events_per_listing: i64) -> (Vec<BenchListing>, Vec<ClickEvent>) {
    let deadline = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
    let active: Vec<BenchListing> = (1..=listings)
        .map(|id| BenchListing { id, deadline })
        .collect();
    let events = (1..=listings)
        .flat_map(|id| {
            (0..events_per_listing * (id % 5 + 1))
                .map(move |i| ClickEvent::new(id, now() - Duration::minutes(i * 13)))
        })
        .collect();
    (active, events)
}

fn bench_badge_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("badge_pipeline");
    let policy = RankingPolicy::default();

    for size in [100i64, 1_000, 10_000] {
        let (active, events) = fixture(size, 10);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let counts = aggregate(black_box(&active), black_box(&events), now(), &policy);
                let badges = rank(&counts, &policy);
                black_box(merge(&active, &counts, &badges))
            })
        });
    }

    group.finish();
}

fn bench_rank_only(c: &mut Criterion) {
    let policy = RankingPolicy::default();
    let (active, events) = fixture(10_000, 10);
    let counts = aggregate(&active, &events, now(), &policy);

    c.bench_function("rank_10k", |b| {
        b.iter(|| black_box(rank(black_box(&counts), &policy)))
    });
}

criterion_group!(benches, bench_badge_pipeline, bench_rank_only);
criterion_main!(benches);
