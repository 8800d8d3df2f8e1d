use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slotbot_common::Event;
use slotbot_scheduling::find_next_slot_at;

fn bench_find_next_slot(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2025, 5, 5, 8, 0, 0).unwrap();
    // a week of back-to-back hour bookings with one half-hour hole at the end
    let events: Vec<Event> = (0..(7 * 24))
        .map(|i| {
            let start = now + Duration::hours(i);
            Event {
                title: format!("staging | auth | OPS-{i} | bench"),
                start,
                end: start + Duration::minutes(if i == 7 * 24 - 2 { 30 } else { 60 }),
                environment: if i % 3 == 0 { "qa" } else { "staging" }.to_string(),
                service: "auth".to_string(),
            }
        })
        .collect();

    c.bench_function("find_next_slot_week", |b| {
        b.iter(|| {
            find_next_slot_at(
                black_box(now),
                "staging",
                "auth",
                black_box(Duration::minutes(30)),
                black_box(&events),
            )
        })
    });
}

criterion_group!(benches, bench_find_next_slot);
criterion_main!(benches);
