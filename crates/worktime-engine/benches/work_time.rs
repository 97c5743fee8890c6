use std::collections::HashMap;
use std::hint::black_box;

use chrono::{Days, NaiveDate, NaiveDateTime, Weekday};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use worktime_engine::{HolidayRange, WorkShift, WorkTimeConfig};

fn office_config(holiday_count: u64) -> WorkTimeConfig {
    let shifts = vec![
        WorkShift::from_hm((9, 0), (13, 0)),
        WorkShift::from_hm((14, 0), (18, 0)),
    ];
    let schedule: HashMap<Weekday, Vec<WorkShift>> = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
    ]
    .into_iter()
    .map(|day| (day, shifts.clone()))
    .collect();

    let first = NaiveDate::from_ymd_opt(2021, 1, 4).unwrap();
    let holidays: Vec<HolidayRange> = (0..holiday_count)
        .map(|i| {
            let start = first + Days::new(i * 14);
            HolidayRange::new(start, start + Days::new(2))
        })
        .collect();

    WorkTimeConfig::build(&schedule, &holidays).unwrap()
}

fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn bench_work_time(c: &mut Criterion) {
    let mut group = c.benchmark_group("work_time");
    let start = at(2021, 1, 1, 10);
    let end = at(2021, 12, 31, 15);

    for holidays in [0u64, 8, 26] {
        let config = office_config(holidays);
        group.bench_with_input(BenchmarkId::new("one_year", holidays), &config, |b, cfg| {
            b.iter(|| cfg.work_time(black_box(start), black_box(end)))
        });
    }

    let config = office_config(0);
    let (start, end) = (at(2021, 3, 7, 10), at(2021, 3, 7, 16));
    group.bench_function("single_day", |b| {
        b.iter(|| config.work_time(black_box(start), black_box(end)))
    });

    group.finish();
}

criterion_group!(benches, bench_work_time);
criterion_main!(benches);
