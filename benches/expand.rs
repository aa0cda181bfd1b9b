use expressdate::{Context, DatePattern, DateSet, WeekdayFilter, expand, expand_filtered, parse};

use chrono::{NaiveDate, Weekday};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

const PAT_YEAR: &str = "2024-**-**";
const PAT_CENTURY: &str = "19**-**-10";
const PAT_LEAP_DAYS: &str = "****-02-29";
const EXPR_RANGE: &str = "2024-01-01 ~ 2024-12-31";

fn criterion_benches(c: &mut Criterion) {
    let year = DatePattern::new(PAT_YEAR).unwrap();
    let century = DatePattern::new(PAT_CENTURY).unwrap();
    let leap_days = DatePattern::new(PAT_LEAP_DAYS).unwrap();

    c.bench_function("expand year", |b| b.iter(|| expand(black_box(&year)).unwrap()));

    c.bench_function("expand century", |b| {
        b.iter(|| expand(black_box(&century)).unwrap())
    });

    c.bench_function("expand leap days", |b| {
        b.iter(|| expand(black_box(&leap_days)).unwrap())
    });

    c.bench_function("expand year mondays", |b| {
        b.iter(|| expand_filtered(black_box(&year), WeekdayFilter::new(Weekday::Mon)).unwrap())
    });

    let context = Context::new(NaiveDate::from_ymd_opt(2024, 8, 20).unwrap());

    c.bench_function("parse range", |b| {
        b.iter(|| parse(black_box(EXPR_RANGE), &context).unwrap())
    });

    let range = DateSet::with_context(EXPR_RANGE, context).unwrap();
    let mondays = DateSet::with_context("2024-**-**, mon", context).unwrap();

    c.bench_function("intersect year with mondays", |b| {
        b.iter(|| black_box(&range) & black_box(&mondays))
    });
}

criterion_group!(benches, criterion_benches);
criterion_main!(benches);
