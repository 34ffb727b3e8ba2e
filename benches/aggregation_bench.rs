use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use chronostat::io::reader::{ColumnLayout, DataRecordReader};
use chronostat::io::writer::{OutputLayout, SummaryWriter};
use chronostat::parsing::record_parser::RecordParser;
use chronostat::stats::generator::StatisticsGenerator;
use chronostat::stats::group::GroupStatistics;
use chronostat::time::{Period, Unit};

fn bench_group_statistics(c: &mut Criterion) {
    c.bench_function("group_statistics_10k_entries", |b| {
        b.iter(|| {
            let mut statistics = GroupStatistics::new(4);
            for i in 0..10_000 {
                let value = i as f64 * 0.25;
                statistics
                    .add_entry(black_box(&[value, value + 1.0, value + 2.0, value + 3.0]))
                    .unwrap();
            }
            black_box(statistics.standard_deviations())
        })
    });
}

fn bench_aggregation_pipeline(c: &mut Criterion) {
    // One record per second for 50k seconds, two value series.
    let mut data = String::with_capacity(50_000 * 40);
    for i in 0..50_000u32 {
        let hours = i / 3600;
        let minutes = (i / 60) % 60;
        let seconds = i % 60;
        data.push_str(&format!(
            "01/01/2020,{:02}:{:02}:{:02},{},{}\n",
            hours,
            minutes,
            seconds,
            i % 100,
            (i % 17) as f64 * 0.5
        ));
    }

    c.bench_function("aggregate_50k_records_by_minute", |b| {
        b.iter(|| {
            let parser = RecordParser::new(data.as_bytes());
            let mut reader =
                DataRecordReader::new(parser, ColumnLayout::default()).unwrap();
            let mut writer = SummaryWriter::new(Vec::new(), OutputLayout::default()).unwrap();

            let report = StatisticsGenerator::new(Period::of(1, Unit::Minutes))
                .run(&mut reader, &mut writer)
                .unwrap();
            black_box(report.windows)
        })
    });
}

criterion_group!(benches, bench_group_statistics, bench_aggregation_pipeline);
criterion_main!(benches);
