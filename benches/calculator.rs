use cardcycle::{BillingCalculator, CardConfiguration};
use cardcycle_config::{Config, ConfigManager};
use cardcycle_domain::CardProfile;
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::tempdir;

fn sample_dates(count: i64) -> Vec<NaiveDate> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..count).map(|offset| start + Duration::days(offset)).collect()
}

fn bench_calculations(c: &mut Criterion) {
    let calc = BillingCalculator::new();
    let dates = sample_dates(365);
    let valid = CardConfiguration::new(31).with_due_day(10);
    let invalid = CardConfiguration::new(45);

    c.bench_function("billing_period_year", |b| {
        b.iter(|| {
            for date in &dates {
                black_box(calc.billing_period(&valid, *date));
            }
        })
    });

    c.bench_function("billing_period_fallback_year", |b| {
        b.iter(|| {
            for date in &dates {
                black_box(calc.billing_period(&invalid, *date));
            }
        })
    });

    c.bench_function("comprehensive_summary_year", |b| {
        b.iter(|| {
            for date in &dates {
                black_box(calc.comprehensive_summary(&valid, *date));
            }
        })
    });

    c.bench_function("launch_preview_year", |b| {
        b.iter(|| {
            for date in &dates {
                black_box(calc.launch_preview(*date, &valid));
            }
        })
    });
}

fn bench_config_io(c: &mut Criterion) {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    let mut config = Config::default();
    for idx in 0..200u32 {
        config.upsert_card(CardProfile::new(
            format!("Card {idx}"),
            CardConfiguration::new(idx % 31 + 1),
        ));
    }

    c.bench_function("config_save_200_cards", |b| {
        b.iter(|| manager.save(&config).expect("save config"))
    });

    manager.save(&config).expect("seed");

    c.bench_function("config_load_200_cards", |b| {
        b.iter(|| black_box(manager.load().expect("load config")))
    });
}

criterion_group!(benches, bench_calculations, bench_config_io);
criterion_main!(benches);
