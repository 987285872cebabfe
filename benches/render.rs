// benches/render.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use mat_page::render::page::render_page;
use mat_page::snapshot::{CompletedMatch, ScheduleMatch, TeamSnapshot, Wrestler};

fn sample_snapshot() -> TeamSnapshot {
    let weights = [
        "106", "113", "120", "126", "132", "138", "144", "150",
        "157", "165", "175", "190", "215", "285", "HWT",
    ];

    let mut snap = TeamSnapshot::default();
    for (i, w) in weights.iter().cycle().take(45).enumerate() {
        snap.roster.push(Wrestler {
            name: format!("Wrestler {}", i),
            weight_class: (*w).to_string(),
            grade: format!("{}", 9 + (i % 4)),
            record: Some(format!("{}-{}", i % 12, i % 5)),
        });
    }
    for i in 0..20 {
        snap.schedule.push(ScheduleMatch {
            date: format!("1/{}", i + 1),
            opponent: format!("Opponent {}", i),
            location: if i % 2 == 0 { "Home".into() } else { "Away".into() },
            time: "6:00 PM".into(),
            result: if i % 3 == 0 { Some("Win 40-30".into()) } else { None },
        });
    }
    for i in 0..12 {
        snap.results.push(CompletedMatch {
            date: format!("12/{}", i + 1),
            opponent: format!("Opponent {}", i),
            score: "45-30".into(),
            result: if i % 2 == 0 { "Win 45-30".into() } else { "Loss 30-45".into() },
            location: "Home".into(),
        });
    }
    snap
}

fn bench_render(c: &mut Criterion) {
    let snap = sample_snapshot();

    c.bench_function("render_page_inline", |b| {
        b.iter(|| {
            let html = render_page(black_box(&snap), true);
            black_box(html.len())
        })
    });

    c.bench_function("render_page_linked", |b| {
        b.iter(|| {
            let html = render_page(black_box(&snap), false);
            black_box(html.len())
        })
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
