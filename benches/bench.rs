// Criterion benchmarks for SNP Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use snp_match::core::{similarity::{TextSimilarityModel, TfIdf}, PartnerMatcher};
use snp_match::models::PartnerRecord;
use snp_match::services::StaticCatalog;

const DOMAINS: &[&str] = &[
    "leather sandals manufacturer",
    "organic spice trading",
    "large wholesale freight",
    "silk saree handloom listing",
    "brass and pottery handicrafts",
    "ayurvedic personal care fulfilment",
];

fn create_partner(id: usize) -> PartnerRecord {
    PartnerRecord {
        id: format!("SNP{:05}", id),
        name: format!("Partner {}", id),
        domain: format!("{} cluster {}", DOMAINS[id % DOMAINS.len()], id % 97),
        sectors: vec![format!("sector{}", id % 8)],
        regions: vec![format!("region{}", id % 30)],
        operational_capacity: (id % 150) as f64,
        contact: None,
        external_id: None,
    }
}

fn bench_fit(c: &mut Criterion) {
    let corpus: Vec<String> = (0..500).map(|i| create_partner(i).document()).collect();

    c.bench_function("tfidf_fit_500_documents", |b| {
        b.iter(|| TfIdf.fit(black_box(&corpus)));
    });
}

fn bench_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching");

    for partner_count in [10, 100, 1000, 5000].iter() {
        let matcher = PartnerMatcher::new(StaticCatalog((0..*partner_count).map(create_partner).collect()));
        // Build the index outside the timed loop
        let _ = matcher.index();

        group.bench_with_input(
            BenchmarkId::new("find_best_partners", partner_count),
            partner_count,
            |b, _| {
                b.iter(|| {
                    matcher.find_best_partners(
                        black_box("handmade leather sandals"),
                        black_box(Some("Agra")),
                        black_box(Some(600)),
                        black_box(8),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_fit, bench_matching);

criterion_main!(benches);
