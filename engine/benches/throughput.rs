use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cubiomes::enums::MCVersion;
use seedscan_engine::oracle::fake::FakeOracle;
use seedscan_engine::oracle::{BlockPos, Dimension, StructureConfig};
use seedscan_engine::registry::StructureTag;
use seedscan_engine::{coordinator, SearchRequest, StructureQuery};

fn sparse_village_oracle(range: i64, every: i64) -> FakeOracle {
    let mut oracle = FakeOracle::default();
    oracle.configs.insert(
        StructureTag::Village,
        StructureConfig {
            region_size_chunks: 32,
            dimension: Dimension::Overworld,
        },
    );
    for seed in 0..range {
        if seed % every == 0 {
            oracle
                .positions
                .insert((StructureTag::Village, seed, 0, 0), BlockPos { x: 10, z: 10 });
        }
    }
    oracle
}

pub fn coordinator_throughput_benchmark(c: &mut Criterion) {
    let range = 500_000i64;
    let oracle = sparse_village_oracle(range, 997);
    let request = SearchRequest {
        version: MCVersion::MC_1_16_5,
        seed_start: 0,
        seed_end: range - 1,
        max_results: 10,
        structures: vec![StructureQuery {
            tag: StructureTag::Village,
            max_distance: 2000,
            biome: None,
        }],
    };

    let mut group = c.benchmark_group("batched_search");
    group.sample_size(10).measurement_time(Duration::from_secs(30));
    group.bench_with_input(BenchmarkId::new("scan", range), &request, |b, req| {
        b.iter(|| coordinator::search(&oracle, req));
    });
    group.finish();
}

criterion_group!(benches, coordinator_throughput_benchmark);
criterion_main!(benches);
