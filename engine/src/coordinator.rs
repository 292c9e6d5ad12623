use std::sync::Mutex;
use std::thread;

use crate::oracle::Oracle;
use crate::request::{partition, SearchRequest, SearchResult};
use crate::worker;

/// Runs a batched search to completion and returns the aggregate result.
///
/// Spawns one thread per partition (bounded by `MAX_WORKERS`), all
/// borrowing `oracle` and `request` for the scope's duration; the only
/// state they share is the `Mutex<SearchResult>` itself.
pub fn search<O: Oracle>(oracle: &O, request: &SearchRequest) -> SearchResult {
    let partitions = partition(request);
    if partitions.is_empty() {
        return SearchResult::default();
    }

    let shared = Mutex::new(SearchResult::default());

    thread::scope(|scope| {
        for part in &partitions {
            scope.spawn(|| {
                let mut gen = oracle.new_generator(request.version);
                let local_scanned = worker::run_partition(
                    oracle,
                    request,
                    *part,
                    &mut gen,
                    || shared.lock().unwrap().seeds.len() as u32 >= request.max_results,
                    |seed| {
                        let mut result = shared.lock().unwrap();
                        if (result.seeds.len() as u32) < request.max_results {
                            result.seeds.push(seed);
                        }
                        result.seeds.len() as u32 >= request.max_results
                    },
                );
                shared.lock().unwrap().scanned += local_scanned;
            });
        }
    });

    shared.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::fake::FakeOracle;
    use crate::oracle::{Dimension, StructureConfig};
    use crate::registry::StructureTag;
    use crate::request::StructureQuery;
    use cubiomes::enums::MCVersion;

    fn make_oracle_with_village_every_region() -> FakeOracle {
        let mut oracle = FakeOracle::default();
        oracle.configs.insert(
            StructureTag::Village,
            StructureConfig {
                region_size_chunks: 32,
                dimension: Dimension::Overworld,
            },
        );
        for seed in 0..200i64 {
            // Only seeds divisible by 10 place a village in range.
            if seed % 10 == 0 {
                oracle
                    .positions
                    .insert((StructureTag::Village, seed, 0, 0), crate::oracle::BlockPos { x: 10, z: 10 });
            }
        }
        oracle
    }

    #[test]
    fn finds_all_matches_when_max_results_is_generous() {
        let oracle = make_oracle_with_village_every_region();
        let request = SearchRequest {
            version: MCVersion::MC_1_16_5,
            seed_start: 0,
            seed_end: 199,
            max_results: 10,
            structures: vec![StructureQuery {
                tag: StructureTag::Village,
                max_distance: 500,
                biome: None,
            }],
        };

        let result = search(&oracle, &request);
        assert_eq!(result.seeds.len(), 10);
        assert_eq!(result.scanned, 200);
        for seed in &result.seeds {
            assert_eq!(seed % 10, 0);
        }
    }

    #[test]
    fn empty_range_returns_empty_result() {
        let oracle = FakeOracle::default();
        let request = SearchRequest {
            version: MCVersion::MC_1_16_5,
            seed_start: 10,
            seed_end: 5,
            max_results: 1,
            structures: vec![StructureQuery {
                tag: StructureTag::Village,
                max_distance: 500,
                biome: None,
            }],
        };

        let result = search(&oracle, &request);
        assert!(result.seeds.is_empty());
        assert_eq!(result.scanned, 0);
    }

    #[test]
    fn never_exceeds_max_results() {
        let oracle = make_oracle_with_village_every_region();
        let request = SearchRequest {
            version: MCVersion::MC_1_16_5,
            seed_start: 0,
            seed_end: 199,
            max_results: 3,
            structures: vec![StructureQuery {
                tag: StructureTag::Village,
                max_distance: 500,
                biome: None,
            }],
        };

        let result = search(&oracle, &request);
        assert!(result.seeds.len() <= 3);
        assert!(result.scanned <= 200);
    }
}
