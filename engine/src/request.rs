use cubiomes::enums::MCVersion;

use crate::registry::StructureTag;

pub const MAX_WORKERS: usize = 16;
pub const MAX_STRUCT_QUERIES: usize = 16;
pub const MAX_RESULTS: u32 = 10;
pub const CHECK_INTERVAL: u64 = 0x1000;
pub const MAX_SEED_RANGE: i64 = 1_000_000_000;

/// One structure requirement within a search. `biome`, when present, must
/// match the biome sampled at the structure's candidate position.
#[derive(Debug, Clone, Copy)]
pub struct StructureQuery {
    pub tag: StructureTag,
    pub max_distance: i32,
    pub biome: Option<i32>,
}

/// A validated search request. Once constructed, every field upholds the
/// invariants `Validator` checks; nothing downstream re-validates them.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub version: MCVersion,
    pub seed_start: i64,
    pub seed_end: i64,
    pub max_results: u32,
    pub structures: Vec<StructureQuery>,
}

impl SearchRequest {
    pub fn total_seeds(&self) -> i64 {
        self.seed_end - self.seed_start + 1
    }
}

/// Aggregate result of a batched search.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub seeds: Vec<i64>,
    pub scanned: i64,
}

/// One worker's contiguous slice of the seed range.
#[derive(Debug, Clone, Copy)]
pub struct WorkerPartition {
    pub seed_start: i64,
    pub seed_end: i64,
}

/// Splits `[request.seed_start, request.seed_end]` into up to
/// `MAX_WORKERS` contiguous, non-overlapping partitions that together
/// cover the whole range. The last partition absorbs any remainder.
pub fn partition(request: &SearchRequest) -> Vec<WorkerPartition> {
    let total = request.total_seeds();
    if total <= 0 {
        return Vec::new();
    }

    let n = (MAX_WORKERS as i64).min(total) as usize;
    let chunk = total / n as i64;

    (0..n)
        .map(|i| {
            let start = request.seed_start + i as i64 * chunk;
            let end = if i == n - 1 {
                request.seed_end
            } else {
                start + chunk - 1
            };
            WorkerPartition {
                seed_start: start,
                seed_end: end,
            }
        })
        .collect()
}
