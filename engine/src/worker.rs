use crate::oracle::Oracle;
use crate::predicate;
use crate::request::{SearchRequest, WorkerPartition, CHECK_INTERVAL};
use crate::utils::unlikely;

/// Scans one partition's seed range with a thread-confined generator.
///
/// Every `CHECK_INTERVAL` seeds, `is_done` is polled; if it reports the
/// search has enough results, the loop exits early. On every predicate
/// match, `on_match` is invoked with the seed and may itself signal
/// completion (it returns `true` once the caller is satisfied). Returns
/// the number of seeds this worker actually scanned.
pub fn run_partition<O, D, M>(
    oracle: &O,
    request: &SearchRequest,
    partition: WorkerPartition,
    gen: &mut O::Generator,
    is_done: D,
    mut on_match: M,
) -> i64
where
    O: Oracle,
    D: Fn() -> bool,
    M: FnMut(i64) -> bool,
{
    let mut local_scanned: u64 = 0;
    let mut seed = partition.seed_start;

    while seed <= partition.seed_end {
        if unlikely(local_scanned & (CHECK_INTERVAL - 1) == 0) && is_done() {
            break;
        }

        local_scanned += 1;

        if predicate::matches(oracle, request, seed, gen) && on_match(seed) {
            break;
        }

        seed += 1;
    }

    local_scanned as i64
}
