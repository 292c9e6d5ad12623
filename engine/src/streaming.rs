use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::thread;

use crate::oracle::Oracle;
use crate::request::{partition, SearchRequest};
use crate::worker;

struct Shared<F> {
    found: u32,
    scanned: i64,
    on_seed: F,
}

/// Runs a streaming search, invoking `on_seed` for each match while
/// holding the engine's internal lock — callers get a serialised stream
/// of matches for free and must keep `on_seed` non-blocking. Stops early,
/// same as the batched search, once `request.max_results` matches have
/// been delivered, or as soon as `cancelled` is observed set. Returns the
/// total number of seeds scanned across all workers.
pub fn search_stream<O, F>(oracle: &O, request: &SearchRequest, cancelled: &AtomicBool, on_seed: F) -> i64
where
    O: Oracle,
    F: FnMut(i64) + Send,
{
    let partitions = partition(request);
    if partitions.is_empty() {
        return 0;
    }

    let shared = Mutex::new(Shared {
        found: 0,
        scanned: 0,
        on_seed,
    });

    thread::scope(|scope| {
        for part in &partitions {
            scope.spawn(|| {
                let mut gen = oracle.new_generator(request.version);
                let local_scanned = worker::run_partition(
                    oracle,
                    request,
                    *part,
                    &mut gen,
                    || cancelled.load(Ordering::Relaxed) || shared.lock().unwrap().found >= request.max_results,
                    |seed| {
                        let mut s = shared.lock().unwrap();
                        if s.found < request.max_results {
                            (s.on_seed)(seed);
                            s.found += 1;
                        }
                        s.found >= request.max_results
                    },
                );
                shared.lock().unwrap().scanned += local_scanned;
            });
        }
    });

    shared.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner()).scanned
}
