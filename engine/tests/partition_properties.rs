use proptest::prelude::*;
use seedscan_engine::registry::StructureTag;
use seedscan_engine::request::{partition, SearchRequest, StructureQuery, MAX_WORKERS};
use seedscan_engine::MCVersion;

fn request_with_range(seed_start: i64, seed_end: i64) -> SearchRequest {
    SearchRequest {
        version: MCVersion::MC_1_16_5,
        seed_start,
        seed_end,
        max_results: 10,
        structures: vec![StructureQuery {
            tag: StructureTag::Village,
            max_distance: 1000,
            biome: None,
        }],
    }
}

proptest! {
    /// Partitions tile the requested range disjointly and exhaustively,
    /// and never exceed MAX_WORKERS partitions.
    #[test]
    fn partitions_cover_the_range_without_gaps_or_overlap(
        start in -1_000_000_000i64..1_000_000_000i64,
        span in 0i64..2_000_000i64,
    ) {
        let end = start + span;
        let request = request_with_range(start, end);
        let parts = partition(&request);

        prop_assert!(parts.len() <= MAX_WORKERS);

        if parts.is_empty() {
            return Ok(());
        }

        prop_assert_eq!(parts[0].seed_start, start);
        prop_assert_eq!(parts.last().unwrap().seed_end, end);

        for window in parts.windows(2) {
            prop_assert_eq!(window[0].seed_end + 1, window[1].seed_start);
        }

        let total_covered: i64 = parts.iter().map(|p| p.seed_end - p.seed_start + 1).sum();
        prop_assert_eq!(total_covered, span + 1);
    }

    #[test]
    fn empty_or_inverted_range_has_no_partitions(start in -1000i64..1000i64, back in 1i64..1000i64) {
        let request = request_with_range(start, start - back);
        prop_assert!(partition(&request).is_empty());
    }
}
