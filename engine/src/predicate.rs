use crate::oracle::{BlockPos, Dimension, Oracle};
use crate::request::{SearchRequest, StructureQuery};

/// Decides whether `seed` satisfies every structure query in `request`.
/// Configures `gen` as it goes; leaves it pointed at `(Overworld, seed)`
/// on return.
pub fn matches<O: Oracle>(oracle: &O, request: &SearchRequest, seed: i64, gen: &mut O::Generator) -> bool {
    oracle.configure(gen, Dimension::Overworld, seed);

    request
        .structures
        .iter()
        .all(|sq| query_satisfied(oracle, request, sq, seed, gen))
}

fn query_satisfied<O: Oracle>(
    oracle: &O,
    request: &SearchRequest,
    sq: &StructureQuery,
    seed: i64,
    gen: &mut O::Generator,
) -> bool {
    let Some(config) = oracle.structure_config(sq.tag, request.version) else {
        return false;
    };

    let region_blocks = config.region_size_chunks * 16;
    let max_region = sq.max_distance / region_blocks + 2;
    let max_distance_sq = (sq.max_distance as i64) * (sq.max_distance as i64);

    for rz in -max_region..=max_region {
        for rx in -max_region..=max_region {
            let Some(pos) = oracle.structure_position(sq.tag, request.version, seed, rx, rz) else {
                continue;
            };

            if distance_sq(pos) > max_distance_sq {
                continue;
            }

            if !oracle.viable_structure_position(gen, sq.tag, pos) {
                continue;
            }

            if let Some(want_biome) = sq.biome {
                if !biome_matches(oracle, config.dimension, seed, pos, want_biome, gen) {
                    continue;
                }
            }

            return true;
        }
    }

    false
}

fn distance_sq(pos: BlockPos) -> i64 {
    let x = pos.x as i64;
    let z = pos.z as i64;
    x * x + z * z
}

/// Reconfigures `gen` into the structure's native dimension to sample the
/// biome at its position, then restores it to `(Overworld, seed)` so the
/// caller's invariant ("gen tracks the overworld outside this check")
/// holds again on return.
fn biome_matches<O: Oracle>(
    oracle: &O,
    dimension: Dimension,
    seed: i64,
    pos: BlockPos,
    want_biome: i32,
    gen: &mut O::Generator,
) -> bool {
    oracle.configure(gen, dimension, seed);
    let sampled = oracle.biome_at(gen, pos.x >> 2, 15, pos.z >> 2);
    oracle.configure(gen, Dimension::Overworld, seed);
    sampled == want_biome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::fake::FakeOracle;
    use crate::oracle::StructureConfig;
    use crate::registry::StructureTag;
    use cubiomes::enums::MCVersion;

    fn base_request(structures: Vec<StructureQuery>) -> SearchRequest {
        SearchRequest {
            version: MCVersion::MC_1_16_5,
            seed_start: 0,
            seed_end: 0,
            max_results: 1,
            structures,
        }
    }

    #[test]
    fn matches_when_structure_placed_and_viable_in_range() {
        let mut oracle = FakeOracle::default();
        oracle.configs.insert(
            StructureTag::Village,
            StructureConfig {
                region_size_chunks: 32,
                dimension: Dimension::Overworld,
            },
        );
        oracle
            .positions
            .insert((StructureTag::Village, 42, 0, 0), BlockPos { x: 100, z: 100 });

        let req = base_request(vec![StructureQuery {
            tag: StructureTag::Village,
            max_distance: 500,
            biome: None,
        }]);

        let mut gen = oracle.new_generator(req.version);
        assert!(matches(&oracle, &req, 42, &mut gen));
    }

    #[test]
    fn fails_when_candidate_outside_max_distance() {
        let mut oracle = FakeOracle::default();
        oracle.configs.insert(
            StructureTag::Village,
            StructureConfig {
                region_size_chunks: 32,
                dimension: Dimension::Overworld,
            },
        );
        oracle
            .positions
            .insert((StructureTag::Village, 42, 0, 0), BlockPos { x: 5000, z: 5000 });

        let req = base_request(vec![StructureQuery {
            tag: StructureTag::Village,
            max_distance: 500,
            biome: None,
        }]);

        let mut gen = oracle.new_generator(req.version);
        assert!(!matches(&oracle, &req, 42, &mut gen));
    }

    #[test]
    fn fails_when_position_not_viable() {
        let mut oracle = FakeOracle::default();
        oracle.configs.insert(
            StructureTag::Village,
            StructureConfig {
                region_size_chunks: 32,
                dimension: Dimension::Overworld,
            },
        );
        oracle
            .positions
            .insert((StructureTag::Village, 42, 0, 0), BlockPos { x: 100, z: 100 });
        oracle.unviable.insert((100, 100));

        let req = base_request(vec![StructureQuery {
            tag: StructureTag::Village,
            max_distance: 500,
            biome: None,
        }]);

        let mut gen = oracle.new_generator(req.version);
        assert!(!matches(&oracle, &req, 42, &mut gen));
    }

    #[test]
    fn honors_biome_filter() {
        let mut oracle = FakeOracle::default();
        oracle.configs.insert(
            StructureTag::Village,
            StructureConfig {
                region_size_chunks: 32,
                dimension: Dimension::Overworld,
            },
        );
        oracle
            .positions
            .insert((StructureTag::Village, 42, 0, 0), BlockPos { x: 100, z: 100 });
        oracle.biomes.insert((42, 25, 25), 1); // plains

        let wants_plains = base_request(vec![StructureQuery {
            tag: StructureTag::Village,
            max_distance: 500,
            biome: Some(1),
        }]);
        let wants_desert = base_request(vec![StructureQuery {
            tag: StructureTag::Village,
            max_distance: 500,
            biome: Some(2),
        }]);

        let mut gen = oracle.new_generator(wants_plains.version);
        assert!(matches(&oracle, &wants_plains, 42, &mut gen));
        assert!(!matches(&oracle, &wants_desert, 42, &mut gen));
    }

    #[test]
    fn seed_fails_whole_query_when_structure_unavailable_in_version() {
        let oracle = FakeOracle::default(); // no config registered => structure unavailable
        let req = base_request(vec![StructureQuery {
            tag: StructureTag::Bastion,
            max_distance: 500,
            biome: None,
        }]);

        let mut gen = oracle.new_generator(req.version);
        assert!(!matches(&oracle, &req, 42, &mut gen));
    }

    #[test]
    fn requires_every_query_to_be_satisfied() {
        let mut oracle = FakeOracle::default();
        oracle.configs.insert(
            StructureTag::Village,
            StructureConfig {
                region_size_chunks: 32,
                dimension: Dimension::Overworld,
            },
        );
        oracle
            .positions
            .insert((StructureTag::Village, 42, 0, 0), BlockPos { x: 100, z: 100 });
        // Fortress never registered => never placed => query 2 always fails.

        let req = base_request(vec![
            StructureQuery {
                tag: StructureTag::Village,
                max_distance: 500,
                biome: None,
            },
            StructureQuery {
                tag: StructureTag::Fortress,
                max_distance: 500,
                biome: None,
            },
        ]);

        let mut gen = oracle.new_generator(req.version);
        assert!(!matches(&oracle, &req, 42, &mut gen));
    }
}
