//! Capability surface over the world-generation backend.
//!
//! Everything the predicate evaluator needs from a world generator goes
//! through this trait, so it can run against a real backend in production
//! and a scripted fake in tests without the two ever diverging in shape.

use crate::registry::StructureTag;
use cubiomes::enums::{Dimension as CDimension, MCVersion};

/// One of the three dimensions a structure or biome sample can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Overworld,
    Nether,
    End,
}

impl From<Dimension> for CDimension {
    fn from(d: Dimension) -> CDimension {
        match d {
            Dimension::Overworld => CDimension::DIM_OVERWORLD,
            Dimension::Nether => CDimension::DIM_NETHER,
            Dimension::End => CDimension::DIM_END,
        }
    }
}

/// A block-coordinate position (y is irrelevant for structure placement).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPos {
    pub x: i32,
    pub z: i32,
}

/// Region size and native dimension for a structure kind under a given
/// version. `None` from `Oracle::structure_config` means the structure
/// does not generate at all in that version.
#[derive(Debug, Clone, Copy)]
pub struct StructureConfig {
    pub region_size_chunks: i32,
    pub dimension: Dimension,
}

/// The world-generation capability the predicate evaluator depends on.
/// `Generator` is per-implementation opaque state; the engine never
/// shares one across worker threads.
pub trait Oracle: Send + Sync {
    type Generator;

    /// Allocates a generator configured for `version`, pointed at
    /// `(Overworld, seed = 0)`. Workers call this once and reconfigure it
    /// per seed with `configure`.
    fn new_generator(&self, version: MCVersion) -> Self::Generator;

    /// Repositions an existing generator onto `(dimension, seed)`.
    fn configure(&self, gen: &mut Self::Generator, dimension: Dimension, seed: i64);

    /// Region size and dimension for `tag` under `version`, or `None` if
    /// the structure isn't available in that version.
    fn structure_config(&self, tag: StructureTag, version: MCVersion) -> Option<StructureConfig>;

    /// The one candidate position for `tag` in region `(rx, rz)`, or
    /// `None` if that region has no candidate.
    fn structure_position(
        &self,
        tag: StructureTag,
        version: MCVersion,
        seed: i64,
        rx: i32,
        rz: i32,
    ) -> Option<BlockPos>;

    /// Whether the candidate at `pos` actually generates (local terrain
    /// checks beyond the region placement).
    fn viable_structure_position(&self, gen: &Self::Generator, tag: StructureTag, pos: BlockPos) -> bool;

    /// Samples the biome at scale-4 resolution (quarter-block); `x`/`z`
    /// here are already in scale-4 coordinates (block coordinate >> 2).
    fn biome_at(&self, gen: &Self::Generator, x: i32, y: i32, z: i32) -> i32;
}

/// Production oracle backed by the `cubiomes` world-generation library.
#[derive(Debug, Default, Clone, Copy)]
pub struct CubiomesOracle;

impl Oracle for CubiomesOracle {
    type Generator = cubiomes::generator::Generator;

    fn new_generator(&self, version: MCVersion) -> Self::Generator {
        cubiomes::generator::Generator::new(
            version,
            0,
            CDimension::DIM_OVERWORLD,
            cubiomes::generator::GeneratorFlags::empty(),
        )
    }

    fn configure(&self, gen: &mut Self::Generator, dimension: Dimension, seed: i64) {
        gen.apply_seed(dimension.into(), seed);
    }

    fn structure_config(&self, tag: StructureTag, version: MCVersion) -> Option<StructureConfig> {
        let cfg = cubiomes::finders::get_structure_config(tag.into(), version)?;
        Some(StructureConfig {
            region_size_chunks: cfg.region_size,
            dimension: match cfg.dimension {
                CDimension::DIM_NETHER => Dimension::Nether,
                CDimension::DIM_END => Dimension::End,
                _ => Dimension::Overworld,
            },
        })
    }

    fn structure_position(
        &self,
        tag: StructureTag,
        version: MCVersion,
        seed: i64,
        rx: i32,
        rz: i32,
    ) -> Option<BlockPos> {
        let pos = cubiomes::finders::get_structure_position(tag.into(), version, seed, rx, rz)?;
        Some(BlockPos { x: pos.x, z: pos.z })
    }

    fn viable_structure_position(&self, gen: &Self::Generator, tag: StructureTag, pos: BlockPos) -> bool {
        gen.verify_structure_generation_attempt(
            cubiomes::generator::BlockPosition::new(pos.x, pos.z),
            tag.into(),
        )
        .unwrap_or(false)
    }

    fn biome_at(&self, gen: &Self::Generator, x: i32, y: i32, z: i32) -> i32 {
        gen.get_biome_at(x, y, z).map(|b| b as i32).unwrap_or(-1)
    }
}

/// A scripted [`Oracle`] for tests and benchmarks.
pub mod fake {
    use super::*;
    use std::collections::HashMap;

    /// A scripted oracle for tests: structure placement and biome data are
    /// provided up front instead of computed by real world generation.
    #[derive(Debug, Default, Clone)]
    pub struct FakeOracle {
        pub configs: HashMap<StructureTag, StructureConfig>,
        /// (tag, seed, rx, rz) -> position
        pub positions: HashMap<(StructureTag, i64, i32, i32), BlockPos>,
        /// positions considered non-viable despite being placed
        pub unviable: std::collections::HashSet<(i32, i32)>,
        /// (seed, x, z) -> biome id
        pub biomes: HashMap<(i64, i32, i32), i32>,
    }

    #[derive(Debug, Clone, Copy)]
    pub struct FakeGenerator {
        pub seed: i64,
        pub dimension: Dimension,
    }

    impl Oracle for FakeOracle {
        type Generator = FakeGenerator;

        fn new_generator(&self, _version: MCVersion) -> Self::Generator {
            FakeGenerator {
                seed: 0,
                dimension: Dimension::Overworld,
            }
        }

        fn configure(&self, gen: &mut Self::Generator, dimension: Dimension, seed: i64) {
            gen.dimension = dimension;
            gen.seed = seed;
        }

        fn structure_config(&self, tag: StructureTag, _version: MCVersion) -> Option<StructureConfig> {
            self.configs.get(&tag).copied()
        }

        fn structure_position(
            &self,
            tag: StructureTag,
            _version: MCVersion,
            seed: i64,
            rx: i32,
            rz: i32,
        ) -> Option<BlockPos> {
            self.positions.get(&(tag, seed, rx, rz)).copied()
        }

        fn viable_structure_position(&self, _gen: &Self::Generator, _tag: StructureTag, pos: BlockPos) -> bool {
            !self.unviable.contains(&(pos.x, pos.z))
        }

        fn biome_at(&self, gen: &Self::Generator, x: i32, _y: i32, z: i32) -> i32 {
            *self.biomes.get(&(gen.seed, x, z)).unwrap_or(&-1)
        }
    }
}
