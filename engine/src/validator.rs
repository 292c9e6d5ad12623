use crate::error::EngineError;
use crate::oracle::Oracle;
use crate::registry::{biomes, structures, versions};
use crate::request::{SearchRequest, StructureQuery, MAX_RESULTS, MAX_SEED_RANGE, MAX_STRUCT_QUERIES};

/// Wire-shaped structure query, before name lookups have been resolved.
#[derive(Debug, Clone)]
pub struct RawStructureQuery {
    pub r#type: Option<String>,
    pub max_distance: Option<i32>,
    pub biome: Option<String>,
}

/// Wire-shaped search request, before any validation has run. Deliberately
/// plain (no serde dependency here) so this crate stays decoupled from
/// whatever wire format the service layer chooses.
#[derive(Debug, Clone, Default)]
pub struct RawSearchRequest {
    pub version: Option<String>,
    pub seed_start: Option<i64>,
    pub seed_end: Option<i64>,
    pub max_results: Option<u32>,
    pub structures: Option<Vec<RawStructureQuery>>,
}

/// Validates and normalises a raw request into an engine-internal
/// `SearchRequest`, or returns the first validation error encountered.
/// Error strings and check order are a stable part of the contract.
pub fn validate<O: Oracle>(oracle: &O, raw: &RawSearchRequest) -> Result<SearchRequest, EngineError> {
    let version_str = raw
        .version
        .as_deref()
        .ok_or(EngineError::validation("missing version"))?;
    let version = versions::parse(version_str).ok_or(EngineError::validation("unknown version string"))?;

    let seed_start = raw.seed_start.ok_or(EngineError::validation("missing seed_start"))?;
    let seed_end = raw.seed_end.ok_or(EngineError::validation("missing seed_end"))?;

    if seed_end < seed_start {
        return Err(EngineError::validation("seed_end must be >= seed_start"));
    }
    if seed_end - seed_start > MAX_SEED_RANGE {
        return Err(EngineError::validation("seed range must not exceed 1 billion"));
    }

    let max_results = match raw.max_results {
        Some(n) if n > 0 => n.min(MAX_RESULTS),
        _ => return Err(EngineError::validation("missing or invalid max_results")),
    };

    let raw_structures = raw.structures.as_ref().ok_or(EngineError::validation("missing structures"))?;
    if raw_structures.is_empty() {
        return Err(EngineError::validation("structures array is empty"));
    }

    let mut queries = Vec::with_capacity(raw_structures.len().min(MAX_STRUCT_QUERIES));
    for raw_sq in raw_structures.iter().take(MAX_STRUCT_QUERIES) {
        let type_str = raw_sq
            .r#type
            .as_deref()
            .ok_or(EngineError::validation("unknown structure type"))?;
        let tag = structures::parse(type_str).ok_or(EngineError::validation("unknown structure type"))?;

        let max_distance = raw_sq.max_distance.unwrap_or(0);
        if max_distance <= 0 {
            return Err(EngineError::validation("max_distance must be positive"));
        }

        if oracle.structure_config(tag, version).is_none() {
            return Err(EngineError::validation("structure type not available in requested version"));
        }

        let biome = match raw_sq.biome.as_deref() {
            Some(name) => Some(biomes::parse(name).ok_or(EngineError::validation("unknown biome name"))?),
            None => None,
        };

        queries.push(StructureQuery {
            tag,
            max_distance,
            biome,
        });
    }

    Ok(SearchRequest {
        version,
        seed_start,
        seed_end,
        max_results,
        structures: queries,
    })
}
