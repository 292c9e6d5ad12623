use serde::{Deserialize, Serialize};

use seedscan_engine::validator::{RawSearchRequest, RawStructureQuery};

/// Wire shape of one structure requirement.
#[derive(Debug, Clone, Deserialize)]
pub struct StructureQueryDto {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub max_distance: Option<i32>,
    pub biome: Option<String>,
}

/// Wire shape of a search request, as accepted by `POST /search` and the
/// single framing message of the WebSocket streaming protocol.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SearchRequestDto {
    pub version: Option<String>,
    pub seed_start: Option<i64>,
    pub seed_end: Option<i64>,
    pub max_results: Option<u32>,
    pub structures: Option<Vec<StructureQueryDto>>,
}

impl From<SearchRequestDto> for RawSearchRequest {
    fn from(dto: SearchRequestDto) -> Self {
        RawSearchRequest {
            version: dto.version,
            seed_start: dto.seed_start,
            seed_end: dto.seed_end,
            max_results: dto.max_results,
            structures: dto.structures.map(|qs| {
                qs.into_iter()
                    .map(|q| RawStructureQuery {
                        r#type: q.kind,
                        max_distance: q.max_distance,
                        biome: q.biome,
                    })
                    .collect()
            }),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponseDto {
    pub seeds: Vec<i64>,
    pub scanned: i64,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponseDto {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct StructuresResponseDto {
    pub structures: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct BiomesResponseDto {
    pub biomes: Vec<&'static str>,
}

/// One WebSocket streaming frame sent from server to client.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StreamFrame {
    Seed { seed: i64 },
    Done { done: bool, scanned: i64 },
    Error { error: String },
}
