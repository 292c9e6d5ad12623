use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::Instrument;

use seedscan_engine::{validator, CubiomesOracle, EngineError, SearchRequest};

use crate::dto::{BiomesResponseDto, SearchRequestDto, SearchResponseDto, StructuresResponseDto};
use crate::error::ApiError;
use crate::state::AppState;
use crate::ws;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/search", post(search))
        .route("/structures", get(list_structures))
        .route("/biomes", get(list_biomes))
        .route("/ws/search", get(ws::handle_upgrade))
        .with_state(state)
}

async fn search(
    State(state): State<AppState>,
    Json(dto): Json<SearchRequestDto>,
) -> Result<Json<SearchResponseDto>, ApiError> {
    let request: SearchRequest = validator::validate(&CubiomesOracle, &dto.into())?;

    let _permit = state.search_admission.try_acquire().map_err(|_| ApiError::AtCapacity)?;

    let span = tracing::info_span!(
        "search",
        version = ?request.version,
        seed_count = request.total_seeds(),
        max_results = request.max_results,
    );

    let result = tokio::task::spawn_blocking(move || seedscan_engine::search(&request))
        .instrument(span.clone())
        .await
        .map_err(|e| ApiError::Engine(EngineError::Internal(e.to_string())))?;

    let _entered = span.enter();
    tracing::info!(matched = result.seeds.len(), scanned = result.scanned, "search complete");

    Ok(Json(SearchResponseDto {
        seeds: result.seeds,
        scanned: result.scanned,
    }))
}

async fn list_structures() -> Json<StructuresResponseDto> {
    Json(StructuresResponseDto {
        structures: seedscan_engine::registry::structures::names().collect(),
    })
}

async fn list_biomes() -> Json<BiomesResponseDto> {
    Json(BiomesResponseDto {
        biomes: seedscan_engine::registry::biomes::names().collect(),
    })
}
