//! Parallel Minecraft seed-scan engine: given a bounded seed range and a
//! combination of structure (and optional biome) requirements, finds
//! seeds whose generated worlds satisfy every requirement.
//!
//! The engine is generic over [`oracle::Oracle`], the capability trait
//! that answers "where is structure S in region (rx, rz)?" and "what
//! biome is at this position?". Production code uses [`oracle::CubiomesOracle`];
//! tests use the scripted fake in [`oracle::fake`].

pub mod coordinator;
pub mod error;
pub mod oracle;
pub mod predicate;
pub mod registry;
pub mod request;
pub mod streaming;
pub mod validator;
mod utils;

pub use cubiomes::enums::MCVersion;
pub use error::EngineError;
pub use oracle::{CubiomesOracle, Oracle};
pub use request::{SearchRequest, SearchResult, StructureQuery, MAX_RESULTS, MAX_STRUCT_QUERIES, MAX_WORKERS};
pub use validator::{validate, RawSearchRequest, RawStructureQuery};

/// Runs a batched search against the production oracle.
pub fn search(request: &SearchRequest) -> SearchResult {
    coordinator::search(&CubiomesOracle, request)
}

/// Runs a streaming search against the production oracle. `on_seed` is
/// invoked under the engine's internal lock for each match, up to
/// `request.max_results` times; returns the total number of seeds
/// scanned. `cancelled` lets a caller (e.g. a disconnected WebSocket)
/// stop the search early.
pub fn search_stream(
    request: &SearchRequest,
    cancelled: &std::sync::atomic::AtomicBool,
    on_seed: impl FnMut(i64) + Send,
) -> i64 {
    streaming::search_stream(&CubiomesOracle, request, cancelled, on_seed)
}
