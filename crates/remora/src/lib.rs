#![forbid(unsafe_code)]

//! `remora` is a headless adaptive placement service for anchored floating panels.
//!
//! The geometry lives in [`remora_core`] and is re-exported here. On top of it this crate
//! adds the message-based service surface: typed request/response pairs carrying opaque
//! correlation ids, a stateless [`Placer`] that answers them in-process, and a fixed
//! round-robin [`pool::PlacerPool`] for callers that want the engine off their thread.
//!
//! Correlation is the caller's contract: a response is matched to its request purely by id
//! equality, and a caller that re-requests for the same logical subject must discard any
//! response whose id is not its most recently issued one. Stale in-flight results are
//! silently ignored, never aborted.

pub use remora_core::*;

pub mod message;
pub mod pool;

use message::{Request, Response};

/// Stateless placement service.
///
/// Every request/response pair is self-contained and side-effect-free, so a `Placer` can
/// be shared freely across threads or instantiated per call site; there is no process-wide
/// instance to manage.
#[derive(Debug, Clone, Copy, Default)]
pub struct Placer;

impl Placer {
    pub fn new() -> Self {
        Self
    }

    /// Answers one request. The only failure mode is a malformed radius string in a
    /// corner-offsets request, which is a broken caller contract.
    pub fn handle(&self, request: Request) -> Result<Response> {
        match request {
            Request::AvailableCoords { id, data } => Ok(Response::AvailableCoords {
                data: resolve(&data),
                id,
            }),
            Request::SpacersBounds { id, data } => Ok(Response::SpacersBounds {
                data: spacers_bounds(&data.panel, data.options),
                id,
            }),
            Request::CornerOffsets { id, data } => Ok(Response::CornerOffsets {
                data: corner_offsets(&data.radii, &data.bounds)?,
                id,
            }),
        }
    }
}
