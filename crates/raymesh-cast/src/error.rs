//! Error types for ray casting.

use thiserror::Error;

/// Errors that can occur during ray queries.
///
/// Ordinary geometric degeneracies (zero-area faces, rays parallel to a
/// triangle, rays that miss everything) are expressed as "no hit" return
/// values, not errors.
#[derive(Error, Debug)]
pub enum CastError {
    /// A crossing scan accumulated an implausible number of hits.
    ///
    /// Real closed meshes produce a handful of crossings per ray; exceeding
    /// the cap means the mesh is degenerate along the ray (e.g. many
    /// coincident faces) and the scan was aborted rather than looping.
    #[error("ray crossing scan exceeded {count} hits; mesh is degenerate along the ray")]
    ExcessiveHits {
        /// Number of hits accumulated before aborting.
        count: usize,
    },
}
