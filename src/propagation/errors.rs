// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reasons a candidate face is rejected.

use strum_macros::EnumCount as EnumCountMacro;
use thiserror::Error;

/// Why a candidate face was rejected.
///
/// Conflicts are part of normal search: the generator simply moves on to
/// the next candidate. Each one is counted in
/// [`Statistics`](crate::state::Statistics).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro)]
#[repr(u8)]
pub enum Conflict {
    /// The single father's face does not properly contain the candidate.
    #[error("father face does not properly contain the candidate")]
    FatherContainment,

    /// The candidate does not fit the intersection of its fathers' faces.
    #[error("candidate does not match the intersection of its fathers' faces")]
    FatherIntersection,

    /// Another constraint already holds the same face.
    #[error("face already assigned to another constraint")]
    DuplicateFace,

    /// Face inclusion and relation inclusion disagree.
    #[error("face inclusion does not mirror relation inclusion")]
    InclusionMismatch,

    /// The faces meet but the relations are disjoint.
    #[error("faces intersect but relations are disjoint")]
    DisjointRelations,

    /// The faces' common sub-cube cannot hold the symbols the relations share.
    #[error("face intersection too small for the shared symbols")]
    IntersectionTooSmall,

    /// A face derived for a shared son is empty or below its minimum dimension.
    #[error("derived face for a shared son is too small")]
    DerivedFaceTooSmall,

    /// A face derived for a shared son fails the consistency checks.
    #[error("derived face for a shared son is inconsistent")]
    DerivedFaceInconsistent,
}
