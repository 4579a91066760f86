//! Analysis logic: segment reconstruction, event attribution, ranking.

mod aggregate;
mod filter;
mod rankings;
mod segments;

pub use aggregate::{MethodTally, UnitAccumulator, UnitLedger, UNKNOWN_METHOD};
pub use filter::filter_matches;
pub use rankings::{
    compute_unit_rankings, compute_unit_rankings_with, normalize, rank_ledger, rank_units,
    RawIndices,
};
pub use segments::{reconstruct_segments, segment_at};
