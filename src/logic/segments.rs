//! Segment reconstruction: starting lineup + substitutions into on-court intervals.

use crate::models::{MatchRecord, Segment, UnitKey, MATCH_LENGTH_SECONDS, UNIT_SIZE};

/// Rebuild the ordered list of segments for one match.
///
/// 1. Lineups with fewer than 5 entries produce no segments.
/// 2. Element 0 is the goalkeeper, elements 1..=4 the initial unit.
/// 3. Substitutions are applied in absolute-time order; a substitution is skipped when it is
///    not after the last boundary, falls at or after the final whistle, removes the goalkeeper,
///    or removes a player who is not on court.
/// 4. Every accepted substitution closes the current segment; the last one runs to 2400 s.
///
/// The result covers `[0, 2400)` exactly once.
pub fn reconstruct_segments(record: &MatchRecord) -> Vec<Segment> {
    if record.starting_lineup.len() < UNIT_SIZE + 1 {
        log::warn!(
            "Match {} skipped: starting lineup has {} entries, need at least {}",
            record.id,
            record.starting_lineup.len(),
            UNIT_SIZE + 1
        );
        return Vec::new();
    }

    let goalkeeper = record.starting_lineup[0].trim();
    let mut on_court: [String; UNIT_SIZE] =
        std::array::from_fn(|i| record.starting_lineup[i + 1].trim().to_string());

    let mut substitutions: Vec<_> = record.substitution_events.iter().collect();
    substitutions.sort_by_key(|s| s.absolute_seconds());

    let mut segments = Vec::with_capacity(substitutions.len() + 1);
    let mut boundary = 0;

    for sub in substitutions {
        let t = sub.absolute_seconds();
        let player_out = sub.player_out_id.trim();
        if t <= boundary || t >= MATCH_LENGTH_SECONDS {
            log::debug!(
                "Match {}: substitution at {}s out of order or past full time, skipped",
                record.id,
                t
            );
            continue;
        }
        if player_out == goalkeeper {
            log::debug!("Match {}: goalkeeper change at {}s ignored", record.id, t);
            continue;
        }
        let Some(slot) = on_court.iter().position(|p| p == player_out) else {
            log::debug!(
                "Match {}: substitution at {}s removes {} who is not on court, skipped",
                record.id,
                t,
                player_out
            );
            continue;
        };

        segments.push(Segment {
            start_seconds: boundary,
            end_seconds: t,
            unit: UnitKey::new(&on_court),
        });
        on_court[slot] = sub.player_in_id.trim().to_string();
        boundary = t;
    }

    segments.push(Segment {
        start_seconds: boundary,
        end_seconds: MATCH_LENGTH_SECONDS,
        unit: UnitKey::new(&on_court),
    });
    segments
}

/// Segment active at an absolute time.
///
/// Times at or past the final whistle belong to the last segment.
pub fn segment_at(segments: &[Segment], absolute_seconds: u32) -> Option<&Segment> {
    let last = segments.last()?;
    if absolute_seconds >= last.end_seconds {
        return Some(last);
    }
    let idx = segments.partition_point(|s| s.end_seconds <= absolute_seconds);
    segments.get(idx).filter(|s| s.contains(absolute_seconds))
}
