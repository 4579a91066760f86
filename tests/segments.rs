//! Integration tests for segment reconstruction.

use lineup_index::{
    reconstruct_segments, segment_at, MatchRecord, Period, Substitution, UnitKey,
    MATCH_LENGTH_SECONDS,
};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn lineup() -> MatchRecord {
    MatchRecord::new(["GK", "A", "B", "C", "D"])
}

fn sub(period: Period, seconds: u32, out: &str, inn: &str) -> Substitution {
    Substitution {
        period,
        time_offset_seconds: seconds,
        player_out_id: out.to_string(),
        player_in_id: inn.to_string(),
    }
}

fn unit(ids: [&str; 4]) -> UnitKey {
    UnitKey::new(&ids)
}

fn assert_full_coverage(record: &MatchRecord) {
    let segments = reconstruct_segments(record);
    assert!(!segments.is_empty());
    assert_eq!(segments[0].start_seconds, 0);
    assert_eq!(segments.last().unwrap().end_seconds, MATCH_LENGTH_SECONDS);
    for pair in segments.windows(2) {
        assert_eq!(pair[0].end_seconds, pair[1].start_seconds);
    }
    for s in &segments {
        assert!(s.start_seconds < s.end_seconds);
    }
}

#[test]
fn no_substitutions_gives_one_segment() {
    let segments = reconstruct_segments(&lineup());
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].start_seconds, 0);
    assert_eq!(segments[0].end_seconds, 2400);
    assert_eq!(segments[0].unit, unit(["A", "B", "C", "D"]));
}

#[test]
fn short_lineup_gives_no_segments() {
    let record = MatchRecord::new(["GK", "A", "B", "C"]);
    assert!(reconstruct_segments(&record).is_empty());
}

#[test]
fn extra_lineup_entries_are_not_on_court() {
    let record = MatchRecord::new(["GK", "A", "B", "C", "D", "E", "F"]);
    let segments = reconstruct_segments(&record);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].unit, unit(["A", "B", "C", "D"]));
}

#[test]
fn single_substitution_splits_match() {
    let mut record = lineup();
    record.substitution_events.push(sub(Period::FirstHalf, 900, "B", "E"));
    let segments = reconstruct_segments(&record);
    assert_eq!(segments.len(), 2);
    assert_eq!((segments[0].start_seconds, segments[0].end_seconds), (0, 900));
    assert_eq!(segments[0].unit, unit(["A", "B", "C", "D"]));
    assert_eq!((segments[1].start_seconds, segments[1].end_seconds), (900, 2400));
    assert_eq!(segments[1].unit, unit(["A", "C", "D", "E"]));
}

#[test]
fn substitutions_are_applied_in_time_order() {
    let mut record = lineup();
    // Listed out of order: second half first.
    record.substitution_events.push(sub(Period::SecondHalf, 300, "E", "F"));
    record.substitution_events.push(sub(Period::FirstHalf, 600, "A", "E"));
    let segments = reconstruct_segments(&record);
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[1].start_seconds, 600);
    assert_eq!(segments[1].unit, unit(["B", "C", "D", "E"]));
    assert_eq!(segments[2].start_seconds, 1500);
    assert_eq!(segments[2].unit, unit(["B", "C", "D", "F"]));
}

#[test]
fn goalkeeper_substitution_is_ignored() {
    let mut record = lineup();
    record.substitution_events.push(sub(Period::FirstHalf, 600, "GK", "GK2"));
    let segments = reconstruct_segments(&record);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].unit, unit(["A", "B", "C", "D"]));
}

#[test]
fn substitution_of_player_not_on_court_is_ignored() {
    let mut record = lineup();
    record.substitution_events.push(sub(Period::FirstHalf, 600, "Z", "E"));
    assert_eq!(reconstruct_segments(&record).len(), 1);
}

#[test]
fn duplicate_time_and_kickoff_substitutions_are_ignored() {
    let mut record = lineup();
    record.substitution_events.push(sub(Period::FirstHalf, 0, "A", "X"));
    record.substitution_events.push(sub(Period::FirstHalf, 600, "B", "E"));
    record.substitution_events.push(sub(Period::FirstHalf, 600, "C", "F"));
    let segments = reconstruct_segments(&record);
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[1].unit, unit(["A", "C", "D", "E"]));
}

#[test]
fn substitution_at_final_whistle_is_ignored() {
    let mut record = lineup();
    record.substitution_events.push(sub(Period::SecondHalf, 1200, "A", "E"));
    let segments = reconstruct_segments(&record);
    assert_eq!(segments.len(), 1);
    assert_full_coverage(&record);
}

#[test]
fn player_ids_are_trimmed() {
    let mut record = MatchRecord::new(["GK", " A", "B ", "C", "D"]);
    record.substitution_events.push(sub(Period::FirstHalf, 300, "B", " E "));
    let segments = reconstruct_segments(&record);
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[1].unit, unit(["A", "C", "D", "E"]));
}

#[test]
fn segment_lookup_clamps_past_final_whistle() {
    let mut record = lineup();
    record.substitution_events.push(sub(Period::FirstHalf, 900, "B", "E"));
    let segments = reconstruct_segments(&record);
    assert_eq!(segment_at(&segments, 0).unwrap().start_seconds, 0);
    assert_eq!(segment_at(&segments, 899).unwrap().start_seconds, 0);
    assert_eq!(segment_at(&segments, 900).unwrap().start_seconds, 900);
    let end = Period::SecondHalf.absolute_seconds(1200);
    assert_eq!(segment_at(&segments, end).unwrap().unit, unit(["A", "C", "D", "E"]));
    assert!(segment_at(&[], 10).is_none());
}

#[test]
fn random_substitution_streams_cover_the_match() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let pool = ["GK", "A", "B", "C", "D", "E", "F", "G", "H"];
    for _ in 0..200 {
        let mut record = lineup();
        for _ in 0..rng.gen_range(0..15) {
            let period = if rng.gen_bool(0.5) { Period::FirstHalf } else { Period::SecondHalf };
            let out = pool.choose(&mut rng).unwrap();
            let inn = pool.choose(&mut rng).unwrap();
            record
                .substitution_events
                .push(sub(period, rng.gen_range(0..1300), out, inn));
        }
        assert_full_coverage(&record);
    }
}
