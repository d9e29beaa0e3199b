//! Ideal-vs-practice sequence comparison
//!
//! Aligns two chord timelines position-by-position and flags each practice
//! segment as correct or mistaken.

use super::result::ChordSegment;

/// Compare a practice chord timeline against an ideal reference
///
/// Alignment is strictly positional: practice segment `i` is correct when
/// the ideal timeline has a segment at position `i` with the same chord
/// label. Positions past the end of the ideal timeline are always mistakes.
/// An inserted or dropped strum therefore shifts every later comparison;
/// no edit-distance or timestamp-window re-alignment is attempted.
///
/// # Arguments
///
/// * `ideal` - Reference chord timeline
/// * `practice` - Practice chord timeline to annotate
///
/// # Returns
///
/// The practice timeline with each segment's `correct` flag set; order and
/// segment count are preserved exactly. The inputs are not mutated.
pub fn compare_sequences(ideal: &[ChordSegment], practice: &[ChordSegment]) -> Vec<ChordSegment> {
    log::debug!(
        "Comparing {} practice segments against {} ideal segments",
        practice.len(),
        ideal.len()
    );

    practice
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let correct = ideal
                .get(i)
                .map_or(false, |reference| reference.chord == segment.chord);
            ChordSegment {
                correct,
                ..segment.clone()
            }
        })
        .collect()
}
