//! Chord segmentation
//!
//! Merges consecutive identical per-frame chord labels into timed segments.
//!
//! Algorithm:
//! 1. Walk the classified frames in time order
//! 2. When the label changes, close the current segment (duration = new
//!    frame's timestamp - segment start) and open a new one
//! 3. At end of input, close the final segment against the LAST frame's
//!    timestamp, so a single-frame run at the end yields zero duration

use super::classifier::match_frame;
use super::templates::ChordTemplates;
use crate::analysis::result::{Chord, ChordSegment};
use crate::features::chroma::PitchClassFrame;

/// Merge an ordered `(timestamp, chord)` sequence into chord segments
///
/// # Arguments
///
/// * `labeled` - One `(timestamp in seconds, classified chord)` pair per
///   analysis frame, timestamps monotonically increasing
///
/// # Returns
///
/// The recording's chord timeline: time-ordered, non-overlapping segments
/// with no two consecutive segments sharing a label. Start and duration are
/// rounded to 2 decimals; the string-display hint is the integer part of
/// the unrounded start modulo 6. An empty input yields an empty timeline;
/// a single frame yields one zero-duration segment.
pub fn segment_chords(labeled: &[(f32, Chord)]) -> Vec<ChordSegment> {
    let mut segments = Vec::new();
    let mut current: Option<(Chord, f32)> = None;

    for &(time, chord) in labeled {
        match current {
            None => current = Some((chord, time)),
            Some((open_chord, start)) if chord != open_chord => {
                segments.push(close_segment(open_chord, start, time));
                current = Some((chord, time));
            }
            Some(_) => {}
        }
    }

    if let (Some((open_chord, start)), Some(&(last_time, _))) = (current, labeled.last()) {
        segments.push(close_segment(open_chord, start, last_time));
    }

    log::debug!(
        "Segmented {} labeled frames into {} chord segments",
        labeled.len(),
        segments.len()
    );

    segments
}

/// Classify every frame and merge the labels into a chord timeline
///
/// # Arguments
///
/// * `frames` - Pitch-class energy frames in time order
/// * `templates` - Chord template table used for classification
pub fn classify_and_segment(
    frames: &[PitchClassFrame],
    templates: &ChordTemplates,
) -> Vec<ChordSegment> {
    let labeled: Vec<(f32, Chord)> = frames
        .iter()
        .map(|frame| (frame.time, match_frame(&frame.energies, templates)))
        .collect();

    segment_chords(&labeled)
}

fn close_segment(chord: Chord, start: f32, end: f32) -> ChordSegment {
    ChordSegment {
        chord,
        start: round2(start),
        duration: round2(end - start),
        string_index: start as u32 % 6,
        correct: true,
    }
}

/// Round to 2 decimal places
fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
