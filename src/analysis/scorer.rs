//! Accuracy scoring and skill grading
//!
//! Reduces an annotated practice timeline to an aggregate summary:
//! accuracy percentage, skill tier, star rating, missed chords, and
//! per-tier coaching text.

use super::result::{ChordSegment, MissedChord, SkillLevel, Summary};

/// Build a grading summary from an annotated practice timeline
///
/// Accuracy is `correct / max(total, 1) * 100`, rounded to 2 decimals, so
/// an empty timeline grades as 0% accuracy, `Beginner`, 1 star rather than
/// dividing by zero.
///
/// # Arguments
///
/// * `feedback` - Practice segments with their `correct` flags set by the
///   comparator
///
/// # Returns
///
/// Aggregate [`Summary`]; deterministic for a given input.
pub fn summarize(feedback: &[ChordSegment]) -> Summary {
    let total = feedback.len();
    let correct = feedback.iter().filter(|s| s.correct).count();

    let accuracy = round2(correct as f64 / total.max(1) as f64 * 100.0);
    let level = skill_level(accuracy);
    let stars = star_rating(accuracy);

    let missing_chords: Vec<MissedChord> = feedback
        .iter()
        .filter(|s| !s.correct)
        .map(|s| MissedChord {
            chord: s.chord,
            time: s.start,
        })
        .collect();

    let (guidance, tariff) = coaching_text(level);

    log::debug!(
        "Graded {} segments: {:.2}% accuracy, {:?}, {} stars",
        total,
        accuracy,
        level,
        stars
    );

    Summary {
        total_chords: total,
        correct_chords: correct,
        mistakes: missing_chords.len(),
        accuracy,
        level,
        stars,
        missing_chords,
        guidance: guidance.to_string(),
        tariff: tariff.to_string(),
    }
}

/// Round to 2 decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Skill tier for an accuracy percentage (inclusive lower bounds)
fn skill_level(accuracy: f64) -> SkillLevel {
    if accuracy >= 85.0 {
        SkillLevel::Professional
    } else if accuracy >= 60.0 {
        SkillLevel::Intermediate
    } else {
        SkillLevel::Beginner
    }
}

/// Star rating (1-5) for an accuracy percentage (inclusive lower bounds)
fn star_rating(accuracy: f64) -> u8 {
    if accuracy >= 90.0 {
        5
    } else if accuracy >= 75.0 {
        4
    } else if accuracy >= 60.0 {
        3
    } else if accuracy >= 40.0 {
        2
    } else {
        1
    }
}

/// Canned (guidance, encouragement) pair for a skill tier
fn coaching_text(level: SkillLevel) -> (&'static str, &'static str) {
    match level {
        SkillLevel::Professional => (
            "Excellent! You’re at a professional level. Keep refining your chord transitions.",
            "🔥 You nailed it! 🎸",
        ),
        SkillLevel::Intermediate => (
            "You're doing well. Focus on accuracy and tempo balance.",
            "🚀 Solid progress! Push a little more for perfection.",
        ),
        SkillLevel::Beginner => (
            "You're at the Beginner level. Practice slow transitions, especially between F, C, and Am chords.",
            "💪 Great start! Keep practicing daily and you'll hit Intermediate soon!",
        ),
    }
}
