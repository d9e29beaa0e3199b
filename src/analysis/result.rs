//! Analysis result types

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Note names for the 12 chromatic pitch classes (index 0 = C)
const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Guitar chord (major or minor triad)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chord {
    /// Major triad (0 = C, 1 = C#, ..., 11 = B)
    Major(u32),
    /// Minor triad (0 = C, 1 = C#, ..., 11 = B)
    Minor(u32),
}

impl Chord {
    /// Get chord name in musical notation (e.g., "C", "Am", "F#", "D#m")
    ///
    /// Returns standard musical notation:
    /// - Major chords: note name only (e.g., "C", "C#", "G")
    /// - Minor chords: note name + "m" (e.g., "Am", "C#m", "Bm")
    ///
    /// # Example
    ///
    /// ```
    /// use chordgrade::analysis::result::Chord;
    ///
    /// assert_eq!(Chord::Major(0).name(), "C");
    /// assert_eq!(Chord::Major(6).name(), "F#");
    /// assert_eq!(Chord::Minor(9).name(), "Am");
    /// assert_eq!(Chord::Minor(1).name(), "C#m");
    /// ```
    pub fn name(&self) -> String {
        match self {
            Chord::Major(i) => NOTE_NAMES[*i as usize % 12].to_string(),
            Chord::Minor(i) => format!("{}m", NOTE_NAMES[*i as usize % 12]),
        }
    }

    /// Get chord from its musical notation name
    ///
    /// # Arguments
    ///
    /// * `name` - Chord name (e.g., "C", "F#", "Am", "C#m")
    ///
    /// # Returns
    ///
    /// `Some(Chord)` if valid, `None` if the name is not a major or minor
    /// triad in sharp notation
    ///
    /// # Example
    ///
    /// ```
    /// use chordgrade::analysis::result::Chord;
    ///
    /// assert_eq!(Chord::from_name("C"), Some(Chord::Major(0)));
    /// assert_eq!(Chord::from_name("Am"), Some(Chord::Minor(9)));
    /// assert_eq!(Chord::from_name("H"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        let (note, minor) = match name.strip_suffix('m') {
            Some(note) => (note, true),
            None => (name, false),
        };

        let idx = NOTE_NAMES.iter().position(|&n| n == note)? as u32;
        if minor {
            Some(Chord::Minor(idx))
        } else {
            Some(Chord::Major(idx))
        }
    }
}

// Chords cross the JSON boundary as their notation name ("Am"), not as a
// tagged enum.
impl Serialize for Chord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}

impl<'de> Deserialize<'de> for Chord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Chord::from_name(&name)
            .ok_or_else(|| D::Error::custom(format!("unknown chord name: {}", name)))
    }
}

/// One span of the chord timeline over which the classified chord is constant
///
/// Segments for a recording are time-ordered and non-overlapping, and
/// consecutive segments never share a chord label. Only the final segment of
/// a recording may have zero duration (a single trailing frame).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordSegment {
    /// Classified chord
    pub chord: Chord,

    /// Segment start time in seconds (rounded to 2 decimals)
    pub start: f32,

    /// Segment duration in seconds (rounded to 2 decimals)
    pub duration: f32,

    /// Fretboard string hint for UI display: integer part of the start time
    /// modulo 6. Cosmetic only, never used in matching.
    pub string_index: u32,

    /// Whether this segment matched the reference recording. Defaults to
    /// `true` until a comparison annotates it.
    pub correct: bool,
}

/// Skill tier derived from accuracy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    /// Accuracy below 60%
    Beginner,
    /// Accuracy in [60%, 85%)
    Intermediate,
    /// Accuracy of 85% or above
    Professional,
}

/// A mistaken chord reduced to its label and position in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissedChord {
    /// Chord the player actually produced
    pub chord: Chord,

    /// Start time of the mistaken segment in seconds
    pub time: f32,
}

/// Aggregate grading of one practice recording against its reference
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of segments in the practice timeline
    pub total_chords: usize,

    /// Number of correctly matched segments
    pub correct_chords: usize,

    /// Number of mismatched segments
    pub mistakes: usize,

    /// Percentage of correct segments, rounded to 2 decimals
    pub accuracy: f64,

    /// Skill tier for this accuracy
    pub level: SkillLevel,

    /// Star rating (1-5)
    pub stars: u8,

    /// Mistaken chords with their timestamps
    pub missing_chords: Vec<MissedChord>,

    /// Guidance text for this skill tier
    pub guidance: String,

    /// Encouragement text for this skill tier
    pub tariff: String,
}

/// Output document for single-recording analysis
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Chord timeline of the recording (every segment `correct: true`)
    pub feedback: Vec<ChordSegment>,
}

/// Output document for ideal-vs-practice grading
#[derive(Debug, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Practice timeline annotated with per-segment correctness
    pub feedback: Vec<ChordSegment>,

    /// Aggregate grading summary
    pub mic_summary: Summary,
}
