//! Grading and result aggregation modules
//!
//! Turns chord timelines into graded feedback:
//! - Result and report types
//! - Ideal-vs-practice comparison
//! - Accuracy scoring and guidance

pub mod comparator;
pub mod result;
pub mod scorer;

pub use comparator::compare_sequences;
pub use result::{
    AnalysisReport, Chord, ChordSegment, ComparisonReport, MissedChord, SkillLevel, Summary,
};
pub use scorer::summarize;
