//! # chordgrade
//!
//! A chord analysis and practice grading engine for guitar training
//! applications, providing chord timeline extraction and ideal-vs-practice
//! performance scoring.
//!
//! ## Features
//!
//! - **Chord Timeline Extraction**: STFT chroma features with binary triad
//!   template matching, merged into timed chord segments
//! - **Practice Grading**: positional comparison against a reference
//!   recording with accuracy, skill tier, star rating, and coaching text
//!
//! ## Quick Start
//!
//! ```
//! use chordgrade::{analyze_samples, AnalysisConfig};
//!
//! // One second of silence classifies as a single segment of the
//! // default chord (C, the first template-table entry)
//! let samples = vec![0.0f32; 22050];
//! let segments = analyze_samples(&samples, 22050, &AnalysisConfig::default())?;
//! assert_eq!(segments.len(), 1);
//! # Ok::<(), chordgrade::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! The analysis pipeline follows this flow:
//!
//! ```text
//! Audio Input → Chroma Extraction → Frame Classification → Segmentation
//!             → (optional) Comparison → Scoring → Output
//! ```
//!
//! The library API is sample-based; file decoding belongs to the caller
//! (the bundled CLI reads WAV via `hound`).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;

// Re-export main types
pub use analysis::result::{
    AnalysisReport, Chord, ChordSegment, ComparisonReport, MissedChord, SkillLevel, Summary,
};
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use features::chords::ChordTemplates;

/// Extract the chord timeline of one recording
///
/// Runs the full single-recording pipeline: chroma extraction, per-frame
/// template classification against the default chord table, and
/// segmentation. Every returned segment has `correct: true`.
///
/// # Arguments
///
/// * `samples` - Mono audio samples, normalized to [-1.0, 1.0]
/// * `sample_rate` - Sample rate in Hz
/// * `config` - Analysis configuration parameters
///
/// # Returns
///
/// The recording's chord timeline. Empty or all-silent input yields an
/// empty timeline or a single default-chord segment respectively, never an
/// error.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the sample rate or the STFT
/// configuration is invalid.
///
/// # Example
///
/// ```no_run
/// use chordgrade::{analyze_samples, AnalysisConfig};
///
/// let samples: Vec<f32> = vec![]; // Your decoded audio data
/// let segments = analyze_samples(&samples, 22050, &AnalysisConfig::default())?;
/// for segment in &segments {
///     println!("{} at {:.2}s for {:.2}s", segment.chord.name(), segment.start, segment.duration);
/// }
/// # Ok::<(), chordgrade::AnalysisError>(())
/// ```
pub fn analyze_samples(
    samples: &[f32],
    sample_rate: u32,
    config: &AnalysisConfig,
) -> Result<Vec<ChordSegment>, AnalysisError> {
    log::debug!(
        "Starting chord analysis: {} samples at {} Hz",
        samples.len(),
        sample_rate
    );

    let frames = features::chroma::extract_pitch_class_frames(samples, sample_rate, config)?;
    let templates = ChordTemplates::guitar_basic();
    let segments = features::chords::classify_and_segment(&frames, &templates);

    log::debug!(
        "Analysis complete: {} frames, {} chord segments",
        frames.len(),
        segments.len()
    );

    Ok(segments)
}

/// Grade a practice chord timeline against an ideal reference
///
/// Annotates each practice segment with a correctness flag via positional
/// comparison, then reduces the annotated timeline to an aggregate
/// [`Summary`].
///
/// # Arguments
///
/// * `ideal` - Reference chord timeline
/// * `practice` - Practice chord timeline
///
/// # Returns
///
/// The annotated practice timeline and its grading summary. An empty
/// practice timeline grades as 0% accuracy, `Beginner`, 1 star.
pub fn grade_performance(
    ideal: &[ChordSegment],
    practice: &[ChordSegment],
) -> (Vec<ChordSegment>, Summary) {
    let feedback = analysis::compare_sequences(ideal, practice);
    let summary = analysis::summarize(&feedback);
    (feedback, summary)
}
