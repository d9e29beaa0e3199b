//! Chord recognition modules
//!
//! Turn pitch-class energy frames into a timed chord timeline:
//! - Chord template table (binary triad activation profiles)
//! - Frame classifier (template dot-product matching)
//! - Segmenter (run-length merge of per-frame labels)

pub mod classifier;
pub mod segmenter;
pub mod templates;

pub use classifier::match_frame;
pub use segmenter::{classify_and_segment, segment_chords};
pub use templates::ChordTemplates;
