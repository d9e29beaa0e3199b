//! Feature extraction modules
//!
//! This module contains the analysis stages between raw samples and the
//! chord timeline:
//! - Chroma extraction (pitch-class energy frames)
//! - Chord recognition (templates, classifier, segmenter)

pub mod chords;
pub mod chroma;
