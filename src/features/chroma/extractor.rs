//! Pitch-class energy extraction
//!
//! Converts audio samples to 12-element pitch-class energy vectors (chroma),
//! one per analysis frame.
//!
//! Algorithm:
//! 1. Divide audio into Hann-windowed frames (frame_size, hop_size)
//! 2. FFT each frame and take per-bin energy (squared magnitude)
//! 3. Accumulate each bin's energy into the pitch class of its nearest
//!    equal-tempered semitone
//! 4. Peak-normalize each frame

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use super::{normalization, PitchClassFrame};
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;

/// Lowest frequency mapped to a pitch class (A0); bins below are DC drift
/// and rumble, not tonal content
const MIN_FREQUENCY_HZ: f32 = 27.5;

/// Extract pitch-class energy frames from audio samples
///
/// # Arguments
///
/// * `samples` - Mono audio samples, normalized to [-1.0, 1.0]
/// * `sample_rate` - Sample rate in Hz
/// * `config` - Analysis configuration (frame size, hop size, tuning)
///
/// # Returns
///
/// One [`PitchClassFrame`] per full analysis window, with timestamps spaced
/// `hop_size / sample_rate` seconds apart starting at 0. Audio shorter than
/// one window yields no frames.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the sample rate, frame size,
/// hop size, or tuning frequency is zero or negative.
pub fn extract_pitch_class_frames(
    samples: &[f32],
    sample_rate: u32,
    config: &AnalysisConfig,
) -> Result<Vec<PitchClassFrame>, AnalysisError> {
    if sample_rate == 0 {
        return Err(AnalysisError::InvalidInput(
            "Sample rate must be > 0".to_string(),
        ));
    }

    if config.frame_size == 0 {
        return Err(AnalysisError::InvalidInput(
            "Frame size must be > 0".to_string(),
        ));
    }

    if config.hop_size == 0 {
        return Err(AnalysisError::InvalidInput(
            "Hop size must be > 0".to_string(),
        ));
    }

    if config.tuning_frequency <= 0.0 {
        return Err(AnalysisError::InvalidInput(
            "Tuning frequency must be > 0".to_string(),
        ));
    }

    if samples.is_empty() {
        return Ok(Vec::new());
    }

    if samples.len() < config.frame_size {
        log::warn!(
            "Frame size ({}) larger than audio length ({}), returning no frames",
            config.frame_size,
            samples.len()
        );
        return Ok(Vec::new());
    }

    let frame_size = config.frame_size;
    let hop_size = config.hop_size;
    let num_frames = (samples.len() - frame_size) / hop_size + 1;

    log::debug!(
        "Extracting chroma: {} samples at {} Hz, frame={}, hop={}, {} frames",
        samples.len(),
        sample_rate,
        frame_size,
        hop_size,
        num_frames
    );

    // Hann window
    let window: Vec<f32> = (0..frame_size)
        .map(|n| {
            let phase = 2.0 * std::f32::consts::PI * n as f32 / frame_size as f32;
            0.5 * (1.0 - phase.cos())
        })
        .collect();

    // Precompute the pitch class of each FFT bin (None = out of tonal range)
    let bin_classes: Vec<Option<usize>> = (0..=frame_size / 2)
        .map(|k| {
            let frequency = k as f32 * sample_rate as f32 / frame_size as f32;
            if frequency < MIN_FREQUENCY_HZ {
                return None;
            }
            // MIDI note number of the nearest equal-tempered semitone;
            // note 69 is A4 at the configured tuning frequency
            let midi = 69.0 + 12.0 * (frequency / config.tuning_frequency).log2();
            // MIDI note numbers put C at 0 modulo 12 (note 60 = C4)
            let class = (midi.round() as i32).rem_euclid(12);
            Some(class as usize)
        })
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(frame_size);

    let mut frames = Vec::with_capacity(num_frames);
    let mut buffer: Vec<Complex<f32>> = vec![Complex { re: 0.0, im: 0.0 }; frame_size];

    for i in 0..num_frames {
        let start = i * hop_size;

        for (j, slot) in buffer.iter_mut().enumerate() {
            *slot = Complex {
                re: samples[start + j] * window[j],
                im: 0.0,
            };
        }

        fft.process(&mut buffer);

        let mut energies = [0.0f32; 12];
        for (k, class) in bin_classes.iter().enumerate() {
            if let Some(class) = class {
                energies[*class] += buffer[k].norm_sqr();
            }
        }

        normalization::normalize_frame(&mut energies);

        frames.push(PitchClassFrame {
            energies,
            time: start as f32 / sample_rate as f32,
        });
    }

    Ok(frames)
}
