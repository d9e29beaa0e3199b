//! chordgrade CLI
//!
//! Extracts a chord timeline from one recording, or grades a practice
//! recording against an ideal reference, and prints a single JSON document
//! on standard output.

use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Serialize;

use chordgrade::{
    analyze_samples, grade_performance, AnalysisConfig, AnalysisError, AnalysisReport,
    ChordSegment, ComparisonReport,
};

/// Chord practice analyzer
#[derive(Parser)]
#[command(name = "chordgrade")]
#[command(about = "Analyze guitar recordings and grade practice against an ideal reference")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Audio files (WAV): one to extract a chord timeline, two (ideal,
    /// practice) to grade the second against the first
    files: Vec<PathBuf>,

    /// STFT frame size in samples
    #[arg(long, default_value_t = 2048)]
    frame_size: usize,

    /// Hop size between analysis frames in samples
    #[arg(long, default_value_t = 2048)]
    hop_size: usize,

    /// Reference tuning frequency for A4 in Hz
    #[arg(long, default_value_t = 440.0)]
    tuning: f32,
}

/// Top-level error object for invocation mistakes
#[derive(Debug, Serialize)]
struct ErrorReport {
    error: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = AnalysisConfig {
        frame_size: cli.frame_size,
        hop_size: cli.hop_size,
        tuning_frequency: cli.tuning,
    };

    let document = run(&cli.files, &config)?;
    println!("{}", document);
    Ok(())
}

/// Produce the output document for the given audio paths
///
/// Mode is selected by argument count. A count other than 1 or 2 yields the
/// structured error object (still a normal exit); a decode failure is a
/// real error, so a broken file is never mistaken for a silent recording.
fn run(files: &[PathBuf], config: &AnalysisConfig) -> anyhow::Result<String> {
    match files {
        [recording] => {
            let feedback = analyze_path(recording, config)?;
            Ok(serde_json::to_string(&AnalysisReport { feedback })?)
        }
        [ideal, practice] => {
            let ideal_segments = analyze_path(ideal, config)?;
            let practice_segments = analyze_path(practice, config)?;
            let (feedback, mic_summary) = grade_performance(&ideal_segments, &practice_segments);
            Ok(serde_json::to_string(&ComparisonReport {
                feedback,
                mic_summary,
            })?)
        }
        _ => Ok(serde_json::to_string(&ErrorReport {
            error: "Invalid number of arguments".to_string(),
        })?),
    }
}

fn analyze_path(path: &Path, config: &AnalysisConfig) -> anyhow::Result<Vec<ChordSegment>> {
    let (samples, sample_rate) = load_wav(path)?;
    Ok(analyze_samples(&samples, sample_rate, config)?)
}

/// Load a WAV file and return (mono samples, sample rate)
fn load_wav(path: &Path) -> Result<(Vec<f32>, u32), AnalysisError> {
    let decode_err = |e: hound::Error| AnalysisError::DecodingError(format!("{}: {}", path.display(), e));

    let mut reader = hound::WavReader::open(path).map_err(decode_err)?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(decode_err)?,
        hound::SampleFormat::Int => {
            let max_value = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|s| s as f32 / max_value))
                .collect::<Result<Vec<_>, _>>()
                .map_err(decode_err)?
        }
    };

    // Downmix to mono by averaging interleaved channels
    let channels = spec.channels as usize;
    let mono = if channels > 1 {
        samples
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
            .collect()
    } else {
        samples
    };

    Ok((mono, spec.sample_rate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_files_yield_arity_error_object() {
        let document = run(&[], &AnalysisConfig::default()).unwrap();
        assert_eq!(document, r#"{"error":"Invalid number of arguments"}"#);
    }

    #[test]
    fn test_three_files_yield_arity_error_object() {
        let files = vec![
            PathBuf::from("ideal.wav"),
            PathBuf::from("practice.wav"),
            PathBuf::from("extra.wav"),
        ];

        let document = run(&files, &AnalysisConfig::default()).unwrap();
        assert_eq!(document, r#"{"error":"Invalid number of arguments"}"#);
    }

    #[test]
    fn test_unreadable_file_is_a_decode_error() {
        let files = vec![PathBuf::from("no-such-recording.wav")];
        assert!(run(&files, &AnalysisConfig::default()).is_err());
    }
}
