//! Configuration parameters for chord analysis

/// Analysis configuration parameters
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    // STFT parameters
    /// Frame size for STFT (default: 2048)
    pub frame_size: usize,

    /// Hop size between analysis frames (default: 2048)
    ///
    /// Frame timestamps are spaced `hop_size / sample_rate` seconds apart,
    /// so the hop directly controls the time resolution of the chord
    /// timeline.
    pub hop_size: usize,

    // Chroma extraction
    /// Reference tuning frequency for A4 (default: 440.0 Hz)
    pub tuning_frequency: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            frame_size: 2048,
            hop_size: 2048,
            tuning_frequency: 440.0,
        }
    }
}
