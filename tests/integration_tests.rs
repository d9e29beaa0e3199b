//! Integration tests for the chord analysis engine

use chordgrade::{
    analyze_samples, grade_performance, AnalysisConfig, Chord, ChordSegment, ComparisonReport,
    SkillLevel,
};

/// Sum equal-amplitude sine tones into one mono signal
fn chord_tone(frequencies: &[f32], sample_rate: u32, duration: f32) -> Vec<f32> {
    let count = (sample_rate as f32 * duration) as usize;
    (0..count)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            frequencies
                .iter()
                .map(|f| (2.0 * std::f32::consts::PI * f * t).sin())
                .sum::<f32>()
                / frequencies.len() as f32
        })
        .collect()
}

fn segment(chord: Chord, start: f32, duration: f32) -> ChordSegment {
    ChordSegment {
        chord,
        start,
        duration,
        string_index: start as u32 % 6,
        correct: true,
    }
}

#[test]
fn test_c_major_chord_yields_single_c_segment() {
    // C4 + E4 + G4
    let samples = chord_tone(&[261.63, 329.63, 392.00], 22050, 2.0);

    let segments = analyze_samples(&samples, 22050, &AnalysisConfig::default())
        .expect("Analysis should succeed");

    assert_eq!(segments.len(), 1, "Steady chord should merge into one segment");
    assert_eq!(segments[0].chord.name(), "C");
    assert_eq!(segments[0].start, 0.0);
    assert!(segments[0].duration > 1.0, "Segment should span most of the recording");
    assert!(segments[0].correct, "Extraction-only segments default to correct");
}

#[test]
fn test_chord_change_is_segmented() {
    let sample_rate = 22050;
    let mut samples = chord_tone(&[261.63, 329.63, 392.00], sample_rate, 1.5); // C major
    samples.extend(chord_tone(&[392.00, 493.88, 587.33], sample_rate, 1.5)); // G major

    let segments = analyze_samples(&samples, sample_rate, &AnalysisConfig::default())
        .expect("Analysis should succeed");

    assert!(segments.len() >= 2, "Chord change should produce at least two segments");
    assert_eq!(segments.first().unwrap().chord.name(), "C");
    assert_eq!(segments.last().unwrap().chord.name(), "G");

    // Time-ordered and non-overlapping (start and duration are rounded to
    // 2 decimals independently, so allow one rounding step of slack)
    for pair in segments.windows(2) {
        assert!(pair[0].start <= pair[1].start);
        assert!(pair[0].start + pair[0].duration <= pair[1].start + 0.011);
    }
}

#[test]
fn test_empty_audio_yields_empty_timeline() {
    let segments = analyze_samples(&[], 22050, &AnalysisConfig::default())
        .expect("Empty input is not an error");
    assert!(segments.is_empty());
}

#[test]
fn test_silence_classifies_as_default_chord() {
    // All-zero frames tie every template at score 0; the documented
    // tie-break picks the first table entry, C.
    let samples = vec![0.0f32; 22050];

    let segments = analyze_samples(&samples, 22050, &AnalysisConfig::default())
        .expect("Silent input is not an error");

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].chord.name(), "C");
}

#[test]
fn test_grading_end_to_end() {
    let ideal = vec![
        segment(Chord::Major(0), 0.0, 2.0), // C
        segment(Chord::Major(7), 2.0, 2.0), // G
    ];
    let practice = vec![
        segment(Chord::Major(0), 0.0, 2.0), // C
        segment(Chord::Minor(9), 2.0, 2.0), // Am instead of G
    ];

    let (feedback, summary) = grade_performance(&ideal, &practice);

    assert_eq!(feedback.len(), 2);
    assert!(feedback[0].correct);
    assert!(!feedback[1].correct);
    assert_eq!(feedback[1].chord.name(), "Am");

    assert_eq!(summary.total_chords, 2);
    assert_eq!(summary.correct_chords, 1);
    assert_eq!(summary.mistakes, 1);
    assert_eq!(summary.accuracy, 50.0);
    assert_eq!(summary.level, SkillLevel::Beginner);
    assert_eq!(summary.stars, 2);
    assert_eq!(summary.missing_chords.len(), 1);
    assert_eq!(summary.missing_chords[0].chord.name(), "Am");
    assert_eq!(summary.missing_chords[0].time, 2.0);
}

#[test]
fn test_comparison_report_serializes_with_stable_field_names() {
    let ideal = vec![segment(Chord::Major(0), 0.0, 2.0)];
    let practice = vec![segment(Chord::Minor(2), 0.0, 2.0)];

    let (feedback, mic_summary) = grade_performance(&ideal, &practice);
    let report = ComparisonReport {
        feedback,
        mic_summary,
    };

    let value = serde_json::to_value(&report).expect("Report should serialize");

    let entry = &value["feedback"][0];
    assert_eq!(entry["chord"], "Dm");
    assert_eq!(entry["correct"], false);
    assert!(entry.get("start").is_some());
    assert!(entry.get("duration").is_some());
    assert!(entry.get("stringIndex").is_some());

    let summary = &value["mic_summary"];
    assert_eq!(summary["totalChords"], 1);
    assert_eq!(summary["correctChords"], 0);
    assert_eq!(summary["mistakes"], 1);
    assert_eq!(summary["accuracy"], 0.0);
    assert_eq!(summary["level"], "Beginner");
    assert_eq!(summary["stars"], 1);
    assert_eq!(summary["missingChords"][0]["chord"], "Dm");
    assert!(summary.get("guidance").is_some());
    assert!(summary.get("tariff").is_some());
}
