//! Chord templates
//!
//! Defines binary pitch-class activation profiles for the supported chords.

use crate::analysis::result::Chord;

/// Chords covered by the default table, in table order: the 12 chords of
/// beginner guitar pedagogy
const GUITAR_BASIC: [Chord; 12] = [
    Chord::Major(0),  // C
    Chord::Minor(0),  // Cm
    Chord::Major(2),  // D
    Chord::Minor(2),  // Dm
    Chord::Major(4),  // E
    Chord::Minor(4),  // Em
    Chord::Major(5),  // F
    Chord::Major(7),  // G
    Chord::Major(9),  // A
    Chord::Minor(9),  // Am
    Chord::Major(11), // B
    Chord::Minor(11), // Bm
];

/// Ordered chord template table
///
/// Each entry pairs a chord with the 12-element activation vector of its
/// triad: 1.0 at the root, third, and fifth pitch classes, 0.0 elsewhere
/// (index 0 = C). The table is read-only after construction, and its
/// iteration order is the declaration order. The classifier resolves score
/// ties in favor of the earlier entry, so the order is part of the contract.
#[derive(Debug, Clone)]
pub struct ChordTemplates {
    entries: Vec<(Chord, [f32; 12])>,
}

impl ChordTemplates {
    /// The default 12-chord table (C, Cm, D, Dm, E, Em, F, G, A, Am, B, Bm)
    pub fn guitar_basic() -> Self {
        Self {
            entries: GUITAR_BASIC
                .iter()
                .map(|&chord| (chord, triad_profile(chord)))
                .collect(),
        }
    }

    /// The full 24-triad table: every major chord (C through B), then every
    /// minor chord, in chromatic order
    pub fn all_triads() -> Self {
        let mut entries = Vec::with_capacity(24);
        for root in 0..12 {
            entries.push((Chord::Major(root), triad_profile(Chord::Major(root))));
        }
        for root in 0..12 {
            entries.push((Chord::Minor(root), triad_profile(Chord::Minor(root))));
        }
        Self { entries }
    }

    /// Iterate over `(chord, activation vector)` entries in table order
    pub fn iter(&self) -> std::slice::Iter<'_, (Chord, [f32; 12])> {
        self.entries.iter()
    }

    /// Number of chords in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ChordTemplates {
    fn default() -> Self {
        Self::guitar_basic()
    }
}

/// Activation vector of a chord's triad: root, third (major or minor),
/// perfect fifth
fn triad_profile(chord: Chord) -> [f32; 12] {
    let (root, third) = match chord {
        Chord::Major(root) => (root as usize, 4),
        Chord::Minor(root) => (root as usize, 3),
    };

    let mut profile = [0.0f32; 12];
    profile[root % 12] = 1.0;
    profile[(root + third) % 12] = 1.0;
    profile[(root + 7) % 12] = 1.0;
    profile
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_order_and_size() {
        let templates = ChordTemplates::guitar_basic();
        assert_eq!(templates.len(), 12);
        assert!(!templates.is_empty());

        let names: Vec<String> = templates.iter().map(|(c, _)| c.name()).collect();
        assert_eq!(
            names,
            vec!["C", "Cm", "D", "Dm", "E", "Em", "F", "G", "A", "Am", "B", "Bm"]
        );
    }

    #[test]
    fn test_every_template_activates_exactly_three_classes() {
        for templates in [ChordTemplates::guitar_basic(), ChordTemplates::all_triads()] {
            for (chord, profile) in templates.iter() {
                let active = profile.iter().filter(|&&v| v == 1.0).count();
                let inactive = profile.iter().filter(|&&v| v == 0.0).count();
                assert_eq!(active, 3, "{} should activate 3 pitch classes", chord.name());
                assert_eq!(inactive, 9);
            }
        }
    }

    #[test]
    fn test_c_major_profile() {
        let templates = ChordTemplates::guitar_basic();
        let (chord, profile) = templates.iter().next().unwrap();
        assert_eq!(chord.name(), "C");
        // C major triad: C (0), E (4), G (7)
        let expected = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0];
        assert_eq!(*profile, expected);
    }

    #[test]
    fn test_a_minor_profile() {
        let profile = triad_profile(Chord::Minor(9));
        // A minor triad: A (9), C (0), E (4)
        let expected = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0];
        assert_eq!(profile, expected);
    }

    #[test]
    fn test_all_triads_covers_24_chords() {
        let templates = ChordTemplates::all_triads();
        assert_eq!(templates.len(), 24);

        // Majors first in chromatic order, then minors
        let chords: Vec<Chord> = templates.iter().map(|(c, _)| *c).collect();
        assert_eq!(chords[0], Chord::Major(0));
        assert_eq!(chords[11], Chord::Major(11));
        assert_eq!(chords[12], Chord::Minor(0));
        assert_eq!(chords[23], Chord::Minor(11));
    }
}
