//! # Key Interval Calculator
//!
//! Semitone distance between two keys and the sharp-vs-flat spelling
//! preference for a destination key.
//!
//! Keys are written `<Note>` (major) or `<Note>m` (minor). The minor marker
//! never changes the numeric offset: only the root pitch matters. Keys come
//! straight from user input, so every function here fails soft instead of
//! erroring.

use log::warn;

use crate::note::Note;

/// Conventionally flat-spelled major keys.
const FLAT_MAJOR_KEYS: [&str; 7] = ["F", "Bb", "Eb", "Ab", "Db", "Gb", "Cb"];

/// Minor keys rendered with flats: the minors of the flat majors plus the
/// common flat-minor set (Dm, Gm, Cm, Fm, Bbm, Ebm, Abm).
const FLAT_MINOR_KEYS: [&str; 10] = ["D", "G", "C", "F", "Bb", "Eb", "Ab", "Db", "Gb", "Cb"];

/// Strip the trailing minor marker from a key name.
fn key_root(key: &str) -> &str {
    let trimmed = key.trim();
    trimmed.strip_suffix('m').unwrap_or(trimmed)
}

/// Semitone distance from `from_key` up to `to_key`, in [0, 12).
///
/// Soft-fails: an unrecognized key spelling logs a warning and yields 0, so
/// transposition degrades to a no-op instead of rejecting the document.
///
/// # Example
/// ```
/// use cifra::semitone_distance;
///
/// assert_eq!(semitone_distance("C", "D"), 2);
/// assert_eq!(semitone_distance("Am", "Cm"), 3);
/// assert_eq!(semitone_distance("G", "G"), 0);
/// ```
pub fn semitone_distance(from_key: &str, to_key: &str) -> u8 {
    match (Note::parse(key_root(from_key)), Note::parse(key_root(to_key))) {
        (Ok(from), Ok(to)) => from.distance_to(to),
        _ => {
            warn!("unrecognized key in '{from_key}' -> '{to_key}', keeping original");
            0
        }
    }
}

/// Whether chords should render with flat spellings in the given key.
///
/// A readability heuristic that string-matches the key name against the
/// conventionally flat key sets. It is not a key-signature resolver; keys
/// outside both sets (and unrecognized input) simply render with sharps.
pub fn prefers_flats(key: &str) -> bool {
    let trimmed = key.trim();
    let root = key_root(trimmed);

    let mut chars = root.chars();
    let Some(letter) = chars.next() else {
        return false;
    };
    let mut canonical = String::with_capacity(root.len());
    canonical.push(letter.to_ascii_uppercase());
    canonical.extend(chars.map(|c| c.to_ascii_lowercase()));

    let set: &[&str] = if trimmed.ends_with('m') {
        &FLAT_MINOR_KEYS
    } else {
        &FLAT_MAJOR_KEYS
    };
    set.contains(&canonical.as_str())
}

/// Every key offered for transposition: the 12 sharp-spelled majors
/// followed by their minors.
pub fn all_keys() -> Vec<String> {
    let majors = (0..12).map(|i| Note::from_index(i).render(false).to_string());
    let minors = (0..12).map(|i| format!("{}m", Note::from_index(i).render(false)));
    majors.chain(minors).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_ignores_minor_marker() {
        assert_eq!(semitone_distance("C", "D"), 2);
        assert_eq!(semitone_distance("Cm", "Dm"), 2);
        assert_eq!(semitone_distance("Am", "C"), 3);
        assert_eq!(semitone_distance("D", "Bm"), 9);
    }

    #[test]
    fn test_distance_handles_enharmonics_and_case() {
        assert_eq!(semitone_distance("C#", "Db"), 0);
        assert_eq!(semitone_distance("bb", "c"), 2);
    }

    #[test]
    fn test_unrecognized_key_is_a_noop() {
        assert_eq!(semitone_distance("X", "D"), 0);
        assert_eq!(semitone_distance("C", "dó"), 0);
        assert_eq!(semitone_distance("", ""), 0);
    }

    #[test]
    fn test_flat_preference_major_keys() {
        for key in ["F", "Bb", "Eb", "Ab", "Db", "Gb", "Cb"] {
            assert!(prefers_flats(key), "{key} should prefer flats");
        }
        for key in ["C", "G", "D", "A", "E", "B", "F#", "C#"] {
            assert!(!prefers_flats(key), "{key} should prefer sharps");
        }
    }

    #[test]
    fn test_flat_preference_minor_keys() {
        for key in ["Dm", "Gm", "Cm", "Fm", "Bbm", "Ebm", "Abm"] {
            assert!(prefers_flats(key), "{key} should prefer flats");
        }
        for key in ["Am", "Em", "Bm", "F#m", "C#m"] {
            assert!(!prefers_flats(key), "{key} should prefer sharps");
        }
    }

    #[test]
    fn test_flat_preference_is_case_tolerant() {
        assert!(prefers_flats("bb"));
        assert!(prefers_flats(" eb "));
        assert!(!prefers_flats(""));
    }

    #[test]
    fn test_all_keys_lists_majors_then_minors() {
        let keys = all_keys();
        assert_eq!(keys.len(), 24);
        assert_eq!(keys[0], "C");
        assert_eq!(keys[11], "B");
        assert_eq!(keys[12], "Cm");
        assert_eq!(keys[23], "Bm");
        assert!(keys.contains(&"A#m".to_string()));
    }
}
