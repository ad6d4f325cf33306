//! Coercions for values handed in by inline page scripts.
//!
//! Inline handlers pass numbers, numeric strings or garbage; these follow
//! the page script's own loose rules so the exported globals behave the same.

/// Read a string the way `Number(s)` would.
///
/// Blank strings are 0, unparsable ones `NaN`.
pub fn number_from_str(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // Rust also accepts "inf"/"nan" spellings that scripts don't.
        s if s.bytes().any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E') => f64::NAN,
        s => s.parse().unwrap_or(f64::NAN),
    }
}

/// A list position from a script number: non-negative and whole, else `None`.
pub fn index_from_f64(value: f64) -> Option<usize> {
    (value >= 0.0 && value.fract() == 0.0 && value <= usize::MAX as f64).then_some(value as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_from_str() {
        assert_eq!(number_from_str("3"), 3.0);
        assert_eq!(number_from_str(" 12 "), 12.0);
        assert_eq!(number_from_str("4.5"), 4.5);
        assert_eq!(number_from_str("1e2"), 100.0);
        assert_eq!(number_from_str(""), 0.0);
        assert_eq!(number_from_str("Infinity"), f64::INFINITY);
        assert!(number_from_str("abc").is_nan());
        assert!(number_from_str("inf").is_nan());
        assert!(number_from_str("NaN").is_nan());
        assert!(number_from_str("3px").is_nan());
    }

    #[test]
    fn test_index_from_f64() {
        assert_eq!(index_from_f64(0.0), Some(0));
        assert_eq!(index_from_f64(2.0), Some(2));
        assert_eq!(index_from_f64(-1.0), None);
        assert_eq!(index_from_f64(1.5), None);
        assert_eq!(index_from_f64(f64::NAN), None);
        assert_eq!(index_from_f64(f64::INFINITY), None);
    }

    #[test]
    fn test_string_index_reaches_selection() {
        use crate::selection::{MonsterSelection, SelectedMonster};

        let mut selection = MonsterSelection::new();
        selection.add(SelectedMonster::new("goblin", "Goblin", 50));
        selection.add(SelectedMonster::new("ogre", "Ogre", 450));

        let index = index_from_f64(number_from_str("1")).unwrap();
        assert_eq!(selection.remove(index).map(|m| m.id), Some("ogre".to_string()));

        // Past the end: parsed fine, removal is a no-op.
        let index = index_from_f64(number_from_str("7")).unwrap();
        assert_eq!(selection.remove(index), None);
        assert_eq!(selection.len(), 1);
    }
}
