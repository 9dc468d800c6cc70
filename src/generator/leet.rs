//! Fixed leet substitution table

/// Substitute characters for a lowercase letter.
///
/// Returns an empty slice for letters with no leet equivalent. The table is
/// a process-wide constant; substitution order matters only for reproducible
/// iteration, not for set membership.
pub fn leet_substitutes(c: char) -> &'static [char] {
    match c {
        'a' => &['4', '@'],
        'b' => &['8'],
        'e' => &['3'],
        'i' => &['1', '!'],
        'l' => &['1'],
        'o' => &['0'],
        's' => &['5', '$'],
        't' => &['7'],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_letters() {
        assert_eq!(leet_substitutes('a'), &['4', '@']);
        assert_eq!(leet_substitutes('s'), &['5', '$']);
        assert_eq!(leet_substitutes('t'), &['7']);
    }

    #[test]
    fn test_unmapped_letters() {
        assert!(leet_substitutes('u').is_empty());
        assert!(leet_substitutes('z').is_empty());
        assert!(leet_substitutes('4').is_empty());
    }
}
