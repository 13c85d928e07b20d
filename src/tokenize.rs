//! Word tokenizer shared by the scorer and the retrieval service.

/// Lowercase `text` and split it into alphanumeric word tokens.
///
/// Runs of alphanumeric characters are tokens; everything else separates
/// them. Empty input yields an empty vector.
///
/// ```rust
/// use tutor_context::tokenize::tokenize;
///
/// assert_eq!(tokenize("Volume of a CUBE!"), ["volume", "of", "a", "cube"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits_on_punctuation() {
        assert_eq!(
            tokenize("What is the Volume, exactly?"),
            ["what", "is", "the", "volume", "exactly"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_separators_only() {
        assert!(tokenize(" ,.!?\n\t--- ").is_empty());
    }

    #[test]
    fn test_digits_kept() {
        assert_eq!(tokenize("side 3 cm"), ["side", "3", "cm"]);
    }

    #[test]
    fn test_unicode_case_folding() {
        assert_eq!(tokenize("Würfel VOLUMEN"), ["würfel", "volumen"]);
    }

    #[test]
    fn test_deterministic() {
        let a = tokenize("A cube has six square faces.");
        let b = tokenize("A cube has six square faces.");
        assert_eq!(a, b);
    }
}
