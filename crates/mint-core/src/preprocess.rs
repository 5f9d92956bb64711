use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default selection cleanup
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        let text: String = text.nfc().collect();

        // Selections spanning several lines come back with hard breaks
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(DefaultPreprocessor.process(""), "");
        assert_eq!(DefaultPreprocessor.process(" \n\t "), "");
    }

    #[test]
    fn collapses_line_breaks() {
        assert_eq!(DefaultPreprocessor.process("  hello\n   world \r\n"), "hello world");
    }

    #[test]
    fn composes_combining_marks() {
        // "й" as и + combining breve
        assert_eq!(DefaultPreprocessor.process("\u{0438}\u{0306}"), "\u{0439}");
    }
}
