//! Property tests for the lexer over arbitrary input.

use oro::{lookup_identifier, Lexer, TokenKind};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        ..ProptestConfig::default()
    })]

    /// Every input drains to a sequence ending in exactly one `Eof`.
    #[test]
    fn prop_total(src in any::<String>()) {
        let tokens = Lexer::new(&src).scan_all();
        let last = tokens.last().copied();
        prop_assert_eq!(last.map(|t| (t.kind, t.text)), Some((TokenKind::Eof, "")));
        prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
    }

    /// Tokens are ordered, non-overlapping, and their spans slice out their text.
    #[test]
    fn prop_spans_cover_text(src in "[ -~\t\n\r]{0,64}") {
        let mut prev_hi = 0;
        for t in Lexer::new(&src).scan_all() {
            prop_assert!(t.span.lo() >= prev_hi);
            prop_assert_eq!(&src[t.span.lo()..t.span.hi()], t.text);
            prev_hi = t.span.hi();
        }
        prop_assert_eq!(prev_hi, src.len());
    }

    /// An identifier-shaped run is always consumed whole.
    #[test]
    fn prop_longest_match(word in "[A-Za-z_][A-Za-z0-9_]{0,24}") {
        let tokens = Lexer::new(&word).scan_all();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].text, word.as_str());
        prop_assert_eq!(tokens[0].kind, lookup_identifier(&word));
    }

    /// Digit runs become a single `Number`.
    #[test]
    fn prop_digit_runs(digits in "[0-9]{1,24}") {
        let tokens = Lexer::new(&digits).scan_all();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(tokens[0].text, digits.as_str());
    }
}
