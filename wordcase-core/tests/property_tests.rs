//! Property-based tests for segmentation and conversion

use proptest::prelude::*;
use wordcase_core::*;

fn converter() -> Converter {
    Converter::new()
}

proptest! {
    #[test]
    fn words_are_non_empty_letter_runs(input in "\\PC*") {
        for word in split_words(&input) {
            prop_assert!(!word.is_empty());
            prop_assert!(word.chars().all(is_letter));
        }
    }

    #[test]
    fn words_preserve_every_letter_in_order(input in "\\PC*") {
        let letters: String = input.chars().filter(|&c| is_letter(c)).collect();
        let joined: String = split_words(&input).collect();
        prop_assert_eq!(joined, letters);
    }

    #[test]
    fn no_letters_converts_to_empty(input in "[0-9 _.,!?/\\-]*") {
        let converter = converter();
        for style in CaseStyle::BUILTIN {
            prop_assert_eq!(converter.convert(&input, &style), "");
        }
    }

    #[test]
    fn delimited_styles_are_stable(words in prop::collection::vec("[a-zA-Z]{1,8}", 1..6)) {
        let input = words.join(" ");
        let converter = converter();
        for style in [CaseStyle::Snake, CaseStyle::Kebab, CaseStyle::Constant] {
            let once = converter.convert(&input, &style);
            let twice = converter.convert(&once, &style);
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn snake_output_has_one_segment_per_word(words in prop::collection::vec("[a-z]{1,8}", 1..6)) {
        let input = words.join("  ");
        let snake = converter().convert(&input, &CaseStyle::Snake);
        prop_assert_eq!(snake.split('_').count(), words.len());
    }
}
