use std::fmt::Display;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::{Feature, FeatureExtractor, FeatureSet, TokenContext};

bitflags! {
    /// Character classes seen while scanning a token.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct CharClass: u8 {
        const UPPER = 0x01;
        const LOWER = 0x02;
        const ALPHA = 0x04;
        const DIGIT = 0x08;
        const OTHER = 0x10;
    }
}

impl CharClass {
    pub fn of(c: char) -> Self {
        let mut class = Self::empty();
        if c.is_uppercase() {
            class |= Self::UPPER;
        }
        if c.is_lowercase() {
            class |= Self::LOWER;
        }
        if c.is_alphabetic() {
            class |= Self::ALPHA;
        }
        if c.is_numeric() {
            class |= Self::DIGIT;
        }
        if class.is_empty() {
            class = Self::OTHER;
        }
        class
    }

    pub fn scan(s: &str) -> Self {
        s.chars().fold(Self::empty(), |acc, c| acc | Self::of(c))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapitalType {
    AllUpper,
    AllLower,
    InitialUpper,
    Mixed,
    /// No cased letter at all (digits, punctuation, caseless scripts).
    NoLetters,
}

impl CapitalType {
    pub fn of(text: &str) -> Self {
        let mut chars = text.chars();
        let head = match chars.next() {
            Some(c) => CharClass::of(c),
            None => return Self::NoLetters,
        };
        let rest = chars.fold(CharClass::empty(), |acc, c| acc | CharClass::of(c));
        let all = head | rest;
        if !all.intersects(CharClass::UPPER | CharClass::LOWER) {
            Self::NoLetters
        } else if !all.contains(CharClass::LOWER) {
            Self::AllUpper
        } else if !all.contains(CharClass::UPPER) {
            Self::AllLower
        } else if head.contains(CharClass::UPPER) && !rest.contains(CharClass::UPPER) {
            Self::InitialUpper
        } else {
            Self::Mixed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllUpper => "all-upper",
            Self::AllLower => "all-lower",
            Self::InitialUpper => "initial-upper",
            Self::Mixed => "mixed",
            Self::NoLetters => "no-letters",
        }
    }
}

impl Display for CapitalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumericType {
    AllDigits,
    DigitAndAlpha,
    /// Digits mixed with punctuation or symbols only, e.g. `3.14` or `1,000`.
    SomeDigits,
    NoDigits,
}

impl NumericType {
    pub fn of(text: &str) -> Self {
        let class = CharClass::scan(text);
        if !class.contains(CharClass::DIGIT) {
            Self::NoDigits
        } else if class.contains(CharClass::ALPHA) {
            Self::DigitAndAlpha
        } else if class.contains(CharClass::OTHER) {
            Self::SomeDigits
        } else {
            Self::AllDigits
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllDigits => "all-digits",
            Self::DigitAndAlpha => "digit-and-alpha",
            Self::SomeDigits => "some-digits",
            Self::NoDigits => "no-digits",
        }
    }
}

impl Display for NumericType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rightmost `len` characters of `text`, or all of it when shorter.
pub fn suffix(text: &str, len: usize) -> &str {
    if len == 0 {
        return &text[text.len()..];
    }
    match text.char_indices().rev().nth(len - 1) {
        Some((i, _)) => &text[i..],
        None => text,
    }
}

/// Lexical features of a single token's surface text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenFeatureExtractor {
    suffix_lengths: Vec<usize>,
}

impl Default for TokenFeatureExtractor {
    fn default() -> Self {
        Self::new(vec![2, 3])
    }
}

impl TokenFeatureExtractor {
    pub fn new(suffix_lengths: Vec<usize>) -> Self {
        Self { suffix_lengths }
    }

    /// Emits, in order: `text`, `lower`, `capital-type`, `numeric-type`, then
    /// one `suffix-<n>` per configured length.
    pub fn features(&self, text: &str) -> FeatureSet {
        let mut features = Vec::with_capacity(4 + self.suffix_lengths.len());
        features.push(Feature::new("text", text));
        features.push(Feature::new("lower", text.to_lowercase()));
        features.push(Feature::new("capital-type", CapitalType::of(text).as_str()));
        features.push(Feature::new("numeric-type", NumericType::of(text).as_str()));
        for &n in &self.suffix_lengths {
            features.push(Feature::new(format!("suffix-{n}"), suffix(text, n)));
        }
        features
    }
}

impl FeatureExtractor for TokenFeatureExtractor {
    fn extract(&self, token: &TokenContext<'_>) -> FeatureSet {
        self.features(token.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value<'a>(features: &'a FeatureSet, name: &str) -> &'a str {
        &features.iter().find(|f| f.name == name).expect("missing feature").value
    }

    #[test]
    fn apple123() {
        let features = TokenFeatureExtractor::default().features("Apple123");
        let names: Vec<_> = features.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            ["text", "lower", "capital-type", "numeric-type", "suffix-2", "suffix-3"]
        );
        assert_eq!(value(&features, "text"), "Apple123");
        assert_eq!(value(&features, "lower"), "apple123");
        assert_eq!(value(&features, "capital-type"), "initial-upper");
        assert_eq!(value(&features, "numeric-type"), "digit-and-alpha");
        assert_eq!(value(&features, "suffix-2"), "23");
        assert_eq!(value(&features, "suffix-3"), "123");
    }

    #[test]
    fn deterministic() {
        let extractor = TokenFeatureExtractor::default();
        for text in ["", "a", "Über", "東京", "McDonald's", "1999"] {
            assert_eq!(extractor.features(text), extractor.features(text));
        }
    }

    #[test]
    fn capital_type() {
        for (text, expected) in [
            ("USA", CapitalType::AllUpper),
            ("A", CapitalType::AllUpper),
            ("dog", CapitalType::AllLower),
            ("Dog", CapitalType::InitialUpper),
            ("Ölçü", CapitalType::InitialUpper),
            ("iPhone", CapitalType::Mixed),
            ("McDonald", CapitalType::Mixed),
            ("1st", CapitalType::AllLower),
            ("42", CapitalType::NoLetters),
            ("東京", CapitalType::NoLetters),
            ("", CapitalType::NoLetters),
        ] {
            assert_eq!(CapitalType::of(text), expected, "{text}");
        }
    }

    #[test]
    fn numeric_type() {
        for (text, expected) in [
            ("1999", NumericType::AllDigits),
            ("4x4", NumericType::DigitAndAlpha),
            ("3.14", NumericType::SomeDigits),
            ("1,000", NumericType::SomeDigits),
            ("dog", NumericType::NoDigits),
            ("", NumericType::NoDigits),
        ] {
            assert_eq!(NumericType::of(text), expected, "{text}");
        }
    }

    #[test]
    fn short_and_non_ascii_suffix() {
        assert_eq!(suffix("a", 2), "a");
        assert_eq!(suffix("", 3), "");
        assert_eq!(suffix("naïve", 3), "ïve");
        assert_eq!(suffix("東京都", 2), "京都");
        assert_eq!(suffix("dog", 0), "");
        let features = TokenFeatureExtractor::default().features("");
        assert_eq!(features.len(), 6);
        assert_eq!(value(&features, "suffix-3"), "");
    }

    #[test]
    fn custom_suffixes() {
        let features = TokenFeatureExtractor::new(vec![1, 4]).features("running");
        assert_eq!(value(&features, "suffix-1"), "g");
        assert_eq!(value(&features, "suffix-4"), "ning");
        assert!(features.iter().all(|f| f.name != "suffix-2"));
    }
}
