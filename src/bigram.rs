use std::fmt;

/// An ordered pair of adjacent words with value equality and hashing.
///
/// Keys the bigram frequency table, which arbitrates compound merge/split
/// decisions; it never gates single-token lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bigram {
    pub word1: String,
    pub word2: String,
}

impl Bigram {
    pub fn new(word1: impl Into<String>, word2: impl Into<String>) -> Bigram {
        Bigram {
            word1: word1.into(),
            word2: word2.into(),
        }
    }
}

impl fmt::Display for Bigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word1, self.word2)
    }
}
