//! The closed set of class tags a review can be assigned.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A classification outcome. The declaration order is the tie-break order
/// used when two labels score exactly the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "True Pos")]
    TruePos,
    #[serde(rename = "True Neg")]
    TrueNeg,
    #[serde(rename = "Fake Pos")]
    FakePos,
    #[serde(rename = "Fake Neg")]
    FakeNeg,
}

impl Label {
    pub const ALL: [Label; 4] = [Label::TruePos, Label::TrueNeg, Label::FakePos, Label::FakeNeg];

    pub fn as_str(self) -> &'static str {
        match self {
            Label::TruePos => "True Pos",
            Label::TrueNeg => "True Neg",
            Label::FakePos => "Fake Pos",
            Label::FakeNeg => "Fake Neg",
        }
    }

    /// Builds a label from the two whitespace-separated words of a training line.
    pub fn from_words(first: &str, second: &str) -> Option<Label> {
        Label::ALL
            .into_iter()
            .find(|label| label.as_str().split_once(' ') == Some((first, second)))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
