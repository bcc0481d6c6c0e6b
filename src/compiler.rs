//! The seam between card text and card programs.
//!
//! Parsing natural-language card text is an external concern; the
//! engine only defines the contract. Whatever implements
//! [`AbilityCompiler`] must uphold one precondition: cards whose text
//! fails to compile never enter a match, so the interpreter never sees
//! a half-compiled program.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::abilities::Program;
use crate::core::{Card, CardKind};

/// Which grammar the text is parsed under.
///
/// Object text compiles to abilities carried by an on-board object;
/// event text compiles to a one-shot program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    Object,
    Event,
}

/// One sentence that failed to parse.
#[derive(Clone, Debug, PartialEq, Error, Serialize, Deserialize)]
#[error("cannot parse `{sentence}`: {reason}")]
pub struct SentenceError {
    pub sentence: String,
    pub reason: String,
}

/// Compilation failure for a card's text, one entry per bad sentence.
#[derive(Clone, Debug, PartialEq, Error, Serialize, Deserialize)]
#[error("{} sentence(s) failed to compile: {}", .failures.len(), FailureList(.failures))]
pub struct CompileError {
    pub failures: Vec<SentenceError>,
}

struct FailureList<'a>(&'a Vec<SentenceError>);

impl fmt::Display for FailureList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

/// Turns card text into programs. Implementations parse sentence by
/// sentence and report every failure, not just the first.
pub trait AbilityCompiler {
    fn compile(&self, text: &str, mode: ParseMode) -> Result<Vec<Program>, CompileError>;
}

/// Compile a card's text under the mode its kind implies, validating it
/// for match entry. Cards without text are trivially valid.
pub fn validate_card(
    compiler: &impl AbilityCompiler,
    card: &Card,
) -> Result<Vec<Program>, CompileError> {
    if card.text.is_empty() {
        return Ok(Vec::new());
    }
    let mode = match card.kind {
        CardKind::Event => ParseMode::Event,
        _ => ParseMode::Object,
    };
    compiler.compile(&card.text, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardId;

    /// Rejects every sentence; enough to exercise the contract.
    struct RejectAll;

    impl AbilityCompiler for RejectAll {
        fn compile(&self, text: &str, _mode: ParseMode) -> Result<Vec<Program>, CompileError> {
            Err(CompileError {
                failures: text
                    .split('.')
                    .filter(|s| !s.trim().is_empty())
                    .map(|s| SentenceError {
                        sentence: s.trim().to_string(),
                        reason: "unsupported".to_string(),
                    })
                    .collect(),
            })
        }
    }

    #[test]
    fn test_textless_card_is_valid() {
        let card = Card::new(CardId(1), "Plain", CardKind::Robot, 1);
        assert!(validate_card(&RejectAll, &card).unwrap().is_empty());
    }

    #[test]
    fn test_failures_reported_per_sentence() {
        let card = Card::new(CardId(1), "Wordy", CardKind::Event, 1)
            .with_text("Do a thing. Do another thing.");

        let err = validate_card(&RejectAll, &card).unwrap_err();
        assert_eq!(err.failures.len(), 2);
        assert!(err.to_string().contains("2 sentence(s)"));
    }
}
