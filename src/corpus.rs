//! Parsing of training and classification files into examples.
//!
//! Lines are whitespace-separated fields. A training line is
//! `<id> <label word> <label word> <text>...`, a classification line is
//! `<id> <text>...`.

use crate::error::{Error, Result};
use crate::label::Label;
use crate::tokenizer;
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

const TRAINING_MIN_FIELDS: usize = 3;
const TEST_MIN_FIELDS: usize = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingExample {
    pub id: String,
    pub label: Label,
    pub tokens: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestExample {
    pub id: String,
    pub tokens: Vec<String>,
}

pub fn read_training_file<P: AsRef<Path>>(path: P) -> Result<Vec<TrainingExample>> {
    read_training(File::open(path)?)
}

pub fn read_test_file<P: AsRef<Path>>(path: P) -> Result<Vec<TestExample>> {
    read_test(File::open(path)?)
}

pub fn read_training<R: Read>(input: R) -> Result<Vec<TrainingExample>> {
    let mut examples = Vec::new();
    for_each_line(input, TRAINING_MIN_FIELDS, |line, fields| {
        let label = Label::from_words(fields[1], fields[2]).ok_or_else(|| Error::UnknownLabel {
            line,
            label: format!("{} {}", fields[1], fields[2]),
        })?;

        examples.push(TrainingExample {
            id: fields[0].to_string(),
            label,
            tokens: tokenizer::tokenize(fields[3..].iter().copied()),
        });
        Ok(())
    })?;

    Ok(examples)
}

pub fn read_test<R: Read>(input: R) -> Result<Vec<TestExample>> {
    let mut examples = Vec::new();
    for_each_line(input, TEST_MIN_FIELDS, |_, fields| {
        examples.push(TestExample {
            id: fields[0].to_string(),
            tokens: tokenizer::tokenize(fields[1..].iter().copied()),
        });
        Ok(())
    })?;

    Ok(examples)
}

/// Feeds the whitespace-separated fields of every line to `visit` together
/// with its 1-based line number, failing on the first line that has fewer
/// than `min_fields` fields. A blank line has zero fields.
fn for_each_line<R, F>(input: R, min_fields: usize, mut visit: F) -> Result<()>
where
    R: Read,
    F: FnMut(u64, &[&str]) -> Result<()>,
{
    for (index, text) in BufReader::new(input).lines().enumerate() {
        let text = text?;
        let line = index as u64 + 1;

        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() < min_fields {
            return Err(Error::MalformedLine {
                line,
                expected: min_fields,
                found: fields.len(),
            });
        }

        visit(line, &fields)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_training_lines() {
        let input = "07Ws2 True Pos The hotel was GREAT!\n\
                     0aHb Fake Neg\tawful  service, never again\n";
        let examples = read_training(input.as_bytes()).unwrap();

        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0].id, "07Ws2");
        assert_eq!(examples[0].label, Label::TruePos);
        assert_eq!(examples[0].tokens, vec!["hotel", "great"]);
        assert_eq!(examples[1].label, Label::FakeNeg);
        assert_eq!(examples[1].tokens, vec!["awful", "service", "never"]);
    }

    #[test]
    fn test_label_only_training_line_has_no_tokens() {
        let examples = read_training("id1 True Neg\n".as_bytes()).unwrap();
        assert!(examples[0].tokens.is_empty());
    }

    #[test]
    fn test_short_training_line_is_malformed() {
        let input = "a True Pos nice\nb True\n";
        match read_training(input.as_bytes()) {
            Err(Error::MalformedLine { line, expected, found }) => {
                assert_eq!(line, 2);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected malformed line error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let err = read_training("a Maybe Pos nice\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::UnknownLabel { line: 1, .. }));
    }

    #[test]
    fn test_quotes_are_plain_text() {
        let examples = read_test("x1 \"Best stay\" ever\n".as_bytes()).unwrap();
        assert_eq!(examples[0].tokens, vec!["best", "stay", "ever"]);
    }

    #[test]
    fn test_blank_line_is_malformed() {
        let err = read_test("a one\n\nb two\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedLine { line: 2, expected: 1, found: 0 }));

        let err = read_training("1 True Pos good\n   \n2 True Neg bad\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedLine { line: 2, expected: 3, found: 0 }));
    }

    #[test]
    fn test_crlf_and_missing_final_newline() {
        let examples = read_test("a one\r\nb two".as_bytes()).unwrap();
        let ids: Vec<_> = examples.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(examples[0].tokens, vec!["one"]);
    }

    #[test]
    fn test_identifier_only_test_line() {
        let examples = read_test("lonely\n".as_bytes()).unwrap();
        assert_eq!(examples[0].id, "lonely");
        assert!(examples[0].tokens.is_empty());
    }
}
