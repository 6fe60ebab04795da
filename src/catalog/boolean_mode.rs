//! A small boolean-mode query parser and matcher.
//!
//! Supported grammar:
//!
//! ```text
//! query  := clause*
//! clause := ('+' | '-')? (term | '(' clause* ')')
//! term   := word '*'?
//! ```
//!
//! Top-level clauses are optional unless marked `+` (required) or `-`
//! (excluded). Inside a group the terms are alternatives: a group matches
//! when any of its non-excluded clauses matches and none of its excluded
//! clauses does. Any other reserved character is a syntax error.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::{GlaiveError, Result};

/// Presence modifier of a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Optional,
    Required,
    Excluded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClauseKind {
    Term { text: String, prefix: bool },
    Group(Vec<Clause>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub modifier: Modifier,
    pub kind: ClauseKind,
}

/// A parsed boolean-mode query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanModeQuery {
    clauses: Vec<Clause>,
}

impl BooleanModeQuery {
    /// Parse a boolean-mode query string.
    pub fn parse(input: &str) -> Result<Self> {
        let mut parser = Parser {
            input,
            chars: input.char_indices().peekable(),
        };
        let clauses = parser.parse_clauses(false)?;
        Ok(Self { clauses })
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Score a tokenized, lower-cased text against the query.
    ///
    /// Returns `None` when the text does not match, otherwise the number of
    /// top-level clauses that matched.
    pub fn score(&self, words: &[String]) -> Option<usize> {
        let mut matched = 0;
        for clause in &self.clauses {
            let hit = clause_matches(clause, words);
            match clause.modifier {
                Modifier::Required if !hit => return None,
                Modifier::Excluded if hit => return None,
                Modifier::Excluded => {}
                _ if hit => matched += 1,
                _ => {}
            }
        }
        (matched > 0).then_some(matched)
    }
}

/// Split text into lower-cased alphanumeric words.
pub fn index_words(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn clause_matches(clause: &Clause, words: &[String]) -> bool {
    match &clause.kind {
        ClauseKind::Term { text, prefix } => words.iter().any(|word| {
            if *prefix {
                word.starts_with(text.as_str())
            } else {
                word == text
            }
        }),
        ClauseKind::Group(children) => {
            let mut any = false;
            for child in children {
                let hit = clause_matches(child, words);
                match child.modifier {
                    Modifier::Excluded if hit => return false,
                    Modifier::Excluded => {}
                    _ => any |= hit,
                }
            }
            any
        }
    }
}

struct Parser<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl Parser<'_> {
    fn error(&self, position: usize, message: &str) -> GlaiveError {
        GlaiveError::query_syntax(format!(
            "{message} at offset {position} in '{}'",
            self.input
        ))
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
    }

    fn parse_clauses(&mut self, nested: bool) -> Result<Vec<Clause>> {
        let mut clauses = Vec::new();
        loop {
            self.skip_whitespace();
            match self.chars.peek().copied() {
                None if nested => {
                    return Err(self.error(self.input.len(), "unclosed parenthesis"));
                }
                None => return Ok(clauses),
                Some((_, ')')) if nested => {
                    self.chars.next();
                    return Ok(clauses);
                }
                Some((position, ')')) => {
                    return Err(self.error(position, "unbalanced closing parenthesis"));
                }
                Some(_) => clauses.push(self.parse_clause()?),
            }
        }
    }

    fn parse_clause(&mut self) -> Result<Clause> {
        let modifier = match self.chars.next_if(|(_, c)| *c == '+' || *c == '-') {
            Some((_, '+')) => Modifier::Required,
            Some(_) => Modifier::Excluded,
            None => Modifier::Optional,
        };

        match self.chars.peek().copied() {
            Some((_, '(')) => {
                self.chars.next();
                let children = self.parse_clauses(true)?;
                if children.is_empty() {
                    let position = self.position();
                    return Err(self.error(position, "empty group"));
                }
                self.expect_boundary()?;
                Ok(Clause {
                    modifier,
                    kind: ClauseKind::Group(children),
                })
            }
            Some((_, c)) if is_word_char(c) => {
                let mut text = String::new();
                while let Some((_, c)) = self.chars.next_if(|(_, c)| is_word_char(*c)) {
                    text.extend(c.to_lowercase());
                }
                let prefix = self.chars.next_if(|(_, c)| *c == '*').is_some();
                self.expect_boundary()?;
                Ok(Clause {
                    modifier,
                    kind: ClauseKind::Term { text, prefix },
                })
            }
            Some((position, c)) => Err(self.error(position, &format!("unexpected '{c}'"))),
            None => Err(self.error(self.input.len(), "dangling operator")),
        }
    }

    /// A clause must be followed by whitespace, a closing parenthesis or the end.
    fn expect_boundary(&mut self) -> Result<()> {
        match self.chars.peek().copied() {
            None => Ok(()),
            Some((_, c)) if c.is_whitespace() || c == ')' => Ok(()),
            Some((position, c)) => Err(self.error(position, &format!("unexpected '{c}'"))),
        }
    }

    fn position(&mut self) -> usize {
        self.chars
            .peek()
            .map(|(position, _)| *position)
            .unwrap_or(self.input.len())
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
