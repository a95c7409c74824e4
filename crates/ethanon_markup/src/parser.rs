//! Scanner for the sectioned markup format

use thiserror::Error;

use crate::{Document, Section};

/// Errors raised while scanning a document. All are fatal to the parse;
/// the line number is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: expected '{{' after section name '{name}'")]
    ExpectedSectionBody { line: usize, name: String },

    #[error("line {line}: expected '=' after key '{key}'")]
    ExpectedEquals { line: usize, key: String },

    #[error("line {line}: value for key '{key}' is missing its terminating ';'")]
    UnterminatedValue { line: usize, key: String },

    #[error("line {line}: unterminated quoted value")]
    UnterminatedQuote { line: usize },

    #[error("line {line}: unterminated block comment")]
    UnterminatedComment { line: usize },

    #[error("line {line}: section '{name}' is missing its closing '}}'")]
    UnterminatedSection { line: usize, name: String },

    #[error("line {line}: unexpected character '{found}'")]
    Unexpected { line: usize, found: char },
}

pub(crate) fn parse(input: &str) -> Result<Document, ParseError> {
    Scanner::new(input).document()
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Scanner {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek2(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Skip whitespace and `//`/`/* */` comments.
    fn skip_trivia(&mut self) -> Result<(), ParseError> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('/') => match self.peek2() {
                    Some('/') => {
                        while let Some(c) = self.bump() {
                            if c == '\n' {
                                break;
                            }
                        }
                    }
                    Some('*') => {
                        let start = self.line;
                        self.bump();
                        self.bump();
                        loop {
                            match self.bump() {
                                Some('*') if self.peek() == Some('/') => {
                                    self.bump();
                                    break;
                                }
                                Some(_) => {}
                                None => {
                                    return Err(ParseError::UnterminatedComment { line: start })
                                }
                            }
                        }
                    }
                    // a lone '/' starts an ordinary token
                    _ => return Ok(()),
                },
                _ => return Ok(()),
            }
        }
    }

    /// Read a section name or key: any run of characters up to whitespace,
    /// punctuation or a comment opener. Callers guarantee the first
    /// character is valid, so the result is never empty.
    fn token(&mut self) -> String {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if c.is_whitespace() || matches!(c, '{' | '}' | '=' | ';' | '"') {
                break;
            }
            if c == '/' && matches!(self.peek2(), Some('/' | '*')) {
                break;
            }
            out.push(c);
            self.bump();
        }
        out
    }

    fn document(mut self) -> Result<Document, ParseError> {
        let mut document = Document::default();
        loop {
            self.skip_trivia()?;
            let Some(c) = self.peek() else {
                return Ok(document);
            };
            if matches!(c, '{' | '}' | '=' | ';' | '"') {
                return Err(ParseError::Unexpected {
                    line: self.line,
                    found: c,
                });
            }
            let name = self.token();
            self.skip_trivia()?;
            if self.peek() != Some('{') {
                return Err(ParseError::ExpectedSectionBody {
                    line: self.line,
                    name,
                });
            }
            self.bump();
            let mut section = document.sections.remove(&name).unwrap_or_default();
            self.section_body(&name, &mut section)?;
            document.sections.insert(name, section);
        }
    }

    fn section_body(&mut self, name: &str, section: &mut Section) -> Result<(), ParseError> {
        loop {
            self.skip_trivia()?;
            match self.peek() {
                None => {
                    return Err(ParseError::UnterminatedSection {
                        line: self.line,
                        name: name.to_owned(),
                    })
                }
                Some('}') => {
                    self.bump();
                    return Ok(());
                }
                Some(c) if matches!(c, '{' | '=' | ';' | '"') => {
                    return Err(ParseError::Unexpected {
                        line: self.line,
                        found: c,
                    })
                }
                Some(_) => {
                    let key = self.token();
                    self.skip_trivia()?;
                    if self.peek() != Some('=') {
                        return Err(ParseError::ExpectedEquals {
                            line: self.line,
                            key,
                        });
                    }
                    self.bump();
                    let value = self.value(&key)?;
                    section.entries.insert(key, value);
                }
            }
        }
    }

    /// Read the value between `=` and `;`. Quoted values are kept verbatim;
    /// raw values are trimmed and may span lines.
    fn value(&mut self, key: &str) -> Result<String, ParseError> {
        self.skip_trivia()?;
        if self.peek() == Some('"') {
            let start = self.line;
            self.bump();
            let mut out = String::new();
            loop {
                match self.bump() {
                    Some('"') => break,
                    Some(c) => out.push(c),
                    None => return Err(ParseError::UnterminatedQuote { line: start }),
                }
            }
            self.skip_trivia()?;
            match self.peek() {
                Some(';') => {
                    self.bump();
                    Ok(out)
                }
                Some(c) => Err(ParseError::Unexpected {
                    line: self.line,
                    found: c,
                }),
                None => Err(ParseError::UnterminatedValue {
                    line: self.line,
                    key: key.to_owned(),
                }),
            }
        } else {
            let mut out = String::new();
            loop {
                match self.peek() {
                    Some(';') => {
                        self.bump();
                        return Ok(out.trim().to_owned());
                    }
                    Some('}') | None => {
                        return Err(ParseError::UnterminatedValue {
                            line: self.line,
                            key: key.to_owned(),
                        })
                    }
                    Some(_) => {
                        // unwrap: peek above proved a character is available
                        out.push(self.bump().unwrap());
                    }
                }
            }
        }
    }
}
