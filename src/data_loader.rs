// src/data_loader.rs

use log::{debug, trace};

use crate::error::ConvertError;
use crate::table::{Row, Table};

/// Record parser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Strip whitespace around unquoted cells. Quoted cells are kept verbatim.
    pub trim: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions { trim: true }
    }
}

/// A non-blank input line and its 1-based line number in the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

pub trait DataLoader {
    fn load(&self, text: &str) -> Result<Table, ConvertError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CsvLoader {
    options: ParseOptions,
}

impl CsvLoader {
    pub fn new(options: ParseOptions) -> Self {
        CsvLoader { options }
    }
}

impl DataLoader for CsvLoader {
    fn load(&self, text: &str) -> Result<Table, ConvertError> {
        let lines = filter_blank_lines(text);
        let normalized = normalize(&lines, &self.options)?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            // normalize joins records with `\n` only; a lone `\r` is cell data.
            .terminator(csv::Terminator::Any(b'\n'))
            .from_reader(normalized.as_bytes());

        let mut rows: Vec<Row> = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|err| decode_error(err, &lines))?;
            rows.push(record.iter().map(String::from).collect());
        }

        if rows.is_empty() {
            return Err(ConvertError::EmptyInput);
        }
        debug!("parsed {} records from {} lines", rows.len(), lines.len());
        Ok(Table::new(rows))
    }
}

/// Parses `text` with the default options.
pub fn parse(text: &str) -> Result<Table, ConvertError> {
    CsvLoader::default().load(text)
}

/// Drops lines that are empty or whitespace only, including ones inside a quoted cell.
pub fn filter_blank_lines(text: &str) -> Vec<SourceLine<'_>> {
    let lines: Vec<SourceLine<'_>> = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, text)| SourceLine {
            number: index + 1,
            text,
        })
        .collect();
    trace!(
        "kept {} non-blank lines of {}",
        lines.len(),
        text.lines().count()
    );
    lines
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    FieldStart,
    Unquoted,
    Quoted,
    /// Just saw a quote inside a quoted cell: either an escape or the closing quote.
    QuoteInQuoted,
}

/// Checks the quoting grammar and rewrites the lines so the csv decoder only
/// sees well-formed records with the surrounding whitespace already removed.
fn normalize(lines: &[SourceLine<'_>], options: &ParseOptions) -> Result<String, ConvertError> {
    let mut out = String::with_capacity(lines.iter().map(|line| line.text.len() + 1).sum());
    let mut state = State::FieldStart;
    let mut opened_at = (0, 0);
    // Whitespace seen inside an unquoted cell, held back until we know it is not trailing.
    let mut pending = String::new();

    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        for (offset, c) in line.text.chars().enumerate() {
            let column = offset + 1;
            state = match (state, c) {
                (State::FieldStart, c) if options.trim && c.is_whitespace() => State::FieldStart,
                (State::FieldStart, '"') => {
                    opened_at = (line.number, column);
                    out.push(c);
                    State::Quoted
                }
                (State::FieldStart | State::Unquoted, ',') => {
                    pending.clear();
                    out.push(c);
                    State::FieldStart
                }
                (State::FieldStart | State::Unquoted, '"') => {
                    return Err(ConvertError::parse(
                        line.number,
                        column,
                        "bare quote in non-quoted field",
                    ));
                }
                (State::FieldStart | State::Unquoted, c) if options.trim && c.is_whitespace() => {
                    pending.push(c);
                    State::Unquoted
                }
                (State::FieldStart | State::Unquoted, c) => {
                    out.push_str(&pending);
                    pending.clear();
                    out.push(c);
                    State::Unquoted
                }
                (State::Quoted, '"') => {
                    out.push(c);
                    State::QuoteInQuoted
                }
                (State::Quoted, c) => {
                    out.push(c);
                    State::Quoted
                }
                (State::QuoteInQuoted, '"') => {
                    out.push(c);
                    State::Quoted
                }
                (State::QuoteInQuoted, ',') => {
                    out.push(c);
                    State::FieldStart
                }
                (State::QuoteInQuoted, _) => {
                    return Err(ConvertError::parse(
                        line.number,
                        column,
                        "extraneous or missing quote in quoted field",
                    ));
                }
            };
        }

        // A quoted cell continues onto the next line; anything else ends the record.
        if state != State::Quoted {
            pending.clear();
            state = State::FieldStart;
        }
    }

    if state == State::Quoted {
        let (line, column) = opened_at;
        return Err(ConvertError::parse(line, column, "unterminated quoted field"));
    }
    Ok(out)
}

fn decode_error(err: csv::Error, lines: &[SourceLine<'_>]) -> ConvertError {
    let line = err
        .position()
        .and_then(|pos| usize::try_from(pos.line()).ok())
        .and_then(|line| lines.get(line.saturating_sub(1)))
        .map_or(0, |source| source.number);
    ConvertError::parse(line, 1, err.to_string())
}
