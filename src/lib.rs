// src/lib.rs

//! Converts CSV text into an aligned Markdown table.
//!
//! The pipeline is [`data_loader`] (text to [`Table`]) followed by
//! [`markdown`] (table to markup). [`run`] wires both to caller-supplied
//! streams so the binary stays a thin wrapper around it.

pub mod data_loader;
pub mod error;
pub mod markdown;
pub mod table;

use std::io::{Read, Write};

use log::debug;

pub use data_loader::{CsvLoader, DataLoader, ParseOptions};
pub use error::ConvertError;
pub use markdown::{ColumnOverflow, RenderOptions};
pub use table::{Row, Table};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub parse: ParseOptions,
    pub render: RenderOptions,
}

/// Parses and renders `text` without touching any stream.
pub fn convert(text: &str, options: &Options) -> Result<String, ConvertError> {
    let table = CsvLoader::new(options.parse).load(text)?;
    markdown::render(&table, &options.render)
}

/// Reads all of `input`, converts it, and writes the markup to `output`.
/// Nothing is written unless the whole conversion succeeds.
pub fn run<R: Read, W: Write>(
    mut input: R,
    mut output: W,
    options: &Options,
) -> Result<(), ConvertError> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .map_err(|err| ConvertError::stream("read stdin", err))?;
    debug!("read {} bytes of input", text.len());

    let markup = convert(&text, options)?;

    output
        .write_all(markup.as_bytes())
        .and_then(|()| output.flush())
        .map_err(|err| ConvertError::stream("write stdout", err))?;
    Ok(())
}
