pub mod build;
pub mod compress;
pub mod scan;
pub mod tree;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::options::Options;
use crate::Result;

pub use scan::LineRecord;
pub use tree::Tree;

#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: Options,
}

impl Parser {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn parse(&self, input: &str) -> Result<Value> {
        parse_str(input, &self.options)
    }

    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Value> {
        parse_path(path.as_ref(), &self.options)
    }
}

pub(crate) fn parse_str(input: &str, options: &Options) -> Result<Value> {
    let records = scan::scan_lines(input)?;
    let tree = Tree::build(records)?;
    let constructed = build::construct(&tree, options);
    Ok(compress::compress(constructed, options))
}

pub(crate) fn parse_path(path: &Path, options: &Options) -> Result<Value> {
    let text = fs::read_to_string(path)?;
    parse_str(&text, options)
}

pub(crate) fn from_str<T: DeserializeOwned>(input: &str, options: &Options) -> Result<T> {
    let value = parse_str(input, options)?;
    Ok(serde_json::from_value(value)?)
}

pub(crate) fn from_slice<T: DeserializeOwned>(input: &[u8], options: &Options) -> Result<T> {
    let text = std::str::from_utf8(input)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    from_str(text, options)
}

pub(crate) fn from_reader<T: DeserializeOwned, R: Read>(
    mut reader: R,
    options: &Options,
) -> Result<T> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    from_str(&buf, options)
}
