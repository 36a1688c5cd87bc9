pub mod constants;
pub mod error;
pub mod options;
pub mod parse;

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use crate::error::Error;
pub use crate::options::Options;
pub use crate::parse::{LineRecord, Parser};

pub type Result<T> = std::result::Result<T, Error>;

pub fn parse(input: &str) -> Result<Value> {
    parse_with_options(input, &Options::default())
}

pub fn parse_with_options(input: &str, options: &Options) -> Result<Value> {
    parse::parse_str(input, options)
}

pub fn parse_file(path: impl AsRef<Path>) -> Result<Value> {
    parse_file_with_options(path, &Options::default())
}

pub fn parse_file_with_options(path: impl AsRef<Path>, options: &Options) -> Result<Value> {
    parse::parse_path(path.as_ref(), options)
}

pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T> {
    from_str_with_options(input, &Options::default())
}

pub fn from_str_with_options<T: DeserializeOwned>(input: &str, options: &Options) -> Result<T> {
    parse::from_str(input, options)
}

pub fn from_slice<T: DeserializeOwned>(input: &[u8]) -> Result<T> {
    from_slice_with_options(input, &Options::default())
}

pub fn from_slice_with_options<T: DeserializeOwned>(
    input: &[u8],
    options: &Options,
) -> Result<T> {
    parse::from_slice(input, options)
}

pub fn from_reader<T: DeserializeOwned, R: Read>(reader: R) -> Result<T> {
    from_reader_with_options(reader, &Options::default())
}

pub fn from_reader_with_options<T: DeserializeOwned, R: Read>(
    reader: R,
    options: &Options,
) -> Result<T> {
    parse::from_reader(reader, options)
}
