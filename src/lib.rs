use std::fs::File;
use std::io::Read;
use std::path::Path;

pub mod consts;
pub mod error;
pub mod model;
pub mod parser;
pub mod splitter;
pub mod utils;

pub use error::ExtractError;
pub use model::{AddressMap, ExtractConfig, ExtractStats};
pub use parser::AddressParser;
pub use splitter::{split_statements, Statements};

/// Extracts `ADDR(0x...)`-annotated function addresses from a source file
pub fn extract_addresses(file_path: &Path) -> Result<AddressMap, ExtractError> {
    extract_addresses_with_config(file_path, None)
}

/// Extracts annotated function addresses using a custom marker, separator or block size
pub fn extract_addresses_with_config(
    file_path: &Path,
    config: Option<ExtractConfig>,
) -> Result<AddressMap, ExtractError> {
    let config = config.unwrap_or_default();
    let parser = AddressParser::with_config(&config)?;

    let file = File::open(file_path).map_err(|source| ExtractError::FileOpenError {
        path: file_path.to_path_buf(),
        source,
    })?;

    let (addresses, _) = parser.extract_from_reader(file, &config)?;
    Ok(addresses)
}

/// Extracts annotated function addresses from any reader, such as an open file or a byte slice
pub fn extract_addresses_from_reader<R: Read>(
    reader: R,
    config: Option<ExtractConfig>,
) -> Result<AddressMap, ExtractError> {
    let config = config.unwrap_or_default();
    let parser = AddressParser::with_config(&config)?;
    let (addresses, _) = parser.extract_from_reader(reader, &config)?;
    Ok(addresses)
}

/// Extracts annotated function addresses from in-memory source text
pub fn extract_addresses_from_str(text: &str) -> Result<AddressMap, ExtractError> {
    extract_addresses_from_reader(text.as_bytes(), None)
}
