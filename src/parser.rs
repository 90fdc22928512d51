use std::io::{self, Read};

use log::{debug, info, warn};
use regex::Regex;

use crate::consts::{MAX_HEX_DIGITS, MIN_HEX_DIGITS};
use crate::model::{AddressMap, ExtractConfig, ExtractStats};
use crate::splitter::Statements;
use crate::utils::{normalize_line_breaks, parse_hex_address};
use crate::ExtractError;

/// Matches `<marker>(0x......)` followed later in the same statement by a
/// function declaration `name(...)`.
///
/// The pattern is anchored at the start of the statement only, and both free
/// text spans are greedy: with several candidates in one statement the last
/// address that still has a declaration after it wins, paired with the last
/// declaration.
pub struct AddressParser {
    pattern: Regex,
}

impl AddressParser {
    pub fn new(marker: &str) -> Result<Self, ExtractError> {
        let pattern = Regex::new(&format!(
            r"^.*{}\((0x[0-9A-Fa-f]{{{},{}}})\).* ([_a-zA-Z][_a-zA-Z0-9]*)\(.*\)",
            regex::escape(marker),
            MIN_HEX_DIGITS,
            MAX_HEX_DIGITS,
        ))?;

        Ok(Self { pattern })
    }

    pub fn with_config(config: &ExtractConfig) -> Result<Self, ExtractError> {
        config.validate()?;
        Self::new(&config.marker)
    }

    /// Returns the annotated address and function name, if the statement has one
    pub fn parse_statement(&self, statement: &str) -> Option<(u64, String)> {
        let statement = normalize_line_breaks(statement);
        let captures = self.pattern.captures(&statement)?;

        let address = parse_hex_address(captures.get(1)?.as_str())?;
        let name = captures.get(2)?.as_str().to_string();
        Some((address, name))
    }

    /// Streams `(address, name)` pairs in the order their statements appear
    pub fn entries<'a, R: Read + 'a>(
        &'a self,
        reader: R,
        config: &ExtractConfig,
    ) -> impl Iterator<Item = io::Result<(u64, String)>> + 'a {
        Statements::with_block_size(reader, &config.separator, config.block_size).filter_map(
            move |statement| match statement {
                Ok(statement) => self.parse_statement(&statement).map(Ok),
                Err(e) => Some(Err(e)),
            },
        )
    }

    pub fn extract_from_reader<R: Read>(
        &self,
        reader: R,
        config: &ExtractConfig,
    ) -> Result<(AddressMap, ExtractStats), ExtractError> {
        let mut addresses = AddressMap::new();
        let mut stats = ExtractStats::default();

        let statements = Statements::with_block_size(reader, &config.separator, config.block_size);
        for statement in statements {
            let statement = statement?;
            stats.statements += 1;

            let Some((address, name)) = self.parse_statement(&statement) else {
                continue;
            };
            stats.matched += 1;

            debug!("Registering function '{}' at 0x{:08x}", name, address);
            if let Some(previous) = addresses.get(address) {
                stats.overwritten += 1;
                warn!(
                    "Function '{}' has same address as '{}' : 0x{:08x}",
                    name, previous, address
                );
            }
            addresses.insert(address, name);
        }

        info!(
            "Scanned {} statements, matched {}, {} unique addresses ({} overwritten)",
            stats.statements,
            stats.matched,
            addresses.len(),
            stats.overwritten
        );

        Ok((addresses, stats))
    }
}
