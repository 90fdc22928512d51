use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use crate::consts::{MARKER_TOKEN, READ_BLOCK_SIZE, STATEMENT_SEPARATOR};
use crate::ExtractError;

#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Macro name wrapping the address literal
    pub marker: String,
    /// Delimiter between statements
    pub separator: String,
    /// Bytes requested per read; only affects performance
    pub block_size: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            marker: MARKER_TOKEN.to_string(),
            separator: STATEMENT_SEPARATOR.to_string(),
            block_size: READ_BLOCK_SIZE,
        }
    }
}

impl ExtractConfig {
    pub fn validate(&self) -> Result<(), ExtractError> {
        if self.marker.is_empty() {
            return Err(ExtractError::InvalidConfig("marker must not be empty".to_string()));
        }
        if self.separator.is_empty() {
            return Err(ExtractError::InvalidConfig("separator must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Function names keyed by the address found in their annotation.
///
/// A later insert for an address replaces the earlier name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressMap {
    entries: BTreeMap<u64, String>,
}

impl AddressMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `name` at `address`, returning the name it replaced
    pub fn insert(&mut self, address: u64, name: String) -> Option<String> {
        self.entries.insert(address, name)
    }

    pub fn get(&self, address: u64) -> Option<&str> {
        self.entries.get(&address).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, u64, String> {
        self.entries.iter()
    }

    pub fn into_inner(self) -> BTreeMap<u64, String> {
        self.entries
    }
}

impl FromIterator<(u64, String)> for AddressMap {
    fn from_iter<I: IntoIterator<Item = (u64, String)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (address, name) in iter {
            map.insert(address, name);
        }
        map
    }
}

impl<'a> IntoIterator for &'a AddressMap {
    type Item = (&'a u64, &'a String);
    type IntoIter = btree_map::Iter<'a, u64, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for AddressMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (address, name) in &self.entries {
            writeln!(f, "0x{:08x} -> {}", address, name)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Statements pulled from the splitter
    pub statements: usize,
    /// Statements that matched the annotation pattern
    pub matched: usize,
    /// Matches that replaced an existing address
    pub overwritten: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_last_write_wins() {
        let mut map = AddressMap::new();
        assert_eq!(map.insert(0x100000, "first".to_string()), None);
        assert_eq!(
            map.insert(0x100000, "second".to_string()),
            Some("first".to_string())
        );
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(0x100000), Some("second"));
    }

    #[test]
    fn test_display_lists_every_entry() {
        let map: AddressMap = vec![
            (0x1A2B3C, "compute_checksum".to_string()),
            (0x00ABCD, "run".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            map.to_string(),
            "0x0000abcd -> run\n0x001a2b3c -> compute_checksum\n"
        );
    }

    #[test]
    fn test_validate_rejects_empty_marker_and_separator() {
        assert!(ExtractConfig::default().validate().is_ok());

        let config = ExtractConfig {
            marker: String::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ExtractError::InvalidConfig(_))));

        let config = ExtractConfig {
            separator: String::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ExtractError::InvalidConfig(_))));
    }
}
