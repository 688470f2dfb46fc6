// File: src/core/alias.rs
use crate::core::types::ChampionId;
use crate::error::LoadError;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Exact lookup from a lowercase alias to a canonical champion id.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    aliases: HashMap<String, ChampionId>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `<alias> <championID>` records from a mapping file.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), path)
    }

    /// Loads records from any line source. `origin` is only used in errors.
    /// Duplicate aliases overwrite earlier ones.
    pub fn from_reader<R: BufRead>(reader: R, origin: &Path) -> Result<Self, LoadError> {
        let mut table = Self::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| LoadError::Io {
                path: origin.to_path_buf(),
                source,
            })?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            match tokens.as_slice() {
                [alias, champion] => table.insert(alias, ChampionId::new(*champion)),
                _ => {
                    return Err(LoadError::Malformed {
                        path: origin.to_path_buf(),
                        line: idx + 1,
                        tokens: tokens.len(),
                    })
                }
            }
        }
        Ok(table)
    }

    pub fn insert(&mut self, alias: &str, champion: ChampionId) {
        self.aliases.insert(alias.to_lowercase(), champion);
    }

    /// Case-insensitive lookup. A miss is a normal outcome.
    pub fn lookup(&self, text: &str) -> Option<&ChampionId> {
        self.aliases.get(&text.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
