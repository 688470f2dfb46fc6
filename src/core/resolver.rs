use crate::core::{alias::AliasTable, role_index::RolePrefixIndex};
use crate::core::types::{ChampionId, Destination, RoleId};
use crate::error::LoadError;
use std::path::Path;

// The resolver owns both lookup tables. It is built once and only read afterwards,
// so request handlers share it behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct Resolver {
    aliases: AliasTable,
    roles: RolePrefixIndex,
}

impl Resolver {
    pub fn new(aliases: AliasTable, roles: RolePrefixIndex) -> Self {
        Self { aliases, roles }
    }

    /// Loads the alias file and builds the built-in role index.
    pub fn from_mapping_file(path: &Path) -> Result<Self, LoadError> {
        let aliases = AliasTable::from_path(path)?;
        let roles = RolePrefixIndex::new();
        log::info!(
            "Loaded {} champion aliases from {} and {} role prefixes",
            aliases.len(),
            path.display(),
            roles.len()
        );
        Ok(Self::new(aliases, roles))
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn roles(&self) -> &RolePrefixIndex {
        &self.roles
    }

    /// Mapped id, or the lowercased input verbatim so champion.gg can try its own match.
    pub fn resolve_champion(&self, text: &str) -> ChampionId {
        match self.aliases.lookup(text) {
            Some(id) => id.clone(),
            None => ChampionId::new(text.to_lowercase()),
        }
    }

    /// Unresolvable roles are dropped rather than reported.
    pub fn resolve_role(&self, text: Option<&str>) -> Option<RoleId> {
        text.and_then(|t| self.roles.lookup(t))
    }

    pub fn resolve(&self, champion: &str, role: Option<&str>) -> Destination {
        Destination::new(self.resolve_champion(champion), self.resolve_role(role))
    }
}
