// src/core/types.rs
use serde::Serialize;
use std::fmt;

pub const CHAMPION_GG_BASE_URL: &str = "//champion.gg";
pub const CHAMPION_GG_CHAMPION_URL_SUBPATH: &str = "/champion/";

/// Canonical champion identifier, used verbatim in the destination path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ChampionId(String);

impl ChampionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChampionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The closed set of roles champion.gg knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RoleId {
    Top,
    Jungle,
    Middle,
    #[serde(rename = "ADC")]
    Adc,
    Support,
}

impl RoleId {
    /// The path segment champion.gg uses for this role.
    pub fn as_str(self) -> &'static str {
        match self {
            RoleId::Top => "Top",
            RoleId::Jungle => "Jungle",
            RoleId::Middle => "Middle",
            RoleId::Adc => "ADC",
            RoleId::Support => "Support",
        }
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved champion page, optionally narrowed to a role.
/// `Display` renders the raw destination, e.g. `//champion.gg/champion/Ahri/Middle`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Destination {
    pub champion: ChampionId,
    pub role: Option<RoleId>,
}

impl Destination {
    pub fn new(champion: ChampionId, role: Option<RoleId>) -> Self {
        Self { champion, role }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            CHAMPION_GG_BASE_URL, CHAMPION_GG_CHAMPION_URL_SUBPATH, self.champion
        )?;
        if let Some(role) = self.role {
            write!(f, "/{}", role)?;
        }
        Ok(())
    }
}
