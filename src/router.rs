//! Maps a decoded request path onto a destination.

use crate::core::resolver::Resolver;
use crate::core::types::{Destination, CHAMPION_GG_BASE_URL};

/// A request path split into the pieces the resolver cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`: straight to the site root.
    Home,
    /// `/<champion>[/<role>]`, anything after the second segment is ignored.
    Search {
        champion: String,
        role: Option<String>,
    },
}

impl Route {
    /// Parses a decoded path. Query strings are dropped.
    pub fn parse(path: &str) -> Self {
        let path = path.split_once('?').map_or(path, |(p, _)| p);
        let path = path.strip_prefix('/').unwrap_or(path);
        Self::from_segments(path.split('/'))
    }

    /// Builds a route from already-split, already-decoded path segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sections = segments.into_iter().map(|s| -> String { s.into() });
        let champion = match sections.next() {
            Some(first) => first,
            None => return Route::Home,
        };
        let role = sections.next().filter(|s| !s.is_empty());
        if champion.is_empty() && role.is_none() {
            return Route::Home;
        }
        Route::Search { champion, role }
    }

    /// `None` for the home route, which bypasses the resolver.
    pub fn resolve(&self, resolver: &Resolver) -> Option<Destination> {
        match self {
            Route::Home => None,
            Route::Search { champion, role } => Some(resolver.resolve(champion, role.as_deref())),
        }
    }

    /// The raw destination string for this route.
    pub fn destination(&self, resolver: &Resolver) -> String {
        self.resolve(resolver)
            .map_or_else(|| CHAMPION_GG_BASE_URL.to_string(), |dest| dest.to_string())
    }
}
