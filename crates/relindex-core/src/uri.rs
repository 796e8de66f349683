//! URI interning.
//!
//! Library and unit source URIs are stored once per package index and
//! referenced everywhere else by [`UriId`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Identifier of an interned URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct UriId(pub u32);

impl UriId {
    /// Create a new URI ID.
    pub fn new(id: u32) -> Self {
        UriId(id)
    }
}

impl std::fmt::Display for UriId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "uri_{}", self.0)
    }
}

/// Append-only URI string table.
///
/// The first call for a string assigns the next sequential id; later calls
/// return the same id.
#[derive(Debug, Clone, Default)]
pub struct UriTable {
    uris: Vec<String>,
    ids: HashMap<String, UriId>,
}

impl UriTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `uri` and return its id.
    pub fn intern(&mut self, uri: &str) -> UriId {
        if let Some(&id) = self.ids.get(uri) {
            return id;
        }
        let id = UriId(self.uris.len() as u32);
        self.uris.push(uri.to_string());
        self.ids.insert(uri.to_string(), id);
        id
    }

    /// Look up an already interned URI.
    pub fn get(&self, uri: &str) -> Option<UriId> {
        self.ids.get(uri).copied()
    }

    /// The URI string for `id`.
    pub fn uri(&self, id: UriId) -> Option<&str> {
        self.uris.get(id.0 as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.uris.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uris.is_empty()
    }

    /// Consume the table, returning URIs in id order.
    pub fn into_uris(self) -> Vec<String> {
        self.uris
    }
}
