//! Character records as supplied by the external catalog.
//!
//! The engine never mutates a record. Only `id`, `name` and `image` are
//! read by the draft; the descriptive fields ride along for rendering.

use serde::{Deserialize, Serialize};

use crate::core::CharacterId;

/// A named place reference (`origin`, `location`) in the catalog JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaceRef {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One character from the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: CharacterId,
    pub name: String,
    pub image: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<PlaceRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<PlaceRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl CharacterRecord {
    /// Create a record with only the fields the draft reads.
    pub fn new(
        id: impl Into<CharacterId>,
        name: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            status: None,
            species: None,
            gender: None,
            origin: None,
            location: None,
            url: None,
        }
    }

    /// Set the species.
    #[must_use]
    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    /// Set the status (Alive, Dead, unknown).
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}
