//! Race tag for the extended casting schema

use std::fmt;

use serde::{Deserialize, Serialize};

/// Race of the character being cast.
///
/// Only meaningful under `CastingSchema::Extended`; the classic schema
/// carries no race field at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Race {
    Human,
    Elf,
    Dwarf,
    Hobbit,
    Maia,
    Orc,
    Ent,
}

impl Race {
    /// Get all races for UI dropdowns
    pub fn all() -> &'static [Race] {
        &[
            Race::Human,
            Race::Elf,
            Race::Dwarf,
            Race::Hobbit,
            Race::Maia,
            Race::Orc,
            Race::Ent,
        ]
    }

    /// Get a display name for the race
    pub fn display_name(&self) -> &'static str {
        match self {
            Race::Human => "Human",
            Race::Elf => "Elf",
            Race::Dwarf => "Dwarf",
            Race::Hobbit => "Hobbit",
            Race::Maia => "Maia",
            Race::Orc => "Orc",
            Race::Ent => "Ent",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
