//! Derived flags for org records
//!
//! Owner-trait gating (may a government / criminal / sociopath councilor
//! hold the org?) and faction restrictions.

use crate::core::error::{OrgError, Result};
use crate::org::record::OrgRecord;

/// Number of faction slots in the `restricted` list
pub const FACTION_SLOTS: usize = 8;

/// Owner traits the table has a column for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OwnerTrait {
    Government,
    Criminal,
    Sociopath,
}

impl OwnerTrait {
    pub const ALL: [OwnerTrait; 3] = [
        OwnerTrait::Government,
        OwnerTrait::Criminal,
        OwnerTrait::Sociopath,
    ];

    /// Trait name as written in the template
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnerTrait::Government => "Government",
            OwnerTrait::Criminal => "Criminal",
            OwnerTrait::Sociopath => "Sociopath",
        }
    }
}

/// Whether the owner must have (`Some(true)`) or must not have
/// (`Some(false)`) the trait. `None` when the org does not care.
///
/// A trait listed as both required and prohibited counts as required.
pub fn has_trait(org: &OrgRecord, owner_trait: OwnerTrait) -> Option<bool> {
    let name = owner_trait.as_str();
    if org.required_owner_traits.contains(name) {
        Some(true)
    } else if org.prohibited_owner_traits.contains(name) {
        Some(false)
    } else {
        None
    }
}

/// Faction ideology, one per `restricted` slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ideology {
    Alien,
    Appease,
    Cooperate,
    Escape,
    Resist,
    Destroy,
    Exploit,
    Submit,
}

impl Ideology {
    pub const ALL: [Ideology; FACTION_SLOTS] = [
        Ideology::Alien,
        Ideology::Appease,
        Ideology::Cooperate,
        Ideology::Escape,
        Ideology::Resist,
        Ideology::Destroy,
        Ideology::Exploit,
        Ideology::Submit,
    ];

    /// Token used in the template's `restricted` list
    pub fn token(&self) -> &'static str {
        match self {
            Ideology::Alien => "Alien",
            Ideology::Appease => "Appease",
            Ideology::Cooperate => "Cooperate",
            Ideology::Escape => "Escape",
            Ideology::Resist => "Resist",
            Ideology::Destroy => "Destroy",
            Ideology::Exploit => "Exploit",
            Ideology::Submit => "Submit",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ideology| ideology.token() == token)
    }

    /// Short faction name used on the wiki
    pub fn faction_name(&self) -> &'static str {
        match self {
            Ideology::Alien => "Alien",
            Ideology::Appease => "Protectorate",
            Ideology::Cooperate => "Academy",
            Ideology::Escape => "Exodus",
            Ideology::Resist => "Resistance",
            Ideology::Destroy => "HF",
            Ideology::Exploit => "Initiative",
            Ideology::Submit => "Servants",
        }
    }
}

/// True when every faction slot is filled, i.e. the org belongs to one
/// faction's scripted content and is never up for grabs.
pub fn is_faction_unique(org: &OrgRecord) -> bool {
    org.restricted.len() == FACTION_SLOTS && org.restricted.iter().all(|slot| !slot.is_empty())
}

/// Factions banned from holding the org, in slot order
///
/// Single-character tokens are placeholders and carry no ban. Any longer
/// token must name a known ideology.
pub fn restricted_factions(org: &OrgRecord) -> Result<Vec<Ideology>> {
    org.restricted
        .iter()
        .filter(|token| token.chars().count() > 1)
        .map(|token| {
            Ideology::from_token(token).ok_or_else(|| OrgError::UnknownIdeology {
                org: org.display_name().to_string(),
                token: token.clone(),
            })
        })
        .collect()
}
