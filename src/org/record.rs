//! JSON schema types for the org template export
//!
//! One `OrgRecord` per entry of the top-level array in `TIOrgTemplate.json`.
//! The export carries many more fields than the table needs; unknown fields
//! are ignored. The five list fields without a serde default are mandatory,
//! a record missing any of them fails to load.

use crate::core::types::{null_as_default, optional_amount, Amount};
use ahash::AHashSet;
use serde::Deserialize;

/// A single org definition
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgRecord {
    /// Name shown in game
    pub friendly_name: Option<String>,
    /// Internal template key
    pub data_name: Option<String>,
    #[serde(default, deserialize_with = "optional_amount")]
    pub tier: Option<Amount>,
    /// Logo path, e.g. `orglogos/Cartel`
    pub icon_resource: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub home_region_names: Vec<String>,
    /// Only nations owning one of the home regions may hold the org
    #[serde(default, deserialize_with = "null_as_default")]
    pub requires_nationality: bool,
    /// Procedurally generated orgs are not worth a wiki row
    #[serde(default, deserialize_with = "null_as_default")]
    pub randomized: bool,

    pub missions_granted_names: Vec<String>,
    pub tech_bonuses: Vec<TechBonus>,
    #[serde(default, deserialize_with = "optional_amount")]
    pub projects_granted: Option<Amount>,
    #[serde(rename = "XPModifier")]
    pub xp_modifier: Option<String>,

    pub required_owner_traits: AHashSet<String>,
    pub prohibited_owner_traits: AHashSet<String>,
    /// One slot per faction ideology; a non-empty token bans that faction
    pub restricted: Vec<String>,

    #[serde(flatten)]
    pub stats: OrgStats,
}

impl OrgRecord {
    /// Name for the table cell, empty when the export has none
    pub fn name(&self) -> &str {
        self.friendly_name.as_deref().unwrap_or("")
    }

    /// Best available identifier for diagnostics
    pub fn display_name(&self) -> &str {
        self.friendly_name
            .as_deref()
            .or(self.data_name.as_deref())
            .unwrap_or("<unnamed>")
    }

    /// Region the org is tied to, if it requires its owner's nationality
    pub fn required_region(&self) -> Option<&str> {
        if !self.requires_nationality {
            return None;
        }
        self.home_region_names.first().map(String::as_str)
    }
}

/// Research bonus granted while the org is held
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TechBonus {
    #[serde(default)]
    pub category: String,
    /// Fraction, 0.1 = +10%
    #[serde(default, deserialize_with = "optional_amount")]
    pub bonus: Option<Amount>,
}

/// Numeric bonus and cost fields
///
/// Bonuses come in triples: a chance (percent) that the bonus exists at all,
/// a base amount, and a random increase that may be added on top. Costs have
/// no chance field. An absent base means the org has no such bonus; `null`
/// and `false` count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrgStats {
    // === MONTHLY INCOME ===
    #[serde(deserialize_with = "optional_amount")]
    pub chance_income_money: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub income_money: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub rand_income_money: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub chance_income_influence: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub income_influence: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub rand_income_influence: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub chance_income_ops: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub income_ops: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub rand_income_ops: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub chance_income_boost: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub income_boost: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub rand_income_boost: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub chance_income_mission_control: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub income_mission_control: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub rand_income_mission_control: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub chance_income_research: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub income_research: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub rand_income_research: Option<Amount>,

    // === NATION PRIORITY BONUSES ===
    #[serde(deserialize_with = "optional_amount")]
    pub chance_economy_bonus: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub economy_bonus: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub rand_economy_bonus: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub chance_welfare_bonus: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub welfare_bonus: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub rand_welfare_bonus: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub chance_knowledge_bonus: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub knowledge_bonus: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub rand_knowledge_bonus: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub chance_unity_bonus: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub unity_bonus: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub rand_unity_bonus: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub chance_military_bonus: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub military_bonus: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub rand_military_bonus: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub chance_spoils_bonus: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub spoils_bonus: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub rand_spoils_bonus: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub chance_space_dev_bonus: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub space_dev_bonus: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub rand_space_dev_bonus: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub chance_spaceflight_bonus: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub spaceflight_bonus: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub rand_spaceflight_bonus: Option<Amount>,

    // === COUNCILOR ATTRIBUTES ===
    #[serde(deserialize_with = "optional_amount")]
    pub chance_persuasion: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub persuasion: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub rand_persuasion: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub chance_investigation: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub investigation: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub rand_investigation: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub chance_espionage: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub espionage: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub rand_espionage: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub chance_command: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub command: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub rand_command: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub chance_administration: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub administration: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub rand_administration: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub chance_science: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub science: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub rand_science: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub chance_security: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub security: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub rand_security: Option<Amount>,

    // === PURCHASE COST ===
    #[serde(deserialize_with = "optional_amount")]
    pub cost_money: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub rand_cost_money: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub cost_influence: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub rand_cost_influence: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub cost_ops: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub rand_cost_ops: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub cost_boost: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub rand_cost_boost: Option<Amount>,

    // === MINING ===
    /// Fraction, rendered as a percentage
    #[serde(deserialize_with = "optional_amount")]
    pub mining_bonus: Option<Amount>,
    #[serde(deserialize_with = "optional_amount")]
    pub rand_mining_bonus: Option<Amount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARTEL: &str = r#"{
        "dataName": "Cartel",
        "friendlyName": "Sinaloa Cartel",
        "tier": 2,
        "iconResource": "orglogos/Cartel",
        "homeRegionNames": ["Sinaloa", "Sonora"],
        "requiresNationality": true,
        "randomized": false,
        "missionsGrantedNames": ["Crackdown"],
        "techBonuses": [{ "category": "Energy", "bonus": 0.05 }],
        "requiredOwnerTraits": ["Criminal"],
        "prohibitedOwnerTraits": [],
        "restricted": ["", "", "", "", "", "", "", ""],
        "incomeMoney": 12,
        "randIncomeMoney": "3",
        "chanceIncomeMoney": 100,
        "someFieldTheTableIgnores": { "nested": true }
    }"#;

    #[test]
    fn test_parse_full_record() {
        let org: OrgRecord = serde_json::from_str(CARTEL).unwrap();
        assert_eq!(org.name(), "Sinaloa Cartel");
        assert_eq!(org.tier, Some(Amount(2.0)));
        assert_eq!(org.required_region(), Some("Sinaloa"));
        assert!(org.required_owner_traits.contains("Criminal"));
        assert_eq!(org.tech_bonuses[0].category, "Energy");
        assert_eq!(org.stats.income_money, Some(Amount(12.0)));
        assert_eq!(org.stats.rand_income_money, Some(Amount(3.0)));
        assert_eq!(org.stats.income_influence, None);
    }

    #[test]
    fn test_missing_mandatory_list_fails() {
        let json = r#"{ "friendlyName": "X", "missionsGrantedNames": [], "techBonuses": [],
            "requiredOwnerTraits": [], "prohibitedOwnerTraits": [] }"#;
        let result: Result<OrgRecord, _> = serde_json::from_str(json);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("restricted"), "unexpected error: {}", err);
    }

    #[test]
    fn test_region_only_when_nationality_required() {
        let mut org: OrgRecord = serde_json::from_str(CARTEL).unwrap();
        org.requires_nationality = false;
        assert_eq!(org.required_region(), None);
    }

    #[test]
    fn test_null_flags_and_regions_use_defaults() {
        let json = r#"{ "friendlyName": "Drifters", "randomized": null,
            "requiresNationality": null, "homeRegionNames": null,
            "missionsGrantedNames": [], "techBonuses": [], "requiredOwnerTraits": [],
            "prohibitedOwnerTraits": [], "restricted": [] }"#;
        let org: OrgRecord = serde_json::from_str(json).unwrap();
        assert!(!org.randomized);
        assert!(!org.requires_nationality);
        assert!(org.home_region_names.is_empty());
        assert_eq!(org.required_region(), None);
    }

    #[test]
    fn test_false_numeric_fields_are_absent() {
        let json = r#"{ "friendlyName": "Hollow", "tier": false, "projectsGranted": false,
            "incomeMoney": false, "chanceIncomeMoney": null, "costBoost": 0,
            "missionsGrantedNames": [], "requiredOwnerTraits": [],
            "techBonuses": [{ "category": "Energy", "bonus": false }],
            "prohibitedOwnerTraits": [], "restricted": [] }"#;
        let org: OrgRecord = serde_json::from_str(json).unwrap();
        assert_eq!(org.tier, None);
        assert_eq!(org.projects_granted, None);
        assert_eq!(org.stats.income_money, None);
        assert_eq!(org.stats.chance_income_money, None);
        assert_eq!(org.stats.cost_boost, Some(Amount(0.0)));
        assert_eq!(org.tech_bonuses[0].bonus, None);
    }

    #[test]
    fn test_display_name_falls_back_to_data_name() {
        let org = OrgRecord {
            data_name: Some("Cartel".into()),
            ..Default::default()
        };
        assert_eq!(org.name(), "");
        assert_eq!(org.display_name(), "Cartel");
        assert_eq!(OrgRecord::default().display_name(), "<unnamed>");
    }
}
