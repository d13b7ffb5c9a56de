//! Bullet-list summaries of an org's income, councilor attributes and cost
//!
//! Each summary walks a fixed, ordered list of stat categories. A category
//! maps to the template fields that make up its roll; categories the org
//! does not have are skipped.

use crate::core::types::{coerce_float, format_number, round2, trim_float_noise, Amount};
use crate::org::record::{OrgRecord, OrgStats};
use crate::wiki::range::StatRoll;

/// Projects icon on a black background, as used across the wiki
pub const PROJECT_ICON: &str =
    "<span style='background: black;'>[[File:ICO projects.png|20px]]</span>";

/// Which field of a roll says whether the org has the category at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Present when the base amount is set
    Base,
    /// Present when the chance is set, even without a base
    Chance,
}

/// Raw template fields behind one category
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatFields {
    pub chance: Option<Amount>,
    pub base: Option<Amount>,
    pub increase: Option<Amount>,
}

impl StatFields {
    /// Cost-style fields with no chance component
    fn certain(base: Option<Amount>, increase: Option<Amount>) -> Self {
        Self {
            chance: None,
            base,
            increase,
        }
    }

    fn rolled(chance: Option<Amount>, base: Option<Amount>, increase: Option<Amount>) -> Self {
        Self {
            chance,
            base,
            increase,
        }
    }

    pub fn is_present(&self, presence: Presence) -> bool {
        match presence {
            Presence::Base => self.base.is_some(),
            Presence::Chance => self.chance.is_some(),
        }
    }

    pub fn roll(&self) -> StatRoll {
        StatRoll::from_fields(self.chance, self.base, self.increase)
    }
}

/// A fixed family of stat categories summarized together
pub trait StatCategory: Copy + 'static {
    /// Every category, in display order
    const ALL: &'static [Self];
    const PRESENCE: Presence;

    fn label(self) -> &'static str;
    fn fields(self, stats: &OrgStats) -> StatFields;
}

/// Monthly income and nation priority bonuses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncomeCategory {
    Money,
    Influence,
    Ops,
    Boost,
    MissionControl,
    Research,
    Economy,
    Welfare,
    Knowledge,
    Unity,
    Military,
    Spoils,
    MissionControlPriority,
    SpaceProgram,
}

impl StatCategory for IncomeCategory {
    const ALL: &'static [Self] = &[
        IncomeCategory::Money,
        IncomeCategory::Influence,
        IncomeCategory::Ops,
        IncomeCategory::Boost,
        IncomeCategory::MissionControl,
        IncomeCategory::Research,
        IncomeCategory::Economy,
        IncomeCategory::Welfare,
        IncomeCategory::Knowledge,
        IncomeCategory::Unity,
        IncomeCategory::Military,
        IncomeCategory::Spoils,
        IncomeCategory::MissionControlPriority,
        IncomeCategory::SpaceProgram,
    ];
    const PRESENCE: Presence = Presence::Base;

    fn label(self) -> &'static str {
        match self {
            IncomeCategory::Money => "money",
            IncomeCategory::Influence => "influence",
            IncomeCategory::Ops => "ops",
            IncomeCategory::Boost => "boost",
            IncomeCategory::MissionControl => "mc",
            IncomeCategory::Research => "research",
            IncomeCategory::Economy => "economy",
            IncomeCategory::Welfare => "welfare",
            IncomeCategory::Knowledge => "knowledge",
            IncomeCategory::Unity => "unity",
            IncomeCategory::Military => "military",
            IncomeCategory::Spoils => "spoils",
            IncomeCategory::MissionControlPriority => "mc_priority",
            IncomeCategory::SpaceProgram => "space_program",
        }
    }

    fn fields(self, s: &OrgStats) -> StatFields {
        match self {
            IncomeCategory::Money => {
                StatFields::rolled(s.chance_income_money, s.income_money, s.rand_income_money)
            }
            IncomeCategory::Influence => StatFields::rolled(
                s.chance_income_influence,
                s.income_influence,
                s.rand_income_influence,
            ),
            IncomeCategory::Ops => {
                StatFields::rolled(s.chance_income_ops, s.income_ops, s.rand_income_ops)
            }
            IncomeCategory::Boost => {
                StatFields::rolled(s.chance_income_boost, s.income_boost, s.rand_income_boost)
            }
            IncomeCategory::MissionControl => StatFields::rolled(
                s.chance_income_mission_control,
                s.income_mission_control,
                s.rand_income_mission_control,
            ),
            IncomeCategory::Research => StatFields::rolled(
                s.chance_income_research,
                s.income_research,
                s.rand_income_research,
            ),
            IncomeCategory::Economy => {
                StatFields::rolled(s.chance_economy_bonus, s.economy_bonus, s.rand_economy_bonus)
            }
            IncomeCategory::Welfare => {
                StatFields::rolled(s.chance_welfare_bonus, s.welfare_bonus, s.rand_welfare_bonus)
            }
            IncomeCategory::Knowledge => StatFields::rolled(
                s.chance_knowledge_bonus,
                s.knowledge_bonus,
                s.rand_knowledge_bonus,
            ),
            IncomeCategory::Unity => {
                StatFields::rolled(s.chance_unity_bonus, s.unity_bonus, s.rand_unity_bonus)
            }
            IncomeCategory::Military => StatFields::rolled(
                s.chance_military_bonus,
                s.military_bonus,
                s.rand_military_bonus,
            ),
            IncomeCategory::Spoils => {
                StatFields::rolled(s.chance_spoils_bonus, s.spoils_bonus, s.rand_spoils_bonus)
            }
            IncomeCategory::MissionControlPriority => StatFields::rolled(
                s.chance_space_dev_bonus,
                s.space_dev_bonus,
                s.rand_space_dev_bonus,
            ),
            IncomeCategory::SpaceProgram => StatFields::rolled(
                s.chance_spaceflight_bonus,
                s.spaceflight_bonus,
                s.rand_spaceflight_bonus,
            ),
        }
    }
}

/// Councilor attribute bonuses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeCategory {
    Persuasion,
    Investigation,
    Espionage,
    Command,
    Administration,
    Science,
    Security,
}

impl StatCategory for AttributeCategory {
    const ALL: &'static [Self] = &[
        AttributeCategory::Persuasion,
        AttributeCategory::Investigation,
        AttributeCategory::Espionage,
        AttributeCategory::Command,
        AttributeCategory::Administration,
        AttributeCategory::Science,
        AttributeCategory::Security,
    ];
    // Attribute rolls are keyed on the chance field, unlike income
    const PRESENCE: Presence = Presence::Chance;

    fn label(self) -> &'static str {
        match self {
            AttributeCategory::Persuasion => "PER",
            AttributeCategory::Investigation => "INV",
            AttributeCategory::Espionage => "ESP",
            AttributeCategory::Command => "CMD",
            AttributeCategory::Administration => "ADM",
            AttributeCategory::Science => "SCI",
            AttributeCategory::Security => "SEC",
        }
    }

    fn fields(self, s: &OrgStats) -> StatFields {
        match self {
            AttributeCategory::Persuasion => {
                StatFields::rolled(s.chance_persuasion, s.persuasion, s.rand_persuasion)
            }
            AttributeCategory::Investigation => {
                StatFields::rolled(s.chance_investigation, s.investigation, s.rand_investigation)
            }
            AttributeCategory::Espionage => {
                StatFields::rolled(s.chance_espionage, s.espionage, s.rand_espionage)
            }
            AttributeCategory::Command => {
                StatFields::rolled(s.chance_command, s.command, s.rand_command)
            }
            AttributeCategory::Administration => StatFields::rolled(
                s.chance_administration,
                s.administration,
                s.rand_administration,
            ),
            AttributeCategory::Science => {
                StatFields::rolled(s.chance_science, s.science, s.rand_science)
            }
            AttributeCategory::Security => {
                StatFields::rolled(s.chance_security, s.security, s.rand_security)
            }
        }
    }
}

/// Purchase cost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostCategory {
    Money,
    Influence,
    Ops,
    Boost,
}

impl StatCategory for CostCategory {
    const ALL: &'static [Self] = &[
        CostCategory::Money,
        CostCategory::Influence,
        CostCategory::Ops,
        CostCategory::Boost,
    ];
    const PRESENCE: Presence = Presence::Base;

    fn label(self) -> &'static str {
        match self {
            CostCategory::Money => "money",
            CostCategory::Influence => "influence",
            CostCategory::Ops => "ops",
            CostCategory::Boost => "boost",
        }
    }

    fn fields(self, s: &OrgStats) -> StatFields {
        match self {
            CostCategory::Money => StatFields::certain(s.cost_money, s.rand_cost_money),
            CostCategory::Influence => StatFields::certain(s.cost_influence, s.rand_cost_influence),
            CostCategory::Ops => StatFields::certain(s.cost_ops, s.rand_cost_ops),
            CostCategory::Boost => StatFields::certain(s.cost_boost, s.rand_cost_boost),
        }
    }
}

/// `* <range> <label>` for every category of `C` the org has
pub fn stat_lines<C: StatCategory>(stats: &OrgStats) -> Vec<String> {
    C::ALL
        .iter()
        .filter_map(|&category| {
            let fields = category.fields(stats);
            fields
                .is_present(C::PRESENCE)
                .then(|| bullet(format!("{} {}", fields.roll().format(), category.label())))
        })
        .collect()
}

/// Monthly income, priority bonuses, tech bonuses, mining, xp and projects
pub fn income_summary(org: &OrgRecord) -> String {
    let mut lines = stat_lines::<IncomeCategory>(&org.stats);

    for tech in &org.tech_bonuses {
        if let Some(bonus) = tech.bonus.map(Amount::value).filter(|b| *b != 0.0) {
            lines.push(bullet(format!(
                "{}% {}",
                format_number(trim_float_noise(bonus * 100.0)),
                tech.category
            )));
        }
    }

    if let Some(line) = mining_line(&org.stats) {
        lines.push(line);
    }

    if let Some(xp) = org.xp_modifier.as_deref().filter(|xp| !xp.is_empty()) {
        lines.push(bullet(format!("{} xp", xp)));
    }

    if let Some(count) = org.projects_granted.map(Amount::value).filter(|c| *c != 0.0) {
        lines.push(bullet(format!(
            "{} {} project(s)",
            format_number(count),
            PROJECT_ICON
        )));
    }

    join_lines(&lines)
}

/// Councilor attribute bonuses
pub fn attribute_summary(org: &OrgRecord) -> String {
    join_lines(&stat_lines::<AttributeCategory>(&org.stats))
}

/// Purchase cost
pub fn cost_summary(org: &OrgRecord) -> String {
    join_lines(&stat_lines::<CostCategory>(&org.stats))
}

/// Mining bonus as a percentage
///
/// The percentage is taken from the leading number of the formatted range,
/// so a ranged bonus shows only its lower bound.
fn mining_line(stats: &OrgStats) -> Option<String> {
    let base = stats.mining_bonus?;
    let range = StatRoll::from_fields(None, Some(base), stats.rand_mining_bonus).format();
    let percent = round2(coerce_float(&range) * 100.0);
    Some(bullet(format!("{}% mining", format_number(percent))))
}

pub(crate) fn bullet(text: impl AsRef<str>) -> String {
    format!("* {}", text.as_ref())
}

pub(crate) fn join_lines(lines: &[String]) -> String {
    lines.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::org::record::TechBonus;

    fn amt(value: f64) -> Option<Amount> {
        Some(Amount(value))
    }

    #[test]
    fn test_single_money_income() {
        let mut org = OrgRecord::default();
        org.stats.income_money = amt(10.0);
        org.stats.chance_income_money = amt(100.0);
        org.stats.rand_income_money = amt(0.0);
        assert_eq!(income_summary(&org), "* 10 money");
    }

    #[test]
    fn test_income_in_table_order() {
        let mut org = OrgRecord::default();
        org.stats.spaceflight_bonus = amt(0.5);
        org.stats.income_ops = amt(2.0);
        org.stats.rand_income_ops = amt(1.0);
        org.stats.chance_economy_bonus = amt(50.0);
        org.stats.economy_bonus = amt(1.0);
        assert_eq!(
            income_summary(&org),
            "* 2-3 ops\n* 0-1 economy\n* 0.5 space_program"
        );
    }

    #[test]
    fn test_income_ignores_chance_without_base() {
        let mut org = OrgRecord::default();
        org.stats.chance_income_money = amt(50.0);
        org.stats.rand_income_money = amt(5.0);
        assert_eq!(income_summary(&org), "");
    }

    #[test]
    fn test_zero_base_still_counts_as_present() {
        let mut org = OrgRecord::default();
        org.stats.income_boost = amt(0.0);
        assert_eq!(income_summary(&org), "* 0 boost");
    }

    #[test]
    fn test_tech_bonus_lines() {
        let org = OrgRecord {
            tech_bonuses: vec![
                TechBonus { category: "Energy".into(), bonus: amt(0.1) },
                TechBonus { category: "Materials".into(), bonus: amt(0.0) },
                TechBonus { category: "Xenology".into(), bonus: None },
                TechBonus { category: "SpaceScience".into(), bonus: amt(0.025) },
            ],
            ..Default::default()
        };
        assert_eq!(income_summary(&org), "* 10% Energy\n* 2.5% SpaceScience");
    }

    #[test]
    fn test_tech_bonus_keeps_fine_fractions() {
        let org = OrgRecord {
            tech_bonuses: vec![
                TechBonus { category: "Energy".into(), bonus: amt(0.00125) },
                TechBonus { category: "Materials".into(), bonus: amt(0.035) },
            ],
            ..Default::default()
        };
        assert_eq!(income_summary(&org), "* 0.125% Energy
* 3.5% Materials");
    }

    #[test]
    fn test_false_income_base_is_skipped() {
        let org: OrgRecord = serde_json::from_str(
            r#"{ "incomeMoney": false, "chanceIncomeMoney": 100, "incomeOps": 2,
                "missionsGrantedNames": [], "techBonuses": [], "requiredOwnerTraits": [],
                "prohibitedOwnerTraits": [], "restricted": [] }"#,
        )
        .unwrap();
        assert_eq!(income_summary(&org), "* 2 ops");
    }

    #[test]
    fn test_mining_keeps_only_lower_bound() {
        let mut org = OrgRecord::default();
        org.stats.mining_bonus = amt(0.1);
        assert_eq!(income_summary(&org), "* 10% mining");

        org.stats.rand_mining_bonus = amt(0.2);
        assert_eq!(income_summary(&org), "* 10% mining");
    }

    #[test]
    fn test_xp_and_projects() {
        let org = OrgRecord {
            xp_modifier: Some("+10%".into()),
            projects_granted: amt(2.0),
            ..Default::default()
        };
        assert_eq!(
            income_summary(&org),
            format!("* +10% xp\n* 2 {} project(s)", PROJECT_ICON)
        );
    }

    #[test]
    fn test_empty_xp_and_zero_projects_skipped() {
        let org = OrgRecord {
            xp_modifier: Some(String::new()),
            projects_granted: amt(0.0),
            ..Default::default()
        };
        assert_eq!(income_summary(&org), "");
    }

    #[test]
    fn test_special_lines_follow_categories() {
        let mut org = OrgRecord {
            tech_bonuses: vec![TechBonus { category: "Energy".into(), bonus: amt(0.05) }],
            xp_modifier: Some("5".into()),
            ..Default::default()
        };
        org.stats.income_influence = amt(1.0);
        org.stats.mining_bonus = amt(0.2);
        let lines: Vec<String> = income_summary(&org).lines().map(String::from).collect();
        assert_eq!(
            lines,
            vec!["* 1 influence", "* 5% Energy", "* 20% mining", "* 5 xp"]
        );
    }

    #[test]
    fn test_attributes_keyed_on_chance() {
        let mut org = OrgRecord::default();
        org.stats.chance_command = amt(100.0);
        org.stats.command = amt(2.0);
        // base without chance does not count
        org.stats.science = amt(3.0);
        // chance without base does
        org.stats.chance_security = amt(40.0);
        org.stats.rand_security = amt(1.0);
        assert_eq!(attribute_summary(&org), "* 2 CMD\n* 0-1 SEC");
    }

    #[test]
    fn test_cost_has_no_chance() {
        let mut org = OrgRecord::default();
        org.stats.cost_money = amt(50.0);
        org.stats.rand_cost_money = amt(25.0);
        org.stats.cost_boost = amt(3.0);
        assert_eq!(cost_summary(&org), "* 50-75 money\n* 3 boost");
    }

    #[test]
    fn test_category_tables() {
        assert_eq!(IncomeCategory::ALL.len(), 14);
        assert_eq!(AttributeCategory::ALL.len(), 7);
        assert_eq!(CostCategory::ALL.len(), 4);
        let labels: Vec<&str> = AttributeCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["PER", "INV", "ESP", "CMD", "ADM", "SCI", "SEC"]);
    }
}
