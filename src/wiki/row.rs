//! One wiki table row per org

use crate::core::error::Result;
use crate::core::types::{format_number, Amount};
use crate::org::classify::{has_trait, restricted_factions, OwnerTrait};
use crate::org::record::OrgRecord;
use crate::wiki::summary::{attribute_summary, bullet, cost_summary, income_summary, join_lines};

/// Shortest mission name worth listing; shorter entries are placeholders
pub const MIN_MISSION_NAME_LEN: usize = 3;

/// Prefix stripped from `iconResource` to get the wiki file name
const ICON_PREFIX: &str = "orglogos/";

/// Render the row cells for `org`, without the surrounding row separators
///
/// Fails only when the org is banned for an ideology the table does not know.
pub fn render_row(org: &OrgRecord) -> Result<String> {
    let banned = restricted_factions(org)?;
    let banned: Vec<String> = banned
        .iter()
        .map(|ideology| bullet(ideology.faction_name()))
        .collect();

    let row = format!(
        "| {head}\n| {tier}\n|\n{income}\n|\n{attributes}\n|\n{missions}\n|\n{cost}\n| {region}\n| {government}\n| {criminal}\n| {sociopath}\n|\n{banned}",
        head = name_cell(org),
        tier = org.tier.map(Amount::value).map(format_number).unwrap_or_default(),
        income = income_summary(org),
        attributes = attribute_summary(org),
        missions = missions_list(org),
        cost = cost_summary(org),
        region = org.required_region().unwrap_or(""),
        government = flag_cell(has_trait(org, OwnerTrait::Government)),
        criminal = flag_cell(has_trait(org, OwnerTrait::Criminal)),
        sociopath = flag_cell(has_trait(org, OwnerTrait::Sociopath)),
        banned = join_lines(&banned),
    );

    Ok(row.trim().to_string())
}

/// Logo image followed by the org name
pub fn name_cell(org: &OrgRecord) -> String {
    match org.icon_resource.as_deref() {
        Some(icon) => format!(
            "[[File:Org {}.png|50px]] {}",
            icon.replacen(ICON_PREFIX, "", 1),
            org.name()
        ),
        None => org.name().to_string(),
    }
}

/// Missions the org unlocks, placeholder entries dropped
pub fn missions_list(org: &OrgRecord) -> String {
    let lines: Vec<String> = org
        .missions_granted_names
        .iter()
        .filter(|mission| mission.chars().count() >= MIN_MISSION_NAME_LEN)
        .map(bullet)
        .collect();
    join_lines(&lines)
}

/// `true`, `false`, or blank when the org does not care
pub fn flag_cell(flag: Option<bool>) -> &'static str {
    match flag {
        Some(true) => "true",
        Some(false) => "false",
        None => "",
    }
}
