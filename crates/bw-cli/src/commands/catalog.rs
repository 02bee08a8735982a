use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use bw_core::catalog::{BEAST_LORE, WARDS, WEAPONS};
use bw_mechanics::combat::COMBAT_ACTIONS;

pub fn run() -> Result<(), String> {
    println!("  {}", "Wards".bold().underline());
    let mut wards = table(vec!["Id", "Name", "Rarity", "Power", "Cost", "Effect"]);
    for ward in &WARDS {
        wards.add_row(vec![
            ward.id.to_string(),
            ward.name.to_string(),
            ward.rarity.to_string(),
            ward.power_level.to_string(),
            ward.cost.to_string(),
            ward.effect.to_string(),
        ]);
    }
    println!("{wards}");
    println!();

    println!("  {}", "Weapons".bold().underline());
    let mut weapons = table(vec!["Id", "Name", "Rarity", "Power", "Damage", "Accuracy"]);
    for weapon in &WEAPONS {
        weapons.add_row(vec![
            weapon.id.to_string(),
            weapon.name.to_string(),
            weapon.rarity.to_string(),
            weapon.power_level.to_string(),
            weapon.damage.to_string(),
            format!("{}%", weapon.accuracy),
        ]);
    }
    println!("{weapons}");
    println!();

    println!("  {}", "Combat Actions".bold().underline());
    let mut actions = table(vec!["Id", "Name", "Die", "Difficulty", "Reward", "Risk", "Weapon"]);
    for action in &COMBAT_ACTIONS {
        actions.add_row(vec![
            action.id.to_string(),
            action.name.to_string(),
            action.die.to_string(),
            action.difficulty.to_string(),
            action.reward.to_string(),
            action.risk.to_string(),
            if action.kind.requires_weapon() { "yes" } else { "no" }.to_string(),
        ]);
    }
    println!("{actions}");
    println!();

    println!("  {}", "Beast Codex".bold().underline());
    let mut lore = table(vec!["Id", "Category", "Title", "Knowledge"]);
    for entry in &BEAST_LORE {
        lore.add_row(vec![
            entry.id.to_string(),
            entry.category.to_string(),
            entry.title.to_string(),
            entry.knowledge_value.to_string(),
        ]);
    }
    println!("{lore}");

    Ok(())
}

fn table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}
