//! Board inspection: collapsed rows per slot and the fallback averages.

use std::path::Path;

use anyhow::Result;
use comfy_table::{ContentArrangement, Table};
use raidcard_core::config::Config;
use raidcard_core::{
    DisplayAggregate, GroupedMatch, SelectionStore, SlotSelection, format_power, visible_rows,
};

pub fn run(board_path: &Path, raid: Option<&str>, config: &Config) -> Result<()> {
    let board = super::load_board(board_path)?;
    let matches: Vec<&GroupedMatch> = match raid {
        Some(_) => vec![super::select_match(&board, raid)?],
        None => board.matches.iter().collect(),
    };

    let page_size = config.effective_page_size();
    for (i, grouped) in matches.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", render_match(grouped, page_size));
    }
    Ok(())
}

/// Text block for one match: title, aggregate line, slot table.
fn render_match(grouped: &GroupedMatch, page_size: usize) -> String {
    let store = SelectionStore::for_match(grouped);
    let display = DisplayAggregate::resolve(grouped, &store);

    let mut out = format!(
        "[{}] {} {} (Lv.{})\n평균 {} · 딜러 {} · 서포터 {}\n",
        grouped.raid_id,
        grouped.raid_name,
        grouped.difficulty,
        grouped.level,
        format_power(display.aggregate.average_power),
        display.aggregate.damage_count,
        display.aggregate.support_count,
    );

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Slot", "#", "Name", "Server", "Class", "Role", "Power"]);

    for slot in grouped.slots.iter().filter(|s| !s.is_empty()) {
        let rows = visible_rows(slot, false, SlotSelection::Empty, page_size);
        for &position in &rows.rows {
            let candidate = &slot.candidates[position];
            table.add_row(vec![
                slot.label.clone(),
                (position + 1).to_string(),
                candidate.name.clone(),
                candidate.server.clone(),
                candidate.class_name.clone(),
                candidate.role.label().to_string(),
                format_power(candidate.power),
            ]);
        }
        if rows.hidden_count > 0 {
            table.add_row(vec![
                slot.label.clone(),
                String::new(),
                format!("+{} more", rows.hidden_count),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ]);
        }
    }

    out.push_str(&table.to_string());
    out.push('\n');
    out
}
