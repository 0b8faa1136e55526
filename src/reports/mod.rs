// ===== echograde/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use echograde::catalog::{CatalogEntry, SubstatCatalog};
use echograde::scorer::{self, EchoEfficiency};

/// Terms rendered fully uppercase in display names. Everything else is
/// title-cased word by word.
const UPPERCASE_TERMS: [&str; 7] = ["dmg", "hp", "hp%", "atk", "atk%", "def", "def%"];

/// `crit_rate` -> "Crit Rate", `basic_atk_dmg_bonus` -> "Basic ATK DMG Bonus".
pub fn format_stat_name(name: &str) -> String {
    name.split('_')
        .map(|word| {
            if UPPERCASE_TERMS.contains(&word.to_ascii_lowercase().as_str()) {
                word.to_ascii_uppercase()
            } else {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// Color-coded efficiency cell: strong rolls green, middling yellow, weak red.
fn efficiency_cell(value: f64) -> Cell {
    let text = format!("{:.2}%", value);
    if value >= 80.0 {
        Cell::new(text).fg(Color::Green)
    } else if value >= 50.0 {
        Cell::new(text).fg(Color::Yellow)
    } else {
        Cell::new(text).fg(Color::Red)
    }
}

pub fn print_echo_report(label: &str, result: &EchoEfficiency, catalog: &SubstatCatalog) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new(format!("{} Substats", label)).add_attribute(Attribute::Bold),
        Cell::new("Rolled"),
        Cell::new("Max"),
        Cell::new("Efficiency").fg(Color::Cyan),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for score in &result.substats {
        let max = match catalog.get(&score.name) {
            Some(entry) => format!("{}", entry.range.max),
            None => "-".to_string(),
        };

        table.add_row(vec![
            Cell::new(format_stat_name(&score.name)),
            Cell::new(format!("{}", score.value)),
            Cell::new(max),
            efficiency_cell(score.efficiency),
        ]);
    }

    table.add_row(vec![
        Cell::new("Total Echo Efficiency").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        Cell::new(format!("{:.2}%", result.total))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
    ]);

    println!("\n{}", table);
}

/// Side-by-side totals for a whole loadout, best echo first-class.
pub fn print_summary(results: &[(String, EchoEfficiency)]) {
    if results.is_empty() {
        return;
    }

    let best = results
        .iter()
        .max_by(|a, b| a.1.total.total_cmp(&b.1.total))
        .unwrap();
    let best_total = best.1.total;

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new(format!("Loadout (Best: {})", best.0)).add_attribute(Attribute::Bold),
        Cell::new("Substats"),
        Cell::new("Theoretical"),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Delta"),
    ]);

    for i in 1..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (name, result) in results {
        let delta = result.total - best_total;

        let name_cell = if name == &best.0 {
            Cell::new(name)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(name).add_attribute(Attribute::Bold)
        };

        table.add_row(vec![
            name_cell,
            Cell::new(format!("{}", result.substats.len())),
            Cell::new(format!("{:.2}%", result.theoretical)),
            efficiency_cell(result.total),
            Cell::new(format!("{:.2}", delta)),
        ]);
    }

    println!("\n{}", table);
}

/// The range table itself, with the floor each minimum roll grades at.
pub fn print_catalog(entries: &[(&str, &CatalogEntry)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Substat").add_attribute(Attribute::Bold),
        Cell::new("Kind"),
        Cell::new("Min"),
        Cell::new("Max"),
        Cell::new("Floor").fg(Color::Cyan),
    ]);

    for i in 2..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (name, entry) in entries {
        let floor = scorer::substat_efficiency(entry.kind, entry.range, entry.range.min);

        table.add_row(vec![
            Cell::new(format_stat_name(name)),
            Cell::new(entry.kind.to_string()),
            Cell::new(format!("{}", entry.range.min)),
            Cell::new(format!("{}", entry.range.max)),
            Cell::new(format!("{:.2}%", floor)),
        ]);
    }

    println!("\n{}", table);
}
