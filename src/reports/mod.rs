// ===== shiftbreak/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use shiftbreak::rank::{Candidate, Ranking};
use shiftbreak::SbResult;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum OutputFormat {
    Table,
    Json,
}

pub fn print_best_guess(best: &Candidate) {
    println!("\n=== 🏆 BEST GUESS ===");
    println!("Shift: {}", best.shift);
    println!("Hits: {} | Chi²: {:.2}", best.hits, best.chi_square);
    println!("{}", best.plaintext);
}

pub fn print_top_table(top: &[Candidate]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Shift"),
        Cell::new("Hits").fg(Color::Green),
        Cell::new("Chi²").fg(Color::Cyan),
        Cell::new("Plaintext").add_attribute(Attribute::Bold),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (rank, c) in top.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(c.shift),
            Cell::new(c.hits).fg(Color::Green),
            Cell::new(format!("{:.2}", c.chi_square)).fg(Color::Cyan),
            Cell::new(&c.plaintext),
        ]);
    }
    println!("\n{}", table);
}

/// Quick view of every shift in plain 0..25 order, regardless of rank.
pub fn print_all_shifts(all: &[Candidate]) {
    let mut by_shift: Vec<&Candidate> = all.iter().collect();
    by_shift.sort_by_key(|c| c.shift);

    println!("\n=== All 26 shifts ===");
    for c in by_shift {
        println!("[{:2}] {}", c.shift, c.plaintext);
    }
}

pub fn print_json(ranking: &Ranking) -> SbResult<()> {
    println!("{}", serde_json::to_string_pretty(ranking)?);
    Ok(())
}
