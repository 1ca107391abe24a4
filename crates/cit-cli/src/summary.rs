use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cit_cli::batch::BatchSummary;

/// Print batch counts to stderr so stdout stays reserved for documents.
pub fn print_summary(summary: &BatchSummary) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Citations"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Read"), Cell::new(summary.read)]);
    table.add_row(vec![
        Cell::new("Indexed"),
        Cell::new(summary.indexed)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Malformed"),
        count_cell(summary.malformed, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Failed"),
        count_cell(summary.failed, Color::Red),
    ]);
    eprintln!("{table}");

    if summary.failures_by_stage.is_empty() {
        return;
    }
    let mut failures = Table::new();
    failures.set_header(vec![header_cell("Stage"), header_cell("Failures")]);
    apply_summary_table_style(&mut failures);
    align_column(&mut failures, 1, CellAlignment::Right);
    for (stage, count) in &summary.failures_by_stage {
        failures.add_row(vec![Cell::new(stage), count_cell(*count, Color::Red)]);
    }
    eprintln!();
    eprintln!("Failures by stage:");
    eprintln!("{failures}");
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).add_attribute(Attribute::Dim)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
