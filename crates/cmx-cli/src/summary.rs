//! Terminal summary of a completed run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{CellAlignment, ContentArrangement, Table};

use cmx_common::format_numeric;

use crate::commands::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    println!("Input: {}", summary.input.display());
    println!("Output: {}", summary.output.display());
    let mut table = Table::new();
    table.set_header(vec!["Rows", "Windows", "Mean cmx", "Elapsed"]);
    apply_table_style(&mut table);
    table.add_row(vec![
        summary.rows.to_string(),
        summary.windows.to_string(),
        summary
            .mean_complexity
            .map_or_else(|| "-".to_string(), format_numeric),
        format!("{:.2?}", summary.elapsed),
    ]);
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for column in table.column_iter_mut().take(3) {
        column.set_cell_alignment(CellAlignment::Right);
    }
}
