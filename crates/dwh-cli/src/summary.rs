use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dwh_cli::types::{RunResult, TableSummary};

pub fn print_summary(result: &RunResult) {
    println!("Output: {}", result.output_dir.display());
    if result.dry_run {
        println!("Dry run: no files were written");
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Records"),
        header_cell("File"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    for summary in &result.tables {
        table.add_row(vec![
            table_cell(&summary.name),
            Cell::new(summary.records),
            output_cell(summary),
        ]);
    }
    println!("{table}");

    let stats = result.join_stats;
    println!(
        "Unmatched appointments: {} without patient, {} without date",
        stats.unmatched_patients, stats.unmatched_dates
    );
    if stats.ambiguous_patient_ids > 0 {
        println!(
            "Patient identifiers resolved to the lowest key: {}",
            stats.ambiguous_patient_ids
        );
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn table_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn output_cell(summary: &TableSummary) -> Cell {
    match &summary.output {
        Some(path) => Cell::new(path.display()),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}
