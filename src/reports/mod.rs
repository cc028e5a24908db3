use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use ngramalyzer::config::MetricConfig;
use ngramalyzer::engine::ResultRecord;

pub fn print_top_ngrams(records: &[ResultRecord], config: &MetricConfig, n: usize) {
    println!("\nTop {} {}-Grams", records.len(), n);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let ranking = config.ranking_slot();
    let mut header = vec![
        Cell::new(format!("{}-Gram", n)).add_attribute(Attribute::Bold),
        Cell::new("Count"),
    ];
    for (i, slot) in config.enabled() {
        let cell = Cell::new(slot.label());
        header.push(if Some(i) == ranking {
            cell.fg(Color::Cyan)
        } else {
            cell
        });
    }
    table.set_header(header);

    let width = 2 + config.enabled().count();
    for i in 1..width {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for record in records {
        let mut row = vec![
            Cell::new(&record.text).add_attribute(Attribute::Bold),
            Cell::new(record.count),
        ];
        for (i, _) in config.enabled() {
            row.push(match record.metric(i) {
                Some(v) => Cell::new(format!("{:.4}", v)),
                None => Cell::new("N/A").fg(Color::DarkGrey),
            });
        }
        table.add_row(row);
    }
    println!("{}", table);
}

pub fn print_summary(distinct: usize, rows: usize) {
    println!("{} distinct n-grams from {} rows", distinct, rows);
}
