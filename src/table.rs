use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use crate::model::TeeTimeRecord;

pub fn format_price(price: f64) -> String {
    format!("€{price:.2}")
}

pub fn render(records: &[TeeTimeRecord]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Date",
            "Time",
            "Course",
            "Price",
            "Players",
            "Start hole",
        ]);

    for record in records {
        table.add_row(vec![
            record.date.clone(),
            record.time.clone(),
            record.course.clone(),
            format_price(record.price),
            record.players.to_string(),
            record.start_hole.to_string(),
        ]);
    }

    table.to_string()
}
