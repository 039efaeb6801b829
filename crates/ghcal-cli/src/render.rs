use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ghcal_core::Session;
use ghcal_ingest::GridPreview;
use ghcal_model::{ROOM_COUNT, room_label};
use ghcal_transform::{Availability, MonthView};

pub fn print_preview(preview: &GridPreview) {
    let mut table = Table::new();
    table.set_header(preview.columns.iter().map(|label| header_cell(label)));
    apply_table_style(&mut table);
    for row in &preview.rows {
        table.add_row(row.iter().map(Cell::new));
    }
    println!("{table}");
    if preview.is_truncated() {
        println!(
            "Showing {} of {} rows",
            preview.rows.len(),
            preview.total_rows
        );
    }
}

pub fn print_months(session: &Session) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Month"), header_cell("Days")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for label in session.month_order() {
        let days = session.table().month(label).map_or(0, |month| month.len());
        let days_cell = if days == 0 { dim_cell(days) } else { Cell::new(days) };
        table.add_row(vec![Cell::new(label), days_cell]);
    }
    println!("{table}");
}

pub fn print_calendar(view: &MonthView) {
    println!("{}", view.month);
    if view.is_empty() {
        println!("{}", view.empty_message());
        return;
    }
    let mut table = Table::new();
    let mut header = vec![header_cell("Day")];
    header.extend((0..ROOM_COUNT).map(|index| header_cell(&room_label(index))));
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for day in &view.days {
        let mut row = vec![Cell::new(&day.day).add_attribute(Attribute::Bold)];
        row.extend(
            day.rooms
                .iter()
                .zip(day.display_rooms())
                .map(|(name, shown)| room_cell(name.is_empty(), shown)),
        );
        table.add_row(row);
    }
    println!("{table}");
}

pub fn print_availability(summary: &Availability) {
    println!("{} ({} days)", summary.month, summary.total_days);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Room"),
        header_cell("Occupied"),
        header_cell("Free"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for room in &summary.rooms {
        table.add_row(vec![
            Cell::new(&room.room),
            Cell::new(room.occupied),
            free_cell(room.free()),
        ]);
    }
    table.add_row(vec![
        Cell::new("Overall")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.occupied_slots()).add_attribute(Attribute::Bold),
        free_cell(summary.free_slots()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
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

fn room_cell(vacant: bool, shown: &str) -> Cell {
    if vacant {
        dim_cell(shown)
    } else {
        Cell::new(shown)
    }
}

fn free_cell(count: usize) -> Cell {
    if count == 0 {
        Cell::new(count).fg(Color::Red)
    } else {
        Cell::new(count).fg(Color::Green)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
