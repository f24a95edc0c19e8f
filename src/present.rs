//! Table rendering
//!
//! Renders items as a grid table:
//!
//! ```text
//! +----+--------+----------+-------+------------+
//! | ID |  Name  | Quantity | Price | Total cost |
//! +====+========+==========+=======+============+
//! | A1 | Widget |    5     | 2.00  |   10.00    |
//! +----+--------+----------+-------+------------+
//! ```
//!
//! Widths are counted in characters, so non-ASCII names line up.

use crate::item::Item;

/// Column headers, in display order
pub const HEADERS: [&str; 5] = ["ID", "Name", "Quantity", "Price", "Total cost"];

/// Cell text for one item
pub fn item_row(item: &Item) -> [String; 5] {
    [
        item.id().to_string(),
        item.name().to_string(),
        item.quantity().to_string(),
        format!("{:.2}", item.unit_price()),
        format!("{:.2}", item.total_cost()),
    ]
}

/// Render items as a grid table, one row per item
pub fn render_table<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a Item>,
{
    let rows: Vec<[String; 5]> = items.into_iter().map(item_row).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let headers = HEADERS.map(str::to_string);
    let mut out = String::new();
    out.push_str(&border(&widths, '-'));
    out.push_str(&line(&widths, &headers));
    if rows.is_empty() {
        out.push_str(&border(&widths, '-'));
        return out;
    }

    out.push_str(&border(&widths, '='));
    for row in &rows {
        out.push_str(&line(&widths, row));
        out.push_str(&border(&widths, '-'));
    }
    out
}

fn border(widths: &[usize; 5], fill: char) -> String {
    let mut s = String::from("+");
    for width in widths {
        // One space of padding on each side of the cell
        s.extend(std::iter::repeat(fill).take(width + 2));
        s.push('+');
    }
    s.push('\n');
    s
}

fn line(widths: &[usize; 5], cells: &[String; 5]) -> String {
    let mut s = String::from("|");
    for (width, cell) in widths.iter().zip(cells) {
        s.push_str(&format!(" {:^width$} |", cell, width = *width));
    }
    s.push('\n');
    s
}
