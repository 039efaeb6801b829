use std::borrow::Cow;

use ghcal_model::Grid;

/// Quote a cell if it contains a comma, a double quote or a newline.
pub fn quote_cell(cell: &str) -> Cow<'_, str> {
    if cell.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", cell.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(cell)
    }
}

/// Render a grid as CSV text: `,` between cells, `\n` between rows, no
/// trailing newline.
pub fn write_csv(grid: &Grid) -> String {
    grid.iter()
        .map(|row| {
            row.iter()
                .map(|cell| quote_cell(cell))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_cells_stay_bare() {
        assert_eq!(quote_cell("John Doe"), "John Doe");
        assert_eq!(quote_cell(""), "");
        assert_eq!(quote_cell(" padded "), " padded ");
    }

    #[test]
    fn special_cells_are_quoted() {
        assert_eq!(quote_cell("Doe, John"), "\"Doe, John\"");
        assert_eq!(quote_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(quote_cell("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn carriage_return_alone_is_not_quoted() {
        assert_eq!(quote_cell("a\rb"), "a\rb");
    }

    #[test]
    fn rows_join_without_trailing_newline() {
        let grid = Grid::new(vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string()],
        ]);
        assert_eq!(write_csv(&grid), "a,b\nc");
    }
}
