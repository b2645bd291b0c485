use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)\[table\](.*?)\[/table\]").expect("valid table pattern"));
static ROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)\[tr\](.*?)\[/tr\]").expect("valid row pattern"));
static HEADER_CELL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)\[th\](.*?)\[/th\]").expect("valid th pattern"));
static DATA_CELL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)\[td\](.*?)\[/td\]").expect("valid td pattern"));

/// Resolves `[table]` blocks. Rows and cells are only recognized inside a
/// table; cell content is trimmed.
pub fn resolve_tables(text: &str) -> String {
    TABLE
        .replace_all(text, |caps: &Captures| {
            let rows = ROW.replace_all(&caps[1], |row: &Captures| {
                format!("<tr>{}</tr>", resolve_cells(&row[1]))
            });
            format!("<table>{rows}</table>")
        })
        .into_owned()
}

fn resolve_cells(row: &str) -> String {
    let headers = HEADER_CELL.replace_all(row, |cell: &Captures| {
        format!("<th>{}</th>", cell[1].trim())
    });
    DATA_CELL
        .replace_all(&headers, |cell: &Captures| {
            format!("<td>{}</td>", cell[1].trim())
        })
        .into_owned()
}
