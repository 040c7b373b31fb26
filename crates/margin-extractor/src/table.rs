//! Markdown pipe-table recognition

use margin_domain::Table;
use regex::Regex;
use std::sync::LazyLock;

/// Header/body divider: nothing but pipes, dashes, colons, and whitespace
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\|\s\-:]+$").expect("static separator pattern"));

/// Extract the first contiguous markdown-style pipe table found in `text`.
///
/// A trimmed line with at least two `|` characters starts (or continues) a
/// table run; separator lines inside the run are skipped. The run ends at
/// the first blank line or the first line without any pipe. A run needs a
/// header plus at least one data row, otherwise the result is the empty
/// table. Rows are positionally aligned to the header width and every cell
/// is trimmed.
///
/// Best-effort: malformed input degrades to padding/truncation or to the
/// empty table, never to an error.
///
/// # Examples
///
/// ```
/// use margin_extractor::extract_table;
///
/// let text = "| Type | Actual |\n|------|--------|\n| Food | 100 |";
/// let table = extract_table(text);
/// assert_eq!(table.columns, vec!["Type", "Actual"]);
/// assert_eq!(table.rows, vec![vec!["Food", "100"]]);
/// ```
pub fn extract_table(text: &str) -> Table {
    let mut collected: Vec<&str> = Vec::new();
    let mut in_table = false;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.matches('|').count() >= 2 {
            in_table = true;
            if !SEPARATOR.is_match(line) {
                collected.push(line);
            }
        } else if in_table && line.is_empty() {
            break;
        } else if in_table && !line.contains('|') {
            break;
        }
    }

    // Need at least a header and one data row
    if collected.len() < 2 {
        return Table::empty();
    }

    let columns = split_row(collected[0]);
    let rows = collected[1..].iter().map(|line| split_row(line)).collect();
    Table::new(columns, rows)
}

/// Strip one leading and one trailing pipe if present, split on `|`, and
/// trim each resulting cell.
fn split_row(line: &str) -> Vec<String> {
    let inner = line.strip_prefix('|').unwrap_or(line);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect()
}
