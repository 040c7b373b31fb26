//! SQL statement recognition inside free-form text

use regex::Regex;
use std::sync::LazyLock;

/// Recognizers tried in order; the first non-empty capture wins.
///
/// A SQL-tagged fence takes precedence over a generic fence, which takes
/// precedence over inline statements. All patterns are case-insensitive and
/// the matched body may span multiple lines.
static SQL_RECOGNIZERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Fenced block explicitly tagged as SQL
        r"(?is)```sql\s*(.*?)\s*```",
        // Untagged fenced block whose content begins with SELECT
        r"(?is)```\s*(SELECT.*?)\s*```",
        // Inline statements, terminated by a semicolon or end of text
        r"(?is)(SELECT\s+.*?(?:;|$))",
        r"(?is)(INSERT\s+.*?(?:;|$))",
        r"(?is)(UPDATE\s+.*?(?:;|$))",
        r"(?is)(DELETE\s+.*?(?:;|$))",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("static recognizer pattern"))
    .collect()
});

/// Extract the first SQL statement found in `text`.
///
/// Best-effort textual recognition, not parsing: the matched span is
/// returned verbatim (trimmed) and may be malformed or partial SQL.
/// Returns an empty string when no recognizer matches.
///
/// # Examples
///
/// ```
/// use margin_extractor::extract_sql;
///
/// let text = "Here: ```sql\nSELECT 1\n``` and that's it";
/// assert_eq!(extract_sql(text), "SELECT 1");
/// assert_eq!(extract_sql("no sql here"), "");
/// ```
pub fn extract_sql(text: &str) -> String {
    for recognizer in SQL_RECOGNIZERS.iter() {
        if let Some(captures) = recognizer.captures(text) {
            if let Some(matched) = captures.get(1) {
                let sql = matched.as_str().trim();
                if !sql.is_empty() {
                    return sql.to_string();
                }
            }
        }
    }
    String::new()
}
