//! Compose the SQL and table extractors over one response string

use crate::sql::extract_sql;
use crate::table::extract_table;
use margin_domain::ParsedResponse;
use tracing::debug;

/// Parse a free-form assistant response into its structured parts.
///
/// An empty response yields the sentinel answer with empty SQL and table.
/// Otherwise the answer is the response verbatim and the two extractors run
/// independently: a miss on one side never blanks the other's result, and
/// no failure escapes this call.
///
/// # Examples
///
/// ```
/// let parsed = margin_extractor::parse("");
/// assert_eq!(parsed.answer, margin_domain::NO_RESPONSE);
///
/// let parsed = margin_extractor::parse("plain prose answer");
/// assert_eq!(parsed.answer, "plain prose answer");
/// assert!(!parsed.has_sql());
/// ```
pub fn parse(response_text: &str) -> ParsedResponse {
    if response_text.is_empty() {
        return ParsedResponse::no_response();
    }

    let sql = extract_sql(response_text);
    let table = extract_table(response_text);

    debug!(
        sql_found = !sql.is_empty(),
        table_rows = table.rows.len(),
        "parsed assistant response"
    );

    ParsedResponse {
        answer: response_text.to_string(),
        sql,
        table,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use margin_domain::NO_RESPONSE;

    #[test]
    fn test_empty_response_sentinel() {
        let parsed = parse("");
        assert_eq!(parsed.answer, NO_RESPONSE);
        assert!(!parsed.has_sql());
        assert!(!parsed.has_table());
    }

    #[test]
    fn test_answer_is_verbatim() {
        let text = "Some answer with SELECT 1; inside";
        let parsed = parse(text);
        assert_eq!(parsed.answer, text);
    }

    #[test]
    fn test_sql_and_table_extracted_together() {
        let text = "Query:\n```sql\nSELECT Type, Actual FROM pnl\n```\nResults:\n| Type | Actual |\n|------|--------|\n| Food | 100 |";
        let parsed = parse(text);
        assert_eq!(parsed.sql, "SELECT Type, Actual FROM pnl");
        assert_eq!(parsed.table.columns, vec!["Type", "Actual"]);
        assert_eq!(parsed.table.rows, vec![vec!["Food", "100"]]);
    }

    #[test]
    fn test_table_survives_sql_miss() {
        let text = "No query was needed.\n| A | B |\n| 1 | 2 |";
        let parsed = parse(text);
        assert!(!parsed.has_sql());
        assert!(parsed.has_table());
    }

    #[test]
    fn test_sql_survives_table_miss() {
        let text = "I ran SELECT COUNT(*) FROM stores; and found 847 stores.";
        let parsed = parse(text);
        assert!(parsed.has_sql());
        assert!(!parsed.has_table());
    }
}
