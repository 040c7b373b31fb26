//! Margin Extractor
//!
//! Recovers structured data from free-form assistant responses.
//!
//! # Overview
//!
//! The hosted text-to-SQL assistant answers in natural language, usually
//! embedding the SQL it ran inside a code fence and the result set as a
//! markdown pipe table. This crate deterministically recovers both:
//!
//! ```text
//! response text → extract_sql  → SQL statement (or empty)
//!               → extract_table → Table (or empty)
//!               → parse        → ParsedResponse
//! ```
//!
//! # Key Properties
//!
//! - **Total**: every function returns a well-defined value for every input;
//!   an extraction miss is an empty string or empty table, never an error
//! - **First match wins**: recognizers are tried in a fixed order and the
//!   first hit is returned
//! - **Independent**: a SQL-extraction miss never blanks a successfully
//!   extracted table, and vice versa
//!
//! # Example Usage
//!
//! ```
//! let response = "Here you go:\n```sql\nSELECT 1\n```";
//! let parsed = margin_extractor::parse(response);
//! assert_eq!(parsed.sql, "SELECT 1");
//! assert!(!parsed.has_table());
//! ```

#![warn(missing_docs)]

mod parser;
mod sql;
mod table;


pub use parser::parse;
pub use sql::extract_sql;
pub use table::extract_table;
