//! Quoting helpers for statements that cannot take bind parameters.
//!
//! PostgreSQL utility statements (`CREATE ROLE`, `DROP ROLE`) reject
//! server-side parameters, so the role name and password have to be spliced
//! into the statement text. These helpers apply the server's own quoting
//! rules so arbitrary names and passwords stay inert.

/// Quote `name` as a SQL identifier.
///
/// Wraps in double quotes and doubles any embedded double quote, matching
/// the server's `quote_ident`.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Quote `value` as a SQL string literal.
///
/// Doubles embedded single quotes; when the value contains a backslash the
/// literal is emitted in `E''` form with backslashes doubled as well, so the
/// result is safe regardless of the server's `standard_conforming_strings`
/// setting.
pub fn quote_literal(value: &str) -> String {
    let escaped = value.replace('\'', "''");
    if value.contains('\\') {
        format!("E'{}'", escaped.replace('\\', "\\\\"))
    } else {
        format!("'{escaped}'")
    }
}
