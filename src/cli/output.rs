//! Output formatting for CLI

use std::collections::BTreeMap;

use crate::configuration::FieldSummary;
use crate::error::ConfigurationError;

/// Format inferred fields as a plain-text table
pub fn format_field_table(fields: &BTreeMap<String, FieldSummary>, record_count: usize) -> String {
    let mut output = String::new();

    if fields.is_empty() {
        output.push_str("No fields found.\n");
        return output;
    }

    let width = fields.keys().map(|k| k.chars().count()).max().unwrap_or(0).max(5);

    output.push_str(&format!(
        "{} field(s) inferred from {} record(s):\n\n",
        fields.len(),
        record_count
    ));
    output.push_str(&format!(
        "  {:<width$}  {:<12}  {:<8}  {}\n",
        "FIELD",
        "TYPE",
        "SORT",
        "FACET",
        width = width
    ));

    for (name, summary) in fields {
        output.push_str(&format!(
            "  {:<width$}  {:<12}  {:<8}  {}\n",
            name,
            summary.field_type.type_name(),
            yes_no(summary.sortable),
            yes_no(summary.facetable),
            width = width
        ));
    }

    output
}

/// Format inferred fields as pretty-printed JSON
pub fn format_field_json(
    fields: &BTreeMap<String, FieldSummary>,
) -> Result<String, ConfigurationError> {
    serde_json::to_string_pretty(fields)
        .map_err(|e| ConfigurationError::Serialization(e.to_string()))
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "-" }
}
