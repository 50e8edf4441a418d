use crate::application::dto::ProjectionResponse;
use crate::application::read_models::{DependencyChanges, DependencyDescription, DiagnosticMessageView};
use crate::ports::outbound::DescriptionFormatter;
use crate::shared::Result;

const TABLE_HEADER: &str =
    "| Library | Version | Type | Resolved | Dependencies | Errors | Warnings |\n";

const TABLE_SEPARATOR: &str =
    "|---------|---------|------|----------|--------------|--------|----------|\n";

/// MarkdownFormatter adapter for a human-readable summary of the projection
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_row(description: &DependencyDescription) -> String {
        let dependencies = description
            .dependencies()
            .iter()
            .map(|d| d.name())
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "| {} | {} | {} | {} | {} | {} | {} |\n",
            Self::escape_cell(description.display_name()),
            Self::escape_cell(description.version().unwrap_or("-")),
            description.library_type(),
            if description.is_resolved() { "yes" } else { "no" },
            Self::escape_cell(if dependencies.is_empty() { "-" } else { dependencies.as_str() }),
            description.errors().len(),
            description.warnings().len(),
        )
    }

    fn render_changes(changes: &DependencyChanges) -> String {
        let mut output = String::from("## Changes\n\n");
        if !changes.has_changes() {
            output.push_str("No changes since the previous snapshot.\n\n");
            return output;
        }

        for (label, names) in [
            ("Added", &changes.added),
            ("Changed", &changes.changed),
            ("Removed", &changes.removed),
        ] {
            if !names.is_empty() {
                output.push_str(&format!("- **{}**: {}\n", label, names.join(", ")));
            }
        }
        output.push_str(&format!("- **Unchanged**: {}\n\n", changes.unchanged));
        output
    }

    /// Wraps text in an inline code span that survives embedded backticks
    ///
    /// The fence is one backtick longer than the longest backtick run in the
    /// text, padded with spaces when the text touches a backtick.
    fn code_span(text: &str) -> String {
        let text = text.replace('\n', " ");
        let longest_run = text
            .split(|c| c != '`')
            .map(str::len)
            .max()
            .unwrap_or(0);
        let fence = "`".repeat(longest_run + 1);

        if longest_run > 0 {
            format!("{} {} {}", fence, text, fence)
        } else {
            format!("{}{}{}", fence, text, fence)
        }
    }

    fn render_diagnostics(title: &str, diagnostics: &[DiagnosticMessageView]) -> String {
        let mut output = format!("### {}\n\n", title);
        for diagnostic in diagnostics {
            output.push_str(&format!(
                "- {}\n",
                Self::code_span(diagnostic.formatted_message())
            ));
        }
        output.push('\n');
        output
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptionFormatter for MarkdownFormatter {
    fn format(&self, response: &ProjectionResponse) -> Result<String> {
        let mut output = String::from("# Dependency Descriptions\n\n");
        output.push_str(&format!(
            "Generated by {} {} at {} ({} libraries)\n\n",
            response.metadata.tool_name(),
            response.metadata.tool_version(),
            response.metadata.timestamp(),
            response.metadata.library_count(),
        ));

        if let Some(changes) = &response.changes {
            output.push_str(&Self::render_changes(changes));
        }

        if response.descriptions.is_empty() {
            output.push_str("No libraries to show.\n");
            return Ok(output);
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for description in &response.descriptions {
            output.push_str(&Self::render_row(description));
        }
        output.push('\n');

        // Every description carries the same graph-wide diagnostics.
        let first = &response.descriptions[0];
        if !first.errors().is_empty() || !first.warnings().is_empty() {
            output.push_str("## Diagnostics\n\n");
            if !first.errors().is_empty() {
                output.push_str(&Self::render_diagnostics("Errors", first.errors()));
            }
            if !first.warnings().is_empty() {
                output.push_str(&Self::render_diagnostics("Warnings", first.warnings()));
            }
        }

        Ok(output)
    }
}
