use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::DescriptionFormatter;

/// Factory for creating description formatters
///
/// Lives in the application layer because it chooses infrastructure
/// adapters from an application-level setting.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates the formatter for `format`
    ///
    /// `compact` only affects JSON output.
    ///
    /// # Examples
    /// ```
    /// use project_model_view::application::dto::OutputFormat;
    /// use project_model_view::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, false);
    /// ```
    pub fn create(format: OutputFormat, compact: bool) -> Box<dyn DescriptionFormatter> {
        match (format, compact) {
            (OutputFormat::Json, false) => Box::new(JsonFormatter::new()),
            (OutputFormat::Json, true) => Box::new(JsonFormatter::compact()),
            (OutputFormat::Markdown, _) => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Progress message shown before formatting
    ///
    /// # Examples
    /// ```
    /// use project_model_view::application::dto::OutputFormat;
    /// use project_model_view::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON dependency descriptions...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON dependency descriptions...",
            OutputFormat::Markdown => "📝 Generating Markdown summary...",
        }
    }
}
