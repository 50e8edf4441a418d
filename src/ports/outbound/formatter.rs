use crate::application::dto::ProjectionResponse;
use crate::shared::Result;

/// DescriptionFormatter port for rendering projection output
pub trait DescriptionFormatter {
    /// Renders the response
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &ProjectionResponse) -> Result<String>;
}
