use crate::application::dto::{ProjectionMetadata, ProjectionResponse};
use crate::application::read_models::{DependencyChanges, DependencyDescription};
use crate::ports::outbound::DescriptionFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ProjectionDocument<'a> {
    metadata: &'a ProjectionMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    changes: Option<&'a DependencyChanges>,
    dependencies: &'a [DependencyDescription],
}

/// JsonFormatter adapter producing the wire representation clients consume
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Single-line output for transports that frame by line
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptionFormatter for JsonFormatter {
    fn format(&self, response: &ProjectionResponse) -> Result<String> {
        let document = ProjectionDocument {
            metadata: &response.metadata,
            changes: response.changes.as_ref(),
            dependencies: &response.descriptions,
        };

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        };
        rendered.map_err(Into::into)
    }
}
