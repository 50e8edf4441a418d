use super::{DiagnosticMessage, LibraryNode};

/// ResolutionSnapshot aggregate: one resolved graph plus the diagnostics collected for it
#[derive(Debug, Clone, Default)]
pub struct ResolutionSnapshot {
    libraries: Vec<LibraryNode>,
    diagnostics: Vec<DiagnosticMessage>,
}

impl ResolutionSnapshot {
    pub fn new(libraries: Vec<LibraryNode>, diagnostics: Vec<DiagnosticMessage>) -> Self {
        Self {
            libraries,
            diagnostics,
        }
    }

    pub fn libraries(&self) -> &[LibraryNode] {
        &self.libraries
    }

    pub fn diagnostics(&self) -> &[DiagnosticMessage] {
        &self.diagnostics
    }

    pub fn library_count(&self) -> usize {
        self.libraries.len()
    }

    pub fn unresolved_count(&self) -> usize {
        self.libraries.iter().filter(|l| !l.is_resolved()).count()
    }
}
