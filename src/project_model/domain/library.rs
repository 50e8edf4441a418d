use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

/// Maximum length for library names (security limit)
const MAX_LIBRARY_NAME_LENGTH: usize = 255;

/// NewType wrapper for a library name with validation
///
/// Framework reference assemblies are named with an `fx/` prefix,
/// so `/` is accepted alongside the usual package characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LibraryName(String);

impl LibraryName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Library name cannot be empty");
        }

        if name.len() > MAX_LIBRARY_NAME_LENGTH {
            anyhow::bail!(
                "Library name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_LIBRARY_NAME_LENGTH
            );
        }

        if name.chars().any(char::is_control) {
            anyhow::bail!("Library name '{}' contains control characters", name.escape_debug());
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LibraryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolved library version
///
/// Follows NuGet's version grammar: one to four numeric parts, then an
/// optional `-prerelease` and `+build` tail. Missing minor/patch parts are
/// padded with zero and leading zeros are dropped, so `1.0` renders as
/// `1.0.0` and `1.01.0` as `1.1.0`. A fourth (revision) part is kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LibraryVersion {
    version: semver::Version,
    revision: Option<u64>,
}

impl LibraryVersion {
    pub fn parse(version: &str) -> Result<Self> {
        let trimmed = version.trim();
        if trimmed.is_empty() {
            anyhow::bail!("Library version cannot be empty");
        }

        Self::parse_parts(trimmed)
            .map_err(|reason| anyhow::anyhow!("Invalid library version '{}': {}", trimmed, reason))
    }

    fn parse_parts(text: &str) -> std::result::Result<Self, String> {
        let (release, build) = match text.split_once('+') {
            Some((release, build)) => (release, Some(build)),
            None => (text, None),
        };
        let (numbers, pre) = match release.split_once('-') {
            Some((numbers, pre)) => (numbers, Some(pre)),
            None => (release, None),
        };

        let parts = numbers
            .split('.')
            .map(|part| {
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(format!("'{}' is not a numeric version part", part));
                }
                part.parse::<u64>().map_err(|e| e.to_string())
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        if parts.len() > 4 {
            return Err(format!("expected at most 4 numeric parts, found {}", parts.len()));
        }

        let mut version = semver::Version::new(
            parts[0],
            parts.get(1).copied().unwrap_or(0),
            parts.get(2).copied().unwrap_or(0),
        );
        if pre == Some("") || build == Some("") {
            return Err("empty prerelease or build label".to_string());
        }
        if let Some(pre) = pre {
            version.pre = semver::Prerelease::new(pre).map_err(|e| e.to_string())?;
        }
        if let Some(build) = build {
            version.build = semver::BuildMetadata::new(build).map_err(|e| e.to_string())?;
        }

        Ok(Self {
            version,
            revision: parts.get(3).copied(),
        })
    }
}

/// Canonical string form of the version
impl fmt::Display for LibraryVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = &self.version;
        write!(f, "{}.{}.{}", v.major, v.minor, v.patch)?;
        if let Some(revision) = self.revision {
            write!(f, ".{}", revision)?;
        }
        if !v.pre.is_empty() {
            write!(f, "-{}", v.pre)?;
        }
        if !v.build.is_empty() {
            write!(f, "+{}", v.build)?;
        }
        Ok(())
    }
}

/// Kind of library a graph node stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibraryType {
    Package,
    Project,
    MSBuildProject,
    ReferenceAssembly,
    Unspecified,
}

impl LibraryType {
    /// Canonical string tag sent to clients
    pub fn as_str(&self) -> &'static str {
        match self {
            LibraryType::Package => "Package",
            LibraryType::Project => "Project",
            LibraryType::MSBuildProject => "MSBuildProject",
            LibraryType::ReferenceAssembly => "ReferenceAssembly",
            LibraryType::Unspecified => "Unspecified",
        }
    }
}

impl FromStr for LibraryType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "package" => Ok(LibraryType::Package),
            "project" => Ok(LibraryType::Project),
            "msbuildproject" => Ok(LibraryType::MSBuildProject),
            "referenceassembly" => Ok(LibraryType::ReferenceAssembly),
            "unspecified" => Ok(LibraryType::Unspecified),
            _ => Err(format!(
                "Unknown library type '{}'. Expected one of: Package, Project, MSBuildProject, ReferenceAssembly, Unspecified",
                s
            )),
        }
    }
}

impl fmt::Display for LibraryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a library within a resolved graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryIdentity {
    name: LibraryName,
    version: Option<LibraryVersion>,
    library_type: LibraryType,
}

impl LibraryIdentity {
    pub fn new(
        name: LibraryName,
        version: Option<LibraryVersion>,
        library_type: LibraryType,
    ) -> Self {
        Self {
            name,
            version,
            library_type,
        }
    }

    pub fn name(&self) -> &LibraryName {
        &self.name
    }

    pub fn version(&self) -> Option<&LibraryVersion> {
        self.version.as_ref()
    }

    pub fn library_type(&self) -> LibraryType {
        self.library_type
    }
}
