//! Project-type detection
//!
//! Classifies the working directory into one of a fixed set of technology
//! profiles by looking for well-known marker files.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// Technology profile of the project being summarized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectProfile {
    Laravel,
    Python,
    Dolibarr,
    Generic,
}

/// Marker files in priority order: framework bootstrap, CMS bootstrap,
/// then dependency manifests. First match wins.
const MARKERS: &[(&[&str], ProjectProfile)] = &[
    (&["artisan"], ProjectProfile::Laravel),
    (
        &["main.inc.php", "master.inc.php", "filefunc.inc.php"],
        ProjectProfile::Dolibarr,
    ),
    (
        &["requirements.txt", "pyproject.toml", "setup.py", "Pipfile"],
        ProjectProfile::Python,
    ),
];

impl ProjectProfile {
    /// Lowercase identifier used in prompts
    pub fn name(&self) -> &'static str {
        match self {
            ProjectProfile::Laravel => "laravel",
            ProjectProfile::Python => "python",
            ProjectProfile::Dolibarr => "dolibarr",
            ProjectProfile::Generic => "generic",
        }
    }

    /// Detect the profile from a set of file names
    pub fn detect<I, S>(file_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: HashSet<String> = file_names
            .into_iter()
            .map(|n| n.as_ref().to_string())
            .collect();

        MARKERS
            .iter()
            .find(|(markers, _)| markers.iter().any(|m| names.contains(*m)))
            .map(|(_, profile)| *profile)
            .unwrap_or(ProjectProfile::Generic)
    }

    /// Detect the profile from the entries of a directory
    ///
    /// An unreadable directory is treated as having no markers.
    pub fn detect_in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let entries = match fs::read_dir(dir.as_ref()) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    "Cannot list {}: {}; using generic profile",
                    dir.as_ref().display(),
                    e
                );
                return ProjectProfile::Generic;
            }
        };

        let names: HashSet<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();

        let profile = Self::detect(&names);
        tracing::debug!("Detected profile {} from {} entries", profile, names.len());
        profile
    }
}

impl fmt::Display for ProjectProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> HashSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_requirements_only_is_python() {
        assert_eq!(
            ProjectProfile::detect(&names(&["requirements.txt"])),
            ProjectProfile::Python
        );
    }

    #[test]
    fn test_artisan_only_is_laravel() {
        assert_eq!(
            ProjectProfile::detect(&names(&["artisan"])),
            ProjectProfile::Laravel
        );
    }

    #[test]
    fn test_no_markers_is_generic() {
        assert_eq!(
            ProjectProfile::detect(&names(&["README.md", "Cargo.toml", "src"])),
            ProjectProfile::Generic
        );
        assert_eq!(ProjectProfile::detect(&names(&[])), ProjectProfile::Generic);
    }

    #[test]
    fn test_framework_marker_beats_manifest() {
        assert_eq!(
            ProjectProfile::detect(&names(&["requirements.txt", "artisan", "composer.json"])),
            ProjectProfile::Laravel
        );
    }

    #[test]
    fn test_cms_marker_beats_manifest() {
        assert_eq!(
            ProjectProfile::detect(&names(&["pyproject.toml", "main.inc.php"])),
            ProjectProfile::Dolibarr
        );
    }

    #[test]
    fn test_detect_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("pyproject.toml"), "[project]\n").unwrap();
        assert_eq!(ProjectProfile::detect_in_dir(dir.path()), ProjectProfile::Python);
    }

    #[test]
    fn test_detect_in_missing_dir_is_generic() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert_eq!(ProjectProfile::detect_in_dir(missing), ProjectProfile::Generic);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(ProjectProfile::Dolibarr.to_string(), "dolibarr");
        assert_eq!(ProjectProfile::Python.name().to_uppercase(), "PYTHON");
    }
}
