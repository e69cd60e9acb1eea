//! Generation part selection.

use std::{fmt, str::FromStr};

/// One selectable slice of a generation run.
///
/// Parts are what `--only` and `--skip` operate on. Each part owns a fixed
/// set of artifact files and runs in the order listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    /// RTK Query api slice and store barrel.
    Api,
    /// Type declarations.
    Types,
    /// Form, table and details components plus their barrel.
    Components,
    /// Routed pages for the entity.
    Pages,
    /// The entity data hook.
    Hooks,
    /// Vitest smoke tests.
    Tests,
}

impl Part {
    /// Every part, in run order.
    pub const ALL: [Part; 6] = [
        Part::Api,
        Part::Types,
        Part::Components,
        Part::Pages,
        Part::Hooks,
        Part::Tests,
    ];

    /// Returns the part identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Part::Api => "api",
            Part::Types => "types",
            Part::Components => "components",
            Part::Pages => "pages",
            Part::Hooks => "hooks",
            Part::Tests => "tests",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Part {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "api" => Ok(Part::Api),
            "types" => Ok(Part::Types),
            "components" => Ok(Part::Components),
            "pages" => Ok(Part::Pages),
            "hooks" => Ok(Part::Hooks),
            "tests" => Ok(Part::Tests),
            _ => Err(format!(
                "unknown part '{}', expected one of: api, types, components, pages, hooks, tests",
                s
            )),
        }
    }
}

/// Resolve the parts a run will execute.
///
/// Starts from `only` (or every part when absent), removes `skip`, and keeps
/// the canonical run order regardless of how the selection was spelled.
pub fn resolve_parts(only: Option<&[Part]>, skip: &[Part]) -> Vec<Part> {
    Part::ALL
        .iter()
        .copied()
        .filter(|part| only.is_none_or(|only| only.contains(part)))
        .filter(|part| !skip.contains(part))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Part::from_str("api").unwrap(), Part::Api);
        assert_eq!(Part::from_str("Components").unwrap(), Part::Components);
        assert_eq!(Part::from_str("TESTS").unwrap(), Part::Tests);
        assert!(Part::from_str("styles").is_err());
        assert!(
            Part::from_str("styles")
                .unwrap_err()
                .contains("api, types, components, pages, hooks, tests")
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Part::Api.to_string(), "api");
        assert_eq!(Part::Components.to_string(), "components");
    }

    #[test]
    fn test_resolve_defaults_to_all() {
        assert_eq!(resolve_parts(None, &[]), Part::ALL.to_vec());
    }

    #[test]
    fn test_resolve_only_keeps_run_order() {
        // Spelled backwards on the command line, still runs api before pages.
        let only = [Part::Pages, Part::Api];
        assert_eq!(resolve_parts(Some(&only), &[]), vec![Part::Api, Part::Pages]);
    }

    #[test]
    fn test_resolve_skip_removes() {
        let skip = [Part::Tests];
        let parts = resolve_parts(None, &skip);
        assert_eq!(parts.len(), 5);
        assert!(!parts.contains(&Part::Tests));
    }

    #[test]
    fn test_resolve_only_and_skip_compose() {
        let only = [Part::Api, Part::Tests];
        let skip = [Part::Tests];
        assert_eq!(resolve_parts(Some(&only), &skip), vec![Part::Api]);
    }
}
