//! Names that are never captured or never written back.

use std::collections::BTreeSet;

/// Internal members no modifier should ever round-trip.
pub const INTERNAL_NAMES: [&str; 2] = ["is_override_data", "rna_type"];

/// Prefixes of builtin/registration members.
pub const INTERNAL_PREFIXES: [&str; 2] = ["__", "bl_"];

/// Written by the modifier stack itself when a modifier is added.
pub const STACK_MANAGED_NAMES: [&str; 1] = ["active"];

/// A set of member names (and name prefixes) to leave alone.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SkipList {
    names: BTreeSet<String>,
    prefixes: Vec<String>,
}

impl SkipList {
    /// Skip set applied when capturing.
    pub fn for_capture() -> Self {
        Self::default()
            .with_names(INTERNAL_NAMES)
            .with_prefixes(INTERNAL_PREFIXES)
    }

    /// Skip set applied when replaying onto a freshly added modifier.
    pub fn for_replay() -> Self {
        Self::default()
            .with_names(INTERNAL_NAMES)
            .with_names(STACK_MANAGED_NAMES)
    }

    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefixes.extend(prefixes.into_iter().map(Into::into));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name) || self.prefixes.iter().any(|p| name.starts_with(p.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_skips_internal_names_and_prefixes() {
        let skip = SkipList::for_capture();
        assert!(skip.contains("rna_type"));
        assert!(skip.contains("is_override_data"));
        assert!(skip.contains("bl_rna"));
        assert!(skip.contains("__doc__"));
        assert!(!skip.contains("active"));
        assert!(!skip.contains("count"));
    }

    #[test]
    fn test_replay_skips_active_flag() {
        let skip = SkipList::for_replay();
        assert!(skip.contains("active"));
        assert!(skip.contains("rna_type"));
        assert!(!skip.contains("bl_rna"));
    }

    #[test]
    fn test_with_names_extends() {
        let skip = SkipList::for_replay().with_names(["show_expanded"]);
        assert!(skip.contains("show_expanded"));
        assert!(skip.contains("active"));
    }
}
