//! Update mode selection for the mark phase.
//!
//! Both modes produce identical grids. The in-place mode relies on marks never
//! changing another cell's neighbor count within the same pass; the parallel
//! mode evaluates every decision against the pre-mark grid before applying any.

/// Available mark-phase implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UpdateMode {
    /// Evaluate and apply cell by cell, serial
    #[default]
    InPlace,
    /// Evaluate all decisions with rayon, then apply
    Parallel,
}

impl UpdateMode {
    /// Get all available modes
    pub fn all() -> Vec<UpdateMode> {
        vec![UpdateMode::InPlace, UpdateMode::Parallel]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            UpdateMode::InPlace => "InPlace",
            UpdateMode::Parallel => "Parallel",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UpdateMode::InPlace => "Mark while scanning, single thread",
            UpdateMode::Parallel => "Collect marks with rayon, apply after",
        }
    }

    /// Cycle to the next mode (used by the front end toggle)
    pub fn next(self) -> Self {
        match self {
            UpdateMode::InPlace => UpdateMode::Parallel,
            UpdateMode::Parallel => UpdateMode::InPlace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_in_place() {
        assert_eq!(UpdateMode::default(), UpdateMode::InPlace);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = UpdateMode::all().iter().map(|m| m.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_next_cycles_through_all() {
        for mode in UpdateMode::all() {
            assert_ne!(mode.next(), mode);
            assert_eq!(mode.next().next(), mode);
        }
    }
}
