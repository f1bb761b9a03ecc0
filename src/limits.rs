// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Resource limits for lattice construction and search.

/// Engineering bounds applied during an encoding run.
///
/// None of these has a derivation; they are empirical caps. The lattice cap
/// truncates silently (with a warning), the others abort with an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of intersection constraints added to the lattice.
    pub max_new_constraints: usize,
    /// Abort once this many candidate codes have been tried in total.
    pub work_limit: Option<u64>,
    /// Largest hypercube dimension the search may use.
    pub max_dimension: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_new_constraints: 1000,
            work_limit: None,
            max_dimension: 63,
        }
    }
}

impl Limits {
    /// Create limits with custom values.
    pub fn new(max_new_constraints: usize, work_limit: Option<u64>, max_dimension: usize) -> Self {
        Self {
            max_new_constraints,
            work_limit,
            max_dimension,
        }
    }

    /// No work limit and a generous intersection cap.
    pub fn permissive() -> Self {
        Self {
            max_new_constraints: 100_000,
            work_limit: None,
            max_dimension: 63,
        }
    }

    /// Tight limits for interactive use.
    pub fn strict() -> Self {
        Self {
            max_new_constraints: 100,
            work_limit: Some(1_000_000),
            max_dimension: 24,
        }
    }

    /// Copy of these limits with the given work limit.
    pub fn with_work_limit(self, work_limit: u64) -> Self {
        Self {
            work_limit: Some(work_limit),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_caps_intersections_at_1000() {
        let limits = Limits::default();
        assert_eq!(limits.max_new_constraints, 1000);
        assert_eq!(limits.work_limit, None);
    }

    #[test]
    fn test_with_work_limit() {
        let limits = Limits::strict().with_work_limit(42);
        assert_eq!(limits.work_limit, Some(42));
        assert_eq!(limits.max_new_constraints, 100);
    }
}
