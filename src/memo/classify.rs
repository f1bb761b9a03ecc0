// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Face category and dimension range of each constraint.
//!
//! For a hypercube dimension d:
//! - the universe is category 0 and gets the whole cube (dimension d)
//! - a constraint whose only father is the universe is category 1; its face
//!   dimension is a free choice in `[min, d-1]` made by the outer search
//! - a constraint with two or more fathers is category 2
//! - a constraint with one father other than the universe is category 3
//!
//! The minimum of every constraint is its level, raised bottom-up so that it
//! exceeds the minimum of each of its sons. When the universe minimum then
//! exceeds d, d itself is raised.

use crate::memo::{ConstraintId, Lattice, UNIVERSE};
use std::fmt;

/// How a constraint's face is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// The universe: always the whole cube.
    #[default]
    Universe,
    /// Only father is the universe.
    UniverseChild,
    /// Two or more fathers; face lies in their intersection.
    MultipleFathers,
    /// One father other than the universe; face lies inside it.
    SingleFather,
}

impl Category {
    /// Numeric category, 0 to 3.
    pub fn index(self) -> usize {
        match self {
            Category::Universe => 0,
            Category::UniverseChild => 1,
            Category::MultipleFathers => 2,
            Category::SingleFather => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cat{}", self.index())
    }
}

/// Category and face-dimension range of one constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceRange {
    pub category: Category,
    pub min_dim: usize,
    pub max_dim: usize,
}

impl FaceRange {
    /// Number of dimensions in the range, zero if empty.
    pub fn width(&self) -> usize {
        (self.max_dim + 1).saturating_sub(self.min_dim)
    }
}

/// Ranges for every constraint at one hypercube dimension.
#[derive(Debug, Clone)]
pub struct Classification {
    /// Hypercube dimension, possibly raised above the one requested.
    pub dimension: usize,
    pub ranges: Vec<FaceRange>,
}

impl Classification {
    pub fn range(&self, id: ConstraintId) -> &FaceRange {
        &self.ranges[id]
    }

    /// True if every category-1 range is non-empty.
    pub fn is_feasible(&self) -> bool {
        self.ranges
            .iter()
            .filter(|r| r.category == Category::UniverseChild)
            .all(|r| r.min_dim <= r.max_dim)
    }
}

/// Classify every constraint for a hypercube of `dimension`.
pub fn classify(lattice: &Lattice, dimension: usize) -> Classification {
    let minima = min_dims(lattice);
    let mut ranges: Vec<FaceRange> = lattice
        .constraints()
        .iter()
        .map(|c| {
            let category = if c.id == UNIVERSE {
                Category::Universe
            } else if c.fathers.len() >= 2 {
                Category::MultipleFathers
            } else if c.fathers == [UNIVERSE] {
                Category::UniverseChild
            } else {
                Category::SingleFather
            };
            FaceRange {
                category,
                min_dim: minima[c.id],
                max_dim: minima[c.id],
            }
        })
        .collect();

    let dimension = dimension.max(ranges[UNIVERSE].min_dim);
    for (id, range) in ranges.iter_mut().enumerate() {
        let cardinality = lattice.constraint(id).cardinality;
        range.max_dim = match range.category {
            Category::Universe => {
                range.min_dim = dimension;
                dimension
            }
            _ if cardinality == 1 => range.min_dim,
            _ => dimension.saturating_sub(1),
        };
    }

    Classification { dimension, ranges }
}

/// Minimum face dimension of every constraint, independent of the cube.
///
/// Starts from each level and raises bottom-up: a constraint's minimum
/// exceeds each son's by at least one.
pub(crate) fn min_dims(lattice: &Lattice) -> Vec<usize> {
    let mut minima: Vec<usize> = lattice.constraints().iter().map(|c| c.level).collect();
    let mut order: Vec<ConstraintId> = (0..lattice.len()).collect();
    order.sort_by_key(|&id| (lattice.constraint(id).cardinality, id));
    for id in order {
        let floor = lattice
            .sons(id)
            .iter()
            .map(|&s| minima[s] + 1)
            .max()
            .unwrap_or(0);
        if floor > minima[id] {
            minima[id] = floor;
        }
    }
    minima
}
