// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constraint lattice.
//!
//! The lattice holds every constraint the search assigns a face to:
//! - the universe (all symbols), always constraint 0
//! - the caller's relations, deduplicated
//! - pairwise intersections of those, closed under intersection up to a cap
//! - one singleton per symbol
//!
//! Constraints are bucketed by level (`ceil(log2(cardinality))`) and linked
//! by father/son edges forming the Hasse diagram of set inclusion: `a` is a
//! father of `b` when `b ⊊ a` and no other constraint lies strictly between.
//!
//! The lattice is built once per encoding run and never changes during search.

use crate::combinatorics::level;
use crate::error::EncodeError;
use crate::geometry::SymbolSet;
use crate::limits::Limits;
use std::collections::HashMap;

/// Index of a constraint in the lattice arena.
pub type ConstraintId = usize;

/// Where a constraint came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The set of all symbols.
    Universe,
    /// Caller relation at this index.
    Relation(usize),
    /// Intersection of two constraints already present.
    Intersection(ConstraintId, ConstraintId),
    /// The single symbol at this index.
    Singleton(usize),
}

/// A node of the lattice.
#[derive(Debug, Clone)]
pub struct Constraint {
    pub id: ConstraintId,
    pub members: SymbolSet,
    pub cardinality: usize,
    pub level: usize,
    pub origin: Origin,
    /// Minimal proper supersets, ascending id.
    pub fathers: Vec<ConstraintId>,
    /// Maximal proper subsets, ascending id.
    pub sons: Vec<ConstraintId>,
}

/// The leveled constraint DAG.
#[derive(Debug, Clone)]
pub struct Lattice {
    constraints: Vec<Constraint>,
    levels: Vec<Vec<ConstraintId>>,
    singletons: Vec<ConstraintId>,
    symbol_count: usize,
    truncated: bool,
}

/// Universe is always the first constraint.
pub const UNIVERSE: ConstraintId = 0;

impl Lattice {
    /// Build the lattice for `symbol_count` symbols from the caller's relations.
    ///
    /// Relations equal to the universe or to a single symbol merge with the
    /// trivial constraints. When more than `limits.max_new_constraints`
    /// intersections would be added, generation stops and the lattice is
    /// marked truncated; this is not an error.
    pub fn build(
        symbol_count: usize,
        relations: &[SymbolSet],
        limits: &Limits,
    ) -> Result<Self, EncodeError> {
        if symbol_count == 0 {
            return Err(EncodeError::NoSymbols);
        }
        for (index, relation) in relations.iter().enumerate() {
            if relation.width() != symbol_count {
                return Err(EncodeError::WidthMismatch {
                    index,
                    expected: symbol_count,
                    found: relation.width(),
                });
            }
            if relation.is_empty() {
                return Err(EncodeError::EmptyConstraint(index));
            }
        }

        let mut builder = Builder::default();
        builder.insert(SymbolSet::full(symbol_count), Origin::Universe);
        for (index, relation) in relations.iter().enumerate() {
            if relation.len() > 1 {
                builder.insert(relation.clone(), Origin::Relation(index));
            }
        }
        let truncated = builder.close_under_intersection(limits.max_new_constraints);

        let singletons: Vec<ConstraintId> = (0..symbol_count)
            .map(|symbol| {
                builder.insert(
                    SymbolSet::singleton(symbol_count, symbol),
                    Origin::Singleton(symbol),
                )
            })
            .collect();

        let mut constraints: Vec<Constraint> = builder
            .sets
            .into_iter()
            .zip(builder.origins)
            .enumerate()
            .map(|(id, (members, origin))| {
                let cardinality = members.len();
                Constraint {
                    id,
                    members,
                    cardinality,
                    level: level(cardinality),
                    origin,
                    fathers: Vec::new(),
                    sons: Vec::new(),
                }
            })
            .collect();

        link_fathers(&mut constraints);

        let top = level(symbol_count);
        let mut levels = vec![Vec::new(); top + 1];
        for constraint in &constraints {
            levels[constraint.level].push(constraint.id);
        }

        log::info!(
            "lattice: {} symbols, {} constraints, {} levels{}",
            symbol_count,
            constraints.len(),
            levels.len(),
            if truncated { " (truncated)" } else { "" }
        );

        Ok(Self {
            constraints,
            levels,
            singletons,
            symbol_count,
            truncated,
        })
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn constraint(&self, id: ConstraintId) -> &Constraint {
        &self.constraints[id]
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn universe(&self) -> ConstraintId {
        UNIVERSE
    }

    /// The constraint holding only `symbol`.
    ///
    /// With a single symbol this is the universe itself.
    pub fn singleton(&self, symbol: usize) -> ConstraintId {
        self.singletons[symbol]
    }

    pub fn symbol_count(&self) -> usize {
        self.symbol_count
    }

    /// Constraint ids bucketed by level, level 0 first.
    pub fn levels(&self) -> &[Vec<ConstraintId>] {
        &self.levels
    }

    /// Level of the universe: `ceil(log2(symbol_count))`.
    pub fn top_level(&self) -> usize {
        self.levels.len() - 1
    }

    /// True if intersection generation hit the cap.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    pub fn fathers(&self, id: ConstraintId) -> &[ConstraintId] {
        &self.constraints[id].fathers
    }

    pub fn sons(&self, id: ConstraintId) -> &[ConstraintId] {
        &self.constraints[id].sons
    }

    pub fn members(&self, id: ConstraintId) -> &SymbolSet {
        &self.constraints[id].members
    }

    /// Find the constraint with exactly these members.
    pub fn find(&self, members: &SymbolSet) -> Option<ConstraintId> {
        self.constraints
            .iter()
            .find(|c| &c.members == members)
            .map(|c| c.id)
    }

    /// True if `a` and `b` have at least one son in common.
    pub fn share_son(&self, a: ConstraintId, b: ConstraintId) -> bool {
        let sons_b = &self.constraints[b].sons;
        self.constraints[a].sons.iter().any(|s| sons_b.contains(s))
    }

    /// Sons common to `a` and `b`, ascending id.
    pub fn common_sons(&self, a: ConstraintId, b: ConstraintId) -> Vec<ConstraintId> {
        let sons_b = &self.constraints[b].sons;
        self.constraints[a]
            .sons
            .iter()
            .copied()
            .filter(|s| sons_b.contains(s))
            .collect()
    }
}

/// Arena under construction, deduplicated by member set.
#[derive(Default)]
struct Builder {
    sets: Vec<SymbolSet>,
    origins: Vec<Origin>,
    index: HashMap<SymbolSet, ConstraintId>,
}

impl Builder {
    /// Insert unless present; returns the id either way.
    fn insert(&mut self, members: SymbolSet, origin: Origin) -> ConstraintId {
        if let Some(&id) = self.index.get(&members) {
            return id;
        }
        let id = self.sets.len();
        self.index.insert(members.clone(), id);
        self.sets.push(members);
        self.origins.push(origin);
        id
    }

    /// Add intersections of every pair until closed or `cap` new sets were added.
    ///
    /// Returns true if the cap stopped generation early.
    fn close_under_intersection(&mut self, cap: usize) -> bool {
        let mut added = 0;
        let mut i = UNIVERSE + 1;
        while i < self.sets.len() {
            for j in UNIVERSE + 1..i {
                let meet = self.sets[i].intersection(&self.sets[j]);
                if meet.len() < 2 || self.index.contains_key(&meet) {
                    continue;
                }
                if added >= cap {
                    log::warn!(
                        "lattice: intersection cap of {} reached, continuing with a partial lattice",
                        cap
                    );
                    return true;
                }
                self.insert(meet, Origin::Intersection(j, i));
                added += 1;
            }
            i += 1;
        }
        false
    }
}

/// Fill fathers with the minimal proper supersets, and sons as the inverse.
fn link_fathers(constraints: &mut [Constraint]) {
    let mut by_size: Vec<ConstraintId> = (0..constraints.len()).collect();
    by_size.sort_by_key(|&id| (constraints[id].cardinality, id));

    for b in 0..constraints.len() {
        let mut fathers: Vec<ConstraintId> = Vec::new();
        for &a in &by_size {
            if constraints[a].cardinality <= constraints[b].cardinality {
                continue;
            }
            if !constraints[b].members.is_proper_subset(&constraints[a].members) {
                continue;
            }
            // Candidates come smallest first, so any tighter cover is already linked.
            let covered = fathers
                .iter()
                .any(|&f| constraints[f].members.is_proper_subset(&constraints[a].members));
            if !covered {
                fathers.push(a);
            }
        }
        fathers.sort_unstable();
        constraints[b].fathers = fathers;
    }

    for b in 0..constraints.len() {
        for i in 0..constraints[b].fathers.len() {
            let father = constraints[b].fathers[i];
            constraints[father].sons.push(b);
        }
    }
}
