//! Constraint propagation and search for the graph coloring problem.

/// AC-3 arc consistency propagation
pub mod ac3;

/// variable selection (MRV) and value ordering (LCV) heuristics
pub mod heuristics;

/// backtracking search with branch-local propagation
pub mod backtracking;
