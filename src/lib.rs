//! Graph coloring solver based on constraint propagation (AC-3) and
//! heuristic backtracking search (MRV + LCV)

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// coloring base types, solutions and checker
pub mod color;

/// coloring instance (vertices + symmetric adjacency)
pub mod graph;

/// read instance files (`colors=K` directive + `a,b` edge lines)
pub mod parser;

/// solver state: candidate color domains and partial assignment
pub mod domains;

/// error taxonomy for instance loading
pub mod error;

/// helper and utility methods for executables
pub mod util;

/// constraint propagation and backtracking search
pub mod search;
