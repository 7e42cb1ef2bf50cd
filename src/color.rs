use std::collections::BTreeMap;

use crate::graph::Instance;

/** Vertex Id (raw identifier, as declared in the instance file) */
pub type VertexId = usize;

/** Color Id (a value in `0..nb_colors`) */
pub type Color = usize;

/** Solution of a graph coloring problem.
Keyed by raw vertex id; iterates sorted by vertex id. */
pub type Coloring = BTreeMap<VertexId, Color>;

/** result of the solution checker */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// the coloring is proper; contains the number of distinct colors used
    Ok(usize),
    /// some vertex of the instance has no color
    MissingVertex(VertexId),
    /// some vertex uses a color outside `0..nb_colors`
    ColorOutOfRange(VertexId, Color),
    /// both endpoints of an edge share the same color
    ConflictingEdge(VertexId, VertexId),
}

/**
checks a complete coloring against an instance:
 - every vertex of the instance is colored
 - every color belongs to `0..nb_colors`
 - no edge is monochromatic
*/
pub fn checker(inst: &Instance, nb_colors: usize, sol: &Coloring) -> CheckerResult {
    // check that all vertices are colored with a legal color
    for &v in inst.vertices() {
        match sol.get(&v) {
            None => return CheckerResult::MissingVertex(v),
            Some(&c) if c >= nb_colors =>
                return CheckerResult::ColorOutOfRange(v, c),
            Some(_) => {}
        }
    }
    // check conflicts
    for &(i, j) in inst.edges() {
        let u = inst.label(i);
        let v = inst.label(j);
        if sol[&u] == sol[&v] {
            return CheckerResult::ConflictingEdge(u, v);
        }
    }
    let mut used: Vec<bool> = vec![false; nb_colors];
    for c in sol.values() { used[*c] = true; }
    CheckerResult::Ok(used.iter().filter(|b| **b).count())
}


#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Instance {
        Instance::from_edges(&[(1,2),(2,3),(3,1)])
    }

    #[test]
    fn test_checker_ok() {
        let inst = triangle();
        let sol: Coloring = vec![(1,0),(2,1),(3,2)].into_iter().collect();
        assert_eq!(checker(&inst, 3, &sol), CheckerResult::Ok(3));
    }

    #[test]
    fn test_checker_conflict() {
        let inst = triangle();
        let sol: Coloring = vec![(1,0),(2,0),(3,1)].into_iter().collect();
        assert_eq!(checker(&inst, 3, &sol), CheckerResult::ConflictingEdge(1,2));
    }

    #[test]
    fn test_checker_missing_vertex() {
        let inst = triangle();
        let sol: Coloring = vec![(1,0),(2,1)].into_iter().collect();
        assert_eq!(checker(&inst, 3, &sol), CheckerResult::MissingVertex(3));
    }

    #[test]
    fn test_checker_color_out_of_range() {
        let inst = triangle();
        let sol: Coloring = vec![(1,0),(2,1),(3,5)].into_iter().collect();
        assert_eq!(checker(&inst, 3, &sol), CheckerResult::ColorOutOfRange(3,5));
    }
}
