use bit_set::BitSet;

use crate::color::Color;

/** per-vertex candidate color sets.

`domains[v]` is the set of colors still considered valid for vertex v
(dense index). Domains start as the full range `0..nb_colors`, only ever
shrink (propagation) or collapse to a singleton (branching), and iterate
in ascending color order, which is the canonical tie-break order of the
value heuristic.

Cloning the store yields a fully independent copy; the search clones it
once per candidate value so that sibling branches never observe each
other's pruning. */
#[derive(Debug, Clone)]
pub struct DomainStore {
    /// domains[v]: bitset of the candidate colors of vertex v
    domains: Vec<BitSet>,
    /// color bound K (legal colors are 0..K)
    nb_colors: usize,
}

impl DomainStore {

    /** full Cartesian initialization: every vertex gets `0..nb_colors` */
    pub fn new(nb_vertices: usize, nb_colors: usize) -> Self {
        let mut full = BitSet::with_capacity(nb_colors);
        for c in 0..nb_colors { full.insert(c); }
        Self { domains: vec![full; nb_vertices], nb_colors }
    }

    /// color bound K
    pub fn nb_colors(&self) -> usize { self.nb_colors }

    /// number of vertices tracked by the store
    pub fn nb_vertices(&self) -> usize { self.domains.len() }

    /// number of candidate colors left for vertex v
    pub fn size(&self, v: usize) -> usize { self.domains[v].len() }

    /// returns if color c is still a candidate for vertex v
    pub fn contains(&self, v: usize, c: Color) -> bool {
        self.domains[v].contains(c)
    }

    /// removes color c from the domain of v; returns if it was present
    pub fn remove(&mut self, v: usize, c: Color) -> bool {
        self.domains[v].remove(c)
    }

    /// returns if the domain of v is exactly the singleton {c}
    pub fn is_singleton(&self, v: usize, c: Color) -> bool {
        self.domains[v].len() == 1 && self.domains[v].contains(c)
    }

    /// restricts the domain of v to the singleton {c} (branching commit)
    pub fn restrict(&mut self, v: usize, c: Color) {
        debug_assert!(self.domains[v].contains(c));
        self.domains[v].clear();
        self.domains[v].insert(c);
    }

    /// iterates the candidate colors of v in ascending order
    pub fn iter(&self, v: usize) -> impl Iterator<Item=Color> + '_ {
        self.domains[v].iter()
    }
}


/** partial mapping vertex -> color, owned by the backtracking search.

A vertex is recorded here iff the search committed it to a value; a domain
merely pruned to one value by propagation is *not* assigned. Grows by one
entry per search level, shrinks by one on backtrack. */
#[derive(Debug, Clone)]
pub struct Assignment {
    /// colors[v]: color committed to vertex v, if any
    colors: Vec<Option<Color>>,
    /// number of committed vertices
    nb_assigned: usize,
}

impl Assignment {

    /** creates an empty assignment over `nb_vertices` vertices */
    pub fn new(nb_vertices: usize) -> Self {
        Self { colors: vec![None; nb_vertices], nb_assigned: 0 }
    }

    /// number of committed vertices
    pub fn len(&self) -> usize { self.nb_assigned }

    /// returns if no vertex is committed
    pub fn is_empty(&self) -> bool { self.nb_assigned == 0 }

    /// color committed to vertex v, if any
    pub fn get(&self, v: usize) -> Option<Color> { self.colors[v] }

    /// returns if vertex v is committed
    pub fn is_assigned(&self, v: usize) -> bool { self.colors[v].is_some() }

    /// commits color c to vertex v
    pub fn set(&mut self, v: usize, c: Color) {
        debug_assert!(self.colors[v].is_none());
        self.colors[v] = Some(c);
        self.nb_assigned += 1;
    }

    /// removes the commitment of vertex v (backtrack)
    pub fn unset(&mut self, v: usize) {
        debug_assert!(self.colors[v].is_some());
        self.colors[v] = None;
        self.nb_assigned -= 1;
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_initialization() {
        let store = DomainStore::new(3, 4);
        assert_eq!(store.nb_vertices(), 3);
        for v in 0..3 {
            assert_eq!(store.size(v), 4);
            assert_eq!(store.iter(v).collect::<Vec<_>>(), vec![0,1,2,3]);
        }
    }

    #[test]
    fn test_remove_and_restrict() {
        let mut store = DomainStore::new(2, 3);
        assert!(store.remove(0, 1));
        assert!(!store.remove(0, 1)); // already gone
        assert_eq!(store.iter(0).collect::<Vec<_>>(), vec![0,2]);
        store.restrict(1, 2);
        assert!(store.is_singleton(1, 2));
        assert!(!store.is_singleton(1, 0));
        assert!(!store.is_singleton(0, 0)); // two values left
    }

    #[test]
    fn test_clone_isolation() {
        let store = DomainStore::new(2, 3);
        let mut branch = store.clone();
        branch.restrict(0, 1);
        branch.remove(1, 0);
        assert_eq!(store.size(0), 3);
        assert_eq!(store.size(1), 3);
        assert_eq!(branch.size(0), 1);
        assert_eq!(branch.size(1), 2);
    }

    #[test]
    fn test_assignment_set_unset() {
        let mut assignment = Assignment::new(3);
        assert!(assignment.is_empty());
        assignment.set(1, 2);
        assert_eq!(assignment.len(), 1);
        assert!(assignment.is_assigned(1));
        assert_eq!(assignment.get(1), Some(2));
        assignment.unset(1);
        assert!(assignment.is_empty());
        assert_eq!(assignment.get(1), None);
    }
}
