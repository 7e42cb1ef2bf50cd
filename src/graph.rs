use bit_set::BitSet;

use crate::color::VertexId;

/** models a graph coloring instance.

Vertices carry arbitrary (possibly sparse) raw identifiers taken from the
instance file; internally they are densified to `0..n` so that adjacency
lists and domains can live in flat vectors. All core methods speak dense
indices; `label` / `index_of` convert at the boundary.

Adjacency is symmetric by construction (`j in adj(i)` iff `i in adj(j)`)
and neighbor lists are sorted ascending, so every iteration order in the
solver is deterministic. */
#[derive(Debug)]
pub struct Instance {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// sorted raw vertex ids; `labels[i]` is the raw id of dense index i
    labels: Vec<VertexId>,
    /// edges of the graph (dense indices, i < j)
    edges: Vec<(usize,usize)>,
    /// adj_list[i]: sorted list of vertices adjacent to i (dense indices)
    adj_list: Vec<Vec<usize>>,
    /// adj_matrix[i]: bitset of the neighbors of i
    adj_matrix: Vec<BitSet>,
}

impl Instance {

    /** builds an instance from a raw edge list.

    Self-loops are discarded; duplicate edges (including reversed order)
    collapse to one. The vertex set is the union of the surviving
    endpoints (no isolated-vertex declaration). */
    pub fn from_edges(raw_edges: &[(VertexId,VertexId)]) -> Self {
        // normalize: drop self-loops, order endpoints, deduplicate
        let mut normalized: Vec<(VertexId,VertexId)> = raw_edges.iter()
            .filter(|(a,b)| a != b)
            .map(|&(a,b)| if a < b { (a,b) } else { (b,a) })
            .collect();
        normalized.sort_unstable();
        normalized.dedup();
        // densify the vertex ids
        let mut labels: Vec<VertexId> = normalized.iter()
            .flat_map(|&(a,b)| vec![a,b])
            .collect();
        labels.sort_unstable();
        labels.dedup();
        let n = labels.len();
        let m = normalized.len();
        // build adjacency
        let edges: Vec<(usize,usize)> = normalized.iter().map(|&(a,b)| {
            let i = labels.binary_search(&a).unwrap();
            let j = labels.binary_search(&b).unwrap();
            (i,j)
        }).collect();
        let mut adj_list = vec![Vec::new(); n];
        let mut adj_matrix = vec![BitSet::default(); n];
        for &(i,j) in &edges {
            adj_list[i].push(j);
            adj_list[j].push(i);
            adj_matrix[i].insert(j);
            adj_matrix[j].insert(i);
        }
        for l in adj_list.iter_mut() { l.sort_unstable(); }
        Self { n, m, labels, edges, adj_list, adj_matrix }
    }

    /// number of vertices
    pub fn n(&self) -> usize { self.n }

    /// number of edges
    pub fn m(&self) -> usize { self.m }

    /// sorted raw vertex ids
    pub fn vertices(&self) -> &[VertexId] { &self.labels }

    /// raw id of dense index i
    pub fn label(&self, i: usize) -> VertexId { self.labels[i] }

    /// dense index of a raw vertex id, if the vertex exists
    pub fn index_of(&self, v: VertexId) -> Option<usize> {
        self.labels.binary_search(&v).ok()
    }

    /// list of vertices adjacent to vertex i (dense, sorted ascending)
    pub fn adj(&self, i: usize) -> &[usize] { &self.adj_list[i] }

    /// degree of vertex i (independent of any domain pruning)
    pub fn degree(&self, i: usize) -> usize { self.adj_list[i].len() }

    /// edge list (dense indices, i < j)
    pub fn edges(&self) -> &[(usize,usize)] { &self.edges }

    /// returns if i and j are adjacent in O(1)
    pub fn are_adjacent(&self, i: usize, j: usize) -> bool {
        self.adj_matrix[i].contains(j)
    }

    /// print statistics of the instance
    pub fn display_statistics(&self) {
        println!("\t{} \t vertices", self.n());
        println!("\t{} \t edges", self.m());
        if self.n() > 0 {
            let degrees: Vec<usize> = (0..self.n()).map(|i| self.degree(i)).collect();
            println!("\t{} \t min degree", degrees.iter().min().unwrap());
            println!("\t{} \t max degree", degrees.iter().max().unwrap());
        }
    }
}
