use crate::color::{Color, Coloring};
use crate::domains::{Assignment, DomainStore};
use crate::graph::Instance;
use crate::search::ac3::propagate;
use crate::search::heuristics::{order_lcv, select_mrv};

/** one level of the search: a branching vertex, the candidate colors
still to try for it (LCV order), and the domain store the level was
entered with. Each candidate clones `domains` so that a failed branch
never leaks pruning into its siblings. */
#[derive(Debug)]
struct Frame {
    /// branching vertex (dense index)
    var: usize,
    /// remaining candidate colors, in LCV order
    values: std::vec::IntoIter<Color>,
    /// domains at frame entry (pre-branch)
    domains: DomainStore,
}

impl Frame {
    /// opens a frame on the MRV vertex of `domains`
    fn open(domains: DomainStore, assignment: &Assignment, inst: &Instance) -> Self {
        let var = select_mrv(&domains, assignment, inst);
        let values = order_lcv(var, &domains, inst).into_iter();
        Self { var, values, domains }
    }
}

/**
depth-first backtracking search with branch-local propagation.

Equivalent to the textbook recursive procedure (select the MRV vertex, try
its colors in LCV order, clone the domains, commit the color, propagate,
recurse), but driven by an explicit frame stack so that the search depth is
bounded by the heap rather than the call stack. The visit order is exactly
the recursive one.

On success `assignment` is fully populated; on failure it is restored to
the state it was passed in.
*/
pub fn backtrack(assignment: &mut Assignment, domains: DomainStore, inst: &Instance) -> bool {
    if assignment.len() == inst.n() { return true; }
    let mut stack: Vec<Frame> = vec![Frame::open(domains, assignment, inst)];
    while let Some(frame) = stack.last_mut() {
        let var = frame.var;
        match frame.values.next() {
            Some(value) => {
                // branch isolation: all pruning below happens on a copy
                let mut local = frame.domains.clone();
                local.restrict(var, value);
                assignment.set(var, value);
                if propagate(&mut local, inst) {
                    if assignment.len() == inst.n() { return true; }
                    stack.push(Frame::open(local, assignment, inst));
                } else {
                    assignment.unset(var);
                }
            }
            None => {
                // every color failed: pop and invalidate the parent's trial
                stack.pop();
                if let Some(parent) = stack.last() {
                    assignment.unset(parent.var);
                }
            }
        }
    }
    false
}

/**
solves a graph coloring instance: finds an assignment of colors in
`0..nb_colors` such that no edge connects two same-colored vertices, or
proves that none exists (`None`).

Runs one global AC-3 pass on the full domains (an immediate proof of
infeasibility skips the search entirely), then the backtracking search.
The returned coloring is keyed by raw vertex ids.
*/
pub fn solve(inst: &Instance, nb_colors: usize) -> Option<Coloring> {
    let mut domains = DomainStore::new(inst.n(), nb_colors);
    if !propagate(&mut domains, inst) { return None; }
    let mut assignment = Assignment::new(inst.n());
    if backtrack(&mut assignment, domains, inst) {
        let coloring: Coloring = inst.vertices().iter().enumerate()
            .map(|(i, &v)| {
                let c = assignment.get(i)
                    .expect("solve: complete assignment misses a vertex");
                (v, c)
            })
            .collect();
        Some(coloring)
    } else {
        None
    }
}
