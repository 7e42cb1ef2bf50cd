use std::collections::VecDeque;

use crate::domains::DomainStore;
use crate::graph::Instance;

/**
removes from the domain of xi every value that has no support in the
domain of xj, and returns if any removal occurred.

The only constraint between adjacent vertices is inequality, so a value
`x` of domain(xi) has no support exactly when domain(xj) is the singleton
{x}. This is a specialization valid because domains are sets (no
duplicate values); it is not a generic constraint-checking hook.
*/
pub fn revise(domains: &mut DomainStore, xi: usize, xj: usize) -> bool {
    let mut revised = false;
    let candidates: Vec<usize> = domains.iter(xi).collect();
    for x in candidates {
        if domains.is_singleton(xj, x) {
            domains.remove(xi, x);
            revised = true;
        }
    }
    revised
}

/**
enforces arc consistency on every arc of the instance (AC-3).

The FIFO queue starts with both directions of every edge. Each pop
revises (xi, xj); when the revision pruned values:
 - an emptied domain(xi) proves infeasibility: returns false immediately
 - otherwise every arc (xk, xi), xk neighbor of xi other than xj, is
   re-enqueued, since the change to xi may re-invalidate values of xk

Terminates because domains are finite and only shrink; returns true once
the queue empties with no domain left empty.
*/
pub fn propagate(domains: &mut DomainStore, inst: &Instance) -> bool {
    let mut queue: VecDeque<(usize,usize)> = (0..inst.n())
        .flat_map(|x| inst.adj(x).iter().map(move |&y| (x,y)))
        .collect();
    while let Some((xi,xj)) = queue.pop_front() {
        if revise(domains, xi, xj) {
            if domains.size(xi) == 0 { return false; }
            for &xk in inst.adj(xi) {
                if xk != xj { queue.push_back((xk, xi)); }
            }
        }
    }
    true
}
