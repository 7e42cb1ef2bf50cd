use std::cmp::Reverse;

use crate::color::Color;
use crate::domains::{Assignment, DomainStore};
use crate::graph::Instance;

/**
Minimum Remaining Values: picks the unassigned vertex with the fewest
candidate colors left, breaking ties by the largest degree (the most
constraining vertex). Remaining ties resolve to the smallest dense index,
which keeps the search deterministic.

# Panics
 - if every vertex is already assigned (caller must check completion first)
*/
pub fn select_mrv(domains: &DomainStore, assignment: &Assignment, inst: &Instance) -> usize {
    (0..inst.n())
        .filter(|&v| !assignment.is_assigned(v))
        .min_by_key(|&v| (domains.size(v), Reverse(inst.degree(v))))
        .expect("select_mrv: no unassigned vertex left")
}

/**
Least Constraining Value: orders the candidate colors of `var` ascending
by the number of neighbor domains still containing the value. Values that
rule out the fewest options in the neighborhood come first. The sort is
stable, so equal conflict counts keep the ascending color order.
*/
pub fn order_lcv(var: usize, domains: &DomainStore, inst: &Instance) -> Vec<Color> {
    let mut values: Vec<Color> = domains.iter(var).collect();
    values.sort_by_key(|&val| {
        inst.adj(var).iter().filter(|&&n| domains.contains(n, val)).count()
    });
    values
}


#[cfg(test)]
mod tests {
    use super::*;

    /// path 1-2-3 with domains {1:[0], 2:[0,1], 3:[0,1,2]}
    fn path_instance() -> (Instance, DomainStore) {
        let inst = Instance::from_edges(&[(1,2),(2,3)]);
        let mut domains = DomainStore::new(3, 3);
        domains.restrict(0, 0);
        domains.remove(1, 2);
        (inst, domains)
    }

    #[test]
    fn test_mrv_smallest_domain() {
        let (inst, domains) = path_instance();
        let assignment = Assignment::new(3);
        assert_eq!(select_mrv(&domains, &assignment, &inst), 0);
    }

    #[test]
    fn test_mrv_tie_break_by_degree() {
        // star centered on 1; 1 and leaves share the domain size
        let inst = Instance::from_edges(&[(1,2),(1,3)]);
        let mut domains = DomainStore::new(3, 3);
        domains.remove(0, 2);
        domains.remove(1, 2);
        let assignment = Assignment::new(3);
        // vertex 1 (dense 0) has degree 2, beats the leaf with equal domain
        assert_eq!(select_mrv(&domains, &assignment, &inst), 0);
    }

    #[test]
    fn test_mrv_skips_assigned() {
        let (inst, domains) = path_instance();
        let mut assignment = Assignment::new(3);
        assignment.set(0, 0);
        assert_eq!(select_mrv(&domains, &assignment, &inst), 1);
    }

    #[test]
    fn test_lcv_orders_by_conflicts() {
        // edges 1-2, 1-3; domains {1:[0,1], 2:[0,1], 3:[1]}
        let inst = Instance::from_edges(&[(1,2),(1,3)]);
        let mut domains = DomainStore::new(3, 2);
        domains.restrict(2, 1);
        // for vertex 1: color 0 appears in 1 neighbor domain, color 1 in 2
        assert_eq!(order_lcv(0, &domains, &inst), vec![0,1]);
    }

    #[test]
    fn test_lcv_stable_on_ties() {
        // single neighbor with a full domain: every value conflicts once
        let inst = Instance::from_edges(&[(1,2)]);
        let domains = DomainStore::new(2, 3);
        assert_eq!(order_lcv(0, &domains, &inst), vec![0,1,2]);
    }
}
