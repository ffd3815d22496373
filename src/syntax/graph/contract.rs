use std::f32;

use super::ScoreMatrix;

/// Bookkeeping needed to undo one cycle contraction.
///
/// Indices named `old` refer to the graph before contraction, `new` to the
/// reduced graph in which the whole cycle is one node.
#[derive(Debug, Clone)]
pub(crate) struct Contraction {
    /// Cycle members, ordered along their head chain.
    cycle: Vec<usize>,
    /// Candidate heads of the contracted level.
    candidates: Vec<Option<usize>>,
    in_cycle: Vec<bool>,
    /// old -> new; every cycle member maps to `super_node`.
    forward: Vec<usize>,
    /// new -> old; `super_node` maps to the smallest cycle member.
    backward: Vec<usize>,
    super_node: usize,
    /// Per new head: the cycle member its best arc into the cycle points to.
    entering: Vec<usize>,
    /// Per new dependent: the cycle member its best arc from the cycle leaves.
    leaving: Vec<usize>,
}

/// A reduced graph and how to get back from it.
#[derive(Debug)]
pub(crate) struct Contracted {
    pub scores: ScoreMatrix,
    pub root: usize,
    pub record: Contraction,
}

/// Collapses `cycle` into a single node.
///
/// `cycle` must follow the head chain of `heads`, as returned by
/// `find_cycle`. The contracted node takes the place of the smallest member;
/// the relative order of every other node is kept.
///
/// An arc `u -> c` into the cycle is rescored by what it gains over the arc
/// `head(c) -> c` it replaces. Only the best such arc per `u` survives; arcs
/// leaving the cycle keep their best original score. The score of a tree in
/// the reduced graph is therefore the expanded tree's score minus the total
/// of the cycle.
pub(crate) fn contract(
    scores: &ScoreMatrix,
    root: usize,
    heads: &[Option<usize>],
    cycle: Vec<usize>,
) -> Contracted {
    let len = scores.len();
    let mut in_cycle = vec![false; len];
    for &v in &cycle {
        in_cycle[v] = true;
    }
    let representative = cycle.iter().cloned().min().unwrap_or(0);

    let mut forward = vec![0; len];
    let mut backward = Vec::with_capacity(len - cycle.len() + 1);
    let mut super_node = 0;
    for v in 0..len {
        if in_cycle[v] && v != representative {
            continue;
        }
        if v == representative {
            super_node = backward.len();
        }
        forward[v] = backward.len();
        backward.push(v);
    }
    for &v in &cycle {
        forward[v] = super_node;
    }

    // score of the arc that currently enters each member, in cycle order
    let internal: Vec<f32> = cycle
        .iter()
        .enumerate()
        .map(|(i, &v)| scores.get(v, cycle[(i + 1) % cycle.len()]))
        .collect();

    // members in ascending order so that ties go to the smallest index
    let mut members: Vec<(usize, f32)> = cycle.iter().cloned().zip(internal).collect();
    members.sort_by_key(|&(v, _)| v);

    let new_len = backward.len();
    let mut reduced = ScoreMatrix::filled(new_len, f32::NEG_INFINITY);
    let mut entering = vec![representative; new_len];
    let mut leaving = vec![representative; new_len];
    for (new_dependent, &dependent) in backward.iter().enumerate() {
        if new_dependent == super_node {
            continue;
        }
        for (new_head, &head) in backward.iter().enumerate() {
            if new_head != super_node && new_head != new_dependent {
                reduced.set(new_dependent, new_head, scores.get(dependent, head));
            }
        }

        let mut best_entering = f32::NEG_INFINITY;
        let mut best_leaving = f32::NEG_INFINITY;
        for &(member, internal_score) in &members {
            let score = scores.get(member, dependent) - internal_score;
            if score > best_entering {
                best_entering = score;
                entering[new_dependent] = member;
            }
            let score = scores.get(dependent, member);
            if score > best_leaving {
                best_leaving = score;
                leaving[new_dependent] = member;
            }
        }
        reduced.set(super_node, new_dependent, best_entering);
        reduced.set(new_dependent, super_node, best_leaving);
    }

    Contracted {
        scores: reduced,
        root: forward[root],
        record: Contraction {
            cycle: cycle,
            candidates: heads.to_vec(),
            in_cycle: in_cycle,
            forward: forward,
            backward: backward,
            super_node: super_node,
            entering: entering,
            leaving: leaving,
        },
    }
}

impl Contraction {
    pub fn cycle(&self) -> &[usize] {
        &self.cycle
    }

    /// Node of the uncontracted graph standing for `new`.
    #[inline]
    pub fn original(&self, new: usize) -> usize {
        self.backward[new]
    }

    /// Maps a head assignment of the reduced graph back onto the graph this
    /// record was taken from.
    ///
    /// The member targeted by the arc entering the contracted node drops its
    /// cycle head; every other member keeps it.
    pub fn expand(&self, heads: &[Option<usize>]) -> Vec<Option<usize>> {
        let mut expanded = self.candidates.clone();
        for (old, &new) in self.forward.iter().enumerate() {
            if self.in_cycle[old] {
                continue;
            }
            expanded[old] = heads[new].map(|head| {
                if head == self.super_node {
                    self.leaving[new]
                } else {
                    self.backward[head]
                }
            });
        }
        if let Some(head) = heads[self.super_node] {
            expanded[self.entering[head]] = Some(self.backward[head]);
        }
        expanded
    }
}
