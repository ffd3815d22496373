#![allow(dead_code)]

use arbor::syntax::graph::ScoreMatrix;
use arbor::syntax::{is_tree, tree_score};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn random_scores(rng: &mut StdRng, len: usize) -> Vec<Vec<f32>> {
    (0..len)
        .map(|_| (0..len).map(|_| rng.gen_range(-1.0f32..1.0)).collect())
        .collect()
}

/// Small integer scores, so that equal arcs are common, with about one arc in
/// five masked out.
pub fn random_integer_scores(rng: &mut StdRng, len: usize) -> Vec<Vec<f32>> {
    (0..len)
        .map(|_| {
            (0..len)
                .map(|_| {
                    if rng.gen_range(0..5) == 0 {
                        std::f32::NEG_INFINITY
                    } else {
                        rng.gen_range(-2i32..3) as f32
                    }
                })
                .collect()
        })
        .collect()
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Best tree score by enumerating every head assignment.
///
/// Only feasible for a handful of nodes.
pub fn brute_force_best_score(scores: &ScoreMatrix, root: usize) -> Option<f32> {
    let len = scores.len();
    let mut heads: Vec<Option<usize>> = (0..len)
        .map(|i| if i == root { None } else { Some(0) })
        .collect();
    let dependents: Vec<usize> = (0..len).filter(|&i| i != root).collect();
    let mut best: Option<f32> = None;
    loop {
        if is_tree(&heads) {
            let score = tree_score(scores, &heads);
            if score > std::f32::NEG_INFINITY && best.map_or(true, |b| score > b) {
                best = Some(score);
            }
        }
        // odometer over the heads of every dependent
        let mut carry = true;
        for &d in &dependents {
            let next = heads[d].map_or(0, |h| h + 1);
            if next < len {
                heads[d] = Some(next);
                carry = false;
                break;
            }
            heads[d] = Some(0);
        }
        if carry {
            return best;
        }
    }
}

pub mod mock {
    /// 1 <- 3, 2 <- 1 and 3 <- 2 are the best arcs; the root prefers 1.
    pub fn provide_cyclic_scores() -> Vec<Vec<f32>> {
        vec![
            vec![0.0, 0.0, 0.0, 0.0],
            vec![5.0, 0.0, 0.0, 8.0],
            vec![3.0, 10.0, 0.0, 0.0],
            vec![1.0, 0.0, 9.0, 0.0],
        ]
    }

    /// The best arcs already form the tree 0 -> 2 -> {1, 3}.
    pub fn provide_acyclic_scores() -> Vec<Vec<f32>> {
        vec![
            vec![0.0, 0.0, 0.0, 0.0],
            vec![1.0, 0.0, 6.0, 2.0],
            vec![9.0, 3.0, 0.0, 1.0],
            vec![0.5, 1.0, 4.0, 0.0],
        ]
    }

    /// 1 <-> 2 is contracted first; the contracted node then forms a cycle
    /// with 3, which has to be contracted again.
    pub fn provide_nested_cyclic_scores() -> Vec<Vec<f32>> {
        vec![
            vec![0.0, 0.0, 0.0, 0.0, 0.0],
            vec![1.0, 0.0, 10.0, 0.0, 0.0],
            vec![0.0, 10.0, 0.0, 8.0, 0.0],
            vec![0.0, 0.0, 9.0, 0.0, 0.0],
            vec![2.0, 0.0, 0.0, 7.0, 0.0],
        ]
    }
}
