pub mod graph;

use self::graph::ScoreMatrix;

/// Checks that `heads` describes a single tree.
///
/// Exactly one node has no head, every head is in range and not the node
/// itself, and following heads from any node never loops.
pub fn is_tree(heads: &[Option<usize>]) -> bool {
    let num_roots = heads.iter().filter(|head| head.is_none()).count();
    if num_roots != 1 {
        return false;
    }
    let in_range = heads.iter().enumerate().all(|(i, head)| match *head {
        Some(h) => h < heads.len() && h != i,
        None => true,
    });
    in_range && graph::find_cycle(heads).is_none()
}

/// Sums the scores of the arcs selected by `heads`.
pub fn tree_score(scores: &ScoreMatrix, heads: &[Option<usize>]) -> f32 {
    heads
        .iter()
        .enumerate()
        .filter_map(|(dependent, head)| head.map(|h| scores.get(dependent, h)))
        .sum()
}

/// Checks whether no two arcs cross when drawn above the sentence.
///
/// References:
/// - https://github.com/tensorflow/models/blob/7d30a017fe50b648be6dee544f8059bde52db562/syntaxnet/syntaxnet/document_filters.cc#L296
pub fn is_projective(heads: &[Option<usize>]) -> bool {
    let spans: Vec<(usize, usize)> = heads
        .iter()
        .enumerate()
        .filter_map(|(i, head)| head.map(|h| (i.min(h), i.max(h))))
        .collect();
    for (k, &(l1, r1)) in spans.iter().enumerate() {
        for &(l2, r2) in &spans[k + 1..] {
            if (l1 < l2 && l2 < r1 && r1 < r2) || (l2 < l1 && l1 < r2 && r2 < r1) {
                return false;
            }
        }
    }
    true
}
