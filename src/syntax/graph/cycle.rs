#[derive(Debug, Clone, Copy, PartialEq)]
enum Mark {
    Unvisited,
    InProgress,
    Resolved,
}

/// Finds one cycle in a head assignment.
///
/// The returned members follow the head chain: the head of `cycle[i]` is
/// `cycle[(i + 1) % cycle.len()]`. Each node is walked at most once.
pub(crate) fn find_cycle(heads: &[Option<usize>]) -> Option<Vec<usize>> {
    let mut marks = vec![Mark::Unvisited; heads.len()];
    let mut path = Vec::new();

    for start in 0..heads.len() {
        if marks[start] != Mark::Unvisited {
            continue;
        }
        path.clear();
        let mut node = start;
        loop {
            match marks[node] {
                Mark::Unvisited => {
                    marks[node] = Mark::InProgress;
                    path.push(node);
                    match heads[node] {
                        Some(head) if head < heads.len() => node = head,
                        _ => break,
                    }
                }
                Mark::InProgress => {
                    // `node` was reached twice on the current walk.
                    if let Some(offset) = path.iter().position(|&v| v == node) {
                        return Some(path.split_off(offset));
                    }
                    break;
                }
                Mark::Resolved => break,
            }
        }
        for &v in &path {
            marks[v] = Mark::Resolved;
        }
    }

    None
}
