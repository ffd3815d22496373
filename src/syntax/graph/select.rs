use std::f32;

use super::{Error, Malformation, ScoreMatrix};

/// Picks the highest scoring head of every node except `root`.
///
/// Self loops are never candidates. Among equal scores the lowest head index
/// wins. A node whose every candidate is `-inf` has no head to pick.
pub(crate) fn select_heads(scores: &ScoreMatrix, root: usize) -> Result<Vec<Option<usize>>, Error> {
    let mut heads = vec![None; scores.len()];
    for dependent in 0..scores.len() {
        if dependent == root {
            continue;
        }
        let mut best_head = None;
        let mut best_score = f32::NEG_INFINITY;
        for (head, &score) in scores.row(dependent).iter().enumerate() {
            if head != dependent && score > best_score {
                best_head = Some(head);
                best_score = score;
            }
        }
        match best_head {
            Some(_) => heads[dependent] = best_head,
            None => {
                return Err(Error::InvalidScoreMatrix(
                    Malformation::NoCandidateHead(dependent),
                ))
            }
        }
    }
    Ok(heads)
}

#[cfg(test)]
mod tests {
    use std::f32;

    use super::select_heads;
    use crate::syntax::graph::{Error, Malformation, ScoreMatrix};

    fn range_matrix(len: usize) -> ScoreMatrix {
        let rows: Vec<Vec<f32>> = (0..len)
            .map(|d| (0..len).map(|h| (d * len + h) as f32).collect())
            .collect();
        ScoreMatrix::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_select_heads() {
        let heads = select_heads(&range_matrix(3), 0).unwrap();
        assert_eq!(heads, vec![None, Some(2), Some(1)]);

        let heads = select_heads(&range_matrix(5), 0).unwrap();
        assert_eq!(heads, vec![None, Some(4), Some(4), Some(4), Some(3)]);
    }

    #[test]
    fn test_select_heads_with_other_root() {
        let heads = select_heads(&range_matrix(4), 3).unwrap();
        assert_eq!(heads, vec![Some(3), Some(3), Some(3), None]);
    }

    #[test]
    fn test_select_heads_breaks_ties_by_lowest_index() {
        let scores = ScoreMatrix::from_rows(&[
            [0.0f32, 0.0, 0.0, 0.0],
            [1.0, 9.0, 1.0, 1.0],
            [0.5, 2.0, 0.0, 2.0],
            [0.0, 0.0, 0.0, 0.0],
        ]).unwrap();
        let heads = select_heads(&scores, 0).unwrap();
        assert_eq!(heads, vec![None, Some(0), Some(1), Some(0)]);
    }

    #[test]
    fn test_select_heads_fails_without_candidates() {
        let scores = ScoreMatrix::from_rows(&[
            [0.0f32, 0.0, 0.0],
            [f32::NEG_INFINITY, 5.0, f32::NEG_INFINITY],
            [1.0, 1.0, 0.0],
        ]).unwrap();
        assert_eq!(
            select_heads(&scores, 0),
            Err(Error::InvalidScoreMatrix(Malformation::NoCandidateHead(1)))
        );
    }

    #[test]
    fn test_select_heads_of_root_only() {
        let scores = ScoreMatrix::from_rows(&[[0.0f32]]).unwrap();
        assert_eq!(select_heads(&scores, 0).unwrap(), vec![None]);
    }
}
