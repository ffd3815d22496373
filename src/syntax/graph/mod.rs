//! Graph-based decoding of dependency trees
//!
//! Arc scores are laid out as `[dependents, heads]`: `scores[d][h]` is the
//! score of `h` governing `d`. Decoders return one entry per node, `None` for
//! the root and `Some(head)` for every other node.

use std::error;
use std::fmt;

use slog::{Discard, Logger};

pub use self::matrix::ScoreMatrix;

mod contract;
mod cycle;
mod matrix;
mod select;

pub(crate) use self::cycle::find_cycle;

pub type Heads = Vec<Option<usize>>;

/// Finds a maximum spanning dependency tree by Chu–Liu/Edmonds' algorithm
///
/// The root is node 0.
///
/// References:
/// - Y. J. Chu and T. H. Liu, 1965. On the shortest arborescence of a directed graph.
/// - J. Edmonds, 1967. Optimum branchings.
/// - S. Kübler, R. McDonald and J. Nivre, 2009. Dependency Parsing, pp. 47.
///
/// scores: 2D array [dependents, heads]
pub fn chu_liu_edmonds<V: AsRef<[f32]>>(scores: &[V]) -> Result<Heads, Error> {
    chu_liu_edmonds_with_root(scores, 0)
}

/// Same as `chu_liu_edmonds`, rooted at `root`.
pub fn chu_liu_edmonds_with_root<V: AsRef<[f32]>>(
    scores: &[V],
    root: usize,
) -> Result<Heads, Error> {
    Decoder::new(Config {
        root: root,
        method: Method::Mst,
    }).decode(scores)
}

/// Picks the best head of every node independently.
///
/// The result is not guaranteed to be a tree.
///
/// scores: 2D array [dependents, heads]
pub fn greedy<V: AsRef<[f32]>>(scores: &[V], root: usize) -> Result<Heads, Error> {
    Decoder::new(Config {
        root: root,
        method: Method::Greedy,
    }).decode(scores)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Maximum spanning arborescence
    Mst,
    /// Independent arg-max per dependent
    Greedy,
}

impl Default for Method {
    fn default() -> Self {
        Method::Mst
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub root: usize,
    pub method: Method,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            root: 0,
            method: Method::Mst,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Decoder {
    config: Config,
    logger: Logger,
}

impl Decoder {
    pub fn new(config: Config) -> Self {
        Decoder {
            config: config,
            logger: Logger::root(Discard, o!()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = logger;
    }

    pub fn decode<V: AsRef<[f32]>>(&self, scores: &[V]) -> Result<Heads, Error> {
        let scores = ScoreMatrix::from_rows(scores)?;
        self.decode_matrix(&scores)
    }

    pub fn decode_matrix(&self, scores: &ScoreMatrix) -> Result<Heads, Error> {
        let root = self.config.root;
        if root >= scores.len() {
            return Err(Error::InvalidRoot {
                root: root,
                len: scores.len(),
            });
        }
        match self.config.method {
            Method::Greedy => {
                let heads = select::select_heads(scores, root)?;
                debug!(self.logger, "decoded"; "method" => "greedy", "length" => scores.len());
                Ok(heads)
            }
            Method::Mst => self.decode_mst(scores, root),
        }
    }

    /// Decodes every sentence independently.
    ///
    /// A malformed matrix only fails its own entry.
    pub fn decode_batch<V: AsRef<[f32]>, M: AsRef<[V]>>(
        &self,
        batch: &[M],
    ) -> Vec<Result<Heads, Error>> {
        batch
            .iter()
            .enumerate()
            .map(|(index, scores)| {
                let result = self.decode(scores.as_ref());
                if let Err(ref e) = result {
                    warn!(self.logger, "skipped a sentence"; "index" => index, "error" => %e);
                }
                result
            })
            .collect()
    }

    fn decode_mst(&self, scores: &ScoreMatrix, root: usize) -> Result<Heads, Error> {
        let mut records = Vec::new();
        let mut level: Option<(ScoreMatrix, usize)> = None;

        let mut heads = loop {
            let (level_scores, level_root) = match level {
                Some((ref s, r)) => (s, r),
                None => (scores, root),
            };
            let heads = select::select_heads(level_scores, level_root)
                .map_err(|e| restore_node(e, &records))?;
            let cycle = match find_cycle(&heads) {
                Some(cycle) => cycle,
                None => break heads,
            };
            let contracted = contract::contract(level_scores, level_root, &heads, cycle);
            trace!(
                self.logger,
                "contracted a cycle";
                "depth" => records.len() + 1,
                "cycle" => ?contracted.record.cycle(),
                "length" => contracted.scores.len()
            );
            records.push(contracted.record);
            level = Some((contracted.scores, contracted.root));
        };

        let depth = records.len();
        while let Some(record) = records.pop() {
            heads = record.expand(&heads);
        }

        debug!(
            self.logger,
            "decoded";
            "method" => "mst",
            "length" => scores.len(),
            "contractions" => depth
        );
        Ok(heads)
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder::new(Config::default())
    }
}

/// Reports a node missing its head by an index of the input matrix.
///
/// A contracted node is reported by its smallest member.
fn restore_node(error: Error, records: &[contract::Contraction]) -> Error {
    match error {
        Error::InvalidScoreMatrix(Malformation::NoCandidateHead(node)) => {
            let node = records
                .iter()
                .rev()
                .fold(node, |node, record| record.original(node));
            Error::InvalidScoreMatrix(Malformation::NoCandidateHead(node))
        }
        e => e,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Malformation {
    Empty,
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    InvalidScore { dependent: usize, head: usize },
    NoCandidateHead(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    InvalidScoreMatrix(Malformation),
    InvalidRoot { root: usize, len: usize },
}

impl Error {
    pub fn as_str(&self) -> &'static str {
        match *self {
            Error::InvalidScoreMatrix(_) => "invalid score matrix",
            Error::InvalidRoot { .. } => "invalid root",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidScoreMatrix(Malformation::Empty) => {
                write!(f, "{}: no rows", self.as_str())
            }
            Error::InvalidScoreMatrix(Malformation::NotSquare { row, len, expected }) => write!(
                f,
                "{}: row {} has {} columns, expected {}",
                self.as_str(),
                row,
                len,
                expected
            ),
            Error::InvalidScoreMatrix(Malformation::InvalidScore { dependent, head }) => write!(
                f,
                "{}: score of arc {} -> {} is not a number or infinite",
                self.as_str(),
                head,
                dependent
            ),
            Error::InvalidScoreMatrix(Malformation::NoCandidateHead(node)) => {
                write!(f, "{}: node {} has no candidate head", self.as_str(), node)
            }
            Error::InvalidRoot { root, len } => write!(
                f,
                "{}: root {} is out of bounds for {} nodes",
                self.as_str(),
                root,
                len
            ),
        }
    }
}

impl error::Error for Error {}
