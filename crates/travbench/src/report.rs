use std::fmt::Display;

use graph_rs::algorithms::Distance;
use serde::{Deserialize, Serialize};

use crate::bench::{Algorithm, Comparison, TraversalResult};

const NODE_WIDTH: usize = 8;
const COLUMN_WIDTH: usize = 15;
const RULE_WIDTH: usize = 78;

/// Fixed-width comparison table, one row per target.
pub struct Table<'a>(pub &'a [Comparison]);

fn rule(f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "{:-<RULE_WIDTH$}", "")
}

fn distance_cell(distance: Distance) -> String {
    match distance {
        Distance::Found(distance) => distance.to_string(),
        Distance::Unreachable { .. } => "-".to_owned(),
    }
}

impl Display for Table<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        rule(f)?;
        writeln!(
            f,
            "{:>NODE_WIDTH$}{:>NODE_WIDTH$}{:>COLUMN_WIDTH$}{:>COLUMN_WIDTH$}{:>COLUMN_WIDTH$}{:>COLUMN_WIDTH$}",
            "Node 1", "Node 2", "BFS_Distance", "BFS_Time(ns)", "DFS_Distance", "DFS_Time(ns)"
        )?;
        rule(f)?;

        for comparison in self.0 {
            writeln!(
                f,
                "{:>NODE_WIDTH$}{:>NODE_WIDTH$}{:>COLUMN_WIDTH$}{:>COLUMN_WIDTH$}{:>COLUMN_WIDTH$}{:>COLUMN_WIDTH$}",
                format!("N_{}", comparison.start),
                format!("N_{}", comparison.target),
                distance_cell(comparison.bfs.distance()),
                comparison.bfs.elapsed().as_nanos(),
                distance_cell(comparison.dfs.distance()),
                comparison.dfs.elapsed().as_nanos(),
            )?;
        }

        rule(f)
    }
}

/// A table row in machine readable form. Distances are `None` when the
/// target is unreachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub start: usize,
    pub target: usize,
    pub bfs_distance: Option<usize>,
    pub bfs_time_ns: u64,
    pub dfs_distance: Option<usize>,
    pub dfs_time_ns: u64,
}

fn nanos(result: &TraversalResult) -> u64 {
    u64::try_from(result.elapsed().as_nanos()).unwrap_or(u64::MAX)
}

impl From<&Comparison> for Row {
    fn from(value: &Comparison) -> Self {
        Self {
            start: value.start,
            target: value.target,
            bfs_distance: value.bfs.distance().found(),
            bfs_time_ns: nanos(&value.bfs),
            dfs_distance: value.dfs.distance().found(),
            dfs_time_ns: nanos(&value.dfs),
        }
    }
}

/// A single algorithm run for one `(start, target)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    pub algorithm: Algorithm,
    pub start: usize,
    pub target: usize,
    pub distance: Option<usize>,
    pub time_ns: u64,
}

impl Measurement {
    pub fn new(algorithm: Algorithm, start: usize, target: usize, result: &TraversalResult) -> Self {
        Self {
            algorithm,
            start,
            target,
            distance: result.distance().found(),
            time_ns: nanos(result),
        }
    }
}

impl Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} N_{} -> N_{}: distance ", self.algorithm, self.start, self.target)?;
        match self.distance {
            Some(distance) => write!(f, "{distance}")?,
            None => write!(f, "-")?,
        }
        write!(f, ", {} ns", self.time_ns)
    }
}

pub fn json(comparisons: &[Comparison]) -> serde_json::Result<String> {
    let rows: Vec<Row> = comparisons.iter().map(Row::from).collect();
    serde_json::to_string_pretty(&rows)
}
