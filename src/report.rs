//! One row per search run, printed as a table or exported as CSV.

use std::error::Error;
use std::io::Write;

use prettytable::{Cell, Row, Table};

use crate::config::{Algorithm, Heuristic};
use crate::solver::SearchResult;

pub const COLUMNS: [&str; 9] = [
    "board",
    "algorithm",
    "heuristic",
    "result",
    "cost",
    "expanded",
    "frontier",
    "duration_sec",
    "solution",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub board: String,
    pub algorithm: Algorithm,
    pub heuristic: Option<Heuristic>,
    pub result: &'static str,
    pub cost: Option<usize>,
    pub expanded: usize,
    pub frontier: usize,
    pub duration_sec: f64,
    pub solution: String,
}

impl Report {
    pub fn new(board: &str, result: &SearchResult) -> Self {
        Report {
            board: board.to_owned(),
            algorithm: result.method.algorithm(),
            heuristic: result.method.heuristic(),
            result: result.result_str(),
            cost: result.cost(),
            expanded: result.expanded_nodes_qty(),
            frontier: result.frontier_nodes_qty(),
            duration_sec: result.duration(),
            solution: result.solution(),
        }
    }

    /// Values in the order of `COLUMNS`, missing ones are empty.
    pub fn fields(&self) -> Vec<String> {
        vec![
            self.board.clone(),
            self.algorithm.to_string(),
            self.heuristic.map(|h| h.to_string()).unwrap_or_default(),
            self.result.to_owned(),
            self.cost.map(|c| c.to_string()).unwrap_or_default(),
            self.expanded.to_string(),
            self.frontier.to_string(),
            format!("{:.6}", self.duration_sec),
            self.solution.clone(),
        ]
    }

    fn row(&self) -> Row {
        Row::new(self.fields().iter().map(|field| Cell::new(field)).collect())
    }
}

pub fn table(reports: &[Report], titles: bool) -> Table {
    let mut table = Table::new();
    if titles {
        table.set_titles(Row::new(COLUMNS.iter().map(|c| Cell::new(c)).collect()));
    }
    for report in reports {
        table.add_row(report.row());
    }
    table
}

pub fn write_csv<W: Write>(reports: &[Report], header: bool, out: W) -> Result<(), Box<dyn Error>> {
    let mut writer = table(reports, header).to_csv(out)?;
    writer.flush()?;
    Ok(())
}
