use std::path::PathBuf;

use dwh_transform::JoinStats;

#[derive(Debug)]
pub struct RunResult {
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub tables: Vec<TableSummary>,
    pub join_stats: JoinStats,
}

#[derive(Debug)]
pub struct TableSummary {
    pub name: String,
    pub records: usize,
    /// `None` when nothing was written (dry run).
    pub output: Option<PathBuf>,
}

impl RunResult {
    pub fn table(&self, name: &str) -> Option<&TableSummary> {
        self.tables.iter().find(|table| table.name == name)
    }
}
