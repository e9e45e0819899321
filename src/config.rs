//src/config.rs

use std::path::PathBuf;

use crate::types::AlignmentLayout;

pub const DEFAULT_ALIGNMENTS: &str = "output_blastp.txt";
pub const DEFAULT_DOMAINS: &str = "hmmer_output.tbl";
pub const DEFAULT_OUTPUT: &str = "AMP/Final_AMP_Results.tsv";

/// Inputs, output and layout of one merge run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConfig {
    /// Tab-separated alignment report without a header.
    pub alignments_path: PathBuf,
    /// Whitespace-separated domain table, '#' lines are comments.
    pub domains_path: PathBuf,
    /// Destination of the merged table. Its directory must exist.
    pub output_path: PathBuf,
    pub layout: AlignmentLayout,
    pub delimiter: char,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            alignments_path: PathBuf::from(DEFAULT_ALIGNMENTS),
            domains_path: PathBuf::from(DEFAULT_DOMAINS),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            layout: AlignmentLayout::standard(),
            delimiter: '\t',
        }
    }
}

impl MergeConfig {
    pub fn with_layout(mut self, layout: AlignmentLayout) -> Self {
        self.layout = layout;
        self
    }
}
