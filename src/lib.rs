// src/lib.rs
pub mod blast;
pub mod config;
pub mod error;
pub mod hmmer;
pub mod join;
pub mod reader;
pub mod table;
pub mod types;

use crate::blast::parse_alignments;
use crate::config::MergeConfig;
use crate::hmmer::parse_domain_hits;
use crate::join::{left_join, JoinStats};
use crate::types::{AlignmentLayout, AlignmentRecord, DomainHitRecord, MergedRecord};

pub use crate::error::{MergeError, Result};

/// Both parsed input tables. The merged rows borrow from these, so the join
/// is run on demand instead of being stored.
pub struct MergeResults {
    pub layout: AlignmentLayout,
    pub alignments: Vec<AlignmentRecord>,
    pub domain_hits: Vec<DomainHitRecord>,
}

impl MergeResults {
    /// Left outer join of the alignment rows against the domain hits.
    pub fn merged(&self) -> (Vec<MergedRecord<'_>>, JoinStats) {
        left_join(&self.alignments, &self.domain_hits)
    }
}

/// Parse both reports into memory.
pub fn load_inputs(config: &MergeConfig) -> Result<MergeResults> {
    // 1. Alignment report
    let alignments = parse_alignments(&config.alignments_path, &config.layout)?;
    log::info!(
        "Loaded {} alignment rows from {}",
        alignments.len(),
        config.alignments_path.display()
    );

    // 2. Domain table
    let domain_hits = parse_domain_hits(&config.domains_path)?;
    log::info!(
        "Loaded {} domain hits from {}",
        domain_hits.len(),
        config.domains_path.display()
    );

    Ok(MergeResults {
        layout: config.layout.clone(),
        alignments,
        domain_hits,
    })
}

/// The whole run: parse -> parse -> join -> write.
pub fn merge_results(config: &MergeConfig) -> Result<JoinStats> {
    let inputs = load_inputs(config)?;

    // 3. Join
    let (records, stats) = inputs.merged();
    log::info!(
        "Joined {} alignment rows ({} matched, {} unmatched) into {} rows",
        stats.alignment_rows,
        stats.matched_rows,
        stats.unmatched_rows,
        stats.output_rows
    );

    // 4. Write
    table::write_table(&records, &inputs.layout, &config.output_path, config.delimiter)?;
    Ok(stats)
}
