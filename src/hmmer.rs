//src/hmmer.rs

use std::path::Path;

use crate::error::{MergeError, Result};
use crate::reader::for_each_line;
use crate::types::DomainHitRecord;

/// Fewest whitespace-separated tokens a hit line may carry.
pub const MIN_TOKENS: usize = 5;

/// Parses a whitespace-delimited domain table (HMMER `--tblout` style).
/// Lines starting with '#' are skipped. From every other line:
///
/// ```text
/// token 0 -> QueryID, token 3 -> Pfam_Acc, token 2 -> Pfam_Name, token 4 -> HMM_Evalue
/// ```
pub fn parse_domain_hits<P: AsRef<Path>>(path: P) -> Result<Vec<DomainHitRecord>> {
    let path = path.as_ref();
    let mut hits = Vec::new();

    for_each_line(path, |line_no, line| {
        if line.starts_with('#') {
            return Ok(());
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < MIN_TOKENS {
            return Err(MergeError::MalformedRow {
                path: path.to_path_buf(),
                line: line_no,
                expected: format!("at least {MIN_TOKENS}"),
                found: parts.len(),
            });
        }
        hits.push(DomainHitRecord {
            query_id: parts[0].to_string(),
            pfam_acc: parts[3].to_string(),
            pfam_name: parts[2].to_string(),
            hmm_evalue: parts[4].to_string(),
        });
        Ok(())
    })?;

    log::debug!("{}: {} domain hits", path.display(), hits.len());
    Ok(hits)
}
