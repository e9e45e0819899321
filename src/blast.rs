//src/blast.rs

use std::path::Path;

use crate::error::{MergeError, Result};
use crate::reader::for_each_line;
use crate::types::{AlignmentLayout, AlignmentRecord};

/// Parses a header-less, tab-separated alignment report. Fields are assigned
/// positionally from `layout`; empty lines are skipped and any other line
/// must carry exactly `layout.len()` fields.
pub fn parse_alignments<P: AsRef<Path>>(
    path: P,
    layout: &AlignmentLayout,
) -> Result<Vec<AlignmentRecord>> {
    let path = path.as_ref();
    let mut records = Vec::new();

    for_each_line(path, |line_no, line| {
        if line.is_empty() {
            return Ok(());
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != layout.len() {
            return Err(MergeError::MalformedRow {
                path: path.to_path_buf(),
                line: line_no,
                expected: layout.len().to_string(),
                found: fields.len(),
            });
        }
        records.push(AlignmentRecord::new(
            fields.into_iter().map(str::to_string).collect(),
            layout,
        ));
        Ok(())
    })?;

    log::debug!("{}: {} alignment rows", path.display(), records.len());
    Ok(records)
}
