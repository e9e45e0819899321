//src/join.rs

use ahash::AHashMap;

use crate::types::{AlignmentRecord, DomainHitRecord, MergedRecord};

/// Row counts gathered while joining.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoinStats {
    pub alignment_rows: usize,
    pub domain_hits: usize,
    /// Alignment rows with at least one domain hit.
    pub matched_rows: usize,
    pub unmatched_rows: usize,
    pub output_rows: usize,
}

/// Maps each QueryID to the positions of its hits, in table order.
pub fn index_domain_hits(hits: &[DomainHitRecord]) -> AHashMap<&str, Vec<usize>> {
    let mut index: AHashMap<&str, Vec<usize>> = AHashMap::new();
    for (i, hit) in hits.iter().enumerate() {
        index.entry(hit.query_id.as_str()).or_default().push(i);
    }
    index
}

/// Relational left outer join on QueryID.
///
/// Every alignment row is emitted once per matching hit (in hit-table order),
/// or once with no domain when nothing matches. Alignment order is kept.
pub fn left_join<'a>(
    alignments: &'a [AlignmentRecord],
    hits: &'a [DomainHitRecord],
) -> (Vec<MergedRecord<'a>>, JoinStats) {
    let index = index_domain_hits(hits);
    let mut merged = Vec::with_capacity(alignments.len());
    let mut stats = JoinStats {
        alignment_rows: alignments.len(),
        domain_hits: hits.len(),
        ..JoinStats::default()
    };

    for alignment in alignments {
        match index.get(alignment.query_id()) {
            Some(positions) => {
                stats.matched_rows += 1;
                merged.extend(positions.iter().map(|&i| MergedRecord {
                    alignment,
                    domain: Some(&hits[i]),
                }));
            }
            None => {
                stats.unmatched_rows += 1;
                merged.push(MergedRecord {
                    alignment,
                    domain: None,
                });
            }
        }
    }

    stats.output_rows = merged.len();
    (merged, stats)
}
