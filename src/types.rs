//src/types.rs

use crate::error::{MergeError, Result};

/// Name of the join key. Every alignment layout must contain it.
pub const QUERY_ID: &str = "QueryID";

/// Columns contributed by the domain-scan report, in output order.
pub const DOMAIN_COLUMNS: [&str; 3] = ["Pfam_Acc", "Pfam_Name", "HMM_Evalue"];

/// Short tabular BLASTp layout.
pub const STANDARD_COLUMNS: [&str; 10] = [
    "QueryID", "TargetID", "Identity", "AlignLength", "Evalue", "BitScore",
    "Qstart", "Qend", "Sstart", "Send",
];

/// Full 12-column tabular layout (outfmt 6 order).
pub const EXTENDED_COLUMNS: [&str; 12] = [
    "QueryID", "TargetID", "Identity", "AlignLength", "Mismatch", "GapOpen",
    "Qstart", "Qend", "Sstart", "Send", "Evalue", "BitScore",
];

/// Positional column names of the alignment report, plus where the key lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentLayout {
    columns: Vec<String>,
    key_index: usize,
}

impl AlignmentLayout {
    /// Validates a custom layout: non-empty, holds `QueryID`, no duplicates,
    /// and no clash with the domain columns.
    pub fn new<S: AsRef<str>>(columns: &[S]) -> Result<Self> {
        let columns: Vec<String> = columns.iter().map(|c| c.as_ref().trim().to_string()).collect();
        if columns.is_empty() {
            return Err(MergeError::InvalidLayout("no columns given".to_string()));
        }
        for (i, name) in columns.iter().enumerate() {
            if name.is_empty() {
                return Err(MergeError::InvalidLayout(format!("column {} has an empty name", i + 1)));
            }
            if columns[..i].contains(name) {
                return Err(MergeError::InvalidLayout(format!("duplicate column '{name}'")));
            }
            if DOMAIN_COLUMNS.contains(&name.as_str()) {
                return Err(MergeError::InvalidLayout(format!(
                    "'{name}' is reserved for the domain table"
                )));
            }
        }
        let key_index = columns
            .iter()
            .position(|c| c == QUERY_ID)
            .ok_or_else(|| MergeError::InvalidLayout(format!("missing key column '{QUERY_ID}'")))?;
        Ok(Self { columns, key_index })
    }

    pub fn standard() -> Self {
        Self {
            columns: STANDARD_COLUMNS.iter().map(|c| c.to_string()).collect(),
            key_index: 0,
        }
    }

    pub fn extended() -> Self {
        Self {
            columns: EXTENDED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            key_index: 0,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn key_index(&self) -> usize {
        self.key_index
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Alignment columns followed by the domain columns.
    pub fn output_header(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(String::as_str)
            .chain(DOMAIN_COLUMNS)
            .collect()
    }
}

impl Default for AlignmentLayout {
    fn default() -> Self {
        Self::standard()
    }
}

/// One line of the alignment report. Values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentRecord {
    fields: Vec<String>,
    key_index: usize,
}

impl AlignmentRecord {
    /// Takes the key position from `layout`.
    pub fn new(fields: Vec<String>, layout: &AlignmentLayout) -> Self {
        Self {
            fields,
            key_index: layout.key_index(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The join key. A row too short to hold it has an empty key.
    pub fn query_id(&self) -> &str {
        self.fields.get(self.key_index).map_or("", String::as_str)
    }
}

/// One non-comment line of the domain-scan report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainHitRecord {
    pub query_id: String,
    pub pfam_acc: String,
    pub pfam_name: String,
    pub hmm_evalue: String,
}

impl DomainHitRecord {
    /// Domain cells in `DOMAIN_COLUMNS` order.
    pub fn cells(&self) -> [&str; 3] {
        [&self.pfam_acc, &self.pfam_name, &self.hmm_evalue]
    }
}

/// An alignment row joined with at most one domain hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedRecord<'a> {
    pub alignment: &'a AlignmentRecord,
    pub domain: Option<&'a DomainHitRecord>,
}
