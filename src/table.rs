//src/table.rs

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use csv::{QuoteStyle, Writer, WriterBuilder};

use crate::error::{MergeError, Result};
use crate::types::{AlignmentLayout, MergedRecord};

/// The output delimiter as a single byte. Only ASCII characters qualify.
pub fn delimiter_byte(delimiter: char) -> Result<u8> {
    if delimiter.is_ascii() && !matches!(delimiter, '"' | '\n' | '\r') {
        Ok(delimiter as u8)
    } else {
        Err(MergeError::InvalidDelimiter(delimiter))
    }
}

/// Writes the header and one row per merged record. Missing domain fields
/// become empty cells; a cell holding the delimiter, a quote or a line break
/// is quoted.
pub fn write_rows<W: Write>(
    writer: &mut Writer<W>,
    layout: &AlignmentLayout,
    records: &[MergedRecord<'_>],
) -> csv::Result<()> {
    writer.write_record(layout.output_header())?;
    for record in records {
        let domain = match record.domain {
            Some(hit) => hit.cells(),
            None => ["", "", ""],
        };
        let cells = record
            .alignment
            .fields()
            .iter()
            .map(String::as_str)
            .chain(domain);
        writer.write_record(cells)?;
    }
    Ok(())
}

/// Serializes the merged table to `path`. The parent directory has to exist
/// already; it is never created here.
pub fn write_table<P: AsRef<Path>>(
    records: &[MergedRecord<'_>],
    layout: &AlignmentLayout,
    path: P,
    delimiter: char,
) -> Result<()> {
    let path = path.as_ref();
    let delimiter = delimiter_byte(delimiter)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(MergeError::DirectoryNotFound {
                path: parent.to_path_buf(),
            });
        }
    }

    let file = File::create(path).map_err(|e| MergeError::io(path, e))?;
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(BufWriter::new(file));
    write_rows(&mut writer, layout, records).map_err(|e| MergeError::io(path, io::Error::from(e)))?;
    writer.flush().map_err(|e| MergeError::io(path, e))?;

    log::info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AlignmentRecord, DomainHitRecord};

    fn fixture(target: &str) -> (AlignmentLayout, AlignmentRecord, DomainHitRecord) {
        let layout = AlignmentLayout::new(&["QueryID", "TargetID"]).unwrap();
        let aln = AlignmentRecord::new(vec!["Q1".to_string(), target.to_string()], &layout);
        let hit = DomainHitRecord {
            query_id: "Q1".to_string(),
            pfam_acc: "PF00001".to_string(),
            pfam_name: "7tm_1".to_string(),
            hmm_evalue: "1e-5".to_string(),
        };
        (layout, aln, hit)
    }

    #[test]
    fn test_write_table_header_and_nulls() {
        let (layout, aln, hit) = fixture("T1");
        let records = vec![
            MergedRecord { alignment: &aln, domain: Some(&hit) },
            MergedRecord { alignment: &aln, domain: None },
        ];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        write_table(&records, &layout, &path, '\t').unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "QueryID\tTargetID\tPfam_Acc\tPfam_Name\tHMM_Evalue\n\
             Q1\tT1\tPF00001\t7tm_1\t1e-5\n\
             Q1\tT1\t\t\t\n"
        );
    }

    #[test]
    fn test_missing_directory_is_not_created() {
        let (layout, aln, _) = fixture("T1");
        let records = vec![MergedRecord { alignment: &aln, domain: None }];
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("AMP");
        let path = missing.join("Final_AMP_Results.tsv");

        match write_table(&records, &layout, &path, '\t') {
            Err(MergeError::DirectoryNotFound { path: p }) => assert_eq!(p, missing),
            other => panic!("expected DirectoryNotFound, got {other:?}"),
        }
        assert!(!missing.exists());
    }

    #[test]
    fn test_comma_delimiter_quotes_cells_holding_commas() {
        let (layout, aln, hit) = fixture("sp|P1|LYS, partial");
        let records = vec![MergedRecord { alignment: &aln, domain: Some(&hit) }];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_table(&records, &layout, &path, ',').unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "QueryID,TargetID,Pfam_Acc,Pfam_Name,HMM_Evalue\n\
             Q1,\"sp|P1|LYS, partial\",PF00001,7tm_1,1e-5\n"
        );

        // Reading it back keeps every row as wide as the header.
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b',')
            .from_path(&path)
            .unwrap();
        let header_len = reader.headers().unwrap().len();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(header_len, 5);
        assert_eq!(rows[0].len(), 5);
        assert_eq!(&rows[0][1], "sp|P1|LYS, partial");
    }

    #[test]
    fn test_tab_delimiter_leaves_commas_alone() {
        let (layout, aln, _) = fixture("a, b");
        let records = vec![MergedRecord { alignment: &aln, domain: None }];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        write_table(&records, &layout, &path, '\t').unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().nth(1), Some("Q1\ta, b\t\t\t"));
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        assert_eq!(delimiter_byte('\t').unwrap(), b'\t');
        assert!(matches!(delimiter_byte('§'), Err(MergeError::InvalidDelimiter('§'))));
        assert!(matches!(delimiter_byte('"'), Err(MergeError::InvalidDelimiter('"'))));
    }
}
