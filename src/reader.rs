use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::{MergeError, Result};

/// Opens a text table for line-by-line reading, gunzipping it when the path
/// ends in ".gz".
pub fn open_table(path: &Path) -> Result<Box<dyn BufRead>> {
    let f = File::open(path).map_err(|e| MergeError::from_input(path, e))?;

    let is_gz = path
        .extension()
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let reader: Box<dyn BufRead> = if is_gz {
        Box::new(BufReader::new(MultiGzDecoder::new(f)))
    } else {
        Box::new(BufReader::new(f))
    };
    Ok(reader)
}

/// Reads every line of `path`, calling `f` with the 1-based line number and
/// the line stripped of its trailing newline (`\n` or `\r\n`).
pub fn for_each_line<F>(path: &Path, mut f: F) -> Result<()>
where
    F: FnMut(usize, &str) -> Result<()>,
{
    let mut reader = open_table(path)?;
    let mut line = String::new();
    let mut line_no = 0;
    loop {
        line.clear();
        if reader
            .read_line(&mut line)
            .map_err(|e| MergeError::io(path, e))?
            == 0
        {
            break; // EOF
        }
        line_no += 1;
        let text = line.strip_suffix('\n').unwrap_or(&line);
        let text = text.strip_suffix('\r').unwrap_or(text);
        f(line_no, text)?;
    }
    Ok(())
}
