use crate::error::NgResult;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// One data line: the keyword phrase followed by its metric fields as text.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// 1-based line number in the source, header included.
    pub line: usize,
    pub phrase: String,
    pub metrics: Vec<String>,
}

impl RawRow {
    pub fn new<S: Into<String>>(phrase: S, metrics: &[&str]) -> Self {
        Self {
            line: 0,
            phrase: phrase.into(),
            metrics: metrics.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// Reads tab-delimited rows. The first physical line is the header and is
/// always discarded, even when it is blank.
pub fn read_rows<R: Read>(reader: R) -> NgResult<Vec<RawRow>> {
    let mut reader = BufReader::new(reader);
    let mut header = String::new();
    reader.read_line(&mut header)?;

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut blank = 0;

    for result in rdr.records() {
        let rec = result?;
        // Positions restart after the header line.
        let line = rec.position().map(|p| p.line() as usize + 1).unwrap_or(0);

        let mut fields = rec.iter();
        let phrase = fields.next().unwrap_or_default();
        let metrics: Vec<String> = fields.map(str::to_string).collect();

        if phrase.trim().is_empty() && metrics.iter().all(|m| m.trim().is_empty()) {
            blank += 1;
            continue;
        }

        rows.push(RawRow {
            line,
            phrase: phrase.to_string(),
            metrics,
        });
    }

    debug!("Read {} rows ({} blank skipped)", rows.len(), blank);
    Ok(rows)
}

/// Derives rows from pasted text.
pub fn parse_rows(text: &str) -> NgResult<Vec<RawRow>> {
    read_rows(text.as_bytes())
}

/// Loads rows from a TSV file, or from stdin when `path` is `-`.
pub fn load_rows<P: AsRef<Path>>(path: P) -> NgResult<Vec<RawRow>> {
    let path = path.as_ref();
    let rows = if path == Path::new("-") {
        info!("📥 Reading rows from stdin");
        read_rows(io::stdin().lock())?
    } else {
        info!("📂 Loading rows from: {}", path.display());
        read_rows(File::open(path)?)?
    };
    info!("   -> {} data rows", rows.len());
    Ok(rows)
}
