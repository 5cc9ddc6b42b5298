//! CSV export of the currently visible rows.

use std::fs;
use std::io;
use std::path::PathBuf;

/// A built export artifact, ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

/// Delivery mechanism for export artifacts.
///
/// The component builds the CSV; how it reaches the user (file download,
/// clipboard, upload) is the host's business.
pub trait ExportSink: Send + Sync {
    fn deliver(&self, export: &CsvExport) -> io::Result<()>;
}

/// Writes artifacts into a directory under their configured filename.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ExportSink for FileSink {
    fn deliver(&self, export: &CsvExport) -> io::Result<()> {
        fs::write(self.dir.join(&export.filename), &export.content)
    }
}

/// Wrap a field in double quotes, doubling internal quotes.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Serialize rows of field text to CSV: every field quoted, fields
/// comma-joined, each row terminated by `\n`.
///
/// `headings` adds a leading header row when present. An empty input
/// produces a header-only document, or an empty one without headings.
pub fn to_csv<R>(headings: Option<&[String]>, rows: R) -> String
where
    R: IntoIterator<Item = Vec<String>>,
{
    let mut out = String::new();

    if let Some(headings) = headings {
        push_row(&mut out, headings.iter().map(String::as_str));
    }
    for row in rows {
        push_row(&mut out, row.iter().map(String::as_str));
    }

    out
}

fn push_row<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    let line = fields.map(quote).collect::<Vec<_>>().join(",");
    out.push_str(&line);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_every_field_and_doubles_inner_quotes() {
        let headings = vec!["Name".to_string(), "Note".to_string()];
        let rows = vec![vec!["Bob".to_string(), "said \"hi\", left".to_string()]];
        assert_eq!(
            to_csv(Some(&headings), rows),
            "\"Name\",\"Note\"\n\"Bob\",\"said \"\"hi\"\", left\"\n"
        );
    }

    #[test]
    fn no_rows_yields_header_only() {
        let headings = vec!["A".to_string()];
        assert_eq!(to_csv(Some(&headings), Vec::new()), "\"A\"\n");
    }

    #[test]
    fn no_rows_no_headers_yields_empty_document() {
        assert_eq!(to_csv(None, Vec::new()), "");
    }
}
