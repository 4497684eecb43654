//! CSV Export
//!
//! Writes the program list as `ID,Name,Description,Category`. Fields go
//! through the `csv` writer so commas, quotes and line breaks inside
//! names or descriptions are quoted instead of breaking the row layout.

use std::io::Write;

use thiserror::Error;

use crate::model::Program;

/// File name offered for the browser download and used by the CLI
pub const EXPORT_FILE_NAME: &str = "programs.csv";

/// MIME type of the exported file
pub const EXPORT_CONTENT_TYPE: &str = "text/csv;charset=utf-8";

const HEADER: [&str; 4] = ["ID", "Name", "Description", "Category"];

/// Errors that can occur while exporting
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export produced invalid UTF-8")]
    Encoding,
}

/// Write programs as CSV to any writer
pub fn write_programs_csv<'a, W, I>(writer: W, programs: I) -> Result<(), ExportError>
where
    W: Write,
    I: IntoIterator<Item = &'a Program>,
{
    let mut csv = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv.write_record(HEADER)?;

    for program in programs {
        let id = program.id.to_string();
        csv.write_record([
            id.as_str(),
            program.name.as_str(),
            program.description.as_deref().unwrap_or(""),
            program.category.as_deref().unwrap_or(""),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Render programs as a CSV string
pub fn programs_to_csv<'a, I>(programs: I) -> Result<String, ExportError>
where
    I: IntoIterator<Item = &'a Program>,
{
    let mut buffer = Vec::new();
    write_programs_csv(&mut buffer, programs)?;
    String::from_utf8(buffer).map_err(|_| ExportError::Encoding)
}
