//! Matrix command implementation.

use destiny_core::DestinyMatrix;

use crate::{date, output};

/// How the matrix is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Table,
    Json,
    Canonical,
    Fingerprint,
}

impl Format {
    pub fn from_flags(json: bool, canonical: bool, fingerprint: bool) -> Self {
        if fingerprint {
            Format::Fingerprint
        } else if canonical {
            Format::Canonical
        } else if json {
            Format::Json
        } else {
            Format::Table
        }
    }
}

pub fn run(input: String, format: Format) -> Result<(), Box<dyn std::error::Error>> {
    let birth_date = date::parse_birth_date(&input)?;
    let matrix = DestinyMatrix::assemble(&birth_date);

    match format {
        Format::Table => output::print_matrix_table(&matrix),
        Format::Json => println!("{}", output::format_json(&matrix)),
        Format::Canonical => {
            let bytes = matrix.canonical_bytes()?;
            println!("{}", String::from_utf8_lossy(&bytes));
        }
        Format::Fingerprint => println!("{}", matrix.fingerprint()?),
    }
    Ok(())
}
