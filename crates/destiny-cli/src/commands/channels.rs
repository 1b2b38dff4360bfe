//! Channels command implementation.

use destiny_core::DerivedNodes;

use crate::{date, output};

pub fn run(input: String, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let birth_date = date::parse_birth_date(&input)?;
    let channels = DerivedNodes::derive(&birth_date).channels();

    if json {
        println!("{}", serde_json::to_string(&channels)?);
    } else {
        output::print_channels(&channels);
    }
    Ok(())
}
