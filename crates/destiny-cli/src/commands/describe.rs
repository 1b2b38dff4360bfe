//! Describe command implementation.

use destiny_core::{describe_entry, Category};

pub fn run(value: u32, category: String) -> Result<(), Box<dyn std::error::Error>> {
    let category: Category = category
        .parse()
        .map_err(|e| format!("Invalid category: {}", e))?;

    let entry = describe_entry(value);
    if u32::from(entry.value) != value {
        log::warn!("no entry for value {}; using {}", value, entry.value);
    }

    println!("{} ({})", entry.title, entry.value);
    println!("{}", entry.text(category));
    Ok(())
}
