//! Output formatting utilities.

use destiny_core::{Arcana, ChannelName, Channels, DestinyMatrix, Node};
use serde::Serialize;

/// Formats a value as pretty JSON.
pub fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a node as a simple table row.
pub fn format_node_row(node: &Node) -> String {
    format!(
        "{:<17} {:<21} {:<12} {:>5}  {}",
        node.id.as_str(),
        node.label,
        node.category.as_str(),
        node.value.get(),
        truncate(&node.description, 60)
    )
}

/// Prints node table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!(
        "{:<17} {:<21} {:<12} {:>5}  {}",
        "NODE", "LABEL", "CATEGORY", "VALUE", "DESCRIPTION"
    );
    println!("{}", "-".repeat(120));
}

/// Formats one channel as `name: a -> b -> c`.
pub fn format_channel(name: ChannelName, values: [Arcana; 3]) -> String {
    format!(
        "{:<7} {} -> {} -> {}",
        format!("{}:", name.as_str()),
        values[0],
        values[1],
        values[2]
    )
}

/// Prints the full matrix as a table followed by its channels.
pub fn print_matrix_table(matrix: &DestinyMatrix) {
    print_table_header();
    for node in matrix.nodes.iter() {
        println!("{}", format_node_row(node));
    }
    println!();
    print_channels(&matrix.channels);
}

/// Prints each channel on its own line.
pub fn print_channels(channels: &Channels) {
    for name in ChannelName::ALL {
        println!("{}", format_channel(name, channels.get(name)));
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
