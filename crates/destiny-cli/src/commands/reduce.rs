//! Reduce command implementation.

pub fn run(n: u64) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", destiny_core::reduce(n));
    Ok(())
}
