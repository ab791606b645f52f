//! Prints the descriptive statistics of a fixed sample set.

use anyhow::Result;
use sumstats::Samples;

fn main() -> Result<()> {
    let samples = Samples::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 8.0])?;

    println!("Values: {samples}");
    println!("Mean: {}", samples.mean());
    println!("Median: {}", samples.median());
    println!("Mode: {}", samples.mode());

    Ok(())
}
