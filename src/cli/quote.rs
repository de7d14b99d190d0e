//! Quote command implementation

use anyhow::Result;

use crate::quote::QuoteSelector;

/// Print `count` consecutive distinct quotes; zero prints nothing.
pub fn run(count: usize) -> Result<()> {
    if count == 0 {
        return Ok(());
    }

    let mut rng = rand::thread_rng();
    let mut selector = QuoteSelector::new(&mut rng);

    let mut quote = selector.current();
    for shown in 0..count {
        if shown > 0 {
            quote = selector.next(&mut rng);
        }
        println!("\"{}\" — {}", quote.text, quote.author);
    }

    Ok(())
}
