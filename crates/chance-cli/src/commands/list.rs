//! Dump every ledger record.

use anyhow::Result;
use chance_core::Ledger;

pub fn run(ledger: Ledger, json: bool) -> Result<()> {
    let records = ledger.records()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!("{:>10}  {:>11}  {:>11}  name", "uid", "credits", "highscore");
    for record in &records {
        println!(
            "{:>10}  {:>11}  {:>11}  {}",
            record.uid, record.credits, record.highscore, record.name
        );
    }
    println!("{} record(s) in {:?}", records.len(), ledger.path());
    Ok(())
}
