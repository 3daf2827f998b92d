//! Spreads a handful of dates over neighbouring years and reports the years.
//!
//! Run with `RUST_LOG=debug` to see the constraint rejection being logged.

use chrono::{Datelike, Local, Months, NaiveDate};
use fixed_collection::{collection, element_constraint, AnyCollection, Collection};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Cell {
    Date(NaiveDate),
    Number(i64),
}

element_constraint! {
    /// Only date cells.
    DatesOnly: Cell = |cell| matches!(cell, Cell::Date(_))
}

fn neighbours(cell: &Cell) -> Vec<Cell> {
    match cell {
        Cell::Date(d) => vec![
            Cell::Date(*d - Months::new(12)),
            Cell::Date(*d),
            Cell::Date(*d + Months::new(12)),
        ],
        Cell::Number(_) => Vec::new(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let today = Local::now().date_naive();
    let dates: Collection<Cell, DatesOnly> = collection![
        Cell::Date(today),
        Cell::Date(today - Months::new(60)),
        Cell::Date(today + Months::new(60)),
    ]?;

    let years: AnyCollection<i32> = dates
        .flat_map(neighbours)?
        .sort()
        .disable_type_check()
        .map(|cell| match cell {
            Cell::Date(d) => d.year(),
            Cell::Number(n) => n as i32,
        });

    println!("{}", serde_json::to_string(&years)?);

    if let Err(err) = dates.add(Cell::Number(i64::from(today.year()))) {
        tracing::warn!(%err, "numbers are not dates");
    }

    Ok(())
}
