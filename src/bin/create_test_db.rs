use std::{
    error::Error,
    path::Path,
    process::exit,
    sync::{Arc, Mutex},
};

use clap::Parser;
use rusqlite::Connection;
use time::{Date, Duration, OffsetDateTime};

use ledger_htmx::{SQLiteTransactionStore, Transaction, TransactionBuilder, TransactionStore};

/// A utility for creating a test database for the ledger web server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// How many days of transactions to create, ending today.
    #[arg(long, default_value_t = 900)]
    days: u32,

    /// How many transactions to create for each day.
    #[arg(long, default_value_t = 10)]
    per_day: u32,
}

/// The number of days of transactions inserted with each call to `add_batch`.
const DAYS_PER_BATCH: usize = 30;

const DESCRIPTIONS: [&str; 12] = [
    "Groceries",
    "Coffee",
    "Rent",
    "Electricity bill",
    "Fuel",
    "Restaurant",
    "Gym membership",
    "Phone bill",
    "Books",
    "Pharmacy",
    "Public transport",
    "Streaming subscription",
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    let store = SQLiteTransactionStore::new(Arc::new(Mutex::new(conn)));
    store.initialize()?;

    let today = OffsetDateTime::now_utc().date();
    let days = fixture_days(today, args.days);

    println!(
        "Creating {} transactions over {} days...",
        u64::from(args.days) * u64::from(args.per_day),
        days.len()
    );

    for batch in days.chunks(DAYS_PER_BATCH) {
        let transactions = batch
            .iter()
            .flat_map(|&(day_index, date)| fixture_transactions(day_index, date, args.per_day))
            .collect();

        store.add_batch(transactions)?;
    }

    println!("Created {} transactions.", store.get_count_all()?);
    println!("Success!");

    Ok(())
}

/// The `days` dates ending today, oldest first, each paired with its index.
fn fixture_days(today: Date, days: u32) -> Vec<(u32, Date)> {
    (0..days)
        .rev()
        .filter_map(|days_ago| {
            today
                .checked_sub(Duration::days(days_ago.into()))
                .map(|date| (days - 1 - days_ago, date))
        })
        .collect()
}

/// The transactions for one day.
///
/// The first transaction of every fourteenth day is a salary deposit, every
/// other transaction is an expense between $0.01 and $99.99.
fn fixture_transactions(day_index: u32, date: Date, per_day: u32) -> Vec<TransactionBuilder> {
    (0..per_day)
        .map(|i| {
            let n = u64::from(day_index) * u64::from(per_day) + u64::from(i);

            if i == 0 && day_index % 14 == 0 {
                return Transaction::build(250_000, date, "Salary");
            }

            let amount = -((n * 7_919 % 9_999) as i64 + 1);
            let description = DESCRIPTIONS[(n % DESCRIPTIONS.len() as u64) as usize];

            Transaction::build(amount, date, description)
        })
        .collect()
}
