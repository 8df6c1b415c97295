use chained_table::logger::initialize_logger;
use chained_table::ChainedTable;
use log::error;
use std::error::Error;
use std::process::ExitCode;

const DEFAULT_CAPACITY: usize = 100;

const ADDRESSES: [(&str, &str); 10] = [
    ("1", "First Address"),
    ("2", "Second Address"),
    ("3", "Third Address"),
    ("4", "Fourth Address"),
    ("Hel", "Fifth Address"),
    ("Cau", "Sixth Address"),
    ("7", "Seventh Address"),
    ("8", "Eighth Address"),
    ("9", "Ninth Address"),
    ("10", "Tenth Address"),
];

fn run() -> Result<(), Box<dyn Error>> {
    let capacity = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => DEFAULT_CAPACITY,
    };
    let mut table = ChainedTable::with_capacity(capacity)?;

    for (key, value) in ADDRESSES {
        if let Err(e) = table.insert(key, value) {
            println!("{e}");
        }
    }

    table.print()?;
    for key in ["1", "2", "3", "Hel", "Cau"] {
        table.print_search(key)?;
    }

    table.print()?;
    table.delete("1");
    table.delete("Cau");
    table.print()?;

    table.teardown();
    Ok(())
}

fn main() -> ExitCode {
    initialize_logger();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("chained-table-demo: {e}");
            ExitCode::FAILURE
        }
    }
}
