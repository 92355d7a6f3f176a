use std::env;
use std::io::{self, Write};
use std::process;

use litlesql::{command, Table};

fn main() {
    let Some(path) = env::args().nth(1) else {
        println!("Must supply a database filename.");
        process::exit(1);
    };

    if let Err(e) = run(&path) {
        let _ = io::stdout().flush();
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(path: &str) -> litlesql::Result<()> {
    let mut table = Table::open(path)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    command::run_repl(&mut table, stdin.lock(), &mut stdout)?;
    table.close()
}
