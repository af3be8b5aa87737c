use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use tabdex::core::config::IndexConfig;
use tabdex::core::error::{Error, ErrorKind, Result};
use tabdex::index::builder::IndexBuilder;
use tabdex::query::processor::QueryProcessor;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "tabdex".to_string());
    let (Some(file_name), None) = (args.next(), args.next()) else {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            format!("usage: {} <file>", program),
        ));
    };

    println!("Reading from file '{}'.", file_name);
    let builder = IndexBuilder::new(IndexConfig::default());
    let index = Arc::new(builder.build_from_file(&file_name)?);
    let processor = QueryProcessor::new(Arc::clone(&index));

    println!("Enter keywords separated by spaces (type 'quit' to exit).");
    let mut stdin = io::stdin().lock();
    let mut input = String::new();
    loop {
        print!("query> ");
        io::stdout().flush()?;

        input.clear();
        if stdin.read_line(&mut input)? == 0 {
            println!();
            println!("Bye.");
            break;
        }

        // Non-breaking and full-width spaces from pasted input count as
        // whitespace too.
        let query = input.replace('\u{00A0}', " ").replace('\u{3000}', " ");
        let query = query.trim();
        if query.is_empty() {
            continue;
        }
        if matches!(query.to_lowercase().as_str(), "quit" | "exit" | ":q") {
            println!("Bye.");
            break;
        }

        let keywords: Vec<&str> = query.split_whitespace().collect();
        let ids = processor.process(&keywords);
        if ids.is_empty() {
            println!("(no results)");
            continue;
        }

        for id in ids {
            if let Some(record) = index.record(id) {
                println!("Title:\t{}", record.title);
                println!("Description:\t{}", record.description);
                println!("Ratings:\t{}", record.num_ratings);
                println!("Rating:\t{}", record.rating);
                println!("Sitelinks:\t{}", record.num_sitelinks);
            }
        }
    }

    Ok(())
}
