use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use filter_core::core::decompose::decompose;
use filter_core::FilterEngine;
use std::io::{stdin, stdout, Write};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "filter_core=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Optional first argument: a JSON config file.
    let engine = match std::env::args().nth(1) {
        Some(path) => FilterEngine::from_config_file(Path::new(&path))?,
        None => FilterEngine::new(),
    };

    execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    println!("Hangul Bad-Word Filter Simulator");
    println!("---------------------------------------------------------------");
    println!("Type a message and press [Enter]. 'exit' to quit.");
    println!("Bad-form index: {} forms\n", engine.bad_forms().len());

    loop {
        print!("> ");
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let message = input.trim_end_matches(['\n', '\r']);
        if message == "exit" {
            break;
        }
        print_report(&engine, message);
    }
    Ok(())
}

fn print_report(engine: &FilterEngine, message: &str) {
    let variants = engine.generator().base_variants(message);
    println!("  Normalized    -> {}", variants.cleaned);
    println!("  Leet          -> {}", variants.leet);
    println!("  Reconstructed -> {}", variants.reconstructed);
    println!("  Decomposed    -> {}", decompose(&variants.reconstructed));

    let hits = engine.find_hits(message);
    if hits.is_empty() {
        println!("  {}\n", "CLEAN".green().bold());
    } else {
        println!("  {} {}\n", "DETECTED".red().bold(), hits.join(", "));
    }
}
