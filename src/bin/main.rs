use crossterm::style::Stylize;
use log::{error, info};
use std::io::{stdin, stdout, Write};
use tajweed_core::persistence::append_to_archive;
use tajweed_core::{contains_arabic, EngineConfig, TajweedEngine};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match EngineConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(2);
        }
    };
    let engine = match TajweedEngine::from_config(&config) {
        Ok(engine) => engine,
        Err(e) => {
            error!("Could not load glossary: {}", e);
            std::process::exit(2);
        }
    };
    info!("Engine ready (translation: {})", engine.has_translator());

    print_banner();

    loop {
        print!("\n> ");
        if stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                error!("Could not read input: {}", e);
                break;
            }
        }

        match input.trim() {
            "exit" => break,
            "" => continue,
            s if !contains_arabic(s) => {
                println!("{}", "Please enter Arabic text.".yellow());
            }
            s => {
                let result = engine.analyze_text(s);
                println!("\n{}", engine.render(&result));

                if let Some(path) = &config.archive_path {
                    match append_to_archive(&result, path) {
                        Ok(n) => info!("Archived result #{} in '{}'", n, path.display()),
                        Err(e) => error!("Could not archive result: {}", e),
                    }
                }
            }
        }
    }

    println!("\nMa'a as-salama.");
}

fn print_banner() {
    println!("{}", "Arabic Transliteration + Tajweed".bold().green());
    println!("---------------------------------------------------------------");
    println!("Enter Arabic text to get its transliteration and Tajweed rules.");
    println!("Type 'exit' to quit.");
}
