// Line protocol for bot front-ends: one command per line on stdin,
// replies on stdout. See `tajweed_core::protocol` for the commands.
use log::{info, warn};
use std::io::{self, BufRead, Write};
use tajweed_core::protocol::handle_line;
use tajweed_core::{EngineConfig, TajweedEngine};

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EngineConfig::from_env().unwrap_or_else(|e| {
        warn!("Falling back to default config: {}", e);
        EngineConfig::default()
    });
    let engine = TajweedEngine::from_config(&config).unwrap_or_else(|e| {
        warn!("Glossary unavailable, continuing without translation: {}", e);
        TajweedEngine::new()
    });
    info!("Tajweed pipe started");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let keep_going = handle_line(&engine, &line?, &mut stdout)?;
        stdout.flush()?;
        if !keep_going {
            break;
        }
    }

    info!("Shutting down");
    Ok(())
}
