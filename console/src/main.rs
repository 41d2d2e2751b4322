mod commands;
mod state;

use commands::{Command, HELP};
use state::State;

use classic_ciphers::errors::CipherError;
use classic_ciphers::preset::prime_pool::{DEFAULT_PRIME_POOL, PoolConfig, PrimePool};

use std::io::{self, BufRead, Write};

/// Builds the pool from the JSON config named on the command line, or falls
/// back to the default range.
fn load_pool() -> Result<PrimePool, CipherError> {
    match std::env::args().nth(1) {
        Some(path) => {
            let config = PoolConfig::from_json(&std::fs::read_to_string(&path)?)?;
            log::info!("Using prime range [{}, {}] from {}", config.min, config.max, path);
            config.build()
        }
        None => Ok(DEFAULT_PRIME_POOL.clone()),
    }
}

fn main() -> Result<(), CipherError> {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::init();

    let pool = load_pool()?;
    println!(
        "Classic ciphers: Caesar and RSA over {} primes in [{}, {}]",
        pool.len(),
        pool.min(),
        pool.max()
    );
    println!("{}", HELP);

    let mut state = State::new(pool);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => command,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };

        match state.execute(command) {
            Ok(output) if output.is_empty() => {}
            Ok(output) => println!("{}", output),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    Ok(())
}
