//! Demo binary: drives one emitter through the default scenario.
//!
//! Constructs "SlugBug" at speed 100 (warn at 130, fatal at 190), registers
//! two warning observers and one fatal observer, accelerates by 20 six times
//! and prints what the observers saw.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin overspeed_demo
//!
//! # With library logging on stderr
//! RUST_LOG=debug cargo run --bin overspeed_demo
//! ```

use std::io;

use anyhow::Result;
use rs_overspeed::{demo, Config};

fn main() -> Result<()> {
    // Logs go to stderr so stdout is only the demo transcript
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = Config::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run(&config, &mut out)?;

    Ok(())
}
