//! Terminal front end for product registration.

pub mod config;
pub mod terminal;

use std::io::{BufRead, Write};

pub use config::{Config, ConfigError};
pub use terminal::{Clock, SystemClock, Terminal};

use prodreg_products::FormSession;

/// Run an interactive session over `input`/`output` with the wall clock.
pub fn run<R: BufRead, W: Write>(
    config: &Config,
    input: R,
    output: W,
) -> anyhow::Result<FormSession> {
    Terminal::new(config, input, output).run()
}
