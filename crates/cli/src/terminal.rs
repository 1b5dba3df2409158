//! Line-oriented registration form.
//!
//! Reads commands and field values from any `BufRead` and writes prompts,
//! tables, and errors to any `Write`. The loop owns the only mutable
//! [`FormSession`] and replaces it after each action.

use std::io::{BufRead, Write};

use anyhow::Context;
use chrono::{DateTime, Utc};

use prodreg_products::{EMPTY_LIST_MESSAGE, FormSession, ProductSubmission};

use crate::config::Config;

const HELP: &str = "\
Commands:
  add     register a product
  toggle  show or hide the product list (alias: list)
  new     hide the list and return to the form
  json    print registered products as JSON
  help    show this help
  quit    leave (alias: exit)";

const NAME_COLUMN_WIDTH: usize = 24;

/// Source of the current time, injectable for tests.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub struct Terminal<R, W, C = SystemClock> {
    input: R,
    output: W,
    clock: C,
    session: FormSession,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(config: &Config, input: R, output: W) -> Self {
        Self::with_clock(config, input, output, SystemClock)
    }
}

impl<R: BufRead, W: Write, C: Clock> Terminal<R, W, C> {
    pub fn with_clock(config: &Config, input: R, output: W, clock: C) -> Self {
        Self {
            input,
            output,
            clock,
            session: FormSession::with_notice_ttl(config.notice_ttl),
        }
    }

    /// Run until `quit` or end of input; returns the final session.
    pub fn run(mut self) -> anyhow::Result<FormSession> {
        writeln!(self.output, "Product registration")?;
        writeln!(self.output, "Enter the product details below. Type `help` for commands.")?;

        loop {
            if let Some(notice) = self.session.active_notice(self.clock.now()) {
                writeln!(self.output, "[{}]", notice.message())?;
            } else if self.session.notice().is_some() {
                self.session = self.session.dismiss_notice();
            }

            let label = format!("[{}] >", self.session.toggle_label());
            let Some(line) = self.prompt(&label)? else {
                break;
            };

            match line.trim() {
                "" => {}
                "add" => {
                    if !self.add()? {
                        break;
                    }
                }
                "toggle" | "list" => {
                    self.session = self.session.toggle_products();
                    self.render_products()?;
                }
                "new" => {
                    self.session = self.session.hide_products();
                }
                "json" => {
                    serde_json::to_writer_pretty(&mut self.output, self.session.products())
                        .context("failed to write product list as JSON")?;
                    writeln!(self.output)?;
                }
                "help" => writeln!(self.output, "{HELP}")?,
                "quit" | "exit" => break,
                other => writeln!(self.output, "unknown command: {other} (type `help`)")?,
            }
        }

        self.output.flush()?;
        Ok(self.session)
    }

    /// Collect one submission. Returns `false` when input ended mid-form.
    fn add(&mut self) -> anyhow::Result<bool> {
        let Some(name) = self.prompt("Name:")? else {
            return Ok(false);
        };
        let Some(description) = self.prompt("Description:")? else {
            return Ok(false);
        };
        let Some(value) = self.prompt("Value (R$):")? else {
            return Ok(false);
        };
        let Some(available) = self.prompt("Available for sale [yes/no] (blank = yes):")? else {
            return Ok(false);
        };

        let mut submission = ProductSubmission::new(name, description, value);
        if !available.is_empty() {
            submission = submission.with_available(available);
        }

        match self.session.submit(&submission, self.clock.now()) {
            Ok(session) => {
                self.session = session;
                self.render_products()?;
            }
            Err(errors) => {
                writeln!(self.output, "Product not registered:")?;
                for (field, error) in errors.iter() {
                    writeln!(self.output, "  {field}: {error}")?;
                }
            }
        }

        Ok(true)
    }

    fn render_products(&mut self) -> anyhow::Result<()> {
        if !self.session.products_visible() {
            return Ok(());
        }

        writeln!(self.output, "Products")?;
        let products = self.session.products();
        if products.is_empty() {
            writeln!(self.output, "{EMPTY_LIST_MESSAGE}")?;
            return Ok(());
        }

        writeln!(self.output, "{:<width$} | Value", "Name", width = NAME_COLUMN_WIDTH)?;
        for row in products.rows() {
            writeln!(
                self.output,
                "{:<width$} | {}",
                row.name,
                row.price,
                width = NAME_COLUMN_WIDTH
            )?;
        }
        Ok(())
    }

    /// Print `label` and read one line without its line terminator.
    fn prompt(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{label} ")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
