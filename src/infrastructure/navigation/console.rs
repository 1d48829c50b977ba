//! Line-oriented notifier and renderer used by the CLI

use std::io::{self, Stdout, Write};
use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::domain::navigation::{Notifier, View, ViewRenderer};

fn write_line<W: Write>(out: &Mutex<W>, line: &str) {
    let result = match out.lock() {
        Ok(mut out) => writeln!(out, "{}", line),
        Err(poisoned) => writeln!(poisoned.into_inner(), "{}", line),
    };

    if let Err(e) = result {
        warn!("Failed to write console output: {}", e);
    }
}

/// Prints advisories as `! <message>`
#[derive(Debug, Clone)]
pub struct ConsoleNotifier<W: Write = Stdout> {
    out: Arc<Mutex<W>>,
}

impl ConsoleNotifier<Stdout> {
    pub fn stdout() -> Self {
        Self::new(Arc::new(Mutex::new(io::stdout())))
    }
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(out: Arc<Mutex<W>>) -> Self {
        Self { out }
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn notify(&self, message: &str) {
        write_line(&self.out, &format!("! {}", message));
    }
}

/// Prints committed views as `> <label> (<id>)`
#[derive(Debug, Clone)]
pub struct ConsoleRenderer<W: Write = Stdout> {
    out: Arc<Mutex<W>>,
}

impl ConsoleRenderer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(Arc::new(Mutex::new(io::stdout())))
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: Arc<Mutex<W>>) -> Self {
        Self { out }
    }
}

impl<W: Write> ViewRenderer for ConsoleRenderer<W> {
    fn render(&self, view: View) {
        write_line(&self.out, &format!("> {} ({})", view.label(), view));
    }
}
