//! Colored terminal output utilities.

use console::{Style, Term};

/// Terminal output formatter.
///
/// Command results go to stdout, diagnostics to stderr.
pub(crate) struct Output {
    results: Term,
    diagnostics: Term,
    warning_style: Style,
    error_style: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            results: Term::stdout(),
            diagnostics: Term::stderr(),
            warning_style: Style::new().yellow(),
            error_style: Style::new().red(),
        }
    }

    /// Print a command result.
    pub(crate) fn result(&self, msg: &str) {
        let _ = self.results.write_line(msg);
    }

    pub(crate) fn info(&self, msg: &str) {
        let _ = self.diagnostics.write_line(msg);
    }

    /// Yellow.
    pub(crate) fn warning(&self, msg: &str) {
        self.diagnostic(&self.warning_style, msg);
    }

    /// Red.
    pub(crate) fn error(&self, msg: &str) {
        self.diagnostic(&self.error_style, msg);
    }

    fn diagnostic(&self, style: &Style, msg: &str) {
        let _ = self.diagnostics.write_line(&style.apply_to(msg).to_string());
    }
}
