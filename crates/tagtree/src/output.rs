//! Colored terminal output on stderr.

use console::{Style, Term};

/// Color applied to a message line.
#[derive(Clone, Copy, Debug)]
enum Tone {
    Plain,
    Success,
    Error,
    Highlight,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Self::Plain => Style::new(),
            Self::Success => Style::new().green(),
            Self::Error => Style::new().red(),
            Self::Highlight => Style::new().cyan().bold(),
        }
    }
}

/// Status line writer.
pub(crate) struct Output {
    term: Term,
}

impl Output {
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    pub(crate) fn info(&self, msg: &str) {
        self.emit(Tone::Plain, msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.emit(Tone::Success, msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        self.emit(Tone::Error, msg);
    }

    pub(crate) fn highlight(&self, msg: &str) {
        self.emit(Tone::Highlight, msg);
    }

    fn emit(&self, tone: Tone, msg: &str) {
        let _ = self
            .term
            .write_line(&tone.style().apply_to(msg).to_string());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn painted(tone: Tone, msg: &str) -> String {
        tone.style().force_styling(true).apply_to(msg).to_string()
    }

    #[test]
    fn test_plain_is_unstyled() {
        assert_eq!(painted(Tone::Plain, "Config: tagtree.toml"), "Config: tagtree.toml");
    }

    #[test]
    fn test_tones_are_colored() {
        assert!(painted(Tone::Success, "ok").starts_with("\u{1b}[32m"));
        assert!(painted(Tone::Error, "fail").starts_with("\u{1b}[31m"));

        let highlight = painted(Tone::Highlight, "serving");
        assert!(highlight.contains("\u{1b}[36m"));
        assert!(highlight.contains("serving"));
    }
}
