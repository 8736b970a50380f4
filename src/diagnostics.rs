//! Warning and error messages for the user
//!
//! Messages go to an injected writer (stderr in the binary, a buffer in
//! tests) and are coloured through a [`Palette`] chosen once at startup.

use std::io::{self, IsTerminal, Write};

/// Colour codes wrapped around message labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub warning: &'static str,
    pub error: &'static str,
    pub reset: &'static str,
}

impl Palette {
    /// ANSI yellow warnings and red errors
    pub const fn ansi() -> Self {
        Palette {
            warning: "\x1b[33m",
            error: "\x1b[31m",
            reset: "\x1b[0m",
        }
    }

    /// No colour codes at all
    pub const fn plain() -> Self {
        Palette {
            warning: "",
            error: "",
            reset: "",
        }
    }

    /// Pick a palette for stderr
    ///
    /// Colour is used only when stderr is a terminal, `NO_COLOR` is unset
    /// and the caller has not disabled it.
    pub fn for_stderr(no_color: bool) -> Self {
        if no_color || std::env::var_os("NO_COLOR").is_some() || !io::stderr().is_terminal() {
            Palette::plain()
        } else {
            Palette::ansi()
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::plain()
    }
}

/// Sink for user-facing diagnostics
pub struct Diagnostics<'a> {
    out: Box<dyn Write + 'a>,
    palette: Palette,
}

impl<'a> Diagnostics<'a> {
    pub fn new(out: impl Write + 'a, palette: Palette) -> Self {
        Diagnostics {
            out: Box::new(out),
            palette,
        }
    }

    pub fn stderr(palette: Palette) -> Diagnostics<'static> {
        Diagnostics::new(io::stderr(), palette)
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn warning(&mut self, message: &str) {
        let (color, reset) = (self.palette.warning, self.palette.reset);
        self.emit(color, "WARNING", reset, message);
    }

    pub fn error(&mut self, message: &str) {
        let (color, reset) = (self.palette.error, self.palette.reset);
        self.emit(color, "ERROR", reset, message);
    }

    // A diagnostic that cannot be written is dropped; export carries on.
    fn emit(&mut self, color: &str, label: &str, reset: &str, message: &str) {
        let _ = writeln!(self.out, "{}{}{}: {}", color, label, reset, message);
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_messages() {
        let mut buf = Vec::new();
        {
            let mut diag = Diagnostics::new(&mut buf, Palette::plain());
            diag.warning("careful");
            diag.error("broken");
        }
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "WARNING: careful\nERROR: broken\n"
        );
    }

    #[test]
    fn test_ansi_messages() {
        let mut buf = Vec::new();
        {
            let mut diag = Diagnostics::new(&mut buf, Palette::ansi());
            diag.error("broken");
        }
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "\x1b[31mERROR\x1b[0m: broken\n"
        );
    }

    #[test]
    fn test_no_color_flag_forces_plain() {
        assert_eq!(Palette::for_stderr(true), Palette::plain());
    }
}
