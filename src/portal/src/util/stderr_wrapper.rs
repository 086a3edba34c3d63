use std::io::Write;
use term::{color::Color, Error, StderrTerminal, Terminal};

/// Produces the standard term::StderrTerminal that can write colors.
/// Without a terminal (CI, pipes) the output falls back to plain stderr.
pub fn stderr_wrapper() -> Box<StderrTerminal> {
    term::stderr().unwrap_or_else(|| {
        Box::new(PlainStderr {
            stderr: std::io::stderr(),
        })
    })
}

/// Colored writes that never fail the caller: errors printing an error are dropped.
pub trait ColoredWrite {
    /// `label` in `color`, followed by `text` in the default color.
    fn labelled(&mut self, color: Color, label: &str, text: &str);
    fn heading(&mut self, color: Color, text: &str);
    fn line(&mut self, text: &str);
}

impl ColoredWrite for Box<StderrTerminal> {
    fn labelled(&mut self, color: Color, label: &str, text: &str) {
        let _ = self.fg(color);
        let _ = write!(self, "{label}");
        let _ = self.reset();
        let _ = writeln!(self, "{text}");
    }

    fn heading(&mut self, color: Color, text: &str) {
        let _ = self.fg(color);
        let _ = writeln!(self, "{text}");
        let _ = self.reset();
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self, "{text}");
    }
}

struct PlainStderr<W> {
    stderr: W,
}

impl<W: Write> Terminal for PlainStderr<W> {
    type Output = W;
    fn fg(&mut self, _color: Color) -> term::Result<()> {
        Ok(())
    }

    fn bg(&mut self, _color: Color) -> term::Result<()> {
        Ok(())
    }

    fn attr(&mut self, _attr: term::Attr) -> term::Result<()> {
        Ok(())
    }

    fn supports_attr(&self, _attr: term::Attr) -> bool {
        true
    }

    fn reset(&mut self) -> term::Result<()> {
        Ok(())
    }

    fn supports_reset(&self) -> bool {
        true
    }

    fn supports_color(&self) -> bool {
        false
    }

    fn cursor_up(&mut self) -> term::Result<()> {
        Err(Error::NotSupported)
    }

    fn delete_line(&mut self) -> term::Result<()> {
        Err(Error::NotSupported)
    }

    fn carriage_return(&mut self) -> term::Result<()> {
        Err(Error::NotSupported)
    }

    fn get_ref(&self) -> &Self::Output {
        &self.stderr
    }

    fn get_mut(&mut self) -> &mut Self::Output {
        &mut self.stderr
    }

    fn into_inner(self) -> Self::Output
    where
        Self: Sized,
    {
        self.stderr
    }
}

impl<W: Write> Write for PlainStderr<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.stderr.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.stderr.flush()
    }
}
