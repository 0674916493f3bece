use std::io::{self, Write};

use crate::line_mode::LineMode;

/// Capability through which the engine presents text to the user.
///
/// Listings and statistics reports are the only producers; they call
/// [`emit`](Self::emit) once per line.
pub trait UserInteraction {
    /// Presents one line of text.
    fn emit(&mut self, text: &str) -> io::Result<()>;
}

impl<T: UserInteraction + ?Sized> UserInteraction for &mut T {
    fn emit(&mut self, text: &str) -> io::Result<()> {
        (**self).emit(text)
    }
}

impl UserInteraction for Vec<String> {
    fn emit(&mut self, text: &str) -> io::Result<()> {
        self.push(text.to_owned());
        Ok(())
    }
}

/// Streaming sink that writes emitted lines into an [`io::Write`] target.
///
/// # Examples
///
/// ```
/// use logging::{LineMode, LineSink, UserInteraction};
///
/// let mut sink = LineSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
/// sink.emit("ready")?;
/// assert_eq!(sink.into_inner(), b"ready".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineSink<W> {
    writer: W,
    line_mode: LineMode,
    lines: u64,
}

impl<W> LineSink<W> {
    /// Creates a sink that appends a newline after each line.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub const fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            writer,
            line_mode,
            lines: 0,
        }
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Updates the [`LineMode`] used for subsequent lines.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Number of lines emitted so far.
    #[must_use]
    pub const fn lines_emitted(&self) -> u64 {
        self.lines
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink<W> {
    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W: Write> UserInteraction for LineSink<W> {
    fn emit(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        if self.line_mode.append_newline() {
            self.writer.write_all(b"\n")?;
        }
        self.lines += 1;
        Ok(())
    }
}
