//! Colored terminal output for bundle commands
//!
//! Informational lines go to stdout. Warnings and errors go to stderr so a
//! rendered plist on stdout stays a clean document.

use std::io::Write;
use termcolor::{Buffer, BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Output manager for consistent colored terminal output
#[derive(Debug)]
pub struct OutputManager {
    stdout: BufferWriter,
    stderr: BufferWriter,
    verbose: bool,
    quiet: bool,
}

impl Clone for OutputManager {
    fn clone(&self) -> Self {
        Self::new(self.verbose, self.quiet)
    }
}

impl OutputManager {
    /// Create a new output manager
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            stdout: BufferWriter::stdout(ColorChoice::Auto),
            stderr: BufferWriter::stderr(ColorChoice::Auto),
            verbose,
            quiet,
        }
    }

    /// Print an info message (normal output)
    pub fn info(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.stdout
            .print(&tagged(&self.stdout, "ℹ", Color::Cyan, false, message))
    }

    /// Print a success message
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.stdout
            .print(&tagged(&self.stdout, "✓", Color::Green, true, message))
    }

    /// Print a warning message to stderr
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.stderr
            .print(&tagged(&self.stderr, "⚠", Color::Yellow, true, message))
    }

    /// Print an error message to stderr (always shown)
    pub fn error(&self, message: &str) {
        let buffer = tagged(&self.stderr, "✗", Color::Red, true, message);
        if self.stderr.print(&buffer).is_err() {
            // Stderr failed - fallback to stdout as last resort
            println!("[STDERR ERROR] ✗ {}", message);
        }
    }

    /// Print a verbose/debug message (only in verbose mode)
    pub fn verbose(&self, message: &str) -> std::io::Result<()> {
        if !self.verbose || self.quiet {
            return Ok(());
        }
        self.stderr
            .print(&tagged(&self.stderr, "→", Color::Blue, false, message))
    }

    /// Print indented text (for sub-items)
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.println(&format!("    {message}"))
    }

    /// Print a plain message (respects quiet mode)
    pub fn println(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        let mut buffer = self.stdout.buffer();
        writeln!(&mut buffer, "{}", message)?;
        self.stdout.print(&buffer)
    }

    /// Write raw document bytes to stdout, regardless of quiet mode
    pub fn document(&self, bytes: &[u8]) -> std::io::Result<()> {
        let mut buffer = self.stdout.buffer();
        buffer.write_all(bytes)?;
        if !bytes.ends_with(b"\n") {
            writeln!(&mut buffer)?;
        }
        self.stdout.print(&buffer)
    }
}

/// Builds `<symbol> <message>` with the symbol (and for bold tags, the
/// message) in `color`.
fn tagged(writer: &BufferWriter, symbol: &str, color: Color, bold: bool, message: &str) -> Buffer {
    let mut buffer = writer.buffer();
    let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold));
    let _ = write!(&mut buffer, "{symbol}");
    let _ = buffer.reset();
    if bold {
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)));
    }
    let _ = writeln!(&mut buffer, " {message}");
    let _ = buffer.reset();
    buffer
}
