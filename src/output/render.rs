//! Tree formatter
//!
//! `TreeFormatter` turns a gathered entry sequence into the final listing:
//! a header line with the root as given, one line per entry, and the
//! directory/file summary. Colors go through termcolor's `WriteColor`, so the
//! same code writes to a terminal, a buffer, or plain text.
//!
//! Alignment only ever uses the unstyled widths recorded at gather time.

use std::io::{self, Write};

use termcolor::{BufferedStandardStream, Color, ColorSpec, WriteColor};

use crate::tree::{Gathered, TraversalCounter, VisualEntry};

use super::color::color_choice;
use super::config::OutputConfig;
use super::width::{max_width, padding, path_column};

fn dir_spec() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Blue)).set_bold(true);
    spec
}

fn path_spec() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Black)).set_intense(true);
    spec
}

/// Formatter for tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the whole listing as plain text, without colors.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn format(&self, root_label: &str, gathered: &Gathered) -> String {
        let mut out = termcolor::NoColor::new(Vec::new());
        self.write_tree(&mut out, root_label, gathered)
            .expect("writing to a Vec cannot fail");
        String::from_utf8_lossy(&out.into_inner()).into_owned()
    }

    /// Print the whole listing to stdout, colored if configured.
    pub fn print(&self, root_label: &str, gathered: &Gathered) -> io::Result<()> {
        let mut stdout = BufferedStandardStream::stdout(color_choice(self.config.use_color));
        self.write_tree(&mut stdout, root_label, gathered)?;
        stdout.flush()
    }

    /// Write header, entries and summary.
    pub fn write_tree<W: WriteColor>(
        &self,
        out: &mut W,
        root_label: &str,
        gathered: &Gathered,
    ) -> io::Result<()> {
        self.write_header(out, root_label)?;
        self.write_entries(out, &gathered.entries, max_width(&gathered.entries))?;
        self.write_summary(out, &gathered.counter)
    }

    /// The root path, exactly as it was given.
    pub fn write_header<W: WriteColor>(&self, out: &mut W, root_label: &str) -> io::Result<()> {
        out.set_color(&dir_spec())?;
        write!(out, "{}", root_label)?;
        out.reset()?;
        writeln!(out)
    }

    /// Write every entry in sequence order, aligning full paths at `max_width + 4`.
    pub fn write_entries<W: WriteColor>(
        &self,
        out: &mut W,
        entries: &[VisualEntry],
        max_width: usize,
    ) -> io::Result<()> {
        let column = path_column(max_width);
        for entry in entries {
            self.write_entry(out, entry, column)?;
        }
        Ok(())
    }

    fn write_entry<W: WriteColor>(
        &self,
        out: &mut W,
        entry: &VisualEntry,
        column: usize,
    ) -> io::Result<()> {
        write!(out, "{}{}", entry.prefix, entry.connector())?;

        if entry.is_dir {
            out.set_color(&dir_spec())?;
            write!(out, "{}", entry.name)?;
            out.reset()?;
            return writeln!(out);
        }

        write!(out, "{}", entry.name)?;
        if self.config.show_full_path {
            write!(out, "{:width$}", "", width = padding(entry.display_width, column))?;
            out.set_color(&path_spec())?;
            write!(out, "{}", entry.full_path.display())?;
            out.reset()?;
        }
        writeln!(out)
    }

    /// Blank line, then `<dirs> directories, <files> files`.
    pub fn write_summary<W: WriteColor>(
        &self,
        out: &mut W,
        counter: &TraversalCounter,
    ) -> io::Result<()> {
        writeln!(out, "{}", counter.summary())
    }
}
