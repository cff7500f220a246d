use crate::interval_sets::IntervalSet;
use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

pub trait Importer {
    /// Read an agenda from the given file.
    fn import_file(&mut self, path: &Path) -> Result<IntervalSet>;
}

pub trait Exporter {
    fn export_file(&mut self, agenda: &IntervalSet, export_to: &Path) -> Result<()>;
}

/// Agenda files in the canonical text form, one appointment per line.
/// See [`crate::formatters`].
#[derive(Default)]
pub struct TextAgenda {}

impl TextAgenda {
    /// Read an agenda from any reader (a file, or a `Cursor` in tests).
    /// Comments, blank lines and invalid lines are skipped.
    pub fn read(&self, mut input: impl Read) -> Result<IntervalSet> {
        let mut buf = String::new();
        input.read_to_string(&mut buf)?;
        Ok(buf.parse()?)
    }

    pub fn write(&self, agenda: &IntervalSet, output: impl Write) -> Result<()> {
        let mut buf = BufWriter::new(output);
        for appt in agenda {
            writeln!(buf, "{appt}")?;
        }
        buf.flush()?;
        Ok(())
    }
}

impl Importer for TextAgenda {
    fn import_file(&mut self, path: &Path) -> Result<IntervalSet> {
        let file = File::open(path)
            .with_context(|| format!("Cannot open agenda {}", path.display()))?;
        let agenda = self
            .read(file)
            .with_context(|| format!("Cannot read agenda {}", path.display()))?;
        info!(
            "Imported {} appointments from {}",
            agenda.len(),
            path.display()
        );
        Ok(agenda)
    }
}

impl Exporter for TextAgenda {
    fn export_file(&mut self, agenda: &IntervalSet, export_to: &Path) -> Result<()> {
        let file = File::create(export_to).with_context(|| {
            format!("Cannot create agenda {}", export_to.display())
        })?;
        self.write(agenda, file)?;
        info!(
            "Exported {} appointments to {}",
            agenda.len(),
            export_to.display()
        );
        Ok(())
    }
}
