use crate::driver::EquivalenceClassSet;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Outcome of comparing a generated flop file against a reference file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoldenComparison {
    Match,
    /// First differing line, 1-based. A missing line counts as different.
    Mismatch { line: usize },
}

/// Write one canonical key per line, in key order.
pub fn write_flops<W: Write>(out: &mut W, classes: &EquivalenceClassSet) -> io::Result<()> {
    for key in classes {
        writeln!(out, "{key}")?;
    }
    Ok(())
}

pub fn write_flops_file(path: &Path, classes: &EquivalenceClassSet) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_flops(&mut out, classes)?;
    out.flush()
}

/// Byte-for-byte comparison of two flop files.
pub fn compare_golden(generated: &Path, golden: &Path) -> io::Result<GoldenComparison> {
    let ours = fs::read(generated)?;
    let theirs = fs::read(golden)?;
    if ours == theirs {
        return Ok(GoldenComparison::Match);
    }
    let mut a = ours.split(|&b| b == b'\n');
    let mut b = theirs.split(|&b| b == b'\n');
    let mut line = 1;
    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) if x == y => line += 1,
            _ => return Ok(GoldenComparison::Mismatch { line }),
        }
    }
}
