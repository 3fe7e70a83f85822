//! Status report assembly and rendering
//!
//! The report has five fixed sections, each ordered case-insensitively and
//! followed by a blank line:
//!
//! ```text
//! === Branches ===
//! === Staged Files ===
//! === Removed Files ===
//! === Modifications Not Staged For Commit ===
//! === Untracked Files ===
//! ```

use crate::artifacts::status::file_change::FileChange;
use std::io::Write;

/// The assembled status report
#[derive(Debug, Default)]
pub struct StatusReport {
    /// All branch names; the flag marks the current branch
    pub branches: Vec<(String, bool)>,
    /// Paths staged for addition
    pub staged: Vec<String>,
    /// Paths staged for removal
    pub removed: Vec<String>,
    /// Tracked or staged paths with unstaged working-tree changes
    pub modifications: Vec<(String, FileChange)>,
    /// Working files neither tracked by the head commit nor staged
    pub untracked: Vec<String>,
}

/// Case-insensitive lexicographic order, falling back to case-sensitive
/// order so the sort stays total
fn display_order(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

impl StatusReport {
    /// Sort every section into display order
    pub fn sort(&mut self) {
        self.branches.sort_by(|a, b| display_order(&a.0, &b.0));
        self.staged.sort_by(|a, b| display_order(a, b));
        self.removed.sort_by(|a, b| display_order(a, b));
        self.modifications.sort_by(|a, b| display_order(&a.0, &b.0));
        self.untracked.sort_by(|a, b| display_order(a, b));
    }

    /// Write the report in its fixed shape
    pub fn render(&self, writer: &mut dyn Write) -> anyhow::Result<()> {
        writeln!(writer, "=== Branches ===")?;
        for (branch, is_current) in &self.branches {
            let marker = if *is_current { "*" } else { "" };
            writeln!(writer, "{}{}", marker, branch)?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Staged Files ===")?;
        for path in &self.staged {
            writeln!(writer, "{}", path)?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Removed Files ===")?;
        for path in &self.removed {
            writeln!(writer, "{}", path)?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Modifications Not Staged For Commit ===")?;
        for (path, change) in &self.modifications {
            writeln!(writer, "{} ({})", path, change)?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Untracked Files ===")?;
        for path in &self.untracked {
            writeln!(writer, "{}", path)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
