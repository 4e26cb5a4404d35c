//! Copying a list of items and reporting each file.

use crate::error::Result;
use crate::materialize::{FileOutcome, Materializer};
use crate::registry::RegistryItem;
use crate::ui::UserInterface;

/// Totals over an install run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallSummary {
    pub items: usize,
    pub copied: usize,
    pub skipped: usize,
}

/// Copy `items` in order, printing one line per file.
///
/// Verbose output also shows each absolute destination.
pub fn install_items(
    ui: &mut dyn UserInterface,
    materializer: &Materializer<'_>,
    items: &[&RegistryItem],
    overwrite: bool,
) -> Result<InstallSummary> {
    let mut summary = InstallSummary::default();

    for item in items {
        ui.message(&format!("{}:", item.name));
        let report = materializer.copy_files(item, overwrite)?;
        let file_details = ui.output_mode().shows_file_details();

        for outcome in &report.outcomes {
            match outcome {
                FileOutcome::Copied {
                    display,
                    destination,
                    replaced,
                } => {
                    if *replaced {
                        ui.success(&format!("  {} (replaced)", display));
                    } else {
                        ui.success(&format!("  {}", display));
                    }
                    if file_details {
                        ui.message(&format!("    -> {}", destination.display()));
                    }
                }
                FileOutcome::Skipped(advisory) => ui.warning(&format!("  {}", advisory)),
            }
        }

        summary.items += 1;
        summary.copied += report.copied_count();
        summary.skipped += report.advisories().count();
    }

    Ok(summary)
}
