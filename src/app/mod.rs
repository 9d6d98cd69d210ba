//! Application entry point wiring the CLI, logging and the import pipeline.

use anyhow::{Context, Result};
use env_logger::Env;

use crate::cli::Cli;
use crate::logic::import_archive;
use crate::models::VendorLayout;

/// Run one import into the installed vendor directory and print what changed.
pub fn run(cli: Cli) -> Result<()> {
    // A test harness may have installed a logger already.
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn")).try_init();

    let layout = VendorLayout::installed();
    log::info!("Vendor directory: {}", layout.root().display());

    let report = import_archive(&cli.archive, &layout).with_context(|| {
        format!(
            "Failed to import icon font archive {:?} into {:?}",
            cli.archive,
            layout.root()
        )
    })?;

    println!("{report}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::run;
    use crate::cli::Cli;

    // A missing archive fails before anything in the vendor tree is touched.
    #[test]
    fn run_reports_archive_and_cause() {
        let tmp = TempDir::new().unwrap();
        let archive = tmp.path().join("missing.zip");

        let err = run(Cli {
            archive: archive.clone(),
        })
        .unwrap_err();

        let message = format!("{err:#}");
        assert!(message.contains("Failed to import icon font archive"));
        assert!(message.contains("missing.zip"));
        assert!(message.contains("Failed to open icon font archive"));
    }
}
