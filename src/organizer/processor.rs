use std::fmt;
use std::path::Path;
use log::{debug, error, info};
use crate::error::Result;
use crate::font::{read_font, resolve};
use crate::installer::FontInstaller;
use crate::models::{Config, FontRecord, InstallationOutcome, Procedure};
use crate::platform;
use crate::utils::{copy_into, derive_filename, ensure_directory_exists, extensionless_files};

/// What to do with every resolved font
pub enum Target<'a> {
    /// Copy renamed fonts into `output_dir`
    Export { output_dir: &'a Path },
    /// Hand staged fonts to an installer
    Install(&'a dyn FontInstaller),
}

/// Counters for one pass over the cache
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub scanned: usize,
    pub exported: usize,
    pub installed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} fonts found, {} exported, {} installed, {} already installed, {} failed",
            self.scanned, self.exported, self.installed, self.skipped, self.failed
        )
    }
}

/// Resolve the cache and installer for `config`, then process every font
///
/// Only failing to find the cache or an installer aborts the run.
pub fn run(config: &Config) -> Result<RunSummary> {
    let cache_dir = match &config.cache_dir {
        Some(dir) => dir.clone(),
        None => platform::cache_directory()?,
    };
    info!("Reading cached fonts from {}", cache_dir.display());

    match config.procedure {
        Procedure::Copy => {
            ensure_directory_exists(&config.output_dir)?;
            process_cache(&cache_dir, Target::Export { output_dir: &config.output_dir })
        }
        Procedure::Install => {
            let installer = platform::host_installer()?;
            info!("Installing into {}", installer.describe());
            process_cache(&cache_dir, Target::Install(installer.as_ref()))
        }
    }
}

/// Process every extensionless file in `cache_dir`
pub fn process_cache(cache_dir: &Path, target: Target<'_>) -> Result<RunSummary> {
    let candidates = extensionless_files(cache_dir)?;
    let mut summary = RunSummary {
        scanned: candidates.len(),
        ..RunSummary::default()
    };
    debug!("Found {} candidate fonts", candidates.len());

    for path in candidates {
        let record = match load_record(&path) {
            Ok(record) => record,
            Err(e) => {
                error!("Skipping {}: {}", path.display(), e);
                summary.failed += 1;
                continue;
            }
        };

        match &target {
            Target::Export { output_dir } => match export_font(&record, output_dir) {
                Ok(()) => summary.exported += 1,
                Err(e) => {
                    error!("Could not export {}: {}", record.derived_filename(), e);
                    summary.failed += 1;
                }
            },
            Target::Install(installer) => match install_font(&record, *installer) {
                Ok(InstallationOutcome::Installed) => {
                    info!("Installed {}", record.derived_filename());
                    summary.installed += 1;
                }
                Ok(InstallationOutcome::AlreadyInstalled) => summary.skipped += 1,
                Ok(InstallationOutcome::Failed(e)) => {
                    error!("Could not install {}: {}", record.derived_filename(), e);
                    summary.failed += 1;
                }
                Err(e) => {
                    error!("Could not stage {}: {}", record.derived_filename(), e);
                    summary.failed += 1;
                }
            },
        }
    }

    println!("Finished!");
    println!("  - {}", summary);
    Ok(summary)
}

/// Parse a cached binary and work out its filename
pub fn load_record(path: &Path) -> Result<FontRecord> {
    let font = read_font(path)?;
    let (family, subfamily) = resolve(path, &font.names)?;
    let filename = derive_filename(&family, &subfamily, font.format.extension());
    debug!("{} resolves to {}", path.display(), filename);
    Ok(FontRecord::new(path.to_path_buf(), family, subfamily, filename))
}

fn export_font(record: &FontRecord, output_dir: &Path) -> Result<()> {
    println!(
        "Copying font | Family: {:20} Variant: {} | To: {}",
        record.family(),
        record.subfamily(),
        record.derived_filename()
    );
    copy_into(record.source_path(), output_dir, record.derived_filename())?;
    Ok(())
}

/// Stage `record` in a private temp dir and install it from there
///
/// The staging directory is removed when this returns, whatever the outcome.
fn install_font(record: &FontRecord, installer: &dyn FontInstaller) -> Result<InstallationOutcome> {
    if installer.is_installed(record.derived_filename()) {
        println!(
            "Skipping installed font | Family: {:20} Variant: {}",
            record.family(),
            record.subfamily()
        );
        return Ok(InstallationOutcome::AlreadyInstalled);
    }

    let staging = tempfile::tempdir()?;
    let staged = copy_into(record.source_path(), staging.path(), record.derived_filename())?;

    println!(
        "Installing font | Family: {:20} Variant: {}",
        record.family(),
        record.subfamily()
    );
    let outcome = installer.install(&staged, record.derived_filename());
    if outcome == InstallationOutcome::AlreadyInstalled {
        println!(
            "Skipping installed font | Family: {:20} Variant: {}",
            record.family(),
            record.subfamily()
        );
    }
    Ok(outcome)
}
