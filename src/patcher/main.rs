//! Patch command implementation

use anyhow::Result;
use std::path::PathBuf;

use crate::descriptor::{DescriptorFile, Variable};
use crate::patcher::{ManifestPatcher, PatchOutcome, ReapplyPolicy};
use crate::platform::Platform;

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub descriptor_path: PathBuf,
    pub platform: Platform,
    pub policy: ReapplyPolicy,
    pub dry_run: bool,
}

pub fn run(config: &RunConfig) -> Result<PatchOutcome> {
    let file = DescriptorFile::new(&config.descriptor_path);
    let patcher = ManifestPatcher::new(config.platform).with_reapply_policy(config.policy);
    tracing::info!(
        "Patching {} for platform {}",
        file.path().display(),
        patcher.platform()
    );

    let descriptor = file.read()?;
    tracing::debug!("Read {} lines", descriptor.len());

    let outcome = patcher.patch(&descriptor);

    for variable in Variable::ALL {
        if !patcher.injects(variable) {
            continue;
        }
        let count = outcome.rewritten(variable);
        if count > 0 {
            tracing::info!(
                "Added {} to {} {} line(s)",
                variable.probe_artifact(),
                count,
                variable
            );
        }
        let present = outcome.present(variable);
        if present > 0 {
            tracing::info!(
                "Skipped {} {} line(s) already listing {}",
                present,
                variable,
                variable.probe_artifact()
            );
        }
        if count == 0 && present == 0 {
            tracing::warn!(
                "No {} line in {}, {} not injected",
                variable,
                file.path().display(),
                variable.probe_artifact()
            );
        }
    }

    if config.dry_run {
        print!("{}", outcome.descriptor.to_text());
        tracing::info!("Dry run, {} left untouched", file.path().display());
        return Ok(outcome);
    }

    file.write(&outcome.descriptor)?;
    tracing::info!("✓ Wrote {}", file.path().display());

    Ok(outcome)
}
