//! Probe artifact injection

pub mod main;

pub use main::{run, RunConfig};

use crate::descriptor::{BuildDescriptor, Variable, VariableDefinition};
use crate::platform::Platform;

/// What to do with a matching line that already lists the probe artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReapplyPolicy {
    /// Insert regardless. Running twice duplicates the artifact, so the
    /// descriptor must be patched exactly once after generation.
    #[default]
    Always,
    /// Leave the line alone when the artifact is already in its token list.
    SkipPresent,
}

#[derive(Debug, Clone)]
pub struct PatchOutcome {
    pub descriptor: BuildDescriptor,
    pub objs_rewritten: usize,
    pub hdrs_rewritten: usize,
    pub objs_present: usize,
    pub hdrs_present: usize,
}

impl PatchOutcome {
    pub fn changed(&self) -> bool {
        self.objs_rewritten + self.hdrs_rewritten > 0
    }

    pub fn rewritten(&self, variable: Variable) -> usize {
        match variable {
            Variable::Objs => self.objs_rewritten,
            Variable::Hdrs => self.hdrs_rewritten,
        }
    }

    /// Matching lines left alone because they already list the artifact.
    pub fn present(&self, variable: Variable) -> usize {
        match variable {
            Variable::Objs => self.objs_present,
            Variable::Hdrs => self.hdrs_present,
        }
    }

    pub fn already_present(&self) -> usize {
        self.objs_present + self.hdrs_present
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ManifestPatcher {
    platform: Platform,
    policy: ReapplyPolicy,
}

impl ManifestPatcher {
    pub fn new(platform: Platform) -> Self {
        ManifestPatcher {
            platform,
            policy: ReapplyPolicy::default(),
        }
    }

    pub fn with_reapply_policy(mut self, policy: ReapplyPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Whether this patcher inserts into `variable` at all.
    pub fn injects(&self, variable: Variable) -> bool {
        match variable {
            Variable::Objs => self.platform.injects_probe_object(),
            Variable::Hdrs => true,
        }
    }

    pub fn patch(&self, descriptor: &BuildDescriptor) -> PatchOutcome {
        let mut objs_rewritten = 0;
        let mut hdrs_rewritten = 0;
        let mut objs_present = 0;
        let mut hdrs_present = 0;

        let lines: BuildDescriptor = descriptor
            .lines()
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let def = match VariableDefinition::parse(line) {
                    Some(def) if self.injects(def.variable()) => def,
                    _ => return line.clone(),
                };

                let variable = def.variable();
                let artifact = variable.probe_artifact();

                if self.policy == ReapplyPolicy::SkipPresent && def.contains_token(artifact) {
                    tracing::debug!("Line {}: {} already lists {}", index + 1, variable, artifact);
                    match variable {
                        Variable::Objs => objs_present += 1,
                        Variable::Hdrs => hdrs_present += 1,
                    }
                    return line.clone();
                }

                match variable {
                    Variable::Objs => objs_rewritten += 1,
                    Variable::Hdrs => hdrs_rewritten += 1,
                }
                let patched = def.with_leading_token(artifact);
                tracing::debug!("Line {}: {:?} -> {:?}", index + 1, line, patched);
                patched
            })
            .collect();

        PatchOutcome {
            descriptor: lines,
            objs_rewritten,
            hdrs_rewritten,
            objs_present,
            hdrs_present,
        }
    }
}

/// Patch descriptor text for `platform`, inserting every artifact.
pub fn patch(text: &str, platform: Platform) -> String {
    ManifestPatcher::new(platform)
        .patch(&BuildDescriptor::parse(text))
        .descriptor
        .to_text()
}
