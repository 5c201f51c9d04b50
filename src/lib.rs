pub mod descriptor;
pub mod error;
pub mod patcher;
pub mod platform;

pub use descriptor::{BuildDescriptor, DescriptorFile, Variable, VariableDefinition};
pub use error::PatchError;
pub use patcher::{patch, ManifestPatcher, PatchOutcome, ReapplyPolicy};
pub use platform::Platform;
