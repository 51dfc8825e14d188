//! The two diagnostic stages: import probe and model smoke test.

pub mod capability;
pub mod imports;
pub mod smoke;

pub use capability::{Capability, CapabilityStatus};
pub use imports::ImportProbe;
pub use smoke::SmokeOutcome;
