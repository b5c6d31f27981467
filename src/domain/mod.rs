//! Domain logic - pure version rules independent of git

pub mod context;
pub mod suffix;
pub mod version;

pub use context::BuildContext;
pub use suffix::{LocalSuffix, SuffixPolicy};
pub use version::{partition_version, public_version, release_boundary};
