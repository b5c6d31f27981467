//! Command line workflow, independent of argument parsing

pub mod orchestration;

pub use orchestration::{run_gitversion_workflow, WorkflowArgs, WorkflowResult};
