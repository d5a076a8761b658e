pub mod hook;

pub use hook::{CurrentUsage, HookContextWindow, HookCost, HookJson, HookModel, HookWorkspace};
