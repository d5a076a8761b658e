//! Best-effort branch lookup.
//!
//! Reads `<project_dir>/.git/HEAD` directly rather than opening the
//! repository. A symbolic ref yields the branch name; anything else
//! (detached HEAD, missing file, unreadable content) yields `None`.
//! No failure here may abort the status line.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static HEAD_REF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ref: refs/heads/(\S+)").unwrap());

pub fn read_branch(project_dir: &Path) -> Option<String> {
    let head = std::fs::read_to_string(project_dir.join(".git").join("HEAD")).ok()?;
    HEAD_REF_RE
        .captures(head.trim())
        .map(|c| c[1].to_string())
}
