use anyhow::{Context, Result};
use std::path::Path;

use session_statusline::display::build_status_line;
use session_statusline::git::read_branch;
use session_statusline::models::HookJson;
use session_statusline::utils::{home_dir, read_stdin};

fn main() -> Result<()> {
    let stdin = read_stdin()?;
    let hook: HookJson = serde_json::from_slice(&stdin).context("parse statusline json")?;

    let home = home_dir()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();

    // Branch lookup is best-effort; any failure renders no branch segment.
    let branch = hook
        .workspace
        .project_dir
        .as_deref()
        .and_then(|p| read_branch(Path::new(p)));

    println!("{}", build_status_line(&hook, &home, branch.as_deref()));
    Ok(())
}
