use owo_colors::OwoColorize;

use crate::models::{HookContextWindow, HookJson};
use crate::utils::{format_cost, format_duration, format_path, format_tokens};

/// Severity tier for context-window consumption, by rounded percentage.
/// The thresholds (50/75/90, inclusive) are the contract; the colors are
/// presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextTier {
    Normal,
    Caution,
    Warning,
    Alert,
}

impl ContextTier {
    pub fn from_percent(pct: u32) -> Self {
        if pct >= 90 {
            ContextTier::Alert
        } else if pct >= 75 {
            ContextTier::Warning
        } else if pct >= 50 {
            ContextTier::Caution
        } else {
            ContextTier::Normal
        }
    }

    /// Single tier→style lookup so styling policy stays out of the renderer.
    pub fn paint(self, s: &str) -> String {
        match self {
            ContextTier::Alert => s.red().bold().to_string(),
            ContextTier::Warning => s.red().to_string(),
            ContextTier::Caution => s.yellow().to_string(),
            ContextTier::Normal => s.green().to_string(),
        }
    }
}

/// Used context tokens and rounded percentage of the window.
///
/// "Used" counts the current call's fresh input plus cache-creation and
/// cache-read tokens; when no current usage was reported, both values are
/// zero for display purposes.
pub fn context_usage(cw: &HookContextWindow) -> (u64, u32) {
    let used = cw
        .current_usage
        .as_ref()
        .map(|u| u.input_tokens + u.cache_creation_input_tokens + u.cache_read_input_tokens)
        .unwrap_or(0);
    let pct = if cw.context_window_size == 0 {
        0
    } else {
        ((used as f64 / cw.context_window_size as f64) * 100.0).round() as u32
    };
    (used, pct)
}

fn model_colored_name(display: &str) -> String {
    let lower = display.to_lowercase();
    if lower.contains("opus") {
        format!("{}", display.bright_magenta())
    } else if lower.contains("sonnet") {
        format!("{}", display.bright_yellow())
    } else if lower.contains("haiku") {
        format!("{}", display.bright_cyan())
    } else {
        format!("{}", display.bright_white())
    }
}

fn token_pair(input: u64, output: u64) -> String {
    format!(
        "{} {}",
        format!("{}↓", format_tokens(input)).cyan(),
        format!("{}↑", format_tokens(output)).green()
    )
}

/// Assemble the status line from the parsed hook input, the resolved home
/// directory, and the (possibly absent) branch name. Pure with respect to
/// its arguments; the caller prints the result.
pub fn build_status_line(hook: &HookJson, home: &str, branch: Option<&str>) -> String {
    let cw = &hook.context_window;
    let mut segments: Vec<String> = Vec::new();

    // directory, with branch when one was found
    let dir = format_path(&hook.workspace.current_dir, home);
    let mut location = dir.bright_cyan().to_string();
    if let Some(br) = branch {
        location.push_str(&format!(
            " {} {}",
            "on".bright_black().dimmed(),
            br.bright_green()
        ));
    }
    segments.push(location);

    segments.push(model_colored_name(&hook.model.display_name));

    segments.push(
        format_cost(hook.cost.total_cost_usd)
            .bold()
            .bright_white()
            .to_string(),
    );

    segments.push(token_pair(cw.total_input_tokens, cw.total_output_tokens));

    segments.push(format!(
        "{} {}",
        format_duration(hook.cost.total_duration_ms).white(),
        format!(
            "(API: {})",
            format_duration(hook.cost.total_api_duration_ms)
        )
        .bright_black()
        .dimmed()
    ));

    segments.push(format!(
        "{} {}",
        format!("+{}", hook.cost.total_lines_added).green(),
        format!("-{}", hook.cost.total_lines_removed.abs()).red()
    ));

    let (used, pct) = context_usage(cw);
    let tier = ContextTier::from_percent(pct);
    segments.push(format!(
        "{}/{} ({})",
        format_tokens(used),
        format_tokens(cw.context_window_size),
        tier.paint(&format!("{pct}%"))
    ));

    // current-call segment only when the hook reported one
    if let Some(u) = cw.current_usage.as_ref() {
        segments.push(token_pair(u.input_tokens, u.output_tokens));
    }

    let separator = format!(" {} ", "·".bright_black().dimmed());
    segments.join(&separator)
}
