use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct HookModel {
    pub display_name: String,
}

#[derive(Deserialize, Debug)]
pub struct HookWorkspace {
    pub current_dir: String,
    pub project_dir: Option<String>,
}

/// Session-cumulative cost summary. The whole object may be missing from the
/// hook input, in which case every counter reads as zero.
#[derive(Deserialize, Debug, Default)]
pub struct HookCost {
    #[serde(default)]
    pub total_cost_usd: f64,
    #[serde(default)]
    pub total_duration_ms: f64,
    #[serde(default)]
    pub total_api_duration_ms: f64,
    #[serde(default)]
    pub total_lines_added: i64,
    #[serde(default)]
    pub total_lines_removed: i64,
}

/// Token counts for the most recent request/response exchange. Absence of
/// the whole object means "no current call to report", which is not the same
/// as a present-but-zero usage block.
#[derive(Deserialize, Debug, Default)]
pub struct CurrentUsage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub cache_creation_input_tokens: u64,
    #[serde(default)]
    pub cache_read_input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
}

#[derive(Deserialize, Debug)]
pub struct HookContextWindow {
    #[serde(default)]
    pub total_input_tokens: u64,
    #[serde(default)]
    pub total_output_tokens: u64,
    #[serde(default = "default_context_window_size")]
    pub context_window_size: u64,
    pub current_usage: Option<CurrentUsage>,
}

fn default_context_window_size() -> u64 {
    200_000
}

impl Default for HookContextWindow {
    fn default() -> Self {
        Self {
            total_input_tokens: 0,
            total_output_tokens: 0,
            context_window_size: default_context_window_size(),
            current_usage: None,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct HookJson {
    pub model: HookModel,
    pub workspace: HookWorkspace,
    #[serde(default)]
    pub cost: HookCost,
    #[serde(default)]
    pub context_window: HookContextWindow,
}
