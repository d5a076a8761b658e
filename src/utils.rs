use std::io::Read;
use std::path::PathBuf;

pub fn read_stdin() -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    std::io::stdin().read_to_end(&mut buf)?;
    Ok(buf)
}

/// Resolve the invoking user's home directory, if one is known.
pub fn home_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().to_path_buf())
}

/// Abbreviate a home-relative path with `~/`. The exact home directory is
/// deliberately left unabbreviated; only strict subpaths collapse.
pub fn format_path(p: &str, home: &str) -> String {
    if home.is_empty() || p == home {
        return p.to_owned();
    }
    let prefix = format!("{home}/");
    if let Some(rest) = p.strip_prefix(&prefix) {
        return format!("~/{rest}");
    }
    p.to_owned()
}

pub fn format_tokens(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1e6)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1e3)
    } else {
        n.to_string()
    }
}

/// Millisecond duration rendered as `0s`, `45.5s`, or `2m5s`.
pub fn format_duration(ms: f64) -> String {
    if ms == 0.0 {
        return "0s".to_string();
    }
    let secs = ms / 1000.0;
    if ms < 60_000.0 {
        return format!("{secs:.1}s");
    }
    let minutes = (secs / 60.0).floor();
    let rem = (secs - minutes * 60.0).round();
    format!("{minutes:.0}m{rem:.0}s")
}

/// USD cost with sub-cent precision preserved: `$0.00` for exactly zero,
/// four decimals under a cent, three decimals otherwise.
pub fn format_cost(usd: f64) -> String {
    if usd == 0.0 {
        "$0.00".to_string()
    } else if usd < 0.01 {
        format!("${usd:.4}")
    } else {
        format!("${usd:.3}")
    }
}
