//! # Session Statusline
//!
//! A small statusline utility for AI coding-assistant sessions. It reads one
//! JSON document from standard input describing the session (model, workspace,
//! cost and token counters) and prints a single color-coded status line.
//!
//! ## Overview
//!
//! The line shows, in order:
//! - workspace directory (home-abbreviated) and current branch
//! - model display name
//! - session cost
//! - cumulative input/output token counts
//! - elapsed and API durations
//! - lines added/removed
//! - context-window consumption with a four-tier color
//! - current-call token counts, when the input reports them

/// Context usage, color tiers, and status-line assembly
pub mod display;

/// Best-effort branch lookup from `.git/HEAD`
pub mod git;

/// Data model for the hook input
pub mod models;

/// Stdin reader, home-dir resolution, and formatting helpers
pub mod utils;
