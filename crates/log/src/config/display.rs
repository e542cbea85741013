//! Display configuration

use serde::{Deserialize, Serialize};

/// Which parts of an event are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show timestamps
    pub time: bool,
    /// Show source location (`file:line`)
    pub source: bool,
    /// Show target module
    pub target: bool,
    /// Show thread IDs
    pub thread_ids: bool,
    /// Show thread names
    pub thread_names: bool,
    /// Use ANSI colors
    pub colors: bool,
    /// Show span list in JSON
    pub span_list: bool,
    /// Flatten JSON events
    pub flatten: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time: true,
            source: cfg!(debug_assertions),
            target: true,
            thread_ids: false,
            thread_names: false,
            colors: std::io::IsTerminal::is_terminal(&std::io::stderr()),
            span_list: true,
            flatten: true,
        }
    }
}

impl DisplayConfig {
    /// Applies `FORMSMITH_LOG_TIME`, `FORMSMITH_LOG_SOURCE` and
    /// `FORMSMITH_LOG_COLORS` switches found through `lookup`.
    pub(super) fn apply_env(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("FORMSMITH_LOG_TIME") {
            self.time = switch(&v);
        }
        if let Some(v) = lookup("FORMSMITH_LOG_SOURCE") {
            self.source = switch(&v);
        }
        if let Some(v) = lookup("FORMSMITH_LOG_COLORS") {
            self.colors = switch(&v);
        }
    }
}

fn switch(value: &str) -> bool {
    value != "0" && !value.eq_ignore_ascii_case("false")
}
