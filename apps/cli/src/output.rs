//! Output formatting

use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Short human readable lines
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Prints `data` as JSON, or `text` for the text format.
    pub fn emit<T: Serialize + ?Sized>(self, data: &T, text: impl FnOnce() -> String) {
        match self {
            Self::Json => println!("{}", to_json(data)),
            Self::Text => {
                let text = text();
                if !text.is_empty() {
                    println!("{text}");
                }
            }
        }
    }

    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

pub fn to_json<T: Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_default()
}
