//! Field palette listing

use formsmith_schema::palette::FIELD_PALETTE;

use crate::output::OutputFormat;

pub fn handle(format: OutputFormat) {
    format.emit(&FIELD_PALETTE, || {
        FIELD_PALETTE
            .iter()
            .map(|info| format!("{}\t{}\t{}", info.kind, info.name, info.description))
            .collect::<Vec<_>>()
            .join("\n")
    });
}
