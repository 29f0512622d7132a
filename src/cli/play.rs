//! `play` command: decode one play string and print it

use crate::decoder::Decoder;
use crate::render;

/// Decode `notation`, returning the pretty JSON followed by a one-line summary
pub fn run_play(notation: &str, decoder: &Decoder) -> anyhow::Result<String> {
    let event = decoder.decode(notation);
    let json = serde_json::to_string_pretty(&event)?;
    let summary = render::summarize(&event, decoder.tables());

    let mut output = format!("{json}\n{summary}");
    for issue in event.issues() {
        output.push_str(&format!("\nwarning: {issue}"));
    }
    Ok(output)
}
