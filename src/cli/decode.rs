//! `decode` command: decode event files concurrently and summarize them

use crate::decoder::Decoder;
use crate::eventfile::EventFile;
use crate::report::{DecodeReport, ReportConfig, report_games};
use crate::source::{EventLogSource, FileSystemEventLogSource, decode_log};
use crate::storage;
use anyhow::Context;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;

/// One decoded event file with its report
#[derive(Debug)]
pub struct DecodedLog {
    pub name: String,
    pub file: EventFile,
    pub report: DecodeReport,
}

/// Decode every named log, one task per log, returning results in input order
pub async fn decode_logs(
    source: Arc<dyn EventLogSource>,
    names: &[String],
    decoder: &Decoder,
    config: &ReportConfig,
) -> anyhow::Result<Vec<DecodedLog>> {
    let mut tasks = JoinSet::new();
    for (index, name) in names.iter().enumerate() {
        let source = Arc::clone(&source);
        let decoder = decoder.clone();
        let name = name.clone();
        tasks.spawn(async move {
            let result = decode_log(source.as_ref(), &name, &decoder).await;
            (index, name, result)
        });
    }

    let mut slots: Vec<Option<DecodedLog>> = (0..names.len()).map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        let (index, name, result) = joined.context("Decode task failed")?;
        let file = result.with_context(|| format!("Failed to decode {name}"))?;
        let report = report_games(&file.games, config);
        slots[index] = Some(DecodedLog { name, file, report });
    }

    Ok(slots.into_iter().flatten().collect())
}

/// Run the decode command on a tokio multi-thread runtime
pub fn run_decode(
    paths: &[PathBuf],
    decoder: Decoder,
    out: Option<&Path>,
) -> anyhow::Result<DecodeReport> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let names: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    let source: Arc<dyn EventLogSource> = Arc::new(FileSystemEventLogSource::new("."));
    let config = ReportConfig::default();

    let decoded = runtime.block_on(decode_logs(source, &names, &decoder, &config))?;

    let mut total = DecodeReport::new();
    for log in decoded {
        println!(
            "{}: {} games, {} plays, {} fully decoded",
            log.name,
            log.file.games.len(),
            log.report.plays,
            log.report.fully_decoded
        );
        for error in &log.file.errors {
            println!("  {error}");
        }

        if let Some(dir) = out {
            for game in &log.file.games {
                storage::write_game(dir, game)?;
            }
        }

        total.merge(log.report, &config);
    }

    println!();
    print!("{total}");
    Ok(total)
}
