//! Pipeline orchestration: fetch and extract concurrently, then validate,
//! collect, and dedupe at a single aggregation point.

use std::sync::Arc;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::{mpsc, Semaphore};
use tracing::{info, warn};

use crate::dedupe::dedupe;
use crate::extract;
use crate::fetcher::{Fetched, Fetcher};
use crate::record::{Competition, DraftFields};
use crate::validate;

const CONCURRENCY: usize = 8;

/// Per-address outcome sent back to the aggregation loop.
enum PageOutcome {
    Draft { url: String, draft: DraftFields },
    NonHtml { url: String },
    Failed { url: String, error: String },
}

pub struct PipelineOutcome {
    pub records: Vec<Competition>,
    pub sources: usize,
    pub non_html: usize,
    pub fetch_errors: usize,
    pub rejected: usize,
}

/// Process every source address, isolating failures per address. The run
/// always completes; whatever validated is deduplicated and returned.
pub async fn run(fetcher: Fetcher, sources: Vec<String>) -> Result<PipelineOutcome> {
    let total = sources.len();
    let fetcher = Arc::new(fetcher);
    let semaphore = Arc::new(Semaphore::new(CONCURRENCY));

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")?
            .progress_chars("=> "),
    );

    // Workers send outcomes; the single receive loop below owns the
    // collection, so no two tasks ever write it concurrently.
    let (tx, mut rx) = mpsc::channel::<PageOutcome>(CONCURRENCY * 2);

    for url in sources {
        let fetcher = Arc::clone(&fetcher);
        let sem = Arc::clone(&semaphore);
        let tx = tx.clone();

        tokio::spawn(async move {
            let _permit = sem.acquire().await.unwrap();
            let outcome = match fetcher.fetch(&url).await {
                Ok(Fetched::Page(html)) => {
                    let draft = extract::extract(&html, &url);
                    PageOutcome::Draft { url, draft }
                }
                Ok(Fetched::NonHtml) => PageOutcome::NonHtml { url },
                Err(e) => PageOutcome::Failed {
                    url,
                    error: e.to_string(),
                },
            };
            let _ = tx.send(outcome).await;
        });
    }

    // Close our sender so rx drains once every worker is done.
    drop(tx);

    let mut collected: Vec<Competition> = Vec::new();
    let mut non_html = 0usize;
    let mut fetch_errors = 0usize;
    let mut rejected = 0usize;

    while let Some(outcome) = rx.recv().await {
        match outcome {
            PageOutcome::Draft { url, draft } => {
                let title = draft.title.clone();
                match validate::validate(draft) {
                    Ok(record) => collected.push(record),
                    Err(reason) => {
                        rejected += 1;
                        warn!(url = %url, title = %title, reason = %reason, "record rejected");
                    }
                }
            }
            PageOutcome::NonHtml { url } => {
                non_html += 1;
                info!(url = %url, "non-HTML payload, skipped");
            }
            PageOutcome::Failed { url, error } => {
                fetch_errors += 1;
                warn!(url = %url, error = %error, "fetch failed");
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let records = dedupe(collected);
    info!(
        kept = records.len(),
        rejected, non_html, fetch_errors, "pipeline finished"
    );

    Ok(PipelineOutcome {
        records,
        sources: total,
        non_html,
        fetch_errors,
        rejected,
    })
}
