mod classify;
mod db;
mod dedupe;
mod export;
mod extract;
mod fetcher;
mod pipeline;
mod record;
mod sources;
mod text;
mod validate;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};

use fetcher::{FetchConfig, Fetcher};

#[derive(Parser)]
#[command(
    name = "hkcompete_scraper",
    about = "Competition scraper for Hong Kong listing pages"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every source, extract records, replace the store, export JSON
    Run {
        /// Max sources to process (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// File with one source address per line (default: built-in list)
        #[arg(long)]
        sources: Option<PathBuf>,
        /// Export destination
        #[arg(long, default_value = "public/competitions.json")]
        out: PathBuf,
        /// Indent the exported JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Re-export stored records without scraping
    Export {
        #[arg(long, default_value = "public/competitions.json")]
        out: PathBuf,
        #[arg(long)]
        pretty: bool,
    },
    /// Show store statistics
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            limit,
            sources,
            out,
            pretty,
        } => {
            let mut list = sources::load(sources.as_deref())?;
            if let Some(n) = limit {
                list.truncate(n);
            }
            if list.is_empty() {
                println!("No source addresses to process.");
                return Ok(());
            }

            println!("Processing {} sources...", list.len());
            let fetcher = Fetcher::new(FetchConfig::default())?;
            let outcome = pipeline::run(fetcher, list).await?;

            let conn = db::connect()?;
            db::init_schema(&conn)?;
            db::replace_all(&conn, &outcome.records)?;
            export::write_json(&outcome.records, &out, pretty)?;

            println!(
                "Done: {} kept, {} rejected, {} non-HTML, {} fetch errors (of {} sources).",
                outcome.records.len(),
                outcome.rejected,
                outcome.non_html,
                outcome.fetch_errors,
                outcome.sources,
            );
            println!("Exported to {}", out.display());
            Ok(())
        }
        Commands::Export { out, pretty } => {
            let conn = db::connect()?;
            db::init_schema(&conn)?;
            let records = db::fetch_all(&conn)?;
            export::write_json(&records, &out, pretty)?;
            println!("Exported {} records to {}", records.len(), out.display());
            Ok(())
        }
        Commands::Stats => {
            let conn = db::connect()?;
            db::init_schema(&conn)?;
            let s = db::get_stats(&conn)?;
            println!("Total:            {}", s.total);
            println!("With deadline:    {}", s.with_deadline);
            println!("With description: {}", s.with_description);
            if !s.by_category.is_empty() {
                println!("\nBy category:");
                for (category, n) in &s.by_category {
                    println!("  {:<12} {}", category, n);
                }
            }
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}
