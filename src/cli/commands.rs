use chrono::{DateTime, Utc};

use crate::app::{AppContext, Result};
use crate::browser::ChromePageSource;
use crate::pipeline::{Outcome, RunReport};
use crate::store::Store;

pub async fn run(ctx: &AppContext) -> Result<()> {
    let pipeline = ctx.pipeline()?;

    println!("Opening {}...", ctx.config.site.listing_url()?);
    let source = ChromePageSource::launch(ctx.config.browser.clone()).await?;

    let report = pipeline.run(&source).await;
    source.close().await;

    print_report(&report);
    Ok(())
}

fn print_report(report: &RunReport) {
    if report.processed() == 0 {
        println!("No tracks found");
        return;
    }

    for candidate in &report.candidates {
        let status = match candidate.outcome {
            Outcome::Saved => "saved",
            Outcome::SkippedDuplicate | Outcome::SaveSkippedDuplicate => "already stored",
            Outcome::SkippedNoUrl => "no link",
            Outcome::SaveFailed => "failed",
        };
        println!("  [{}] {}", status, candidate.track.display_name());
    }

    println!(
        "Run complete: {} processed, {} saved, {} downloaded, {} already stored",
        report.processed(),
        report.saved(),
        report.downloaded(),
        report.count(Outcome::SkippedDuplicate) + report.count(Outcome::SaveSkippedDuplicate)
    );
}

pub fn list_tracks(ctx: &AppContext) -> Result<()> {
    let tracks = ctx.store.all_tracks()?;

    if tracks.is_empty() {
        println!("No tracks");
        return Ok(());
    }

    for stored in tracks {
        let track = &stored.track;
        let marker = if stored.is_downloaded() { "+" } else { " " };
        println!(
            "{} {} ({} plays) [{}]\n    {}",
            marker,
            track.display_name(),
            track.plays,
            format_created_at(stored.created_at.as_ref()),
            track.track_url.as_deref().unwrap_or("-")
        );
        if let Some(ref styles) = track.styles_full {
            println!("    {}", styles);
        }
    }

    Ok(())
}

fn format_created_at(created_at: Option<&DateTime<Utc>>) -> String {
    created_at
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
