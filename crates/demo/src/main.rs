// File: crates/demo/src/main.rs
// Summary: Demo boots the fan-hub page: optional season CSV, chart PNG, widget output.

use anyhow::{Context, Result};
use hub_chart::{DataPoint, SurfaceSpec};
use hub_page::{Page, PageEnv, Readiness, ReadinessGate, TeamStats};
use hub_widgets::{comments, format_time_ms, now_ms, poll, MemoryStore};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    init_tracing();

    // Accept an optional `season,runs` CSV; fall back to the sample stats.
    let stats = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(raw);
            let series = load_season_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            println!("Loaded {} seasons from {}", series.len(), path.display());
            TeamStats::sample().with_series(series)
        }
        None => TeamStats::sample(),
    };

    let out_dir = Path::new("target/out");
    let gate = ReadinessGate::default();
    if gate.wait_until(|| std::fs::create_dir_all(out_dir).is_ok()) == Readiness::TimedOut {
        tracing::warn!("output directory not ready after wait, booting anyway");
    }

    let mut store = MemoryStore::new();
    // Seed some activity so the widgets have something to show.
    if let Err(err) = poll::vote(&mut store, "MS Dhoni") {
        tracing::warn!(error = %err, "demo vote not recorded");
    }
    comments::add(&mut store, "Demo User", "That 2023 final was unreal.", now_ms())?;

    let page = Page::new(stats);
    let env = PageEnv {
        surface: Some(SurfaceSpec::default()),
        page_url: "https://example.com/fanhub".to_owned(),
        now_ms: now_ms(),
    };
    let view = page.boot(&mut store, &env);

    println!("Matches: {}", view.stats.matches);
    println!("Wins:    {}", view.stats.wins);
    println!("Runs:    {}", view.stats.runs);
    println!("Wickets: {}", view.stats.wickets);

    println!("\nPoll results:");
    for row in &view.poll {
        println!("  {}: {} votes ({}%)", row.option, row.votes, row.percent);
    }

    println!("\nComments:");
    for comment in &view.comments {
        println!("  [{}] {}: {}", format_time_ms(comment.time), comment.name, comment.text);
    }

    println!("\nFeed (first cursor page):");
    for post in &view.feed.visible {
        println!("  [{}] {}: {}", format_time_ms(post.time), post.author, post.text);
    }

    println!("\nShare: {}", view.share.twitter);

    if let Some(bytes) = &view.chart_png {
        let out = out_dir.join("runs_chart.png");
        std::fs::write(&out, bytes)?;
        println!("\nWrote {}", out.display());
    }

    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}

/// Load `season,runs` rows. A header row or malformed line is skipped rather
/// than failing the whole file.
fn load_season_csv(path: &Path) -> Result<Vec<DataPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let label = rec.get(0).map(str::trim).unwrap_or_default();
        let value = rec.get(1).and_then(|s| s.trim().parse::<f64>().ok());
        match value {
            Some(v) if !label.is_empty() => out.push(DataPoint::new(label, v.max(0.0))),
            _ => continue,
        }
    }
    if out.is_empty() {
        anyhow::bail!("no season rows parsed from {}", path.display());
    }
    Ok(out)
}
