use chrono::Local;
use clap::Parser;
use std::path::Path;
use wordpulse::{Sampler, snapshot, trend};

mod args;
use args::{Args, Mode, convert_locale};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    match args.mode {
        Mode::Scrape => run_scrape(&args).await,
        Mode::Trend => run_trend(&args),
    }
}

async fn run_scrape(args: &Args) {
    ::log::info!("Starting sampling run for {}", args.target);

    println!("Note: Scraping requires a WebDriver server (e.g., ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
    );

    let start_time = std::time::Instant::now();

    let sampler = Sampler::new(&args.target)
        .with_locale(convert_locale(args.locale))
        .with_settle_delay(args.delay);

    let counts = match sampler.run().await {
        Ok(counts) => counts,
        Err(e) => {
            ::log::error!("Sampling run failed: {}", e);
            return;
        }
    };

    match snapshot::write_snapshot(Path::new(&args.output_dir), &counts, &Local::now()) {
        Ok(path) => ::log::info!("Snapshot written to {}", path.display()),
        Err(e) => {
            ::log::error!("Failed to write snapshot: {}", e);
            return;
        }
    }

    // Show the ten most frequent words of this run
    let ordered = snapshot::ordered_words(&counts);
    for (word, count) in ordered.iter().rev().take(10) {
        println!("{}: {}", word, count);
    }

    let duration = start_time.elapsed();
    ::log::info!(
        "Run complete - {} distinct words in {:.2} seconds",
        counts.len(),
        duration.as_secs_f64()
    );
}

fn run_trend(args: &Args) {
    let series = match trend::trend_from_dir(Path::new(&args.target)) {
        Ok(series) => series,
        Err(e) => {
            ::log::error!("Failed to build trend series: {}", e);
            return;
        }
    };

    ::log::info!(
        "Tracking {} reference words across {} rows",
        series.reference_words.len(),
        series.rows.len()
    );
    print!("{}", series.render_table());
}
