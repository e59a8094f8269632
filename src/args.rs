use clap::{Parser, ValueEnum};
use wordpulse::Locale;

#[derive(Parser, Debug)]
#[command(name = "wordpulse")]
#[command(about = "Samples front-page word frequencies and tracks their trend over time")]
#[command(version)]
pub struct Args {
    /// Front-page URL to scrape, or the snapshot directory in trend mode
    pub target: String,

    /// What to run: a scraping session or the trend table
    #[arg(short, long, value_enum, default_value_t = Mode::Scrape)]
    pub mode: Mode,

    /// Locale for stopwords and lemmatization
    #[arg(short, long, value_enum, default_value_t = LocaleArg::Hu)]
    pub locale: LocaleArg,

    /// Settle delay in seconds applied after navigation actions
    #[arg(short, long, default_value_t = 5)]
    pub delay: u64,

    /// Directory where snapshots are written
    #[arg(short, long, default_value = "wordfreq_data")]
    pub output_dir: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Scrape the front page and write one snapshot
    Scrape,
    /// Read snapshots and print the frequency trend table
    Trend,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LocaleArg {
    Hu,
    // Add locales here as stopword and lemma data becomes available
}

/// Convert from CLI argument locale to the internal locale type
pub fn convert_locale(arg: LocaleArg) -> Locale {
    match arg {
        LocaleArg::Hu => Locale::Hu,
    }
}
