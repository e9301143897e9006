use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use nflx::data::NetflixData;
use nflx::report::{OutputFormat, render};
use nflx::settings::{Settings, load_settings};
use nflx::*;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Descriptive reports over the Netflix titles catalogue.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Titles CSV or parquet file. Overrides the configured dataset.
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Settings file (TOML). Defaults to ./nflx.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Reference date for "last N years" reports (YYYY-MM-DD). Defaults to today.
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Number of movies vs TV shows.
    TypeCounts,
    /// Most common rating for each type, ties included.
    TopRatings,
    /// Movies released in a given year.
    ReleasedIn { year: i32 },
    /// Countries with the most titles.
    TopCountries {
        #[arg(long)]
        k: Option<usize>,
    },
    /// The longest movie.
    LongestMovie,
    /// Titles added in the last N years.
    RecentlyAdded {
        #[arg(long, default_value_t = 5)]
        years: u32,
    },
    /// Titles by a director.
    ByDirector { name: String },
    /// TV shows with more than N seasons.
    LongShows {
        #[arg(long, default_value_t = 5)]
        seasons: u32,
    },
    /// Title count per genre.
    Genres,
    /// Per release year share of a country's titles.
    CountryShare {
        #[arg(long, default_value = "India")]
        country: String,
        #[arg(long)]
        k: Option<usize>,
    },
    /// Movies listed in a genre.
    GenreMovies {
        #[arg(long, default_value = q11::DOCUMENTARIES)]
        genre: String,
    },
    /// Titles without a director.
    NoDirector,
    /// Movies with an actor released in the last N years.
    ActorMovies {
        actor: String,
        #[arg(long, default_value_t = 10)]
        years: u32,
    },
    /// Actors in the most movies produced in a country.
    TopActors {
        #[arg(long, default_value = "India")]
        country: String,
        #[arg(long)]
        k: Option<usize>,
    },
    /// Classify descriptions by keyword and count each category.
    Classify,
    /// Actor pairs sharing the most titles.
    ActorPairs {
        #[arg(long)]
        k: Option<usize>,
    },
    /// Directors credited on the most titles.
    TopDirectors {
        #[arg(long)]
        k: Option<usize>,
    },
    /// Titles added per calendar year.
    AddedPerYear,
    /// Average movie runtime per genre.
    GenreRuntime {
        #[arg(long)]
        k: Option<usize>,
    },
    /// Directors with both movies and TV shows.
    DirectorMix,
}

fn run(
    command: &Commands,
    db: &NetflixData,
    settings: &Settings,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String> {
    let top = |k: &Option<usize>| k.unwrap_or(settings.top_k);

    let out = match command {
        Commands::TypeCounts => render(&q1::q1(db), format)?,
        Commands::TopRatings => render(&q2::q2(db), format)?,
        Commands::ReleasedIn { year } => render(&q3::q3(db, *year), format)?,
        Commands::TopCountries { k } => render(&q4::q4(db, top(k)), format)?,
        Commands::LongestMovie => render(&q5::q5(db), format)?,
        Commands::RecentlyAdded { years } => render(&q6::q6(db, today, *years), format)?,
        Commands::ByDirector { name } => render(&q7::q7(db, name), format)?,
        Commands::LongShows { seasons } => render(&q8::q8(db, *seasons), format)?,
        Commands::Genres => render(&q9::q9(db), format)?,
        Commands::CountryShare { country, k } => render(&q10::q10(db, country, top(k))?, format)?,
        Commands::GenreMovies { genre } => render(&q11::q11(db, genre), format)?,
        Commands::NoDirector => render(&q12::q12(db), format)?,
        Commands::ActorMovies { actor, years } => {
            render(&q13::q13(db, actor, today, *years), format)?
        }
        Commands::TopActors { country, k } => render(&q14::q14(db, country, top(k)), format)?,
        Commands::Classify => render(&q15::q15(db, &settings.classification)?, format)?,
        Commands::ActorPairs { k } => render(&q16::q16(db, top(k)), format)?,
        Commands::TopDirectors { k } => render(&q17::q17(db, top(k)), format)?,
        Commands::AddedPerYear => render(&q18::q18(db), format)?,
        Commands::GenreRuntime { k } => render(&q19::q19(db, top(k)), format)?,
        Commands::DirectorMix => render(&q20::q20(db), format)?,
    };
    Ok(out)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let settings = load_settings(cli.config.as_deref())?;
    let dataset = cli.dataset.clone().unwrap_or_else(|| settings.dataset.clone());
    let format = cli.format.unwrap_or(settings.format);
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

    let db = NetflixData::load(&dataset)
        .with_context(|| format!("failed to load {}", dataset.display()))?;

    let start = Instant::now();
    let out = run(&cli.command, &db, &settings, today, format)?;
    info!(elapsed = ?start.elapsed(), %today, "report finished");

    println!("{out}");
    Ok(())
}
