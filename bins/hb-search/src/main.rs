//! hb-search: CLI for searching HanapBahay listing exports.

use anyhow::Context;
use clap::{Parser, Subcommand};
use hanapbahay_search::{
    filter_listings, parse_intent, suggest_terms, Listing, OccupantType, ScoreBreakdown,
    SearchParams, Vocabulary,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hb-search")]
#[command(about = "Search, rank and suggest over listing JSON exports")]
#[command(version)]
struct Cli {
    /// Vocabulary TOML file (defaults to the built-in vocabularies)
    #[arg(long, global = true)]
    vocab: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter and rank listings from a JSON file
    Search {
        /// Path to a JSON array of listings
        listings: PathBuf,
        /// Free-text query; structured hints are extracted from it
        #[arg(short, long)]
        query: Option<String>,
        /// Target barangay or location fragment
        #[arg(long)]
        location: Option<String>,
        /// Minimum monthly price in pesos
        #[arg(long)]
        min_price: Option<f64>,
        /// Maximum monthly price in pesos
        #[arg(long)]
        max_price: Option<f64>,
        /// Minimum bedroom count
        #[arg(long)]
        rooms: Option<u32>,
        /// Required amenity (repeatable)
        #[arg(long = "amenity")]
        amenities: Vec<String>,
        /// Exact property-type label
        #[arg(long)]
        property_type: Option<String>,
        /// Occupant heuristic: family or individual
        #[arg(long, value_parser = parse_occupant)]
        occupant: Option<OccupantType>,
        /// Maximum results to print
        #[arg(long)]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Show the per-signal score breakdown
        #[arg(long)]
        explain: bool,
    },
    /// Show the params extracted from a free-text phrase
    Parse {
        /// The search phrase
        text: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print autocomplete suggestions for a search-box input
    Suggest {
        /// Current search-box text (may be empty)
        #[arg(default_value = "")]
        input: String,
        /// Recent search term (repeatable)
        #[arg(long = "recent")]
        recent: Vec<String>,
        /// Popular search term (repeatable)
        #[arg(long = "popular")]
        popular: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_occupant(value: &str) -> Result<OccupantType, String> {
    match value.to_lowercase().as_str() {
        "family" => Ok(OccupantType::Family),
        "individual" => Ok(OccupantType::Individual),
        other => Err(format!("unknown occupant type: {other} (expected family or individual)")),
    }
}

fn load_vocab(path: Option<&PathBuf>) -> anyhow::Result<Vocabulary> {
    match path {
        Some(path) => Vocabulary::from_path(path)
            .with_context(|| format!("Failed to load vocabulary from {}", path.display())),
        None => Ok(Vocabulary::builtin()),
    }
}

fn load_listings(path: &PathBuf) -> anyhow::Result<Vec<Listing>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read listings file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse listings JSON in {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .compact()
        .init();

    let cli = Cli::parse();
    let vocab = load_vocab(cli.vocab.as_ref())?;

    match cli.command {
        Commands::Search {
            listings,
            query,
            location,
            min_price,
            max_price,
            rooms,
            amenities,
            property_type,
            occupant,
            limit,
            json,
            explain,
        } => {
            let listings = load_listings(&listings)?;

            // Start from parsed intent, then let explicit flags win.
            let mut params = match &query {
                Some(text) => parse_intent(text, &vocab),
                None => SearchParams::default(),
            };
            if location.is_some() {
                params.location = location;
            }
            if min_price.is_some() {
                params.min_price = min_price;
            }
            if max_price.is_some() {
                params.max_price = max_price;
            }
            if rooms.is_some() {
                params.rooms = rooms;
            }
            if !amenities.is_empty() {
                params.amenities = Some(amenities);
            }
            if property_type.is_some() {
                params.property_type = property_type;
            }
            if occupant.is_some() {
                params.occupant_type = occupant;
            }

            let mut ranked = filter_listings(&listings, &params);
            if let Some(limit) = limit {
                ranked.truncate(limit);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                println!("{} listing(s)", ranked.len());
                for (i, listing) in ranked.iter().enumerate() {
                    let title = listing.title.as_deref().unwrap_or("(untitled)");
                    print!("{}. {} [{}]", i + 1, title, listing.id);
                    if let Some(price) = listing.price {
                        print!(" - ₱{price:.0}/mo");
                    }
                    if let Some(barangay) = &listing.barangay {
                        print!(" - {barangay}");
                    }
                    println!();
                    if explain {
                        let breakdown = ScoreBreakdown::of(listing, &params);
                        println!(
                            "   score {} (query {}, location {}, rooms {}, price {}, amenities {}, type {})",
                            breakdown.total(),
                            breakdown.query,
                            breakdown.location,
                            breakdown.rooms,
                            breakdown.price,
                            breakdown.amenities,
                            breakdown.property_type,
                        );
                    }
                }
            }
        }

        Commands::Parse { text, json } => {
            let params = parse_intent(&text, &vocab);
            if json {
                println!("{}", serde_json::to_string_pretty(&params)?);
            } else {
                println!("query:        {}", params.query.as_deref().unwrap_or(""));
                println!("location:     {}", params.location.as_deref().unwrap_or("-"));
                println!(
                    "price:        {} .. {}",
                    params.min_price.map_or("-".to_string(), |p| format!("{p:.0}")),
                    params.max_price.map_or("-".to_string(), |p| format!("{p:.0}")),
                );
                println!(
                    "rooms:        {}",
                    params.rooms.map_or("-".to_string(), |r| r.to_string()),
                );
                println!(
                    "amenities:    {}",
                    params
                        .amenities
                        .as_ref()
                        .map_or("-".to_string(), |a| a.join(", ")),
                );
            }
        }

        Commands::Suggest {
            input,
            recent,
            popular,
            json,
        } => {
            let suggestions = suggest_terms(&input, &recent, &popular, &vocab);
            if json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else {
                for suggestion in &suggestions {
                    println!("{:<10} {}", format!("[{:?}]", suggestion.kind).to_lowercase(), suggestion.label);
                }
            }
        }
    }

    Ok(())
}
