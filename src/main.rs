use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use getaway_scout::config::Config;
use getaway_scout::display::{feature_label, image_for};
use getaway_scout::edit::EditForm;
use getaway_scout::filters::{self, CatalogBounds, FilterCriteria, PriceRange, PriceTarget, SortKey, VoteFilter};
use getaway_scout::models::Property;
use getaway_scout::session::{Credentials, FileStorage, Session};
use getaway_scout::slug::{find_by_slug, property_path};
use getaway_scout::store::{open_store, Catalog};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "getaway-scout", version, about = "Browse, filter and vote on the group's vacation rentals")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sign in (demo credentials: admin / admin)
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out
    Logout,
    /// Show whether you are signed in
    Status,
    /// List properties matching the filters
    List(ListArgs),
    /// Show a single property by slug
    Show { slug: String },
    /// Edit a property locally; nothing is written back to the catalog
    Edit(EditArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Lower price bound (inclusive), default 0
    #[arg(long)]
    min_price: Option<f64>,
    /// Upper price bound (inclusive), default the catalog maximum
    #[arg(long)]
    max_price: Option<f64>,
    /// Apply the price bounds to the price per person instead of the total
    #[arg(long)]
    per_person: bool,
    #[arg(long, default_value_t = 0)]
    min_rooms: u32,
    /// Required amenity key, e.g. outdoorPool (repeatable)
    #[arg(long = "feature")]
    features: Vec<String>,
    /// any, has or none
    #[arg(long, default_value = "any")]
    votes: VoteFilter,
    #[arg(long, default_value = "price-asc")]
    sort: SortKey,
    /// Also write the result as JSON
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct EditArgs {
    slug: String,
    #[arg(long)]
    name: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    price: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    price_per_person: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    rooms: Option<i64>,
    /// voter=vote, an empty vote withdraws it (repeatable)
    #[arg(long = "vote", value_parser = parse_key_value)]
    votes: Vec<(String, String)>,
    /// amenity=true|false (repeatable)
    #[arg(long = "feature", value_parser = parse_key_value)]
    features: Vec<(String, String)>,
    /// Write the edited property as JSON
    #[arg(long)]
    output: Option<PathBuf>,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Command::Login { username, password } => login(&config, Credentials::new(username, password)),
        Command::Logout => {
            open_session(&config)?.logout()?;
            Ok(())
        }
        Command::Status => {
            let session = open_session(&config)?;
            if session.is_authenticated() {
                println!("Signed in");
            } else {
                println!("Signed out");
            }
            Ok(())
        }
        Command::List(args) => {
            require_login(&config)?;
            list(&config, args).await
        }
        Command::Show { slug } => {
            require_login(&config)?;
            show(&config, &slug).await
        }
        Command::Edit(args) => {
            require_login(&config)?;
            edit(&config, args).await
        }
    }
}

fn open_session(config: &Config) -> Result<Session<FileStorage>> {
    let session = Session::with_credentials(
        FileStorage::new(&config.session_file),
        config.credentials.clone(),
    )?;
    Ok(session)
}

fn login(config: &Config, credentials: Credentials) -> Result<()> {
    let mut session = open_session(config)?;
    session.login(&credentials)?;
    println!("🏠 Welcome back, {}!", credentials.username);
    Ok(())
}

fn require_login(config: &Config) -> Result<()> {
    if !open_session(config)?.is_authenticated() {
        warn!("Not signed in");
        bail!("Not signed in. Run `getaway-scout login` first");
    }
    Ok(())
}

async fn load_catalog(config: &Config) -> Result<Catalog> {
    let store = open_store(config)?;
    Catalog::load(store.as_ref())
        .await
        .with_context(|| format!("Failed to load catalog from {}", store.source_name()))
}

async fn list(config: &Config, args: ListArgs) -> Result<()> {
    let catalog = load_catalog(config).await?;
    let bounds = CatalogBounds::of(&catalog.properties);

    let (price_target, default_max) = if args.per_person {
        (PriceTarget::PerPerson, bounds.max_price_per_person)
    } else {
        (PriceTarget::Total, bounds.max_price)
    };

    let criteria = FilterCriteria {
        price_range: PriceRange::new(
            args.min_price.unwrap_or(0.0),
            args.max_price.unwrap_or(default_max),
        ),
        price_target,
        min_rooms: args.min_rooms,
        required_features: args.features.into_iter().collect(),
        vote_filter: args.votes,
        sort_key: args.sort,
    };

    let properties = filters::apply(&catalog.properties, &criteria);

    info!(
        "Showing {} of {} properties from {} (loaded {})",
        properties.len(),
        catalog.properties.len(),
        catalog.source,
        catalog.loaded_at.format("%Y-%m-%d %H:%M:%S")
    );

    if properties.is_empty() {
        println!("No properties found. Try other filter criteria.");
    }

    for (i, property) in properties.iter().enumerate() {
        print_property(i + 1, property);
    }

    if let Some(path) = args.output {
        let json = serde_json::to_string_pretty(&properties)?;
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("💾 Saved {} properties to {}", properties.len(), path.display());
    }

    Ok(())
}

async fn show(config: &Config, slug: &str) -> Result<()> {
    let catalog = load_catalog(config).await?;

    let Some(property) = find_by_slug(&catalog.properties, slug) else {
        bail!("Property not found: {slug}");
    };

    print_property(1, property);
    for (voter, vote) in &property.votes {
        let vote = if vote.is_empty() { "-" } else { vote.as_str() };
        println!("   {voter}: {vote}");
    }
    Ok(())
}

async fn edit(config: &Config, args: EditArgs) -> Result<()> {
    let catalog = load_catalog(config).await?;

    let Some(property) = find_by_slug(&catalog.properties, &args.slug) else {
        bail!("Property not found: {}", args.slug);
    };

    let mut form = EditForm::open(property);
    if let Some(name) = args.name {
        form.set_name(name);
    }
    if let Some(price) = args.price {
        form.set_price(price);
    }
    if let Some(price_per_person) = args.price_per_person {
        form.set_price_per_person(price_per_person);
    }
    if let Some(rooms) = args.rooms {
        form.set_rooms(rooms);
    }
    for (key, value) in args.features {
        let enabled: bool = value
            .parse()
            .with_context(|| format!("Feature {key} must be true or false, got '{value}'"))?;
        form.set_feature(key, enabled);
    }
    for (voter, vote) in args.votes {
        form.set_vote(voter, vote);
    }

    if !form.is_dirty() {
        info!("Nothing to change for {}", property.name);
    }

    let edited = form.submit()?;
    println!("✅ Changes saved (not written back to the catalog)");
    print_property(1, &edited);

    if let Some(path) = args.output {
        let json = serde_json::to_string_pretty(&edited)?;
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("💾 Saved edited property to {}", path.display());
    }

    Ok(())
}

fn print_property(position: usize, property: &Property) {
    println!(
        "{}. {} (€{} total, €{}/person)",
        position, property.name, property.price, property.price_per_person
    );
    if property.rooms > 0 {
        println!("   {} rooms", property.rooms);
    }
    if property.has_any_feature() {
        let features: Vec<&str> = property
            .features
            .iter()
            .filter(|(_, &on)| on)
            .map(|(key, _)| feature_label(key))
            .collect();
        println!("   Features: {}", features.join(", "));
    }
    if property.has_votes() {
        let votes: Vec<String> = property
            .cast_votes()
            .map(|(voter, vote)| format!("{voter}: {vote}"))
            .collect();
        println!("   Votes ({}): {}", property.vote_count(), votes.join(", "));
    }
    println!("   Image: {}", image_for(&property.name));
    println!("   Path: {}", property_path(property));
    println!();
}
