//! Dino Compare - Entry Point
//!
//! Starts the catalog load in the background, reads the comparison form
//! from flags or stdin, prints the tile grid and offers another round.

use dino_compare::catalog::{CatalogCell, CatalogLoader};
use dino_compare::core::config::CompareConfig;
use dino_compare::core::error::{DinoError, Result};
use dino_compare::core::types::DietMatching;
use dino_compare::session::{CompareSession, Comparison};

use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

/// Compare yourself against a catalog of dinosaurs
#[derive(Parser, Debug)]
#[command(name = "dino-compare", version)]
#[command(about = "Compare your weight, height and diet against the dinosaurs")]
struct Args {
    /// Catalog file path or http(s) URL (overrides the config file)
    #[arg(long)]
    catalog: Option<String>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducible fact selection
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Compare diets ignoring case
    #[arg(long)]
    ignore_diet_case: bool,

    /// Your name
    #[arg(long)]
    name: Option<String>,

    /// Height, whole feet
    #[arg(long)]
    feet: Option<String>,

    /// Height, remaining inches
    #[arg(long)]
    inches: Option<String>,

    /// Weight in pounds
    #[arg(long)]
    weight: Option<String>,

    /// Diet (herbivore, omnivore, carnivore)
    #[arg(long)]
    diet: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl Args {
    /// Every form field was given on the command line
    fn form_complete(&self) -> bool {
        [&self.name, &self.feet, &self.inches, &self.weight, &self.diet]
            .iter()
            .all(|field| field.is_some())
    }
}

fn main() {
    // Logs go to stderr so JSON output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("dino_compare=info")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => CompareConfig::load(path)?,
        None => CompareConfig::default(),
    };
    if let Some(catalog) = &args.catalog {
        config.catalog_location = catalog.clone();
    }
    if args.ignore_diet_case {
        config.diet_matching = DietMatching::IgnoreCase;
    }
    config.validate()?;

    let rt = Runtime::new()?;
    let _guard = rt.enter();

    tracing::info!(location = %config.catalog_location, "Loading catalog");
    let catalog = CatalogCell::spawn_load(
        CatalogLoader::new(&config),
        config.catalog_location.clone(),
    );
    let mut session = CompareSession::new(catalog, &config, args.seed);

    let one_shot = args.form_complete();
    prefill(&mut session, &args);

    loop {
        if !fill_missing(&mut session)? {
            break;
        }

        if !session.can_compare() {
            println!("Waiting for the dinosaur catalog to finish loading...");
        }

        match rt.block_on(session.compare_when_ready()) {
            Ok(comparison) => match args.format {
                OutputFormat::Text => print_grid(comparison, &config.image_dir),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(comparison)?),
            },
            Err(DinoError::InvalidInput { field, value }) if !one_shot => {
                println!("'{}' is not a valid {}, please try again.", value, field);
                session.form_mut().clear_field(field);
                continue;
            }
            Err(e) => return Err(e),
        }

        if one_shot || !ask_again()? {
            break;
        }
        session.reset();
    }

    Ok(())
}

fn prefill(session: &mut CompareSession, args: &Args) {
    let form = session.form_mut();
    let fields = [
        (&mut form.name, &args.name),
        (&mut form.feet, &args.feet),
        (&mut form.inches, &args.inches),
        (&mut form.weight, &args.weight),
        (&mut form.diet, &args.diet),
    ];
    for (slot, value) in fields {
        if let Some(value) = value {
            *slot = value.clone();
        }
    }
}

/// Prompt for each blank field once. Returns false on end of input.
fn fill_missing(session: &mut CompareSession) -> Result<bool> {
    for field in session.form().missing_fields() {
        let label = match field {
            "name" => "Name",
            "feet" => "Height (feet)",
            "inches" => "Height (inches)",
            "weight" => "Weight (lbs)",
            "diet" => "Diet (herbivore/omnivore/carnivore)",
            other => other,
        };
        let Some(answer) = prompt(label)? else {
            return Ok(false);
        };

        let form = session.form_mut();
        match field {
            "name" => form.name = answer,
            "feet" => form.feet = answer,
            "inches" => form.inches = answer,
            "weight" => form.weight = answer,
            _ => form.diet = answer,
        }
    }
    Ok(true)
}

fn prompt(label: &str) -> Result<Option<String>> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn ask_again() -> Result<bool> {
    let answer = prompt("Compare again? [y/N]")?;
    Ok(matches!(answer.as_deref(), Some("y") | Some("Y") | Some("yes")))
}

fn print_grid(comparison: &Comparison, image_dir: &str) {
    let human = &comparison.human;
    println!();
    println!(
        "=== {} vs the dinosaurs (round {}) ===",
        human.name, comparison.round
    );
    println!(
        "{} in tall, {} lbs, {}",
        human.height_display(),
        human.weight,
        human.diet
    );
    println!();

    for tile in &comparison.tiles {
        println!("[{}]  {}", tile.label, tile.image_path(image_dir));
        if tile.fact_visible() {
            if let Some(fact) = &tile.fact {
                println!("    {}", fact);
            }
        }
    }
    println!();
}
