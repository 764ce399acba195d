use anyhow::Result;
use clap::{Parser, Subcommand};
use dishcover::config::Config;
use dishcover_discovery::{DiscoveryFlow, FetchStatus, UserSession, ViewState};
use dishcover_recipe::Recipe;
use std::time::Duration;

/// dishcover - Ingredient-based recipe discovery
#[derive(Parser)]
#[command(name = "dishcover")]
#[command(about = "Find recipes from the ingredients you have", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Search recipes by ingredient names
    Search {
        /// Ingredient names, comma separated or repeated
        #[arg(long, required = true, value_delimiter = ',')]
        ingredients: Vec<String>,
    },
    /// Fetch the curated recommendations
    Recommend {
        /// Opaque user identifier forwarded to the source
        #[arg(long)]
        user: Option<String>,
    },
    /// List the selectable ingredient catalog
    Ingredients {
        /// Narrow the catalog by substring
        #[arg(long)]
        filter: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize observability (tracing + logging)
    dishcover::observability::init_observability(
        "dishcover",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::Search { ingredients } => search_command(config, ingredients).await,
        Commands::Recommend { user } => recommend_command(config, user).await,
        Commands::Ingredients { filter } => ingredients_command(filter),
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting dishcover server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);
    tracing::info!(source = %config.source.kind, "Recipe source selected");

    let app = dishcover::create_app(config)?;

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn search_command(config: Config, ingredients: Vec<String>) -> Result<()> {
    tracing::info!(?ingredients, "Searching recipes...");

    let source = dishcover::build_source(&config)?;
    let mut flow = DiscoveryFlow::new(UserSession::anonymous())
        .with_request_timeout(Duration::from_secs(config.discovery.request_timeout_secs));

    flow.browse_ingredients()?;
    let ticket = flow.submit_ingredients(ingredients)?;
    report(flow.resolve(source.as_ref(), ticket).await)
}

#[tracing::instrument(skip(config))]
async fn recommend_command(config: Config, user: Option<String>) -> Result<()> {
    tracing::info!("Fetching recommendations...");

    let source = dishcover::build_source(&config)?;
    let session = match user {
        Some(user) => UserSession::for_user(user),
        None => UserSession::anonymous(),
    };
    let mut flow = DiscoveryFlow::new(session)
        .with_request_timeout(Duration::from_secs(config.discovery.request_timeout_secs));

    let ticket = flow.surprise_me()?;
    report(flow.resolve(source.as_ref(), ticket).await)
}

fn ingredients_command(filter: Option<String>) -> Result<()> {
    let ingredients = match filter.as_deref() {
        Some(query) => dishcover_recipe::filter_ingredients(query),
        None => dishcover_recipe::all_ingredients(),
    };
    for name in ingredients {
        println!("{name}");
    }
    Ok(())
}

fn report(state: &ViewState) -> Result<()> {
    match state {
        ViewState::Results(FetchStatus::Success(recipes)) => {
            print_recipes(recipes);
            Ok(())
        }
        ViewState::Results(FetchStatus::Error(message)) => Err(anyhow::anyhow!(message.clone())),
        _ => Err(anyhow::anyhow!("discovery flow ended off the results screen")),
    }
}

fn print_recipes(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }
    for recipe in recipes {
        if recipe.minutes > 0 {
            println!("#{} {} ({} min)", recipe.id, recipe.name, recipe.minutes);
        } else {
            println!("#{} {}", recipe.id, recipe.name);
        }
        println!("  ingredients: {}", recipe.ingredients.join(", "));
        for (index, step) in recipe.steps.iter().enumerate() {
            println!("  {}. {}", index + 1, step);
        }
    }
}
