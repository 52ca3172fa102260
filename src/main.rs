use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use paintmix::api;
use paintmix::assets::{AssetCategory, AssetLoader};
use paintmix::models::{AppConfig, Catalog};
use paintmix::server;
use paintmix::services::{MixRequest, MixService};

#[derive(Parser)]
#[command(name = "paintmix")]
#[command(about = "Paintmix - find the closest mix of your paints for any color")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Mix a target color from catalog paints
    Mix {
        /// Target color as hex (e.g. "#3a6ea5")
        #[arg(short, long)]
        target: String,

        /// Owned paint ids, comma-separated (default: every paint of the selected brands)
        #[arg(short, long, value_delimiter = ',')]
        paints: Vec<String>,

        /// Restrict to a brand (repeatable; default brand from config)
        #[arg(short, long)]
        brand: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List brands, or the paints of one brand
    Catalog {
        /// Brand id to list paints for
        #[arg(short, long)]
        brand: Option<String>,
    },
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Extract the paint catalog
        #[arg(long)]
        catalog: bool,

        /// Extract config.yaml
        #[arg(long)]
        config: bool,

        /// Extract all assets
        #[arg(long)]
        all: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Paintmix API",
        description = "Find the closest mix of your paints for any color",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_mix, api::handle_brands, api::handle_paints,),
    components(schemas(
        api::MixRequestBody,
        api::MixResponse,
        api::ComponentResponse,
        api::PaintResponse,
        api::BrandResponse,
        api::BrandsResponse,
        api::PaintsResponse,
    )),
    tags(
        (name = "Mixing", description = "Mix recipes for target colors"),
        (name = "Catalog", description = "Paint brands and ranges")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Mix {
            target,
            paints,
            brand,
            json,
        }) => run_mix_command(target, paints, brand, json),
        Some(Commands::Catalog { brand }) => run_catalog_command(brand.as_deref()),
        Some(Commands::Init {
            catalog,
            config,
            all,
            force,
            list,
        }) => run_init_command(catalog, config, all, force, list),
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for one-shot commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paintmix=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Asset loader from env vars, seeding configured paths that don't exist yet
fn configured_loader() -> Arc<AssetLoader> {
    let loader = Arc::new(AssetLoader::from_env());
    match loader.seed_if_configured() {
        Ok(report) if !report.is_empty() => {
            tracing::info!(
                catalog = report.catalog_seeded,
                config = report.config_seeded,
                "Seeded missing files with embedded assets"
            );
        }
        Err(e) => {
            tracing::warn!(%e, "Failed to seed assets");
        }
        _ => {}
    }
    loader
}

/// Mix a color once and print the recipe (no server needed)
fn run_mix_command(
    target: String,
    paints: Vec<String>,
    brands: Vec<String>,
    json: bool,
) -> anyhow::Result<()> {
    init_cli_tracing();

    let loader = configured_loader();
    let config = AppConfig::load_from_assets(&loader);
    let catalog = Arc::new(Catalog::load_from_assets(&loader)?);

    let brands = if brands.is_empty() {
        config.default_brand.clone().into_iter().collect()
    } else {
        brands
    };
    let paint_ids = if paints.is_empty() {
        catalog
            .paints_in_brands(&brands)?
            .into_iter()
            .map(|p| p.id)
            .collect()
    } else {
        paints
    };
    let brand_ids = (!brands.is_empty()).then_some(brands);

    let service = MixService::new(catalog, &config);
    let request = MixRequest {
        target,
        paint_ids,
        brand_ids,
    };
    let outcome = service.mix(&request)?;
    let response = api::MixResponse::new(&request.target, &outcome);

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("Target:   {}", response.target);
    println!("Mix:      {}", response.mixed_color);
    println!("Accuracy: {}%", response.accuracy_percent);
    if response.components.is_empty() {
        println!("\nNo paints to mix with.");
    } else {
        println!("\n{}", response.instructions);
        for c in &response.components {
            println!(
                "  {:>3}%  {} ({}, {})",
                c.percent, c.paint.name, c.paint.id, c.paint.hex
            );
        }
    }
    if let Some(tip) = &response.suggestion_tip {
        println!("\nTip: {tip}");
    }

    Ok(())
}

/// Print brands, or one brand's paints
fn run_catalog_command(brand: Option<&str>) -> anyhow::Result<()> {
    init_cli_tracing();

    let loader = configured_loader();
    let catalog = Catalog::load_from_assets(&loader)?;

    match brand {
        Some(id) => {
            let brand = catalog
                .brand(id)
                .ok_or_else(|| anyhow::anyhow!("Unknown brand: {id}"))?;
            println!("{} ({} paints):\n", brand.name, brand.paints.len());
            for p in &brand.paints {
                println!("  {:<28} {}  {:<24} {}", p.id, p.hex_color, p.name, p.pigment_label);
            }
        }
        None => {
            println!("Brands:\n");
            for b in catalog.brands() {
                println!("  {:<16} {} ({} paints)", b.id, b.name, b.paints.len());
            }
            println!("\nRun 'paintmix catalog --brand <id>' to list a brand's paints.");
        }
    }

    Ok(())
}

/// Extract embedded assets to filesystem
fn run_init_command(
    catalog: bool,
    config: bool,
    all: bool,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        println!("Catalog:");
        for f in AssetLoader::list_embedded(AssetCategory::Catalog) {
            println!("  {f}");
        }
        println!("\nConfig:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        return Ok(());
    }

    // Determine which categories to extract
    let mut categories = Vec::new();
    if all || catalog {
        categories.push(AssetCategory::Catalog);
    }
    if all || config {
        categories.push(AssetCategory::Config);
    }

    if categories.is_empty() {
        eprintln!("No categories specified. Use --all, --catalog, or --config");
        eprintln!("\nRun 'paintmix init --list' to see embedded assets.");
        std::process::exit(1);
    }

    let report = AssetLoader::from_env().init(&categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let catalog_file = std::env::var("CATALOG_FILE").ok();

    println!("Paintmix v{VERSION}");
    println!("Paint mixing recipes for any color\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR    = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE  = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  CATALOG_FILE = {}",
        catalog_file.as_deref().unwrap_or("(not set)")
    );

    let loader = AssetLoader::from_env();
    println!("\nAsset Sources:");
    println!("  Config:  {}", loader.describe_source(AssetCategory::Config));
    println!("  Catalog: {}", loader.describe_source(AssetCategory::Catalog));

    println!("\nCommands:");
    println!("  paintmix serve     Start the HTTP server");
    println!("  paintmix mix       Mix a target color from your paints");
    println!("  paintmix catalog   List brands and paints");
    println!("  paintmix init      Extract embedded assets");
    println!("\nRun 'paintmix --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paintmix=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let asset_loader = configured_loader();

    tracing::info!(
        catalog = %asset_loader.describe_source(AssetCategory::Catalog),
        config = %asset_loader.describe_source(AssetCategory::Config),
        "Asset sources configured"
    );

    let state = server::create_app_state(asset_loader)?;

    // OpenAPI documentation is production only
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Paintmix server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
