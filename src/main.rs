use clap::{ArgAction, Parser};
use phonemap::config::{ConfigLayer, Settings};
use phonemap::geocode::OpenCageClient;
use phonemap::logging;
use phonemap::lookup::BundledMetadata;
use phonemap::map::TileLayer;
use phonemap::{browser, report, Tracker};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// phonemap: approximate phone number location lookup
///
/// Resolves the region and carrier a phone number was allocated to,
/// geocodes the region and writes an HTML map of the approximate area.
/// The location is the numbering-plan region, not a device position.
///
/// Examples:
///   phonemap +254712345678 --api-key YOUR_KEY
///   OPENCAGE_API_KEY=YOUR_KEY phonemap 447911123456 --open
///   phonemap +12125550100 --pixel-radius 12 --tiles positron --zoom 11
///   phonemap --json --quiet +254202222222
#[derive(Parser)]
#[command(name = "phonemap", version, about, long_about = None)]
struct Cli {
    /// Phone number with country code. Prompted for when omitted.
    #[arg(index = 1)]
    number: Option<String>,

    /// OpenCage geocoding API key (or set OPENCAGE_API_KEY).
    #[arg(long)]
    api_key: Option<String>,

    /// Open the generated map in the default browser.
    #[arg(long)]
    open: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,

    /// Suppress the banner.
    #[arg(long, short = 'q')]
    quiet: bool,

    /// Print the result as JSON on stdout.
    #[arg(long)]
    json: bool,

    /// Directory the map file is written to. Defaults to the current directory.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Map file name prefix.
    #[arg(long)]
    prefix: Option<String>,

    /// Initial map zoom level (0-19).
    #[arg(long)]
    zoom: Option<u8>,

    /// Approximate-area circle radius in metres.
    #[arg(long, conflicts_with = "pixel_radius")]
    radius_m: Option<f64>,

    /// Approximate-area circle radius in screen pixels.
    #[arg(long)]
    pixel_radius: Option<u32>,

    /// Tile layer: "openstreetmap" or "positron".
    #[arg(long)]
    tiles: Option<TileLayer>,

    /// Geocoding request timeout in seconds.
    #[arg(long)]
    timeout: Option<u64>,

    /// Geocoding service base URL.
    #[arg(long, hide = true)]
    base_url: Option<String>,

    /// Config file (default: ~/.phonemap/config.json).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn layer(&self) -> ConfigLayer {
        ConfigLayer {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout,
            output_dir: self.output_dir.clone(),
            prefix: self.prefix.clone(),
            zoom: self.zoom,
            radius_m: self.radius_m,
            pixel_radius: self.pixel_radius,
            tiles: self.tiles,
            quiet: self.quiet.then_some(true),
            color: self.no_color.then_some(false),
            auto_open: self.open.then_some(true),
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let color = !cli.no_color && std::env::var_os("NO_COLOR").is_none();
    logging::init_logger(logging::level_for_verbosity(cli.verbose), color);

    // ── Resolve configuration (credential first, before any parsing) ──

    let settings = ConfigLayer::load(cli.config.as_deref())
        .map(|file| file.merge(ConfigLayer::from_env()).merge(cli.layer()))
        .and_then(Settings::from_layer)
        .unwrap_or_else(|e| {
            eprintln!("{}", report::error(&e.to_string(), color));
            std::process::exit(1);
        });

    // ── Run the pipeline, racing Ctrl+C ──────────────────────────

    let job = tokio::task::spawn_blocking(move || run(cli, settings));

    tokio::select! {
        joined = job => match joined {
            Ok(code) => std::process::exit(code),
            Err(e) => {
                eprintln!("\nUnexpected error: {}", e);
                std::process::exit(1);
            }
        },
        () = interrupted() => {
            eprintln!("\nInterrupted. Exiting.");
            std::process::exit(0);
        }
    }
}

/// Resolves on Ctrl+C. Never resolves when the handler cannot be installed.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("cannot listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

fn run(cli: Cli, settings: Settings) -> i32 {
    let p = settings.presentation;

    if let Some(banner) = report::banner(&p) {
        eprint!("{}", banner);
    }

    let number = match cli.number {
        Some(n) => n,
        None => match prompt_number() {
            Ok(n) => n,
            Err(e) => {
                eprintln!("{}", report::error(&format!("cannot read input: {}", e), p.color));
                return 1;
            }
        },
    };

    if !number.trim().starts_with('+') {
        log::info!("adding '+' prefix to {}", number.trim());
    }

    let client = OpenCageClient::with_options(
        settings.api_key.clone(),
        &settings.base_url,
        settings.timeout,
    );
    let tracker = Tracker::new(&BundledMetadata, &client)
        .with_map_options(settings.map.clone())
        .with_output_dir(settings.output_dir.clone());

    let result = match tracker.track(&number) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", report::error(&e.to_string(), p.color));
            return 1;
        }
    };

    if let Some(ref w) = result.warning {
        eprintln!("{}", report::warning(w, p.color));
    }
    eprint!("{}", report::summary(&result, p.color));
    if let Some(line) = report::map_saved(&result, p.color) {
        eprintln!("{}", line);
    }

    if cli.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{}", report::error(&e.to_string(), p.color));
                return 1;
            }
        }
    }

    if p.auto_open {
        if let Some(ref path) = result.map_file {
            if let Err(e) = browser::open_in_browser(path) {
                eprintln!("{}", report::warning(&format!("cannot open browser: {}", e), p.color));
            }
        }
    }

    0
}

fn prompt_number() -> io::Result<String> {
    eprint!("Enter phone number (e.g., +254712345678): ");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
