//! # Tiptime CLI - Interactive Tip Calculator TUI
//!
//! A terminal user interface for computing a tip from a bill total and a
//! tip percentage, with locale-aware currency output.
//!
//! ## Features
//! - Interactive TUI with keyboard navigation and live recomputation
//! - Optional round-up rule (tip ceiled to the next whole currency unit)
//! - Locale-aware currency formatting (cycle locales with Ctrl+L)
//! - One-shot mode with pretty or JSON output
//!
//! ## Usage
//! ```bash
//! # Run the interactive TUI
//! tiptime
//!
//! # One-shot: 18% tip on a 42.50 bill, rounded up
//! tiptime --bill 42.50 --tip 18 --round-up
//!
//! # Same, as JSON
//! tiptime --bill 42.50 --tip 18 --json
//!
//! # List supported locales
//! tiptime locales
//!
//! # Run diagnostics
//! tiptime doctor
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::env;

use tiptime::prelude::*;

mod config_loader;
mod tui;

use config_loader::CliConfig;
use tui::{App, handle_events, ui};

/// Interactive tip calculator CLI
#[derive(Parser, Debug)]
#[command(name = "tiptime")]
#[command(author = "tiptime contributors")]
#[command(version)]
#[command(about = "Locale-aware tip calculator with an interactive TUI", long_about = None)]
struct Args {
    /// Bill amount; runs in one-shot mode instead of the TUI.
    /// Unparseable text counts as 0.
    #[arg(long, short = 'b')]
    bill: Option<String>,

    /// Tip percentage (20 means 20%)
    #[arg(long, short = 't')]
    tip: Option<String>,

    /// Round the tip up to the next whole currency unit
    #[arg(long, short = 'r', default_value = "false")]
    round_up: bool,

    /// Locale for currency output (e.g. en-US, de-DE); defaults to the
    /// config file, then the LC_ALL/LC_MONETARY/LANG environment
    #[arg(long, short = 'l')]
    locale: Option<TipLocale>,

    /// Output the breakdown as JSON (one-shot mode only)
    #[arg(long, default_value = "false")]
    json: bool,

    /// Print the step-by-step calculation trace (one-shot mode only)
    #[arg(long, default_value = "false")]
    explain: bool,

    /// Enable file logging to logs/ directory
    #[arg(long, default_value = "false")]
    log: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run diagnostics on the locale environment and configuration
    Doctor,
    /// List supported locales with their currency conventions
    Locales,
    /// Write a sample config file to the platform config directory
    InitConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = CliConfig::load();

    // Initialize tracing with optional file logging
    // NOTE: In TUI mode, we only log to file (no console) to avoid corrupting the UI
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>;
    let is_tui_mode = args.command.is_none() && args.bill.is_none();
    let log_enabled = args.log || config.enable_logging.unwrap_or(false);

    if log_enabled {
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;

        std::fs::create_dir_all("logs")?;

        let file_appender = tracing_appender::rolling::daily("logs", "tiptime.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        _file_guard = Some(guard);

        let env_filter = tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("tiptime=debug".parse().unwrap());

        // Only add console layer if NOT in TUI mode
        if is_tui_mode {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .init();
        }

        tracing::info!(
            "--- Tip Calculation Session Started [{}] ---",
            chrono::Utc::now()
        );
    } else {
        _file_guard = None;
        // In TUI mode without logging, completely disable tracing to stdout
        if !is_tui_mode {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::from_default_env()
                        .add_directive("tiptime=info".parse().unwrap()),
                )
                .init();
        }
    }

    let locale = resolve_locale(&args, &config);

    // Handle subcommands (run outside TUI)
    match args.command {
        Some(Commands::Doctor) => return run_doctor(&config),
        Some(Commands::Locales) => return run_locales(),
        Some(Commands::InitConfig) => {
            let path = CliConfig::create_sample()?;
            println!("Wrote sample config to {}", path.display());
            return Ok(());
        }
        None => {}
    }

    // One-shot mode when a bill amount was given on the command line
    if args.bill.is_some() {
        return run_one_shot(&args, &config, locale);
    }

    run_tui(&args, &config, locale)
}

/// Locale precedence: flag, then config file, then environment.
fn resolve_locale(args: &Args, config: &CliConfig) -> TipLocale {
    if let Some(locale) = args.locale {
        return locale;
    }
    if let Some(tag) = &config.locale {
        match tag.parse::<TipLocale>() {
            Ok(locale) => return locale,
            Err(e) => eprintln!("Warning: ignoring config locale: {}", e),
        }
    }
    TipLocale::from_env()
}

/// Tip percentage precedence: flag, then config file, then 15%.
fn resolve_percent(args: &Args, config: &CliConfig) -> Decimal {
    match &args.tip {
        Some(text) => parse_amount(text),
        None => config.default_tip_percent.unwrap_or(dec!(15)),
    }
}

/// Compute once and print, without entering the TUI.
fn run_one_shot(
    args: &Args,
    config: &CliConfig,
    locale: TipLocale,
) -> Result<(), Box<dyn std::error::Error>> {
    let bill_text = args.bill.as_deref().unwrap_or_default();
    let round_up = args.round_up || config.round_up.unwrap_or(false);

    let breakdown = TipCalculator::new()
        .bill(parse_amount(bill_text))
        .percent(resolve_percent(args, config))
        .round_up(round_up)
        .calculate();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    println!();
    println!(
        "  {}  {}",
        "Bill:".bold(),
        breakdown.format_bill(&locale).cyan()
    );
    println!(
        "  {}   {}{}",
        "Tip:".bold(),
        breakdown.format_tip(&locale).green().bold(),
        if round_up { " (rounded up)".dimmed() } else { "".dimmed() }
    );
    println!(
        "  {} {}",
        "Total:".bold(),
        breakdown.format_total(&locale).bold()
    );
    println!();

    if args.explain {
        println!("{}", breakdown.explain());
    }

    Ok(())
}

/// Run the TUI application
fn run_tui(
    args: &Args,
    config: &CliConfig,
    locale: TipLocale,
) -> Result<(), Box<dyn std::error::Error>> {
    let default_percent = match &args.tip {
        Some(text) => Some(parse_amount(text)),
        None => config.default_tip_percent,
    };
    let round_up = args.round_up || config.round_up.unwrap_or(false);

    let mut app = App::new(locale, default_percent, round_up);

    // Initialize terminal
    let mut terminal = ratatui::init();

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    ratatui::restore();

    result
}

/// Main application loop
fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Draw the UI
        terminal.draw(|frame| ui(frame, app))?;

        // Handle events
        if handle_events(app)? {
            break;
        }
    }

    Ok(())
}

/// Print every supported locale with a sample formatted amount.
fn run_locales() -> Result<(), Box<dyn std::error::Error>> {
    use strum::IntoEnumIterator;

    let sample = dec!(1234.56);
    println!();
    println!(
        "  {:<8} {:<5} {:<4} {}",
        "Locale".bold(),
        "Code".bold(),
        "Sym".bold(),
        "Sample".bold()
    );
    for locale in TipLocale::iter() {
        println!(
            "  {:<8} {:<5} {:<4} {}",
            locale.to_string(),
            locale.currency_code(),
            locale.currency_symbol(),
            locale.format_currency(sample)
        );
    }
    println!();
    Ok(())
}

/// Run doctor diagnostics (outside TUI)
fn run_doctor(config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("\n🩺 Tiptime CLI Doctor - Diagnostics Tool");
    println!("═══════════════════════════════════════════════\n");

    // 1. Environment Info
    println!("1. System Information:");
    println!("   OS: {}", std::env::consts::OS);
    println!("   Arch: {}", std::env::consts::ARCH);
    println!("   CLI Version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "   NO_COLOR: {}",
        if env::var("NO_COLOR").is_ok() {
            "Set (True)"
        } else {
            "Unset"
        }
    );

    // 2. Locale Environment
    println!("\n2. Locale Environment:");
    for key in ["LC_ALL", "LC_MONETARY", "LANG"] {
        match env::var(key) {
            Ok(value) if !value.is_empty() => println!("   {}: {}", key, value),
            _ => println!("   {}: (unset)", key),
        }
    }
    let detected = TipLocale::from_env();
    println!(
        "   Detected Locale: {} ({})",
        detected,
        detected.currency_code()
    );
    println!(
        "   Sample Format: {}",
        detected.format_currency(dec!(1234.56))
    );

    // 3. Configuration
    println!("\n3. Configuration:");
    match CliConfig::config_path() {
        Some(path) => {
            println!("   Config Path: {:?}", path);
            if path.exists() {
                println!("   Config File: Found");
                println!(
                    "   Default Tip: {}",
                    config
                        .default_tip_percent
                        .map(|p| format!("{}%", p.normalize()))
                        .unwrap_or_else(|| "(not set)".to_string())
                );
            } else {
                println!("   Config File: Not found (run 'tiptime init-config')");
            }
        }
        None => println!("   Config Path: Could not be determined"),
    }

    // 4. Storage
    println!("\n4. Storage:");
    let current_dir = std::env::current_dir()?;
    println!("   Current Directory: {:?}", current_dir);
    println!(
        "   Write Access: {}",
        if !std::fs::metadata(&current_dir)?.permissions().readonly() {
            "Yes"
        } else {
            "No"
        }
    );

    println!("\nDiagnostics Complete.\n");
    Ok(())
}
