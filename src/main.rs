//! Read Receipt Viewer - Entry Point

use clap::Parser;
use rrview::config::{CliOverrides, KeyBindings, ResolvedConfig, Settings, SettingsStore};
use rrview::fetch::{FileFetcher, ReceiptFetcher, RestFetcher};
use rrview::i18n::{I18n, Language};
use rrview::logging::DiagnosticLog;
use rrview::model::{AppError, FetchError, InvalidMessageId, MessageId};
use rrview::state::ReceiptScreen;
use rrview::theme::ThemeName;
use rrview::time_format::{DisplayZone, TimeFormatter};
use rrview::view::{AppOptions, ColorConfig};
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Read Receipt Viewer - see who has read a chat message
#[derive(Parser, Debug)]
#[command(name = "rrview")]
#[command(version)]
#[command(about = "Terminal viewer for the read receipts of a chat message")]
pub struct Args {
    /// Id of the message whose read receipts are shown
    #[arg(value_parser = parse_message_id)]
    pub message_id: MessageId,

    /// Server base URL (e.g. https://open.rocket.chat)
    #[arg(long)]
    pub server: Option<String>,

    /// Id of the logged-in user
    #[arg(long)]
    pub user_id: Option<String>,

    /// Personal access token of the logged-in user
    #[arg(long)]
    pub auth_token: Option<String>,

    /// Moment-style time pattern (e.g. "HH:mm", "LT")
    #[arg(long)]
    pub time_format: Option<String>,

    /// Color theme
    #[arg(long)]
    pub theme: Option<ThemeName>,

    /// Display language (en, pt-BR, de, es)
    #[arg(long)]
    pub language: Option<Language>,

    /// Read the receipts response from a JSON file instead of the server
    #[arg(long)]
    pub fixture: Option<PathBuf>,

    /// Show times in UTC instead of local time
    #[arg(long)]
    pub utc: bool,

    /// Print the receipts to stdout and exit instead of starting the TUI
    #[arg(long)]
    pub print: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Redraw on every tick, even when nothing changed
    #[arg(long)]
    pub no_render_gate: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_message_id(raw: &str) -> Result<MessageId, InvalidMessageId> {
    MessageId::new(raw)
}

impl Args {
    /// Flags that take part in config precedence. Boolean flags only
    /// override when set.
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            server_url: self.server.clone(),
            user_id: self.user_id.clone(),
            auth_token: self.auth_token.clone(),
            time_format: self.time_format.clone(),
            theme: self.theme,
            language: self.language,
            utc: self.utc.then_some(true),
            render_gate: self.no_render_gate.then_some(false),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set NO_COLOR env var if --no-color flag is passed
    // This ensures consistent color handling throughout the application
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        // 1. Load config file (or None if missing)
        let config_file = rrview::config::load_config_with_precedence(args.config.clone())?;

        // 2. Merge with defaults
        let merged = rrview::config::merge_config(config_file);

        // 3. Apply environment variable overrides
        let with_env = rrview::config::apply_env_overrides(merged)?;

        // 4. Apply CLI argument overrides
        rrview::config::apply_cli_overrides(with_env, args.overrides())
    };

    // Initialize tracing with configured log file path
    rrview::logging::init(&config.log_file_path)?;

    info!(
        message_id = %args.message_id,
        server = config.server_url.as_deref().unwrap_or("-"),
        theme = %config.theme,
        render_gate = config.render_gate,
        logical_failure = config.logical_failure.as_str(),
        "Configuration loaded and resolved"
    );

    let settings = Settings::from_config(&config);
    let fetcher = build_fetcher(&args, &config, &settings)?;
    let diagnostics = Rc::new(DiagnosticLog::new());
    let screen = ReceiptScreen::new(args.message_id.clone(), fetcher, diagnostics.clone())
        .with_policy(config.logical_failure);
    let zone = if config.utc {
        DisplayZone::Utc
    } else {
        DisplayZone::Local
    };

    if args.print {
        return print_mode(screen, &settings, zone, &diagnostics, config.request_timeout);
    }

    let options = AppOptions {
        colors: ColorConfig::from_env_and_args(args.no_color),
        zone,
        render_gate: config.render_gate,
        key_bindings: KeyBindings::default(),
    };
    rrview::view::run_app(screen, SettingsStore::new(settings), options)?;

    Ok(())
}

/// `--fixture` wins over the server; the server needs a base URL.
fn build_fetcher(
    args: &Args,
    config: &ResolvedConfig,
    settings: &Settings,
) -> Result<Arc<dyn ReceiptFetcher>, AppError> {
    if let Some(path) = &args.fixture {
        return Ok(Arc::new(FileFetcher::new(path)));
    }
    if config.server_url.as_deref().is_none_or(str::is_empty) {
        return Err(rrview::config::ConfigError::MissingValue("server_url").into());
    }
    Ok(Arc::new(RestFetcher::from_settings(
        settings,
        config.request_timeout,
    )))
}

/// Mount, wait for the fetch, print and exit. Exits non-zero if any failure
/// was reported.
fn print_mode(
    mut screen: ReceiptScreen,
    settings: &Settings,
    zone: DisplayZone,
    diagnostics: &DiagnosticLog,
    request_timeout: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    screen.on_mount();

    // Leave the worker room to report its own timeout first.
    let grace = request_timeout + Duration::from_secs(1);
    if !screen.settle(grace) && screen.is_in_flight() {
        return Err(AppError::Fetch(FetchError::TimedOut(grace)).into());
    }

    let formatter = TimeFormatter::new(settings.time_format.clone(), zone);
    let mut stdout = std::io::stdout().lock();
    rrview::view::print_receipts(&mut stdout, screen.state(), &formatter, I18n::new(settings.language))?;
    stdout.flush()?;

    if let Some(diagnostic) = diagnostics.entries().last() {
        eprintln!("{}", diagnostic);
        std::process::exit(1);
    }
    Ok(())
}
