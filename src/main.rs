mod app;
mod cli;
mod config;
mod datasources;
mod error;
mod logic;
mod models;
mod ui;

use anyhow::Context;
use app::{App, Phase};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use error::{PronosticoError, Result};
use logic::ForecastSync;
use models::DaySummary;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, IsTerminal, Stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing_subscriber::EnvFilter;
use ui::screens::{ErrorScreen, ForecastScreen, LoadingScreen};

type FetchHandle = JoinHandle<Result<Vec<DaySummary>>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            init_tracing(cli.verbose, None)?;
            Config::setup_interactive().context("Interactive setup failed")?;
            Ok(())
        }
        Some(Commands::Check) => {
            init_tracing(cli.verbose, None)?;
            run_check(cli.config.as_ref()).await
        }
        Some(Commands::Show { json }) => {
            init_tracing(cli.verbose, None)?;
            let config = load_config(cli.config.as_ref())?;
            run_show(&config, json).await
        }
        None => {
            // The TUI owns stdout/stderr, so logs go to a file
            init_tracing(cli.verbose, Some(Config::log_path()?))?;
            let config = load_config(cli.config.as_ref())?;
            run_tui(config).await
        }
    }
}

fn init_tracing(verbose: u8, log_file: Option<PathBuf>) -> anyhow::Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            subscriber
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => subscriber.with_writer(io::stderr).init(),
    }

    Ok(())
}

/// Load the config, offering interactive setup when none exists yet.
fn load_config(config_override: Option<&PathBuf>) -> anyhow::Result<Config> {
    if config_override.is_none() && !Config::exists() && io::stdin().is_terminal() {
        let (config, _) = Config::setup_interactive().context("Interactive setup failed")?;
        return Ok(config);
    }

    Config::load(config_override).context(
        "Configuration error (run `pronostico init` or copy config/config.yaml.example to config/config.yaml)",
    )
}

async fn run_check(config_override: Option<&PathBuf>) -> anyhow::Result<()> {
    let config = Config::load(config_override).context("Configuration error")?;
    println!("Config: OK");
    println!("  Location: {}", config.location.name);
    println!("  {:?}", config.openweathermap);

    let sync = ForecastSync::new(&config);
    match sync.test_connection().await {
        Ok(true) => {
            println!("OpenWeatherMap: OK");
            Ok(())
        }
        Ok(false) => anyhow::bail!("OpenWeatherMap: REJECTED (check api_key)"),
        Err(e) => anyhow::bail!("OpenWeatherMap: OFFLINE ({})", e),
    }
}

async fn run_show(config: &Config, json: bool) -> anyhow::Result<()> {
    let sync = ForecastSync::new(config);
    let days = match sync.load().await {
        Ok(days) => days,
        Err(e) => {
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&days)?);
        return Ok(());
    }

    println!("{}", ui::screens::forecast::TITLE);
    println!("📍 {}", config.location.name);
    for day in &days {
        println!();
        println!("{}  {}", day.headline(), day.condition.symbol());
        println!("  {}", day.condition.text);
        println!("  {}", day.temperature_label());
        println!("  {}", day.rain_label());
    }

    Ok(())
}

async fn run_tui(config: Config) -> anyhow::Result<()> {
    let sync = ForecastSync::new(&config);
    let mut app = App::new(config.location.name.clone());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &sync).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.context("Terminal loop failed")
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    sync: &ForecastSync,
) -> Result<()> {
    let mut in_flight: Option<FetchHandle> = None;

    loop {
        if app.needs_fetch && in_flight.is_none() {
            app.start_fetch();
            in_flight = Some(sync.spawn_load());
        }

        terminal.draw(|f| {
            let area = f.area();
            match app.view.phase() {
                Phase::Loading => f.render_widget(LoadingScreen::new(app.tick), area),
                Phase::Error => f.render_widget(ErrorScreen::new(&app.view.error), area),
                Phase::Success => {
                    let screen = ForecastScreen::new(&app.location_name, &app.view.forecast)
                        .with_scroll(app.list_state.scroll);
                    f.render_widget(screen, area);
                }
            }
        })?;

        // Short poll keeps the spinner moving while the fetch runs
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key.code, key.modifiers);
                }
            }
        }

        if in_flight.as_ref().is_some_and(|h| h.is_finished()) {
            if let Some(handle) = in_flight.take() {
                let result = handle
                    .await
                    .unwrap_or_else(|e| Err(PronosticoError::from(e)));
                app.apply_result(result);
            }
        }

        app.on_tick();

        if app.should_quit {
            break;
        }
    }

    if let Some(handle) = in_flight {
        handle.abort();
    }

    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        _ => match app.view.phase() {
            Phase::Error => {
                if matches!(code, KeyCode::Char('r') | KeyCode::Enter) {
                    app.request_retry();
                }
            }
            Phase::Success => match code {
                KeyCode::Up => app.scroll_up(),
                KeyCode::Down => app.scroll_down(),
                _ => {}
            },
            Phase::Loading => {}
        },
    }
}
