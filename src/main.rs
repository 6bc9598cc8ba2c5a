use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use ratatui::DefaultTerminal;

use typeahead::app::App;
use typeahead::binding::FieldBinding;
use typeahead::config::{self, Config};
use typeahead::error::TypeaheadError;
use typeahead::fetch::HttpSuggestSource;

/// How long to wait for input before draining worker responses
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Terminal lookup form with remote typeahead suggestions
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Suggestion endpoint for the region field (overrides the config file)
    #[arg(long, value_name = "URL")]
    region_url: Option<String>,

    /// Suggestion endpoint for the district field (overrides the config file)
    #[arg(long, value_name = "URL")]
    district_url: Option<String>,

    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    init_debug_logging();

    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref())?;
    let app = build_app(&cli, &config)?;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let mouse_capture = execute!(io::stdout(), EnableMouseCapture).is_ok();

    let result = run(terminal, app);

    if mouse_capture {
        let _ = execute!(io::stdout(), DisableMouseCapture);
    }
    ratatui::restore();

    // Emit accepted values once the terminal is back to normal
    if let Some(output) = result? {
        println!("{output}");
    }
    Ok(())
}

/// Construct the form bindings from CLI flags and config
fn build_app(cli: &Cli, config: &Config) -> Result<App> {
    let region_url = cli
        .region_url
        .clone()
        .or_else(|| config.endpoints.region.clone())
        .ok_or_else(|| TypeaheadError::MissingEndpoint("region".to_string()))?;
    let district_url = cli
        .district_url
        .clone()
        .or_else(|| config.endpoints.district.clone())
        .ok_or_else(|| TypeaheadError::MissingEndpoint("district".to_string()))?;

    let bindings = vec![
        FieldBinding::new("Region", HttpSuggestSource::new(&region_url)?),
        FieldBinding::new("District", HttpSuggestSource::new(&district_url)?),
    ];
    Ok(App::new(bindings))
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<Option<String>> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Poll with a short tick so worker responses render promptly even
        // when the user stops typing
        if event::poll(TICK_INTERVAL)? {
            match event::read()? {
                // Only process key press events (avoid duplicates)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key_event(key),
                Event::Mouse(mouse) => app.handle_mouse_event(mouse),
                _ => {}
            }
        }

        app.drain_responses();

        if app.should_quit() {
            return Ok(app.output());
        }
    }
}

/// Route debug logging to a file so it cannot corrupt the TUI
#[cfg(debug_assertions)]
fn init_debug_logging() {
    let path = std::env::temp_dir().join("typeahead.log");
    if let Ok(file) = std::fs::File::create(path) {
        let _ = env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init();
    }
}

#[cfg(not(debug_assertions))]
fn init_debug_logging() {}
