mod app;
mod domain;
mod editor;
mod input;
mod persistence;
mod report;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{ensure_data_dir, get_data_dir, init_local_dir, load_settings, settings_file, TaskStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Parser)]
#[command(name = "todone")]
#[command(about = "A single-user terminal task tracker with priorities, due dates, and comments", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .todone directory in the current directory
    Init,
    /// Generate a markdown statistics report without entering the TUI
    Stats {
        /// Date to report on (YYYY-MM-DD format). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,
        /// Output file path. Defaults to <data dir>/stats-YYYY-MM-DD.md
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let data_dir = init_local_dir()?;
            println!("Initialized todone directory: {}", data_dir.display());
            println!();
            println!("todone will now use this local directory for task storage.");
            println!("Run 'todone' to start tracking tasks.");
            Ok(())
        }
        Some(Commands::Stats { date, output }) => {
            let report_date = if let Some(date_str) = date {
                Some(
                    chrono::NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
                        .map_err(|e| anyhow::anyhow!("Invalid date format. Use YYYY-MM-DD: {}", e))?,
                )
            } else {
                None
            };

            let output_path = output.map(std::path::PathBuf::from);

            let report_path = report::generate_report(report_date, output_path)?;
            println!("Report generated: {}", report_path.display());
            Ok(())
        }
        None => run_tui(),
    }
}

fn run_tui() -> Result<()> {
    // Ensure the data directory exists
    ensure_data_dir()?;

    // Show which directory we're using
    let data_dir = get_data_dir()?;
    eprintln!("Using todone directory: {}", data_dir.display());

    // Load the task collection and display preferences
    let store = TaskStore::open_default()?;
    let tasks = store.load()?;
    let settings = load_settings(settings_file()?)?;

    let mut app = AppState::new(tasks, store, settings);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save on exit
    if let Err(e) = app.store.save(&app.tasks) {
        eprintln!("Error saving tasks: {}", e);
    }

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Block until the next key; every computation is synchronous and
        // driven by user input, so there is nothing to poll for
        if let Event::Key(key) = event::read()? {
            // Only process key press events (ignore key release)
            if key.kind == KeyEventKind::Press {
                let should_quit = input::handle_key(app, key)?;
                if should_quit {
                    return Ok(());
                }
            }
        }
    }
}
