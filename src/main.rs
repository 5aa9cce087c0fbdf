mod app;
mod config;
mod error;
mod feed;
mod input;
mod loader;
mod model;
mod ui;

use anyhow::Result;
use app::{App, Effect};
use clap::Parser;
use config::Cli;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use loader::{LoadOutcome, Loader};
use ratatui::{backend::CrosstermBackend, Terminal};
use reqwest::Client;
use std::io::{self, Stdout};
use tokio::sync::mpsc;
use tracing::info;

const USER_AGENT: &str = concat!("newsreel/", env!("CARGO_PKG_VERSION"), " (Rust; TUI)");

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.setup_logging()?;
    info!(url = %cli.url, "starting");

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, cli).await;
    restore_terminal(&mut terminal)?;
    res
}

async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, cli: Cli) -> Result<()> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .build()?;

    let (tx, mut rx) = mpsc::channel::<LoadOutcome>(1);
    let mut loader = Loader::new(client, cli.url, tx);

    let mut app = App::new();
    if let Some(activation) = app.news_activation() {
        loader.start(activation);
    }

    loop {
        // Handle finished loads
        while let Ok(outcome) = rx.try_recv() {
            app.apply_load(outcome.activation, outcome.result);
        }

        terminal.draw(|f| ui::draw(f, &app))?;
        app.on_tick();

        match app.handle(input::poll_action()?) {
            Effect::Quit => break,
            Effect::StartLoad(activation) => loader.start(activation),
            Effect::CancelLoad => loader.cancel(),
            Effect::None => {}
        }
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
