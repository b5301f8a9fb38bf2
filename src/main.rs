//! ramify: a terminal outline editor for growing nested lists.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use ramify::{app_state, config, outline, persist, ui};
use ratatui::crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ramify")]
#[command(about = "An outline editor for growing nested lists in the terminal", long_about = None)]
struct Args {
    /// Snapshot file to load and save (overrides ramify.toml)
    #[arg(value_name = "SNAPSHOT")]
    snapshot: Option<PathBuf>,

    /// Start from a blank outline, ignoring any existing snapshot
    #[arg(long)]
    fresh: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let cfg = config::Config::load();

    let snapshot_path = args
        .snapshot
        .unwrap_or_else(|| PathBuf::from(&cfg.snapshot));

    let mut load_note = None;
    let outline = if args.fresh {
        outline::Outline::seed()
    } else {
        match persist::load(&snapshot_path) {
            Ok(Some(outline)) if !outline.nodes.is_empty() => outline,
            Ok(_) => outline::Outline::seed(),
            Err(e) => {
                load_note = Some(format!("Ignoring snapshot: {e}"));
                outline::Outline::seed()
            }
        }
    };

    let mut state = app_state::AppState::new(outline, snapshot_path);
    state.message = load_note;

    run_tui(state, &cfg)
}

fn run_tui(mut app: app_state::AppState, cfg: &config::Config) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, cfg);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
    cfg: &config::Config,
) -> io::Result<()> {
    loop {
        // Post-insertion focus hook: runs once per insertion, moving the
        // cursor onto the freshly created node's input for the next frame.
        app.apply_pending_focus();

        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            match app.current_view {
                app_state::View::List => {
                    if app.current_is_editing() {
                        match key.code {
                            KeyCode::Enter => app.commit_current(true),
                            KeyCode::Esc => app.commit_current(false),
                            KeyCode::Tab => app.indent_current(),
                            KeyCode::BackTab => app.dedent_current(),
                            KeyCode::Backspace => app.pop_char(),
                            KeyCode::Char(c) => app.push_char(c),
                            _ => {}
                        }
                    } else {
                        match key.code {
                            KeyCode::Char('q') => {
                                if cfg.autosave_on_quit {
                                    app.save();
                                }
                                return Ok(());
                            }
                            KeyCode::Up => app.move_up(),
                            KeyCode::Down => app.move_down(),
                            KeyCode::Enter => app.insert_sibling(),
                            KeyCode::Char('a') => app.add_child_current(),
                            KeyCode::Tab => app.indent_current(),
                            KeyCode::BackTab => app.dedent_current(),
                            KeyCode::Char(':') => {
                                app.current_view = app_state::View::Command;
                                app.command_buffer.clear();
                                app.message = None;
                            }
                            _ => {}
                        }
                    }
                }
                app_state::View::Command => match key.code {
                    KeyCode::Char(c) => {
                        app.command_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        app.command_buffer.pop();
                    }
                    KeyCode::Enter => {
                        let cmd = app.command_buffer.clone();
                        app.current_view = app_state::View::List;

                        match cmd.as_str() {
                            "w" => {
                                app.save();
                            }
                            "q" => {
                                if cfg.autosave_on_quit {
                                    app.save();
                                }
                                return Ok(());
                            }
                            "q!" => return Ok(()),
                            "wq" | "x" => {
                                if app.save() {
                                    return Ok(());
                                }
                            }
                            _ => {
                                app.message = Some(format!("Unknown command: {cmd}"));
                            }
                        }
                        app.command_buffer.clear();
                    }
                    KeyCode::Esc => {
                        app.current_view = app_state::View::List;
                        app.command_buffer.clear();
                    }
                    _ => {}
                },
            }
        }
    }
}
