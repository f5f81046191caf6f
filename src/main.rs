use std::env;
use std::fs;
use std::io;
use std::time::Duration;
use std::time::Instant;

use anyhow::Context;
use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::style;
use crossterm::style::Color;
use crossterm::terminal;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use gridlife::config::Config;
use gridlife::events::AppEvent;
use gridlife::events::Event;
use gridlife::events::SimEvent;
use gridlife::grid::Grid;
use gridlife::io::convert_event;
use gridlife::render::Frame;
use gridlife::sim::Simulation;

/// How often to wake up and redraw while paused
const IDLE_POLL: Duration = Duration::from_millis(50);

const TITLE: &str = "CONWAY'S GAME OF LIFE";

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the raw-mode screen stays clean; redirect stderr
    // to a file to capture them
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config::default();
    let now = Instant::now();

    // An optional plaintext pattern file replaces the random seed
    let mut sim = match env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read pattern file {path}"))?;
            let pattern = Grid::from_plaintext(&text)?;
            let grid = Grid::with_pattern(config.rows, config.cols, &pattern)?;

            Simulation::from_grid(&config, grid, now)
        }
        None => Simulation::new(&config, now),
    };

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let res = run(&mut sim, &config, &mut stdout);

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}

fn run(
    sim: &mut Simulation<StdRng>,
    config: &Config,
    stdout: &mut io::Stdout,
) -> anyhow::Result<()> {
    let mut frame = Frame::new(config.rows, config.cols);

    loop {
        let now = Instant::now();

        // Sleep in the input poll until the next step is due
        let timeout = match sim.next_due() {
            Some(due) => due.saturating_duration_since(now),
            None => IDLE_POLL,
        };

        if event::poll(timeout)? {
            match convert_event(event::read()?) {
                Some(Event::AppEvent(AppEvent::Exit)) => break,
                Some(Event::SimEvent(SimEvent::ToggleRunning)) => {
                    sim.toggle_running(Instant::now())
                }
                Some(Event::SimEvent(SimEvent::Reset)) => sim.reset(),
                None => {}
            }
        }

        sim.poll(Instant::now());

        draw(stdout, &mut frame, sim)?;
    }

    Ok(())
}

fn draw(
    stdout: &mut io::Stdout,
    frame: &mut Frame,
    sim: &Simulation<StdRng>,
) -> anyhow::Result<()> {
    let board_lines = sim.grid().rows() + 2;
    let s = frame.render(sim.grid(), sim.generation(), sim.is_running());

    execute!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
        style::Print(TITLE),
        cursor::MoveToNextLine(1),
        style::SetForegroundColor(Color::Green),
    )?;

    for (i, line) in s.lines().enumerate() {
        if i == board_lines {
            execute!(stdout, style::ResetColor)?;
        }

        execute!(stdout, style::Print(line), cursor::MoveToNextLine(1))?;
    }

    execute!(stdout, style::ResetColor)?;

    Ok(())
}
