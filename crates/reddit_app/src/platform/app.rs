use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use log::LevelFilter;
use reddit_core::{update, AppState, Msg};
use search_logging::{search_debug, search_info, search_warn};

use super::cli::Args;
use super::config::load_config;
use super::effects::EffectRunner;
use super::logging;
use super::ui::input::{parse_line, Command};
use super::ui::render;

/// Everything the main loop reacts to.
pub enum ShellEvent {
    Msgs(Vec<Msg>),
    Help,
    InputError(String),
    Quit,
}

pub fn run_app(args: Args) -> anyhow::Result<()> {
    let level = args.log_level.trim().parse::<LevelFilter>().ok();
    logging::initialize(args.log_to, level.unwrap_or(LevelFilter::Info));
    if level.is_none() {
        search_warn!("Unknown log level {:?}; using info", args.log_level);
    }

    let config = load_config(&args.config).apply_args(&args);
    let session = config.session_config();
    search_info!(
        "Starting in {:?} mode against {}",
        session.mode,
        session.base_url
    );

    let (event_tx, event_rx) = mpsc::channel::<ShellEvent>();
    let runner = EffectRunner::new(config.fetch_settings(), event_tx.clone())
        .context("failed to start fetch engine")?;
    spawn_input_reader(event_tx, session.recommended_topics.clone())
        .context("failed to start input reader")?;

    let stdout = io::stdout();
    let mut shell = Shell {
        state: AppState::with_config(session),
        runner,
        out: stdout.lock(),
    };
    shell.write_lines(&render::help_lines())?;
    shell.dispatch(vec![Msg::Startup])?;
    shell.render()?;

    while let Ok(event) = event_rx.recv() {
        match event {
            ShellEvent::Msgs(msgs) => shell.dispatch(msgs)?,
            ShellEvent::Help => shell.write_lines(&render::help_lines())?,
            ShellEvent::InputError(message) => {
                shell.write_lines(&[render::render_prompt(&message)])?;
            }
            ShellEvent::Quit => break,
        }
    }

    search_info!("Shutting down");
    Ok(())
}

struct Shell<W: Write> {
    state: AppState,
    runner: EffectRunner,
    out: W,
}

impl<W: Write> Shell<W> {
    fn dispatch(&mut self, msgs: Vec<Msg>) -> io::Result<()> {
        let mut prompts = Vec::new();
        for msg in msgs {
            if let Msg::FetchCompleted { request_id, .. } = &msg {
                if self.state.in_flight_request() != Some(*request_id) {
                    search_debug!("Discarding stale completion for request {}", request_id);
                }
            }
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            prompts.extend(self.runner.run(effects));
        }

        if self.state.consume_dirty() {
            self.render()?;
        }
        let prompts: Vec<String> = prompts
            .iter()
            .map(|message| render::render_prompt(message))
            .collect();
        self.write_lines(&prompts)
    }

    fn render(&mut self) -> io::Result<()> {
        let lines = render::render(&self.state.view());
        self.write_lines(&lines)
    }

    fn write_lines(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }
}

fn spawn_input_reader(
    event_tx: mpsc::Sender<ShellEvent>,
    topics: Vec<String>,
) -> io::Result<()> {
    thread::Builder::new()
        .name("stdin".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                let event = match parse_line(&line, &topics) {
                    Ok(Command::Dispatch(msgs)) => ShellEvent::Msgs(msgs),
                    Ok(Command::Help) => ShellEvent::Help,
                    Ok(Command::Quit) => ShellEvent::Quit,
                    Err(err) => ShellEvent::InputError(err.to_string()),
                };
                if event_tx.send(event).is_err() {
                    return;
                }
            }
            let _ = event_tx.send(ShellEvent::Quit);
        })?;
    Ok(())
}
