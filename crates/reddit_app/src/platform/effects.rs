use std::io;
use std::sync::mpsc;
use std::thread;

use reddit_core::{Effect, FetchFailure, Msg, Post};
use reddit_engine::{EngineEvent, EngineHandle, FetchError, FetchSettings, ListingPost};
use search_logging::{search_info, search_warn};

use super::app::ShellEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings, event_tx: mpsc::Sender<ShellEvent>) -> io::Result<Self> {
        let (engine, events) = EngineHandle::spawn(settings)?;
        spawn_event_loop(events, event_tx)?;
        Ok(Self { engine })
    }

    /// Starts fetches and returns the prompts the shell should print.
    pub fn run(&self, effects: Vec<Effect>) -> Vec<String> {
        let mut prompts = Vec::new();
        for effect in effects {
            match effect {
                Effect::Fetch { request_id, url } => {
                    search_info!("Fetch request_id={} url={}", request_id, url);
                    self.engine.fetch(request_id, url);
                }
                Effect::ShowPrompt { message } => prompts.push(message),
            }
        }
        prompts
    }
}

fn spawn_event_loop(
    events: mpsc::Receiver<EngineEvent>,
    event_tx: mpsc::Sender<ShellEvent>,
) -> io::Result<()> {
    thread::Builder::new()
        .name("engine-events".to_string())
        .spawn(move || {
            while let Ok(event) = events.recv() {
                let msg = match event {
                    EngineEvent::FetchCompleted { request_id, result } => Msg::FetchCompleted {
                        request_id,
                        result: result
                            .map(|posts| posts.into_iter().map(map_post).collect())
                            .map_err(|err| {
                                search_warn!("Request {} failed: {}", request_id, err);
                                map_failure(&err)
                            }),
                    },
                };
                if event_tx.send(ShellEvent::Msgs(vec![msg])).is_err() {
                    break;
                }
            }
        })?;
    Ok(())
}

fn map_post(post: ListingPost) -> Post {
    Post {
        id: post.id,
        title: post.title,
        subreddit: post.subreddit,
        permalink: post.permalink,
        created_utc: post.created_utc.map(|secs| secs as i64),
        selftext: post.selftext,
    }
}

fn map_failure(err: &FetchError) -> FetchFailure {
    if err.kind.is_parse() {
        FetchFailure::Parse
    } else {
        FetchFailure::Network
    }
}
