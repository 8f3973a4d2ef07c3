use reddit_core::{Msg, ParseOptionError, SortBy, TimeRange};
use thiserror::Error;

/// A parsed line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Vec<Msg>),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error(transparent)]
    BadOption(#[from] ParseOptionError),
    #[error("limit must be a positive number, got {0:?}")]
    Limit(String),
    #[error("no recommended topic {0:?}")]
    Topic(String),
    #[error("{0} needs a value")]
    MissingValue(&'static str),
    #[error("unknown command /{0}; type /help")]
    Unknown(String),
}

/// Plain text replaces the input and submits it; `/name value` lines adjust
/// query options.
pub fn parse_line(line: &str, topics: &[String]) -> Result<Command, InputError> {
    let Some(command) = line.trim_start().strip_prefix('/') else {
        return Ok(Command::Dispatch(vec![
            Msg::InputChanged(line.trim_end_matches(['\r', '\n']).to_string()),
            Msg::SearchSubmitted,
        ]));
    };

    let (name, value) = match command.split_once(char::is_whitespace) {
        Some((name, value)) => (name, value.trim()),
        None => (command.trim(), ""),
    };
    let require = |label: &'static str| {
        if value.is_empty() {
            Err(InputError::MissingValue(label))
        } else {
            Ok(value)
        }
    };

    let msg = match name {
        "help" | "h" | "?" => return Ok(Command::Help),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        "search" | "s" => Msg::SearchSubmitted,
        "sort" => Msg::SortChanged(require("/sort")?.parse::<SortBy>()?),
        "time" | "t" => Msg::TimeRangeChanged(require("/time")?.parse::<TimeRange>()?),
        "limit" | "l" => {
            let raw = require("/limit")?;
            match raw.parse::<u32>() {
                Ok(limit) if limit > 0 => Msg::LimitChanged(limit),
                _ => return Err(InputError::Limit(raw.to_string())),
            }
        }
        "topic" => Msg::TopicSelected(resolve_topic(require("/topic")?, topics)?),
        other => return Err(InputError::Unknown(other.to_string())),
    };
    Ok(Command::Dispatch(vec![msg]))
}

/// Accepts a 1-based index into `topics` or a topic name.
fn resolve_topic(value: &str, topics: &[String]) -> Result<String, InputError> {
    let by_index = value
        .parse::<usize>()
        .ok()
        .and_then(|index| index.checked_sub(1))
        .and_then(|index| topics.get(index));
    by_index
        .or_else(|| topics.iter().find(|topic| topic.eq_ignore_ascii_case(value)))
        .cloned()
        .ok_or_else(|| InputError::Topic(value.to_string()))
}
