//! Line-oriented stand-in for the presentation layer.
//!
//! Each stdin line is parsed into a [`Command`], applied to the session,
//! and answered with a one-line snapshot.

use std::str::FromStr;

use thiserror::Error;

use crate::content;
use crate::ui::fact::FactStatus;
use crate::ui::Session;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Like,
    Fact,
    Name,
    Select(usize),
    AutoAdvance(bool),
    Theme,
    Scroll(f32),
    Reveal(String),
    Show,
    About,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{command}' expects {expected}")]
    BadArgument {
        command: &'static str,
        expected: &'static str,
    },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(head) = parts.next() else {
            return Ok(Command::Show);
        };
        let arg = parts.next();

        match head.to_ascii_lowercase().as_str() {
            "like" => Ok(Command::Like),
            "fact" => Ok(Command::Fact),
            "name" => Ok(Command::Name),
            "theme" => Ok(Command::Theme),
            "show" => Ok(Command::Show),
            "about" => Ok(Command::About),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "select" => arg
                .and_then(|a| a.parse().ok())
                .map(Command::Select)
                .ok_or(CommandError::BadArgument {
                    command: "select",
                    expected: "an image index",
                }),
            "auto" => match arg {
                Some("on") => Ok(Command::AutoAdvance(true)),
                Some("off") => Ok(Command::AutoAdvance(false)),
                _ => Err(CommandError::BadArgument {
                    command: "auto",
                    expected: "'on' or 'off'",
                }),
            },
            "scroll" => arg
                .and_then(|a| a.parse().ok())
                .map(Command::Scroll)
                .ok_or(CommandError::BadArgument {
                    command: "scroll",
                    expected: "a scroll position",
                }),
            "reveal" => arg
                .map(|a| Command::Reveal(a.to_string()))
                .ok_or(CommandError::BadArgument {
                    command: "reveal",
                    expected: "a section id",
                }),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

pub const HELP: &str = "commands: like | fact | name | select <n> | auto on|off | theme | \
scroll <pos> | reveal <section> | show | about | quit";

/// What the driver should print after applying a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Snapshot(String),
    Message(String),
    Quit,
}

pub fn apply(session: &mut Session, command: Command) -> Outcome {
    match command {
        Command::Like => session.engagement_mut().like(),
        Command::Fact => {
            if !session.facts_mut().request_fact() {
                return Outcome::Message("fact request already in flight".to_string());
            }
        }
        Command::Name => {
            let name = session.names_mut().generate().to_string();
            return Outcome::Message(format!("your cat name: {}", name));
        }
        Command::Select(index) => {
            if let Err(err) = session.gallery_mut().select(index) {
                return Outcome::Message(err.to_string());
            }
        }
        Command::AutoAdvance(enabled) => session.gallery_mut().set_auto_advance(enabled),
        Command::Theme => session.theme_mut().toggle(),
        Command::Scroll(position) => session.scroll_mut().on_scroll(position),
        Command::Reveal(section) => {
            if !session.scroll_mut().on_section_visible(&section) {
                return Outcome::Message(format!("'{}' already revealed", section));
            }
        }
        Command::Show => {}
        Command::About => return Outcome::Message(about()),
        Command::Help => return Outcome::Message(HELP.to_string()),
        Command::Quit => return Outcome::Quit,
    }
    Outcome::Snapshot(render_snapshot(session))
}

/// One-line summary of every component's state.
pub fn render_snapshot(session: &Session) -> String {
    let likes = session.engagement().state();
    let fact = session.facts().state();
    let gallery = session.gallery().state();
    let scroll = session.scroll().state();

    let fact_text = match fact.status {
        FactStatus::Idle => "idle".to_string(),
        FactStatus::Loading => "loading…".to_string(),
        FactStatus::Loaded => fact.text.clone().unwrap_or_default(),
        FactStatus::Failed => format!(
            "failed ({}){}",
            fact.error_message().unwrap_or("unknown error"),
            fact.text
                .as_deref()
                .map(|t| format!(" last: {}", t))
                .unwrap_or_default()
        ),
    };

    format!(
        "likes={}{} | image {}/{}{} | theme={} | parallax={:.1} opacity={:.2} revealed={} | name={} | fact: {}",
        likes.count,
        if likes.acknowledging { " (thanks!)" } else { "" },
        gallery.current_index + 1,
        gallery.len(),
        if gallery.auto_advance_enabled { " auto" } else { "" },
        session.theme().mode().as_str(),
        scroll.parallax_offset,
        scroll.header_opacity,
        scroll.section_revealed.len(),
        session.names().generated().value.as_deref().unwrap_or("-"),
        fact_text,
    )
}

fn about() -> String {
    format!(
        "{}: {}\ncharacteristics: {}\nbreeds: {}",
        content::TITLE,
        content::TAGLINE,
        content::CHARACTERISTICS.join("; "),
        content::BREEDS.join(", "),
    )
}
