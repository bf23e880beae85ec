use crate::events::AppEvent;
use crate::prefs::SizeChange;
use async_channel::Sender;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UnixListener;

pub const SOCKET_PATH: &str = "/tmp/analog.sock";

/// One line of the control protocol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlCommand {
    Show,
    Hide,
    Quit,
    Grow,
    Shrink,
    Size(f64),
}

#[derive(Error, Debug, PartialEq)]
pub enum CommandParseError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}'")]
    Unknown(String),
    #[error("'size' needs a diameter in pixels")]
    MissingSize,
    #[error("Invalid diameter '{0}'")]
    InvalidSize(String),
}

impl FromStr for ControlCommand {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandParseError::Empty)?;

        let command = match verb.to_ascii_lowercase().as_str() {
            "show" => Self::Show,
            "hide" => Self::Hide,
            "quit" => Self::Quit,
            "grow" => Self::Grow,
            "shrink" => Self::Shrink,
            "size" => {
                let arg = words.next().ok_or(CommandParseError::MissingSize)?;
                let diameter = arg
                    .parse::<f64>()
                    .ok()
                    .filter(|d| d.is_finite())
                    .ok_or_else(|| CommandParseError::InvalidSize(arg.to_string()))?;
                Self::Size(diameter)
            }
            other => return Err(CommandParseError::Unknown(other.to_string())),
        };

        match words.next() {
            Some(extra) => Err(CommandParseError::Unknown(format!("{} {}", verb, extra))),
            None => Ok(command),
        }
    }
}

impl fmt::Display for ControlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Show => write!(f, "show"),
            Self::Hide => write!(f, "hide"),
            Self::Quit => write!(f, "quit"),
            Self::Grow => write!(f, "grow"),
            Self::Shrink => write!(f, "shrink"),
            Self::Size(d) => write!(f, "size {}", d),
        }
    }
}

impl From<ControlCommand> for AppEvent {
    fn from(command: ControlCommand) -> Self {
        match command {
            ControlCommand::Show => AppEvent::Show,
            ControlCommand::Hide => AppEvent::Hide,
            ControlCommand::Quit => AppEvent::Quit,
            ControlCommand::Grow => AppEvent::Resize(SizeChange::Grow),
            ControlCommand::Shrink => AppEvent::Resize(SizeChange::Shrink),
            ControlCommand::Size(d) => AppEvent::Resize(SizeChange::Set(d)),
        }
    }
}

pub async fn run_server(tx: Sender<AppEvent>) {
    // Cleanup old socket if it exists
    if std::fs::metadata(SOCKET_PATH).is_ok() {
        let _ = std::fs::remove_file(SOCKET_PATH);
    }

    let listener = match UnixListener::bind(SOCKET_PATH) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind unix socket: {}", e);
            return;
        }
    };

    loop {
        match listener.accept().await {
            Ok((mut stream, _)) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    let reader = BufReader::new(&mut stream);
                    let mut lines = reader.lines();

                    while let Ok(Some(line)) = lines.next_line().await {
                        match line.parse::<ControlCommand>() {
                            Ok(command) => {
                                log::debug!("Control command: {}", command);
                                if tx.send(command.into()).await.is_err() {
                                    break;
                                }
                            }
                            Err(CommandParseError::Empty) => {}
                            Err(e) => log::warn!("Ignoring control line: {}", e),
                        }
                    }
                });
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        let cases = vec![
            ("show", ControlCommand::Show),
            ("  HIDE ", ControlCommand::Hide),
            ("quit", ControlCommand::Quit),
            ("grow", ControlCommand::Grow),
            ("shrink", ControlCommand::Shrink),
            ("size 250", ControlCommand::Size(250.0)),
            ("size   120.5", ControlCommand::Size(120.5)),
        ];

        for (line, expected) in cases {
            assert_eq!(line.parse::<ControlCommand>(), Ok(expected), "{line:?}");
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<ControlCommand>(), Err(CommandParseError::Empty));
        assert_eq!(
            "size".parse::<ControlCommand>(),
            Err(CommandParseError::MissingSize)
        );
        assert_eq!(
            "size big".parse::<ControlCommand>(),
            Err(CommandParseError::InvalidSize("big".to_string()))
        );
        assert_eq!(
            "size inf".parse::<ControlCommand>(),
            Err(CommandParseError::InvalidSize("inf".to_string()))
        );
        assert_eq!(
            "toggle".parse::<ControlCommand>(),
            Err(CommandParseError::Unknown("toggle".to_string()))
        );
        assert!("show now".parse::<ControlCommand>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for command in [
            ControlCommand::Show,
            ControlCommand::Quit,
            ControlCommand::Size(340.0),
        ] {
            assert_eq!(command.to_string().parse::<ControlCommand>(), Ok(command));
        }
    }

    #[test]
    fn test_commands_map_to_events() {
        assert!(matches!(
            AppEvent::from(ControlCommand::Size(200.0)),
            AppEvent::Resize(SizeChange::Set(d)) if d == 200.0
        ));
        assert!(matches!(
            AppEvent::from(ControlCommand::Grow),
            AppEvent::Resize(SizeChange::Grow)
        ));
        assert!(matches!(AppEvent::from(ControlCommand::Quit), AppEvent::Quit));
    }
}
