use analog::sys::server::{ControlCommand, SOCKET_PATH};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::os::unix::net::UnixStream;

#[derive(Parser, Debug)]
#[command(name = "analogctl", version, about = "Control a running analog clock", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Show the clock
    Show,
    /// Hide the clock
    Hide,
    /// Close the clock
    Quit,
    /// Make the clock one step larger
    Grow,
    /// Make the clock one step smaller
    Shrink,
    /// Set the clock diameter in pixels (100-500, steps of 10)
    Size {
        diameter: f64,
    },
}

impl From<Commands> for ControlCommand {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Show => ControlCommand::Show,
            Commands::Hide => ControlCommand::Hide,
            Commands::Quit => ControlCommand::Quit,
            Commands::Grow => ControlCommand::Grow,
            Commands::Shrink => ControlCommand::Shrink,
            Commands::Size { diameter } => ControlCommand::Size(diameter),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let command = ControlCommand::from(cli.command);
    if let ControlCommand::Size(d) = command
        && !d.is_finite()
    {
        anyhow::bail!("Diameter must be a finite number, got {}", d);
    }

    send_command(command)
}

fn send_command(command: ControlCommand) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to analog at {}: {}. Is the clock running?",
            SOCKET_PATH,
            e
        )
    })?;

    log::debug!("Sending '{}'", command);
    writeln!(stream, "{}", command)?;
    Ok(())
}
