use anyhow::Result;
use clap::Parser;
use tack::AppState;

/// tack - pin, tag, and search short notes from the terminal
#[derive(Parser)]
#[command(name = "tack")]
#[command(about = "A pin-board style note-taking TUI")]
#[command(version)]
struct Cli {
    /// Start with an empty board instead of the sample notes
    #[arg(long)]
    empty: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Builds the initial state and hands it to the TUI.
fn run(cli: &Cli) -> Result<()> {
    let state = if cli.empty {
        AppState::new()
    } else {
        AppState::with_sample_data()
    };

    tack::tui::run(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_the_empty_flag() {
        let cli = Cli::parse_from(["tack", "--empty"]);
        assert!(cli.empty);

        let cli = Cli::parse_from(["tack"]);
        assert!(!cli.empty);
    }
}
