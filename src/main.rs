#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use naval_duel::{init_logging, run_game, Console, DirectorySink, NullSink, SnapshotSink, SNAPSHOT_DIR};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use std::io;

/// Two-player naval combat on a shared terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, default_value = SNAPSHOT_DIR, help = "Directory for per-turn board snapshots")]
    snapshot_dir: String,
    #[arg(long, help = "Do not write board snapshots")]
    no_snapshots: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut sink: Box<dyn SnapshotSink> = if cli.no_snapshots {
        Box::new(NullSink)
    } else {
        Box::new(DirectorySink::new(&cli.snapshot_dir))
    };

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    run_game(&mut console, &mut sink)?;
    Ok(())
}
