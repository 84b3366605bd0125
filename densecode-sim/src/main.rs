//! densecode CLI entry point

use anyhow::{bail, Context};
use clap::Parser;
use densecode_core::BitPair;
use densecode_sim::{narrate, Cli, Commands, Stage, SuperdenseCoding};
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --log-level
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    let config = cli.config();
    let format = config.display_format();
    let mut protocol = SuperdenseCoding::new(config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Send { bits } => {
            narrate::write_banner(&mut out)?;
            let run = protocol.transmit(bits)?;
            narrate::write_run(&mut out, &run, &format)?;
        },
        Commands::Interactive => {
            narrate::write_banner(&mut out)?;
            let prepared = protocol.prepare_transcript()?;
            narrate::write_steps(&mut out, &prepared.steps, &format)?;

            let stdin = io::stdin();
            let mut input = stdin.lock();
            let first = narrate::prompt_bit(&mut input, &mut out, "First bit")
                .context("reading the first bit")?;
            let second = narrate::prompt_bit(&mut input, &mut out, "Second bit")
                .context("reading the second bit")?;
            writeln!(out)?;

            let run = protocol.complete(prepared, BitPair::new(first, second))?;
            narrate::write_steps(&mut out, run.steps_after(Stage::Entangled), &format)?;
            narrate::write_outcome(&mut out, &run)?;
        },
        Commands::Verify { .. } => {
            let stats = protocol.verify()?;
            narrate::write_verification(&mut out, &stats, protocol.config().sampling)?;
            if stats.failures() > 0 {
                bail!("{} of {} runs decoded the wrong bits", stats.failures(), stats.total_runs());
            }
        },
    }

    Ok(())
}
