//! Console narration of the protocol
//!
//! Writers and readers are injected so the walkthrough can be driven from
//! tests as well as from a terminal.

use crate::result::{ProtocolRun, ProtocolStep, Stage};
use crate::statistics::TrialStatistics;
use densecode_core::{AmplitudeFormat, Bit};
use densecode_state::SamplingMode;
use std::io::{self, BufRead, Write};

const BANNER: &str = "==============================================";

/// Print the protocol header
pub fn write_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", BANNER)?;
    writeln!(out, "==========Superdense coding protocol==========")?;
    writeln!(out, "{}", BANNER)?;
    writeln!(out)
}

/// Narrate transcript snapshots in protocol order
///
/// Each snapshot is preceded by the story of how the qubits moved between
/// Eve, Alice and Bob up to that point.
pub fn write_steps(out: &mut impl Write, steps: &[ProtocolStep], format: &AmplitudeFormat) -> io::Result<()> {
    for step in steps {
        if step.stage == Stage::Disentangled {
            writeln!(out, "Because Alice and Bob's qubits were entangled by Eve,")?;
            writeln!(out, "Alice's operations affect both, despite being far apart.")?;
            writeln!(out)?;
            writeln!(out, "Alice sends her qubit to Bob. Now Bob has both original qubits.")?;
            writeln!(out)?;
            writeln!(out, "Bob applies a reverse operation of Eve's original operation")?;
        }
        writeln!(out, "{}", step.render(format))?;
        writeln!(out)?;

        if step.stage == Stage::Entangled {
            writeln!(out, "Eve sends one qubit to Alice and another to Bob.")?;
            writeln!(out)?;
            writeln!(out, "Alice wants to encode two classical bits to send to Bob")?;
            writeln!(out, "with only her one qubit")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Print what Bob measured against what Alice sent
pub fn write_outcome(out: &mut impl Write, run: &ProtocolRun) -> io::Result<()> {
    writeln!(
        out,
        "The result of Bob's measurement is {}, Alice's two bits were {}.",
        run.received, run.sent
    )
}

/// Narrate a whole run
pub fn write_run(out: &mut impl Write, run: &ProtocolRun, format: &AmplitudeFormat) -> io::Result<()> {
    write_steps(out, &run.steps, format)?;
    write_outcome(out, run)
}

/// Print the success table of a verification batch with its throughput
pub fn write_verification(
    out: &mut impl Write,
    stats: &TrialStatistics,
    sampling: SamplingMode,
) -> io::Result<()> {
    writeln!(out, "sampling: {}", sampling)?;
    writeln!(out, "{}", stats)?;
    writeln!(
        out,
        "elapsed {:.3}s ({:.0} runs/s)",
        stats.elapsed.as_secs_f64(),
        stats.runs_per_second()
    )
}

/// Prompt until the reader supplies a single 0 or 1
///
/// Returns `UnexpectedEof` if input ends before a valid bit is read.
pub fn prompt_bit(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> io::Result<Bit> {
    let mut line = String::new();
    loop {
        write!(out, "{}: ", label)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("input ended while reading {}", label.to_lowercase()),
            ));
        }

        match line.parse::<Bit>() {
            Ok(bit) => return Ok(bit),
            Err(_) => writeln!(out, "Wrong input (0 or 1 only)")?,
        }
    }
}
