use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use minidbg_rs::exception::TrapKind;
use minidbg_rs::{Console, DebuggerSession, LinearMemory, RegFile};

/// Hosted front end for the debugger core: load a raw image, fabricate a
/// trap-time register snapshot, run the command loop on stdio.
#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive AArch64 mini debugger", long_about = None)]
struct Cli {
    /// Raw binary image to map
    #[arg(value_name = "BINFILE")]
    input: PathBuf,
    /// Load address of the image
    #[arg(long, default_value_t = 0x80000)]
    base: u64,
    /// Program counter for the fabricated snapshot (defaults to the base)
    #[arg(long)]
    pc: Option<u64>,
    /// JSON register snapshot (an array of 37 values) to start from
    #[arg(long, value_name = "FILE")]
    regs: Option<PathBuf>,
}

struct StdioConsole;

impl Console for StdioConsole {
    fn getc(&mut self) -> u8 {
        let mut byte = [0u8; 1];
        match std::io::stdin().read_exact(&mut byte) {
            Ok(()) => byte[0],
            Err(_) => b'\n',
        }
    }

    fn putc(&mut self, b: u8) {
        let _ = std::io::stdout().write_all(&[b]);
        if b == b'\n' {
            let _ = std::io::stdout().flush();
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    let image = std::fs::read(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let mut mem = LinearMemory::with_base(cli.base, image.len().max(4096));
    mem.mem[..image.len()].copy_from_slice(&image);

    let mut regs: RegFile = match &cli.regs {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).context("parsing register snapshot")?
        }
        None => RegFile::default(),
    };
    if let Some(pc) = cli.pc {
        regs.regs[minidbg_rs::session::REG_ELR] = pc;
    } else if regs.elr() == 0 {
        regs.regs[minidbg_rs::session::REG_ELR] = cli.base;
    }
    if regs.sp() == 0 {
        regs.regs[minidbg_rs::session::REG_SP] = cli.base;
    }

    let mut console = StdioConsole;
    let mut session = DebuggerSession::new(regs, &mut console, &mut mem);
    session.report_trap(TrapKind::Synchronous)?;
    session.run();
    Ok(())
}
