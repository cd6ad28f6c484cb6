use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use std::path::Path;

use minidbg_rs::decoder::{decode_word, Decoded, NOP_WORD};

mod model;
use model::{load_raw_bin, read_u32, Image};

#[derive(Parser, Debug)]
#[command(author, version, about = "AArch64 disassembler CLI", long_about=None)]
struct Cli {
    /// Load address for the binary in target address space
    #[arg(long, default_value_t = 0u64)]
    base: u64,
    /// Skip N bytes at start of file before loading
    #[arg(long, default_value_t = 0usize)]
    skip: usize,
    /// Input binary path
    #[arg(value_name = "BINFILE")]
    input: String,
    /// Limit bytes loaded (default: to EOF after --skip)
    #[arg(long)]
    len: Option<usize>,
    /// Subcommand
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List loaded segments (simple single-segment for raw .bin)
    Sections,
    /// Disassemble a range [start, end) in bytes
    Range {
        /// Start address (hex or dec)
        start: String,
        /// End address (hex or dec, exclusive)
        end: String,
        /// Show the raw instruction word
        #[arg(long)]
        show_bytes: bool,
        /// Collapse runs of NOP padding into one line
        #[arg(long)]
        squash_nops: bool,
        /// Output format: text or json lines
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, serde::Serialize)]
struct LineOut {
    addr: u64,
    word: u32,
    text: String,
}

fn parse_u64(s: &str) -> Result<u64> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u64::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u64>()?)
    }
}

/// Decode at `pc`, optionally folding NOP runs the way the debugger does.
fn decode_in_image(img: &Image, pc: u64, squash_nops: bool) -> Option<(u32, Decoded)> {
    let word = read_u32(img, pc)?;
    if squash_nops && word == NOP_WORD {
        let mut run: u64 = 1;
        while read_u32(img, pc + run * 4) == Some(NOP_WORD) {
            run += 1;
        }
        if run > 1 {
            return Some((
                word,
                Decoded {
                    mnemonic: format!("{} x nop", run),
                    operands: String::new(),
                    next: pc + run * 4,
                },
            ));
        }
    }
    Some((word, decode_word(word, pc)))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let img = load_raw_bin(Path::new(&cli.input), cli.base, cli.skip, cli.len)?;

    match cli.cmd {
        Command::Sections => {
            println!("{:<10} {:<12} {:<12} {:<6} {:<6}", "name", "start", "end", "perms", "kind");
            for s in &img.segments {
                let start = s.base;
                let end = s.base + (s.bytes.len() as u64);
                println!(
                    "{:<10} {start:#010x} {end:#010x} {:<6} {:<6}",
                    s.name, s.perms, s.kind
                );
            }
        }
        Command::Range { start, end, show_bytes, squash_nops, format, out } => {
            let start = parse_u64(&start)?;
            let end = parse_u64(&end)?;
            anyhow::ensure!(end >= start, "end must be >= start");

            let mut pc = start & !3;
            let end = (end + 3) & !3;
            let mut buf = String::new();
            use std::fmt::Write as _;
            while pc < end {
                let Some((word, d)) = decode_in_image(&img, pc, squash_nops) else {
                    let _ = writeln!(buf, "{pc:#010x}: <oob>");
                    break;
                };
                match format {
                    OutputFormat::Text => {
                        if show_bytes {
                            let _ = writeln!(buf, "{pc:#010x}: {word:08x}  {}", d.text());
                        } else {
                            let _ = writeln!(buf, "{pc:#010x}: {}", d.text());
                        }
                    }
                    OutputFormat::Json => {
                        let line = LineOut { addr: pc, word, text: d.text() };
                        let _ = writeln!(buf, "{}", serde_json::to_string(&line)?);
                    }
                }
                pc = d.next;
            }
            if let Some(path) = out {
                std::fs::write(path, buf)?;
            } else {
                print!("{}", buf);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::model::Segment;

    #[test]
    fn parse_u64_hex_and_dec() {
        assert_eq!(parse_u64("0x10").unwrap(), 0x10);
        assert_eq!(parse_u64("16").unwrap(), 16);
        assert!(parse_u64("zz").is_err());
    }

    #[test]
    fn range_decode_movz() {
        // movz x0, #0x1234
        let bytes = 0xD282_4680u32.to_le_bytes();
        let seg = Segment {
            name: "s".into(),
            base: 0,
            bytes: bytes.to_vec(),
            perms: "r-x",
            kind: "raw",
        };
        let img = Image { segments: vec![seg] };
        let (word, d) = decode_in_image(&img, 0, false).unwrap();
        assert_eq!(word, 0xD282_4680);
        assert_eq!(d.mnemonic, "movz");
        assert_eq!(d.operands, "x0, #0x1234");
    }

    #[test]
    fn nop_runs_fold_when_asked() {
        let mut bytes = Vec::new();
        for _ in 0..3 {
            bytes.extend_from_slice(&NOP_WORD.to_le_bytes());
        }
        let seg = Segment { name: "s".into(), base: 0, bytes, perms: "r-x", kind: "raw" };
        let img = Image { segments: vec![seg] };
        let (_, d) = decode_in_image(&img, 0, true).unwrap();
        assert_eq!(d.mnemonic, "3 x nop");
        assert_eq!(d.next, 12);
        let (_, single) = decode_in_image(&img, 0, false).unwrap();
        assert_eq!(single.mnemonic, "nop");
        assert_eq!(single.next, 4);
    }
}
