//! Character I/O seam.
//!
//! On the target this is the UART; in tests and the hosted demo it is a
//! byte buffer or stdio. All debugger output funnels through `put_str`, so
//! a single implementation decides where text lands.

pub trait Console {
    /// Blocking read of one byte.
    fn getc(&mut self) -> u8;
    fn putc(&mut self, b: u8);

    fn put_str(&mut self, s: &str) {
        for b in s.bytes() {
            self.putc(b);
        }
    }
}

/// Scripted console: input is drained from a preloaded byte queue, output
/// accumulates in a string. When the script runs dry, reads return `\n`
/// so a blocking loop terminates its current line instead of hanging.
#[derive(Debug, Default)]
pub struct BufferConsole {
    pub input: std::collections::VecDeque<u8>,
    pub output: String,
}

impl BufferConsole {
    pub fn new(script: &str) -> Self {
        Self { input: script.bytes().collect(), output: String::new() }
    }
}

impl Console for BufferConsole {
    fn getc(&mut self) -> u8 {
        self.input.pop_front().unwrap_or(b'\n')
    }

    fn putc(&mut self, b: u8) {
        self.output.push(b as char);
    }
}
