//! Single-line editor over a raw byte stream.
//!
//! Recognizes printable insertion at the cursor, backspace, forward delete
//! (`ESC [ 3 ~`) and cursor movement (`ESC [ D` / `ESC [ C`). After every
//! edit the whole line is redrawn and the cursor repositioned with an
//! absolute CSI placement; display state is always rebuilt from the buffer,
//! never patched incrementally.

use tracing::trace;

use crate::console::Console;

/// Buffer capacity. Printable input past this point is silently dropped.
pub const LINE_CAPACITY: usize = 256;

// internal codes for the recognized CSI sequences
const KEY_DELETE: u8 = 1;
const KEY_LEFT: u8 = 2;
const KEY_RIGHT: u8 = 3;

#[derive(Debug, Default)]
pub struct LineEditor {
    buf: Vec<u8>,
    cursor: usize,
}

impl LineEditor {
    pub fn new() -> Self {
        Self { buf: Vec::with_capacity(LINE_CAPACITY), cursor: 0 }
    }

    /// Read one line, blocking until `\n` is received. The prompt is drawn
    /// before the first read and after every edit.
    pub fn read_line<C: Console>(&mut self, console: &mut C) -> String {
        self.buf.clear();
        self.cursor = 0;
        console.put_str("\r> ");
        loop {
            let c = self.next_key(console);
            match c {
                b'\n' => break,
                8 | 127 => {
                    if self.cursor > 0 {
                        self.cursor -= 1;
                        self.buf.remove(self.cursor);
                    }
                }
                KEY_DELETE => {
                    if self.cursor < self.buf.len() {
                        self.buf.remove(self.cursor);
                    }
                }
                KEY_LEFT => {
                    if self.cursor > 0 {
                        self.cursor -= 1;
                    }
                }
                KEY_RIGHT => {
                    if self.cursor < self.buf.len() {
                        self.cursor += 1;
                    }
                }
                c if c < b' ' => continue,
                c => {
                    if self.buf.len() >= LINE_CAPACITY {
                        continue;
                    }
                    self.buf.insert(self.cursor, c);
                    self.cursor += 1;
                }
            }
            self.redraw(console);
        }
        console.put_str("\n");
        String::from_utf8_lossy(&self.buf).into_owned()
    }

    /// Fold `ESC [ ...` sequences into single key codes; anything else
    /// passes through unchanged.
    fn next_key<C: Console>(&mut self, console: &mut C) -> u8 {
        let c = console.getc();
        if c != 27 {
            return c;
        }
        if console.getc() != b'[' {
            return 0;
        }
        match console.getc() {
            b'C' => KEY_RIGHT,
            b'D' => KEY_LEFT,
            b'3' => {
                if console.getc() == b'~' {
                    KEY_DELETE
                } else {
                    0
                }
            }
            other => {
                trace!(code = other, "unhandled CSI sequence");
                0
            }
        }
    }

    fn redraw<C: Console>(&self, console: &mut C) {
        // trailing space wipes a char left behind by deletion, then the
        // cursor is placed absolutely past the "> " prompt
        console.put_str("\r> ");
        console.put_str(&String::from_utf8_lossy(&self.buf));
        console.put_str(" ");
        console.put_str(&format!("\r\x1b[{}C", self.cursor + 2));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::BufferConsole;

    #[test]
    fn plain_line() {
        let mut console = BufferConsole::new("r\n");
        assert_eq!(LineEditor::new().read_line(&mut console), "r");
    }

    #[test]
    fn backspace_removes_left_of_cursor() {
        let mut console = BufferConsole::new("xy\x08z\n");
        assert_eq!(LineEditor::new().read_line(&mut console), "xz");
    }

    #[test]
    fn cursor_left_and_insert() {
        // "ac", cursor left, insert "b"
        let mut console = BufferConsole::new("ac\x1b[Db\n");
        assert_eq!(LineEditor::new().read_line(&mut console), "abc");
    }

    #[test]
    fn forward_delete() {
        // move left twice, forward-delete removes the char under the cursor
        let mut console = BufferConsole::new("ab\x1b[D\x1b[D\x1b[3~\n");
        assert_eq!(LineEditor::new().read_line(&mut console), "b");
    }
}
