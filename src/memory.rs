use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Raw memory access. On the target this is a window onto physical memory
/// with no bounds checking of its own; an invalid address faults at the
/// hardware level, outside this crate. `LinearMemory` stands in for tests
/// and the hosted binaries.
pub trait Bus {
    fn read_u8(&mut self, addr: u64) -> Result<u8>;
    fn read_u32(&mut self, addr: u64) -> Result<u32>;
    fn write_u8(&mut self, addr: u64, val: u8) -> Result<()>;
    fn write_u32(&mut self, addr: u64, val: u32) -> Result<()>;
}

#[derive(Clone, Serialize, Deserialize)]
pub struct LinearMemory {
    pub mem: Vec<u8>,
    pub base: u64,
}

impl LinearMemory {
    pub fn new(size: usize) -> Self {
        Self { mem: vec![0; size], base: 0 }
    }

    pub fn with_base(base: u64, size: usize) -> Self {
        Self { mem: vec![0; size], base }
    }

    fn offset(&self, addr: u64, len: usize) -> Result<usize> {
        let off = addr.wrapping_sub(self.base) as usize;
        if addr < self.base || off + len > self.mem.len() {
            bail!("address {:#x} outside mapped memory", addr);
        }
        Ok(off)
    }
}

impl Bus for LinearMemory {
    fn read_u8(&mut self, addr: u64) -> Result<u8> {
        let off = self.offset(addr, 1)?;
        Ok(self.mem[off])
    }

    fn read_u32(&mut self, addr: u64) -> Result<u32> {
        let off = self.offset(addr, 4)?;
        Ok(u32::from_le_bytes([
            self.mem[off],
            self.mem[off + 1],
            self.mem[off + 2],
            self.mem[off + 3],
        ]))
    }

    fn write_u8(&mut self, addr: u64, val: u8) -> Result<()> {
        let off = self.offset(addr, 1)?;
        self.mem[off] = val;
        Ok(())
    }

    fn write_u32(&mut self, addr: u64, val: u32) -> Result<()> {
        let off = self.offset(addr, 4)?;
        self.mem[off..off + 4].copy_from_slice(&val.to_le_bytes());
        Ok(())
    }
}
