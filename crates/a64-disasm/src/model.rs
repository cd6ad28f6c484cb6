use anyhow::{Context, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Segment {
    pub name: String,
    pub base: u64,
    pub bytes: Vec<u8>,
    pub perms: &'static str, // e.g., "r-x"
    pub kind: &'static str,  // e.g., "raw"
}

#[derive(Debug, Clone)]
pub struct Image {
    pub segments: Vec<Segment>,
}

/// Map a raw binary file as a single segment at `base`, optionally
/// skipping a header and truncating to `len` bytes.
pub fn load_raw_bin(path: &Path, base: u64, skip: usize, len: Option<usize>) -> Result<Image> {
    let data = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    anyhow::ensure!(skip <= data.len(), "--skip exceeds file size");
    let mut bytes = data[skip..].to_vec();
    if let Some(len) = len {
        bytes.truncate(len);
    }
    let seg = Segment { name: "segment0".into(), base, bytes, perms: "r-x", kind: "raw" };
    Ok(Image { segments: vec![seg] })
}

pub fn read_u8(img: &Image, addr: u64) -> Option<u8> {
    for s in &img.segments {
        let end = s.base.wrapping_add(s.bytes.len() as u64);
        if addr >= s.base && addr < end {
            return Some(s.bytes[(addr - s.base) as usize]);
        }
    }
    None
}

pub fn read_u32(img: &Image, addr: u64) -> Option<u32> {
    let b0 = read_u8(img, addr)?;
    let b1 = read_u8(img, addr.wrapping_add(1))?;
    let b2 = read_u8(img, addr.wrapping_add(2))?;
    let b3 = read_u8(img, addr.wrapping_add(3))?;
    Some(u32::from_le_bytes([b0, b1, b2, b3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_maps_skip_and_len() {
        let cwd = std::env::current_dir().unwrap();
        let path = cwd.join("_test_bin.bin");
        std::fs::write(&path, [0u8, 1, 2, 3, 4, 5]).unwrap();
        let img = load_raw_bin(&path, 0x1000_0000, 2, Some(3)).unwrap();
        assert_eq!(img.segments.len(), 1);
        let s = &img.segments[0];
        assert_eq!(s.base, 0x1000_0000);
        assert_eq!(s.bytes, vec![2, 3, 4]);
        assert_eq!(read_u32(&img, 0x1000_0000).unwrap(), 0x00040302);
        assert!(read_u32(&img, 0x1000_0004).is_none());
        let _ = std::fs::remove_file(&path);
    }
}
