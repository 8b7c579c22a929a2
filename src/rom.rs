/*!
rom.rs - flat binary ROM loading

No header, no checksum: the whole file is the image, written sequentially
starting at address 0. The reset vector (`0xFFFC/D`) must already live
inside that image at the right offset — this loader doesn't special-case
it, it just copies bytes.
*/

use crate::mmu::Mmu;
use std::fs::File;
use std::io::Read;

/// A flat 64 KiB space can't hold more than this many bytes.
const MAX_IMAGE_LEN: usize = 0x10000;

pub fn load(path: &str) -> Result<Vec<u8>, String> {
    let mut file = File::open(path).map_err(|e| format!("failed to open ROM file {path}: {e}"))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer).map_err(|e| format!("failed to read ROM file {path}: {e}"))?;

    if buffer.len() > MAX_IMAGE_LEN {
        return Err(format!(
            "ROM image is {} bytes, which doesn't fit in a 64 KiB address space",
            buffer.len()
        ));
    }

    Ok(buffer)
}

/// Copies `bytes` into `mmu` starting at address 0.
pub fn install(mmu: &mut Mmu, bytes: &[u8]) {
    for (i, byte) in bytes.iter().enumerate() {
        mmu.write_byte(i as u16, *byte);
    }
}
