use anyhow::{Result, anyhow, bail};

const BOM_LE: [u8; 2] = [0xFF, 0xFE];
const BOM_BE: [u8; 2] = [0xFE, 0xFF];

/// Decode UTF-16 bytes as written by the MSBuild file tracker
///
/// A byte order mark selects the byte order and is dropped. Without one the
/// data is taken as little-endian, which is what the tracker writes.
pub fn decode_utf16(bytes: &[u8]) -> Result<String> {
    let (body, big_endian) = if bytes.starts_with(&BOM_LE) {
        (&bytes[2..], false)
    } else if bytes.starts_with(&BOM_BE) {
        (&bytes[2..], true)
    } else {
        (bytes, false)
    };

    if body.len() % 2 != 0 {
        bail!("Invalid UTF-16 data: odd number of bytes ({})", body.len());
    }

    let units = body.chunks_exact(2).map(|pair| {
        if big_endian {
            u16::from_be_bytes([pair[0], pair[1]])
        } else {
            u16::from_le_bytes([pair[0], pair[1]])
        }
    });

    char::decode_utf16(units).collect::<Result<String, _>>().map_err(|e| {
        anyhow!("Invalid UTF-16 data: unpaired surrogate {:#06x}", e.unpaired_surrogate())
    })
}
