// crates/sigcurve-cli/src/io/sfc.rs

use anyhow::Context;
use sigcurve_core::{Codec, EncodeConfig};

const MAGIC: &[u8; 4] = b"SFC1";
const HEADER_LEN: usize = 4 + 1 + 4 + 4 + 8;

/// Encoded index sequence plus the parameters that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SfcFile {
    pub codec: Codec,
    pub dims: u32,
    pub bits: u32,
    pub indices: Vec<u64>,
}

/// .sfc layout (little-endian):
/// MAGIC[4]
/// codec:u8        (0 = morton, 1 = hilbert)
/// dims:u32
/// bits:u32
/// count:u64
/// indices[count]:u64
/// crc32:u32       (over everything before crc32)
pub fn encode(f: &SfcFile) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + f.indices.len() * 8 + 4);
    out.extend_from_slice(MAGIC);
    out.push(f.codec.id());
    out.extend_from_slice(&f.dims.to_le_bytes());
    out.extend_from_slice(&f.bits.to_le_bytes());
    out.extend_from_slice(&(f.indices.len() as u64).to_le_bytes());
    out.extend_from_slice(&payload_bytes(&f.indices));

    let crc = crc32(&out);
    out.extend_from_slice(&crc.to_le_bytes());
    out
}

/// Validates magic, crc32, codec tag, bit budget and payload length.
pub fn decode(bytes: &[u8]) -> anyhow::Result<SfcFile> {
    if bytes.len() < HEADER_LEN + 4 {
        anyhow::bail!("sfc too small");
    }
    if &bytes[0..4] != MAGIC {
        anyhow::bail!("bad sfc magic");
    }

    let crc_off = bytes.len() - 4;
    let crc_expected = u32::from_le_bytes(take::<4>(bytes, crc_off)?);
    let crc_actual = crc32(&bytes[..crc_off]);
    if crc_expected != crc_actual {
        anyhow::bail!("sfc crc32 mismatch");
    }

    let codec = Codec::from_id(bytes[4])
        .ok_or_else(|| anyhow::anyhow!("unknown codec tag {}", bytes[4]))?;
    let dims = u32::from_le_bytes(take::<4>(bytes, 5)?);
    let bits = u32::from_le_bytes(take::<4>(bytes, 9)?);
    let count = u64::from_le_bytes(take::<8>(bytes, 13)?);

    EncodeConfig::new(dims as usize, bits).context("sfc header")?;

    let payload = &bytes[HEADER_LEN..crc_off];
    if payload.len() % 8 != 0 || (payload.len() / 8) as u64 != count {
        anyhow::bail!(
            "sfc count mismatch: header says {}, payload holds {} bytes",
            count,
            payload.len()
        );
    }

    let indices = payload
        .chunks_exact(8)
        .map(|c| {
            let mut b = [0u8; 8];
            b.copy_from_slice(c);
            u64::from_le_bytes(b)
        })
        .collect();

    Ok(SfcFile {
        codec,
        dims,
        bits,
        indices,
    })
}

pub fn write_sfc(path: &str, f: &SfcFile) -> anyhow::Result<()> {
    std::fs::write(path, encode(f)).with_context(|| format!("write sfc {path}"))?;
    Ok(())
}

pub fn read_sfc(path: &str) -> anyhow::Result<SfcFile> {
    let bytes = std::fs::read(path).with_context(|| format!("read {path}"))?;
    decode(&bytes).with_context(|| format!("decode sfc {path}"))
}

/// First 16 bytes of the blake3 hash of the little-endian index payload, as hex.
pub fn payload_digest_hex(indices: &[u64]) -> String {
    let hash = blake3::hash(&payload_bytes(indices));
    hash.as_bytes()[..16]
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

fn payload_bytes(indices: &[u64]) -> Vec<u8> {
    let mut out = Vec::with_capacity(indices.len() * 8);
    for v in indices {
        out.extend_from_slice(&v.to_le_bytes());
    }
    out
}

fn take<const N: usize>(bytes: &[u8], off: usize) -> anyhow::Result<[u8; N]> {
    let end = off + N;
    if end > bytes.len() {
        anyhow::bail!("sfc truncated at offset {off}");
    }
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[off..end]);
    Ok(out)
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}
