//! Deterministic per-tag color selection.
//!
//! # Responsibilities
//! - Hold the curated 256-color palette
//! - Map a tag to a palette entry, stable across instances and runs
//!
//! # Design Decisions
//! - CRC-64 (ISO polynomial) of the tag bytes seeds a fresh generator per call
//! - No shared generator: concurrent construction cannot perturb the result
//! - The draw covers all entries but the last

use crc::{Crc, CRC_64_GO_ISO};

use crate::color::render::Color256;

const TAG_CRC: Crc<u64> = Crc::<u64>::new(&CRC_64_GO_ISO);

/// Terminal 256-color indices readable on dark and light backgrounds.
pub const PALETTE: [u8; 76] = [
    20, 21, 26, 27, 32, 33, 38, 39, 40, 41, 42, 43, 44, 45, 56, 57, 62, 63, 68, 69, 74, 75, 76,
    77, 78, 79, 80, 81, 92, 93, 98, 99, 112, 113, 128, 129, 134, 135, 148, 149, 160, 161, 162, 163,
    164, 165, 166, 167, 168, 169, 170, 171, 172, 173, 178, 179, 184, 185, 196, 197, 198, 199, 200,
    201, 202, 203, 204, 205, 206, 207, 208, 209, 214, 215, 220, 221,
];

/// CRC-64/ISO checksum of the tag's bytes.
pub fn tag_checksum(tag: &str) -> u64 {
    TAG_CRC.checksum(tag.as_bytes())
}

/// Index into [`PALETTE`] for a tag.
pub fn palette_index(tag: &str) -> usize {
    let mut rng = fastrand::Rng::with_seed(tag_checksum(tag));
    rng.u32(..(PALETTE.len() - 1) as u32) as usize
}

/// Pick the color for a tag. The same tag always yields the same color.
pub fn pick_color(tag: &str) -> Color256 {
    Color256::new(PALETTE[palette_index(tag)])
}
