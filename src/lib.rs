//! # portablemaps
//!
//! PFM (Portable Float Map) and Netpbm (PPM/PGM) image codec.
//!
//! Decoding takes raw bytes and returns a [`PixelMap`]: samples in
//! `(height, width, channels)` order with row 0 at the top, tagged as
//! `f32` (PFM), `u8`, or `u16` (Netpbm, by maxval). Encoding borrows a map
//! and produces the exact byte layout of the target format.
//!
//! ## Supported formats
//!
//! - **PFM** (`Pf`/`PF`) — 32-bit float grayscale/RGB. The sign of the
//!   header's scale field selects payload endianness; file rows run bottom
//!   to top and are flipped on decode.
//! - **P5** (PGM binary) / **P6** (PPM binary) — decode and encode, 1- or
//!   2-byte samples chosen from the header maxval.
//! - **P2** / **P3** (plain ASCII) — decode only.
//!
//! ## Non-goals
//!
//! - P1/P4 bitmaps
//! - Image processing of any kind (resizing, color conversion)
//! - Streaming decode of files larger than memory
//!
//! ## Usage
//!
//! ```no_run
//! use portablemaps::{DecodeRequest, EncodeRequest, ImageInfo, Unstoppable};
//!
//! let data: &[u8] = &[]; // your PFM/PNM bytes
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{}x{} {:?}", info.width, info.height, info.format);
//!
//! // Decode (magic-dispatched)
//! let map = DecodeRequest::new(data).decode(Unstoppable)?;
//!
//! // Encode back to binary Netpbm
//! let encoded = EncodeRequest::pnm().encode(&map, Unstoppable)?;
//! # Ok::<(), portablemaps::CodecError>(())
//! ```
//!
//! With the default `std` feature, [`read_pfm`], [`write_pfm`], [`read_ppm`],
//! and [`write_ppm`] do the same against file paths.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod info;
mod limits;
mod pixel;

mod pfm;
mod pnm;

mod decode;
mod encode;

#[cfg(feature = "std")]
mod files;

// Re-exports
pub use decode::DecodeRequest;
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::CodecError;
pub use info::{ImageInfo, MapFormat};
pub use limits::Limits;
pub use pixel::{PixelMap, SampleType, Samples};

#[cfg(feature = "std")]
pub use files::{read_pfm, read_ppm, write_pfm, write_ppm};
