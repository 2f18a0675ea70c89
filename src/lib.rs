//! # Byte RLE Encoding Scheme
//!
//! The stream is a concatenation of tokens.
//!
//! ```text
//!         ┌──────┐
//!         │  b   │   b != 0xFF
//!         └──────┘
//! ```
//!
//! A literal token is any byte other than the escape byte. It decodes to itself.
//!
//! ```text
//!         ┌──────┬───────┬───────┐
//!         │ 0xFF │ count │ value │   count in 1..=255
//!         └──────┴───────┴───────┘
//! ```
//!
//! A run token decodes to `count` copies of `value`.
//!
//! The encoder never writes 0xFF as a literal, so every 0xFF in the stream starts
//! a run token. An input 0xFF is written as a run of its own, at least `FF 01 FF`.
//!
//! Runs shorter than [`RUN_THRESHOLD`] are written as literals since a token costs
//! 3 bytes. Runs longer than [`MAX_RUN`] are split.
//! In worst case (isolated 0xFF bytes) the output is 3 times the input.
//!
//! The decoder accepts run tokens of any non-zero count and any value, so the
//! threshold is an encoder-only policy.
//!
//! The encoding does not include size and does not frame multiple payloads.

#[macro_use]
extern crate log;

mod derle;
mod error;
mod rle;

pub use derle::DeRle;
pub use error::{Error, Malformed, Result};
pub use rle::Rle;

use std::io;

/// marker byte starting every run token
pub const ESCAPE: u8 = 0xFF;
/// minimum run length written as a run token
pub const RUN_THRESHOLD: u8 = 3;
/// largest count of a single run token
pub const MAX_RUN: u8 = 0xFF;

/// Upper bound of the encoded size of `len` input bytes.
pub const fn max_encoded_len(len: usize) -> usize {
    len * 3
}

/// Encodes `input` into `sink` as one complete stream.
pub fn encode<W: io::Write>(input: &[u8], sink: W) -> Result<()> {
    let mut rle = Rle::new(sink);
    io::Write::write_all(&mut rle, input).map_err(Error::Encode)?;
    rle.finalize().map_err(Error::Encode)?;
    debug!("encoded {} bytes", input.len());
    Ok(())
}

/// Decodes a complete stream read from `source` until end of input.
///
/// `source` is read in chunks, no extra buffering is needed.
pub fn decode<R: io::Read>(mut source: R) -> Result<Vec<u8>> {
    let mut derle = DeRle::new(vec![]);
    let mut buf = [0u8; 4096];
    loop {
        let n = match source.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(Error::Decode(err)),
        };
        derle.feed(&buf[..n])?;
    }
    let out = derle.finalize()?;
    debug!("decoded {} bytes", out.len());
    Ok(out)
}

#[cfg(test)]
static INIT: std::sync::Once = std::sync::Once::new();

/// Setup function that is only run once, even if called multiple times.
/// Shared by every test module since there is a single global logger.
#[cfg(test)]
fn setup() {
    INIT.call_once(|| {
        let _ = pretty_env_logger::try_init();
    });
}

/// (input, encoded) pairs in hex
#[cfg(test)]
const TEST_VECTOR: [(&str, &str); 16] = [
    ("", ""),
    ("414141414141", "ff0641"),
    ("424344", "424344"),
    ("ff", "ff01ff"),
    ("585858", "ff0358"),
    ("5858", "5858"),
    (
        "414141414141424344ff585858",
        "ff0641424344ff01ffff0358",
    ),
    ("ffff", "ff02ff"),
    ("0000", "0000"),
    ("00000000", "ff0400"),
    ("41ff41", "41ff01ff41"),
    ("4141ff", "4141ff01ff"),
    ("ff4141", "ff01ff4141"),
    ("0102020303030404040405", "010202ff0303ff040405"),
    ("fefefefeffff", "ff04feff02ff"),
    ("000102fd", "000102fd"),
];
