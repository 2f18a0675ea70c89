//! Compresses a small buffer mixing runs, literals and the escape byte,
//! decodes it back and prints the compression ratio.
//!
//! Run with `RUST_LOG=trace cargo run --example roundtrip` to see every token.

use byterle::{decode, encode, max_encoded_len, ESCAPE};

fn main() -> Result<(), byterle::Error> {
    pretty_env_logger::init();

    let original = [
        b'A', b'A', b'A', b'A', b'A', b'A', // run, FF 06 41
        b'B', b'C', b'D', // literals, 42 43 44
        ESCAPE, // escape byte, FF 01 FF
        b'X', b'X', b'X', // run at the threshold, FF 03 58
    ];
    println!("Original ({} bytes): {:02X?}", original.len(), original);

    let mut compressed = Vec::with_capacity(max_encoded_len(original.len()));
    encode(&original, &mut compressed)?;
    println!("Compressed ({} bytes): {:02X?}", compressed.len(), compressed);

    let decoded = decode(&compressed[..])?;
    println!("Decoded ({} bytes): {:02X?}", decoded.len(), decoded);

    if decoded == original {
        println!("Success: data matched");
    } else {
        println!("Failure: data mismatch");
    }

    let ratio = compressed.len() as f64 / original.len() as f64 * 100.0;
    println!("Compression ratio: {ratio:.2}%");
    Ok(())
}
