//! Deterministic URL-to-short-key encoding.
//!
//! A short key is the murmur3 32-bit hash of the URL's UTF-8 bytes, taken
//! with a fixed seed and written in base-62. The same URL always produces
//! the same key, in any process, at any time; key generation never consults
//! storage. Distinct URLs can hash to the same key; that collision is
//! expected here and handled by the shorten service.

/// Fixed murmur3 seed. Changing it would re-key every stored mapping,
/// so it is part of the persistence contract.
const HASH_SEED: u32 = 10010;

/// Base-62 alphabet: digits, then lowercase, then uppercase. Case-sensitive.
const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Encodes a URL into its deterministic short key.
///
/// Pure and infallible for any Unicode string. The 32-bit hash word is
/// treated as unsigned before base-62 conversion so the full signed range
/// encodes consistently.
pub fn encode(url: &str) -> String {
    base62(murmur3_32(url.as_bytes(), HASH_SEED))
}

/// murmur3 x86 32-bit.
fn murmur3_32(data: &[u8], seed: u32) -> u32 {
    const C1: u32 = 0xcc9e_2d51;
    const C2: u32 = 0x1b87_3593;

    let mut h = seed;
    let mut chunks = data.chunks_exact(4);

    for chunk in chunks.by_ref() {
        let mut k = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        k = k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2);
        h ^= k;
        h = h.rotate_left(13).wrapping_mul(5).wrapping_add(0xe654_6b64);
    }

    let tail = chunks.remainder();
    if !tail.is_empty() {
        let mut k: u32 = 0;
        for (i, &b) in tail.iter().enumerate() {
            k ^= u32::from(b) << (8 * i);
        }
        k = k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2);
        h ^= k;
    }

    h ^= data.len() as u32;
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^ (h >> 16)
}

/// Writes `n` in base-62, most significant digit first, no padding.
fn base62(mut n: u32) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::with_capacity(6);
    while n > 0 {
        digits.push(ALPHABET[(n % 62) as usize]);
        n /= 62;
    }

    digits.iter().rev().map(|&b| char::from(b)).collect()
}
