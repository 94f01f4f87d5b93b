//! Buffer generation and the byte-wise complement transform

use rand::rngs::OsRng;
use rand::RngCore;

/// Produce a new buffer where every byte is the bitwise complement of the
/// corresponding byte in `data`.
///
/// The transform is self-inverse: applying it twice reproduces the input.
///
/// # Example
/// ```
/// use invertir::invert::invert_buffer;
///
/// let inverted = invert_buffer(&[0x00, 0xFF, 0xA5]);
/// assert_eq!(inverted, vec![0xFF, 0x00, 0x5A]);
/// assert_eq!(invert_buffer(&inverted), vec![0x00, 0xFF, 0xA5]);
/// ```
pub fn invert_buffer(data: &[u8]) -> Vec<u8> {
    data.iter().map(|b| !b).collect()
}

/// Fill a buffer of `size` bytes from the operating system entropy source.
///
/// Fails if the entropy source is unavailable; no partial buffer is returned.
pub fn generate_random_data(size: usize) -> Result<Vec<u8>, rand::Error> {
    let mut data = vec![0u8; size];
    OsRng.try_fill_bytes(&mut data)?;
    Ok(data)
}
