use crate::{entropy::Entropy, error::Result, source::Source};

/// Returns the high nibble for byte 8 selected by the spare byte.
fn variant(spare: u8) -> u8 {
    match spare {
        0x00..=0x3F => 0x80,
        0x40..=0x7F => 0x90,
        0x80..=0xBF => 0xA0,
        0xC0..=0xFF => 0xB0,
    }
}

impl Entropy {
    /// Returns a random identifier laid out like a version 4 UUID,
    /// e.g. `3f2a9c1e-07d4-4b1a-9e2f-5c6d7e8f9a0b`.
    ///
    /// Seventeen bytes are read from the secure generator. The high nibble of byte 6 is set to
    /// `4`, the high nibble of byte 8 to one of `8`, `9`, `a` or `b` depending on byte 16, and
    /// bytes 0 to 15 are printed as lower case hex in groups of 4, 2, 2, 2 and 6 bytes. Byte 16
    /// only picks the variant and is not part of the output.
    ///
    /// The result is meant as an opaque unique name. It does not claim conformance with RFC 9562.
    pub fn uuid(&self) -> Result<String> {
        let mut b = [0u8; 17];
        self.fill(&mut b, &Source::Secure)?;
        b[6] = (b[6] & 0x0f) | 0x40;
        b[8] = (b[8] & 0x0f) | variant(b[16]);
        Ok(format!(
            "{}-{}-{}-{}-{}",
            hex::encode(&b[0..4]),
            hex::encode(&b[4..6]),
            hex::encode(&b[6..8]),
            hex::encode(&b[8..10]),
            hex::encode(&b[10..16]),
        ))
    }
}
