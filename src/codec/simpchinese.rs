// This is a part of whatwg-encoder.
// Copyright (c) 2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Legacy simplified Chinese encodings.

use encoding_index_simpchinese::{gb18030, gb18030_ranges};

use crate::types::*;

// U+E7C7 sits in a hole of the ranges table.
fn gb18030_ranges_pointer(ch: char) -> u32 {
    if ch == '\u{e7c7}' {
        7457
    } else {
        gb18030_ranges::backward(ch as u32)
    }
}

/**
 * GB 18030 and its two-byte-only predecessor GBK.
 *
 * GB 18030 is a simplified Chinese encoding which covers all Unicode
 * scalar values: a two-byte area `[81-FE] [40-7E 80-FE]` indexed like the
 * other legacy encodings, and a four-byte area `[81-FE] [30-39] [81-FE]
 * [30-39]` whose pointers are interpolated from a compact table of
 * ranges. The sole exception is U+E5E5, a permanent hole reported as
 * unrepresentable.
 *
 * With the `gbk` flag set the encoder is restricted to the two-byte area;
 * the euro sign then maps to the bare byte `80` and everything without a
 * two-byte representation is an error.
 */
#[derive(Clone, Copy)]
pub struct GB18030Encoder {
    pub(crate) gbk: bool,
}

impl Encoder for GB18030Encoder {
    fn name(&self) -> &'static str {
        if self.gbk { "gbk" } else { "gb18030" }
    }

    fn process(&self, input: &str, mode: ErrorMode, output: &mut dyn ByteSink)
        -> Result<(), EncodeError>
    {
        output.writer_hint(input.len());

        for ch in input.chars() {
            if ch < '\u{80}' {
                output.write_byte(ch as u8, ByteClass::Ordinary)?;
                continue;
            }
            if ch == '\u{e5e5}' {
                mode.handle(ch, output)?;
                continue;
            }
            if self.gbk && ch == '\u{20ac}' {
                output.write_byte(0x80, ByteClass::Ordinary)?;
                continue;
            }
            let ptr = gb18030::backward(ch as u32);
            if ptr != 0xffff {
                let lead = ptr / 190 + 0x81;
                let trail = ptr % 190;
                let trailoffset = if trail < 0x3f { 0x40 } else { 0x41 };
                output.write_byte(lead as u8, ByteClass::Ordinary)?;
                output.write_byte((trail + trailoffset) as u8, ByteClass::Ordinary)?;
                continue;
            }
            if self.gbk {
                mode.handle(ch, output)?;
                continue;
            }
            let ptr = gb18030_ranges_pointer(ch);
            let (ptr, byte4) = (ptr / 10, ptr % 10);
            let (ptr, byte3) = (ptr / 126, ptr % 126);
            let (byte1, byte2) = (ptr / 10, ptr % 10);
            output.write_byte((byte1 + 0x81) as u8, ByteClass::Ordinary)?;
            output.write_byte((byte2 + 0x30) as u8, ByteClass::Ordinary)?;
            output.write_byte((byte3 + 0x81) as u8, ByteClass::Ordinary)?;
            output.write_byte((byte4 + 0x30) as u8, ByteClass::Ordinary)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod gb18030_tests {
    use crate::all::{GB18030, GBK};
    use crate::types::*;

    #[test]
    fn test_two_byte_area() {
        assert_eq!(GB18030.encode("A", ErrorMode::Replacement).unwrap(), [0x41]);
        assert_eq!(GB18030.encode("\u{4e2d}", ErrorMode::Replacement).unwrap(), [0xd6, 0xd0]);
        assert_eq!(GB18030.encode("\u{20ac}", ErrorMode::Replacement).unwrap(), [0xa2, 0xe3]);
    }

    #[test]
    fn test_four_byte_area() {
        assert_eq!(GB18030.encode("\u{80}", ErrorMode::Replacement).unwrap(),
                   [0x81, 0x30, 0x81, 0x30]);
        assert_eq!(GB18030.encode("\u{df}", ErrorMode::Replacement).unwrap(),
                   [0x81, 0x30, 0x89, 0x38]);
        assert_eq!(GB18030.encode("\u{df}\u{1d11e}", ErrorMode::Replacement).unwrap(),
                   [0x81, 0x30, 0x89, 0x38, 0x94, 0x32, 0xbe, 0x34]);
        assert_eq!(GB18030.encode("\u{10ffff}", ErrorMode::Replacement).unwrap(),
                   [0xe3, 0x32, 0x9a, 0x35]);
    }

    #[test]
    fn test_permanent_hole() {
        assert_eq!(GB18030.encode("\u{e5e5}", ErrorMode::Replacement).unwrap(), [0xff, 0xfd]);
        assert_eq!(GBK.encode("\u{e5e5}", ErrorMode::Replacement).unwrap(), [0xff, 0xfd]);
        match GB18030.encode("\u{e5e5}", ErrorMode::Fatal) {
            Err(EncodeError::Unrepresentable(ch)) => assert_eq!(ch, '\u{e5e5}'),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_gbk_mode() {
        assert_eq!(GBK.encode("\u{20ac}", ErrorMode::Replacement).unwrap(), [0x80]);
        assert_eq!(GBK.encode("\u{4e2d}", ErrorMode::Replacement).unwrap(), [0xd6, 0xd0]);
        // no four-byte fallback here
        assert_eq!(GBK.encode("\u{1d11e}", ErrorMode::Replacement).unwrap(), [0xff, 0xfd]);
        assert!(GBK.encode("\u{1d11e}", ErrorMode::Fatal).is_err());
    }

    #[test]
    fn test_total_but_for_the_hole() {
        // a grab bag around the interesting boundaries, none of which may
        // error out without the gbk flag
        let samples = "\u{80}\u{a3}\u{e5e4}\u{e5e6}\u{ffff}\u{10000}\u{10fffe}";
        assert!(GB18030.encode(samples, ErrorMode::Fatal).is_ok());
    }
}
