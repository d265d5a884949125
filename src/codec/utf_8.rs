// This is a part of whatwg-encoder.
// Copyright (c) 2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! UTF-8, the universal encoding.

use crate::types::*;

/**
 * UTF-8 (UCS Transformation Format, 8-bit).
 *
 * This is a Unicode encoding compatible to ASCII (`[00-7F]`) and able to
 * represent all Unicode scalar values, with one byte per code point below
 * U+0080 and two to four bytes otherwise. Since every scalar value has a
 * representation, this is the only encoder in the family that never calls
 * the error handler.
 */
#[derive(Clone, Copy)]
pub struct UTF8Encoder;

impl Encoder for UTF8Encoder {
    fn name(&self) -> &'static str { "utf-8" }

    fn process(&self, input: &str, _mode: ErrorMode, output: &mut dyn ByteSink)
        -> Result<(), EncodeError>
    {
        output.writer_hint(input.len());

        for ch in input.chars() {
            let ch = ch as u32;
            if ch < 0x80 {
                output.write_byte(ch as u8, ByteClass::Ordinary)?;
                continue;
            }
            let (count, offset) = match ch {
                0x80..=0x7ff => (1u32, 0xc0),
                0x800..=0xffff => (2, 0xe0),
                _ => (3, 0xf0),
            };
            output.write_byte(((ch >> (6 * count)) + offset) as u8, ByteClass::Ordinary)?;
            for k in (1..=count).rev() {
                let trailing = 0x80 | ((ch >> (6 * (k - 1))) & 0x3f);
                output.write_byte(trailing as u8, ByteClass::Ordinary)?;
            }
        }
        Ok(())
    }
}
