// This is a part of whatwg-encoder.
// Copyright (c) 2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Legacy traditional Chinese encodings.

use encoding_index_tradchinese::big5;

use crate::types::*;

/**
 * Big5 with common extensions.
 *
 * This is a traditional Chinese encoding spanning the two-byte region
 * `[81-FE] [40-7E A1-FE]`, with 157 trail positions per lead. The index
 * also covers the Hong Kong Supplementary Character Set rows at the low
 * end of the pointer space; those rows exist for decoders only and the
 * encoder reports their code points as unrepresentable.
 */
#[derive(Clone, Copy)]
pub struct Big5Encoder;

impl Encoder for Big5Encoder {
    fn name(&self) -> &'static str { "big5" }

    fn process(&self, input: &str, mode: ErrorMode, output: &mut dyn ByteSink)
        -> Result<(), EncodeError>
    {
        output.writer_hint(input.len());

        for ch in input.chars() {
            if ch < '\u{80}' {
                output.write_byte(ch as u8, ByteClass::Ordinary)?;
                continue;
            }
            let ptr = big5::backward(ch as u32);
            if ptr == 0xffff || ptr < (0xa1 - 0x81) * 157 {
                // no Hong Kong extension on the encode side
                mode.handle(ch, output)?;
                continue;
            }
            let lead = ptr / 157 + 0x81;
            let trail = ptr % 157;
            let trailoffset = if trail < 0x3f { 0x40 } else { 0x62 };
            output.write_byte(lead as u8, ByteClass::Ordinary)?;
            output.write_byte((trail + trailoffset) as u8, ByteClass::Ordinary)?;
        }
        Ok(())
    }
}
