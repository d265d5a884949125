// This is a part of whatwg-encoder.
// Copyright (c) 2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Legacy Korean encodings based on KS X 1001.

use encoding_index_korean::euc_kr;

use crate::types::*;

/**
 * EUC-KR with the Unified Hangul Code extension.
 *
 * KS X 1001 proper only contains a set of 2,350 common Hangul syllables,
 * so in practice the encoding is extended with the remaining 8,822
 * syllables packed into two-byte sequences whose second byte may have its
 * MSB unset (`[81-C6] [41-5A 61-7A 81-FE]`). The whole two-byte space is
 * addressed through a single index with 190 trail positions per lead, so
 * both the original and the extended rows fall out of one lead/trail
 * split.
 */
#[derive(Clone, Copy)]
pub struct EUCKREncoder;

impl Encoder for EUCKREncoder {
    fn name(&self) -> &'static str { "euc-kr" }

    fn process(&self, input: &str, mode: ErrorMode, output: &mut dyn ByteSink)
        -> Result<(), EncodeError>
    {
        output.writer_hint(input.len());

        for ch in input.chars() {
            if ch < '\u{80}' {
                output.write_byte(ch as u8, ByteClass::Ordinary)?;
            } else {
                let ptr = euc_kr::backward(ch as u32);
                if ptr == 0xffff {
                    mode.handle(ch, output)?;
                } else {
                    output.write_byte((ptr / 190 + 0x81) as u8, ByteClass::Ordinary)?;
                    output.write_byte((ptr % 190 + 0x41) as u8, ByteClass::Ordinary)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod euckr_tests {
    use super::EUCKREncoder;
    use crate::types::*;

    #[test]
    fn test_valid() {
        let encoder = EUCKREncoder;
        assert_eq!(encoder.encode("A", ErrorMode::Replacement).unwrap(), [0x41]);
        assert_eq!(encoder.encode("\u{d55c}\u{ae00}", ErrorMode::Replacement).unwrap(),
                   [0xc7, 0xd1, 0xb1, 0xdb]);
        // U+AC02 is not in KS X 1001 and lands in the very first extended slot
        assert_eq!(encoder.encode("\u{ac02}", ErrorMode::Replacement).unwrap(), [0x81, 0x41]);
    }

    #[test]
    fn test_unrepresentable() {
        let encoder = EUCKREncoder;
        assert_eq!(encoder.encode("\u{80}", ErrorMode::Replacement).unwrap(), [0xff, 0xfd]);
        assert_eq!(encoder.encode("\u{d55c}\u{1f600}", ErrorMode::Html).unwrap(),
                   b"\xc7\xd1&#128512;");
        match encoder.encode("\u{1f600}", ErrorMode::Fatal) {
            Err(EncodeError::Unrepresentable(ch)) => assert_eq!(ch, '\u{1f600}'),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
