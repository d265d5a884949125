// This is a part of whatwg-encoder.
// Copyright (c) 2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Legacy Japanese encodings based on JIS X 0201 and JIS X 0208.

use encoding_index_japanese::jis0208;

use crate::index;
use crate::types::*;

/**
 * EUC-JP.
 *
 * This is a Japanese encoding created from two JIS character sets:
 *
 * - JIS X 0201, which lower half is ISO/IEC 646:JP (US-ASCII with a yen
 *   sign and an overline) and upper half contains legacy half-width
 *   katakanas.
 * - JIS X 0208, the primary graphic character set (94x94).
 *
 * The encoder emits the lower half of JIS X 0201 in G0 (`[00-7F]`),
 * JIS X 0208 in G1 (`[A1-FE] [A1-FE]`) and the upper half of JIS X 0201
 * in G2 (`8E [A1-DF]`). The yen sign and the overline keep their JIS X
 * 0201 bytes `5C` and `7E`, so the ASCII backslash and tilde do not
 * round-trip.
 */
#[derive(Clone, Copy)]
pub struct EUCJPEncoder;

impl Encoder for EUCJPEncoder {
    fn name(&self) -> &'static str { "euc-jp" }

    fn process(&self, input: &str, mode: ErrorMode, output: &mut dyn ByteSink)
        -> Result<(), EncodeError>
    {
        output.writer_hint(input.len());

        for ch in input.chars() {
            match ch {
                '\u{0}'..='\u{7f}' => {
                    output.write_byte(ch as u8, ByteClass::Ordinary)?;
                }
                '\u{a5}' => {
                    output.write_byte(0x5c, ByteClass::Ordinary)?;
                }
                '\u{203e}' => {
                    output.write_byte(0x7e, ByteClass::Ordinary)?;
                }
                '\u{ff61}'..='\u{ff9f}' => {
                    output.write_byte(0x8e, ByteClass::Ordinary)?;
                    output.write_byte((ch as u32 - 0xff61 + 0xa1) as u8, ByteClass::Ordinary)?;
                }
                _ => {
                    // the index has the full-width U+FF0D but not the minus sign
                    let mapped = if ch == '\u{2212}' { '\u{ff0d}' } else { ch };
                    let ptr = jis0208::backward(mapped as u32);
                    if ptr == 0xffff {
                        mode.handle(ch, output)?;
                    } else {
                        output.write_byte((ptr / 94 + 0xa1) as u8, ByteClass::Ordinary)?;
                        output.write_byte((ptr % 94 + 0xa1) as u8, ByteClass::Ordinary)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Output character sets of the ISO-2022-JP encoder. Every transition is
/// announced in-band with an escape sequence.
#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    /// US-ASCII, also the initial and final state. Escape `1B 28 42`.
    Ascii,
    /// The lower half of JIS X 0201. Escape `1B 28 4A`.
    Roman,
    /// JIS X 0208. Escape `1B 24 42`.
    Jis0208,
}

fn write_escape(output: &mut dyn ByteSink, seq: [u8; 3]) -> Result<(), EncodeError> {
    for &byte in seq.iter() {
        output.write_byte(byte, ByteClass::Ordinary)?;
    }
    Ok(())
}

/**
 * ISO-2022-JP.
 *
 * This is a stateful Japanese encoding which defaults to ASCII and shifts
 * to the lower half of JIS X 0201 or to JIS X 0208 via escape sequences.
 * The switching state lives entirely within one `process` call: the
 * encoder starts in ASCII and, when the input ends in any other state,
 * appends a final `1B 28 42` so the output is self-contained.
 *
 * Half-width katakanas have no representation of their own and are
 * encoded as their full-width counterparts.
 */
#[derive(Clone, Copy)]
pub struct ISO2022JPEncoder;

impl ISO2022JPEncoder {
    fn process_item(mut item: char, mut state: State, mode: ErrorMode,
                    output: &mut dyn ByteSink) -> Result<State, EncodeError> {
        // Each `continue` re-examines the same code point against the
        // switched state; at most two switches can happen before a byte
        // for the code point itself is emitted.
        loop {
            // SI, SO and ESC cannot be emitted verbatim, they would be
            // indistinguishable from the encoder's own shifts. The error
            // is reported as U+FFFD, not as the offending code point.
            if (state == State::Ascii || state == State::Roman)
                && (item == '\u{e}' || item == '\u{f}' || item == '\u{1b}')
            {
                mode.handle('\u{fffd}', output)?;
                return Ok(state);
            }

            if state == State::Ascii && item < '\u{80}' {
                output.write_byte(item as u8, ByteClass::Ordinary)?;
                return Ok(state);
            }

            if state == State::Roman {
                match item {
                    // these two differ between ASCII and JIS X 0201
                    '\u{5c}' | '\u{7e}' => {}
                    '\u{0}'..='\u{7f}' => {
                        output.write_byte(item as u8, ByteClass::Ordinary)?;
                        return Ok(state);
                    }
                    '\u{a5}' => {
                        output.write_byte(0x5c, ByteClass::Ordinary)?;
                        return Ok(state);
                    }
                    '\u{203e}' => {
                        output.write_byte(0x7e, ByteClass::Ordinary)?;
                        return Ok(state);
                    }
                    _ => {}
                }
            }

            if item < '\u{80}' {
                // state is Roman or Jis0208 at this point
                write_escape(output, [0x1b, 0x28, 0x42])?;
                state = State::Ascii;
                continue;
            }

            if (item == '\u{a5}' || item == '\u{203e}') && state != State::Roman {
                write_escape(output, [0x1b, 0x28, 0x4a])?;
                state = State::Roman;
                continue;
            }

            if item == '\u{2212}' {
                item = '\u{ff0d}';
            }
            if '\u{ff61}' <= item && item <= '\u{ff9f}' {
                item = index::iso_2022_jp_katakana::forward((item as u32 - 0xff61) as u8);
            }

            let ptr = jis0208::backward(item as u32);
            if ptr == 0xffff {
                if state == State::Jis0208 {
                    write_escape(output, [0x1b, 0x28, 0x42])?;
                    state = State::Ascii;
                    continue;
                }
                mode.handle(item, output)?;
                return Ok(state);
            }

            if state != State::Jis0208 {
                write_escape(output, [0x1b, 0x24, 0x42])?;
                state = State::Jis0208;
                continue;
            }

            output.write_byte((ptr / 94 + 0x21) as u8, ByteClass::Ordinary)?;
            output.write_byte((ptr % 94 + 0x21) as u8, ByteClass::Ordinary)?;
            return Ok(state);
        }
    }
}

impl Encoder for ISO2022JPEncoder {
    fn name(&self) -> &'static str { "iso-2022-jp" }

    fn process(&self, input: &str, mode: ErrorMode, output: &mut dyn ByteSink)
        -> Result<(), EncodeError>
    {
        output.writer_hint(input.len());

        let mut state = State::Ascii;
        for item in input.chars() {
            state = ISO2022JPEncoder::process_item(item, state, mode, output)?;
        }
        if state != State::Ascii {
            write_escape(output, [0x1b, 0x28, 0x42])?;
        }
        Ok(())
    }
}

/**
 * Shift_JIS.
 *
 * This is a Japanese encoding which packs JIS X 0201 and JIS X 0208 into
 * a byte-oriented scheme: the JIS X 0201 lower half in `[00-7F]` (with
 * the same `5C`/`7E` caveat as EUC-JP), half-width katakanas in
 * `[A1-DF]`, and JIS X 0208 in two bytes `[81-9F E0-FC] [40-7E 80-FC]`.
 * U+0080 additionally maps to the bare byte `80`.
 */
#[derive(Clone, Copy)]
pub struct ShiftJISEncoder;

// The jis0208 pointers 8272 through 8835 duplicate code points from other
// rows and are not produced by this encoder.
fn shift_jis_pointer(ch: char) -> Option<u16> {
    let ptr = jis0208::backward(ch as u32);
    if ptr == 0xffff || (8272 <= ptr && ptr <= 8835) {
        None
    } else {
        Some(ptr)
    }
}

impl Encoder for ShiftJISEncoder {
    fn name(&self) -> &'static str { "shift_jis" }

    fn process(&self, input: &str, mode: ErrorMode, output: &mut dyn ByteSink)
        -> Result<(), EncodeError>
    {
        output.writer_hint(input.len());

        for ch in input.chars() {
            match ch {
                '\u{0}'..='\u{80}' => {
                    output.write_byte(ch as u8, ByteClass::Ordinary)?;
                }
                '\u{a5}' => {
                    output.write_byte(0x5c, ByteClass::Ordinary)?;
                }
                '\u{203e}' => {
                    output.write_byte(0x7e, ByteClass::Ordinary)?;
                }
                '\u{ff61}'..='\u{ff9f}' => {
                    output.write_byte((ch as u32 - 0xff61 + 0xa1) as u8, ByteClass::Ordinary)?;
                }
                _ => {
                    let mapped = if ch == '\u{2212}' { '\u{ff0d}' } else { ch };
                    match shift_jis_pointer(mapped) {
                        None => mode.handle(ch, output)?,
                        Some(ptr) => {
                            let lead = ptr / 188;
                            let leadoffset = if lead < 0x1f { 0x81 } else { 0xc1 };
                            let trail = ptr % 188;
                            let trailoffset = if trail < 0x3f { 0x40 } else { 0x41 };
                            output.write_byte((lead + leadoffset) as u8, ByteClass::Ordinary)?;
                            output.write_byte((trail + trailoffset) as u8, ByteClass::Ordinary)?;
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod eucjp_tests {
    use super::EUCJPEncoder;
    use crate::testutils::TaggedSink;
    use crate::types::*;

    #[test]
    fn test_valid() {
        let encoder = EUCJPEncoder;
        assert_eq!(encoder.encode("A", ErrorMode::Replacement).unwrap(), [0x41]);
        assert_eq!(encoder.encode("\u{a5}\u{203e}\u{ff61}\u{4e9c}", ErrorMode::Replacement).unwrap(),
                   [0x5c, 0x7e, 0x8e, 0xa1, 0xb0, 0xa1]);
        // half-width katakanas go through G2, voiced marks included
        assert_eq!(encoder.encode("\u{ff76}\u{ff9e}", ErrorMode::Replacement).unwrap(),
                   [0x8e, 0xb6, 0x8e, 0xde]);
        // the minus sign borrows the full-width hyphen-minus
        assert_eq!(encoder.encode("\u{2212}", ErrorMode::Replacement).unwrap(), [0xa1, 0xdd]);
    }

    #[test]
    fn test_unrepresentable() {
        let encoder = EUCJPEncoder;
        assert_eq!(encoder.encode("\u{80}", ErrorMode::Replacement).unwrap(), [0xff, 0xfd]);
        assert_eq!(encoder.encode("?\u{1f600}!", ErrorMode::Html).unwrap(), b"?&#128512;!");
        match encoder.encode("\u{ffff}", ErrorMode::Fatal) {
            Err(EncodeError::Unrepresentable(ch)) => assert_eq!(ch, '\u{ffff}'),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_fatal_stops_emission() {
        let mut sink = TaggedSink::new();
        assert!(EUCJPEncoder.process("A\u{1f600}B", ErrorMode::Fatal, &mut sink).is_err());
        assert_eq!(sink.bytes, [0x41]);
    }
}


#[cfg(test)]
mod shiftjis_tests {
    use super::ShiftJISEncoder;
    use crate::types::*;

    #[test]
    fn test_valid() {
        let encoder = ShiftJISEncoder;
        // unlike the other encoders U+0080 passes through as well
        assert_eq!(encoder.encode("A\u{80}", ErrorMode::Replacement).unwrap(), [0x41, 0x80]);
        assert_eq!(encoder.encode("\u{a5}\u{4e9c}", ErrorMode::Replacement).unwrap(),
                   [0x5c, 0x88, 0x9f]);
        assert_eq!(encoder.encode("\u{203e}", ErrorMode::Replacement).unwrap(), [0x7e]);
        // half-width katakanas are single bytes here
        assert_eq!(encoder.encode("\u{ff61}\u{ff9f}", ErrorMode::Replacement).unwrap(),
                   [0xa1, 0xdf]);
        assert_eq!(encoder.encode("\u{2212}", ErrorMode::Replacement).unwrap(), [0x81, 0x7c]);
    }

    #[test]
    fn test_duplicate_rows_unmapped() {
        // U+2170 only occurs in the excluded pointer rows
        assert_eq!(ShiftJISEncoder.encode("\u{2170}", ErrorMode::Replacement).unwrap(),
                   [0xff, 0xfd]);
    }

    #[test]
    fn test_unrepresentable() {
        let encoder = ShiftJISEncoder;
        assert_eq!(encoder.encode("\u{81}", ErrorMode::Replacement).unwrap(), [0xff, 0xfd]);
        match encoder.encode("\u{1f600}", ErrorMode::Fatal) {
            Err(EncodeError::Unrepresentable(ch)) => assert_eq!(ch, '\u{1f600}'),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
