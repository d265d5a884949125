// This is a part of whatwg-encoder.
// Copyright (c) 2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Interface to the character encoders.

use std::error::Error;
use std::fmt;
use std::io;

/// Classification of a single output byte.
///
/// Consumers that escape the encoder output (e.g. URL form serializers)
/// cannot tell from the byte value alone whether it came from the encoding
/// proper or from the error handler, so every byte pushed to a `ByteSink`
/// carries its class.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ByteClass {
    /// A byte produced by the encoding itself.
    Ordinary,
    /// A byte substituted by the error handler for an unrepresentable code
    /// point. Escaping consumers have to escape such bytes regardless of
    /// their value.
    AlwaysEscape,
}

/// Byte sink used by `Encoder`s. In most cases this will be a `Vec<u8>`.
pub trait ByteSink {
    /// Hints an expected lower bound on the length (in bytes) of the output
    /// until the next call to `writer_hint`, so that the sink can reserve
    /// memory. Encoders are recommended but not required to call this
    /// method with an appropriate estimate. By default this method does
    /// nothing.
    fn writer_hint(&mut self, _expectedlen: usize) {}

    /// Writes a single byte. A failure stops the calling encoder at once
    /// and is propagated out of `Encoder::process` unchanged; the sink
    /// receives no further bytes.
    fn write_byte(&mut self, byte: u8, class: ByteClass) -> io::Result<()>;
}

impl ByteSink for Vec<u8> {
    fn writer_hint(&mut self, expectedlen: usize) {
        self.reserve(expectedlen);
    }

    fn write_byte(&mut self, byte: u8, _class: ByteClass) -> io::Result<()> {
        self.push(byte);
        Ok(())
    }
}

/// Error information from an encoder.
#[derive(Debug)]
pub enum EncodeError {
    /// A code point without a representation in the target encoding was
    /// encountered while the error mode was `ErrorMode::Fatal`.
    Unrepresentable(char),
    /// The byte sink failed.
    Sink(io::Error),
}

impl From<io::Error> for EncodeError {
    fn from(err: io::Error) -> EncodeError {
        EncodeError::Sink(err)
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            EncodeError::Unrepresentable(ch) => {
                write!(f, "unrepresentable character U+{:04X}", ch as u32)
            }
            EncodeError::Sink(ref err) => write!(f, "byte sink error: {}", err),
        }
    }
}

impl Error for EncodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            EncodeError::Sink(ref err) => Some(err),
            EncodeError::Unrepresentable(..) => None,
        }
    }
}

/// How an encoder deals with a code point the target encoding cannot
/// represent. Fixed for the duration of one `Encoder::process` call.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorMode {
    /// Substitutes the two bytes FF FD. This is the literal sentinel pair
    /// prescribed for this encoder family, not the UTF-8 encoding of
    /// U+FFFD; decoders of the target encoding will not round-trip it.
    Replacement,
    /// Substitutes a decimal numeric character reference (e.g. `&#8253;`).
    /// Corresponds to the error handling of HTML form submission.
    Html,
    /// Fails on the first unrepresentable code point.
    Fatal,
}

impl ErrorMode {
    /// Runs the error handling for one unrepresentable code point.
    /// `Replacement` and `Html` push substitute bytes and let the encoder
    /// keep going; `Fatal` reports the code point and stops everything.
    pub(crate) fn handle(self, ch: char, output: &mut dyn ByteSink) -> Result<(), EncodeError> {
        match self {
            ErrorMode::Replacement => {
                output.write_byte(0xff, ByteClass::AlwaysEscape)?;
                output.write_byte(0xfd, ByteClass::AlwaysEscape)?;
                Ok(())
            }
            ErrorMode::Html => {
                output.write_byte(b'&', ByteClass::AlwaysEscape)?;
                output.write_byte(b'#', ByteClass::AlwaysEscape)?;
                // seven digits cover the entire code point space
                let mut digits = [0u8; 7];
                let mut rest = ch as u32;
                let mut ndigits = 0;
                loop {
                    digits[ndigits] = b'0' + (rest % 10) as u8;
                    ndigits += 1;
                    rest /= 10;
                    if rest == 0 {
                        break;
                    }
                }
                for &digit in digits[..ndigits].iter().rev() {
                    output.write_byte(digit, ByteClass::Ordinary)?;
                }
                output.write_byte(b';', ByteClass::AlwaysEscape)?;
                Ok(())
            }
            ErrorMode::Fatal => Err(EncodeError::Unrepresentable(ch)),
        }
    }
}

/// Character encoder, transforming a sequence of Unicode scalar values
/// into a byte sequence in the target encoding.
///
/// Encoders keep no state between `process` calls (ISO-2022-JP keeps its
/// switching state local to a single call), so a single instance per
/// encoding is shared process-wide; see the `all` module.
pub trait Encoder {
    /// Returns the canonical name of the target encoding.
    fn name(&self) -> &'static str;

    /// Encodes `input`, pushing every produced byte to `output` in order.
    /// Each code point results in one to four sink calls, or in a call to
    /// the error handler selected by `mode` when the code point has no
    /// representation. Returns at the first sink failure or, in
    /// `ErrorMode::Fatal`, at the first unrepresentable code point.
    fn process(&self, input: &str, mode: ErrorMode, output: &mut dyn ByteSink)
        -> Result<(), EncodeError>;

    /// An easy-to-use interface to `process`, collecting the output into
    /// an owned vector.
    fn encode(&self, input: &str, mode: ErrorMode) -> Result<Vec<u8>, EncodeError> {
        let mut output = Vec::new();
        self.process(input, mode, &mut output)?;
        Ok(output)
    }
}

/// A reference to a shared encoder instance, for code where the target
/// encoding is not known at compile time.
pub type EncoderRef = &'static (dyn Encoder + Send + Sync);
