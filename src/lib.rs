// This is a part of whatwg-encoder.
// Copyright (c) 2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

/*!

# WHATWG-Encoder

Character encoders for Rust, implementing the encoder side of the
[WHATWG Encoding Standard](https://encoding.spec.whatwg.org/): the
transformation from a sequence of Unicode scalar values to a byte
sequence in UTF-8, GB18030, GBK, Big5, EUC-JP, ISO-2022-JP, Shift_JIS or
EUC-KR. The byte output is bit-exact per the standard's encoder
algorithms.

## Simple Usage

To encode a string:

```
use whatwg_encoder::{Encoder, ErrorMode};
use whatwg_encoder::all::EUC_JP;

assert_eq!(EUC_JP.encode("\u{a5}\u{203e}\u{ff61}\u{4e9c}", ErrorMode::Replacement).unwrap(),
           [0x5c, 0x7e, 0x8e, 0xa1, 0xb0, 0xa1]);
```

To encode a string with unrepresentable characters:

```
use whatwg_encoder::{EncodeError, Encoder, ErrorMode};
use whatwg_encoder::all::BIG5;

assert_eq!(BIG5.encode("\u{4e2d}\u{1f600}", ErrorMode::Replacement).unwrap(),
           b"\xa4\xa4\xff\xfd");
assert_eq!(BIG5.encode("\u{4e2d}\u{1f600}", ErrorMode::Html).unwrap(),
           b"\xa4\xa4&#128512;");
match BIG5.encode("\u{4e2d}\u{1f600}", ErrorMode::Fatal) {
    Err(EncodeError::Unrepresentable(ch)) => assert_eq!(ch, '\u{1f600}'),
    other => panic!("unexpected result: {:?}", other),
}
```

Getting the encoder from a string label, as specified in the WHATWG
Encoding standard:

```
use whatwg_encoder::{Encoder, ErrorMode};
use whatwg_encoder::label::encoder_from_whatwg_label;

let encoder = encoder_from_whatwg_label("Shift-JIS").unwrap();
assert_eq!(encoder.name(), "shift_jis");
assert_eq!(encoder.encode("\u{a5}\u{4e9c}", ErrorMode::Replacement).unwrap(),
           [0x5c, 0x88, 0x9f]);
```

## Detailed Usage

`Encoder` is a single character encoder. Its `process` method drives the
standard's per-code-point step list, pushing each produced byte to a
`ByteSink` in order; `encode` is the easy-to-use wrapper collecting the
bytes into a `Vec<u8>`.

There are two ways to get an `Encoder`:

* `whatwg_encoder::all` has a static item for every supported encoding.
  Use them when the encoding is fixed in the compile time.
* `whatwg_encoder::label` resolves a canonical name (`encoder_from_name`)
  or any WHATWG label (`encoder_from_whatwg_label`) to an `EncoderRef` at
  run time.

Every sink call carries a `ByteClass`: bytes substituted by the error
handler are tagged `AlwaysEscape` so that escaping consumers (a URL form
serializer, say) can escape them no matter what their value is:

```
use std::io;
use whatwg_encoder::{ByteClass, ByteSink, Encoder, ErrorMode};
use whatwg_encoder::all::EUC_KR;

struct FormBytes(String);

impl ByteSink for FormBytes {
    fn write_byte(&mut self, byte: u8, class: ByteClass) -> io::Result<()> {
        if class == ByteClass::AlwaysEscape || !byte.is_ascii_alphanumeric() {
            self.0.push_str(&format!("%{:02X}", byte));
        } else {
            self.0.push(byte as char);
        }
        Ok(())
    }
}

let mut sink = FormBytes(String::new());
EUC_KR.process("A\u{1f600}", ErrorMode::Replacement, &mut sink).unwrap();
assert_eq!(sink.0, "A%FF%FD");
```

The sink itself may fail; the failure short-circuits the encoder and
surfaces as `EncodeError::Sink`, and in `ErrorMode::Fatal` the first
unrepresentable code point surfaces as `EncodeError::Unrepresentable`.
In both cases nothing more is written to the sink.

## Supported Encodings

All encodings with an encoder in the WHATWG Encoding Standard:

* UTF-8 (`utf-8`)
* Big5 (`big5`), without the encoder-side HKSCS extension
* EUC-JP (`euc-jp`)
* ISO-2022-JP (`iso-2022-jp`)
* Shift_JIS (`shift_jis`)
* EUC-KR (`euc-kr`), i.e. the Unified Hangul Code
* GB18030 (`gb18030`) and GBK (`gbk`)

The remaining encodings of the standard (the single-byte family, UTF-16
and `x-user-defined`) are decoder-only or forbidden on the encoder side
and are deliberately absent. Decoding is out of scope altogether.

The index data comes from the WHATWG-published indices via the
`encoding-index-*` crates.

*/

pub use crate::types::{ByteClass, ByteSink, EncodeError, Encoder, EncoderRef, ErrorMode};

#[cfg(test)]
mod testutils;

pub mod types;

/// Indices used for character encoding implementation. Semi-internal.
pub mod index {
    pub mod iso_2022_jp_katakana;
}

/// Codec implementations.
pub mod codec {
    pub mod japanese;
    pub mod korean;
    pub mod simpchinese;
    pub mod tradchinese;
    pub mod utf_8;
}

pub mod all;
pub mod label;
