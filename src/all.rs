// This is a part of whatwg-encoder.
// Copyright (c) 2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! A list of all supported encoders. Useful for encodings fixed in the
//! compile time.

use crate::codec::japanese::{EUCJPEncoder, ISO2022JPEncoder, ShiftJISEncoder};
use crate::codec::korean::EUCKREncoder;
use crate::codec::simpchinese::GB18030Encoder;
use crate::codec::tradchinese::Big5Encoder;
use crate::codec::utf_8::UTF8Encoder;
use crate::types::EncoderRef;

pub static UTF_8: &UTF8Encoder = &UTF8Encoder;
pub static BIG5: &Big5Encoder = &Big5Encoder;
pub static EUC_JP: &EUCJPEncoder = &EUCJPEncoder;
pub static ISO_2022_JP: &ISO2022JPEncoder = &ISO2022JPEncoder;
pub static SHIFT_JIS: &ShiftJISEncoder = &ShiftJISEncoder;
pub static EUC_KR: &EUCKREncoder = &EUCKREncoder;
pub static GB18030: &GB18030Encoder = &GB18030Encoder { gbk: false };
pub static GBK: &GB18030Encoder = &GB18030Encoder { gbk: true };

/// Returns references to every supported encoder.
pub fn encoders() -> &'static [EncoderRef] {
    static ENCODERS: [EncoderRef; 8] = [
        &UTF8Encoder,
        &Big5Encoder,
        &EUCJPEncoder,
        &ISO2022JPEncoder,
        &ShiftJISEncoder,
        &EUCKREncoder,
        &GB18030Encoder { gbk: false },
        &GB18030Encoder { gbk: true },
    ];
    &ENCODERS
}
