// This is a part of whatwg-encoder.
// Copyright (c) 2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! An interface for retrieving an encoder from a canonical name or from a
//! string label.

use crate::all;
use crate::types::EncoderRef;

/// Returns the encoder for given canonical encoding name, compared
/// ASCII-case-insensitively. Unlike `encoder_from_whatwg_label` this does
/// not trim whitespace and does not accept the non-canonical labels.
pub fn encoder_from_name(name: &str) -> Option<EncoderRef> {
    all::encoders().iter().find(|encoder| encoder.name().eq_ignore_ascii_case(name)).copied()
}

/// Returns the encoder for given label, defined in the WHATWG Encoding
/// standard, if any. Implements the encoder-relevant subset of the
/// "get an encoding" algorithm: <https://encoding.spec.whatwg.org/#concept-encoding-get>
pub fn encoder_from_whatwg_label(label: &str) -> Option<EncoderRef> {
    let label = label.trim_matches(&[' ', '\n', '\r', '\t', '\x0C'][..]).to_ascii_lowercase();
    match &label[..] {
        "unicode-1-1-utf-8" |
        "unicode11utf8" |
        "unicode20utf8" |
        "utf-8" |
        "utf8" |
        "x-unicode20utf8" =>
            Some(all::UTF_8 as EncoderRef),
        "big5" |
        "big5-hkscs" |
        "cn-big5" |
        "csbig5" |
        "x-x-big5" =>
            Some(all::BIG5 as EncoderRef),
        "cseucpkdfmtjapanese" |
        "euc-jp" |
        "x-euc-jp" =>
            Some(all::EUC_JP as EncoderRef),
        "csiso2022jp" |
        "iso-2022-jp" =>
            Some(all::ISO_2022_JP as EncoderRef),
        "csshiftjis" |
        "ms932" |
        "ms_kanji" |
        "shift-jis" |
        "shift_jis" |
        "sjis" |
        "windows-31j" |
        "x-sjis" =>
            Some(all::SHIFT_JIS as EncoderRef),
        "cseuckr" |
        "csksc56011987" |
        "euc-kr" |
        "iso-ir-149" |
        "korean" |
        "ks_c_5601-1987" |
        "ks_c_5601-1989" |
        "ksc5601" |
        "ksc_5601" |
        "windows-949" =>
            Some(all::EUC_KR as EncoderRef),
        "gb18030" =>
            Some(all::GB18030 as EncoderRef),
        "chinese" |
        "csgb2312" |
        "csiso58gb231280" |
        "gb2312" |
        "gb_2312" |
        "gb_2312-80" |
        "gbk" |
        "iso-ir-58" |
        "x-gbk" =>
            Some(all::GBK as EncoderRef),
        _ => None,
    }
}
