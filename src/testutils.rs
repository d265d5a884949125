// This is a part of whatwg-encoder.
// Copyright (c) 2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Sinks for testing.

use std::io;

use crate::types::{ByteClass, ByteSink};

/// A sink recording every byte together with its class.
pub struct TaggedSink {
    pub bytes: Vec<u8>,
    pub classes: Vec<ByteClass>,
}

impl TaggedSink {
    pub fn new() -> TaggedSink {
        TaggedSink { bytes: Vec::new(), classes: Vec::new() }
    }
}

impl ByteSink for TaggedSink {
    fn write_byte(&mut self, byte: u8, class: ByteClass) -> io::Result<()> {
        self.bytes.push(byte);
        self.classes.push(class);
        Ok(())
    }
}

/// A sink failing at the given 1-based call number, recording the bytes
/// accepted before that.
pub struct FailingSink {
    pub calls: usize,
    pub fail_at: usize,
    pub written: Vec<u8>,
}

impl FailingSink {
    pub fn new(fail_at: usize) -> FailingSink {
        FailingSink { calls: 0, fail_at, written: Vec::new() }
    }
}

impl ByteSink for FailingSink {
    fn write_byte(&mut self, byte: u8, _class: ByteClass) -> io::Result<()> {
        self.calls += 1;
        if self.calls == self.fail_at {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "sink full"));
        }
        self.written.push(byte);
        Ok(())
    }
}
