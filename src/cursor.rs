//! Reading and writing the compact wire types used by extinfo packets.
//!
//! Integers travel in a variable-width form: values in `-126..=127` are a
//! single byte (two's complement), wider values are announced by a marker
//! byte (`0x80` for 16-bit, `0x81` for 32-bit) followed by the value in
//! little-endian order. The markers themselves occupy the `-128`/`-127`
//! code points, which is why those two values are never encoded as a
//! single byte. Strings are NUL-terminated byte runs.

use crate::errors::{Error, Result};

/// A forward-only reader over one response datagram.
///
/// Every read either consumes a complete value or fails with
/// [`Error::TruncatedResponse`] and no other error; the cursor position is
/// unspecified after a failure and the buffer should be abandoned.
#[derive(Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// The next raw byte, without consuming it.
    pub fn peek_u8(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    fn read_u8(&mut self) -> Result<u8> {
        let b = self.peek_u8().ok_or(Error::TruncatedResponse)?;
        self.pos += 1;
        Ok(b)
    }

    /// Consumes the next `n` raw bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(Error::TruncatedResponse);
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    /// Decodes one compact integer.
    pub fn read_int(&mut self) -> Result<i32> {
        match self.read_u8()? as i8 {
            -128 => {
                let raw = self.read_bytes(2)?;
                Ok(i16::from_le_bytes([raw[0], raw[1]]) as i32)
            }
            -127 => {
                let raw = self.read_bytes(4)?;
                Ok(i32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
            }
            n => Ok(n as i32),
        }
    }

    /// Reads a NUL-terminated string, consuming the terminator.
    ///
    /// Server names and map names are produced by the game engine and are
    /// not guaranteed to be UTF-8, so invalid sequences are replaced rather
    /// than rejected. A bare terminator yields the empty string.
    pub fn read_cstring(&mut self) -> Result<String> {
        let rest = &self.buf[self.pos..];
        let nul = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or(Error::TruncatedResponse)?;
        self.pos += nul + 1;
        Ok(String::from_utf8_lossy(&rest[..nul]).into_owned())
    }
}

/// Appends `n` in the compact integer encoding.
pub fn put_int(out: &mut Vec<u8>, n: i32) {
    if (-126..=127).contains(&n) {
        out.push(n as u8);
    } else if (-0x8000..=0x7fff).contains(&n) {
        out.push(0x80);
        out.extend_from_slice(&(n as i16).to_le_bytes());
    } else {
        out.push(0x81);
        out.extend_from_slice(&n.to_le_bytes());
    }
}

/// Appends `s` as a NUL-terminated byte run.
pub fn put_cstring(out: &mut Vec<u8>, s: &str) {
    out.extend_from_slice(s.as_bytes());
    out.push(0);
}
