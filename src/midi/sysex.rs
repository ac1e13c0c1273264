use core::fmt;
use crate::midi::{is_data_byte, MidiError, U7, SYSEX_END, SYSEX_START};

/// Building blocks of a SysEx body, laid out in order after the start byte
#[derive(Debug, Clone, Copy)]
pub enum Token {
    /// Fixed sequence (manufacturer header, identifiers)
    Seq(&'static [u8]),
    Val(U7),
    /// Leave bytes zeroed
    Skip(usize),
}

impl Token {
    pub fn len(&self) -> usize {
        match self {
            Token::Seq(seq) => seq.len(),
            Token::Val(_) => 1,
            Token::Skip(len) => *len,
        }
    }
}

/// A complete SysEx message of exactly `N` bytes, start and end markers included.
///
/// Body bytes not covered by any token stay zero.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SysexFrame<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> SysexFrame<N> {
    /// Fails without producing a partial frame if the tokens do not fit
    /// between the markers or carry a non-data byte.
    pub fn encode(tokens: &[Token]) -> Result<Self, MidiError> {
        let capacity = N.checked_sub(2).ok_or(MidiError::SysexOutOfBounds)?;
        let body_len = tokens
            .iter()
            .try_fold(0usize, |acc, token| acc.checked_add(token.len()))
            .ok_or(MidiError::SysexOutOfBounds)?;
        if body_len > capacity {
            return Err(MidiError::SysexOutOfBounds);
        }

        let mut bytes = [0; N];
        bytes[0] = SYSEX_START;
        let mut idx = 1;
        for token in tokens {
            match token {
                Token::Seq(seq) => {
                    if !seq.iter().all(|byte| is_data_byte(*byte)) {
                        return Err(MidiError::InvalidU7);
                    }
                    bytes[idx..idx + seq.len()].copy_from_slice(seq);
                }
                Token::Val(val) => bytes[idx] = u8::from(*val),
                Token::Skip(_) => {}
            }
            idx += token.len();
        }
        bytes[N - 1] = SYSEX_END;
        Ok(SysexFrame { bytes })
    }

    /// Everything between the markers
    pub fn body(&self) -> &[u8] {
        &self.bytes[1..N - 1]
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.bytes
    }

    pub fn into_bytes(self) -> [u8; N] {
        self.bytes
    }
}

/// Renders bytes as `F0 43 00 ...` for logging
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}
