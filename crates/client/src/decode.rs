//! Streaming-safe UTF-8 decoding.
//!
//! HTTP chunk boundaries fall anywhere, including inside a multi-byte UTF-8
//! sequence. Decoding each chunk independently corrupts such sequences, so
//! [`StreamDecoder`] keeps the undecodable tail of each chunk and prepends
//! it to the next one. Bytes that can never form a valid sequence decode to
//! U+FFFD, matching lossy text-decoder behaviour, so decoding is total.

/// Incremental UTF-8 decoder with carry-over between chunks.
///
/// Feed raw byte chunks through [`decode`](Self::decode) in arrival order;
/// call [`finish`](Self::finish) once the stream ends to flush a trailing
/// incomplete sequence, if any. The concatenation of everything returned
/// equals the lossy decoding of the concatenated input.
#[derive(Debug, Default)]
pub struct StreamDecoder {
    /// Trailing bytes of the previous chunk that form an incomplete
    /// multi-byte sequence (at most 3 bytes).
    pending: Vec<u8>,
}

impl StreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the next chunk of the stream.
    ///
    /// Returns every character that is complete so far; an incomplete
    /// multi-byte sequence at the end of the chunk is held back and decoded
    /// together with the next chunk. Invalid sequences become U+FFFD.
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        // Fast path: no carry and the chunk is self-contained valid UTF-8.
        if self.pending.is_empty() {
            if let Ok(valid) = std::str::from_utf8(chunk) {
                return valid.to_string();
            }
        }

        let mut input = std::mem::take(&mut self.pending);
        input.extend_from_slice(chunk);

        let mut out = String::with_capacity(input.len());
        let mut rest = input.as_slice();

        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    out.push_str(valid);
                    break;
                }
                Err(err) => {
                    let valid_up_to = err.valid_up_to();
                    // The slice below `valid_up_to` is valid by contract, so
                    // the lossy conversion borrows it unchanged.
                    out.push_str(&String::from_utf8_lossy(&rest[..valid_up_to]));

                    match err.error_len() {
                        // Bytes that cannot begin or continue any sequence:
                        // substitute and keep decoding.
                        Some(invalid_len) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            rest = &rest[valid_up_to + invalid_len..];
                        }
                        // The chunk ends inside a multi-byte sequence: hold
                        // the tail for the next chunk.
                        None => {
                            self.pending = rest[valid_up_to..].to_vec();
                            break;
                        }
                    }
                }
            }
        }

        out
    }

    /// Flush the decoder at end of stream.
    ///
    /// A non-empty carry here means the stream ended mid-character; that
    /// truncated sequence decodes to a single U+FFFD, as a final flush of a
    /// lossy text decoder would.
    pub fn finish(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            None
        } else {
            self.pending.clear();
            Some(char::REPLACEMENT_CHARACTER.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
