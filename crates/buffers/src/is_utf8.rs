//! UTF-8 well-formedness check.

/// Scanner state between bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectLead,
    /// `remaining` continuation bytes are pending (1 to 3); the next one
    /// must lie in `lo..=hi`.
    ExpectCont { remaining: u8, lo: u8, hi: u8 },
    Invalid,
}

fn lead(byte: u8) -> State {
    let (remaining, lo, hi) = match byte {
        0x00..=0x7f => return State::ExpectLead,
        0xc2..=0xdf => (1, 0x80, 0xbf),
        // Overlong three-byte forms.
        0xe0 => (2, 0xa0, 0xbf),
        0xe1..=0xec | 0xee..=0xef => (2, 0x80, 0xbf),
        // Surrogates U+D800..U+DFFF.
        0xed => (2, 0x80, 0x9f),
        // Overlong four-byte forms.
        0xf0 => (3, 0x90, 0xbf),
        0xf1..=0xf3 => (3, 0x80, 0xbf),
        // Above U+10FFFF.
        0xf4 => (3, 0x80, 0x8f),
        _ => return State::Invalid,
    };
    State::ExpectCont { remaining, lo, hi }
}

fn step(state: State, byte: u8) -> State {
    match state {
        State::ExpectLead => lead(byte),
        State::ExpectCont { remaining, lo, hi } => {
            if byte < lo || byte > hi {
                State::Invalid
            } else if remaining == 1 {
                State::ExpectLead
            } else {
                State::ExpectCont {
                    remaining: remaining - 1,
                    lo: 0x80,
                    hi: 0xbf,
                }
            }
        }
        State::Invalid => State::Invalid,
    }
}

/// Incremental UTF-8 validator.
///
/// Feed input in any number of chunks; a sequence may straddle chunks.
///
/// ```
/// use bytebuf::Utf8Validator;
///
/// let mut v = Utf8Validator::new();
/// v.feed(&[0xe2, 0x82]);
/// v.feed(&[0xac]);
/// assert!(v.finish());
/// ```
#[derive(Debug, Clone)]
pub struct Utf8Validator {
    state: State,
}

impl Default for Utf8Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Utf8Validator {
    pub fn new() -> Self {
        Self {
            state: State::ExpectLead,
        }
    }

    /// Scans `bytes`. Returns `false` once the input is known to be invalid.
    pub fn feed(&mut self, bytes: &[u8]) -> bool {
        for &b in bytes {
            self.state = step(self.state, b);
            if self.state == State::Invalid {
                return false;
            }
        }
        true
    }

    /// Whether everything fed so far is well-formed and complete.
    pub fn finish(&self) -> bool {
        self.state == State::ExpectLead
    }
}

/// Reports whether `bytes` is well-formed UTF-8.
///
/// ```
/// use bytebuf::is_utf8;
///
/// assert!(is_utf8(&[]));
/// assert!(is_utf8(&[0xc2, 0x80]));
/// assert!(!is_utf8(&[0x80]));
/// assert!(!is_utf8(&[0xed, 0xa0, 0x80]));
/// ```
pub fn is_utf8(bytes: &[u8]) -> bool {
    let mut validator = Utf8Validator::new();
    validator.feed(bytes) && validator.finish()
}
