//! Hexadecimal codec.

const DIGITS: &[u8; 16] = b"0123456789abcdef";

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn pairs(text: &str) -> impl Iterator<Item = u8> + '_ {
    text.as_bytes()
        .chunks_exact(2)
        .map_while(|pair| Some((nibble(pair[0])? << 4) | nibble(pair[1])?))
}

/// Parses pairs of hex digits.
///
/// Either case is accepted. A dangling odd digit is dropped and parsing
/// stops at the first pair that is not two hex digits.
pub fn encode(text: &str) -> Vec<u8> {
    let out: Vec<u8> = pairs(text).collect();
    if out.len() < text.len() / 2 {
        log::debug!(
            "hex input stops being valid at pair {}; keeping {} bytes",
            out.len(),
            out.len()
        );
    }
    out
}

/// Number of bytes [`encode`] yields for `text`.
pub fn encoded_len(text: &str) -> usize {
    pairs(text).count()
}

/// Renders each byte as two lowercase hex digits.
pub fn decode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(char::from(DIGITS[(b >> 4) as usize]));
        out.push(char::from(DIGITS[(b & 0x0f) as usize]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_output() {
        assert_eq!(decode(&[0x00, 0xab, 0xff]), "00abff");
    }

    #[test]
    fn mixed_case_input() {
        assert_eq!(encode("aBcD"), vec![0xab, 0xcd]);
    }

    #[test]
    fn drops_dangling_digit() {
        assert_eq!(encode("abc"), vec![0xab]);
        assert_eq!(encoded_len("abc"), 1);
    }

    #[test]
    fn stops_at_first_invalid_pair() {
        assert_eq!(encode("ab zz cd"), vec![0xab]);
        assert_eq!(encode("a1g2b3"), vec![0xa1]);
        assert_eq!(encode("xx"), Vec::<u8>::new());
    }
}
