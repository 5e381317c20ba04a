use base64::{engine::general_purpose, Engine as _};

/// Encodes bytes to padded standard Base64.
pub fn base64_encode<T: AsRef<[u8]>>(input: T) -> String {
    general_purpose::STANDARD.encode(input)
}

/// Decodes a padded standard Base64 string.
///
/// Line breaks anywhere and surrounding whitespace are ignored; anything else
/// outside the standard alphabet is an error.
pub fn base64_decode(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let input = input.trim();
    if input.contains(&['\r', '\n'][..]) {
        let joined: String = input.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
        general_purpose::STANDARD.decode(joined)
    } else {
        general_purpose::STANDARD.decode(input)
    }
}

/// Decodes a Base64 string into text, replacing invalid UTF-8 sequences.
pub fn base64_decode_lossy(input: &str) -> Result<String, base64::DecodeError> {
    base64_decode(input).map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_decode_standard_padded() {
        assert_eq!(base64_decode("cHJvdG8gdWRw").unwrap(), b"proto udp");
        assert_eq!(base64_decode_lossy("YXV0aCBTSEEx\n").unwrap(), "auth SHA1");
    }

    #[test]
    fn test_base64_decode_ignores_line_breaks() {
        assert_eq!(base64_decode("cHJv\r\ndG8g\ndWRw").unwrap(), b"proto udp");
    }

    #[test]
    fn test_base64_decode_rejects_invalid_input() {
        assert!(base64_decode("not base64!").is_err());
        // URL-safe alphabet is not accepted.
        assert!(base64_decode("-_-_").is_err());
        // Only line breaks are skipped, not inner spaces.
        assert!(base64_decode("cHJv dG8g dWRw").is_err());
    }

    #[test]
    fn test_base64_encode() {
        assert_eq!(base64_encode("proto udp"), "cHJvdG8gdWRw");
    }
}
