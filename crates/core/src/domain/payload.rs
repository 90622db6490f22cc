// Offer Payload Parsing

use crate::domain::error::{DomainError, Result};
use crate::domain::queue::Value;

/// Parse an offer body as a base-10 signed integer.
///
/// One trailing line terminator (`\n` or `\r\n`) is tolerated. Anything
/// else around the digits, including whitespace, is malformed.
pub fn parse_payload(text: &str) -> Result<Value> {
    let digits = match text.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => text,
    };

    if digits.is_empty() {
        return Err(DomainError::MalformedInput("empty payload".to_string()));
    }

    digits
        .parse::<Value>()
        .map_err(|e| DomainError::MalformedInput(format!("{:?} is not an integer: {}", digits, e)))
}

/// Same as [`parse_payload`] for raw bytes; invalid UTF-8 is malformed
pub fn parse_payload_bytes(body: &[u8]) -> Result<Value> {
    let text = std::str::from_utf8(body)
        .map_err(|_| DomainError::MalformedInput("payload is not valid UTF-8".to_string()))?;
    parse_payload(text)
}
