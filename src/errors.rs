// Error Text Extraction
// Turns error-or-string values into their display text

use std::fmt::Display;

/// Return the display text of an error-or-string value.
///
/// Accepts anything that implements `Display` (`&str`, `String`,
/// `std::io::Error`, `anyhow::Error`, ...) and returns its message text
/// unconditionally. Never fails.
pub fn error_message(error: impl Display) -> String {
    error.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_string_passes_through() {
        assert_eq!(error_message("something went wrong"), "something went wrong");
        assert_eq!(error_message(String::from("boom")), "boom");
    }

    #[test]
    fn test_std_error_yields_its_message() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        assert_eq!(error_message(err), "file missing");
    }

    #[test]
    fn test_anyhow_error_yields_its_message() {
        let err = anyhow::anyhow!("connection refused");
        assert_eq!(error_message(err), "connection refused");
    }
}
