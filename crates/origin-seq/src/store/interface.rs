use crate::{Error, Result};

/// A sequence number handed out by the allocator. Always `>= 1`.
pub type SequenceNumber = u64;

/// Durable backing for the allocator's single scalar value.
///
/// The stored value is the *next* number to hand out. Implementations are
/// only ever called from inside the allocator's critical section, so they do
/// not need their own synchronization.
pub trait CounterStore {
    /// Returns the stored value, or `None` if the store does not exist yet.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] if the store exists but holds something other than a
    /// positive integer, [`Error::Io`] if it could not be read.
    fn load(&mut self) -> Result<Option<SequenceNumber>>;

    /// Replaces the stored value, creating the store if needed.
    fn store(&mut self, next: SequenceNumber) -> Result<()>;
}

/// Longest prefix of a corrupted store kept in [`Error::Parse`].
pub const MAX_REPORTED_CONTENT: usize = 32;

/// Parses the textual form of a stored counter. Surrounding whitespace is
/// ignored; zero is rejected because it can never have been written.
pub fn parse_counter(content: &str) -> Result<SequenceNumber> {
    match content.trim().parse::<SequenceNumber>() {
        Ok(0) => Err(Error::Parse {
            content: excerpt(content),
            source: None,
        }),
        Ok(value) => Ok(value),
        Err(source) => Err(Error::Parse {
            content: excerpt(content),
            source: Some(source),
        }),
    }
}

fn excerpt(content: &str) -> String {
    match content.char_indices().nth(MAX_REPORTED_CONTENT) {
        Some((end, _)) => format!("{}...", &content[..end]),
        None => content.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_padded_values() {
        assert_eq!(parse_counter("1").unwrap(), 1);
        assert_eq!(parse_counter("  42\n").unwrap(), 42);
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "abc", "-3", "0", "12a", "1.5"] {
            let err = parse_counter(bad).unwrap_err();
            assert!(matches!(err, Error::Parse { .. }), "accepted {bad:?}");
        }
    }

    #[test]
    fn long_garbage_is_truncated_in_the_error() {
        let content = "x".repeat(10_000);
        let err = parse_counter(&content).unwrap_err();
        match &err {
            Error::Parse { content, .. } => {
                assert_eq!(content.len(), MAX_REPORTED_CONTENT + 3);
                assert!(content.ends_with("..."));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().len() < 128, "{err}");
    }

    #[test]
    fn short_garbage_is_reported_whole() {
        match parse_counter("twelve").unwrap_err() {
            Error::Parse { content, .. } => assert_eq!(content, "twelve"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
