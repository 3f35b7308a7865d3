//! Exit code constants for the pagesmith CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, bad config, unknown token or action)
//! - 2: An answer never satisfied its validation pattern
//! - 3: Interactive prompt failed (input closed, terminal error)
//! - 4: Filesystem failure while writing output

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration, or an unresolvable template.
pub const USER_ERROR: i32 = 1;

/// Validation exhausted: the retry ceiling was reached without a valid answer.
pub const VALIDATION_EXHAUSTED: i32 = 2;

/// Prompt failure: input stream closed or unreadable.
pub const PROMPT_FAILURE: i32 = 3;

/// Filesystem failure: output directory or page file could not be written.
pub const IO_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, VALIDATION_EXHAUSTED, PROMPT_FAILURE, IO_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
