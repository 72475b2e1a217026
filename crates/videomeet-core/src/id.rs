//! Random meeting identifiers.

use rand::Rng;

use crate::error::{MeetingError, MeetingResult};

/// Characters a meeting id is drawn from.
pub const MEETING_ID_ALPHABET: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Id length used when the caller does not pick one.
pub const DEFAULT_MEETING_ID_LENGTH: usize = 10;

/// Generates a meeting id of exactly `length` alphanumeric characters.
///
/// Each character is drawn uniformly, with replacement, from
/// [`MEETING_ID_ALPHABET`]. Ids are not guaranteed to be unique.
///
/// # Example
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use videomeet_core::generate_meeting_id;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let id = generate_meeting_id(&mut rng, 10);
/// assert_eq!(id.len(), 10);
/// ```
pub fn generate_meeting_id<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| {
            let index = rng.random_range(0..MEETING_ID_ALPHABET.len());
            char::from(MEETING_ID_ALPHABET[index])
        })
        .collect()
}

/// Like [`generate_meeting_id`], for lengths that arrive as signed values.
///
/// # Errors
///
/// Returns [`MeetingError::InvalidArgument`] if `length` is negative.
pub fn generate_meeting_id_checked<R: Rng + ?Sized>(
    rng: &mut R,
    length: i64,
) -> MeetingResult<String> {
    let length = usize::try_from(length).map_err(|_| {
        MeetingError::invalid_argument("length", format!("must be non-negative, got {length}"))
    })?;
    Ok(generate_meeting_id(rng, length))
}
