//! Party level validation.

use thiserror::Error;

/// Lowest character level accepted in a party.
pub const MIN_LEVEL: i32 = 1;
/// Highest character level accepted in a party.
pub const MAX_LEVEL: i32 = 20;

/// Why a list of party levels was rejected.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PartyLevelError {
    #[error("Inserisci almeno un livello")]
    Empty,
    #[error("I livelli devono essere tra 1 e 20")]
    OutOfRange,
}

/// Validate a party's character levels.
///
/// `None` and an empty slice are both rejected as [`PartyLevelError::Empty`].
/// The first level outside `MIN_LEVEL..=MAX_LEVEL` stops the scan.
pub fn validate_party_levels(levels: Option<&[i32]>) -> Result<(), PartyLevelError> {
    let levels = match levels {
        Some(levels) if !levels.is_empty() => levels,
        _ => return Err(PartyLevelError::Empty),
    };

    if levels
        .iter()
        .any(|level| !(MIN_LEVEL..=MAX_LEVEL).contains(level))
    {
        return Err(PartyLevelError::OutOfRange);
    }

    Ok(())
}

/// Turn a level coming from a script into a whole level.
///
/// Numbers inside `MIN_LEVEL..=MAX_LEVEL` are truncated (`4.5` -> 4); anything
/// else, `NaN` and infinities included, becomes 0 so validation rejects it.
pub fn coerce_level(value: f64) -> i32 {
    if (f64::from(MIN_LEVEL)..=f64::from(MAX_LEVEL)).contains(&value) {
        value as i32
    } else {
        0
    }
}
