//! Formation descriptors such as `4-4-2`.

use std::collections::BTreeMap;

use crate::cli::types::Position;
use crate::error::{FplError, Result};

/// Required player count per position. Iterates in formation order.
pub type Formation = BTreeMap<Position, usize>;

/// Parse a `D-M-F` formation. The goalkeeper slot is implicit and always 1.
///
/// # Examples
///
/// ```rust
/// use fpl_mvp::{engine::formation::parse_formation, Position};
///
/// let formation = parse_formation("3-5-2").unwrap();
/// assert_eq!(formation[&Position::Goalkeeper], 1);
/// assert_eq!(formation[&Position::Midfielder], 5);
/// ```
pub fn parse_formation(descriptor: &str) -> Result<Formation> {
    let invalid = || FplError::InvalidFormation {
        formation: descriptor.to_string(),
    };

    let counts = descriptor
        .trim()
        .split('-')
        .map(|part| match part.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(invalid()),
        })
        .collect::<Result<Vec<usize>>>()?;

    let [defenders, midfielders, forwards] = counts[..] else {
        return Err(invalid());
    };

    Ok(BTreeMap::from([
        (Position::Goalkeeper, 1),
        (Position::Defender, defenders),
        (Position::Midfielder, midfielders),
        (Position::Forward, forwards),
    ]))
}
