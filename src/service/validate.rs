//! Caller-input checks run before selection.

use std::collections::BTreeSet;

use crate::cli::types::PlayerId;
use crate::engine::{parse_formation, SquadRequest};
use crate::error::{FplError, Result};

/// Largest budget accepted, in millions.
pub const MAX_BUDGET: f64 = 100.0;

pub fn validate_budget(budget: f64) -> Result<()> {
    if !budget.is_finite() || budget <= 0.0 || budget > MAX_BUDGET {
        return Err(FplError::InvalidBudget { budget });
    }
    Ok(())
}

/// Reject a request that selection must never see.
///
/// Checks run in order: budget, formation, must-have/excluded overlap,
/// then unknown ids (must-have first). The first failure is returned.
pub fn validate_squad_request(
    request: &SquadRequest,
    known_ids: &BTreeSet<PlayerId>,
) -> Result<()> {
    validate_budget(request.budget)?;
    parse_formation(&request.formation)?;

    if let Some(id) = request.must_have.intersection(&request.excluded).next() {
        return Err(FplError::ConflictingPlayer { player_id: *id });
    }

    for (ids, role) in [(&request.must_have, "Must-have"), (&request.excluded, "Excluded")] {
        if let Some(id) = ids.iter().find(|id| !known_ids.contains(*id)) {
            return Err(FplError::UnknownPlayer {
                player_id: *id,
                role: role.to_string(),
            });
        }
    }

    Ok(())
}
