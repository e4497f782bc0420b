//! Panel identifier generation
//!
//! A microinverter chain is addressed by the identifier of its first panel;
//! the remaining panels carry sequential identifiers.

use std::fmt;
use tracing::{debug, error};

use crate::error::{InverterError, Result};

/// Decimal identifier of one panel, as it appears in ASCII on the wire
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PanelId(String);

impl PanelId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Width of the identifier in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for PanelId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PanelId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Generate `count` sequential panel identifiers starting at `base`
///
/// Identifiers are plain decimal renderings of `base + i`; they are not
/// zero-padded to the width of `base`.
pub fn generate_panel_ids(base: &str, count: usize) -> Result<Vec<PanelId>> {
    let numeric_base: u64 = base.trim().parse().map_err(|e| {
        error!(base_id = base, "Invalid base panel id, expected a numeric string");
        InverterError::InvalidConfiguration(format!(
            "base panel id {:?} is not numeric: {}",
            base, e
        ))
    })?;

    if count == 0 {
        error!(base_id = base, "Panel count must be at least 1");
        return Err(InverterError::InvalidConfiguration(
            "panel count must be at least 1".to_string(),
        ));
    }

    // The last identifier must still fit
    if numeric_base.checked_add(count as u64 - 1).is_none() {
        return Err(InverterError::InvalidConfiguration(format!(
            "{} panels starting at {} overflow the identifier range",
            count, numeric_base
        )));
    }

    let ids: Vec<PanelId> = (0..count as u64)
        .map(|i| PanelId((numeric_base + i).to_string()))
        .collect();

    debug!(
        base_id = base,
        count,
        "Generated panel ids: {}",
        ids.iter().map(PanelId::as_str).collect::<Vec<_>>().join(", ")
    );

    Ok(ids)
}
