//! Flue-gas composition (species → percent by volume).

use crate::error::{CombustionError, CombustionResult};
use crate::species::FlueSpecies;
use bf_core::numeric::ensure_finite;
use serde::{Deserialize, Serialize};

/// Flue-gas split as percent by volume.
///
/// Percentages are reported as the sub-model produced them; they are not
/// normalized here. The reference model's split sums to 100, but a
/// correlation-based model may report e.g. a trace-species subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlueComposition {
    pub(crate) items: Vec<(FlueSpecies, f64)>,
}

impl FlueComposition {
    /// Create a composition from species percentages.
    ///
    /// Rejects empty splits and non-finite or negative percentages; those
    /// can only come from a buggy `CombustionModel` implementation.
    pub fn from_percentages(items: Vec<(FlueSpecies, f64)>) -> CombustionResult<Self> {
        if items.is_empty() {
            return Err(CombustionError::InvalidArg {
                what: "empty composition",
            });
        }
        for (_, pct) in &items {
            ensure_finite(*pct, "composition percentage").map_err(|_| {
                CombustionError::NonPhysical {
                    what: "non-finite composition percentage",
                }
            })?;
            if *pct < 0.0 {
                return Err(CombustionError::NonPhysical {
                    what: "negative composition percentage",
                });
            }
        }
        Ok(Self { items })
    }

    /// Get the percentage of a species (0.0 if not reported).
    pub fn percent(&self, species: FlueSpecies) -> f64 {
        self.items
            .iter()
            .find(|(s, _)| *s == species)
            .map(|(_, pct)| *pct)
            .unwrap_or(0.0)
    }

    /// Iterate over all reported species.
    pub fn iter(&self) -> impl Iterator<Item = (FlueSpecies, f64)> + '_ {
        self.items.iter().copied()
    }

    /// Sum of all reported percentages.
    pub fn total_percent(&self) -> f64 {
        self.items.iter().map(|(_, pct)| pct).sum()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn accepts_any_finite_non_negative_split(pcts in prop::collection::vec(0.0_f64..100.0_f64, 1..4)) {
            let items: Vec<(FlueSpecies, f64)> = pcts
                .iter()
                .enumerate()
                .map(|(i, &pct)| (FlueSpecies::ALL[i % FlueSpecies::ALL.len()], pct))
                .collect();

            let comp = FlueComposition::from_percentages(items.clone()).unwrap();
            let (first_species, first_pct) = items[0];
            prop_assert_eq!(comp.percent(first_species), first_pct);
        }
    }
}
