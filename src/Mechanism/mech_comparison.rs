//! # Mechanism Comparison Module
//!
//! ## Aim
//! Compares the species sets of two mechanisms: which species only the first mechanism
//! has, which species both have and which only the second one has.
//!
//! ## Usage
//! ```rust, ignore
//! let cmp = MechComparison::new("gri30.json", "h2o2.json")?;
//! let partition = cmp.species_partition();
//! println!("{:?}", partition.only_first);
//! ```
//! The partition is computed on every call, so species added to either mechanism in
//! between are taken into account.

use super::mech_error::MechanismError;
use super::solution::{JsonMechanismLoader, MechanismLoader, MechanismSource, Solution};
use prettytable::{Table, row};
use std::collections::BTreeSet;
use std::path::Path;
use std::rc::Rc;

/// three-way split of the species names of two mechanisms
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpeciesPartition {
    /// species only in the first mechanism
    pub only_first: BTreeSet<String>,
    /// species in both mechanisms
    pub both: BTreeSet<String>,
    /// species only in the second mechanism
    pub only_second: BTreeSet<String>,
}

impl SpeciesPartition {
    /// both mechanisms have exactly the same species names
    pub fn is_identical(&self) -> bool {
        self.only_first.is_empty() && self.only_second.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct MechComparison {
    first: Rc<Solution>,
    second: Rc<Solution>,
}

impl MechComparison {
    /// Each argument may be a path to a mechanism file or an already loaded mechanism.
    pub fn new(
        first: impl Into<MechanismSource>,
        second: impl Into<MechanismSource>,
    ) -> Result<Self, MechanismError> {
        Self::new_with_loader(first, second, &JsonMechanismLoader)
    }

    pub fn new_with_loader(
        first: impl Into<MechanismSource>,
        second: impl Into<MechanismSource>,
        loader: &dyn MechanismLoader,
    ) -> Result<Self, MechanismError> {
        let first = first.into().resolve(loader)?;
        let second = second.into().resolve(loader)?;
        Ok(Self { first, second })
    }

    pub fn from_handles(first: Rc<Solution>, second: Rc<Solution>) -> Self {
        Self { first, second }
    }

    pub fn from_paths<P: AsRef<Path>, Q: AsRef<Path>>(
        first: P,
        second: Q,
    ) -> Result<Self, MechanismError> {
        Self::new(
            MechanismSource::from_path(first),
            MechanismSource::from_path(second),
        )
    }

    pub fn first(&self) -> &Solution {
        &self.first
    }

    pub fn second(&self) -> &Solution {
        &self.second
    }

    pub fn species_partition(&self) -> SpeciesPartition {
        let first_species: BTreeSet<String> = self.first.species_names().into_iter().collect();
        let second_species: BTreeSet<String> = self.second.species_names().into_iter().collect();

        SpeciesPartition {
            only_first: first_species.difference(&second_species).cloned().collect(),
            both: first_species.intersection(&second_species).cloned().collect(),
            only_second: second_species.difference(&first_species).cloned().collect(),
        }
    }

    pub fn pretty_print(&self) {
        let partition = self.species_partition();
        let join = |set: &BTreeSet<String>| set.iter().cloned().collect::<Vec<_>>().join(", ");
        let mut table = Table::new();
        table.add_row(row![
            format!("Only in '{}'", self.first.name()),
            "In both",
            format!("Only in '{}'", self.second.name())
        ]);
        table.add_row(row![
            join(&partition.only_first),
            join(&partition.both),
            join(&partition.only_second)
        ]);
        table.printstd();
    }
}
