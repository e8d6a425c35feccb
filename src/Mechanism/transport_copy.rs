//! # Transport Data Copy Module
//!
//! ## Aim
//! Fills in missing transport data of species by taking it from a reference mechanism.
//! Typical use: a mechanism reduced or assembled by hand lacks the transport block for
//! some species, while a larger, well curated mechanism has them.
//!
//! ## Logic
//! For every target species (in order):
//! 1. species that already carry transport data are skipped unless `overwrite` is set;
//!    skipped species are reported neither as copied nor as failed
//! 2. the species with the same name is looked up in the reference mechanism
//! 3. found - its transport data is cloned into the target species (`copied`),
//!    not found - the species goes to `failed` and the loop goes on
//!
//! Target species are changed in place: when they came from a `Solution`, that
//! mechanism sees the new transport data.
//!
//! ## Usage
//! ```rust, ignore
//! let gas = Solution::from_path("reduced.json")?;
//! let result = copy_transport_data_from_path(&gas, "detailed.json", false)?;
//! result.pretty_print();
//! gas.save_to_json("reduced_with_transport.json")?;
//! ```

use super::mech_error::MechanismError;
use super::solution::{JsonMechanismLoader, MechanismLoader, Solution};
use super::species::SpeciesRef;
use crate::config_manager::ToolsConfig;
use log::{debug, info, warn};
use prettytable::{Table, row};
use std::path::Path;
use std::rc::Rc;

/// target species of a transport copy
#[derive(Debug, Clone)]
pub enum SpeciesSelection<'a> {
    /// every species of the mechanism
    AllSpeciesOf(&'a Solution),
    Single(SpeciesRef),
    Many(Vec<SpeciesRef>),
}

impl SpeciesSelection<'_> {
    /// flatten into an ordered list of species handles
    pub fn into_species(self) -> Vec<SpeciesRef> {
        match self {
            SpeciesSelection::AllSpeciesOf(solution) => solution.species(),
            SpeciesSelection::Single(sp) => vec![sp],
            SpeciesSelection::Many(vec_of_species) => vec_of_species,
        }
    }
}

impl<'a> From<&'a Solution> for SpeciesSelection<'a> {
    fn from(solution: &'a Solution) -> Self {
        SpeciesSelection::AllSpeciesOf(solution)
    }
}

impl<'a> From<&'a Rc<Solution>> for SpeciesSelection<'a> {
    fn from(solution: &'a Rc<Solution>) -> Self {
        SpeciesSelection::AllSpeciesOf(solution.as_ref())
    }
}

impl From<SpeciesRef> for SpeciesSelection<'_> {
    fn from(sp: SpeciesRef) -> Self {
        SpeciesSelection::Single(sp)
    }
}

impl From<&SpeciesRef> for SpeciesSelection<'_> {
    fn from(sp: &SpeciesRef) -> Self {
        SpeciesSelection::Single(Rc::clone(sp))
    }
}

impl From<Vec<SpeciesRef>> for SpeciesSelection<'_> {
    fn from(vec_of_species: Vec<SpeciesRef>) -> Self {
        SpeciesSelection::Many(vec_of_species)
    }
}

impl From<&[SpeciesRef]> for SpeciesSelection<'_> {
    fn from(vec_of_species: &[SpeciesRef]) -> Self {
        SpeciesSelection::Many(vec_of_species.iter().map(Rc::clone).collect())
    }
}

/// outcome of a transport copy: species that got transport data and species absent in the reference
#[derive(Debug, Clone, Default)]
pub struct CopyResult {
    copied: Vec<SpeciesRef>,
    failed: Vec<SpeciesRef>,
}

impl CopyResult {
    pub fn copied(&self) -> &[SpeciesRef] {
        &self.copied
    }

    pub fn failed(&self) -> &[SpeciesRef] {
        &self.failed
    }

    pub fn copied_names(&self) -> Vec<String> {
        names_of(&self.copied)
    }

    pub fn failed_names(&self) -> Vec<String> {
        names_of(&self.failed)
    }

    /// true when no species was missing in the reference
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn into_parts(self) -> (Vec<SpeciesRef>, Vec<SpeciesRef>) {
        (self.copied, self.failed)
    }

    pub fn pretty_print(&self) {
        let mut table = Table::new();
        table.add_row(row!["Species", "Status", "Geometry", "Diameter, A", "Well depth, K"]);
        for sp in &self.copied {
            let sp = sp.borrow();
            match &sp.transport {
                Some(tr) => table.add_row(row![
                    sp.name,
                    "copied",
                    tr.geometry.as_str(),
                    tr.diameter,
                    tr.well_depth
                ]),
                None => table.add_row(row![sp.name, "copied", "-", "-", "-"]),
            };
        }
        for sp in &self.failed {
            table.add_row(row![sp.borrow().name, "not found", "-", "-", "-"]);
        }
        table.printstd();
    }
}

fn names_of(vec_of_species: &[SpeciesRef]) -> Vec<String> {
    vec_of_species
        .iter()
        .map(|sp| sp.borrow().name.clone())
        .collect()
}

/// Copy transport data from the reference mechanism onto the selected species.
pub fn copy_transport_data<'a>(
    species: impl Into<SpeciesSelection<'a>>,
    reference: &Solution,
    overwrite: bool,
) -> CopyResult {
    let vec_of_species = species.into().into_species();
    let mut result = CopyResult::default();

    for sp in vec_of_species {
        let (name, has_transport) = {
            let sp = sp.borrow();
            (sp.name.clone(), sp.has_transport())
        };
        if has_transport && !overwrite {
            debug!("'{}' already has transport data, skipped", name);
            continue;
        }

        match reference.species_index(&name) {
            Some(i) => {
                let transport = match reference.species_at(i) {
                    Some(ref_sp) => {
                        let transport = ref_sp.borrow().transport.clone();
                        transport
                    }
                    None => None,
                };
                sp.borrow_mut().transport = transport;
                debug!("transport data of '{}' copied from '{}'", name, reference.name());
                result.copied.push(sp);
            }
            None => {
                warn!("'{}' not found in reference mechanism '{}'", name, reference.name());
                result.failed.push(sp);
            }
        }
    }

    info!(
        "transport data copied for {} species, {} species not found in '{}'",
        result.copied.len(),
        result.failed.len(),
        reference.name()
    );
    result
}

/// Same as `copy_transport_data`, the reference mechanism is loaded from file with the JSON loader.
pub fn copy_transport_data_from_path<'a, P: AsRef<Path>>(
    species: impl Into<SpeciesSelection<'a>>,
    reference_path: P,
    overwrite: bool,
) -> Result<CopyResult, MechanismError> {
    copy_transport_data_with_loader(species, reference_path, overwrite, &JsonMechanismLoader)
}

pub fn copy_transport_data_with_loader<'a, P: AsRef<Path>>(
    species: impl Into<SpeciesSelection<'a>>,
    reference_path: P,
    overwrite: bool,
    loader: &dyn MechanismLoader,
) -> Result<CopyResult, MechanismError> {
    let reference = loader.load(reference_path.as_ref())?;
    Ok(copy_transport_data(species, &reference, overwrite))
}

/// Copy using the reference mechanism and overwrite flag from the configuration.
pub fn copy_transport_with_config<'a>(
    species: impl Into<SpeciesSelection<'a>>,
    config: &ToolsConfig,
) -> Result<CopyResult, MechanismError> {
    let reference_path = config
        .default_reference
        .as_deref()
        .ok_or(MechanismError::NoReferenceConfigured)?;
    copy_transport_data_from_path(species, reference_path, config.overwrite)
}
