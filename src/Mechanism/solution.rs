//! # Mechanism Handle Module
//!
//! ## Aim
//! `Solution` is the handle of a loaded chemical mechanism: a name, a list of elements
//! and an ordered list of species. Species are handed out as shared `SpeciesRef`
//! handles, so any change made through them is seen by the mechanism itself.
//!
//! ## Main Data Structures and Logic
//! - `Solution`: mechanism handle. The species list sits behind a `RefCell` so a
//!   mechanism shared through `Rc<Solution>` can still be extended.
//! - `MechanismInput`: serde image of a mechanism document
//! - `MechanismLoader`: the loading collaborator (path -> `Solution`)
//! - `JsonMechanismLoader`: default loader reading JSON mechanism documents
//! - `MechanismSource`: "path or already loaded handle" argument
//!
//! ## Mechanism document
//! ```json
//! {
//!   "name": "h2o2",
//!   "elements": ["H", "O"],
//!   "species": [
//!     { "name": "H2", "composition": {"H": 2},
//!       "transport": { "geometry": "linear", "diameter": 2.92, "well_depth": 38.0 } }
//!   ]
//! }
//! ```

use super::mech_error::MechanismError;
use super::species::{Species, SpeciesRef};
use crate::Utils::load_from_file::{read_json_file, write_json_file};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// serde image of a mechanism file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MechanismInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub elements: Vec<String>,
    #[serde(default)]
    pub species: Vec<Species>,
}

#[derive(Debug)]
pub struct Solution {
    name: String,
    elements: Vec<String>,
    species: RefCell<Vec<SpeciesRef>>,
}

impl Solution {
    pub fn new(name: &str, elements: Vec<String>, species: Vec<Species>) -> Self {
        let species: Vec<SpeciesRef> = species.into_iter().map(Species::into_ref).collect();
        let mut seen = HashSet::new();
        for sp in &species {
            let sp_name = sp.borrow().name.clone();
            if !seen.insert(sp_name.clone()) {
                warn!(
                    "Species '{}' is defined more than once, lookups return the first one",
                    sp_name
                );
            }
        }
        Self {
            name: name.to_string(),
            elements,
            species: RefCell::new(species),
        }
    }

    pub fn from_input(input: MechanismInput) -> Self {
        Self::new(&input.name, input.elements, input.species)
    }

    /// load mechanism with the default JSON loader
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, MechanismError> {
        JsonMechanismLoader.load(path.as_ref())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    pub fn n_species(&self) -> usize {
        self.species.borrow().len()
    }

    /// handles to all species, in mechanism order
    pub fn species(&self) -> Vec<SpeciesRef> {
        self.species.borrow().iter().map(Rc::clone).collect()
    }

    pub fn species_at(&self, index: usize) -> Option<SpeciesRef> {
        self.species.borrow().get(index).map(Rc::clone)
    }

    /// position of the species with the given name, None if the mechanism has no such species
    pub fn species_index(&self, name: &str) -> Option<usize> {
        self.species
            .borrow()
            .iter()
            .position(|sp| sp.borrow().name == name)
    }

    pub fn species_by_name(&self, name: &str) -> Option<SpeciesRef> {
        self.species_index(name).and_then(|i| self.species_at(i))
    }

    pub fn species_names(&self) -> Vec<String> {
        self.species
            .borrow()
            .iter()
            .map(|sp| sp.borrow().name.clone())
            .collect()
    }

    pub fn add_species(&self, species: Species) -> SpeciesRef {
        if self.species_index(&species.name).is_some() {
            warn!(
                "Species '{}' already present in mechanism '{}'",
                species.name, self.name
            );
        }
        let sp = species.into_ref();
        self.species.borrow_mut().push(Rc::clone(&sp));
        sp
    }

    /// snapshot of the current state of the mechanism
    pub fn to_input(&self) -> MechanismInput {
        MechanismInput {
            name: self.name.clone(),
            elements: self.elements.clone(),
            species: self
                .species
                .borrow()
                .iter()
                .map(|sp| sp.borrow().clone())
                .collect(),
        }
    }

    pub fn save_to_json<P: AsRef<Path>>(&self, path: P) -> Result<(), MechanismError> {
        write_json_file(path.as_ref(), &self.to_input())
    }
}

/// Loading collaborator: turns a path into a mechanism handle.
pub trait MechanismLoader {
    fn load(&self, path: &Path) -> Result<Solution, MechanismError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMechanismLoader;

impl MechanismLoader for JsonMechanismLoader {
    fn load(&self, path: &Path) -> Result<Solution, MechanismError> {
        let input: MechanismInput = read_json_file(path)?;
        let solution = Solution::from_input(input);
        info!(
            "Loaded mechanism '{}' with {} species from '{}'",
            solution.name(),
            solution.n_species(),
            path.display()
        );
        Ok(solution)
    }
}

/// mechanism given either as a file path or as an already loaded handle
#[derive(Debug, Clone)]
pub enum MechanismSource {
    Path(PathBuf),
    Handle(Rc<Solution>),
}

impl MechanismSource {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        MechanismSource::Path(path.as_ref().to_path_buf())
    }

    pub fn from_handle(handle: Rc<Solution>) -> Self {
        MechanismSource::Handle(handle)
    }

    pub fn resolve(self, loader: &dyn MechanismLoader) -> Result<Rc<Solution>, MechanismError> {
        match self {
            MechanismSource::Path(path) => Ok(Rc::new(loader.load(&path)?)),
            MechanismSource::Handle(handle) => Ok(handle),
        }
    }
}

impl From<&str> for MechanismSource {
    fn from(path: &str) -> Self {
        MechanismSource::from_path(path)
    }
}

impl From<String> for MechanismSource {
    fn from(path: String) -> Self {
        MechanismSource::Path(PathBuf::from(path))
    }
}

impl From<&Path> for MechanismSource {
    fn from(path: &Path) -> Self {
        MechanismSource::from_path(path)
    }
}

impl From<PathBuf> for MechanismSource {
    fn from(path: PathBuf) -> Self {
        MechanismSource::Path(path)
    }
}

impl From<Rc<Solution>> for MechanismSource {
    fn from(handle: Rc<Solution>) -> Self {
        MechanismSource::Handle(handle)
    }
}

impl From<&Rc<Solution>> for MechanismSource {
    fn from(handle: &Rc<Solution>) -> Self {
        MechanismSource::Handle(Rc::clone(handle))
    }
}

impl From<Solution> for MechanismSource {
    fn from(solution: Solution) -> Self {
        MechanismSource::Handle(Rc::new(solution))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mechanism::species::{GasTransportData, TransportGeometry};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const H2O2: &str = r#"{
        "name": "h2o2",
        "elements": ["H", "O"],
        "species": [
            { "name": "H2", "composition": {"H": 2},
              "transport": { "geometry": "linear", "diameter": 2.92, "well_depth": 38.0,
                             "polarizability": 0.79, "rotational_relaxation": 280.0 } },
            { "name": "O2", "composition": {"O": 2} },
            { "name": "H2O", "composition": {"H": 2, "O": 1},
              "thermo": { "model": "NASA7", "T-ranges": [200.0, 1000.0, 3500.0] } }
        ]
    }"#;

    fn write_mech(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_from_path() {
        let file = write_mech(H2O2);
        let gas = Solution::from_path(file.path()).unwrap();
        assert_eq!(gas.name(), "h2o2");
        assert_eq!(gas.elements(), &["H".to_string(), "O".to_string()]);
        assert_eq!(gas.species_names(), vec!["H2", "O2", "H2O"]);
        assert_eq!(gas.species_index("O2"), Some(1));
        assert_eq!(gas.species_index("N2"), None);
        let h2 = gas.species_at(0).unwrap();
        assert_eq!(
            h2.borrow().transport.as_ref().map(|t| t.geometry),
            Some(TransportGeometry::Linear)
        );
        assert!(gas.species_by_name("H2O").unwrap().borrow().thermo.is_some());
    }

    #[test]
    fn test_load_missing_file() {
        let res = Solution::from_path("definitely_missing_mechanism.json");
        assert!(matches!(res, Err(MechanismError::FileNotFound(_))));
    }

    #[test]
    fn test_load_malformed_file() {
        let file = write_mech(r#"{ "name": "broken", "species": [ { "name": 5 } ] }"#);
        let res = Solution::from_path(file.path());
        assert!(matches!(res, Err(MechanismError::Parse { .. })));
    }

    #[test]
    fn test_species_handles_alias_mechanism() {
        let gas = Solution::new("test", vec![], vec![Species::new("O2")]);
        let o2 = gas.species()[0].clone();
        o2.borrow_mut().transport =
            Some(GasTransportData::new(TransportGeometry::Linear, 3.458, 107.4));
        assert!(gas.species_at(0).unwrap().borrow().has_transport());
    }

    #[test]
    fn test_add_species_through_shared_handle() {
        let gas = Rc::new(Solution::new("test", vec![], vec![Species::new("H2")]));
        let alias = Rc::clone(&gas);
        alias.add_species(Species::new("AR"));
        assert_eq!(gas.species_names(), vec!["H2", "AR"]);
    }

    #[test]
    fn test_duplicate_names_resolve_to_first() {
        let gas = Solution::new(
            "dup",
            vec![],
            vec![Species::new("N2"), Species::new("N2")],
        );
        assert_eq!(gas.n_species(), 2);
        assert_eq!(gas.species_index("N2"), Some(0));
    }

    #[test]
    fn test_save_and_reload() {
        let file = write_mech(H2O2);
        let gas = Solution::from_path(file.path()).unwrap();
        gas.species_by_name("O2").unwrap().borrow_mut().transport =
            Some(GasTransportData::new(TransportGeometry::Linear, 3.458, 107.4));

        let out = NamedTempFile::new().unwrap();
        gas.save_to_json(out.path()).unwrap();
        let reloaded = Solution::from_path(out.path()).unwrap();
        assert_eq!(reloaded.species_names(), gas.species_names());
        assert_eq!(
            reloaded.species_by_name("O2").unwrap().borrow().transport,
            gas.species_by_name("O2").unwrap().borrow().transport
        );
    }

    #[test]
    fn test_mechanism_source_resolution() {
        let gas = Rc::new(Solution::new("handle", vec![], vec![]));
        let resolved = MechanismSource::from(&gas)
            .resolve(&JsonMechanismLoader)
            .unwrap();
        assert!(Rc::ptr_eq(&gas, &resolved));

        let file = write_mech(H2O2);
        let loaded = MechanismSource::from(file.path())
            .resolve(&JsonMechanismLoader)
            .unwrap();
        assert_eq!(loaded.n_species(), 3);

        let missing = MechanismSource::from("missing.json").resolve(&JsonMechanismLoader);
        assert!(missing.is_err());
    }
}
