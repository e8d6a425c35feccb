//! # Species Records Module
//!
//! ## Aim
//! Holds the per-species records of a mechanism: the name, elemental composition,
//! opaque thermodynamic block and the gas transport parameters (Lennard-Jones
//! collision data) that are used by transport models.
//!
//! ## Main Data Structures and Logic
//! - `Species`: one species of a mechanism
//! - `SpeciesRef`: shared handle to a species. A species taken from a `Solution`
//!   points to the very same record the `Solution` holds, so writing into it
//!   changes the mechanism.
//! - `GasTransportData`: transport parameters in the usual mechanism-file layout
//! - `TransportGeometry`: atom, linear or nonlinear molecule
//!
//! ## Usage
//! ```rust, ignore
//! let h2 = Species::new("H2").with_composition(&[("H", 2.0)]).into_ref();
//! h2.borrow_mut().transport = Some(GasTransportData::new(TransportGeometry::Linear, 2.92, 38.0));
//! ```

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// shared handle to a species record
pub type SpeciesRef = Rc<RefCell<Species>>;

/// Form of the molecule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportGeometry {
    Atom,
    Linear,
    Nonlinear,
}

impl TransportGeometry {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Atom => "atom",
            Self::Linear => "linear",
            Self::Nonlinear => "nonlinear",
        }
    }
}

/// Gas transport parameters of a single species
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasTransportData {
    pub geometry: TransportGeometry,
    ///  Lennard-Jones collision diameter in angstroms
    pub diameter: f64,
    /// Lennard-Jones well depth in Kelvin
    pub well_depth: f64,
    ///  dipole moment in Debye. Default: 0.0
    #[serde(default)]
    pub dipole: f64,
    ///  Polarizability in A^3. Default: 0.0
    #[serde(default)]
    pub polarizability: f64,
    ///  Number of rotational relaxation collisions at 298 K.  Dimensionless. Default: 0.0
    #[serde(default)]
    pub rotational_relaxation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acentric_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl GasTransportData {
    pub fn new(geometry: TransportGeometry, diameter: f64, well_depth: f64) -> Self {
        Self {
            geometry,
            diameter,
            well_depth,
            dipole: 0.0,
            polarizability: 0.0,
            rotational_relaxation: 0.0,
            acentric_factor: None,
            note: None,
        }
    }
}

/// A single species of a mechanism
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub name: String,
    /// element -> number of atoms
    #[serde(default)]
    pub composition: BTreeMap<String, f64>,
    /// thermodynamic data block, kept as is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thermo: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<GasTransportData>,
}

impl Species {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            composition: BTreeMap::new(),
            thermo: None,
            transport: None,
        }
    }

    pub fn with_composition(mut self, composition: &[(&str, f64)]) -> Self {
        self.composition = composition
            .iter()
            .map(|(element, n)| (element.to_string(), *n))
            .collect();
        self
    }

    pub fn with_transport(mut self, transport: GasTransportData) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn has_transport(&self) -> bool {
        self.transport.is_some()
    }

    /// wrap the record into a shared handle
    pub fn into_ref(self) -> SpeciesRef {
        Rc::new(RefCell::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_defaults_from_json() {
        let data: GasTransportData = serde_json::from_str(
            r#"{ "geometry": "linear", "diameter": 3.621, "well_depth": 97.53 }"#,
        )
        .unwrap();
        assert_eq!(data.geometry, TransportGeometry::Linear);
        assert_eq!(data.dipole, 0.0);
        assert_eq!(data.polarizability, 0.0);
        assert_eq!(data.rotational_relaxation, 0.0);
        assert!(data.acentric_factor.is_none());
    }

    #[test]
    fn test_unknown_geometry_is_rejected() {
        let res: Result<GasTransportData, _> = serde_json::from_str(
            r#"{ "geometry": "sphere", "diameter": 3.0, "well_depth": 100.0 }"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn test_species_ref_aliasing() {
        let sp = Species::new("O2").with_composition(&[("O", 2.0)]).into_ref();
        let alias = Rc::clone(&sp);
        alias.borrow_mut().transport =
            Some(GasTransportData::new(TransportGeometry::Linear, 3.458, 107.4));
        assert!(sp.borrow().has_transport());
        assert_eq!(sp.borrow().composition.get("O"), Some(&2.0));
    }
}
