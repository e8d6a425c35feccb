//! # Mechanism Tools
//!
//! Utilities working on loaded chemical kinetics mechanisms:
//! - copying transport data from a reference mechanism onto species that lack it
//! - comparing the species sets of two mechanisms
//!
//! # Examples
//! ```
//! use mechtools::Mechanism::solution::Solution;
//! use mechtools::Mechanism::species::{GasTransportData, Species, TransportGeometry};
//! use mechtools::Mechanism::transport_copy::copy_transport_data;
//!
//! let target = Solution::new(
//!     "reduced",
//!     vec!["H".to_string(), "O".to_string()],
//!     vec![Species::new("H2"), Species::new("O2"), Species::new("H2O")],
//! );
//! let reference = Solution::new(
//!     "detailed",
//!     vec!["H".to_string(), "O".to_string(), "N".to_string()],
//!     vec![
//!         Species::new("H2").with_transport(GasTransportData::new(TransportGeometry::Linear, 2.92, 38.0)),
//!         Species::new("O2").with_transport(GasTransportData::new(TransportGeometry::Linear, 3.458, 107.4)),
//!         Species::new("N2").with_transport(GasTransportData::new(TransportGeometry::Linear, 3.621, 97.53)),
//!     ],
//! );
//! let result = copy_transport_data(&target, &reference, false);
//! assert_eq!(result.copied_names(), vec!["H2", "O2"]);
//! assert_eq!(result.failed_names(), vec!["H2O"]);
//! assert!(target.species_by_name("O2").unwrap().borrow().has_transport());
//! ```
//!
//! ```
//! use mechtools::Mechanism::mech_comparison::MechComparison;
//! use mechtools::Mechanism::solution::Solution;
//! use mechtools::Mechanism::species::Species;
//! use std::rc::Rc;
//!
//! let first = Rc::new(Solution::new("A", vec![], vec![Species::new("H2"), Species::new("OH")]));
//! let second = Rc::new(Solution::new("B", vec![], vec![Species::new("H2"), Species::new("N2")]));
//! let partition = MechComparison::from_handles(first, second).species_partition();
//! assert!(partition.only_first.contains("OH"));
//! assert!(partition.both.contains("H2"));
//! assert!(partition.only_second.contains("N2"));
//! ```
pub mod mech_comparison;
pub mod mech_error;
/// mechanism handle, loading collaborator and JSON mechanism documents
pub mod solution;
/// species records and their transport parameters
pub mod species;
/// copying transport data from a reference mechanism
pub mod transport_copy;
