use crate::Mechanism::mech_comparison::MechComparison;
use crate::Mechanism::solution::Solution;
use crate::Mechanism::species::{GasTransportData, Species, TransportGeometry};
use crate::Mechanism::transport_copy::{copy_transport_data, copy_transport_with_config};
use crate::config_manager::with_config_manager;
use std::rc::Rc;

fn transport(geometry: TransportGeometry, diameter: f64, well_depth: f64) -> GasTransportData {
    GasTransportData::new(geometry, diameter, well_depth)
}
/// small H2/O2 mechanism without transport data
fn reduced_mechanism() -> Solution {
    Solution::new(
        "reduced",
        vec!["H".to_string(), "O".to_string()],
        vec![
            Species::new("H2").with_composition(&[("H", 2.0)]),
            Species::new("O2").with_composition(&[("O", 2.0)]),
            Species::new("H2O").with_composition(&[("H", 2.0), ("O", 1.0)]),
            Species::new("HO2").with_composition(&[("H", 1.0), ("O", 2.0)]),
        ],
    )
}
/// reference mechanism with transport data
fn detailed_mechanism() -> Solution {
    let mut h2o = transport(TransportGeometry::Nonlinear, 2.605, 572.4);
    h2o.dipole = 1.844;
    h2o.rotational_relaxation = 4.0;
    Solution::new(
        "detailed",
        vec!["H".to_string(), "O".to_string(), "N".to_string()],
        vec![
            Species::new("H2").with_transport(transport(TransportGeometry::Linear, 2.92, 38.0)),
            Species::new("O2").with_transport(transport(TransportGeometry::Linear, 3.458, 107.4)),
            Species::new("H2O").with_transport(h2o),
            Species::new("N2").with_transport(transport(TransportGeometry::Linear, 3.621, 97.53)),
            Species::new("AR").with_transport(transport(TransportGeometry::Atom, 3.33, 136.5)),
        ],
    )
}

pub fn mechtools_examples(task: usize) {
    match task {
        0 => {
            // COPY TRANSPORT DATA
            let reduced = reduced_mechanism();
            let detailed = detailed_mechanism();
            let result = copy_transport_data(&reduced, &detailed, false);
            result.pretty_print();
            // second pass finds nothing to do
            let again = copy_transport_data(&reduced, &detailed, false);
            println!("copied on second pass: {:?}", again.copied_names());
            println!("still without transport: {:?}", again.failed_names());
        }
        1 => {
            // COMPARE MECHANISMS
            let comparison = MechComparison::from_handles(
                Rc::new(reduced_mechanism()),
                Rc::new(detailed_mechanism()),
            );
            comparison.pretty_print();
            let partition = comparison.species_partition();
            println!("only in reduced: {:?}", partition.only_first);
            println!("only in detailed: {:?}", partition.only_second);
        }
        2 => {
            // COPY FROM THE CONFIGURED REFERENCE MECHANISM
            let config = with_config_manager(|manager| manager.get_config().clone());
            let reduced = reduced_mechanism();
            match copy_transport_with_config(&reduced, &config) {
                Ok(result) => result.pretty_print(),
                Err(e) => println!("{}", e),
            }
        }
        _ => println!("No such example: {}", task),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples_run() {
        for task in 0..=2 {
            mechtools_examples(task);
        }
    }

    #[test]
    fn test_example_mechanisms() {
        let reduced = reduced_mechanism();
        let detailed = detailed_mechanism();
        let result = copy_transport_data(&reduced, &detailed, false);
        assert_eq!(result.copied_names(), vec!["H2", "O2", "H2O"]);
        assert_eq!(result.failed_names(), vec!["HO2"]);
        let h2o = reduced.species_by_name("H2O").unwrap();
        assert_eq!(
            h2o.borrow().transport.as_ref().map(|t| t.geometry),
            Some(TransportGeometry::Nonlinear)
        );
    }
}
