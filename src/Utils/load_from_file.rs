use crate::Mechanism::mech_error::MechanismError;
use log::{error, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Reads a JSON document from file and deserializes it.
/// On a parse error the offending line is logged together with a pointer to the column.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, MechanismError> {
    if !path.exists() {
        return Err(MechanismError::FileNotFound(path.to_path_buf()));
    }
    let contents = fs::read_to_string(path).map_err(|source| MechanismError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match serde_json::from_str::<T>(&contents) {
        Ok(data) => {
            info!("Successfully parsed data from file '{}'", path.display());
            Ok(data)
        }
        Err(e) => {
            let (line, column) = (e.line(), e.column());
            error!(
                "Error parsing file '{}' at line {}, column {}: {}",
                path.display(),
                line,
                column,
                e
            );
            // serde_json counts lines from 1
            if let Some(problem_line) = line.checked_sub(1).and_then(|i| contents.lines().nth(i)) {
                error!("Problematic line: {}", problem_line);
                if column >= 1 && column <= problem_line.len() {
                    let pointer = " ".repeat(column - 1) + "^";
                    error!("{}", pointer);
                }
            }
            Err(MechanismError::Parse {
                path: path.to_path_buf(),
                line,
                column,
                source: e,
            })
        }
    }
}

/// Serializes a value to pretty JSON and writes it to file.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), MechanismError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|source| MechanismError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Saved data to file '{}'", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_json_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "{{").unwrap();
        writeln!(temp_file, "  \"H2\": {{ \"diameter\": 2.92 }},").unwrap();
        writeln!(temp_file, "  \"O2\": {{ \"diameter\": 3.458 }}").unwrap();
        writeln!(temp_file, "}}").unwrap();

        let data: HashMap<String, Value> = read_json_file(temp_file.path()).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data["H2"]["diameter"], 2.92);
    }

    #[test]
    fn test_read_json_file_missing() {
        let res: Result<Value, _> = read_json_file(Path::new("no_such_mechanism_file.json"));
        assert!(matches!(res, Err(MechanismError::FileNotFound(_))));
    }

    #[test]
    fn test_read_json_file_invalid() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "{{").unwrap();
        writeln!(temp_file, "  \"H2\": {{ \"diameter\": 2.92 ,").unwrap();
        writeln!(temp_file, "}}").unwrap();

        let res: Result<Value, _> = read_json_file(temp_file.path());
        match res {
            Err(MechanismError::Parse { line, .. }) => assert!(line >= 2),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_write_then_read() {
        let temp_file = NamedTempFile::new().unwrap();
        let mut data = HashMap::new();
        data.insert("N2".to_string(), 97.53);
        write_json_file(temp_file.path(), &data).unwrap();
        let back: HashMap<String, f64> = read_json_file(temp_file.path()).unwrap();
        assert_eq!(back, data);
    }
}
