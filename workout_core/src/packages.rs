//! Sensor package sources and batch summaries.
//!
//! Packages come from the built-in demo list or from a batch file:
//! - `.jsonl`: one `{"workout_type": ..., "data": [...]}` object per line
//! - `.json`: an array of those objects
//! - anything else: headerless CSV, `CODE,field,field,...` per row

use crate::{read_package, show_training_info, Error, InfoMessage, Result, SensorPackage};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The fixed demo list of sensor packages
pub fn default_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Load sensor packages from a batch file, choosing the format by extension
pub fn load_packages(path: &Path) -> Result<Vec<SensorPackage>> {
    let packages = match path.extension().and_then(|ext| ext.to_str()) {
        Some("jsonl") => read_jsonl(path)?,
        Some("json") => read_json(path)?,
        _ => read_csv(path)?,
    };

    tracing::info!("Loaded {} packages from {:?}", packages.len(), path);
    Ok(packages)
}

/// Read packages from a JSON Lines file
///
/// Lines that fail to parse are logged and skipped.
fn read_jsonl(path: &Path) -> Result<Vec<SensorPackage>> {
    let reader = BufReader::new(File::open(path)?);
    let mut packages = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<SensorPackage>(&line) {
            Ok(package) => packages.push(package),
            Err(e) => {
                tracing::warn!("Failed to parse package at line {}: {}", line_num + 1, e);
            }
        }
    }

    Ok(packages)
}

/// Read packages from a JSON array file
fn read_json(path: &Path) -> Result<Vec<SensorPackage>> {
    let reader = BufReader::new(File::open(path)?);
    let packages: Vec<SensorPackage> = serde_json::from_reader(reader)?;
    Ok(packages)
}

/// Read packages from a headerless CSV file
///
/// Rows may have different lengths; `#` starts a comment line. An empty
/// type code is kept and dispatches like any other unknown code.
fn read_csv(path: &Path) -> Result<Vec<SensorPackage>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_path(path)?;

    let mut packages = Vec::new();

    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let mut fields = record.iter();
        let code = fields.next().unwrap_or_default();

        let data = fields
            .map(|field| {
                field.parse::<f64>().map_err(|_| {
                    Error::InvalidInput(format!("line {}: {:?} is not a number", line, field))
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        packages.push(SensorPackage::new(code, data));
    }

    Ok(packages)
}

/// Dispatch and compute every package, stopping at the first invalid one
pub fn summarize(packages: &[SensorPackage]) -> Result<Vec<InfoMessage>> {
    packages
        .iter()
        .map(|package| {
            let workout = read_package(&package.workout_type, &package.data)?;
            Ok(show_training_info(&workout))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_summarize_default_packages() {
        let infos = summarize(&default_packages()).unwrap();

        assert_eq!(infos.len(), 3);
        assert_eq!(
            infos[0].get_message(),
            "Type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
             Mean speed: 1.000 km/h; Calories: 336.000."
        );
        assert_eq!(
            infos[1].get_message(),
            "Type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
             Mean speed: 9.750 km/h; Calories: 797.805."
        );
        assert_eq!(
            infos[2].get_message(),
            "Type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; \
             Mean speed: 5.850 km/h; Calories: 349.252."
        );
    }

    #[test]
    fn test_summarize_stops_at_invalid_package() {
        let packages = vec![
            SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
            SensorPackage::new("WLK", vec![9000.0, 1.0]),
        ];

        assert!(matches!(summarize(&packages), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_load_csv_packages() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("packages.csv");
        fs::write(
            &path,
            "# morning sessions\nSWM,720,1,80,25,40\nRUN, 15000, 1, 75\nWLK,9000,1,75,180\n",
        )
        .unwrap();

        let packages = load_packages(&path).unwrap();

        assert_eq!(packages, default_packages());
    }

    #[test]
    fn test_load_csv_rejects_non_numeric_field() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("packages.csv");
        fs::write(&path, "RUN,15000,one,75\n").unwrap();

        let err = load_packages(&path).unwrap_err();

        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("one"));
    }

    #[test]
    fn test_load_jsonl_skips_corrupted_lines() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("packages.jsonl");
        fs::write(
            &path,
            "{\"workout_type\":\"RUN\",\"data\":[15000,1,75]}\n\
             {\"workout_type\":\"WLK\",\"data\":[9000,\n\
             \n\
             {\"workout_type\":\"SWM\",\"data\":[720,1,80,25,40]}\n",
        )
        .unwrap();

        let packages = load_packages(&path).unwrap();

        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].workout_type, "RUN");
        assert_eq!(packages[1].workout_type, "SWM");
    }

    #[test]
    fn test_load_csv_keeps_blank_type_code() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("packages.csv");
        fs::write(&path, "RUN,15000,1,75\n,9000,1,75\n").unwrap();

        let packages = load_packages(&path).unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[1].workout_type, "");

        let infos = summarize(&packages).unwrap();
        assert_eq!(infos[1].training_type, "Training");
        assert_eq!(infos[1].calories, 0.0);
    }

    #[test]
    fn test_load_json_array() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("packages.json");
        fs::write(
            &path,
            "[\n  {\"workout_type\": \"RUN\", \"data\": [15000, 1, 75]},\n  \
             {\"workout_type\": \"SWM\", \"data\": [720, 1, 80, 25, 40]}\n]\n",
        )
        .unwrap();

        let packages = load_packages(&path).unwrap();

        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].workout_type, "RUN");
        assert_eq!(packages[1].workout_type, "SWM");
    }

    #[test]
    fn test_load_malformed_json_array_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("packages.json");
        fs::write(
            &path,
            "[\n  {\"workout_type\": \"RUN\", \"data\": [15000, 1, 75]},\n]\n",
        )
        .unwrap();

        assert!(matches!(load_packages(&path), Err(Error::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing.csv");

        assert!(load_packages(&path).is_err());
    }
}
