//! Supports extracting the DH parameter table from YAML file (optional)

use crate::parameter_error::ParameterError;
use crate::parameters::dh_kinematics::DhParameters;
use std::path::Path;
use yaml_rust2::{Yaml, YamlLoader};

impl<const N: usize> DhParameters<N> {
    /// Read the DH table from a YAML file. YAML file like this is supported:
    /// ```yaml
    /// # KUKA LWR, millimetres
    /// dh_kinematics_parameters:
    ///   a: [0, 0, 0, 0, 0, 0, 0]
    ///   alpha_deg: [90, -90, 90, -90, 90, -90, 0]
    ///   d: [315, 0, 400, 0, 390, 0, 190]
    /// ```
    /// Twists are given in degrees (`alpha_deg`), lengths in whatever unit
    /// the robot model uses. Each row must carry exactly N entries.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse the DH table from YAML content (see [DhParameters::from_yaml_file]).
    pub fn from_yaml(contents: &str) -> Result<Self, ParameterError> {
        let docs = YamlLoader::load_from_str(contents)
            .map_err(|e| ParameterError::ParseError(e.to_string()))?;
        let doc = docs
            .first()
            .ok_or_else(|| ParameterError::ParseError("empty YAML document".to_string()))?;

        let root = &doc["dh_kinematics_parameters"];
        if root.is_badvalue() {
            return Err(ParameterError::MissingField(
                "dh_kinematics_parameters".to_string(),
            ));
        }

        let a = read_row(root, "a")?;
        let alpha_deg: [f64; N] = read_row(root, "alpha_deg")?;
        let d = read_row(root, "d")?;

        Ok(DhParameters {
            a,
            alpha: alpha_deg.map(|x| x.to_radians()),
            d,
        })
    }
}

fn read_row<const N: usize>(root: &Yaml, field: &str) -> Result<[f64; N], ParameterError> {
    let values = root[field]
        .as_vec()
        .ok_or_else(|| ParameterError::MissingField(field.to_string()))?;
    if values.len() != N {
        return Err(ParameterError::InvalidLength {
            expected: N,
            found: values.len(),
        });
    }

    let mut row = [0.0; N];
    for (i, value) in values.iter().enumerate() {
        let number = value
            .as_f64()
            .or_else(|| value.as_i64().map(|v| v as f64))
            .ok_or_else(|| {
                ParameterError::ParseError(format!("{}[{}] is not a number", field, i))
            })?;
        if !number.is_finite() {
            return Err(ParameterError::ParseError(format!(
                "{}[{}] must be finite (got {})",
                field, i, number
            )));
        }
        row[i] = number;
    }
    Ok(row)
}
