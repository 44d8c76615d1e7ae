use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Equipment category with its type-specific attributes.
///
/// Attributes are descriptive only; wear never depends on the kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssetKind {
    Oscilloscope {
        bandwidth: String,
    },
    Multimeter {
        precision: String,
        digital: bool,
    },
    InductionMotor {
        horsepower: String,
        voltage: String,
        rpm: u32,
    },
    Generic,
}

impl AssetKind {
    /// Stable persisted name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Oscilloscope { .. } => "oscilloscope",
            Self::Multimeter { .. } => "multimeter",
            Self::InductionMotor { .. } => "induction_motor",
            Self::Generic => "generic",
        }
    }

    /// Type-specific attributes as a flat mapping.
    pub fn details(&self) -> BTreeMap<String, Value> {
        let mut map = BTreeMap::new();
        match self {
            Self::Oscilloscope { bandwidth } => {
                map.insert("bandwidth".to_string(), Value::from(bandwidth.as_str()));
            }
            Self::Multimeter { precision, digital } => {
                map.insert("precision".to_string(), Value::from(precision.as_str()));
                map.insert("digital".to_string(), Value::from(*digital));
            }
            Self::InductionMotor {
                horsepower,
                voltage,
                rpm,
            } => {
                map.insert("horsepower".to_string(), Value::from(horsepower.as_str()));
                map.insert("voltage".to_string(), Value::from(voltage.as_str()));
                map.insert("rpm".to_string(), Value::from(*rpm));
            }
            Self::Generic => {}
        }
        map
    }

    /// Rebuild a kind from its persisted name and attribute mapping.
    ///
    /// Missing attributes are reported as the error string.
    pub fn from_parts(name: &str, details: &BTreeMap<String, Value>) -> Result<Self, String> {
        match name.trim().to_ascii_lowercase().as_str() {
            "oscilloscope" => Ok(Self::Oscilloscope {
                bandwidth: text(details, "bandwidth")?,
            }),
            "multimeter" => Ok(Self::Multimeter {
                precision: text(details, "precision")?,
                digital: details
                    .get("digital")
                    .and_then(Value::as_bool)
                    .ok_or_else(|| "missing boolean attribute 'digital'".to_string())?,
            }),
            "induction_motor" | "motor" => Ok(Self::InductionMotor {
                horsepower: text(details, "horsepower")?,
                voltage: text(details, "voltage")?,
                rpm: details
                    .get("rpm")
                    .and_then(Value::as_u64)
                    .and_then(|v| u32::try_from(v).ok())
                    .ok_or_else(|| "missing integer attribute 'rpm'".to_string())?,
            }),
            "generic" => Ok(Self::Generic),
            other => Err(format!("unknown asset kind '{other}'")),
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Oscilloscope { .. } => "Oscilloscope",
            Self::Multimeter { .. } => "Multimeter",
            Self::InductionMotor { .. } => "Induction motor",
            Self::Generic => "Equipment",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn text(details: &BTreeMap<String, Value>, key: &str) -> Result<String, String> {
    details
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| format!("missing text attribute '{key}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_rebuild_the_same_kind() {
        let kinds = [
            AssetKind::Oscilloscope {
                bandwidth: "100MHz".to_string(),
            },
            AssetKind::Multimeter {
                precision: "0.05%".to_string(),
                digital: true,
            },
            AssetKind::InductionMotor {
                horsepower: "15HP".to_string(),
                voltage: "440V".to_string(),
                rpm: 3600,
            },
            AssetKind::Generic,
        ];
        for kind in kinds {
            let rebuilt = AssetKind::from_parts(kind.name(), &kind.details()).unwrap();
            assert_eq!(rebuilt, kind);
        }
    }

    #[test]
    fn missing_attribute_is_reported() {
        let err = AssetKind::from_parts("oscilloscope", &BTreeMap::new()).unwrap_err();
        assert!(err.contains("bandwidth"));
    }
}
