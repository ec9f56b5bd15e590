//! Plane - Which spatial overlay an actor occupies

use serde::{Deserialize, Serialize};

/// Spatial plane. Actors on different planes cannot perceive each other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Plane {
    #[default]
    Material,
    /// The spectral overlay (the Umbra)
    #[serde(alias = "umbra")]
    Shadow,
}

impl std::fmt::Display for Plane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Plane::Material => write!(f, "material"),
            Plane::Shadow => write!(f, "shadow"),
        }
    }
}

impl std::str::FromStr for Plane {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "material" => Ok(Plane::Material),
            "shadow" | "umbra" => Ok(Plane::Shadow),
            _ => Err(format!("Unknown plane: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_umbra_alias() {
        assert_eq!("Umbra".parse::<Plane>().unwrap(), Plane::Shadow);
        let plane: Plane = serde_json::from_str(r#""umbra""#).unwrap();
        assert_eq!(plane, Plane::Shadow);
        assert_eq!(serde_json::to_string(&plane).unwrap(), r#""shadow""#);
        assert!("astral".parse::<Plane>().is_err());
    }
}
