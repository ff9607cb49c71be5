use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietPreference {
    Veg,
    #[serde(rename = "Non-Veg", alias = "NonVeg")]
    NonVeg,
}

impl fmt::Display for DietPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DietPreference::Veg => "Veg",
            DietPreference::NonVeg => "Non-Veg",
        })
    }
}

/// One form submission. Weight is in pounds, height in centimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    pub gender: Gender,
    pub weight: f64,
    pub height: f64,
    pub diet_preference: DietPreference,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub allergies: String,
}

impl UserProfile {
    /// Enforces the numeric bounds the form widgets apply. Free text is not checked.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut issues = Vec::new();
        for (name, value) in [("weight", self.weight), ("height", self.height)] {
            if !value.is_finite() {
                issues.push(format!("{name} must be a finite number"));
            } else if value < 0.0 {
                issues.push(format!("{name} must be >= 0"));
            }
        }
        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            age: 30,
            gender: Gender::Female,
            weight: 140.0,
            height: 165.0,
            diet_preference: DietPreference::Veg,
            address: "Pune, India".to_string(),
            allergies: "peanuts".to_string(),
        }
    }

    #[test]
    fn test_diet_preference_uses_form_labels() {
        let pref: DietPreference = serde_json::from_str(r#""Non-Veg""#).unwrap();
        assert_eq!(pref, DietPreference::NonVeg);
        assert_eq!(pref.to_string(), "Non-Veg");
        assert_eq!(serde_json::to_string(&pref).unwrap(), r#""Non-Veg""#);
    }

    #[test]
    fn test_profile_deserializes_integer_numerics_and_missing_text() {
        let json = r#"{
            "age": 42,
            "gender": "Other",
            "weight": 180,
            "height": 175.5,
            "diet_preference": "Veg"
        }"#;
        let parsed: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.gender, Gender::Other);
        assert_eq!(parsed.weight, 180.0);
        assert!(parsed.address.is_empty());
        assert!(parsed.allergies.is_empty());
    }

    #[test]
    fn test_negative_age_is_rejected_by_type() {
        let json = r#"{"age": -1, "gender": "Male", "weight": 1, "height": 1, "diet_preference": "Veg"}"#;
        assert!(serde_json::from_str::<UserProfile>(json).is_err());
    }

    #[test]
    fn test_unknown_gender_is_rejected() {
        let json = r#"{"age": 1, "gender": "Robot", "weight": 1, "height": 1, "diet_preference": "Veg"}"#;
        assert!(serde_json::from_str::<UserProfile>(json).is_err());
    }

    #[test]
    fn test_validate_accepts_zero_and_rejects_negative() {
        let mut p = profile();
        p.weight = 0.0;
        assert!(p.validate().is_ok());

        p.height = -3.0;
        let issues = p.validate().unwrap_err();
        assert_eq!(issues, vec!["height must be >= 0".to_string()]);
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut p = profile();
        p.weight = f64::NAN;
        assert_eq!(p.validate().unwrap_err(), vec!["weight must be a finite number".to_string()]);
    }
}
