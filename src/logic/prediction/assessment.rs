//! Assessment - the risk engine's verdict for one transaction

use serde::{Deserialize, Serialize};

use crate::error::ContractError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub is_fraud: bool,
    /// Engine vocabulary, shown verbatim
    pub risk_level: String,
    /// Ensemble probability in [0, 1]
    pub fraud_probability: f64,
    pub details: AssessmentDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentDetails {
    /// Supervised classifier probability in [0, 1]
    pub classifier_score: f64,
    /// Reconstruction error, unbounded
    pub anomaly_score: f64,
    /// Anomaly score scaled into [0, 1], when the engine reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_anomaly: Option<f64>,
}

impl Assessment {
    /// Decode a 2xx body. Missing keys, wrong types and out-of-range scores
    /// are all contract violations.
    pub fn from_body(body: &[u8]) -> Result<Self, ContractError> {
        let assessment: Assessment =
            serde_json::from_slice(body).map_err(|e| ContractError::Malformed(e.to_string()))?;
        assessment.validate()?;
        Ok(assessment)
    }

    pub fn validate(&self) -> Result<(), ContractError> {
        unit_interval("fraud_probability", self.fraud_probability)?;
        unit_interval("details.classifier_score", self.details.classifier_score)?;

        let anomaly = self.details.anomaly_score;
        if !anomaly.is_finite() || anomaly < 0.0 {
            return Err(ContractError::OutOfRange {
                field: "details.anomaly_score",
                value: anomaly,
            });
        }

        if let Some(normalized) = self.details.normalized_anomaly {
            unit_interval("details.normalized_anomaly", normalized)?;
        }
        Ok(())
    }

    /// `fraud_probability` as a percentage
    pub fn fraud_percent(&self) -> f64 {
        self.fraud_probability * 100.0
    }

    /// `classifier_score` as a percentage
    pub fn classifier_percent(&self) -> f64 {
        self.details.classifier_score * 100.0
    }
}

fn unit_interval(field: &'static str, value: f64) -> Result<(), ContractError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ContractError::OutOfRange { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOW_RISK: &str = r#"{
        "is_fraud": false,
        "risk_level": "Low",
        "fraud_probability": 0.01,
        "details": {"classifier_score": 0.02, "anomaly_score": 0.15}
    }"#;

    #[test]
    fn test_decode_low_risk() {
        let assessment = Assessment::from_body(LOW_RISK.as_bytes()).unwrap();
        assert!(!assessment.is_fraud);
        assert_eq!(assessment.risk_level, "Low");
        assert_eq!(assessment.details.normalized_anomaly, None);
        assert!((assessment.fraud_percent() - 1.0).abs() < 1e-9);
        assert!((assessment.classifier_percent() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_decode_with_optional_and_unknown_keys() {
        let body = r#"{
            "fraud_probability": 0.91,
            "is_fraud": true,
            "risk_level": "CRITICAL",
            "details": {"classifier_score": 0.97, "anomaly_score": 0.0412, "normalized_anomaly": 1.0},
            "model_version": "resnet-4096"
        }"#;
        let assessment = Assessment::from_body(body.as_bytes()).unwrap();
        assert!(assessment.is_fraud);
        assert_eq!(assessment.details.normalized_anomaly, Some(1.0));
    }

    #[test]
    fn test_missing_field_is_contract_error() {
        let err = Assessment::from_body(br#"{"is_fraud": true}"#).unwrap_err();
        match err {
            ContractError::Malformed(msg) => assert!(msg.contains("missing field")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_mistyped_field_is_contract_error() {
        let body = r#"{
            "is_fraud": "no",
            "risk_level": "Low",
            "fraud_probability": 0.01,
            "details": {"classifier_score": 0.02, "anomaly_score": 0.15}
        }"#;
        assert!(matches!(
            Assessment::from_body(body.as_bytes()),
            Err(ContractError::Malformed(_))
        ));
    }

    #[test]
    fn test_out_of_range_scores() {
        let body = r#"{
            "is_fraud": true,
            "risk_level": "HIGH",
            "fraud_probability": 1.4,
            "details": {"classifier_score": 0.9, "anomaly_score": 0.2}
        }"#;
        assert!(matches!(
            Assessment::from_body(body.as_bytes()),
            Err(ContractError::OutOfRange { field: "fraud_probability", .. })
        ));

        let body = r#"{
            "is_fraud": false,
            "risk_level": "LOW",
            "fraud_probability": 0.1,
            "details": {"classifier_score": 0.1, "anomaly_score": -0.5}
        }"#;
        assert!(matches!(
            Assessment::from_body(body.as_bytes()),
            Err(ContractError::OutOfRange { field: "details.anomaly_score", .. })
        ));
    }

    #[test]
    fn test_non_json_body() {
        assert!(matches!(
            Assessment::from_body(b"<html>Bad Gateway</html>"),
            Err(ContractError::Malformed(_))
        ));
    }
}
