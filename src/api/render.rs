//! Terminal rendering for vectors and outcomes

use crate::logic::prediction::RequestOutcome;
use crate::logic::report::RiskReport;
use crate::logic::transaction::FeatureVector;

pub fn print_vector(vector: &FeatureVector) {
    println!("Transaction Details");
    println!("  {:<8} {}", "Time", vector.time());
    println!("  {:<8} ${:.2}", "Amount", vector.amount());
    for (component, value) in vector.iter_components() {
        println!("  {:<8} {:>8.2}", component.name(), value);
    }
}

pub fn print_report(report: &RiskReport) {
    for line in report_lines(report) {
        println!("{}", line);
    }
}

pub fn report_lines(report: &RiskReport) -> Vec<String> {
    vec![
        format!("[{}] {}", report.badge, report.verdict),
        report.summary.to_string(),
        String::new(),
        format!("  {:<14} {}", "Score", report.score_label()),
        format!("  {:<14} {}", "Pattern Match", report.pattern_match_label()),
        format!("  {:<14} {}", "Outlier Index", report.outlier_index_label()),
    ]
}

pub fn print_outcome(outcome: &RequestOutcome) {
    for line in outcome_lines(outcome) {
        println!("{}", line);
    }
}

/// Stdout lines for an outcome. `Failed` has none: its reason is returned
/// as the command error and printed once by the caller.
pub fn outcome_lines(outcome: &RequestOutcome) -> Vec<String> {
    match outcome {
        RequestOutcome::NotStarted => vec!["Ready for analysis".to_string()],
        RequestOutcome::Pending => vec!["Analyzing risk...".to_string()],
        RequestOutcome::Succeeded(assessment) => report_lines(&RiskReport::from(assessment)),
        RequestOutcome::Failed(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::prediction::Assessment;

    #[test]
    fn test_failed_outcome_renders_nothing() {
        let outcome = RequestOutcome::Failed(
            "Unable to reach the risk engine. Is the backend running?".to_string(),
        );
        assert!(outcome_lines(&outcome).is_empty());
    }

    #[test]
    fn test_succeeded_outcome_renders_report() {
        let body = br#"{
            "is_fraud": true,
            "risk_level": "HIGH",
            "fraud_probability": 0.97,
            "details": {"classifier_score": 0.97, "anomaly_score": 0.8}
        }"#;
        let assessment = Assessment::from_body(body).unwrap();
        let report = RiskReport::from(&assessment);

        let lines = outcome_lines(&RequestOutcome::Succeeded(assessment));
        assert_eq!(lines, report_lines(&report));
        assert!(lines[0].contains(&report.badge));
    }
}
