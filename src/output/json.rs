//! JSON output of a form submission.

use crate::models::SubnetRange;
use crate::processing::FormOutcome;
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    outcome: &'a FormOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    subnets: Option<&'a [SubnetRange]>,
}

/// Pretty JSON with the inputs, errors, result and any listed subnets.
pub fn outcome_json(
    outcome: &FormOutcome,
    subnets: Option<&[SubnetRange]>,
) -> Result<String, Box<dyn Error>> {
    let report = JsonReport { outcome, subnets };
    let json =
        serde_json::to_string_pretty(&report).map_err(|e| format!("Error serializing JSON: {e}"))?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::{submit, SubnetForm};

    #[test]
    fn test_outcome_json() {
        let outcome = submit(SubnetForm::default());
        let json = outcome_json(&outcome, None).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["form"]["ip"], "12.3.2.5");
        assert_eq!(v["errors"].as_array().unwrap().len(), 0);
        assert_eq!(v["result"]["class"], "A");
        assert_eq!(v["result"]["new_mask"], "255.224.0.0");
        assert_eq!(v["result"]["hosts_per_subnet"], 2097152);
        assert!(v.get("subnets").is_none());
    }

    #[test]
    fn test_outcome_json_errors() {
        let outcome = submit(SubnetForm {
            ip: "1.2.3".to_string(),
            ..SubnetForm::default()
        });
        let json = outcome_json(&outcome, None).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["errors"][0], "Invalid IP address");
        assert!(v["result"].is_null());
    }
}
