//! Scenario input and validation.
//!
//! [`CreateScenario`] is the body of `POST /api/scenarios`. Every field is
//! defaulted on deserialization so a missing field surfaces as a validation
//! error naming that field rather than as a JSON parse failure.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::validation::{require_link, require_max_chars, require_non_blank, FieldError};

/// Maximum number of metric labels a scenario may carry.
pub const MAX_METRICS: usize = 5;

/// Maximum length of a single metric label (characters).
pub const MAX_METRIC_CHARS: usize = 100;

/// Input for creating a scenario. Mirrors the stored row minus `id` and
/// `createdAt`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateScenario {
    pub title: String,
    pub description: String,
    pub business_problem: String,
    pub solution: String,
    pub technical_details: String,
    pub impact: String,
    pub category: String,
    pub image_url: String,
    pub team: String,
    pub timeline: String,
    pub metrics: Vec<String>,
    pub owner_name: String,
    pub owner_avatar_url: Option<String>,
    pub requirement_doc_url: Option<String>,
    pub github_repo_url: Option<String>,
    pub demo_manual_url: Option<String>,
    pub install_guide_url: Option<String>,
}

impl CreateScenario {
    /// Collapse blank optional links to `None`. Required fields are kept
    /// exactly as submitted.
    pub fn normalized(mut self) -> Self {
        for link in [
            &mut self.owner_avatar_url,
            &mut self.requirement_doc_url,
            &mut self.github_repo_url,
            &mut self.demo_manual_url,
            &mut self.install_guide_url,
        ] {
            if link.as_deref().is_some_and(|v| v.trim().is_empty()) {
                *link = None;
            }
        }
        self
    }
}

/// Collect every field error in `input`.
pub fn validate_scenario(input: &CreateScenario) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let required = [
        ("title", &input.title),
        ("description", &input.description),
        ("businessProblem", &input.business_problem),
        ("solution", &input.solution),
        ("technicalDetails", &input.technical_details),
        ("impact", &input.impact),
        ("category", &input.category),
        ("imageUrl", &input.image_url),
        ("team", &input.team),
        ("timeline", &input.timeline),
        ("ownerName", &input.owner_name),
    ];
    for (field, value) in required {
        require_non_blank(&mut errors, field, value);
    }

    if input.metrics.is_empty() {
        errors.push(FieldError::new("metrics", "at least one metric is required"));
    } else if input.metrics.len() > MAX_METRICS {
        errors.push(FieldError::new(
            "metrics",
            format!(
                "at most {MAX_METRICS} metrics are allowed (got {})",
                input.metrics.len()
            ),
        ));
    }
    if input.metrics.iter().any(|m| m.trim().is_empty()) {
        errors.push(FieldError::new("metrics", "metric labels must not be blank"));
    }
    for metric in &input.metrics {
        require_max_chars(&mut errors, "metrics", metric, MAX_METRIC_CHARS);
    }

    if !input.image_url.trim().is_empty() {
        require_link(&mut errors, "imageUrl", Some(&input.image_url));
    }
    require_link(&mut errors, "ownerAvatarUrl", input.owner_avatar_url.as_deref());
    require_link(&mut errors, "requirementDocUrl", input.requirement_doc_url.as_deref());
    require_link(&mut errors, "githubRepoUrl", input.github_repo_url.as_deref());
    require_link(&mut errors, "demoManualUrl", input.demo_manual_url.as_deref());
    require_link(&mut errors, "installGuideUrl", input.install_guide_url.as_deref());

    errors
}

/// Validate `input`, returning [`CoreError::InvalidFields`] on failure.
pub fn ensure_valid_scenario(input: &CreateScenario) -> Result<(), CoreError> {
    CoreError::from_field_errors(validate_scenario(input))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn complete() -> CreateScenario {
        CreateScenario {
            title: "合同审批自动化流程".into(),
            description: "AI驱动的合同智能审核".into(),
            business_problem: "审批周期长".into(),
            solution: "自动提取关键条款".into(),
            technical_details: "Python + SpaCy".into(),
            impact: "审批周期缩短至2天".into(),
            category: "自动化".into(),
            image_url: "https://images.example.com/contract.jpg".into(),
            team: "企业效率团队".into(),
            timeline: "4周".into(),
            metrics: vec!["审批提速71%".into(), "识别率95%".into()],
            owner_name: "王敏".into(),
            owner_avatar_url: None,
            requirement_doc_url: Some("https://docs.example.com/req".into()),
            github_repo_url: None,
            demo_manual_url: None,
            install_guide_url: None,
        }
    }

    #[test]
    fn complete_input_is_valid() {
        assert!(validate_scenario(&complete()).is_empty());
    }

    #[test]
    fn missing_title_is_reported() {
        let input = CreateScenario {
            title: String::new(),
            ..complete()
        };
        let errors = validate_scenario(&input);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "title");
    }

    #[test]
    fn empty_input_reports_every_required_field() {
        let errors = validate_scenario(&CreateScenario::default());
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        for field in [
            "title",
            "description",
            "businessProblem",
            "solution",
            "technicalDetails",
            "impact",
            "category",
            "imageUrl",
            "team",
            "timeline",
            "ownerName",
            "metrics",
        ] {
            assert!(fields.contains(&field), "expected error for {field}");
        }
    }

    #[test]
    fn more_than_five_metrics_is_rejected() {
        let input = CreateScenario {
            metrics: (0..6).map(|i| format!("m{i}")).collect(),
            ..complete()
        };
        let errors = validate_scenario(&input);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "metrics");
    }

    #[test]
    fn overlong_metric_label_is_rejected() {
        let input = CreateScenario {
            metrics: vec!["x".repeat(MAX_METRIC_CHARS + 1)],
            ..complete()
        };
        let errors = validate_scenario(&input);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "metrics");

        let at_limit = CreateScenario {
            metrics: vec!["指".repeat(MAX_METRIC_CHARS)],
            ..complete()
        };
        assert!(validate_scenario(&at_limit).is_empty());
    }

    #[test]
    fn blank_metric_label_is_rejected() {
        let input = CreateScenario {
            metrics: vec!["ok".into(), " ".into()],
            ..complete()
        };
        assert_eq!(validate_scenario(&input)[0].field, "metrics");
    }

    #[test]
    fn invalid_resource_link_is_rejected() {
        let input = CreateScenario {
            github_repo_url: Some("git@github.com:org/repo.git".into()),
            ..complete()
        };
        let errors = validate_scenario(&input);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "githubRepoUrl");
    }

    #[test]
    fn uploaded_image_path_is_accepted() {
        let input = CreateScenario {
            image_url: "/uploads/3f2a.png".into(),
            ..complete()
        };
        assert!(validate_scenario(&input).is_empty());
    }

    #[test]
    fn normalized_drops_blank_links_only() {
        let input = CreateScenario {
            owner_avatar_url: Some("".into()),
            demo_manual_url: Some("  ".into()),
            ..complete()
        }
        .normalized();
        assert_eq!(input.owner_avatar_url, None);
        assert_eq!(input.demo_manual_url, None);
        assert_eq!(
            input.requirement_doc_url.as_deref(),
            Some("https://docs.example.com/req")
        );
    }

    #[test]
    fn missing_json_fields_default_to_empty() {
        let input: CreateScenario =
            serde_json::from_value(serde_json::json!({ "description": "d" })).unwrap();
        assert_eq!(input.title, "");
        assert_eq!(input.description, "d");
        assert!(input.metrics.is_empty());
        assert_matches!(
            ensure_valid_scenario(&input),
            Err(CoreError::InvalidFields(errors)) if errors.iter().any(|e| e.field == "title")
        );
    }
}
