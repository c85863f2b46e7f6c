//! Raw form state and the checks that turn it into an [`EpisodeInput`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::core::episode::{parse_minutes, EpisodeInput, NumberOrText};

static HOSTS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^;]+(?:[—\-–][^;]+)?(?:;\s*[^;]+(?:[—\-–][^;]+)?)*$").unwrap()
});

/// Form fields in display order, with their labels.
const REQUIRED_FIELDS: [(&str, &str); 7] = [
    ("podcastName", "Podcast Name"),
    ("topic", "Main Topic"),
    ("episodeTitle", "Episode Title"),
    ("hosts", "Hosts"),
    ("targetAudience", "Target Audience"),
    ("tone", "Tone/Style"),
    ("duration", "Duration"),
];

/// Whatever the user has typed so far. Every text field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeForm {
    #[serde(default)]
    pub podcast_name: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub episode_title: Option<String>,
    #[serde(default)]
    pub hosts: Option<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub duration: Option<String>,
    #[serde(default)]
    pub include_ads: bool,
    #[serde(default)]
    pub include_timestamps: bool,
    #[serde(default)]
    pub include_tagline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fix the errors in the form")]
pub struct FormErrors {
    pub errors: Vec<FieldError>,
}

impl FormErrors {
    pub fn field(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<NumberOrText>::deserialize(deserializer)?.map(NumberOrText::into_text))
}

pub fn label_for(field: &str) -> &str {
    REQUIRED_FIELDS
        .iter()
        .find(|(id, _)| *id == field)
        .map(|(_, label)| *label)
        .unwrap_or(field)
}

/// True when `raw` has the `Name — description; Name — description` shape.
pub fn hosts_well_formed(raw: &str) -> bool {
    HOSTS_PATTERN.is_match(raw.trim())
}

impl EpisodeForm {
    fn value(&self, field: &str) -> Option<&str> {
        let value = match field {
            "podcastName" => &self.podcast_name,
            "topic" => &self.topic,
            "episodeTitle" => &self.episode_title,
            "hosts" => &self.hosts,
            "targetAudience" => &self.target_audience,
            "tone" => &self.tone,
            "duration" => &self.duration,
            _ => &None,
        };
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    /// Check every field and collect all problems, not just the first.
    pub fn validate(&self) -> Result<EpisodeInput, FormErrors> {
        let mut errors = Vec::new();

        for (field, label) in REQUIRED_FIELDS {
            if self.value(field).is_none() {
                errors.push(FieldError {
                    field,
                    message: format!("{} is required", label),
                });
            }
        }

        if let Some(hosts) = self.value("hosts") {
            if !hosts_well_formed(hosts) {
                errors.push(FieldError {
                    field: "hosts",
                    message: r#"Please format hosts as: "Name — description; Name — description""#.to_string(),
                });
            }
        }

        let duration = self.value("duration").and_then(parse_minutes);
        if self.value("duration").is_some() && duration.is_none() {
            errors.push(FieldError {
                field: "duration",
                message: "Duration must be a positive number of minutes".to_string(),
            });
        }

        match duration {
            Some(duration) if errors.is_empty() => {
                let text = |field: &str| self.value(field).unwrap_or_default().to_string();
                Ok(EpisodeInput {
                    podcast_name: text("podcastName"),
                    topic: text("topic"),
                    episode_title: text("episodeTitle"),
                    hosts: text("hosts"),
                    target_audience: text("targetAudience"),
                    tone: text("tone"),
                    duration,
                    include_ads: self.include_ads,
                    include_timestamps: self.include_timestamps,
                    include_tagline: self.include_tagline,
                })
            }
            _ => {
                log::debug!("Form rejected with {} error(s)", errors.len());
                Err(FormErrors { errors })
            }
        }
    }
}

impl From<&EpisodeInput> for EpisodeForm {
    fn from(input: &EpisodeInput) -> Self {
        Self {
            podcast_name: Some(input.podcast_name.clone()),
            topic: Some(input.topic.clone()),
            episode_title: Some(input.episode_title.clone()),
            hosts: Some(input.hosts.clone()),
            target_audience: Some(input.target_audience.clone()),
            tone: Some(input.tone.clone()),
            duration: Some(input.duration.to_string()),
            include_ads: input.include_ads,
            include_timestamps: input.include_timestamps,
            include_tagline: input.include_tagline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EpisodeForm {
        EpisodeForm {
            podcast_name: Some("Tech Talk Weekly".to_string()),
            topic: Some("artificial intelligence".to_string()),
            episode_title: Some("AI Today".to_string()),
            hosts: Some("Alex — curious; Jordan — skeptical".to_string()),
            target_audience: Some("tech fans".to_string()),
            tone: Some("educational".to_string()),
            duration: Some("30".to_string()),
            include_ads: false,
            include_timestamps: true,
            include_tagline: true,
        }
    }

    #[test]
    fn complete_form_validates() {
        let input = filled().validate().unwrap();
        assert_eq!(input.duration, 30);
        assert_eq!(input.hosts, "Alex — curious; Jordan — skeptical");
        assert!(input.include_tagline);
    }

    #[test]
    fn empty_form_lists_every_required_field() {
        let errors = EpisodeForm::default().validate().unwrap_err();
        assert_eq!(errors.errors.len(), REQUIRED_FIELDS.len());
        assert_eq!(errors.field("podcastName").unwrap().message, "Podcast Name is required");
        assert_eq!(errors.field("tone").unwrap().message, "Tone/Style is required");
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let mut form = filled();
        form.topic = Some("   ".to_string());
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.errors.len(), 1);
        assert_eq!(errors.field("topic").unwrap().message, "Main Topic is required");
    }

    #[test]
    fn malformed_hosts_are_rejected() {
        let mut form = filled();
        form.hosts = Some("Alice — funny;; Bob".to_string());
        let errors = form.validate().unwrap_err();
        assert!(errors.field("hosts").unwrap().message.starts_with("Please format hosts"));

        form.hosts = Some("Alice — funny;".to_string());
        assert!(form.validate().is_err());
    }

    #[test]
    fn host_shapes_that_pass() {
        for ok in ["Solo", "Alice — funny", "Ann - calm; Ben – loud", "A—x;B—y"] {
            assert!(hosts_well_formed(ok), "rejected {}", ok);
        }
    }

    #[test]
    fn duration_must_be_positive_integer() {
        let mut form = filled();
        form.duration = Some("0".to_string());
        assert!(form.validate().unwrap_err().field("duration").is_some());

        form.duration = Some("half an hour".to_string());
        assert!(form.validate().unwrap_err().field("duration").is_some());
    }

    #[test]
    fn form_json_accepts_numeric_duration() {
        let form: EpisodeForm = serde_json::from_str(r#"{"podcastName":"P","duration":20}"#).unwrap();
        assert_eq!(form.duration.as_deref(), Some("20"));
        assert!(form.topic.is_none());
    }

    #[test]
    fn input_round_trips_through_form() {
        let input = filled().validate().unwrap();
        assert_eq!(EpisodeForm::from(&input).validate().unwrap(), input);
    }

    #[test]
    fn labels() {
        assert_eq!(label_for("targetAudience"), "Target Audience");
        assert_eq!(label_for("mystery"), "mystery");
    }
}
