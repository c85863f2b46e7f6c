use serde::{Deserialize, Deserializer, Serialize};

/// A validated generation request.
///
/// Tone and topic are free text: unknown values fall back to default content
/// rather than failing. Build one through [`crate::core::form::EpisodeForm::validate`]
/// when the data comes from a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeInput {
    pub podcast_name: String,
    pub topic: String,
    pub episode_title: String,
    pub hosts: String,
    pub target_audience: String,
    pub tone: String,
    /// Total runtime in minutes, at least 1.
    #[serde(deserialize_with = "minutes")]
    pub duration: u32,
    #[serde(default)]
    pub include_ads: bool,
    #[serde(default)]
    pub include_timestamps: bool,
    #[serde(default)]
    pub include_tagline: bool,
}

/// Form inputs arrive as strings, config files and API clients send numbers.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum NumberOrText {
    Number(u64),
    Text(String),
}

impl NumberOrText {
    pub(crate) fn into_text(self) -> String {
        match self {
            NumberOrText::Number(n) => n.to_string(),
            NumberOrText::Text(s) => s,
        }
    }
}

/// Parse a positive whole number of minutes.
pub fn parse_minutes(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|m| *m > 0)
}

fn minutes<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = NumberOrText::deserialize(deserializer)?.into_text();
    parse_minutes(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("duration must be a positive number of minutes, got '{}'", raw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_accepts_string_or_number() {
        let from_text: EpisodeInput = serde_json::from_str(
            r#"{"podcastName":"P","topic":"t","episodeTitle":"E","hosts":"A","targetAudience":"a","tone":"casual","duration":"30"}"#,
        )
        .unwrap();
        assert_eq!(from_text.duration, 30);
        assert!(!from_text.include_ads);

        let from_number: EpisodeInput = serde_json::from_str(
            r#"{"podcastName":"P","topic":"t","episodeTitle":"E","hosts":"A","targetAudience":"a","tone":"casual","duration":45,"includeAds":true}"#,
        )
        .unwrap();
        assert_eq!(from_number.duration, 45);
        assert!(from_number.include_ads);
    }

    #[test]
    fn duration_rejects_zero_and_garbage() {
        for bad in [r#""0""#, r#""abc""#, "0", r#""-5""#] {
            let raw = format!(
                r#"{{"podcastName":"P","topic":"t","episodeTitle":"E","hosts":"A","targetAudience":"a","tone":"casual","duration":{}}}"#,
                bad
            );
            assert!(serde_json::from_str::<EpisodeInput>(&raw).is_err(), "accepted {}", bad);
        }
    }

    #[test]
    fn parse_minutes_trims() {
        assert_eq!(parse_minutes(" 25 "), Some(25));
        assert_eq!(parse_minutes("2.5"), None);
        assert_eq!(parse_minutes(""), None);
    }
}
