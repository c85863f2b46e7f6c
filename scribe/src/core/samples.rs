use rand::Rng;
use serde::Serialize;

use crate::core::form::EpisodeForm;

/// A ready-made episode users can load into the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub podcast_name: &'static str,
    pub topic: &'static str,
    pub episode_title: &'static str,
    pub hosts: &'static str,
    pub target_audience: &'static str,
    pub tone: &'static str,
    pub duration: u32,
    pub include_ads: bool,
    pub include_timestamps: bool,
    pub include_tagline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleSummary {
    pub index: usize,
    pub label: String,
}

pub static SAMPLES: [Sample; 5] = [
    Sample {
        podcast_name: "The Mindful Entrepreneur",
        topic: "mental health and entrepreneurship",
        episode_title: "Breaking Through Mental Barriers in Business",
        hosts: "Sarah — empathetic and insightful; Mike — practical and motivational",
        target_audience: "entrepreneurs and business professionals",
        tone: "motivational",
        duration: 30,
        include_ads: true,
        include_timestamps: true,
        include_tagline: true,
    },
    Sample {
        podcast_name: "Tech Talk Weekly",
        topic: "artificial intelligence and machine learning",
        episode_title: "The Future of AI in Healthcare",
        hosts: "Alex — tech-savvy and analytical; Jordan — curious and questioning",
        target_audience: "tech enthusiasts and healthcare professionals",
        tone: "educational",
        duration: 45,
        include_ads: false,
        include_timestamps: true,
        include_tagline: true,
    },
    Sample {
        podcast_name: "Comedy Corner",
        topic: "everyday life and relationships",
        episode_title: "Dating Disasters and Relationship Fails",
        hosts: "Emma — hilarious and witty; Tom — sarcastic and observant",
        target_audience: "young adults and comedy lovers",
        tone: "funny",
        duration: 20,
        include_ads: true,
        include_timestamps: false,
        include_tagline: true,
    },
    Sample {
        podcast_name: "Business Breakthrough",
        topic: "startup strategies and funding",
        episode_title: "From Idea to IPO: A Startup Journey",
        hosts: "David — experienced entrepreneur; Lisa — financial expert",
        target_audience: "startup founders and investors",
        tone: "professional",
        duration: 60,
        include_ads: true,
        include_timestamps: true,
        include_tagline: false,
    },
    Sample {
        podcast_name: "Heart to Heart",
        topic: "personal growth and self-care",
        episode_title: "Finding Your Inner Strength",
        hosts: "Maya — compassionate and wise; Chris — supportive and encouraging",
        target_audience: "people seeking personal development",
        tone: "emotional",
        duration: 25,
        include_ads: false,
        include_timestamps: true,
        include_tagline: true,
    },
];

impl Sample {
    pub fn label(&self) -> String {
        format!("{} — {} ({})", self.podcast_name, self.episode_title, self.topic)
    }

    fn matches(&self, needle: &str) -> bool {
        [self.podcast_name, self.episode_title, self.topic]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    pub fn to_form(&self) -> EpisodeForm {
        EpisodeForm {
            podcast_name: Some(self.podcast_name.to_string()),
            topic: Some(self.topic.to_string()),
            episode_title: Some(self.episode_title.to_string()),
            hosts: Some(self.hosts.to_string()),
            target_audience: Some(self.target_audience.to_string()),
            tone: Some(self.tone.to_string()),
            duration: Some(self.duration.to_string()),
            include_ads: self.include_ads,
            include_timestamps: self.include_timestamps,
            include_tagline: self.include_tagline,
        }
    }
}

pub fn get(index: usize) -> Option<&'static Sample> {
    SAMPLES.get(index)
}

/// Pick any sample, for the "fill with sample data" shortcut.
pub fn random() -> (usize, &'static Sample) {
    let index = rand::thread_rng().gen_range(0..SAMPLES.len());
    (index, &SAMPLES[index])
}

/// Samples whose name, title or topic contains `query`, ignoring case.
/// A blank query lists everything.
pub fn search(query: &str) -> Vec<SampleSummary> {
    let needle = query.trim().to_lowercase();
    SAMPLES
        .iter()
        .enumerate()
        .filter(|(_, sample)| needle.is_empty() || sample.matches(&needle))
        .map(|(index, sample)| SampleSummary {
            index,
            label: sample.label(),
        })
        .collect()
}
