use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tone used when a lookup misses.
pub const DEFAULT_TONE: &str = "casual";

/// Tones shipped with the built-in table, in display order.
pub const KNOWN_TONES: [&str; 7] = [
    "casual",
    "funny",
    "professional",
    "educational",
    "emotional",
    "motivational",
    "storytelling",
];

/// Phrasing for one tone.
///
/// `intro` and `tagline` are templates; see [`Placeholders`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneStyle {
    pub intro: String,
    pub tagline: String,
    pub intro_music: String,
    pub outro_music: String,
    pub quote: String,
}

/// Values substituted into tone templates: `{podcast}`, `{host}`, `{topic}`, `{audience}`.
#[derive(Debug, Clone, Copy)]
pub struct Placeholders<'a> {
    pub podcast: &'a str,
    pub host: &'a str,
    pub topic: &'a str,
    pub audience: &'a str,
}

impl Placeholders<'_> {
    /// Single left-to-right pass, so substituted values are never re-expanded.
    pub fn fill(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len() + 64);
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open..];
            let value = after.find('}').and_then(|close| {
                let key = &after[1..close];
                let value = match key {
                    "podcast" => Some(self.podcast),
                    "host" => Some(self.host),
                    "topic" => Some(self.topic),
                    "audience" => Some(self.audience),
                    _ => None,
                };
                value.map(|v| (v, close))
            });

            match value {
                Some((v, close)) => {
                    out.push_str(v);
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = &after[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// Tone name → style. Keys match exactly; anything else resolves to `casual`.
#[derive(Debug, Clone)]
pub struct ToneTable {
    styles: BTreeMap<String, ToneStyle>,
    // Mirror of the `casual` entry, so a miss never needs a second lookup.
    fallback: ToneStyle,
}

impl ToneTable {
    pub fn builtin() -> Self {
        let mut styles = BTreeMap::new();
        let mut add = |name: &str, intro: &str, tagline: &str, intro_music: &str, outro_music: &str, quote: &str| {
            styles.insert(
                name.to_string(),
                ToneStyle {
                    intro: intro.to_string(),
                    tagline: tagline.to_string(),
                    intro_music: intro_music.to_string(),
                    outro_music: outro_music.to_string(),
                    quote: quote.to_string(),
                },
            );
        };

        add(
            "funny",
            "Well, well, well... look who's back for another episode of {podcast}! I'm {host}, and today we're tackling {topic} - and trust me, it's going to be wild!",
            "Where {topic} meets comedy and chaos",
            "playful, energetic",
            "cheerful, upbeat",
            "life is what happens when you're busy making other plans",
        );
        add(
            "professional",
            "Good day, and welcome to {podcast}. I'm {host}, and today we'll be exploring {topic} with expert insights and practical takeaways.",
            "Expert insights on {topic} for {audience}",
            "sophisticated, clean",
            "professional, clean",
            "excellence is not a skill, it's an attitude",
        );
        add(
            "educational",
            "Welcome to {podcast}, where we make learning fun and accessible. I'm {host}, and today's topic is {topic}.",
            "Learn {topic} the fun way",
            "inspiring, academic",
            "satisfying, complete",
            "the only way to do great work is to love what you do",
        );
        add(
            "emotional",
            "Hello, beautiful souls. Welcome to {podcast}. I'm {host}, and today we're going to have a heartfelt conversation about {topic}.",
            "Heart-to-heart conversations about {topic}",
            "warm, gentle",
            "warm, comforting",
            "vulnerability is the birthplace of love, belonging, and joy",
        );
        add(
            "motivational",
            "Rise and shine, champions! Welcome to {podcast}. I'm {host}, and today we're going to transform your understanding of {topic}.",
            "Transform your {topic} journey today",
            "powerful, uplifting",
            "inspiring, forward-moving",
            "your only limit is your mind",
        );
        add(
            "storytelling",
            "Once upon a time, in the world of {topic}... Welcome to {podcast}. I'm {host}, and today we're going on a journey.",
            "The {topic} story that will change your perspective",
            "mysterious, engaging",
            "conclusive, satisfying",
            "every story has the power to change a life",
        );

        styles.insert(DEFAULT_TONE.to_string(), casual_style());
        Self {
            styles,
            fallback: casual_style(),
        }
    }

    /// Add a tone or replace an existing one.
    pub fn insert(&mut self, name: impl Into<String>, style: ToneStyle) {
        let name = name.into();
        if name == DEFAULT_TONE {
            self.fallback = style.clone();
        }
        self.styles.insert(name, style);
    }

    /// Known tones in display order, then any added tones alphabetically.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        let known = KNOWN_TONES
            .iter()
            .filter_map(|name| self.styles.get_key_value(*name))
            .map(|(name, _)| name.as_str());
        let extra = self
            .styles
            .keys()
            .map(String::as_str)
            .filter(|name| !KNOWN_TONES.iter().any(|known| known == name));
        known.chain(extra)
    }

    pub fn get(&self, tone: &str) -> Option<&ToneStyle> {
        self.styles.get(tone)
    }

    /// Exact-match lookup with fallback to the `casual` style.
    pub fn style(&self, tone: &str) -> &ToneStyle {
        if let Some(style) = self.styles.get(tone) {
            return style;
        }
        log::debug!("Unknown tone '{}', using '{}'", tone, DEFAULT_TONE);
        &self.fallback
    }
}

fn casual_style() -> ToneStyle {
    ToneStyle {
        intro: "Hey everyone! Welcome back to {podcast}. I'm {host}, and today we're diving into {topic}.".to_string(),
        tagline: "The {topic} conversation you didn't know you needed".to_string(),
        intro_music: "upbeat, friendly".to_string(),
        outro_music: "relaxed, friendly".to_string(),
        quote: "every expert was once a beginner".to_string(),
    }
}

impl Default for ToneTable {
    fn default() -> Self {
        Self::builtin()
    }
}
