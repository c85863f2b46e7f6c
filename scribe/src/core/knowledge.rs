use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A headline fact about a topic and why it matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicFacts {
    pub fact: String,
    pub importance: String,
}

#[derive(Debug, Clone)]
struct TopicEntry {
    facts: TopicFacts,
    myth: String,
}

/// Topic → fact, importance and common myth. Keys are stored lowercase.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: HashMap<String, TopicEntry>,
    generic: TopicFacts,
    generic_myth: String,
}

// (topic, fact, importance, myth)
const BUILTIN_TOPICS: &[(&str, &str, &str, &str)] = &[
    (
        "mental health",
        "1 in 4 people will experience a mental health issue in their lifetime",
        "understanding mental health helps us support ourselves and others",
        "seeking help is a sign of weakness",
    ),
    (
        "business",
        "90% of startups fail within their first year",
        "learning from failures is crucial for entrepreneurial success",
        "you need a perfect idea to start a business",
    ),
    (
        "technology",
        "the average person checks their phone 96 times per day",
        "technology shapes our daily lives in ways we often don't realize",
        "AI will replace all human jobs",
    ),
    (
        "relationships",
        "strong relationships can increase life expectancy by up to 50%",
        "healthy relationships are fundamental to our well-being",
        "love should be effortless and natural",
    ),
    (
        "artificial intelligence",
        "AI is expected to create 97 million new jobs by 2025",
        "understanding AI helps us adapt to the future of work",
        "AI is too complex for regular people to understand",
    ),
    (
        "cryptocurrency",
        "Bitcoin's market cap has grown from $0 to over $1 trillion",
        "digital currencies are reshaping the global financial system",
        "cryptocurrency is just a scam",
    ),
    (
        "cooking",
        "people who cook at home eat 67% more vegetables",
        "home cooking leads to healthier eating habits",
        "cooking healthy food takes too much time",
    ),
    (
        "travel",
        "travel increases creativity by 50% according to research",
        "new experiences broaden our perspectives and problem-solving abilities",
        "travel is only for the wealthy",
    ),
    (
        "climate",
        "renewable energy now costs less than fossil fuels in most countries",
        "sustainable solutions are becoming economically viable",
        "individual actions don't matter for climate change",
    ),
    (
        "gaming",
        "gamers have 30% better hand-eye coordination than non-gamers",
        "gaming develops valuable cognitive and motor skills",
        "video games are a waste of time",
    ),
    (
        "meditation",
        "just 10 minutes of meditation can reduce stress by 25%",
        "mindfulness practices have measurable benefits for mental health",
        "meditation requires clearing your mind completely",
    ),
    (
        "science",
        "scientists discover 2.5 million new species each year",
        "scientific discovery continues to expand our understanding of the world",
        "science is only for geniuses",
    ),
    (
        "art",
        "creating art reduces cortisol levels by 75%",
        "artistic expression is a powerful tool for emotional well-being",
        "you need natural talent to be artistic",
    ),
    (
        "pets",
        "pet owners have 30% lower risk of heart disease",
        "pets provide significant health and emotional benefits",
        "pets are just for entertainment",
    ),
    (
        "music",
        "music activates every part of the brain simultaneously",
        "music has unique power to influence mood and cognition",
        "you need expensive equipment to make good music",
    ),
    (
        "gardening",
        "gardening burns 300-400 calories per hour",
        "gardening combines physical activity with mental relaxation",
        "you need a green thumb to garden successfully",
    ),
    (
        "nutrition",
        "intermittent fasting can improve insulin sensitivity by 20-31%",
        "proper nutrition timing can optimize metabolic health",
        "skipping meals slows down your metabolism",
    ),
    (
        "finance",
        "real estate has historically appreciated 3-5% annually",
        "real estate investment can build long-term wealth",
        "you need a lot of money to start investing",
    ),
    (
        "photography",
        "portrait photography increases confidence by 85%",
        "professional photos can significantly impact personal branding",
        "expensive equipment makes you a better photographer",
    ),
    (
        "language",
        "learning a new language increases brain size by 3-4%",
        "bilingualism enhances cognitive flexibility and memory",
        "adults can't learn new languages effectively",
    ),
    (
        "productivity",
        "deep work sessions of 90 minutes increase productivity by 40%",
        "focused work time is more valuable than multitasking",
        "multitasking makes you more productive",
    ),
    (
        "history",
        "ancient civilizations had advanced knowledge of astronomy",
        "historical study helps us understand human progress",
        "history is just memorizing dates and facts",
    ),
    (
        "spirituality",
        "meditation reduces anxiety by 60% in just 8 weeks",
        "spiritual practices provide mental and emotional benefits",
        "spirituality is only for religious people",
    ),
    (
        "entrepreneurship",
        "90% of successful startups pivot their original idea",
        "flexibility and adaptation are key to business success",
        "you need a perfect business plan to start",
    ),
    (
        "comedy",
        "laughter increases endorphins by 200%",
        "humor is a powerful tool for stress relief and connection",
        "you're either funny or you're not",
    ),
    (
        "wildlife",
        "dolphins have the largest brain-to-body ratio of any mammal",
        "studying animal intelligence helps us understand consciousness",
        "animals don't have complex emotions",
    ),
    (
        "fashion",
        "sustainable fashion reduces water usage by 20%",
        "eco-friendly fashion choices protect our environment",
        "sustainable fashion is always more expensive",
    ),
];

impl KnowledgeBase {
    pub fn builtin() -> Self {
        let mut kb = Self {
            entries: HashMap::with_capacity(BUILTIN_TOPICS.len()),
            generic: TopicFacts {
                fact: "this topic affects millions of people worldwide".to_string(),
                importance: "understanding this topic can positively impact your life".to_string(),
            },
            generic_myth: "this topic is too difficult for most people to understand".to_string(),
        };

        for (topic, fact, importance, myth) in BUILTIN_TOPICS {
            kb.insert(
                topic,
                TopicFacts {
                    fact: fact.to_string(),
                    importance: importance.to_string(),
                },
                myth,
            );
        }
        kb
    }

    /// Add a topic or replace an existing one. The key is matched case-insensitively.
    pub fn insert(&mut self, topic: &str, facts: TopicFacts, myth: &str) {
        self.entries.insert(
            topic.trim().to_lowercase(),
            TopicEntry {
                facts,
                myth: myth.to_string(),
            },
        );
    }

    pub fn contains(&self, topic: &str) -> bool {
        self.entries.contains_key(&topic.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Facts for `topic`, or the generic entry when the topic is unknown.
    pub fn facts(&self, topic: &str) -> &TopicFacts {
        match self.entries.get(&topic.to_lowercase()) {
            Some(entry) => &entry.facts,
            None => {
                log::debug!("No facts for topic '{}', using generic entry", topic);
                &self.generic
            }
        }
    }

    pub fn generic_myth(&self) -> &str {
        &self.generic_myth
    }

    /// The misconception hosts debunk for `topic`, or the generic one.
    pub fn myth(&self, topic: &str) -> &str {
        self.entries
            .get(&topic.to_lowercase())
            .map(|entry| entry.myth.as_str())
            .unwrap_or(&self.generic_myth)
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}
