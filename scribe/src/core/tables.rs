use crate::core::config::Config;
use crate::core::knowledge::{KnowledgeBase, TopicFacts};
use crate::core::tone::ToneTable;

/// The content corpus the composer reads from.
#[derive(Debug, Clone, Default)]
pub struct ContentTables {
    pub tones: ToneTable,
    pub topics: KnowledgeBase,
}

impl ContentTables {
    pub fn builtin() -> Self {
        Self {
            tones: ToneTable::builtin(),
            topics: KnowledgeBase::builtin(),
        }
    }

    /// Built-in tables with the config's `[tones.*]` and `[topics.*]` layered on top.
    pub fn from_config(config: &Config) -> Self {
        let mut tables = Self::builtin();

        for (name, style) in &config.tones {
            tables.tones.insert(name.clone(), style.clone());
        }

        for (name, topic) in &config.topics {
            let myth = topic
                .myth
                .clone()
                .unwrap_or_else(|| tables.topics.generic_myth().to_string());
            tables.topics.insert(
                name,
                TopicFacts {
                    fact: topic.fact.clone(),
                    importance: topic.importance.clone(),
                },
                &myth,
            );
        }

        log::debug!(
            "Content tables ready: {} tones, {} topics",
            tables.tones.names().count(),
            tables.topics.len()
        );
        tables
    }
}
