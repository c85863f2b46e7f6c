//! Assemble a complete plain-text script from an [`EpisodeInput`].
//!
//! The output layout is consumed by [`crate::core::render`], which relies on
//! the emoji header markers, the `[M:SS]` timestamp prefixes and the
//! `Name: "..."` speaker lines produced here.

use std::fmt::Write;

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::core::episode::EpisodeInput;
use crate::core::hosts::{co_host, parse_hosts, Host};
use crate::core::segments::{format_timestamp, plan_segments, Segment, SegmentKind};
use crate::core::tables::ContentTables;
use crate::core::tone::{Placeholders, ToneStyle};

static BUILTIN_TABLES: Lazy<ContentTables> = Lazy::new(ContentTables::builtin);

const CALL_TO_ACTION: [&str; 4] = [
    "Follow us on social media",
    "Share this episode with friends",
    "Leave us a review on your favorite podcast platform",
    "Visit our website for more content",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("no hosts given: expected \"Name — description; Name — description\"")]
    NoHosts,
}

/// Compose with the built-in tone and topic tables.
pub fn compose(input: &EpisodeInput) -> Result<String, ComposeError> {
    ScriptComposer::new(&BUILTIN_TABLES).compose(input)
}

pub struct ScriptComposer<'a> {
    tables: &'a ContentTables,
}

/// Everything a dialogue beat can refer to.
struct Scene<'a> {
    input: &'a EpisodeInput,
    lead: &'a Host,
    partner: &'a Host,
    style: &'a ToneStyle,
    fact: &'a str,
    importance: &'a str,
    myth: &'a str,
}

impl<'a> ScriptComposer<'a> {
    pub fn new(tables: &'a ContentTables) -> Self {
        Self { tables }
    }

    pub fn compose(&self, input: &EpisodeInput) -> Result<String, ComposeError> {
        let hosts = parse_hosts(&input.hosts);
        let (lead, partner) = match (hosts.first(), co_host(&hosts)) {
            (Some(lead), Some(partner)) => (lead, partner),
            _ => return Err(ComposeError::NoHosts),
        };

        let facts = self.tables.topics.facts(&input.topic);
        let scene = Scene {
            input,
            lead,
            partner,
            style: self.tables.tones.style(&input.tone),
            fact: &facts.fact,
            importance: &facts.importance,
            myth: self.tables.topics.myth(&input.topic),
        };
        let plan = plan_segments(input.duration);

        log::debug!(
            "Composing '{}' ({} min, {} host(s), tone '{}')",
            input.episode_title,
            input.duration,
            hosts.len(),
            input.tone
        );

        let mut script = String::with_capacity(8 * 1024);
        write_header(&mut script, &scene);
        write_body(&mut script, &scene, &plan);
        if input.include_ads {
            write_ad_breaks(&mut script, input);
        }
        write_conclusion(&mut script, &scene);
        write_outro(&mut script, &scene);
        Ok(script)
    }
}

/// `"[12:00] "`, or nothing when timestamps are off.
fn stamp(minutes: u32, include: bool) -> String {
    if include {
        format!("[{}] ", format_timestamp(minutes, true))
    } else {
        String::new()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn dialogue(turns: &[(&Host, String)]) -> String {
    turns
        .iter()
        .map(|(host, text)| format!("{}: \"{}\"", host.name, text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

impl Scene<'_> {
    fn placeholders(&self) -> Placeholders<'_> {
        Placeholders {
            podcast: &self.input.podcast_name,
            host: &self.lead.name,
            topic: &self.input.topic,
            audience: &self.input.target_audience,
        }
    }

    fn beat(&self, kind: SegmentKind) -> String {
        let (lead, partner) = (self.lead, self.partner);
        let topic = &self.input.topic;
        let audience = &self.input.target_audience;

        match kind {
            SegmentKind::Introduction => dialogue(&[(
                lead,
                format!(
                    "So today we're talking about {topic}, and I think this is something that really resonates with our audience of {audience}. What got you interested in this topic?"
                ),
            )]),
            SegmentKind::MainTopic1 => dialogue(&[
                (
                    lead,
                    format!(
                        "Let's dive into the heart of {topic}. Did you know that {}? This is really important because {}.",
                        self.fact, self.importance
                    ),
                ),
                (
                    partner,
                    format!(
                        "That's fascinating! And what I find particularly interesting is how this connects to our daily lives. For our listeners who are {audience}, this is especially relevant because it directly impacts their decision-making process."
                    ),
                ),
                (
                    lead,
                    format!(
                        "Absolutely! And there's so much more to explore here. The research shows that understanding {topic} can lead to significant improvements in various areas of life."
                    ),
                ),
            ]),
            SegmentKind::MainTopic2 => dialogue(&[
                (
                    lead,
                    format!(
                        "Now, let's dig deeper into the practical aspects of {topic}. What are some common misconceptions that people have about this topic?"
                    ),
                ),
                (
                    partner,
                    format!(
                        "Great question! One of the biggest myths I hear is that {}. But the reality is quite different. In fact, studies have shown that the opposite is often true.",
                        self.myth
                    ),
                ),
                (
                    lead,
                    format!(
                        "That's such an important distinction to make. And for our audience of {audience}, understanding these nuances can make all the difference in their approach to this topic."
                    ),
                ),
            ]),
            SegmentKind::Discussion => dialogue(&[
                (
                    lead,
                    format!(
                        "That's a great point. What I find fascinating is how this connects to our daily lives. Let's talk about the real-world applications of {topic}."
                    ),
                ),
                (
                    partner,
                    format!(
                        "Absolutely! And for our listeners who are {audience}, this is particularly relevant because it directly impacts their daily decisions and long-term goals. I've seen firsthand how understanding these concepts can transform someone's approach to this area."
                    ),
                ),
                (
                    lead,
                    format!(
                        "That's so true! And I think what makes this even more interesting is how it intersects with other important areas. There's this fascinating connection between {topic} and broader life principles that we should explore."
                    ),
                ),
                (
                    partner,
                    "Exactly! And that's why I'm so excited to share some practical strategies that our listeners can implement right away. These aren't just theoretical concepts - they're actionable insights that can make a real difference."
                        .to_string(),
                ),
            ]),
            SegmentKind::Examples => dialogue(&[
                (
                    lead,
                    format!(
                        "Let's dive into some concrete examples. I want to share a story that really illustrates the power of understanding {topic}."
                    ),
                ),
                (
                    partner,
                    "I love that! Real examples make everything so much clearer. What happened in your story?".to_string(),
                ),
                (
                    lead,
                    format!(
                        "Well, there was this situation where someone applied the principles we've been discussing, and the results were remarkable. It really shows how {topic} can be a game-changer when you understand the underlying concepts."
                    ),
                ),
                (
                    partner,
                    "That's incredible! And I have a similar example from my own experience. It's amazing how these principles work across different contexts and situations. The key is understanding the fundamentals and then adapting them to your specific circumstances."
                        .to_string(),
                ),
                (
                    lead,
                    format!(
                        "Absolutely! And that's what makes this so valuable for our audience of {audience}. These aren't one-size-fits-all solutions, but rather frameworks that can be customized to individual needs and goals."
                    ),
                ),
            ]),
            SegmentKind::Conclusion => dialogue(&[
                (
                    lead,
                    format!(
                        "As we wrap up this segment, I want to leave you with this thought: {}",
                        self.style.quote
                    ),
                ),
                (
                    partner,
                    format!(
                        "That's so powerful! And I think what we've covered today really shows how {topic} can be a game-changer for our listeners. The key is taking action on what we've discussed."
                    ),
                ),
                (
                    lead,
                    format!(
                        "Absolutely! And remember, our audience of {audience} has the power to make a real difference. These aren't just concepts - they're tools for transformation."
                    ),
                ),
                (
                    partner,
                    "I couldn't agree more. And if you're listening and this resonates with you, I encourage you to start small. Pick one thing we've discussed today and implement it this week. That's how real change happens."
                        .to_string(),
                ),
                (
                    lead,
                    "Perfect advice! And don't forget to share your experiences with us. We love hearing from our community about how these ideas are working in your life."
                        .to_string(),
                ),
            ]),
        }
    }

    fn wrap_up(&self) -> String {
        let (lead, partner) = (self.lead, self.partner);
        let topic = &self.input.topic;
        let audience = &self.input.target_audience;

        dialogue(&[
            (
                lead,
                format!(
                    "Well, that's a wrap on today's episode about {topic}. I hope you found this conversation as enlightening as I did."
                ),
            ),
            (
                partner,
                format!(
                    "I absolutely did! And I think what we've covered today really demonstrates the power of understanding {topic}. For our listeners who are {audience}, this information can be truly transformative."
                ),
            ),
            (
                lead,
                "Couldn't agree more! And I want to emphasize something important - this isn't just theoretical knowledge. These are practical insights that you can start applying immediately. The key is taking that first step."
                    .to_string(),
            ),
            (
                partner,
                "Exactly! And remember, change doesn't happen overnight. It's about consistent, small actions that compound over time. Start with one thing we discussed today and build from there."
                    .to_string(),
            ),
            (
                lead,
                "Perfect advice! And I want to thank our amazing audience for joining us today. Your engagement and questions make these conversations so much richer."
                    .to_string(),
            ),
            (
                partner,
                format!(
                    "Absolutely! And if you found value in today's episode, please share it with someone who might benefit. That's how we grow this amazing community of {audience}."
                ),
            ),
            (
                lead,
                "That's the spirit! And don't forget to follow us on social media for daily tips and behind-the-scenes content. We love connecting with our listeners beyond the podcast."
                    .to_string(),
            ),
            (
                partner,
                format!(
                    "And if you have questions or want to share your own experiences with {topic}, reach out to us. We read every message and often feature listener stories in future episodes."
                ),
            ),
            (
                lead,
                "That's a great point! Your stories and insights make this podcast what it is. So keep those messages coming, and we'll see you next time for another deep dive into topics that matter to our community."
                    .to_string(),
            ),
        ])
    }
}

// `write!` into a String cannot fail, hence the ignored results below.

fn write_header(out: &mut String, scene: &Scene) {
    let input = scene.input;
    let _ = write!(
        out,
        "🎙️ PODCAST SCRIPT\n📻 {}\n📝 Episode: {}\n⏱️ Duration: {} minutes\n🎯 Target Audience: {}\n🎭 Tone: {}\n\n",
        input.podcast_name,
        input.episode_title,
        input.duration,
        input.target_audience,
        capitalize(&input.tone)
    );

    if input.include_tagline {
        let tagline = scene.placeholders().fill(&scene.style.tagline);
        let _ = write!(out, "🏷️ TAGLINE: \"{}\"\n\n", tagline);
    }

    let intro = scene.placeholders().fill(&scene.style.intro);
    let _ = write!(
        out,
        "🎵 [INTRO MUSIC - {}]\n\n{}{}\n\n",
        scene.style.intro_music,
        stamp(0, input.include_timestamps),
        intro
    );
}

fn write_body(out: &mut String, scene: &Scene, plan: &[Segment]) {
    for segment in plan {
        let _ = write!(
            out,
            "{}{}\n\n",
            stamp(segment.start, scene.input.include_timestamps),
            scene.beat(segment.kind)
        );
    }
}

fn write_ad_breaks(out: &mut String, input: &EpisodeInput) {
    let interval = input.duration / 3;
    for slot in 1..=2 {
        let _ = write!(
            out,
            "\n{}🎯 AD BREAK\n\"Before we continue, I want to tell you about our amazing sponsor...\"\n[30-second ad read]\n\"Thanks to our sponsor for supporting the show. Now, back to our conversation...\"\n\n",
            stamp(slot * interval, input.include_timestamps)
        );
    }
}

fn write_conclusion(out: &mut String, scene: &Scene) {
    let at = scene.input.duration.saturating_sub(5);
    out.push_str(&stamp(at, scene.input.include_timestamps));
    out.push_str(&scene.wrap_up());
}

fn write_outro(out: &mut String, scene: &Scene) {
    let _ = write!(out, "\n🎵 [OUTRO MUSIC - {}]\n\n📱 CALL TO ACTION:\n", scene.style.outro_music);
    for item in CALL_TO_ACTION {
        let _ = writeln!(out, "• {}", item);
    }
    let _ = write!(
        out,
        "\n🎬 END OF EPISODE\nTotal Runtime: {} minutes\nGenerated by Podcast Script Generator",
        scene.input.duration
    );
}
