use serde::{Deserialize, Serialize};

/// Number of narrative beats in every script.
pub const SEGMENT_COUNT: usize = 6;

/// Shortest planned segment, in minutes.
pub const MIN_SEGMENT_MINUTES: u32 = 5;

/// The six narrative beats, in the order they are played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Introduction,
    #[serde(rename = "main_topic_1")]
    MainTopic1,
    #[serde(rename = "main_topic_2")]
    MainTopic2,
    Discussion,
    Examples,
    Conclusion,
}

impl SegmentKind {
    pub const ORDER: [SegmentKind; SEGMENT_COUNT] = [
        SegmentKind::Introduction,
        SegmentKind::MainTopic1,
        SegmentKind::MainTopic2,
        SegmentKind::Discussion,
        SegmentKind::Examples,
        SegmentKind::Conclusion,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            SegmentKind::Introduction => "introduction",
            SegmentKind::MainTopic1 => "main_topic_1",
            SegmentKind::MainTopic2 => "main_topic_2",
            SegmentKind::Discussion => "discussion",
            SegmentKind::Examples => "examples",
            SegmentKind::Conclusion => "conclusion",
        }
    }
}

/// A planned beat: start offset and length in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub start: u32,
    pub duration: u32,
    pub kind: SegmentKind,
}

/// Split an episode into six equal beats of at least five minutes each.
///
/// The beats are a display aid for timestamps. They are not forced to add up
/// to `total_minutes`: 100 minutes plans 6 × 16 = 96, and anything under 30
/// minutes plans more than the total.
pub fn plan_segments(total_minutes: u32) -> [Segment; SEGMENT_COUNT] {
    let per_segment = (total_minutes / SEGMENT_COUNT as u32).max(MIN_SEGMENT_MINUTES);

    let mut index = 0;
    SegmentKind::ORDER.map(|kind| {
        let segment = Segment {
            start: index * per_segment,
            duration: per_segment,
            kind,
        };
        index += 1;
        segment
    })
}

/// Render a minute offset as `H:MM` past the hour mark, `M:00` below it.
///
/// Returns an empty string when timestamps are switched off. The `:00` suffix
/// is not seconds; sub-hour offsets always read as whole minutes.
pub fn format_timestamp(minutes: u32, include: bool) -> String {
    if !include {
        return String::new();
    }

    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{}:{:02}", hours, mins)
    } else {
        format!("{}:00", mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_minutes_plans_five_minute_beats() {
        let plan = plan_segments(30);
        let starts: Vec<u32> = plan.iter().map(|s| s.start).collect();
        assert_eq!(starts, vec![0, 5, 10, 15, 20, 25]);
        assert!(plan.iter().all(|s| s.duration == 5));
    }

    #[test]
    fn plan_shape_holds_for_every_duration() {
        for total in 1..=240 {
            let plan = plan_segments(total);
            assert_eq!(plan.len(), SEGMENT_COUNT);
            assert!(plan.iter().all(|s| s.duration >= MIN_SEGMENT_MINUTES));
            assert!(plan.windows(2).all(|w| w[0].start < w[1].start));
            let kinds: Vec<SegmentKind> = plan.iter().map(|s| s.kind).collect();
            assert_eq!(kinds, SegmentKind::ORDER.to_vec());
        }
    }

    #[test]
    fn long_episodes_drift_short_of_total() {
        let plan = plan_segments(100);
        assert_eq!(plan[0].duration, 16);
        assert_eq!(plan.iter().map(|s| s.duration).sum::<u32>(), 96);
    }

    #[test]
    fn tags_follow_canonical_names() {
        let tags: Vec<&str> = SegmentKind::ORDER.iter().map(|k| k.tag()).collect();
        assert_eq!(
            tags,
            ["introduction", "main_topic_1", "main_topic_2", "discussion", "examples", "conclusion"]
        );
        assert_eq!(
            serde_json::to_string(&SegmentKind::MainTopic2).unwrap(),
            "\"main_topic_2\""
        );
    }

    #[test]
    fn timestamps() {
        assert_eq!(format_timestamp(75, true), "1:15");
        assert_eq!(format_timestamp(60, true), "1:00");
        assert_eq!(format_timestamp(125, true), "2:05");
        assert_eq!(format_timestamp(5, true), "5:00");
        assert_eq!(format_timestamp(0, true), "0:00");
        assert_eq!(format_timestamp(5, false), "");
    }
}
