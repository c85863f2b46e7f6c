use scribe::core::export::ExportFormat;
use scribe::core::samples::SAMPLES;
use scribe::{compose, render_markdown, render_markup, ContentTables, EpisodeForm, EpisodeInput, ScriptComposer};

fn tech_talk_form() -> EpisodeForm {
    serde_json::from_str(
        r#"{
            "podcastName": "Tech Talk Weekly",
            "topic": "artificial intelligence",
            "episodeTitle": "AI Today",
            "hosts": "Alex — curious; Jordan — skeptical",
            "targetAudience": "tech fans",
            "tone": "educational",
            "duration": "30",
            "includeAds": false,
            "includeTimestamps": true,
            "includeTagline": true
        }"#,
    )
    .unwrap()
}

fn timestamp_prefix(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('[')?;
    let end = rest.find(']')?;
    Some(&rest[..end])
}

#[test]
fn tech_talk_weekly_end_to_end() {
    let input = tech_talk_form().validate().unwrap();
    let script = compose(&input).unwrap();

    assert!(script.contains("🏷️ TAGLINE: \"Learn artificial intelligence the fun way\""));
    assert!(script.contains(
        "[0:00] Welcome to Tech Talk Weekly, where we make learning fun and accessible. I'm Alex, and today's topic is artificial intelligence."
    ));
    assert!(!script.contains("AD BREAK"));

    let stamps: Vec<&str> = script.lines().filter_map(timestamp_prefix).collect();
    // intro, six beats, conclusion
    assert_eq!(stamps, ["0:00", "0:00", "5:00", "10:00", "15:00", "20:00", "25:00", "25:00"]);

    let conclusion = script.lines().filter(|l| l.starts_with("[25:00]")).last().unwrap();
    assert!(conclusion.starts_with("[25:00] Alex: \"Well, that's a wrap on today's episode about artificial intelligence."));
}

#[test]
fn sixty_minutes_with_ads() {
    let mut input = tech_talk_form().validate().unwrap();
    input.include_ads = true;
    input.duration = 60;
    let script = compose(&input).unwrap();

    let ad_lines: Vec<&str> = script.lines().filter(|l| l.contains("AD BREAK")).collect();
    assert_eq!(ad_lines, ["[20:00] 🎯 AD BREAK", "[40:00] 🎯 AD BREAK"]);
    assert_eq!(script.matches("[30-second ad read]").count(), 2);
}

#[test]
fn untimed_ad_breaks_render_as_ad_blocks() {
    let mut input = tech_talk_form().validate().unwrap();
    input.include_ads = true;
    input.include_timestamps = false;
    input.duration = 60;
    let script = compose(&input).unwrap();

    let html = render_markup(&script);
    assert_eq!(html.matches("<div class=\"script-ad-break\">🎯 AD BREAK</div>").count(), 2);
    assert!(!html.contains("<div class=\"script-header\">🎯 AD BREAK"));

    let md = render_markdown(&script);
    assert_eq!(md.matches("\n---\n\n### 🎯 AD BREAK\n\n---\n").count(), 2);
}

#[test]
fn shared_composer_is_consistent_across_threads() {
    let tables = ContentTables::builtin();
    let composer = ScriptComposer::new(&tables);
    let inputs: Vec<EpisodeInput> = SAMPLES.iter().map(|s| s.to_form().validate().unwrap()).collect();
    let expected: Vec<String> = inputs.iter().map(|i| composer.compose(i).unwrap()).collect();

    let (inputs, composer) = (&inputs, &composer);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(move || {
                    inputs
                        .iter()
                        .map(|i| composer.compose(i).unwrap())
                        .collect::<Vec<String>>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });

    // the free function shares lazily built tables across threads too
    std::thread::scope(|scope| {
        let handles: Vec<_> = inputs.iter().map(|i| scope.spawn(move || compose(i).unwrap())).collect();
        for (handle, want) in handles.into_iter().zip(&expected) {
            assert_eq!(&handle.join().unwrap(), want);
        }
    });
}

#[test]
fn markup_is_injection_safe() {
    let mut input = tech_talk_form().validate().unwrap();
    input.podcast_name = "<script>alert(1)</script>".to_string();
    input.target_audience = "devs & <b>ops</b>".to_string();
    let html = render_markup(&compose(&input).unwrap());

    assert!(!html.contains("<script>"));
    assert!(!html.contains("<b>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("devs &amp; &lt;b&gt;ops&lt;/b&gt;"));
}

#[test]
fn markdown_of_composed_script() {
    let input = tech_talk_form().validate().unwrap();
    let md = render_markdown(&compose(&input).unwrap());

    assert!(md.starts_with("## PODCAST SCRIPT\n## Tech Talk Weekly\n## Episode: AI Today\n"));
    assert!(md.contains("- **Jordan**: \"That's fascinating!"));
    assert!(md.contains("\n**[5:00] Alex: \"Let's dive into the heart of artificial intelligence."));
    assert!(md.contains("## END OF EPISODE\nTotal Runtime: 30 minutes\nGenerated by Podcast Script Generator"));
    assert!(!md.contains("\n\n\n\n"));
}

#[test]
fn every_sample_composes_and_exports() {
    for sample in &SAMPLES {
        let input: EpisodeInput = sample.to_form().validate().unwrap();
        let script = compose(&input).unwrap();
        assert!(script.contains(&format!("📻 {}\n", sample.podcast_name)));
        assert_eq!(script.contains("TAGLINE"), sample.include_tagline);
        assert_eq!(script.matches("🎯 AD BREAK").count(), if sample.include_ads { 2 } else { 0 });

        for format in [ExportFormat::Text, ExportFormat::Markdown, ExportFormat::Html] {
            assert!(!format.render(&script, sample.episode_title).is_empty());
        }
    }
}
