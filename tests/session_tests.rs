/// End-to-end synthesis session tests driving the whole engine: template
/// selection, markup interpretation, pattern generation, latency, and the
/// generation log.

use std::time::Duration;

use mirage_engine::core::latency::Latency;
use mirage_engine::core::session::SynthesisSession;
use mirage_engine::schema::block::DisplayBlock;

fn instant_session() -> SynthesisSession {
    SynthesisSession::builder()
        .latency(Latency::none())
        .build()
        .unwrap()
}

#[tokio::test]
async fn explanation_prompt_renders_the_explanation_response() {
    let mut session = instant_session();

    let response = session
        .synthesize_text("explain how photosynthesis works")
        .await
        .unwrap();

    assert_eq!(
        response.blocks[0],
        DisplayBlock::Heading("Comprehensive Explanation".to_string())
    );

    let steps: Vec<&str> = response
        .blocks
        .iter()
        .filter_map(|block| match block {
            DisplayBlock::Emphasis(text) => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(steps.len(), 5);
    assert!(steps[0].starts_with("Step 1"));
    assert!(steps[4].starts_with("Step 5"));

    assert_eq!(session.history().len(), 1);
}

#[tokio::test]
async fn whitespace_prompt_leaves_no_trace() {
    let mut session = instant_session();
    session.synthesize_text("summarize something").await.unwrap();

    let before: Vec<String> = session
        .history()
        .iter()
        .map(|entry| entry.prompt.clone())
        .collect();

    assert!(session.synthesize_text(" \t \n ").await.is_none());

    let after: Vec<String> = session
        .history()
        .iter()
        .map(|entry| entry.prompt.clone())
        .collect();
    assert_eq!(before, after);
}

#[tokio::test]
async fn equal_length_prompts_produce_identical_patterns() {
    let session = instant_session();

    let first = session
        .synthesize_visual("abcdefghij", 640.0, 480.0)
        .await
        .unwrap();
    let second = session
        .synthesize_visual("jihgfedcba", 640.0, 480.0)
        .await
        .unwrap();
    assert_eq!(first, second);

    let longer = session
        .synthesize_visual("abcdefghijk", 640.0, 480.0)
        .await
        .unwrap();
    assert_ne!(first, longer);
}

#[tokio::test]
async fn history_records_completions_in_order() {
    let mut session = instant_session();

    session
        .synthesize_text("write a story about a compiler")
        .await
        .unwrap();
    session.synthesize_text("summarize the story").await.unwrap();

    let history = session.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].prompt, "write a story about a compiler");
    assert_eq!(history[1].prompt, "summarize the story");
    assert!(history[0].timestamp <= history[1].timestamp);
}

#[tokio::test]
async fn responses_are_reproducible_across_sessions() {
    let mut first = instant_session();
    let mut second = instant_session();

    let blocks_a = first
        .synthesize_text("create a poem about autumn")
        .await
        .unwrap()
        .blocks
        .clone();
    let blocks_b = second
        .synthesize_text("create a poem about autumn")
        .await
        .unwrap()
        .blocks
        .clone();

    assert_eq!(blocks_a, blocks_b);
}

#[tokio::test]
async fn logged_prompt_is_trimmed() {
    let mut session = instant_session();
    let response = session
        .synthesize_text("  explain how tides work  ")
        .await
        .unwrap();
    assert_eq!(response.prompt, "explain how tides work");
}

#[tokio::test]
async fn patterns_have_fifty_shapes_inside_the_canvas() {
    let session = instant_session();
    let shapes = session
        .synthesize_visual("draw the cosmos", 320.0, 200.0)
        .await
        .unwrap();

    assert_eq!(shapes.len(), 50);
    for shape in &shapes {
        assert!(shape.x >= 0.0 && shape.x < 320.0);
        assert!(shape.y >= 0.0 && shape.y < 200.0);
        assert!(shape.radius >= 10.0 && shape.radius < 60.0);
        assert!(shape.hue < 360);
        assert_eq!(shape.alpha, 0.6);
    }
}

#[tokio::test(start_paused = true)]
async fn realistic_latency_paces_both_synthesis_kinds() {
    let mut session = SynthesisSession::builder()
        .latency(Latency::realistic())
        .build()
        .unwrap();

    let start = tokio::time::Instant::now();
    session.synthesize_text("summarize the pacing").await.unwrap();
    assert_eq!(start.elapsed(), Duration::from_millis(1500));

    let start = tokio::time::Instant::now();
    session
        .synthesize_visual("summarize the pacing", 800.0, 400.0)
        .await
        .unwrap();
    assert_eq!(start.elapsed(), Duration::from_millis(1000));
}

#[tokio::test(start_paused = true)]
async fn blank_prompts_skip_the_latency_pause() {
    // Realistic latency by default; the decline happens before the pause.
    let mut session = SynthesisSession::builder().build().unwrap();

    let start = tokio::time::Instant::now();
    assert!(session.synthesize_text("   ").await.is_none());
    assert!(session
        .synthesize_visual("   ", 800.0, 400.0)
        .await
        .is_none());
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test]
async fn bank_file_builder_loads_the_fixture() {
    let mut session = SynthesisSession::builder()
        .bank_file("tests/fixtures/minimal_bank.ron")
        .latency(Latency::none())
        .build()
        .unwrap();

    let response = session.synthesize_text("please ping the server").await.unwrap();
    assert_eq!(
        response.blocks,
        vec![
            DisplayBlock::Heading("Pong".to_string()),
            DisplayBlock::Paragraph(String::new()),
            DisplayBlock::Emphasis("fast".to_string()),
        ]
    );
}

#[tokio::test]
async fn log_handoff_carries_history_into_a_new_session() {
    let mut session = instant_session();
    session
        .synthesize_text("create a poem about handoffs")
        .await
        .unwrap();

    let log = session.into_log();
    let mut resumed = SynthesisSession::builder()
        .latency(Latency::none())
        .with_log(log)
        .build()
        .unwrap();
    resumed.synthesize_text("summarize the poem").await.unwrap();

    assert_eq!(resumed.history().len(), 2);
    assert_eq!(resumed.history()[0].prompt, "create a poem about handoffs");
    assert_eq!(resumed.history()[1].prompt, "summarize the poem");
}
