/// Guided tour: drives every part of the synthesis engine once.
///
/// Visits each built-in trigger, the fallback body, the silent decline on
/// a blank prompt, a shape pattern with its caption, and the session
/// history at the end.
///
/// Run with: cargo run --example guided_tour

use mirage_engine::core::latency::Latency;
use mirage_engine::core::pattern;
use mirage_engine::core::session::SynthesisSession;
use mirage_engine::schema::block::DisplayBlock;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Instant pacing keeps the tour snappy. Swap in Latency::realistic()
    // to feel the stock demo delays.
    let mut session = SynthesisSession::builder()
        .latency(Latency::none())
        .build()
        .expect("Failed to parse the built-in bank");

    println!("========================================");
    println!("   MIRAGE ENGINE GUIDED TOUR");
    println!("========================================");
    println!();

    // --- One prompt per built-in trigger, plus one that falls back ---
    let prompts = [
        "Create a poem about the sea",
        "Explain how photosynthesis works",
        "Write a story about a lighthouse keeper",
        "Summarize the meeting notes",
        "What is the airspeed velocity of an unladen swallow?",
    ];

    for prompt in prompts {
        synthesize_and_print(&mut session, prompt).await;
    }

    // --- A blank prompt is declined without touching the history ---
    let before = session.history().len();
    let declined = session.synthesize_text("   ").await.is_none();
    println!(
        "Blank prompt declined silently: {} (history still {} entries)",
        declined,
        session.history().len()
    );
    assert!(declined);
    assert_eq!(session.history().len(), before);
    println!();

    // --- A shape pattern, reproducible for equal-length prompts ---
    let prompt = "Create a poem about the sea";
    let shapes = session
        .synthesize_visual(prompt, 800.0, 400.0)
        .await
        .expect("prompt is not blank");

    println!("--- Shape Pattern ---");
    println!("{}", pattern::caption(prompt));
    println!("{} shapes; the first three:", shapes.len());
    for shape in shapes.iter().take(3) {
        println!(
            "  circle at ({:.1}, {:.1}) r={:.1} {}",
            shape.x,
            shape.y,
            shape.radius,
            shape.css_color()
        );
    }

    let twin = "x".repeat(prompt.chars().count());
    let twin_shapes = session
        .synthesize_visual(&twin, 800.0, 400.0)
        .await
        .expect("prompt is not blank");
    println!(
        "A different prompt of equal length repeats the pattern: {}",
        shapes == twin_shapes
    );
    println!();

    // --- The session history, oldest first ---
    println!("--- Session History ---");
    for (index, entry) in session.history().iter().enumerate() {
        println!("  {}. \"{}\" ({} blocks)", index + 1, entry.prompt, entry.blocks.len());
    }
}

async fn synthesize_and_print(session: &mut SynthesisSession, prompt: &str) {
    println!("PROMPT: {}", prompt);
    println!("----------------------------------------");

    let response = session
        .synthesize_text(prompt)
        .await
        .expect("prompt is not blank");

    for block in &response.blocks {
        match block {
            DisplayBlock::Heading(text) => println!("== {} ==", text),
            DisplayBlock::Emphasis(text) => println!("*{}*", text),
            DisplayBlock::Paragraph(text) => println!("{}", text),
        }
    }
    println!();
}
