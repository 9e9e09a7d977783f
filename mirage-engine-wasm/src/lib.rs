//! WASM bindings for mirage-engine, powering the interactive browser demo.
//!
//! The hosting page owns pacing (spinners, progress affordances), so the
//! embedded session runs with zero latency and every synthesis future
//! completes on its first poll. That is what lets these bindings block on
//! the async engine without a reactor in the WASM environment.

use wasm_bindgen::prelude::*;

use mirage_engine::core::bank::TemplateBank;
use mirage_engine::core::latency::Latency;
use mirage_engine::core::pattern;
use mirage_engine::core::session::SynthesisSession;
use mirage_engine::schema::response::GeneratedResponse;
use mirage_engine::schema::shape::Shape;

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct BlockOut<'a> {
    kind: &'static str,
    text: &'a str,
}

#[derive(serde::Serialize)]
struct ResponseOut<'a> {
    prompt: &'a str,
    blocks: Vec<BlockOut<'a>>,
    timestamp: String,
}

#[derive(serde::Serialize)]
struct ShapeOut {
    x: f64,
    y: f64,
    radius: f64,
    hue: u16,
    alpha: f64,
    color: String,
}

fn response_out(response: &GeneratedResponse) -> ResponseOut<'_> {
    ResponseOut {
        prompt: &response.prompt,
        blocks: response
            .blocks
            .iter()
            .map(|block| BlockOut {
                kind: block.kind(),
                text: block.text(),
            })
            .collect(),
        timestamp: response.timestamp.to_rfc3339(),
    }
}

fn shape_out(shape: &Shape) -> ShapeOut {
    ShapeOut {
        x: shape.x,
        y: shape.y,
        radius: shape.radius,
        hue: shape.hue,
        alpha: shape.alpha,
        color: shape.css_color(),
    }
}

// ---------------------------------------------------------------------------
// SynthesisDemo — the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct SynthesisDemo {
    session: SynthesisSession,
}

#[wasm_bindgen]
impl SynthesisDemo {
    /// Create a demo instance over the built-in catalogue.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<SynthesisDemo, JsError> {
        let session = SynthesisSession::builder()
            .latency(Latency::none())
            .build()
            .map_err(|e| JsError::new(&format!("Bank error: {e}")))?;
        Ok(SynthesisDemo { session })
    }

    /// Create a demo instance over a caller-supplied RON bank.
    pub fn from_bank(bank_ron: &str) -> Result<SynthesisDemo, JsError> {
        let bank = TemplateBank::parse_ron(bank_ron)
            .map_err(|e| JsError::new(&format!("Bank parse error: {e}")))?;
        let session = SynthesisSession::builder()
            .with_bank(bank)
            .latency(Latency::none())
            .build()
            .map_err(|e| JsError::new(&format!("Bank error: {e}")))?;
        Ok(SynthesisDemo { session })
    }

    /// Synthesize a text response for a prompt.
    ///
    /// Returns the logged response as a JSON object:
    /// ```json
    /// {
    ///   "prompt": "explain how this works",
    ///   "blocks": [{"kind": "heading", "text": "Comprehensive Explanation"}],
    ///   "timestamp": "2024-05-01T12:00:00+00:00"
    /// }
    /// ```
    /// A prompt that is blank after trimming yields JSON `null` and leaves
    /// the history untouched.
    pub fn synthesize_text(&mut self, prompt: &str) -> Result<String, JsError> {
        let response = futures::executor::block_on(self.session.synthesize_text(prompt));
        let out = response.map(response_out);
        serde_json::to_string(&out)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Synthesize the shape pattern for a prompt on a canvas of the given
    /// size. Returns a JSON array of shapes in draw order (each carrying a
    /// ready-made CSS color), or JSON `null` for a blank prompt.
    pub fn synthesize_visual(
        &self,
        prompt: &str,
        width: f64,
        height: f64,
    ) -> Result<String, JsError> {
        let shapes =
            futures::executor::block_on(self.session.synthesize_visual(prompt, width, height));
        let out = shapes.map(|shapes| shapes.iter().map(shape_out).collect::<Vec<_>>());
        serde_json::to_string(&out)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Return every completed text synthesis as a JSON array, oldest first.
    pub fn history(&self) -> Result<String, JsError> {
        let out: Vec<ResponseOut<'_>> = self.session.history().iter().map(response_out).collect();
        serde_json::to_string(&out)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Caption text for a generated pattern.
    pub fn caption(prompt: &str) -> String {
        pattern::caption(prompt.trim())
    }

    /// Return a JSON array of the trigger phrases the current bank
    /// responds to, in matching priority order.
    pub fn triggers(&self) -> String {
        let triggers: Vec<&str> = self
            .session
            .bank()
            .entries
            .iter()
            .map(|t| t.trigger.as_str())
            .collect();
        serde_json::to_string(&triggers).unwrap_or_else(|_| "[]".to_string())
    }

    /// Start the session over with an empty history, keeping the bank.
    pub fn reset(&mut self) -> Result<(), JsError> {
        let bank = self.session.bank().clone();
        self.session = SynthesisSession::builder()
            .with_bank(bank)
            .latency(Latency::none())
            .build()
            .map_err(|e| JsError::new(&format!("Bank error: {e}")))?;
        Ok(())
    }
}
