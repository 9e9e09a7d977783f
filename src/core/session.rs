/// The synthesis session: prompt in, logged response or shape pattern out.
///
/// Wires together template selection, markup interpretation, seeded
/// pattern generation, simulated latency, and the generation log.

use std::path::Path;

use chrono::Utc;

use crate::core::bank::{BankError, TemplateBank};
use crate::core::latency::Latency;
use crate::core::markup;
use crate::core::pattern;
use crate::schema::response::{GeneratedResponse, GenerationLog};
use crate::schema::shape::Shape;

/// One caller-owned synthesis session. Built via
/// [`SynthesisSession::builder`]. Holds the template bank, the latency
/// configuration, and the session's generation log; nothing is shared
/// through globals, so independent sessions never observe each other.
pub struct SynthesisSession {
    bank: TemplateBank,
    latency: Latency,
    log: GenerationLog,
}

/// Builder for constructing a [`SynthesisSession`].
pub struct SessionBuilder {
    bank_path: Option<String>,
    latency: Latency,
    /// Directly provided bank (for testing without files).
    bank: Option<TemplateBank>,
    /// Previously extracted log to resume from.
    log: Option<GenerationLog>,
}

impl SynthesisSession {
    pub fn builder() -> SessionBuilder {
        SessionBuilder {
            bank_path: None,
            latency: Latency::default(),
            bank: None,
            log: None,
        }
    }

    /// Synthesize a text response for a prompt.
    ///
    /// The prompt is trimmed first; a prompt that is empty after trimming
    /// is declined silently with `None` and leaves the session untouched.
    /// Otherwise the call waits out the configured text latency, resolves
    /// the prompt against the bank (fallback body when nothing matches),
    /// interprets the body's markup, and appends the timestamped response
    /// to the log. The returned reference points at the logged entry.
    pub async fn synthesize_text(&mut self, prompt: &str) -> Option<&GeneratedResponse> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return None;
        }

        self.latency.pause_text().await;

        let body = self.bank.body_for(prompt);
        let blocks = markup::parse(body);
        tracing::debug!(prompt, block_count = blocks.len(), "text synthesis complete");

        self.log.append(GeneratedResponse {
            prompt: prompt.to_string(),
            blocks,
            timestamp: Utc::now(),
        });
        self.log.latest()
    }

    /// Synthesize the shape pattern for a prompt on a canvas of the given
    /// size.
    ///
    /// Declines empty-after-trim prompts with `None`, like
    /// [`synthesize_text`](Self::synthesize_text). Completed calls are not
    /// logged; the pattern is yours to render or discard. Equal-length
    /// prompts derive equal seeds and therefore identical patterns.
    pub async fn synthesize_visual(
        &self,
        prompt: &str,
        width: f64,
        height: f64,
    ) -> Option<Vec<Shape>> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return None;
        }

        self.latency.pause_visual().await;

        let seed = pattern::derive_seed(prompt);
        let shapes = pattern::generate(seed, width, height);
        tracing::debug!(prompt, seed, "visual synthesis complete");
        Some(shapes)
    }

    /// Every completed text synthesis this session, oldest first.
    pub fn history(&self) -> &[GeneratedResponse] {
        self.log.entries()
    }

    pub fn log(&self) -> &GenerationLog {
        &self.log
    }

    /// Consume the session, handing the log back to the caller.
    pub fn into_log(self) -> GenerationLog {
        self.log
    }

    pub fn bank(&self) -> &TemplateBank {
        &self.bank
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }
}

impl SessionBuilder {
    /// Load the template bank from a RON file at build time.
    pub fn bank_file(mut self, path: &str) -> Self {
        self.bank_path = Some(path.to_string());
        self
    }

    /// Provide a bank directly (for testing without files). Takes
    /// precedence over [`bank_file`](Self::bank_file).
    pub fn with_bank(mut self, bank: TemplateBank) -> Self {
        self.bank = Some(bank);
        self
    }

    pub fn latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// Resume from a log extracted out of an earlier session.
    pub fn with_log(mut self, log: GenerationLog) -> Self {
        self.log = Some(log);
        self
    }

    /// Build the session. Without an explicit bank the built-in demo
    /// catalogue is used.
    pub fn build(self) -> Result<SynthesisSession, BankError> {
        let bank = match (self.bank, self.bank_path) {
            (Some(bank), _) => bank,
            (None, Some(path)) => TemplateBank::load_from_ron(Path::new(&path))?,
            (None, None) => crate::demo_banks::classic_demo()?,
        };

        Ok(SynthesisSession {
            bank,
            latency: self.latency,
            log: self.log.unwrap_or_default(),
        })
    }
}
