//! Mirage Engine: deterministic simulation of generative text and visuals.
//!
//! Produces convincing "AI generated" output entirely offline, without any
//! model inference: canned template bodies selected by keyword triggers and
//! rendered into typed display blocks, plus abstract shape patterns derived
//! arithmetically from the prompt. The same prompt always yields the same
//! output, which makes the engine suitable for demos, fixtures, and tests
//! of UI layers that expect a generative backend.

pub mod core;
pub mod demo_banks;
pub mod schema;
