/// Procedural pattern synthesis: seed derivation and shape placement.

use crate::schema::shape::Shape;

/// Multiplier applied to the prompt length when deriving a seed.
pub const SEED_FACTOR: u64 = 12345;
/// Number of shapes in every generated pattern.
pub const SHAPE_COUNT: usize = 50;
/// Fill opacity shared by all shapes.
pub const SHAPE_ALPHA: f64 = 0.6;
/// How many prompt characters a pattern caption quotes.
pub const CAPTION_PROMPT_CHARS: usize = 30;

const CAPTION_PREFIX: &str = "Generative Visual: ";

/// Derive the generation seed from a prompt.
///
/// Only the character count matters: two prompts of equal length always
/// produce the same seed, and therefore the same pattern.
pub fn derive_seed(prompt: &str) -> u64 {
    prompt.chars().count() as u64 * SEED_FACTOR
}

/// Generate the shape sequence for a seed on a canvas of the given size.
///
/// Each shape index feeds the seed through fixed trigonometric formulas:
///
/// - `x = |seed * sin(i) * 100 mod width|`
/// - `y = |seed * cos(i) * 100 mod height|`
/// - `radius = |seed * tan(i * 0.1) mod 50| + 10`
/// - `hue = (seed * i) mod 360`
///
/// `mod` on the float channels is Rust's `%` remainder, which carries the
/// dividend's sign; the absolute value then lands every coordinate inside
/// the canvas. Hue is computed in integer arithmetic and is exact. The
/// result is a pure function of `(seed, width, height)`.
pub fn generate(seed: u64, width: f64, height: f64) -> Vec<Shape> {
    assert!(
        width > 0.0 && width.is_finite(),
        "canvas width must be positive and finite"
    );
    assert!(
        height > 0.0 && height.is_finite(),
        "canvas height must be positive and finite"
    );

    let seed_f = seed as f64;
    let mut shapes = Vec::with_capacity(SHAPE_COUNT);

    for i in 0..SHAPE_COUNT {
        let angle = i as f64;
        let x = (seed_f * angle.sin() * 100.0 % width).abs();
        let y = (seed_f * angle.cos() * 100.0 % height).abs();
        let radius = (seed_f * (angle * 0.1).tan() % 50.0).abs() + 10.0;
        let hue = (seed.wrapping_mul(i as u64) % 360) as u16;

        shapes.push(Shape {
            x,
            y,
            radius,
            hue,
            alpha: SHAPE_ALPHA,
        });
    }

    shapes
}

/// Caption for a generated pattern: a fixed prefix plus the first
/// [`CAPTION_PROMPT_CHARS`] characters of the prompt.
pub fn caption(prompt: &str) -> String {
    let quoted: String = prompt.chars().take(CAPTION_PROMPT_CHARS).collect();
    format!("{}{}", CAPTION_PREFIX, quoted)
}
