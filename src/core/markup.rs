/// Line markup interpreter: canned body text to typed display blocks.

use crate::schema::block::DisplayBlock;

/// Parse a body into display blocks, one per line.
///
/// Lines are split on `'\n'` and classified independently:
/// - a line starting with `#` becomes a `Heading`, with every leading `#`
///   and the surrounding whitespace stripped;
/// - otherwise a line starting with `**` becomes an `Emphasis`, with all
///   `**` markers removed;
/// - every other line, including blank ones, becomes a `Paragraph` kept
///   verbatim.
///
/// Classification never looks at neighboring lines, so the result is a
/// pure function of the body text.
pub fn parse(body: &str) -> Vec<DisplayBlock> {
    body.split('\n').map(classify_line).collect()
}

fn classify_line(line: &str) -> DisplayBlock {
    if line.starts_with('#') {
        let text = line.trim_start_matches('#').trim();
        DisplayBlock::Heading(text.to_string())
    } else if line.starts_with("**") {
        DisplayBlock::Emphasis(line.replace("**", ""))
    } else {
        DisplayBlock::Paragraph(line.to_string())
    }
}
