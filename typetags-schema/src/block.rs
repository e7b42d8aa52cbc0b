//! Block extraction: locating `model`/`enum` declarations and their bodies.

/// Kind of a top-level declaration block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Model,
    Enum,
}

/// One extracted declaration block, body lines still unparsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub name: String,
    pub body: Vec<String>,
}

/// Scan stripped schema text for `model`/`enum` blocks.
///
/// The scan is lenient by construction, with every recovery an explicit
/// skip-and-continue branch: a header with fewer than two tokens starts no
/// block, a missing `{` consumes lines until one appears, and a body cut off
/// by end of input is kept as collected. Blocks do not nest; only a line
/// that trims to exactly `}` terminates a body.
pub fn extract_blocks(text: &str) -> Vec<Block> {
    let lines: Vec<&str> = text.lines().collect();
    let mut blocks = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let header = lines[i].trim();
        let mut tokens = header.split_whitespace();
        let kind = match tokens.next() {
            Some("model") => BlockKind::Model,
            Some("enum") => BlockKind::Enum,
            _ => {
                i += 1;
                continue;
            }
        };
        // Short header: not a block.
        let Some(name) = tokens.next() else {
            i += 1;
            continue;
        };

        // Find the opening brace; the body starts on the line after it.
        if !header.contains('{') {
            i += 1;
            while i < lines.len() && !lines[i].contains('{') {
                i += 1;
            }
        }
        i += 1;

        let mut body = Vec::new();
        while i < lines.len() {
            if lines[i].trim() == "}" {
                break;
            }
            body.push(lines[i].to_string());
            i += 1;
        }
        blocks.push(Block {
            kind,
            name: name.to_string(),
            body,
        });

        // Step past the closing brace.
        i += 1;
    }

    blocks
}
