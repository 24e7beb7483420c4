//! Annotation parser
//!
//! Turns a single comment line into [`Metadata`]. The grammar is small:
//!
//! ```text
//! route      = ">" METHOD "/" segment { "/" segment } [ "?" ":" name { ":" name } ]
//! segment    = name | ":" name
//! variables  = ">" ":" name { ":" name }
//! METHOD     = GET | POST | PUT | DELETE      (any case)
//! ```
//!
//! Lines that do not start with `>` (after leading `/` and whitespace) are not
//! annotations and yield `Ok(None)`. Everything else either parses completely or
//! fails on the first token that breaks the grammar; there is no recovery.

mod driver;
pub mod states;

use crate::annotation::ast::{Metadata, ParseError};
use crate::annotation::lexer::{Token, Tokenizer};
use driver::Driver;
use tracing::trace;

/// Strip the comment leader: surrounding whitespace and any leading `/`
fn strip_comment_leader(line: &str) -> &str {
    line.trim().trim_start_matches('/').trim_start()
}

/// Parse one annotation line.
///
/// Returns `Ok(None)` when the line is an ordinary comment.
pub fn parse(line: &str) -> Result<Option<Metadata>, ParseError> {
    let source = strip_comment_leader(line);
    let mut tokens = Tokenizer::new(source);

    match tokens.next() {
        Some(Ok(Token::Declarator)) => {}
        _ => {
            trace!(line = source, "not an annotation");
            return Ok(None);
        }
    }

    let mut driver = Driver::new();
    driver.advance(Token::Declarator)?;

    for result in tokens {
        let token = result.map_err(|err| ParseError::unexpected(format!("'{}'", err.slice)))?;
        driver.advance(token)?;
        if driver.state().is_end() {
            break;
        }
    }

    driver.finish().map(Some)
}
