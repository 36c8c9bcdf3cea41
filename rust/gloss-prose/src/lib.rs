//! # gloss-prose
//!
//! Text collaborators for the gloss rewriting pipeline: a markdown-to-prose
//! renderer, a word tokenizer, a rule-based lexical tagger, and sentence
//! boundary detection.
//!
//! Everything here is a pure function over `&str`. The renderer does not try
//! to be a complete markdown implementation — it extracts exactly what the
//! pipeline consumes: the ordered stream of text and inline-code spans, plus
//! a normalized rendered string suitable for display and sentence splitting.
//!
//! ```
//! use gloss_prose::markdown::{render, Span};
//!
//! let rendered = render("Opens a door. See `key`.");
//! assert_eq!(
//!     rendered.spans,
//!     vec![
//!         Span::Text("Opens a door. See ".into()),
//!         Span::Code("key".into()),
//!         Span::Text(".".into()),
//!     ]
//! );
//! ```

pub mod markdown;
pub mod sentence;
pub mod tag;
pub mod token;

pub use markdown::{Rendered, Span, render};
pub use sentence::{collapse_whitespace, first_sentence};
pub use tag::{Tag, tag_word};
pub use token::words;
