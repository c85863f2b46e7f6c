//! Podcast script generation: form validation, composition from tone and
//! topic tables, and rendering to HTML or Markdown.

pub mod core;

pub use crate::core::composer::{compose, ComposeError, ScriptComposer};
pub use crate::core::episode::EpisodeInput;
pub use crate::core::form::{EpisodeForm, FieldError, FormErrors};
pub use crate::core::render::{render_markdown, render_markup};
pub use crate::core::tables::ContentTables;
