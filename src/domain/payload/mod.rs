//! GraphQL request payload rendering

mod encoder;
mod template;

use thiserror::Error;

pub use encoder::render_payload;
pub use template::QueryTemplate;

/// Error when a payload cannot be rendered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Template {template} expects {expected} argument(s), got {given}")]
    ArgumentCount {
        template: &'static str,
        expected: usize,
        given: usize,
    },
}
