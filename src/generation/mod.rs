pub mod diagnostic;
pub mod provider;
pub mod providers;

pub use diagnostic::{Diagnostic, build_prompt, parse_diagnostic};
pub use provider::{GenerationProvider, ProviderError};
pub use providers::GeminiProvider;
