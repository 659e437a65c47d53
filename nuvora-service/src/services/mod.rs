pub mod metrics;
pub mod providers;

pub use providers::gemini::GeminiProvider;
pub use providers::groq::GroqProvider;
pub use providers::mock::MockProvider;
pub use providers::{complete, CompletionProvider, ProviderError, ProviderResponse};
