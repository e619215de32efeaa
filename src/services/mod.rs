pub mod completion;
pub mod gemini;
pub mod presenter;
pub mod relay;
pub mod relay_client;
pub mod reveal;
pub mod transcript;
