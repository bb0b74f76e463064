// Seekmark services
// Services provide supporting functionality: settings persistence and video context derivation.

pub mod settings_engine;
pub mod video_context;
