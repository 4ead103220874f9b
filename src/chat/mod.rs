pub mod model;
pub mod session;

use anyhow::Result;

use crate::settings::{ChatBackend, ChatSettings};

pub use model::{ChatModel, HttpTextGenerator, ScriptedCompanion};
pub use session::{extract_reply, ChatMessage, ChatSession, ChatTurn, Speaker};

pub fn build_model(settings: &ChatSettings) -> Result<Box<dyn ChatModel>> {
    match settings.backend {
        ChatBackend::Scripted => Ok(Box::new(ScriptedCompanion::new())),
        ChatBackend::Http => Ok(Box::new(HttpTextGenerator::new(settings)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_build_scripted_model() {
        let model = build_model(&ChatSettings::default()).unwrap();
        assert_eq!(model.name(), "scripted companion");
    }

    #[test]
    fn test_http_settings_build_http_model() {
        let settings = ChatSettings {
            backend: ChatBackend::Http,
            endpoint: Some("http://127.0.0.1:9/generate".into()),
            ..ChatSettings::default()
        };
        let model = build_model(&settings).unwrap();
        assert_eq!(model.name(), "http://127.0.0.1:9/generate");
    }
}
