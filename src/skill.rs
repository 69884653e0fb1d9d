// src/skill.rs
//! Request and reply payloads of the chatbot skill this filter answers.

use serde::{Deserialize, Serialize};

pub const SKILL_VERSION: &str = "2.0";
const DETECTED_PREFIX: &str = "⚠️ 욕설 감지됨";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillRequest {
    #[serde(rename = "userRequest", default)]
    pub user_request: UserRequest,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserRequest {
    #[serde(default)]
    pub utterance: String,
}

impl SkillRequest {
    pub fn utterance(&self) -> &str {
        &self.user_request.utterance
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillResponse {
    pub version: String,
    pub template: Template,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub outputs: Vec<Output>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    #[serde(rename = "simpleText")]
    pub simple_text: SimpleText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleText {
    pub text: String,
}

impl SkillResponse {
    /// A warning that echoes the utterance on a hit, an empty text otherwise.
    pub fn for_detection(utterance: &str, detected: bool) -> Self {
        let text = if detected {
            format!("{DETECTED_PREFIX}\n\n{utterance}")
        } else {
            String::new()
        };
        Self {
            version: SKILL_VERSION.to_string(),
            template: Template {
                outputs: vec![Output {
                    simple_text: SimpleText { text },
                }],
            },
        }
    }

    pub fn text(&self) -> &str {
        self.template
            .outputs
            .first()
            .map_or("", |output| output.simple_text.text.as_str())
    }
}
