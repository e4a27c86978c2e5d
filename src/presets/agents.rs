use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{FaceError, FaceResult};
use crate::foundation::math::to_base36;

/// Symbolic voice names understood by the speech host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Voice {
    Aoede,
    Charon,
    Fenrir,
    Kore,
    Leda,
    Orus,
    Puck,
    Zephyr,
}

impl Voice {
    pub const ALL: [Voice; 8] = [
        Voice::Aoede,
        Voice::Charon,
        Voice::Fenrir,
        Voice::Kore,
        Voice::Leda,
        Voice::Orus,
        Voice::Puck,
        Voice::Zephyr,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Voice::Aoede => "Aoede",
            Voice::Charon => "Charon",
            Voice::Fenrir => "Fenrir",
            Voice::Kore => "Kore",
            Voice::Leda => "Leda",
            Voice::Orus => "Orus",
            Voice::Puck => "Puck",
            Voice::Zephyr => "Zephyr",
        }
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Voice {
    type Err = FaceError;

    fn from_str(s: &str) -> FaceResult<Self> {
        Voice::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| FaceError::validation(format!("unknown voice \"{s}\"")))
    }
}

/// Body colors a freshly created agent is drawn from.
pub const AGENT_COLORS: [&str; 8] = [
    "#4285f4", "#ea4335", "#fbbc04", "#34a853", "#fa7b17", "#f538a0", "#a142f4", "#24c1e0",
];

/// Voices a freshly created agent is drawn from, with equal probability.
pub const NEW_AGENT_VOICES: [Voice; 2] = [Voice::Charon, Voice::Aoede];

const ID_MAX_LEN: usize = 13;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub personality: String,
    pub body_color: String,
    pub voice: Voice,
}

/// Caller-supplied fields for [`create_new_agent`]; every `Some` wins over the random default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgentOverrides {
    pub id: Option<String>,
    pub name: Option<String>,
    pub personality: Option<String>,
    pub body_color: Option<String>,
    pub voice: Option<Voice>,
}

/// Builds a new agent with a random base-36 id, a random palette color and a coin-flip voice.
///
/// No validation is applied to overrides; a malformed `body_color` simply renders with the
/// default face color.
pub fn create_new_agent(overrides: AgentOverrides, rng: &mut fastrand::Rng) -> Agent {
    let id = random_id(rng);
    let body_color = AGENT_COLORS[rng.usize(..AGENT_COLORS.len())].to_owned();
    let voice = if rng.bool() {
        NEW_AGENT_VOICES[0]
    } else {
        NEW_AGENT_VOICES[1]
    };

    Agent {
        id: overrides.id.unwrap_or(id),
        name: overrides.name.unwrap_or_default(),
        personality: overrides.personality.unwrap_or_default(),
        body_color: overrides.body_color.unwrap_or(body_color),
        voice: overrides.voice.unwrap_or(voice),
    }
}

fn random_id(rng: &mut fastrand::Rng) -> String {
    // Never zero, so the token is never the single digit "0".
    let mut id = to_base36(rng.u64(1..));
    id.truncate(ID_MAX_LEN);
    id
}

const PRESS_BOT_PERSONALITY: &str = "\
You are Mortanas AI Press Bot, a specialist in sales and marketing, acting as an AI assistant for journalists. You were developed by Eren Altun, the founder of Mortanas.
Your core capabilities are:
- Fact Checking (Doğruluk Kontrolü)
- Summarization (Özetleyici)
- Headline Generation (Manşet Oluşturucu)
- Image Generation (Görsel Oluşturucu)
- Column Writing (Köşe Yazısı Yazarı)
- News Writing (Haber Yazarı)
- Archive Research (Arşiv Araştırması)
- Transcription (Deşifre Aracı)
As an advanced AI model for journalists, you are to be polite but also occasionally critical, using a persuasive tone to convince users why they should use this system. Your name is Mortanas AI Press Bot.";

pub fn mortanas_press_bot() -> Agent {
    Agent {
        id: "mortanas-ai-press-bot".to_owned(),
        name: "Mortanas AI Press Bot".to_owned(),
        personality: PRESS_BOT_PERSONALITY.to_owned(),
        body_color: "#4285f4".to_owned(),
        voice: Voice::Aoede,
    }
}

pub fn builtin_agents() -> Vec<Agent> {
    vec![mortanas_press_bot()]
}

pub fn find_preset(id: &str) -> Option<Agent> {
    builtin_agents().into_iter().find(|a| a.id == id)
}

#[cfg(test)]
#[path = "../../tests/unit/presets/agents.rs"]
mod tests;
