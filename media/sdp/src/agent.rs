use std::fmt;
use std::str::FromStr;

/// Browser family an answer is shaped for
///
/// Chrome gets a plan-b answer (msid announced per `a=ssrc` line), Firefox a unified-plan
/// answer (`a=msid` per media section).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Agent {
    Chrome,
    Firefox,
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported agent {0:?}")]
pub struct UnsupportedAgent(pub String);

impl Agent {
    /// Detect the browser family from a HTTP `User-Agent` value
    pub fn from_user_agent(user_agent: &str) -> Result<Self, UnsupportedAgent> {
        let lowercase = user_agent.to_ascii_lowercase();

        if lowercase.contains("firefox/") {
            Ok(Agent::Firefox)
        } else if lowercase.contains("chrome/") {
            Ok(Agent::Chrome)
        } else {
            Err(UnsupportedAgent(user_agent.into()))
        }
    }

    pub fn is_unified_plan(self) -> bool {
        matches!(self, Agent::Firefox)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Agent::Chrome => "chrome",
            Agent::Firefox => "firefox",
        }
    }
}

impl FromStr for Agent {
    type Err = UnsupportedAgent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chrome" => Ok(Agent::Chrome),
            "firefox" => Ok(Agent::Firefox),
            _ => Err(UnsupportedAgent(s.into())),
        }
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
