pub mod bank;
pub mod progress;
pub mod run;

/// Difficulty tier. Exactly two exist; the advanced one is locked until the
/// basic one has been passed at 70% or better (see [`progress`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Level {
    Basic,
    Advanced,
}

impl Level {
    /// The other level, used when the player switches after finishing a run.
    pub fn toggled(self) -> Self {
        match self {
            Level::Basic => Level::Advanced,
            Level::Advanced => Level::Basic,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Level::Basic => "Basic Finance",
            Level::Advanced => "Advanced Finance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_option: String,
}

impl Question {
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_option == option
    }
}
