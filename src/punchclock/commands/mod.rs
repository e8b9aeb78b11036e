use crate::config::PunchClockConfig;

pub mod clock_in;
pub mod config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// The line appended to the log, terminator included
    pub appended_line: Option<String>,
    /// Number of lines in the log after the append
    pub line_count: Option<usize>,
    pub config: Option<PunchClockConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_appended_line(mut self, line: String, line_count: usize) -> Self {
        self.appended_line = Some(line);
        self.line_count = Some(line_count);
        self
    }

    pub fn with_config(mut self, config: PunchClockConfig) -> Self {
        self.config = Some(config);
        self
    }
}
