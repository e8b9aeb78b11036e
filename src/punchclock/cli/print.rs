use colored::Colorize;
use punchclock::api::{CmdMessage, MessageLevel};
use punchclock::config::PunchClockConfig;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

pub(super) fn print_config(config: &PunchClockConfig) {
    for (key, value) in config.entries() {
        println!("{} = {}", key, value);
    }
}
