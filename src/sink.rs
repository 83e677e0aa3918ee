use std::process::Command;

use log::{debug, warn};

use crate::config::{Color, Config};

/// Where the timer sends its output
///
/// Both calls are fire-and-forget. Implementations swallow their own
/// failures.
pub trait Sink {
    fn set_label(&mut self, label: &str, color: Color);

    fn play_alert(&mut self);

    fn clear(&mut self) {
        self.set_label("", Color::Normal);
    }
}

/// Sink that drives a SketchyBar item and plays the alert with `afplay`
pub struct SketchyBar {
    config: Config,
}

impl SketchyBar {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn label_command(&self, label: &str, color: Color) -> Command {
        let mut command = Command::new(&self.config.bar_command);
        command
            .arg("--set")
            .arg(&self.config.item)
            .arg(format!("label={}", label))
            .arg(format!("label.color={}", self.config.color_code(color)));
        command
    }

    fn sound_command(&self) -> Command {
        let mut command = Command::new(&self.config.sound_command);
        command.arg(&self.config.sound);
        command
    }
}

impl Sink for SketchyBar {
    fn set_label(&mut self, label: &str, color: Color) {
        debug!("label {:?} ({:?})", label, color);
        run(self.label_command(label, color));
    }

    fn play_alert(&mut self) {
        debug!("playing {}", self.config.sound);
        run(self.sound_command());
    }
}

fn run(mut command: Command) {
    match command.status() {
        Ok(status) if status.success() => {}
        Ok(status) => debug!("{:?} exited with {}", command.get_program(), status),
        Err(err) => warn!("Could not run {:?}: {}", command.get_program(), err),
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Label(String, Color),
        Alert,
    }

    /// Sink that records every call in order
    #[derive(Default)]
    pub struct RecordingSink {
        pub calls: Vec<Call>,
    }

    impl RecordingSink {
        pub fn labels(&self) -> Vec<(String, Color)> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    Call::Label(label, color) => Some((label.clone(), *color)),
                    Call::Alert => None,
                })
                .collect()
        }

        pub fn alerts(&self) -> usize {
            self.calls.iter().filter(|c| **c == Call::Alert).count()
        }
    }

    impl Sink for RecordingSink {
        fn set_label(&mut self, label: &str, color: Color) {
            self.calls.push(Call::Label(label.to_string(), color));
        }

        fn play_alert(&mut self) {
            self.calls.push(Call::Alert);
        }
    }
}
