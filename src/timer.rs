//! Stopwatch and countdown loops driving a [`Sink`]
use std::num::IntErrorKind;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info, warn};

use crate::clock::Clock;
use crate::config::{AlertPolicy, Color};
use crate::error::{Error, Result};
use crate::format::format_delta;
use crate::sink::Sink;

pub const TIME_UP: &str = "Time Up!";
pub const INVALID_INPUT: &str = "Invalid input";

/// Ticks the "Invalid input" message stays on screen
const INVALID_DWELL_TICKS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Stopwatch,
    Countdown(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Countdown reached zero and the alert played
    Expired,
    /// Running flag was cleared before the timer finished
    Interrupted,
    /// Argument was not a number; no tick ran
    Rejected,
}

/// Parse the countdown argument as whole seconds.
///
/// Integers outside the `i64` range saturate instead of being rejected.
pub fn parse_seconds(input: &str) -> Result<i64> {
    match input.trim().parse::<i64>() {
        Ok(seconds) => Ok(seconds),
        Err(source) => match source.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(Error::InvalidDuration {
                input: input.to_string(),
                source,
            }),
        },
    }
}

/// Pick the mode for an optional CLI argument.
pub fn mode_for(arg: Option<&str>) -> Result<Mode> {
    match arg {
        None => Ok(Mode::Stopwatch),
        Some(input) => parse_seconds(input).map(Mode::Countdown),
    }
}

pub fn countdown_color(delta: i64, policy: &AlertPolicy) -> Color {
    if delta < policy.threshold_secs {
        Color::Alert
    } else {
        Color::Normal
    }
}

pub struct Timer<C: Clock, S: Sink> {
    clock: C,
    sink: S,
    policy: AlertPolicy,
    running: Arc<AtomicBool>,
}

impl<C: Clock, S: Sink> Timer<C, S> {
    pub fn new(clock: C, sink: S, policy: AlertPolicy, running: Arc<AtomicBool>) -> Self {
        Self {
            clock,
            sink,
            policy,
            running,
        }
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Run whatever the CLI argument asks for.
    pub fn run(&mut self, arg: Option<&str>) -> Outcome {
        match mode_for(arg) {
            Ok(Mode::Stopwatch) => self.stopwatch(),
            Ok(Mode::Countdown(seconds)) => self.countdown(seconds),
            Err(err) => {
                warn!("{err}");
                self.reject()
            }
        }
    }

    /// Count up from now until interrupted.
    pub fn stopwatch(&mut self) -> Outcome {
        let start = self.clock.now();
        info!("Stopwatch started");

        while self.is_running() {
            let delta = self.clock.now() - start;
            debug!("tick +{delta}s");
            self.sink.set_label(&format_delta(delta), Color::Normal);
            self.clock.sleep(self.policy.tick);
        }

        info!("Stopwatch interrupted");
        self.sink.clear();
        Outcome::Interrupted
    }

    /// Count down `seconds` and sound the alert at zero.
    pub fn countdown(&mut self, seconds: i64) -> Outcome {
        let end = self.clock.now().saturating_add(seconds);
        info!("Countdown of {seconds}s started");

        loop {
            if !self.is_running() {
                info!("Countdown interrupted");
                self.sink.clear();
                return Outcome::Interrupted;
            }

            let delta = end - self.clock.now();
            if delta <= 0 {
                break;
            }
            debug!("tick -{delta}s");
            let color = countdown_color(delta, &self.policy);
            self.sink.set_label(&format_delta(delta), color);
            self.clock.sleep(self.policy.tick);
        }

        info!("Countdown expired");
        self.sink.set_label(TIME_UP, Color::Normal);
        for _ in 0..self.policy.repeats {
            self.sink.play_alert();
        }
        self.sink.clear();
        Outcome::Expired
    }

    /// Flash the invalid-input message, then clear it.
    pub fn reject(&mut self) -> Outcome {
        self.sink.set_label(INVALID_INPUT, Color::Alert);
        self.clock.sleep(self.policy.tick * INVALID_DWELL_TICKS);
        self.sink.clear();
        Outcome::Rejected
    }
}
