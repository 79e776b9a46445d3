//! Provides Prober implementation backed by the system ping command

use derive_builder::Builder;
use log::*;
use std::{
    io,
    process::{Command, Stdio},
    time::Duration,
};

use crate::targets::subnet::HostAddress;

use super::{
    DEFAULT_PING_COMMAND, DEFAULT_PROBE_ATTEMPTS, DEFAULT_PROBE_TIMEOUT,
    Prober,
};

/// Data structure representing a ping based prober
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct PingProber {
    /// Executable invoked for every attempt
    #[builder(default = "DEFAULT_PING_COMMAND.to_string()")]
    command: String,
    /// Time to wait for a reply on each attempt
    #[builder(default = "DEFAULT_PROBE_TIMEOUT")]
    timeout: Duration,
    /// Number of attempts before the host is considered down
    #[builder(default = "DEFAULT_PROBE_ATTEMPTS")]
    attempts: u8,
}

impl PingProberBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.attempts == Some(0) {
            return Err("attempts must be greater than zero".into());
        }

        if self.command.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err("command must not be empty".into());
        }

        Ok(())
    }
}

impl Default for PingProber {
    fn default() -> Self {
        Self {
            command: DEFAULT_PING_COMMAND.to_string(),
            timeout: DEFAULT_PROBE_TIMEOUT,
            attempts: DEFAULT_PROBE_ATTEMPTS,
        }
    }
}

impl PingProber {
    /// Returns builder for PingProber
    pub fn builder() -> PingProberBuilder {
        PingProberBuilder::default()
    }

    /// Arguments passed to the command to send a single echo request
    #[cfg(windows)]
    pub fn args(&self, host: &HostAddress) -> Vec<String> {
        vec![
            "-n".into(),
            "1".into(),
            "-w".into(),
            self.timeout.as_millis().max(1).to_string(),
            host.ip.to_string(),
        ]
    }

    /// Arguments passed to the command to send a single echo request
    #[cfg(target_os = "macos")]
    pub fn args(&self, host: &HostAddress) -> Vec<String> {
        // macOS takes the wait time in milliseconds
        vec![
            "-c".into(),
            "1".into(),
            "-W".into(),
            self.timeout.as_millis().max(1).to_string(),
            host.ip.to_string(),
        ]
    }

    /// Arguments passed to the command to send a single echo request
    #[cfg(not(any(windows, target_os = "macos")))]
    pub fn args(&self, host: &HostAddress) -> Vec<String> {
        // iputils only accepts whole seconds here
        let secs = self.timeout.as_secs()
            + u64::from(self.timeout.subsec_nanos() > 0);

        vec![
            "-c".into(),
            "1".into(),
            "-W".into(),
            secs.max(1).to_string(),
            host.ip.to_string(),
        ]
    }

    fn ping_once(&self, host: &HostAddress) -> io::Result<bool> {
        let status = Command::new(&self.command)
            .args(self.args(host))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;

        Ok(status.success())
    }
}

// Implements the Prober trait for PingProber
impl Prober for PingProber {
    fn probe(&self, host: &HostAddress) -> bool {
        for attempt in 1..=self.attempts {
            match self.ping_once(host) {
                Ok(true) => {
                    info!("{} is up", host);
                    return true;
                }
                Ok(false) => {
                    debug!("{} failed ping - attempt {}", host, attempt);
                }
                Err(e) => {
                    // the command will not start on a retry either
                    warn!("failed to run {} for {}: {}", self.command, host, e);
                    break;
                }
            }
        }

        info!("{} is down", host);
        false
    }
}

#[cfg(test)]
#[path = "./ping_tests.rs"]
mod tests;
