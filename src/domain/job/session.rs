//! Job session state machine

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Run states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JobState {
    #[default]
    Idle,
    Running,
}

impl JobState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
        }
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while in {current_state} state")]
pub struct InvalidStateTransition {
    pub current_state: JobState,
    pub action: String,
}

/// One execution attempt of the external OCR command: the input the user
/// picked and the destination the result is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSpec {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Job session entity.
/// Owns the run flag and the active job record; the two are set and
/// cleared together, so at most one job is active at any instant.
///
/// State machine:
///   IDLE -> RUNNING (begin)
///   RUNNING -> IDLE (finish)
#[derive(Debug, Default)]
pub struct JobSession {
    state: JobState,
    active: Option<JobSpec>,
}

impl JobSession {
    /// Create a new session in idle state
    pub fn new() -> Self {
        Self {
            state: JobState::Idle,
            active: None,
        }
    }

    /// Get the current state
    pub fn state(&self) -> JobState {
        self.state
    }

    /// Check if currently idle
    pub fn is_idle(&self) -> bool {
        self.state == JobState::Idle
    }

    /// Check if a job is currently executing
    pub fn is_running(&self) -> bool {
        self.state == JobState::Running
    }

    /// The active job, if any
    pub fn active(&self) -> Option<&JobSpec> {
        self.active.as_ref()
    }

    /// Transition from IDLE to RUNNING, taking ownership of the job
    pub fn begin(&mut self, spec: JobSpec) -> Result<(), InvalidStateTransition> {
        if self.state != JobState::Idle {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "start a job".to_string(),
            });
        }
        self.state = JobState::Running;
        self.active = Some(spec);
        Ok(())
    }

    /// Transition from RUNNING to IDLE, handing the finished job back
    pub fn finish(&mut self) -> Result<JobSpec, InvalidStateTransition> {
        if self.state != JobState::Running {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "finish a job".to_string(),
            });
        }
        let spec = self.active.take().ok_or_else(|| InvalidStateTransition {
            current_state: self.state,
            action: "finish a job".to_string(),
        })?;
        self.state = JobState::Idle;
        Ok(spec)
    }
}
