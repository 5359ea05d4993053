use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SupervisorError {
    /// Every task slot is already in use.
    TaskLimitReached,
}

impl fmt::Display for SupervisorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupervisorError::TaskLimitReached => f.write_str("task limit reached"),
        }
    }
}

pub type SupervisorResult<T> = Result<T, SupervisorError>;
