//! Generation state machine
//!
//! `State` is a plain value; the generator computes the next one from a clock
//! reading and stores it only after the ID has been assembled.

use crate::config::{SnowflakeConfig, SEQUENCE_BITS};
use crate::error::SnowflakeError;

const SEQUENCE_MASK: u64 = SnowflakeConfig::calculate_mask(SEQUENCE_BITS);

/// Last emitted timestamp offset (`None` before the first ID) and its sequence
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct State {
    last_timestamp: Option<u64>,
    sequence: u16,
}

/// Outcome of feeding a clock reading to [`State::step`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// Emit an ID with these fields
    Ready { timestamp: u64, sequence: u16 },
    /// The sequence for `last` wrapped; wait for the clock to pass it
    Exhausted { last: u64 },
}

impl State {
    /// State after emitting an ID with `timestamp` and `sequence`
    #[inline(always)]
    pub(crate) const fn emitted(timestamp: u64, sequence: u16) -> Self {
        Self {
            last_timestamp: Some(timestamp),
            sequence,
        }
    }

    #[inline(always)]
    pub(crate) const fn last_timestamp(self) -> Option<u64> {
        self.last_timestamp
    }

    #[inline(always)]
    pub(crate) const fn sequence(self) -> u16 {
        self.sequence
    }

    /// Decide what the next ID looks like for a clock offset of `now`
    pub(crate) fn step(self, now: i64) -> Result<Step, SnowflakeError> {
        let regression = |last: u64| SnowflakeError::ClockRegression {
            last_timestamp: last,
            current_timestamp: now,
        };

        let Ok(current) = u64::try_from(now) else {
            return Err(regression(self.last_timestamp.unwrap_or(0)));
        };

        match self.last_timestamp {
            Some(last) if current < last => Err(regression(last)),
            Some(last) if current == last => {
                let sequence = ((u64::from(self.sequence) + 1) & SEQUENCE_MASK) as u16;
                if sequence == 0 {
                    Ok(Step::Exhausted { last })
                } else {
                    Ok(Step::Ready {
                        timestamp: current,
                        sequence,
                    })
                }
            }
            _ => Ok(Step::Ready {
                timestamp: current,
                sequence: 0,
            }),
        }
    }
}
