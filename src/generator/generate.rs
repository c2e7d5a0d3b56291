//! ID generation logic

use std::sync::PoisonError;

use tracing::{trace, warn};

use super::state::{State, Step};
use super::wait::spin_until_after;
use super::Snowflake;
use crate::clock::Clock;
use crate::error::SnowflakeError;

impl<C: Clock> Snowflake<C> {
    /// Generate a new Snowflake ID
    ///
    /// The whole read-modify-write runs under the state lock, including the
    /// spin when a millisecond's 4096 sequence values are used up. Fails with
    /// [`SnowflakeError::ClockRegression`] if the clock reads earlier than the
    /// last emitted ID; the state is left untouched in that case.
    pub fn generate(&self) -> Result<u64, SnowflakeError> {
        // State is only written once the ID is assembled; a poisoned guard is still consistent.
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        let (timestamp, sequence) = match state.step(self.now_ms()) {
            Ok(Step::Ready {
                timestamp,
                sequence,
            }) => (timestamp, sequence),
            Ok(Step::Exhausted { last }) => {
                trace!(node_id = self.node_id, last, "sequence exhausted, spinning to next millisecond");
                (spin_until_after(last, || self.now_ms()), 0)
            }
            Err(err) => {
                warn!(node_id = self.node_id, error = %err, "refusing to generate id");
                return Err(err);
            }
        };

        let id = self.assemble_id(timestamp, sequence);
        *state = State::emitted(timestamp, sequence);
        Ok(id)
    }

    #[cfg(test)]
    pub(crate) fn state_snapshot(&self) -> State {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
