//! Effects - side effects declared by the reducer

use crate::action::Action;
use crate::api::{FetchError, Outcome};

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch current conditions; `seq` tags the request so stale results can be dropped
    FetchWeather { seq: u64, location: String },
}

/// Turn a finished fetch into the action that reports it
pub fn fetch_result_action(seq: u64, result: Result<Outcome, FetchError>) -> Action {
    match result {
        Ok(Outcome::Resolved(snapshot)) => Action::WeatherDidLoad { seq, snapshot },
        Ok(Outcome::Rejected(message)) => Action::WeatherDidReject { seq, message },
        Err(error) => Action::WeatherDidFail {
            seq,
            error: error.to_string(),
        },
    }
}
