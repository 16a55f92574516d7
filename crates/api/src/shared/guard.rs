use crate::error::NudgeError;
use nudge_domain::ID;

pub struct Guard {}

impl Guard {
    pub fn against_malformed_id(val: &str) -> Result<ID, NudgeError> {
        Ok(val.parse::<ID>()?)
    }
}
