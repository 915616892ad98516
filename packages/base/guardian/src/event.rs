use cosmwasm_std::{attr, Response};

pub trait Event {
    /// Append attributes to response
    fn add_attributes(&self, response: &mut Response);
}

/// Tracks score writes
pub struct SetGuardianScoreEvent<'a> {
    pub sender: &'a str,
    pub project_id: &'a str,
    pub score: u8,
    pub grade: u8,
    pub index: u32,
    pub timestamp: u64,
}

impl<'a> Event for SetGuardianScoreEvent<'a> {
    fn add_attributes(&self, rsp: &mut Response) {
        rsp.attributes.push(attr("action", "set_guardian_score"));
        rsp.attributes.push(attr("sender", self.sender));
        rsp.attributes.push(attr("success", "true"));
        rsp.attributes.push(attr("project_id", self.project_id));
        rsp.attributes.push(attr("score", self.score.to_string()));
        rsp.attributes.push(attr("grade", self.grade.to_string()));
        rsp.attributes.push(attr("index", self.index.to_string()));
        rsp.attributes
            .push(attr("timestamp", self.timestamp.to_string()));
    }
}

pub struct AddAuthorizedScorerEvent<'a> {
    pub sender: &'a str,
    pub scorer: &'a str,
}

impl<'a> Event for AddAuthorizedScorerEvent<'a> {
    fn add_attributes(&self, rsp: &mut Response) {
        rsp.attributes.push(attr("action", "add_authorized_scorer"));
        rsp.attributes.push(attr("sender", self.sender));
        rsp.attributes.push(attr("success", "true"));
        rsp.attributes.push(attr("scorer", self.scorer));
    }
}

pub struct SetPauseStateEvent<'a> {
    pub sender: &'a str,
    pub paused: bool,
}

impl<'a> Event for SetPauseStateEvent<'a> {
    fn add_attributes(&self, rsp: &mut Response) {
        rsp.attributes.push(attr("action", "set_pause_state"));
        rsp.attributes.push(attr("sender", self.sender));
        rsp.attributes.push(attr("success", "true"));
        rsp.attributes.push(attr("paused", self.paused.to_string()));
    }
}

/// Emitted instead of the action event when a call is turned down. State is
/// left untouched in that case.
pub struct RejectedEvent<'a> {
    pub action: &'a str,
    pub sender: &'a str,
    pub reason: &'a str,
}

impl<'a> Event for RejectedEvent<'a> {
    fn add_attributes(&self, rsp: &mut Response) {
        rsp.attributes.push(attr("action", self.action));
        rsp.attributes.push(attr("sender", self.sender));
        rsp.attributes.push(attr("success", "false"));
        rsp.attributes.push(attr("reason", self.reason));
    }
}
