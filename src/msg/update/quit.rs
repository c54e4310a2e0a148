use tracing::info;

use crate::{
    model::{Model, RunningState},
    msg::Message,
};

pub fn update(model: &mut Model) -> Option<Message> {
    info!("quit requested");
    model.running_state = RunningState::Done;
    None
}
