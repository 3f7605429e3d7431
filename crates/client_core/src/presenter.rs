//! Result/error presentation as a pure function of controller state.

use shared::domain::RequestMode;

use crate::controller::{Outcome, WorldFormController};

pub const WORKING_MESSAGE: &str = "The AI is dreaming up your adventure...";
pub const PLACEHOLDER_MESSAGE: &str = "Your world and its opening scenario will appear here.";
pub const HELPER_TEXT: &str = "At least 3 characters to launch a custom world.";
pub const DEFAULT_BADGE: &str = "MindCraft World";
pub const IMAGE_HINTS_LABEL: &str = "Hints for the background image:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView<'a> {
    Working { mode: RequestMode },
    Error(&'a str),
    World(WorldCard<'a>),
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldCard<'a> {
    pub badge: String,
    pub world_description: &'a str,
    pub scenario_text: &'a str,
    pub hints_for_image: Option<&'a str>,
}

pub fn present(controller: &WorldFormController) -> ResultView<'_> {
    if let Some(mode) = controller.in_flight() {
        return ResultView::Working { mode };
    }
    match controller.outcome() {
        Some(Outcome::Error(message)) => ResultView::Error(message),
        Some(Outcome::World(world)) => ResultView::World(WorldCard {
            badge: match non_blank(world.player_name.as_deref()) {
                Some(name) => format!("Hero: {name}"),
                None => DEFAULT_BADGE.to_string(),
            },
            world_description: &world.world_description,
            scenario_text: &world.scenario_text,
            hints_for_image: non_blank(world.hints_for_image.as_deref()),
        }),
        None => ResultView::Placeholder,
    }
}

/// Error line rendered under the form; hidden while a request is running.
pub fn form_error(controller: &WorldFormController) -> Option<&str> {
    match present(controller) {
        ResultView::Error(message) => Some(message),
        _ => None,
    }
}

pub fn create_button_label(in_flight: Option<RequestMode>) -> &'static str {
    match in_flight {
        Some(RequestMode::Create) => "Generating...",
        _ => "Create from description",
    }
}

pub fn random_button_label(in_flight: Option<RequestMode>) -> &'static str {
    match in_flight {
        Some(RequestMode::Random) => "Inventing...",
        _ => "Random world",
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}
