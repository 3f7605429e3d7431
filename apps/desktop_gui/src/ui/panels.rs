use client_core::{
    presenter::{
        create_button_label, form_error, random_button_label, HELPER_TEXT, IMAGE_HINTS_LABEL,
        PLACEHOLDER_MESSAGE, WORKING_MESSAGE,
    },
    ResultView, WorldFormController,
};
use eframe::egui;
use shared::domain::RequestMode;

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(237, 66, 69);
const BADGE_COLOR: egui::Color32 = egui::Color32::from_rgb(88, 101, 242);

pub(super) fn show_hero(ui: &mut egui::Ui) {
    ui.add_space(8.0);
    ui.label(egui::RichText::new("MindCraft - text prototype").small().weak());
    ui.heading("Generate a world and jump straight into an adventure");
    ui.label(
        "Write a couple of lines about the setting or trust a random world. The AI writes a world \
description, an opening situation and a hint for the background image.",
    );
    ui.add_space(8.0);
}

/// Renders the input form and returns the mode whose button was triggered.
pub(super) fn show_form(
    ui: &mut egui::Ui,
    controller: &mut WorldFormController,
) -> Option<RequestMode> {
    let loading = controller.is_loading();
    let in_flight = controller.in_flight();
    let can_create = controller.can_create();
    let mut action = None;

    ui.add_space(8.0);
    ui.label("Hero name (optional)");
    ui.add_enabled(
        !loading,
        egui::TextEdit::singleline(&mut controller.form_mut().player_name)
            .hint_text("For example, Aelin or Kai...")
            .desired_width(f32::INFINITY),
    );

    ui.add_space(8.0);
    ui.label("Describe your world");
    let description = ui.add_enabled(
        !loading,
        egui::TextEdit::multiline(&mut controller.form_mut().description)
            .hint_text("A world of floating islands where magic works through music...")
            .desired_rows(6)
            .desired_width(f32::INFINITY),
    );
    ui.label(egui::RichText::new(HELPER_TEXT).small().weak());

    let submit_shortcut = description.has_focus()
        && ui.input(|input| input.modifiers.command && input.key_pressed(egui::Key::Enter));
    if submit_shortcut {
        action = Some(RequestMode::Create);
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui
            .add_enabled(can_create, egui::Button::new(create_button_label(in_flight)))
            .clicked()
        {
            action = Some(RequestMode::Create);
        }
        if ui
            .add_enabled(!loading, egui::Button::new(random_button_label(in_flight)))
            .clicked()
        {
            action = Some(RequestMode::Random);
        }
    });

    if let Some(message) = form_error(controller) {
        ui.add_space(6.0);
        ui.colored_label(ERROR_COLOR, message);
    }

    action
}

pub(super) fn show_result(ui: &mut egui::Ui, view: ResultView<'_>) {
    match view {
        ResultView::Working { .. } => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(WORKING_MESSAGE);
            });
        }
        ResultView::Error(message) => {
            ui.colored_label(ERROR_COLOR, message);
        }
        ResultView::Placeholder => {
            ui.weak(PLACEHOLDER_MESSAGE);
        }
        ResultView::World(card) => {
            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.label(egui::RichText::new(card.badge).strong().color(BADGE_COLOR));
                    ui.add_space(6.0);
                    ui.heading("World description");
                    ui.label(card.world_description);

                    ui.add_space(10.0);
                    ui.label(egui::RichText::new("Opening situation").strong().size(16.0));
                    ui.label(card.scenario_text);

                    if let Some(hints) = card.hints_for_image {
                        ui.add_space(10.0);
                        ui.separator();
                        ui.label(egui::RichText::new(IMAGE_HINTS_LABEL).italics());
                        ui.label(hints);
                    }
                });
            });
        }
    }
}
