use client_core::{present, FormState, WorldFormController};
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use eframe::egui;
use shared::domain::RequestMode;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::UiEvent,
    orchestration,
    reducer::{apply_ui_event, release_abandoned_request},
};
use crate::ui::panels;

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub api_base_url: String,
    pub player_name: String,
}

pub struct WorldFormApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    controller: WorldFormController,
    api_base_url: String,
    status: String,
}

impl WorldFormApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            controller: WorldFormController::new(FormState::new(startup.player_name, "")),
            api_base_url: startup.api_base_url,
            status: "Starting...".to_string(),
        }
    }

    /// Drains backend events so every completion is applied on the UI thread.
    fn process_ui_events(&mut self) {
        loop {
            match self.ui_rx.try_recv() {
                Ok(event) => apply_ui_event(&mut self.controller, &mut self.status, event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    release_abandoned_request(&mut self.controller, &mut self.status);
                    break;
                }
            }
        }
    }

    fn request_world(&mut self, mode: RequestMode) {
        orchestration::request_world(&self.cmd_tx, &mut self.controller, mode, &mut self.status);
    }
}

impl eframe::App for WorldFormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::top("hero").show(ctx, panels::show_hero);

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.weak(&self.status);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(&self.api_base_url);
                });
            });
        });

        let mut action = None;
        egui::SidePanel::left("world_form")
            .resizable(true)
            .default_width(380.0)
            .min_width(300.0)
            .show(ctx, |ui| {
                action = panels::show_form(ui, &mut self.controller);
            });
        if let Some(mode) = action {
            self.request_world(mode);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            panels::show_result(ui, present(&self.controller));
        });

        if self.controller.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
