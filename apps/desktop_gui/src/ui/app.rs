use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use url::Url;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{DirectoryState, Intent};
use crate::ui::overlay::{show_user_overlay, OverlayView};
use crate::ui::table::{show_user_table, TableView};
use crate::ui::theme::Palette;

pub const APP_TITLE: &str = "User Directory";
pub const HEADER_TITLE: &str = "Homework 2";
pub const HEADER_SUBTITLE: &str = "Users table";
pub const RETRY_LABEL: &str = "Try Again";
const LOADING_REPAINT_INTERVAL: Duration = Duration::from_millis(50);
const IDLE_REPAINT_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub api_base_url: Url,
}

pub struct DesktopGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    state: DirectoryState,
    status: String,
    api_base_url: Url,

    palette: Palette,
    applied_palette: Option<Palette>,
}

impl DesktopGuiApp {
    /// Builds the app and fires the initial load.
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: &StartupConfig,
    ) -> Self {
        let mut app = Self::new(cmd_tx, ui_rx, startup);
        if let Some(cmd) = app.state.mount() {
            app.queue(cmd);
        }
        app
    }

    fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: &StartupConfig,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            state: DirectoryState::new(),
            status: "Starting backend worker...".to_string(),
            api_base_url: startup.api_base_url.clone(),
            palette: Palette::light(),
            applied_palette: None,
        }
    }

    fn queue(&mut self, cmd: BackendCommand) {
        let attempt = cmd.attempt();
        if let Err(err) = dispatch_backend_command(&self.cmd_tx, cmd) {
            self.status = err.message().to_string();
            self.state.users_failed(attempt, &err);
        }
    }

    fn apply_intent(&mut self, intent: Intent) {
        tracing::debug!(?intent, "applying ui intent");
        if let Some(cmd) = self.state.apply(intent) {
            self.queue(cmd);
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::UsersLoaded { attempt, users } => {
                    self.status =
                        format!("Loaded {} users from {}", users.len(), self.api_base_url);
                    self.state.users_loaded(attempt, users);
                }
                UiEvent::UsersFailed { attempt, error } => {
                    self.status = "Last load failed".to_string();
                    self.state.users_failed(attempt, &error);
                }
                UiEvent::Error(error) => {
                    tracing::error!(
                        category = ?error.category(),
                        "backend error: {}",
                        error.message()
                    );
                    self.status = error.message().to_string();
                    // Nothing will answer the pending fetch once the worker is gone.
                    if error.context() == UiErrorContext::BackendStartup
                        && self.state.is_loading()
                    {
                        self.state.users_failed(self.state.latest_attempt(), &error);
                    }
                }
            }
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_palette == Some(self.palette) {
            return;
        }
        ctx.set_visuals(self.palette.visuals());
        self.applied_palette = Some(self.palette);
    }

    fn show_header(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.label(
                egui::RichText::new(HEADER_TITLE)
                    .size(28.0)
                    .strong()
                    .color(self.palette.strong_text),
            );
            ui.label(
                egui::RichText::new(HEADER_SUBTITLE)
                    .size(17.0)
                    .color(self.palette.muted_text),
            );
            ui.add_space(20.0);
        });
    }

    /// Returns true when the retry control was clicked.
    fn show_error_banner(&self, ui: &mut egui::Ui, message: &str) -> bool {
        let mut retry_clicked = false;
        egui::Frame::NONE
            .fill(self.palette.error_fill)
            .stroke(egui::Stroke::new(1.0, self.palette.error_stroke))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(12, 10))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(message).color(self.palette.danger));
                    ui.add_space(6.0);
                    retry_clicked = ui.button(RETRY_LABEL).clicked();
                });
            });
        ui.add_space(12.0);
        retry_clicked
    }

    fn show_status_line(&self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            ui.small("Status:");
            ui.small(egui::RichText::new(&self.status).weak());
        });
    }

    /// One frame of the directory screen. Intents gathered while painting are
    /// applied after the views have read the current state.
    fn show(&mut self, ctx: &egui::Context) {
        self.process_ui_events();
        self.apply_theme_if_needed(ctx);

        let mut intents: Vec<Intent> = Vec::new();

        egui::TopBottomPanel::bottom("status_line").show(ctx, |ui| {
            self.show_status_line(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_header(ui);

            if let Some(message) = self.state.error_message() {
                if self.show_error_banner(ui, message) {
                    intents.push(Intent::Retry);
                }
            }

            let table = TableView::build(self.state.users(), self.state.is_loading());
            if let Some(intent) = show_user_table(ui, &table, &self.palette) {
                intents.push(intent.into());
            }
        });

        if let Some(view) = OverlayView::build(self.state.selected_user(), self.state.overlay_open())
        {
            if show_user_overlay(ctx, &view, &self.palette).is_some() {
                intents.push(Intent::Dismiss);
            }
        }

        for intent in intents {
            self.apply_intent(intent);
        }

        if self.state.is_loading() {
            ctx.request_repaint_after(LOADING_REPAINT_INTERVAL);
        } else {
            ctx.request_repaint_after(IDLE_REPAINT_INTERVAL);
        }
    }
}

impl eframe::App for DesktopGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
