//! Main application state and update loop

use std::thread;

use eframe::egui;
use eyre::WrapErr;

use inkseal_workflow_adapters::{
    load_file_handle, ChannelPresenter, HttpTransportAdapter, SelectionStore,
    WorkflowAdapterConfig,
};
use inkseal_workflow_core::{OperationKind, Outcome, PresenterPort, Workflow};

use crate::state::{SignState, VerifyState};
use crate::ui;

/// The main application state
pub struct App {
    /// Current active tab
    active_tab: Tab,
    /// Sign tab state
    sign_state: SignState,
    /// Verify tab state
    verify_state: VerifyState,
    /// Editable service base URL, seeded from env/config
    service_url: String,
    /// Settled sign outcomes, written by the submission thread
    sign_outcome: ChannelPresenter,
    /// Settled verify outcomes, written by the submission thread
    verify_outcome: ChannelPresenter,
}

/// Available tabs in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Sign,
    Verify,
}

impl App {
    /// Create a new App instance
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = WorkflowAdapterConfig::from_env();
        Self {
            active_tab: Tab::default(),
            sign_state: SignState::default(),
            verify_state: VerifyState::default(),
            service_url: config.service_base_url,
            sign_outcome: ChannelPresenter::new(),
            verify_outcome: ChannelPresenter::new(),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        // Check for settled submissions
        self.check_outcomes();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.heading(
                    egui::RichText::new("🖋 inkseal")
                        .size(22.0)
                        .color(egui::Color32::from_rgb(0, 212, 170)),
                );
                ui.add_space(30.0);
                ui.separator();
                ui.add_space(10.0);
                ui.selectable_value(&mut self.active_tab, Tab::Sign, "✍ Sign");
                ui.selectable_value(&mut self.active_tab, Tab::Verify, "🔍 Verify");
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.label("Service URL:");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.service_url)
                            .desired_width(320.0)
                            .font(egui::TextStyle::Monospace),
                    );
                });
                ui.add_space(10.0);
                match self.active_tab {
                    Tab::Sign => self.render_sign_tab(ui, ctx),
                    Tab::Verify => self.render_verify_tab(ui, ctx),
                }
                ui.add_space(20.0);
            });
        });
    }
}

impl App {
    fn render_sign_tab(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui::styled_heading(ui, "Sign a document");
        ui.label("The service signs the uploaded document and returns its result as text.");
        ui.add_space(15.0);

        ui.horizontal(|ui| {
            ui.label("Document:");
            ui::path_input(ui, &mut self.sign_state.document_path);
        });

        ui.add_space(15.0);

        let busy = self.sign_state.is_loading;
        ui.horizontal(|ui| {
            if ui::primary_button_enabled(ui, "✍ Sign", !busy).clicked() {
                self.trigger_sign(ctx);
            }
            if ui::secondary_button(ui, "🗑 Clear").clicked() {
                self.sign_state.clear_results();
            }
        });

        if self.sign_state.is_loading {
            ui.add_space(10.0);
            ui::loading_spinner(ui);
        }

        if let Some(error) = &self.sign_state.error {
            ui.add_space(10.0);
            ui::error_message(ui, error);
        }

        if let Some(result) = &self.sign_state.result {
            ui.add_space(15.0);
            ui::section_header(ui, "Service result");
            ui::copyable_text(ui, result);
        }
    }

    fn render_verify_tab(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui::styled_heading(ui, "Verify a signature");
        ui.label("The service checks the document against the signature and reports its verdict.");
        ui.add_space(15.0);

        ui.horizontal(|ui| {
            ui.label("Document:");
            ui::path_input(ui, &mut self.verify_state.document_path);
        });
        ui.horizontal(|ui| {
            ui.label("Signature:");
            ui::path_input(ui, &mut self.verify_state.signature_path);
        });

        ui.add_space(15.0);

        let busy = self.verify_state.is_loading;
        ui.horizontal(|ui| {
            if ui::primary_button_enabled(ui, "🔍 Verify", !busy).clicked() {
                self.trigger_verify(ctx);
            }
            if ui::secondary_button(ui, "🗑 Clear").clicked() {
                self.verify_state.clear_results();
            }
        });

        if self.verify_state.is_loading {
            ui.add_space(10.0);
            ui::loading_spinner(ui);
        }

        if let Some(error) = &self.verify_state.error {
            ui.add_space(10.0);
            ui::error_message(ui, error);
        }

        if let Some(result) = &self.verify_state.result {
            ui.add_space(15.0);
            ui::section_header(ui, "Service result");
            ui::copyable_text(ui, result);
        }
    }

    fn trigger_sign(&mut self, ctx: &egui::Context) {
        self.sign_state.clear_results();

        // An empty path stays unselected so the workflow reports the missing
        // field itself; an unreadable path is a shell error shown right away.
        let selections = SelectionStore::new();
        let path = self.sign_state.document_path.trim();
        if !path.is_empty() {
            match load_file_handle(path).wrap_err("could not load the selected document") {
                Ok(handle) => selections.choose("file", handle),
                Err(e) => {
                    self.sign_state.error = Some(format!("{e:#}"));
                    return;
                }
            }
        }

        self.sign_state.is_loading = true;
        self.spawn_submission(
            OperationKind::Sign,
            selections,
            self.sign_outcome.clone(),
            ctx.clone(),
        );
    }

    fn trigger_verify(&mut self, ctx: &egui::Context) {
        self.verify_state.clear_results();

        let selections = SelectionStore::new();
        let slots = [
            ("file", self.verify_state.document_path.clone()),
            ("signature", self.verify_state.signature_path.clone()),
        ];
        for (slot, raw) in slots {
            let path = raw.trim();
            if path.is_empty() {
                continue;
            }
            match load_file_handle(path).wrap_err_with(|| format!("could not load the {slot} input"))
            {
                Ok(handle) => selections.choose(slot, handle),
                Err(e) => {
                    self.verify_state.error = Some(format!("{e:#}"));
                    return;
                }
            }
        }

        self.verify_state.is_loading = true;
        self.spawn_submission(
            OperationKind::Verify,
            selections,
            self.verify_outcome.clone(),
            ctx.clone(),
        );
    }

    fn spawn_submission(
        &self,
        kind: OperationKind,
        selections: SelectionStore,
        presenter: ChannelPresenter,
        ctx: egui::Context,
    ) {
        let config = WorkflowAdapterConfig {
            service_base_url: self.service_url.trim().to_owned(),
            ..WorkflowAdapterConfig::from_env()
        };

        tracing::info!(operation = kind.label(), url = %config.service_base_url, "submitting");

        thread::spawn(move || {
            let outcome_slot = presenter.clone();
            match HttpTransportAdapter::with_config(&config) {
                Ok(transport) => {
                    let workflow = Workflow::new(selections, transport, presenter);
                    workflow.submit(kind);
                }
                Err(err) => outcome_slot.present(&Outcome::Failed(err)),
            }
            ctx.request_repaint();
        });
    }

    fn check_outcomes(&mut self) {
        if let Some(outcome) = self.sign_outcome.take() {
            self.sign_state.is_loading = false;
            match outcome {
                Outcome::Completed(response) => self.sign_state.result = Some(response.body),
                Outcome::Failed(err) => self.sign_state.error = Some(err.to_string()),
            }
        }
        if let Some(outcome) = self.verify_outcome.take() {
            self.verify_state.is_loading = false;
            match outcome {
                Outcome::Completed(response) => self.verify_state.result = Some(response.body),
                Outcome::Failed(err) => self.verify_state.error = Some(err.to_string()),
            }
        }
    }
}
