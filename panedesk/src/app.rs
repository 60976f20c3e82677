//! Application state and UI for panedesk.

use std::path::PathBuf;

use eframe::CreationContext;
use egui::{CentralPanel, Context, Key};
use panecore::dialog::DialogRequest;
use panecore::frame::{DialogSession, FrameHost};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Small preferences persisted between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeskPrefs {
    /// Token length for the generator; 0 uses the library default.
    pub token_len: i32,
    /// Layout choice from the last dialog round-trip.
    pub last_choice: Option<String>,
}

impl Default for DeskPrefs {
    fn default() -> Self {
        Self {
            token_len: 0,
            last_choice: None,
        }
    }
}

impl DeskPrefs {
    fn path() -> PathBuf {
        directories::ProjectDirs::from("", "", "pane")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("/tmp/pane"))
            .join("panedesk.json")
    }

    fn load() -> Self {
        std::fs::read_to_string(Self::path())
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn save(&self) {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    eprintln!("[panedesk] failed to save prefs: {}", e);
                }
            }
            Err(e) => eprintln!("[panedesk] failed to encode prefs: {}", e),
        }
    }
}

pub struct DeskApp {
    host: FrameHost,
    prefs: DeskPrefs,
    /// Some while running as a modal dialog program.
    dialog: Option<DialogSession>,
    token: String,
    status: String,
}

impl DeskApp {
    pub fn new(cc: &CreationContext<'_>, dialog: Option<DialogSession>) -> Self {
        let mut host = FrameHost::new(cc.egui_ctx.clone());

        if dialog.is_none() {
            // Center once the window handle has settled.
            if let Err(e) = panecore::ready(&mut host, |h| {
                if let Err(e) = panecore::move_center(h, 0.0, 0.0) {
                    eprintln!("[panedesk] center failed: {}", e);
                }
            }) {
                eprintln!("[panedesk] ready failed: {}", e);
            }
        }

        Self {
            host,
            prefs: DeskPrefs::load(),
            dialog,
            token: String::new(),
            status: String::new(),
        }
    }

    fn open_choice_dialog(&mut self) {
        let request = DialogRequest::new("panedesk")
            .with_size(420.0, 240.0)
            .with_parameters(json!({
                "prompt": "pick a workspace layout",
                "choices": ["tiles", "columns", "stack"],
            }));
        match panecore::open_dialog(&mut self.host, request) {
            Ok(reply) => {
                if let Some(choice) = reply
                    .as_ref()
                    .and_then(|v| v.get("choice"))
                    .and_then(|v| v.as_str())
                {
                    self.prefs.last_choice = Some(choice.to_string());
                    self.prefs.save();
                }
                self.status = match &reply {
                    Some(v) => format!("dialog returned {}", v),
                    None => "dialog closed without a value".to_string(),
                };
            }
            Err(e) => self.status = format!("dialog failed: {}", e),
        }
    }

    fn render_main(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.heading("pane helpers");
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("new token").clicked() {
                    self.token = panecore::random_string(self.prefs.token_len);
                }
                if !self.token.is_empty() {
                    ui.monospace(&self.token);
                }
            });
            ui.horizontal(|ui| {
                ui.label("token length");
                let mut len = self.prefs.token_len;
                ui.add(egui::DragValue::new(&mut len).clamp_range(0..=64));
                if len != self.prefs.token_len {
                    self.prefs.token_len = len;
                    self.prefs.save();
                }
                ui.label("(0 uses the default)");
            });

            ui.add_space(8.0);
            if ui.button("center window").clicked() {
                if let Err(e) = panecore::move_center(&mut self.host, 0.0, 0.0) {
                    self.status = format!("center failed: {}", e);
                }
            }
            if ui.button("open dialog…").clicked() {
                self.open_choice_dialog();
            }

            if let Some(choice) = &self.prefs.last_choice {
                ui.add_space(8.0);
                ui.label(format!("last layout: {}", choice));
            }
            if !self.status.is_empty() {
                ui.add_space(8.0);
                ui.label(&self.status);
            }
        });
    }

    fn render_dialog(&mut self, ctx: &Context) {
        let parameters = self.dialog.as_ref().and_then(|d| d.parameters());
        let prompt = parameters
            .and_then(|p| p.get("prompt"))
            .and_then(|p| p.as_str())
            .unwrap_or("choose")
            .to_string();
        let choices: Vec<String> = parameters
            .and_then(|p| p.get("choices"))
            .and_then(|c| c.as_array())
            .map(|a| {
                a.iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_else(|| vec!["ok".to_string()]);

        let mut picked: Option<Option<Value>> = None;
        CentralPanel::default().show(ctx, |ui| {
            ui.heading(&prompt);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                for choice in &choices {
                    if ui.button(choice).clicked() {
                        picked = Some(Some(json!({ "choice": choice })));
                    }
                }
            });
            ui.add_space(8.0);
            if ui.button("cancel").clicked() {
                picked = Some(None);
            }
        });

        if let Some(value) = picked {
            self.finish_dialog(ctx, value);
        }
    }

    /// Write the close value (if any) and close this dialog window.
    fn finish_dialog(&mut self, ctx: &Context, value: Option<Value>) {
        if let Some(session) = self.dialog.take() {
            if let Err(e) = session.close(value.as_ref()) {
                eprintln!("[panedesk] failed to write dialog result: {}", e);
            }
        }
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

impl eframe::App for DeskApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.host.pump();

        if self.dialog.is_some() && ctx.input(|i| i.key_pressed(Key::Escape)) {
            self.finish_dialog(ctx, None);
        }

        if self.dialog.is_some() {
            self.render_dialog(ctx);
        } else {
            self.render_main(ctx);
        }
    }
}
