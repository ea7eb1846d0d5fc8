//! Modal windows: the notice dialog and the "Guardar como" path prompt.
//!
//! Both are anchored at the center of the window and take the place of the
//! native message box / file dialog.

use eframe::egui::{self, Align2, Color32, RichText};

use super::Intent;
use crate::error::{Notice, Severity};

fn severity_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Info => Color32::from_rgb(0x15, 0x65, 0xc0),
        Severity::Warning => Color32::from_rgb(0xef, 0x6c, 0x00),
        Severity::Error => Color32::from_rgb(0xc6, 0x28, 0x28),
    }
}

/// Shows `notice` until the user presses Aceptar.
pub fn notice(ctx: &egui::Context, notice: &Notice, intents: &mut Vec<Intent>) {
    egui::Window::new(RichText::new(&notice.title).color(severity_color(notice.severity)))
        .id(egui::Id::new("notice_dialog"))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(notice.message.as_str());
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Aceptar").clicked() || enter {
                    intents.push(Intent::DismissNotice);
                }
            });
        });
}

/// Destination prompt for the CSV export. An empty path counts as cancel.
pub fn export_prompt(ctx: &egui::Context, path: &mut String, intents: &mut Vec<Intent>) {
    egui::Window::new("Guardar como")
        .id(egui::Id::new("export_prompt"))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Archivo CSV de destino:");
            ui.add(egui::TextEdit::singleline(path).desired_width(320.0));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Guardar").clicked() {
                    intents.push(Intent::Export(path.clone()));
                }
                if ui.button("Cancelar").clicked() {
                    intents.push(Intent::CancelExport);
                }
            });
        });
}
