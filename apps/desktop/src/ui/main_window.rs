//! Menu bar, form, action buttons, product table and status line.

use eframe::egui::{self, Color32, RichText};

use super::Intent;
use crate::config::AppConfig;
use crate::controller::Coordinator;
use crate::store::SqliteStore;

const SAVE_FILL: Color32 = Color32::from_rgb(0x2e, 0x7d, 0x32);
const DELETE_FILL: Color32 = Color32::from_rgb(0xc6, 0x28, 0x28);
const MODIFY_FILL: Color32 = Color32::from_rgb(0xf9, 0xd8, 0x35);
const QUERY_FILL: Color32 = Color32::from_rgb(0x15, 0x65, 0xc0);

/// Lays out the main window. `blocked` disables every widget while a
/// dialog is open.
pub fn render(
    ctx: &egui::Context,
    coordinator: &mut Coordinator<SqliteStore>,
    config: &AppConfig,
    blocked: bool,
    intents: &mut Vec<Intent>,
) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        ui.add_enabled_ui(!blocked, |ui| menu_bar(ui, intents));
    });

    egui::TopBottomPanel::bottom("status_line").show(ctx, |ui| {
        status_line(ui, coordinator, config);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_enabled_ui(!blocked, |ui| {
            form(ui, coordinator);
            ui.add_space(8.0);
            buttons(ui, intents);
            ui.separator();
            product_table(ui, coordinator, intents);
        });
    });
}

fn menu_bar(ui: &mut egui::Ui, intents: &mut Vec<Intent>) {
    egui::menu::bar(ui, |ui| {
        ui.menu_button("Archivo", |ui| {
            if ui.button("Guardar como").clicked() {
                intents.push(Intent::OpenExport);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Salir").clicked() {
                intents.push(Intent::Exit);
                ui.close_menu();
            }
        });
    });
}

fn form(ui: &mut egui::Ui, coordinator: &mut Coordinator<SqliteStore>) {
    let form = coordinator.state_mut().form_mut();

    egui::Grid::new("product_form")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Nombre");
            ui.text_edit_singleline(form.name_mut());
            ui.end_row();

            ui.label("Cantidad");
            ui.text_edit_singleline(form.quantity_mut());
            ui.end_row();

            ui.label("Precio $");
            ui.text_edit_singleline(form.price_mut());
            ui.end_row();
        });
}

fn buttons(ui: &mut egui::Ui, intents: &mut Vec<Intent>) {
    ui.horizontal(|ui| {
        let actions = [
            ("Guardar", SAVE_FILL, Color32::WHITE, Intent::Save),
            ("Eliminar", DELETE_FILL, Color32::WHITE, Intent::Delete),
            ("Modificar", MODIFY_FILL, Color32::BLACK, Intent::Modify),
            ("Consultar", QUERY_FILL, Color32::WHITE, Intent::Query),
        ];

        for (label, fill, text, intent) in actions {
            let button = egui::Button::new(RichText::new(label).color(text)).fill(fill);
            if ui.add_sized([96.0, 28.0], button).clicked() {
                intents.push(intent);
            }
        }
    });
}

fn product_table(
    ui: &mut egui::Ui,
    coordinator: &Coordinator<SqliteStore>,
    intents: &mut Vec<Intent>,
) {
    let listing = coordinator.state().listing();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("product_table")
                .num_columns(4)
                .striped(true)
                .min_col_width(60.0)
                .show(ui, |ui| {
                    for header in ["ID", "Nombre", "Cantidad", "Precio"] {
                        ui.strong(header);
                    }
                    ui.end_row();

                    for (index, product) in listing.rows().iter().enumerate() {
                        let selected = listing.selected_index() == Some(index);
                        let cells = [
                            product.id.to_string(),
                            product.name.clone(),
                            product.quantity.to_string(),
                            product.price.to_string(),
                        ];

                        let mut clicked = false;
                        for cell in cells {
                            clicked |= ui.selectable_label(selected, cell).clicked();
                        }
                        if clicked {
                            intents.push(Intent::Select(index));
                        }
                        ui.end_row();
                    }
                });
        });
}

fn status_line(ui: &mut egui::Ui, coordinator: &Coordinator<SqliteStore>, config: &AppConfig) {
    let listing = coordinator.state().listing();
    let (value, skipped) = listing.stock_value_cents();

    let mut text = format!(
        "{} productos · Valor del stock: {}",
        listing.len(),
        config.format_currency(value)
    );
    if skipped > 0 {
        text.push_str(&format!(" ({} sin precio numérico)", skipped));
    }

    ui.label(text);
}
