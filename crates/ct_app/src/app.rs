use eframe::egui::{self, Align, Layout, RichText, ScrollArea, TextEdit, TopBottomPanel};
use tracing::warn;

use crate::actions::{dispatch, AppAction};
use crate::state::{AppState, Tab};

pub fn launch(state: AppState) -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();
    let title = state.config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Box::new(ContactsApp { state })),
    )
}

pub struct ContactsApp {
    state: AppState,
}

impl ContactsApp {
    fn run_action(&mut self, action: AppAction) {
        if let Err(err) = dispatch(&mut self.state, action) {
            warn!(%err, "action failed");
            self.state.status = err.to_string();
        }
    }

    fn draw_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("Edit", |ui| {
                if ui.button("Undo (Ctrl-Z)").clicked() {
                    ui.close_menu();
                    self.run_action(AppAction::Undo);
                }
                if ui.button("Redo (Ctrl-Y)").clicked() {
                    ui.close_menu();
                    self.run_action(AppAction::Redo);
                }
            });
            ui.menu_button("View", |ui| {
                for (tab, label) in Tab::all() {
                    if ui.button(label).clicked() {
                        ui.close_menu();
                        self.run_action(AppAction::SetActiveTab(tab));
                    }
                }
            });
        });
    }

    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Search");
            let mut query = self.state.query().to_string();
            let response = ui.add(
                TextEdit::singleline(&mut query)
                    .hint_text("name or email")
                    .desired_width(280.0),
            );
            if response.changed() {
                self.run_action(AppAction::SetQuery(query));
            }
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.run_action(AppAction::Search);
            }
            if ui.button("Search").clicked() {
                self.run_action(AppAction::Search);
            }
            if ui.button("Clear").clicked() {
                self.run_action(AppAction::ClearSearch);
            }

            ui.separator();
            if ui
                .add_enabled(self.state.undo_depth() > 0, egui::Button::new("Undo"))
                .clicked()
            {
                self.run_action(AppAction::Undo);
            }
            if ui
                .add_enabled(self.state.redo_depth() > 0, egui::Button::new("Redo"))
                .clicked()
            {
                self.run_action(AppAction::Redo);
            }
        });
    }

    fn draw_contact_list(&mut self, ui: &mut egui::Ui) {
        let visible = self.state.visible_contacts().to_vec();
        ui.heading("Contacts");
        ui.separator();

        let mut pending_delete = None;
        ScrollArea::vertical().show_rows(ui, 22.0, visible.len(), |ui, row_range| {
            for row in row_range {
                let contact = &visible[row];
                ui.horizontal(|ui| {
                    if ui.small_button("Delete").clicked() {
                        pending_delete = Some(contact.clone());
                    }
                    ui.label(&contact.name);
                    ui.label(RichText::new(&contact.email).weak());
                });
            }
        });

        if let Some(contact) = pending_delete {
            self.run_action(AppAction::DeleteContact {
                name: contact.name,
                email: contact.email,
            });
        }
    }

    fn draw_add_form(&mut self, ui: &mut egui::Ui) {
        ui.label("Add contact");
        let mut name = self.state.edit_name.clone();
        if ui
            .add(TextEdit::singleline(&mut name).hint_text("Name"))
            .changed()
        {
            self.run_action(AppAction::SetEditName(name));
        }
        let mut email = self.state.edit_email.clone();
        if ui
            .add(TextEdit::singleline(&mut email).hint_text("Email"))
            .changed()
        {
            self.run_action(AppAction::SetEditEmail(email));
        }
        if ui.button("Add").clicked() {
            self.run_action(AppAction::AddContact);
        }

        ui.separator();
        ui.label("Window title");
        ui.horizontal(|ui| {
            let mut title = self.state.edit_title.clone();
            if ui
                .add(TextEdit::singleline(&mut title).desired_width(180.0))
                .changed()
            {
                self.run_action(AppAction::SetEditTitle(title));
            }
            if ui.button("Save").clicked() {
                let title = self.state.edit_title.clone();
                self.run_action(AppAction::SetTitle(title.clone()));
                ui.ctx()
                    .send_viewport_cmd(egui::ViewportCommand::Title(title));
            }
        });
    }

    fn draw_tabs(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for (tab, label) in Tab::all() {
                let selected = self.state.active_tab == tab;
                if ui.selectable_label(selected, label).clicked() {
                    self.run_action(AppAction::SetActiveTab(tab));
                }
            }
        });
    }

    fn draw_history_tab(&mut self, ui: &mut egui::Ui) {
        let (undo, redo) = self.state.history_lines();
        ui.label(format!("Undo stack ({})", undo.len()));
        for line in &undo {
            ui.label(line);
        }
        ui.separator();
        ui.label(format!("Redo stack ({})", redo.len()));
        for line in &redo {
            ui.label(line);
        }
    }
}

impl eframe::App for ContactsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Z)) {
            self.run_action(AppAction::Undo);
        }
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Y)) {
            self.run_action(AppAction::Redo);
        }

        TopBottomPanel::top("menu_toolbar").show(ctx, |ui| {
            self.draw_menu(ui);
            ui.separator();
            self.draw_toolbar(ui);
        });

        TopBottomPanel::bottom("status").show(ctx, |ui| {
            let total = self.state.all_contacts().len();
            let shown = self.state.visible_contacts().len();
            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                ui.label(format!("{shown}/{total}"));
                ui.label(format!(
                    "undo {} / redo {}",
                    self.state.undo_depth(),
                    self.state.redo_depth()
                ));
                ui.label(RichText::new(&self.state.status).small());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.set_width(ui.available_width() * 0.55);
                    self.draw_contact_list(ui);
                });
                ui.separator();
                ui.vertical(|ui| {
                    self.draw_tabs(ui);
                    ui.separator();
                    match self.state.active_tab {
                        Tab::Contacts => self.draw_add_form(ui),
                        Tab::History => self.draw_history_tab(ui),
                    }
                });
            });
        });
    }
}
