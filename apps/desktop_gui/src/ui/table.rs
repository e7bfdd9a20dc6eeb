//! User table: loading and empty placeholders, one activatable row per user.
//!
//! `TableView::build` is a pure projection of `(users, is_loading)`; the egui
//! painter below only reads it and reports intents back to the caller.

use eframe::egui;
use shared::domain::{User, UserId};

use crate::controller::reducer::Intent;
use crate::ui::theme::Palette;

pub const LOADING_TEXT: &str = "Loading users...";
pub const EMPTY_TEXT: &str = "No users found";
pub const DELETE_LABEL: &str = "Delete user";
pub const COLUMN_HEADERS: [&str; 6] = [
    "Name / Email",
    "Address",
    "Phone",
    "Website",
    "Company",
    "Action",
];
const COLUMN_WIDTHS: [f32; 6] = [220.0, 230.0, 170.0, 150.0, 170.0, 64.0];
const ROW_MIN_HEIGHT: f32 = 44.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub phone_href: String,
    pub website: String,
    pub website_href: String,
    pub website_label: String,
    pub company: String,
    pub row_label: String,
}

impl UserRow {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            address: format!("{}, {}", user.address.city, user.address.street),
            phone: user.phone.clone(),
            phone_href: format!("tel:{}", user.phone),
            website: user.website.clone(),
            website_href: format!("https://{}", user.website),
            website_label: format!("Visit website {}", user.website),
            company: user.company.name.clone(),
            row_label: format!("View details for {}", user.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    Loading,
    Empty,
    Rows(Vec<UserRow>),
}

impl TableView {
    /// Loading wins over any stale rows still held.
    pub fn build(users: &[User], is_loading: bool) -> Self {
        if is_loading {
            Self::Loading
        } else if users.is_empty() {
            Self::Empty
        } else {
            Self::Rows(users.iter().map(UserRow::from_user).collect())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableIntent {
    Select(UserId),
    Delete(UserId),
}

impl From<TableIntent> for Intent {
    fn from(value: TableIntent) -> Self {
        match value {
            TableIntent::Select(user_id) => Intent::SelectUser(user_id),
            TableIntent::Delete(user_id) => Intent::DeleteUser(user_id),
        }
    }
}

/// Raw interaction observed on one row during a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowInput {
    pub pointer_activated: bool,
    pub key_confirmed: bool,
    pub delete_activated: bool,
    pub website_activated: bool,
}

/// Nested controls own their activation: delete and the website link never
/// also select the row.
pub fn resolve_row_input(user_id: UserId, input: RowInput) -> Option<TableIntent> {
    if input.delete_activated {
        return Some(TableIntent::Delete(user_id));
    }
    if input.website_activated {
        return None;
    }
    if input.pointer_activated || input.key_confirmed {
        return Some(TableIntent::Select(user_id));
    }
    None
}

pub fn show_user_table(
    ui: &mut egui::Ui,
    view: &TableView,
    palette: &Palette,
) -> Option<TableIntent> {
    match view {
        TableView::Loading => {
            show_loading(ui, palette);
            None
        }
        TableView::Empty => {
            show_placeholder(ui, EMPTY_TEXT, palette);
            None
        }
        TableView::Rows(rows) => show_rows(ui, rows, palette),
    }
}

fn show_loading(ui: &mut egui::Ui, palette: &Palette) {
    ui.vertical_centered(|ui| {
        ui.add_space(64.0);
        let spinner = ui.add(egui::Spinner::new().size(32.0).color(palette.link));
        spinner.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::ProgressIndicator, true, "Loading")
        });
        ui.add_space(16.0);
        ui.label(egui::RichText::new(LOADING_TEXT).color(palette.muted_text));
        ui.add_space(64.0);
    });
}

fn show_placeholder(ui: &mut egui::Ui, text: &str, palette: &Palette) {
    ui.vertical_centered(|ui| {
        ui.add_space(64.0);
        ui.label(egui::RichText::new(text).color(palette.muted_text));
        ui.add_space(64.0);
    });
}

fn show_rows(ui: &mut egui::Ui, rows: &[UserRow], palette: &Palette) -> Option<TableIntent> {
    let mut intent = None;

    palette.card_frame().show(ui, |ui| {
        egui::ScrollArea::both()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                show_header_row(ui, palette);
                for row in rows {
                    ui.separator();
                    if let Some(row_intent) = show_row(ui, row, palette) {
                        intent = Some(row_intent);
                    }
                }
            });
    });

    intent
}

fn show_header_row(ui: &mut egui::Ui, palette: &Palette) {
    ui.horizontal(|ui| {
        for (header, width) in COLUMN_HEADERS.iter().zip(COLUMN_WIDTHS) {
            table_cell(ui, width, |ui| {
                ui.label(
                    egui::RichText::new(header.to_ascii_uppercase())
                        .small()
                        .strong()
                        .color(palette.header_text),
                );
            });
        }
    });
}

fn show_row(ui: &mut egui::Ui, row: &UserRow, palette: &Palette) -> Option<TableIntent> {
    // The row is registered before its children, so a click on a nested control
    // lands on that control instead of the row. Cell text must stay
    // non-selectable or it would take the press as well.
    let scoped = ui.scope_builder(
        egui::UiBuilder::new()
            .id_salt(("user_row", row.id.0))
            .sense(egui::Sense::click()),
        |ui| {
            ui.style_mut().interaction.selectable_labels = false;
            let mut input = RowInput::default();
            ui.horizontal(|ui| {
                ui.set_min_height(ROW_MIN_HEIGHT);

                table_cell(ui, COLUMN_WIDTHS[0], |ui| {
                    ui.label(
                        egui::RichText::new(&row.name)
                            .strong()
                            .color(palette.strong_text),
                    );
                    ui.label(egui::RichText::new(&row.email).small().color(palette.link));
                });
                table_cell(ui, COLUMN_WIDTHS[1], |ui| {
                    ui.label(egui::RichText::new(&row.address).color(palette.body_text));
                });
                table_cell(ui, COLUMN_WIDTHS[2], |ui| {
                    ui.hyperlink_to(&row.phone, &row.phone_href);
                });
                input.website_activated = table_cell(ui, COLUMN_WIDTHS[3], |ui| {
                    let link = ui.hyperlink_to(&row.website, &row.website_href);
                    link.widget_info(|| {
                        egui::WidgetInfo::labeled(
                            egui::WidgetType::Link,
                            true,
                            &row.website_label,
                        )
                    });
                    link.clicked()
                });
                table_cell(ui, COLUMN_WIDTHS[4], |ui| {
                    ui.label(egui::RichText::new(&row.company).color(palette.body_text));
                });
                input.delete_activated = table_cell(ui, COLUMN_WIDTHS[5], |ui| {
                    let delete = ui
                        .add(
                            egui::Button::new(egui::RichText::new("❌").color(palette.danger))
                                .frame(false),
                        )
                        .on_hover_text(DELETE_LABEL);
                    delete.widget_info(|| {
                        egui::WidgetInfo::labeled(egui::WidgetType::Button, true, DELETE_LABEL)
                    });
                    delete.clicked()
                });
            });
            input
        },
    );

    let response = scoped.response;
    response.widget_info(|| {
        egui::WidgetInfo::labeled(egui::WidgetType::Button, true, &row.row_label)
    });

    let mut input = scoped.inner;
    input.pointer_activated = response.clicked();
    input.key_confirmed = response.has_focus()
        && ui.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Space));

    if response.hovered() && !input.delete_activated {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    resolve_row_input(row.id, input)
}

fn table_cell<R>(ui: &mut egui::Ui, width: f32, add: impl FnOnce(&mut egui::Ui) -> R) -> R {
    ui.allocate_ui(egui::vec2(width, 0.0), |ui| {
        ui.set_width(width);
        ui.vertical(add).inner
    })
    .inner
}
