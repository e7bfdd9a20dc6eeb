//! Detail overlay for one selected user.
//!
//! Three gestures close it: the explicit close control, a click on the backdrop,
//! and Escape. All of them resolve to a single `DismissGesture` so the caller
//! has one close path.

use eframe::egui;
use shared::domain::{Geo, User};

use crate::ui::theme::Palette;

pub const MAP_URL_PREFIX: &str = "https://www.google.com/maps?q=";
pub const CLOSE_LABEL: &str = "Close";
pub const BACKDROP_LABEL: &str = "Close modal";
pub const MAP_LABEL: &str = "View on map";
const OVERLAY_WIDTH: f32 = 460.0;

/// Map link for a coordinate pair. The strings are inserted as received.
pub fn map_url(geo: &Geo) -> String {
    format!("{MAP_URL_PREFIX}{},{}", geo.lat, geo.lng)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayView {
    pub name: String,
    pub email: String,
    pub email_href: String,
    pub email_label: String,
    pub street_line: String,
    pub city_line: String,
    pub map_href: String,
    pub phone: String,
    pub website: String,
    pub website_href: String,
    pub website_label: String,
    pub company_name: String,
    pub catch_phrase: String,
    pub business: String,
}

impl OverlayView {
    /// Nothing is shown unless the overlay is open *and* a user is selected.
    pub fn build(user: Option<&User>, open: bool) -> Option<Self> {
        if !open {
            return None;
        }
        let user = user?;
        Some(Self {
            name: user.name.clone(),
            email: user.email.clone(),
            email_href: format!("mailto:{}", user.email),
            email_label: format!("Send email to {}", user.email),
            street_line: format!("{}, {}", user.address.street, user.address.suite),
            city_line: format!("{}, {}", user.address.city, user.address.zipcode),
            map_href: map_url(&user.address.geo),
            phone: user.phone.clone(),
            website: user.website.clone(),
            website_href: format!("https://{}", user.website),
            website_label: format!("Visit website {}", user.website),
            company_name: user.company.name.clone(),
            catch_phrase: user.company.catch_phrase.clone(),
            business: user.company.bs.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissGesture {
    CloseControl,
    Backdrop,
    Escape,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OverlayInput {
    pub close_clicked: bool,
    pub escape_pressed: bool,
    /// Where a backdrop click landed, if one was reported this frame.
    pub backdrop_click: Option<egui::Pos2>,
    pub content_rect: Option<egui::Rect>,
}

pub fn resolve_dismiss(input: &OverlayInput) -> Option<DismissGesture> {
    if input.close_clicked {
        return Some(DismissGesture::CloseControl);
    }
    if input.escape_pressed {
        return Some(DismissGesture::Escape);
    }
    let click = input.backdrop_click?;
    match input.content_rect {
        Some(content) if content.contains(click) => None,
        _ => Some(DismissGesture::Backdrop),
    }
}

pub fn show_user_overlay(
    ctx: &egui::Context,
    view: &OverlayView,
    palette: &Palette,
) -> Option<DismissGesture> {
    let frame = egui::Frame::NONE
        .fill(palette.card_background)
        .stroke(egui::Stroke::new(1.0, palette.card_stroke))
        .corner_radius(16.0)
        .inner_margin(egui::Margin::same(28));

    let modal = egui::Modal::new(egui::Id::new("user_detail_overlay"))
        .backdrop_color(palette.backdrop)
        .frame(frame)
        .show(ctx, |ui| {
            ui.set_width(OVERLAY_WIDTH);
            show_overlay_contents(ui, view, palette)
        });

    modal.response.widget_info(|| {
        egui::WidgetInfo::labeled(egui::WidgetType::Window, true, &view.name)
    });
    // egui has no dialog widget type; patch the role on the node it just filled.
    ctx.accesskit_node_builder(modal.response.id, |node| {
        node.set_role(egui::accesskit::Role::Dialog);
    });
    modal.backdrop_response.widget_info(|| {
        egui::WidgetInfo::labeled(egui::WidgetType::Button, true, BACKDROP_LABEL)
    });

    let input = OverlayInput {
        close_clicked: modal.inner,
        escape_pressed: ctx.input(|i| i.key_pressed(egui::Key::Escape)),
        backdrop_click: if modal.backdrop_response.clicked() {
            modal
                .backdrop_response
                .interact_pointer_pos()
                .or_else(|| Some(modal.backdrop_response.rect.left_top()))
        } else {
            None
        },
        content_rect: Some(modal.response.rect),
    };

    let gesture = resolve_dismiss(&input);
    if let Some(gesture) = gesture {
        tracing::debug!(?gesture, "user detail overlay dismissed");
    }
    gesture
}

/// Returns whether the close control was clicked.
fn show_overlay_contents(ui: &mut egui::Ui, view: &OverlayView, palette: &Palette) -> bool {
    let mut close_clicked = false;

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(&view.name)
                    .size(22.0)
                    .strong()
                    .color(palette.strong_text),
            );
            let email = ui.hyperlink_to(&view.email, &view.email_href);
            email.widget_info(|| {
                egui::WidgetInfo::labeled(egui::WidgetType::Link, true, &view.email_label)
            });
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            let close = ui.add(
                egui::Button::new(egui::RichText::new("×").size(20.0).color(palette.muted_text))
                    .frame(false),
            );
            close.widget_info(|| {
                egui::WidgetInfo::labeled(egui::WidgetType::Button, true, CLOSE_LABEL)
            });
            close_clicked = close.on_hover_text(CLOSE_LABEL).clicked();
        });
    });

    ui.add_space(16.0);
    section_title(ui, "Address", palette);
    body_line(ui, &view.street_line, palette);
    body_line(ui, &view.city_line, palette);
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("📍").color(palette.danger));
        ui.hyperlink_to(MAP_LABEL, &view.map_href);
    });

    ui.add_space(16.0);
    section_title(ui, "Contact", palette);
    labeled_line(ui, "Phone:", &view.phone, palette);
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("Website:")
                .strong()
                .color(palette.body_text),
        );
        let link = ui.hyperlink_to(&view.website, &view.website_href);
        link.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Link, true, &view.website_label)
        });
    });

    ui.add_space(16.0);
    section_title(ui, "Company", palette);
    labeled_line(ui, "Name:", &view.company_name, palette);
    labeled_line(ui, "Catchphrase:", &view.catch_phrase, palette);
    labeled_line(ui, "Business:", &view.business, palette);

    close_clicked
}

fn section_title(ui: &mut egui::Ui, title: &str, palette: &Palette) {
    ui.label(
        egui::RichText::new(title)
            .size(16.0)
            .strong()
            .color(palette.strong_text),
    );
}

fn body_line(ui: &mut egui::Ui, text: &str, palette: &Palette) {
    ui.label(egui::RichText::new(text).color(palette.body_text));
}

fn labeled_line(ui: &mut egui::Ui, label: &str, value: &str, palette: &Palette) {
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new(label).strong().color(palette.body_text));
        ui.label(egui::RichText::new(value).color(palette.body_text));
    });
}
