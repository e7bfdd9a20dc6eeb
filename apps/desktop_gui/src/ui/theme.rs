//! Colors and visuals shared by the table, overlay, and app shell.

use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub app_background: egui::Color32,
    pub card_background: egui::Color32,
    pub card_stroke: egui::Color32,
    pub header_text: egui::Color32,
    pub muted_text: egui::Color32,
    pub body_text: egui::Color32,
    pub strong_text: egui::Color32,
    pub link: egui::Color32,
    pub danger: egui::Color32,
    pub error_fill: egui::Color32,
    pub error_stroke: egui::Color32,
    pub backdrop: egui::Color32,
    pub panel_rounding: u8,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            app_background: egui::Color32::from_rgb(243, 244, 246),
            card_background: egui::Color32::WHITE,
            card_stroke: egui::Color32::from_rgb(229, 231, 235),
            header_text: egui::Color32::from_rgb(107, 114, 128),
            muted_text: egui::Color32::from_rgb(107, 114, 128),
            body_text: egui::Color32::from_rgb(55, 65, 81),
            strong_text: egui::Color32::from_rgb(17, 24, 39),
            link: egui::Color32::from_rgb(37, 99, 235),
            danger: egui::Color32::from_rgb(239, 68, 68),
            error_fill: egui::Color32::from_rgb(254, 242, 242),
            error_stroke: egui::Color32::from_rgb(252, 165, 165),
            backdrop: egui::Color32::from_black_alpha(51),
            panel_rounding: 12,
        }
    }

    pub fn visuals(&self) -> egui::Visuals {
        let mut visuals = egui::Visuals::light();
        visuals.panel_fill = self.app_background;
        visuals.window_fill = self.card_background;
        visuals.window_stroke = egui::Stroke::new(1.0, self.card_stroke);
        visuals.hyperlink_color = self.link;
        visuals.window_corner_radius = egui::CornerRadius::same(self.panel_rounding);
        visuals.menu_corner_radius = egui::CornerRadius::same(self.panel_rounding);
        visuals
    }

    pub fn card_frame(&self) -> egui::Frame {
        egui::Frame::NONE
            .fill(self.card_background)
            .stroke(egui::Stroke::new(1.0, self.card_stroke))
            .corner_radius(self.panel_rounding)
            .inner_margin(egui::Margin::symmetric(12, 8))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}
