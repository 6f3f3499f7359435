use converter_core::{Direction, FormState};
use eframe::egui;

const ERROR_TEXT_COLOR: egui::Color32 = egui::Color32::from_rgb(0xFF, 0x52, 0x52);

/// Label shown above the value field; follows the selected direction.
fn input_label(direction: Direction) -> String {
    format!("Value in {}", direction.source_unit())
}

pub struct ConverterApp {
    form: FormState,
    attempted_auto_focus: bool,
}

impl ConverterApp {
    pub fn new() -> Self {
        Self {
            form: FormState::new(),
            attempted_auto_focus: false,
        }
    }

    fn submit(&mut self) {
        self.form.submit();
        if self.form.error_text.is_empty() {
            tracing::debug!(
                direction = self.form.direction.label(),
                "convert: {}",
                self.form.result_text
            );
        } else {
            tracing::debug!("convert rejected: {}", self.form.error_text);
        }
    }

    fn clear(&mut self) {
        self.form.clear();
        tracing::debug!("form cleared");
    }

    fn show_direction_selector(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Conversion").strong());
        let mut selected = self.form.direction;
        egui::ComboBox::from_id_salt("direction_select")
            .width(ui.available_width())
            .selected_text(selected.label())
            .show_ui(ui, |ui| {
                for direction in Direction::ALL {
                    ui.selectable_value(&mut selected, direction, direction.label());
                }
            });
        if selected != self.form.direction {
            tracing::debug!(direction = selected.label(), "direction changed");
            self.form.set_direction(selected);
        }
    }

    fn show_value_field(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new(input_label(self.form.direction)).strong());
        let submit_requested = ui
            .horizontal(|ui| {
                ui.label(
                    egui::RichText::new(self.form.direction.source_unit())
                        .strong()
                        .monospace(),
                );
                let edit = egui::TextEdit::singleline(&mut self.form.raw_input)
                    .id_salt("value_input")
                    .hint_text(
                        egui::RichText::new("Type the temperature")
                            .color(ui.visuals().weak_text_color().gamma_multiply(0.85)),
                    )
                    .desired_width(f32::INFINITY);
                let response = ui.add_sized([ui.available_width(), 34.0], edit);

                if !self.attempted_auto_focus {
                    self.attempted_auto_focus = true;
                    response.request_focus();
                }

                // Enter in the value field converts, like the button.
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
            })
            .inner;
        if submit_requested {
            self.submit();
        }
    }

    fn show_converter_card(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let avail = ui.available_size();
            let card_width = avail.x.clamp(320.0, 400.0);
            let top_space = (avail.y * 0.12).clamp(18.0, 90.0);

            ui.add_space(top_space);

            ui.vertical_centered(|ui| {
                ui.set_width(card_width);

                egui::Frame::NONE
                    .fill(ui.visuals().panel_fill)
                    .corner_radius(14.0)
                    .stroke(egui::Stroke::new(
                        1.0,
                        ui.visuals().widgets.noninteractive.bg_stroke.color,
                    ))
                    .inner_margin(egui::Margin::symmetric(20, 18))
                    .show(ui, |ui| {
                        ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 10.0);

                        ui.vertical(|ui| {
                            ui.heading("Temperature Converter");
                            ui.weak("Converts between Celsius and Fahrenheit.");
                        });

                        ui.separator();

                        egui::Frame::NONE
                            .fill(ui.visuals().faint_bg_color.gamma_multiply(0.55))
                            .corner_radius(12.0)
                            .inner_margin(egui::Margin::symmetric(14, 12))
                            .show(ui, |ui| {
                                self.show_direction_selector(ui);
                                ui.add_space(6.0);
                                self.show_value_field(ui);
                            });

                        ui.add_space(4.0);

                        ui.horizontal(|ui| {
                            let convert_btn =
                                egui::Button::new(egui::RichText::new("Convert").strong())
                                    .min_size(egui::vec2(120.0, 34.0));
                            if ui.add(convert_btn).clicked() {
                                self.submit();
                            }
                            let clear_btn = egui::Button::new("Clear")
                                .min_size(egui::vec2(90.0, 34.0));
                            if ui.add(clear_btn).clicked() {
                                self.clear();
                            }
                        });

                        if !self.form.error_text.is_empty() {
                            ui.add_space(4.0);
                            ui.colored_label(ERROR_TEXT_COLOR, &self.form.error_text);
                        }

                        if !self.form.result_text.is_empty() {
                            ui.add_space(4.0);
                            ui.label(
                                egui::RichText::new(&self.form.result_text)
                                    .strong()
                                    .size(20.0),
                            );
                        }
                    });
            });
        });
    }
}

impl Default for ConverterApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for ConverterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_converter_card(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::input_label;
    use converter_core::Direction;

    #[test]
    fn value_field_label_follows_direction() {
        assert_eq!(input_label(Direction::CelsiusToFahrenheit), "Value in °C");
        assert_eq!(input_label(Direction::FahrenheitToCelsius), "Value in °F");
    }
}
