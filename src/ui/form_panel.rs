use {
    crate::{
        config::FORM,
        domain::{ForecastRequest, IndicatorSet, ValidationError},
        ui::{UI_TEXT, UiStyleExt},
    },
    eframe::egui::{Key, TextEdit, Ui},
};

/// Raw contents of the prediction form, plus the last validation failure.
pub struct FormState {
    pub ticker: String,
    /// Kept as text so we can report a bad horizon instead of silently clamping it
    pub horizon_raw: String,
    pub indicators: IndicatorSet,
    pub validation_error: Option<ValidationError>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            ticker: String::new(),
            horizon_raw: FORM.default_horizon_days.to_string(),
            indicators: IndicatorSet::new(),
            validation_error: None,
        }
    }
}

impl FormState {
    /// Validate the current fields. On failure the error is kept for inline
    /// display and nothing else changes.
    pub fn try_submit(&mut self) -> Option<ForecastRequest> {
        self.validation_error = None;
        match ForecastRequest::build(&self.ticker, &self.horizon_raw, &self.indicators) {
            Ok(request) => Some(request),
            Err(err) => {
                log::info!("Form rejected: {}", err);
                self.validation_error = Some(err);
                None
            }
        }
    }

    /// Draw the form. Returns a request when the user submitted valid input.
    pub fn show(&mut self, ui: &mut Ui) -> Option<ForecastRequest> {
        let mut submit = false;

        ui.horizontal(|ui| {
            ui.label(&UI_TEXT.form_ticker);
            let ticker = ui.add(
                TextEdit::singleline(&mut self.ticker)
                    .hint_text(FORM.ticker_placeholder)
                    .desired_width(FORM.ticker_field_width),
            );
            submit |= ticker.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

            ui.add_space(12.0);
            ui.label(&UI_TEXT.form_horizon);
            let horizon = ui.add(
                TextEdit::singleline(&mut self.horizon_raw)
                    .desired_width(FORM.horizon_field_width),
            );
            submit |= horizon.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
        });

        ui.add_space(6.0);
        ui.horizontal_wrapped(|ui| {
            ui.label_subheader(&UI_TEXT.form_indicators);
            let all: Vec<_> = self.indicators.iter().map(|(ind, _)| ind).collect();
            for ind in all {
                ui.checkbox(self.indicators.flag_mut(ind), ind.name());
            }
        });

        ui.add_space(6.0);
        if ui
            .button(ui.button_text_primary(&UI_TEXT.form_predict))
            .clicked()
        {
            submit = true;
        }

        if let Some(err) = &self.validation_error {
            ui.label_error(err.to_string());
        }

        if submit { self.try_submit() } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Indicator;

    #[test]
    fn defaults_are_empty_with_twenty_day_horizon() {
        let form = FormState::default();
        assert_eq!(form.horizon_raw, "20");
        assert!(form.ticker.is_empty());
        assert!(form.indicators.is_empty());
    }

    #[test]
    fn failed_submit_keeps_error_until_next_attempt() {
        let mut form = FormState {
            ticker: "AAPL".into(),
            ..Default::default()
        };
        assert!(form.try_submit().is_none());
        assert_eq!(form.validation_error, Some(ValidationError::NoIndicators));

        form.indicators.toggle(Indicator::Rsi);
        let req = form.try_submit().unwrap();
        assert_eq!(req.indicator_names(), vec!["RSI"]);
        assert_eq!(form.validation_error, None);
    }
}
