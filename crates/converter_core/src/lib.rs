//! Domain logic for the temperature converter: conversion formulas,
//! input validation, number formatting, and the form state driven by
//! the GUI's submit / direction-change / clear events.

use thiserror::Error;

/// Which conversion formula applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    CelsiusToFahrenheit,
    FahrenheitToCelsius,
}

impl Direction {
    pub const ALL: [Direction; 2] = [
        Direction::CelsiusToFahrenheit,
        Direction::FahrenheitToCelsius,
    ];

    /// Human label used by the direction dropdown.
    pub fn label(self) -> &'static str {
        match self {
            Direction::CelsiusToFahrenheit => "Celsius → Fahrenheit",
            Direction::FahrenheitToCelsius => "Fahrenheit → Celsius",
        }
    }

    pub fn source_unit(self) -> &'static str {
        match self {
            Direction::CelsiusToFahrenheit => "°C",
            Direction::FahrenheitToCelsius => "°F",
        }
    }

    pub fn target_unit(self) -> &'static str {
        match self {
            Direction::CelsiusToFahrenheit => "°F",
            Direction::FahrenheitToCelsius => "°C",
        }
    }

    pub fn convert(self, value: f64) -> f64 {
        match self {
            Direction::CelsiusToFahrenheit => value * 9.0 / 5.0 + 32.0,
            Direction::FahrenheitToCelsius => (value - 32.0) * 5.0 / 9.0,
        }
    }
}

/// Input-validation failures. Both are non-fatal and surfaced inline;
/// the `Display` text is shown to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("Enter a value to convert.")]
    EmptyInput,
    #[error("Invalid value; numbers only (e.g. 37.5).")]
    InvalidNumber,
}

/// Trims surrounding whitespace and accepts a decimal comma in place of
/// a decimal point.
pub fn normalize_input(raw: &str) -> String {
    raw.trim().replace(',', ".")
}

pub fn parse_value(raw: &str) -> Result<f64, ConvertError> {
    let normalized = normalize_input(raw);
    if normalized.is_empty() {
        return Err(ConvertError::EmptyInput);
    }
    normalized
        .parse::<f64>()
        .map_err(|_| ConvertError::InvalidNumber)
}

/// Renders with at most 4 fractional digits, then strips trailing zeros
/// and a dangling decimal point (`37.5000` -> `37.5`, `100.0000` -> `100`).
pub fn format_number(x: f64) -> String {
    let rendered = format!("{x:.4}");
    if rendered.contains('.') {
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rendered
    }
}

/// The complete state behind the form. `result_text` and `error_text`
/// are derived on every submit and are never both non-empty.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub raw_input: String,
    pub direction: Direction,
    pub result_text: String,
    pub error_text: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the current input against the current direction and
    /// recomputes the derived texts. Both texts start cleared on every
    /// attempt; state is recomputed, not accumulated.
    pub fn submit(&mut self) {
        self.result_text.clear();
        self.error_text.clear();

        match parse_value(&self.raw_input) {
            Ok(value) => {
                let converted = self.direction.convert(value);
                self.result_text = format!(
                    "{} {} = {} {}",
                    format_number(value),
                    self.direction.source_unit(),
                    format_number(converted),
                    self.direction.target_unit(),
                );
            }
            Err(err) => {
                self.error_text = err.to_string();
            }
        }
    }

    /// Switches the formula. An existing result or error stays on
    /// screen until the next submit or clear.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Empties the input and both derived texts; the direction is kept.
    pub fn clear(&mut self) {
        self.raw_input.clear();
        self.result_text.clear();
        self.error_text.clear();
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
