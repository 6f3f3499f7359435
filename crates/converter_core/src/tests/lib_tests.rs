use super::*;

fn submitted(raw: &str, direction: Direction) -> FormState {
    let mut state = FormState::new();
    state.raw_input = raw.to_string();
    state.set_direction(direction);
    state.submit();
    state
}

#[test]
fn celsius_to_fahrenheit_scenario() {
    let state = submitted("0", Direction::CelsiusToFahrenheit);
    assert_eq!(state.result_text, "0 °C = 32 °F");
    assert!(state.error_text.is_empty());
}

#[test]
fn fahrenheit_to_celsius_scenario() {
    let state = submitted("212", Direction::FahrenheitToCelsius);
    assert_eq!(state.result_text, "212 °F = 100 °C");
    assert!(state.error_text.is_empty());
}

#[test]
fn round_trip_stays_within_rounding_tolerance() {
    for value in [-40.0_f64, 0.0, 0.5, 36.6, 37.5, 100.0, 451.0] {
        let fahrenheit = Direction::CelsiusToFahrenheit.convert(value);
        let rounded: f64 = format_number(fahrenheit).parse().unwrap();
        let back = Direction::FahrenheitToCelsius.convert(rounded);
        assert!(
            (back - value).abs() < 1e-4,
            "{value} round-tripped to {back}"
        );
    }
}

#[test]
fn format_number_strips_trailing_zeros_and_point() {
    assert_eq!(format_number(100.0), "100");
    assert_eq!(format_number(37.5), "37.5");
    assert_eq!(format_number(0.1 / 3.0), "0.0333");
    assert_eq!(format_number(-40.0), "-40");
}

#[test]
fn decimal_comma_parses_like_decimal_point() {
    let comma = submitted("37,5", Direction::CelsiusToFahrenheit);
    let point = submitted("37.5", Direction::CelsiusToFahrenheit);
    assert_eq!(comma.result_text, point.result_text);
    assert_eq!(comma.result_text, "37.5 °C = 99.5 °F");
}

#[test]
fn whitespace_only_input_reports_empty_input() {
    let state = submitted("   ", Direction::CelsiusToFahrenheit);
    assert_eq!(state.error_text, ConvertError::EmptyInput.to_string());
    assert!(state.result_text.is_empty());
}

#[test]
fn non_numeric_input_reports_invalid_number() {
    let state = submitted("abc", Direction::FahrenheitToCelsius);
    assert_eq!(state.error_text, ConvertError::InvalidNumber.to_string());
    assert!(state.result_text.is_empty());
}

#[test]
fn parse_value_classifies_both_failures() {
    assert_eq!(parse_value(""), Err(ConvertError::EmptyInput));
    assert_eq!(parse_value(" \t "), Err(ConvertError::EmptyInput));
    assert_eq!(parse_value("12x"), Err(ConvertError::InvalidNumber));
    assert_eq!(parse_value(" -17.8 "), Ok(-17.8));
    assert_eq!(parse_value("36,6"), Ok(36.6));
}

#[test]
fn submit_replaces_a_previous_error_with_a_result() {
    let mut state = submitted("abc", Direction::CelsiusToFahrenheit);
    assert!(!state.error_text.is_empty());

    state.raw_input = "37.5".to_string();
    state.submit();
    assert_eq!(state.result_text, "37.5 °C = 99.5 °F");
    assert!(state.error_text.is_empty());
}

#[test]
fn result_and_error_are_never_both_set() {
    for raw in ["", "   ", "abc", "0", "212", "37,5"] {
        let state = submitted(raw, Direction::CelsiusToFahrenheit);
        assert!(
            state.result_text.is_empty() || state.error_text.is_empty(),
            "both texts set for input {raw:?}"
        );
    }
}

#[test]
fn clear_empties_texts_but_keeps_direction() {
    let mut state = submitted("212", Direction::FahrenheitToCelsius);
    assert!(!state.result_text.is_empty());

    state.clear();
    assert!(state.raw_input.is_empty());
    assert!(state.result_text.is_empty());
    assert!(state.error_text.is_empty());
    assert_eq!(state.direction, Direction::FahrenheitToCelsius);
}

#[test]
fn direction_change_keeps_stale_result() {
    let mut state = submitted("0", Direction::CelsiusToFahrenheit);
    let before = state.result_text.clone();

    state.set_direction(Direction::FahrenheitToCelsius);
    assert_eq!(state.result_text, before);
    assert_eq!(state.direction, Direction::FahrenheitToCelsius);
}
