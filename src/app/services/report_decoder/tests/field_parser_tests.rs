//! Tests for individual weather group parsers

use super::*;
use crate::Error;
use crate::app::models::{Intensity, SkyCover, WindUnit};
use crate::app::services::report_decoder::field_parsers::*;

mod wind {
    use super::*;

    #[test]
    fn test_standard_wind_group() {
        let wind = parse_wind("35005KT").unwrap();
        assert_eq!(wind.direction, Some(350));
        assert_eq!(wind.speed_knots, 5);
        assert_eq!(wind.gust_knots, None);
        assert_eq!(wind.unit, WindUnit::Knots);
        assert_eq!(wind.description, "N at 5 kt");
    }

    #[test]
    fn test_gusting_wind_group() {
        let wind = parse_wind("22028G35KT").unwrap();
        assert_eq!(wind.direction, Some(220));
        assert_eq!(wind.speed_knots, 28);
        assert_eq!(wind.gust_knots, Some(35));
        assert_eq!(wind.description, "SW at 28 kt gusting to 35");
    }

    #[test]
    fn test_three_digit_speed_and_mps() {
        let wind = parse_wind("090105G120MPS").unwrap();
        assert_eq!(wind.speed_knots, 105);
        assert_eq!(wind.gust_knots, Some(120));
        assert_eq!(wind.unit, WindUnit::MetersPerSecond);
        assert_eq!(wind.description, "E at 105 mps gusting to 120");
    }

    #[test]
    fn test_variable_wind_group() {
        let wind = parse_wind("VRB03KT").unwrap();
        assert_eq!(wind.direction, None);
        assert_eq!(wind.speed_knots, 3);
        assert!(wind.description.contains("Variable"));
        assert_eq!(wind.description, "Variable at 3 kt");
    }

    #[test]
    fn test_unmatched_wind_defaults_to_calm() {
        for token in ["10SM", "ABCDE", "3505KT", "35005KMH"] {
            let wind = parse_wind(token).unwrap();
            assert_eq!(wind.direction, None, "token {}", token);
            assert_eq!(wind.speed_knots, 0);
            assert_eq!(wind.unit, WindUnit::Knots);
            assert_eq!(wind.description, "Calm");
        }
    }

    #[test]
    fn test_non_ascii_digits_default_to_calm() {
        let wind = parse_wind("٣٥٠٠٥KT").unwrap();
        assert_eq!(wind.direction, None);
        assert_eq!(wind.speed_knots, 0);
        assert_eq!(wind.description, "Calm");
    }

    #[test]
    fn test_reported_calm() {
        let wind = parse_wind("00000KT").unwrap();
        assert_eq!(wind.direction, Some(0));
        assert_eq!(wind.speed_knots, 0);
        assert_eq!(wind.description, "Calm");
    }
}

mod visibility {
    use super::*;

    #[test]
    fn test_whole_statute_miles_advances_index() {
        let line = tokens(RICHMOND_CLEAR);
        let (visibility, next) = parse_visibility(&line, 3, 10.0).unwrap();
        assert_eq!(visibility.value_statute_miles, 10.0);
        assert_eq!(visibility.description, "10 statute miles");
        assert_eq!(next, 4);
    }

    #[test]
    fn test_fractional_statute_miles() {
        let line = tokens("KXYZ 010000Z 00000KT 1/2SM FG VV002 M01/M01 A3012");
        let (visibility, next) = parse_visibility(&line, 3, 10.0).unwrap();
        assert_eq!(visibility.value_statute_miles, 0.5);
        assert_eq!(visibility.description, "0.5 statute miles");
        assert_eq!(next, 4);
    }

    #[test]
    fn test_decimal_and_prefixed_statute_miles() {
        let line = tokens("KXYZ 010000Z 00000KT 1.5SM");
        let (visibility, _) = parse_visibility(&line, 3, 10.0).unwrap();
        assert_eq!(visibility.value_statute_miles, 1.5);

        let line = tokens("KXYZ 010000Z 00000KT M1/4SM");
        let (visibility, _) = parse_visibility(&line, 3, 10.0).unwrap();
        assert_eq!(visibility.value_statute_miles, 0.25);

        let line = tokens("KXYZ 010000Z 00000KT P6SM");
        let (visibility, _) = parse_visibility(&line, 3, 10.0).unwrap();
        assert_eq!(visibility.value_statute_miles, 6.0);
    }

    #[test]
    fn test_missing_visibility_keeps_index() {
        let line = tokens("KXYZ 010000Z 00000KT FEW020 10/05 A2992");
        let (visibility, next) = parse_visibility(&line, 3, 10.0).unwrap();
        assert_eq!(visibility.value_statute_miles, 10.0);
        assert_eq!(visibility.description, "10+ statute miles");
        assert_eq!(next, 3);
    }

    #[test]
    fn test_unreadable_statute_mile_token_defaults_but_advances() {
        let line = tokens("KXYZ 010000Z 00000KT MSM FEW020 10/05");
        let (visibility, next) = parse_visibility(&line, 3, 10.0).unwrap();
        assert_eq!(visibility.description, "10+ statute miles");
        assert_eq!(next, 4);
    }

    #[test]
    fn test_non_ascii_digit_visibility_defaults() {
        let line = tokens("KXYZ 010000Z 00000KT ٣SM FEW020 10/05");
        let (visibility, next) = parse_visibility(&line, 3, 10.0).unwrap();
        assert_eq!(visibility.description, "10+ statute miles");
        assert_eq!(next, 4);
    }

    #[test]
    fn test_zero_denominator_rejected() {
        let line = tokens("KXYZ 010000Z 00000KT 1/0SM FEW020 10/05");
        let result = parse_visibility(&line, 3, 10.0);
        assert!(matches!(result, Err(Error::InvalidVisibility { .. })));
    }

    #[test]
    fn test_fraction_is_never_evaluated_as_expression() {
        assert_eq!(parse_statute_miles("3/4", "3/4SM").unwrap(), 0.75);
        assert!(parse_statute_miles("3/4/2", "3/4/2SM").is_err());
        assert!(parse_statute_miles("1+1", "1+1SM").is_err());
    }
}

mod sky_condition {
    use super::*;

    #[test]
    fn test_first_sky_group_wins() {
        let line = tokens(JFK_MIST);
        let sky = parse_sky_condition(&line, 4);
        assert_eq!(sky.code, SkyCover::Bkn);
        assert_eq!(sky.description, "Broken Clouds");
    }

    #[test]
    fn test_vertical_visibility() {
        let line = tokens("KXYZ 010000Z 00000KT 1/4SM FG VV001 M02/M02 A3020");
        let sky = parse_sky_condition(&line, 4);
        assert_eq!(sky.code, SkyCover::Vv);
        assert_eq!(sky.description, "Vertical Visibility");
    }

    #[test]
    fn test_default_clear_when_absent() {
        let line = tokens("KXYZ 010000Z 00000KT 10SM 10/05 A2992");
        let sky = parse_sky_condition(&line, 4);
        assert_eq!(sky.code, SkyCover::Clr);
        assert_eq!(sky.description, "Clear");
    }

    #[test]
    fn test_scan_starts_at_given_index() {
        let line = tokens("KXYZ 010000Z 00000KT 10SM OVC010 FEW020");
        assert_eq!(parse_sky_condition(&line, 5).code, SkyCover::Few);
    }
}

mod temperature {
    use super::*;

    #[test]
    fn test_negative_dew_point() {
        let temperature = parse_temperature(&tokens(RICHMOND_CLEAR)).unwrap();
        assert_eq!(temperature.celsius, 6);
        assert_eq!(temperature.dew_point_celsius, -2);
        assert_eq!(temperature.description, "6°C / -2°C");
    }

    #[test]
    fn test_both_negative() {
        let temperature = parse_temperature(&tokens("KXYZ 010000Z 00000KT 10SM CLR M15/M20 A3050")).unwrap();
        assert_eq!(temperature.celsius, -15);
        assert_eq!(temperature.dew_point_celsius, -20);
    }

    #[test]
    fn test_visibility_fraction_is_not_temperature() {
        let temperature = parse_temperature(&tokens("KXYZ 010000Z 00000KT 1/2SM FG VV002 A3012")).unwrap();
        assert_eq!(temperature.celsius, 0);
        assert_eq!(temperature.dew_point_celsius, 0);
        assert_eq!(temperature.description, "0°C / 0°C");
    }

    #[test]
    fn test_non_ascii_digit_temperature_ignored() {
        let temperature = parse_temperature(&tokens("KXYZ 010000Z 00000KT 10SM CLR ١٠/٠٥ A2992")).unwrap();
        assert_eq!(temperature.celsius, 0);
        assert_eq!(temperature.dew_point_celsius, 0);
    }

    #[test]
    fn test_overflowing_temperature_rejected() {
        let result = parse_temperature(&tokens("KXYZ 010000Z 00000KT 10SM CLR 99999999999/01"));
        assert!(matches!(result, Err(Error::InvalidTemperature { .. })));
    }
}

mod pressure {
    use super::*;

    #[test]
    fn test_altimeter_group() {
        let pressure = parse_pressure(&tokens(RICHMOND_CLEAR)).unwrap();
        assert!((pressure.inches_of_mercury - 29.80).abs() < 1e-9);
        assert_eq!(pressure.description, "29.80 inHg");
    }

    #[test]
    fn test_default_when_absent() {
        let pressure = parse_pressure(&tokens("KXYZ 010000Z 00000KT 10SM CLR 10/05")).unwrap();
        assert_eq!(pressure.inches_of_mercury, 29.92);
        assert_eq!(pressure.description, "29.92 inHg");
    }

    #[test]
    fn test_short_a_tokens_ignored() {
        let pressure = parse_pressure(&tokens("KXYZ 010000Z 00000KT 10SM CLR A3001 RMK AO2")).unwrap();
        assert!((pressure.inches_of_mercury - 30.01).abs() < 1e-9);
    }

    #[test]
    fn test_non_numeric_a_tokens_are_not_altimeter() {
        for line in [
            "KXYZ 010000Z 00000KT 10SM CLR A29X2",
            "KXYZ 010000Z 00000KT 10SM CLR A+992",
            "KXYZ 010000Z 00000KT 10SM CLR 10/05 RMK LTG DSNT ALQDS",
        ] {
            let pressure = parse_pressure(&tokens(line)).unwrap();
            assert_eq!(pressure.inches_of_mercury, 29.92, "{}", line);
        }
    }

    #[test]
    fn test_altimeter_found_after_other_a_tokens() {
        let pressure = parse_pressure(&tokens("KXYZ 010000Z 00000KT 10SM CLR ACSLW A3005")).unwrap();
        assert!((pressure.inches_of_mercury - 30.05).abs() < 1e-9);
    }

    #[test]
    fn test_non_ascii_digit_altimeter_ignored() {
        let pressure = parse_pressure(&tokens("KXYZ 010000Z 00000KT 10SM CLR A٢٩٩٢")).unwrap();
        assert_eq!(pressure.inches_of_mercury, 29.92);
    }
}

mod remarks {
    use super::*;

    #[test]
    fn test_remarks_after_marker() {
        assert_eq!(parse_remarks(&tokens(RICHMOND_CLEAR)), "AO2 SLP096");
    }

    #[test]
    fn test_no_remarks() {
        assert_eq!(parse_remarks(&tokens(DENVER_THUNDERSTORM)), "");
    }

    #[test]
    fn test_trailing_marker() {
        assert_eq!(parse_remarks(&tokens("KXYZ 010000Z 00000KT 10SM CLR RMK")), "");
    }
}

mod phenomena {
    use super::*;

    #[test]
    fn test_heavy_thunderstorm_rain() {
        let phenomena = parse_phenomena(&tokens(DENVER_THUNDERSTORM), 4);
        assert_eq!(phenomena.len(), 1);
        assert_eq!(phenomena[0].token, "+TSRA");
        assert_eq!(phenomena[0].intensity, Intensity::Heavy);
        assert_eq!(phenomena[0].codes, vec!["TS", "RA"]);
        assert_eq!(phenomena[0].description, "Heavy Thunderstorm Rain");
    }

    #[test]
    fn test_multiple_groups_stop_at_sky() {
        let line = tokens("KXYZ 010000Z 00000KT 2SM -DZ BR OVC004 VCSH 10/09 A2990");
        let phenomena = parse_phenomena(&line, 4);
        let descriptions: Vec<&str> = phenomena.iter().map(|p| p.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Light Drizzle", "Mist"]);
    }

    #[test]
    fn test_unknown_codes_ignored() {
        assert!(parse_phenomenon("UP").is_none());
        assert!(parse_phenomenon("+").is_none());
        assert!(parse_phenomenon("AO2").is_none());
        assert!(parse_phenomenon("10/05").is_none());
        assert_eq!(parse_phenomenon("VCSH").unwrap().description, "Vicinity Showers");
    }
}
