//! Reduces a day of hourly forecast data to a protection index and a status.

use serde::Serialize;

use crate::models::HourlySeries;

/// Relative humidity assumed when the provider sent none
const DEFAULT_HUMIDITY: f64 = 50.0;

/// Heat index above which heat stress starts to count
const HEAT_THRESHOLD: f64 = 27.0;
const HEAT_SCALE: f64 = 6.0;

/// Mean wind speed above which wind starts to count
const WIND_THRESHOLD: f64 = 20.0;
const WIND_SCALE: f64 = 4.0;

const RAIN_WEIGHT: f64 = 0.45;
const HEAT_WEIGHT: f64 = 0.35;
const WIND_WEIGHT: f64 = 0.4;

const MIN_PROTECTION: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Safe,
    Rainy,
    Heatwave,
    Windy,
    Danger,
}

impl Status {
    /// Picks the status from the individual hazard scores. Rules are checked in
    /// priority order and the first match wins.
    pub fn classify(rain_risk: f64, heat: f64, wind_risk: f64, risk: f64) -> Self {
        if rain_risk > 70.0 {
            Self::Rainy
        } else if heat > 60.0 {
            Self::Heatwave
        } else if wind_risk > 60.0 {
            Self::Windy
        } else if risk > 85.0 {
            Self::Danger
        } else {
            Self::Safe
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            Self::Safe => "Conditions are acceptable.",
            Self::Rainy => "Heavy rain expected. Use waterproof gear.",
            Self::Heatwave => "High heat stress. Hydrate, limit sun exposure.",
            Self::Windy => "Strong winds. Secure outdoor items.",
            Self::Danger => "Severe conditions. Stay indoors.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub protection_index: u8,
    pub rain_risk: u8,
    pub heat_index: u8,
    pub wind_risk: u8,
    pub status: Status,
    pub advice: &'static str,
}

impl RiskAssessment {
    /// Returned when the forecast carries no temperatures at all.
    pub fn no_data() -> Self {
        Self {
            protection_index: 50,
            rain_risk: 0,
            heat_index: 0,
            wind_risk: 0,
            status: Status::Safe,
            advice: "No data",
        }
    }
}

/// Scores the given hourly series.
///
/// Each hazard is normalised to 0..=100, then the overall risk is the largest
/// weighted hazard rather than their sum.
pub fn evaluate(series: &HourlySeries) -> RiskAssessment {
    let Some(t) = mean(&series.temperature) else {
        return RiskAssessment::no_data();
    };
    let rh = mean(&series.humidity).unwrap_or(DEFAULT_HUMIDITY);
    let rain = series
        .precipitation_probability
        .iter()
        .copied()
        .reduce(f64::max)
        .unwrap_or(0.0);
    let wind = mean(&series.wind_speed).unwrap_or(0.0);

    let heat = ((heat_index(t, rh) - HEAT_THRESHOLD) * HEAT_SCALE).clamp(0.0, 100.0);
    let wind_risk = ((wind - WIND_THRESHOLD) * WIND_SCALE).clamp(0.0, 100.0);
    let rain_risk = rain.clamp(0.0, 100.0);

    let risk = (rain_risk * RAIN_WEIGHT)
        .max(heat * HEAT_WEIGHT)
        .max(wind_risk * WIND_WEIGHT);
    let protection = (100.0 - risk).clamp(MIN_PROTECTION, 100.0);

    let status = Status::classify(rain_risk, heat, wind_risk, risk);

    RiskAssessment {
        protection_index: protection as u8,
        rain_risk: rain_risk as u8,
        heat_index: heat as u8,
        wind_risk: wind_risk as u8,
        status,
        advice: status.advice(),
    }
}

/// Rothfusz regression of apparent temperature from temperature and relative humidity.
pub fn heat_index(t: f64, rh: f64) -> f64 {
    let t2 = t * t;
    let rh2 = rh * rh;

    -8.784695 + 1.61139411 * t + 2.338549 * rh
        - 0.14611605 * t * rh
        - 0.012308094 * t2
        - 0.016424828 * rh2
        + 0.002211732 * t2 * rh
        + 0.00072546 * t * rh2
        - 0.000003582 * t2 * rh2
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATUSES: [Status; 5] = [
        Status::Safe,
        Status::Rainy,
        Status::Heatwave,
        Status::Windy,
        Status::Danger,
    ];

    fn series(temp: f64, humidity: f64, rain: f64, wind: f64) -> HourlySeries {
        HourlySeries {
            temperature: vec![temp; 24],
            humidity: vec![humidity; 24],
            precipitation_probability: vec![rain; 24],
            wind_speed: vec![wind; 24],
        }
    }

    fn assert_in_range(assessment: &RiskAssessment) {
        assert!((10..=100).contains(&assessment.protection_index));
        assert!(assessment.rain_risk <= 100);
        assert!(assessment.heat_index <= 100);
        assert!(assessment.wind_risk <= 100);
        assert_eq!(assessment.advice, assessment.status.advice());
    }

    #[test]
    fn empty_temperatures_yield_no_data() {
        let mut input = series(35.0, 90.0, 100.0, 80.0);
        input.temperature.clear();

        assert_eq!(evaluate(&input), RiskAssessment::no_data());
        assert_eq!(evaluate(&HourlySeries::default()), RiskAssessment::no_data());
    }

    #[test]
    fn mild_day_is_safe() {
        let assessment = evaluate(&series(20.0, 50.0, 0.0, 5.0));

        assert_eq!(
            assessment,
            RiskAssessment {
                protection_index: 100,
                rain_risk: 0,
                heat_index: 0,
                wind_risk: 0,
                status: Status::Safe,
                advice: "Conditions are acceptable.",
            }
        );
    }

    #[test]
    fn heavy_rain_is_rainy() {
        let assessment = evaluate(&series(18.0, 60.0, 90.0, 10.0));

        assert_eq!(assessment.status, Status::Rainy);
        assert_eq!(assessment.rain_risk, 90);
        // 100 - 90 * 0.45
        assert_eq!(assessment.protection_index, 59);
        assert_eq!(assessment.advice, "Heavy rain expected. Use waterproof gear.");
    }

    #[test]
    fn hot_humid_day_is_heatwave() {
        let assessment = evaluate(&series(35.0, 50.0, 0.0, 5.0));

        assert_eq!(assessment.status, Status::Heatwave);
        assert!(assessment.heat_index > 60);
        assert_eq!(assessment.rain_risk, 0);
        assert_eq!(assessment.wind_risk, 0);
    }

    #[test]
    fn strong_wind_is_windy() {
        let assessment = evaluate(&series(15.0, 50.0, 10.0, 40.0));

        assert_eq!(assessment.status, Status::Windy);
        assert_eq!(assessment.wind_risk, 80);
        // 100 - 80 * 0.4
        assert_eq!(assessment.protection_index, 68);
    }

    #[test]
    fn rain_takes_priority_over_heat() {
        let assessment = evaluate(&series(35.0, 50.0, 90.0, 5.0));

        assert!(assessment.heat_index > 60);
        assert_eq!(assessment.status, Status::Rainy);
    }

    #[test]
    fn rain_threshold_is_strict() {
        let at_threshold = evaluate(&series(20.0, 50.0, 70.0, 5.0));
        assert_eq!(at_threshold.status, Status::Safe);
        assert_eq!(at_threshold.rain_risk, 70);

        let above_threshold = evaluate(&series(20.0, 50.0, 70.0001, 5.0));
        assert_eq!(above_threshold.status, Status::Rainy);
        assert_eq!(above_threshold.rain_risk, 70);
    }

    #[test]
    fn rain_uses_the_wettest_hour() {
        let mut input = series(20.0, 50.0, 0.0, 5.0);
        input.precipitation_probability[7] = 85.0;

        assert_eq!(evaluate(&input).rain_risk, 85);
    }

    #[test]
    fn missing_secondary_series_fall_back_to_defaults() {
        let input = HourlySeries {
            temperature: vec![20.0; 24],
            ..Default::default()
        };
        let assessment = evaluate(&input);

        // Humidity defaults to 50 %, rain and wind to zero.
        assert_eq!(assessment, evaluate(&series(20.0, 50.0, 0.0, 0.0)));
        assert_eq!(assessment.status, Status::Safe);
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        let extremes = [
            series(60.0, 100.0, 250.0, 200.0),
            series(-40.0, 0.0, -20.0, 0.0),
            series(45.0, 100.0, 0.0, 0.0),
            series(0.0, 0.0, 0.0, 500.0),
        ];

        for input in &extremes {
            assert_in_range(&evaluate(input));
        }
        assert_eq!(evaluate(&extremes[0]).rain_risk, 100);
        assert_eq!(evaluate(&extremes[1]).rain_risk, 0);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let input = series(31.5, 72.0, 45.0, 22.0);

        assert_eq!(evaluate(&input), evaluate(&input));
        assert_eq!(
            serde_json::to_string(&evaluate(&input)).unwrap(),
            serde_json::to_string(&evaluate(&input)).unwrap()
        );
    }

    #[test]
    fn classify_follows_priority_order() {
        assert_eq!(Status::classify(80.0, 80.0, 80.0, 90.0), Status::Rainy);
        assert_eq!(Status::classify(10.0, 80.0, 80.0, 90.0), Status::Heatwave);
        assert_eq!(Status::classify(10.0, 10.0, 80.0, 90.0), Status::Windy);
        assert_eq!(Status::classify(10.0, 10.0, 10.0, 90.0), Status::Danger);
        assert_eq!(Status::classify(10.0, 10.0, 10.0, 85.0), Status::Safe);
    }

    #[test]
    fn every_status_has_distinct_advice() {
        let mut advice: Vec<&str> = ALL_STATUSES.iter().map(Status::advice).collect();
        advice.sort_unstable();
        advice.dedup();

        assert_eq!(advice.len(), ALL_STATUSES.len());
    }

    #[test]
    fn heat_index_matches_reference_values() {
        assert!((heat_index(20.0, 50.0) - 25.1949196).abs() < 1e-6);
        assert!((heat_index(35.0, 50.0) - 40.6754362).abs() < 1e-6);
    }

    #[test]
    fn serializes_with_uppercase_status() {
        let json = serde_json::to_value(evaluate(&series(20.0, 50.0, 0.0, 5.0))).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "protection_index": 100,
                "rain_risk": 0,
                "heat_index": 0,
                "wind_risk": 0,
                "status": "SAFE",
                "advice": "Conditions are acceptable."
            })
        );
    }
}
