//! JSON API surface.
//!
//! The surrounding app talks to the core over versioned JSON payloads so it
//! can persist and render plans without linking against internal types.
//! Request players carry names and tints only; the core mints the ids.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::models::{Player, SubstitutionStyle, TintColor};
use crate::planner;
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub schema_version: u8,
    pub players_on_field: usize,
    pub number_of_periods: u32,
    pub period_length_minutes: u32,
    #[serde(default)]
    pub style: SubstitutionStyle,
    pub players: Vec<PlanPlayerData>,
}

#[derive(Debug, Deserialize)]
pub struct PlanPlayerData {
    pub name: String,
    #[serde(default)]
    pub tint: TintColor,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub schema_version: u8,
    pub sub_duration_seconds: f64,
    pub total_game_seconds: u32,
    pub segments: Vec<SegmentData>,
}

#[derive(Debug, Serialize)]
pub struct SegmentData {
    pub on_time_seconds: f64,
    pub off_time_seconds: f64,
    pub players: Vec<String>,
}

/// Build a substitution plan from a JSON request and return it as JSON.
pub fn build_plan_json(request_json: &str) -> Result<String> {
    let request: PlanRequest = serde_json::from_str(request_json)?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(CoreError::InvalidParameter(format!(
            "unsupported schema_version {} (expected {})",
            request.schema_version, SCHEMA_VERSION
        )));
    }
    if request.players_on_field == 0 {
        return Err(CoreError::InvalidParameter("players_on_field must be >= 1".into()));
    }
    if request.number_of_periods == 0 || request.period_length_minutes == 0 {
        return Err(CoreError::InvalidParameter(
            "number_of_periods and period_length_minutes must be >= 1".into(),
        ));
    }

    let players: Vec<Player> = request
        .players
        .iter()
        .map(|data| Player::with_tint(data.name.clone(), data.tint))
        .collect();

    let plan = planner::build_plan(
        &players,
        request.players_on_field,
        request.period_length_minutes,
        request.number_of_periods,
        request.style,
    );

    let response = PlanResponse {
        schema_version: SCHEMA_VERSION,
        sub_duration_seconds: plan.sub_duration,
        total_game_seconds: request.period_length_minutes * request.number_of_periods * 60,
        segments: plan
            .segments
            .iter()
            .map(|segment| SegmentData {
                on_time_seconds: segment.on_time,
                off_time_seconds: segment.off_time,
                players: segment.players.iter().map(|player| player.name.clone()).collect(),
            })
            .collect(),
    };

    Ok(serde_json::to_string(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(players: usize, style: &str) -> String {
        json!({
            "schema_version": 1,
            "players_on_field": 4,
            "number_of_periods": 4,
            "period_length_minutes": 10,
            "style": style,
            "players": (0..players)
                .map(|i| json!({"name": format!("Player {i}")}))
                .collect::<Vec<_>>(),
        })
        .to_string()
    }

    #[test]
    fn test_build_plan_json_round_trip() {
        let response = build_plan_json(&request(9, "short")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["total_game_seconds"], 2400);
        assert_eq!(parsed["segments"].as_array().unwrap().len(), 18);
        assert_eq!(parsed["segments"][0]["players"][0], "Player 0");
        assert_eq!(parsed["segments"][1]["players"][0], "Player 4");
    }

    #[test]
    fn test_empty_roster_gives_empty_segments() {
        let response = build_plan_json(&request(0, "long")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed["sub_duration_seconds"], 0.0);
        assert!(parsed["segments"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_schema_version_mismatch_is_rejected() {
        let bad = request(9, "short").replace("\"schema_version\":1", "\"schema_version\":9");
        let err = build_plan_json(&bad).unwrap_err();
        assert!(matches!(err, CoreError::InvalidParameter(_)));
    }

    #[test]
    fn test_zero_players_on_field_is_rejected() {
        let bad = request(9, "short").replace("\"players_on_field\":4", "\"players_on_field\":0");
        let err = build_plan_json(&bad).unwrap_err();
        assert!(matches!(err, CoreError::InvalidParameter(_)));
    }

    #[test]
    fn test_malformed_json_maps_to_deserialization_error() {
        let err = build_plan_json("{not json").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }
}
