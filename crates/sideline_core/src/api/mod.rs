pub mod json_api;

pub use json_api::{build_plan_json, PlanRequest, PlanResponse};
