/// Clock state and tournament reset operations.
pub mod clock_service;
/// OpenAPI document aggregation.
pub mod documentation;
/// Health reporting.
pub mod health_service;
/// Player roster operations.
pub mod roster_service;
/// Blind schedule operations.
pub mod schedule_service;
