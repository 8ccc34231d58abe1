use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::RosterError;
use crate::models::{Activity, Registry};
use crate::services::activities_service;
use crate::store::RosterStore;

pub async fn activities_handler(State(store): State<RosterStore>) -> Json<Registry> {
    Json(activities_service::list_activities(&store))
}

pub async fn activity_detail_handler(
    Path(activity_name): Path<String>,
    State(store): State<RosterStore>,
) -> Result<Json<Activity>, RosterError> {
    activities_service::get_activity(&store, &activity_name).map(Json)
}
