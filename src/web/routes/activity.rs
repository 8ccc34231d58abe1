use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::RosterError;
use crate::services::activities_service::{self, Confirmation};
use crate::store::RosterStore;

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

pub async fn activity_signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(store): State<RosterStore>,
) -> Result<Json<Confirmation>, RosterError> {
    activities_service::sign_up(&store, &activity_name, &query.email).map(Json)
}

pub async fn remove_participant_handler(
    Path((activity_name, email)): Path<(String, String)>,
    State(store): State<RosterStore>,
) -> Result<Json<Confirmation>, RosterError> {
    activities_service::remove_participant(&store, &activity_name, &email).map(Json)
}
