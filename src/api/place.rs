//! Place Endpoints

use crate::error::ApiResult;
use crate::models::PlaceId;
use super::{ApiClient, ApiRequest, Method, Transport};

pub fn visit_path(place_id: PlaceId) -> String {
    format!("/places/{}/visit", place_id)
}

impl<T: Transport> ApiClient<T> {
    /// PATCH /places/{id}/visit with an empty body
    pub async fn visit_place(&self, place_id: PlaceId) -> ApiResult<()> {
        self.send(ApiRequest::new(Method::Patch, visit_path(place_id)))
            .await?
            .error_for_status()?;
        Ok(())
    }
}
