use crate::context::ApplicationState;
use crate::daily_cost::CostReport;
use crate::date_range::DateRange;
use crate::http::model::ErrorResponse;
use axum::extract::State;
use axum::Json;

pub struct CostController;

impl CostController {
    #[tracing::instrument(skip(state))]
    pub async fn get_last_seven_days_endpoint_handler(
        State(state): State<ApplicationState>,
    ) -> Result<Json<CostReport>, ErrorResponse> {
        let date_range = DateRange::try_from(state.clock().now())?;

        tracing::info!(
            "Getting daily costs from {} to {}",
            date_range.start,
            date_range.end
        );

        let daily_costs = state
            .cost_client()
            .daily_costs(&date_range)
            .await
            .inspect_err(|err| tracing::error!("Failed to get daily costs: {err}"))?;

        Ok(Json(CostReport::new(date_range, daily_costs)))
    }
}
