use contracts::domain::a002_opportunity::OpportunityId;
use contracts::domain::a003_opportunity_line_item::{OpportunityLineItem, OpportunityLineItemId};
use contracts::domain::common::AggregateId;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch all line items attached to an opportunity
pub async fn fetch_opportunity_lines(
    opportunity_id: OpportunityId,
) -> Result<Vec<OpportunityLineItem>, String> {
    let response = Request::get(&api_url(&format!(
        "/api/opportunity/{}/lines",
        opportunity_id.as_string()
    )))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to fetch opportunity lines: {}",
            response.status()
        ));
    }

    response
        .json::<Vec<OpportunityLineItem>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete one line item record
pub async fn delete_line_item(id: OpportunityLineItemId) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!(
        "/api/opportunity_line_item/{}",
        id.as_string()
    )))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        // платформа кладёт причину отказа в тело {"error": "..."}
        if let Ok(body) = response.json::<serde_json::Value>().await {
            if let Some(message) = body["error"].as_str() {
                return Err(message.to_string());
            }
        }
        return Err(format!("Failed to delete line item: {}", response.status()));
    }

    Ok(())
}
