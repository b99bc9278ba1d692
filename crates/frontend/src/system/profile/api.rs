use contracts::system::profile::CurrentProfile;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the current user's profile classification
pub async fn fetch_current_profile() -> Result<CurrentProfile, String> {
    let response = Request::get(&api_url("/api/system/profile/current"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch profile: {}", response.status()));
    }

    response
        .json::<CurrentProfile>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
