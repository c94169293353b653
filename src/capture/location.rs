/// Position lookup capability
///
/// Desktop stand-in for mobile geolocation: a consent prompt followed by a
/// single network position lookup. One call performs exactly one read; the
/// user re-triggers the operation to retry.

use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};
use serde::Deserialize;

use crate::state::data::Coordinate;

use super::{LocationError, PositionRequest};

/// Geolocation endpoint (network position, no API key required)
const ENDPOINT: &str = "http://ip-api.com/json/?fields=status,message,lat,lon";

/// Wire format of the endpoint response
#[derive(Debug, Deserialize)]
struct PositionResponse {
    status: String,
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Ask the user for location access
async fn request_permission() -> bool {
    let answer = AsyncMessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title("Location Access")
        .set_description("Allow this app to read your current location?")
        .set_buttons(MessageButtons::YesNo)
        .show()
        .await;

    matches!(answer, MessageDialogResult::Yes)
}

/// Fetch the current position
///
/// The consent prompt is skipped when access was already granted this
/// session. The network lookup has a single resolution; the requested
/// accuracy only shows up in the log line.
pub async fn current_position(
    already_granted: bool,
    request: PositionRequest,
) -> Result<Coordinate, LocationError> {
    if !already_granted && !request_permission().await {
        return Err(LocationError::PermissionDenied);
    }

    println!("🛰️  Position lookup ({:?} accuracy)...", request.accuracy);

    let response = reqwest::get(ENDPOINT)
        .await
        .map_err(|e| LocationError::Unavailable(e.to_string()))?
        .json::<PositionResponse>()
        .await
        .map_err(|e| LocationError::Unavailable(e.to_string()))?;

    if response.status != "success" {
        let reason = response
            .message
            .unwrap_or_else(|| "lookup rejected".to_string());
        return Err(LocationError::Unavailable(reason));
    }

    match (response.lat, response.lon) {
        (Some(latitude), Some(longitude)) => {
            let coordinate = Coordinate {
                latitude,
                longitude,
            };
            println!("📍 Position fix: {}", coordinate.display_short());
            Ok(coordinate)
        }
        _ => Err(LocationError::Unavailable(
            "response had no coordinates".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_response() {
        let json = r#"{"status":"success","lat":43.6045,"lon":1.4442}"#;
        let response: PositionResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.status, "success");
        assert_eq!(response.lat, Some(43.6045));
        assert_eq!(response.lon, Some(1.4442));
    }

    #[test]
    fn test_parse_failure_response_without_coordinates() {
        let json = r#"{"status":"fail","message":"private range"}"#;
        let response: PositionResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.status, "fail");
        assert_eq!(response.message.as_deref(), Some("private range"));
        assert_eq!(response.lat, None);
    }
}
