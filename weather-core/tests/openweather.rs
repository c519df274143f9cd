//! OpenWeather client behaviour against a stub server.

use weather_core::provider::openweather::OpenWeatherProvider;
use weather_core::{FetchError, WeatherProvider};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn current_weather_body() -> serde_json::Value {
    serde_json::json!({
        "name": "London",
        "dt": 1_735_787_045,
        "main": { "temp": 15.23, "feels_like": 14.8, "humidity": 72, "pressure": 1012 },
        "weather": [
            { "id": 803, "main": "Clouds", "description": "nublado" },
            { "id": 500, "main": "Rain", "description": "chuva leve" }
        ],
        "wind": { "speed": 4.1 }
    })
}

fn provider_for(server: &MockServer) -> OpenWeatherProvider {
    OpenWeatherProvider::new("TEST_KEY".into()).with_base_url(server.uri())
}

#[tokio::test]
async fn fetches_current_weather_with_metric_units_and_locale() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "London"))
        .and(query_param("appid", "TEST_KEY"))
        .and(query_param("units", "metric"))
        .and(query_param("lang", "pt_br"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_weather_body()))
        .expect(1)
        .mount(&server)
        .await;

    let weather = provider_for(&server)
        .current_weather("London")
        .await
        .expect("success");

    assert_eq!(weather.temperature_c, 15.23);
    assert_eq!(weather.feels_like_c, 14.8);
    assert_eq!(weather.humidity_pct, 72);
    assert_eq!(weather.description.as_deref(), Some("nublado"));
}

#[tokio::test]
async fn missing_weather_array_yields_no_description() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "main": { "temp": 1.0, "feels_like": -2.5, "humidity": 90 }
        })))
        .mount(&server)
        .await;

    let weather = provider_for(&server)
        .current_weather("Reykjavik")
        .await
        .expect("success");

    assert_eq!(weather.description, None);
}

#[tokio::test]
async fn not_found_is_passed_through_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .current_weather("Atlantis")
        .await
        .unwrap_err();

    match err {
        FetchError::Upstream { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "city not found");
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_key_reports_upstream_401() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key. Please see https://openweathermap.org/faq#error401 for more info."
        })))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .current_weather("London")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Upstream { status: 401, ref message } if message.starts_with("Invalid API key")));
}

#[tokio::test]
async fn non_json_error_body_is_used_as_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .current_weather("London")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Upstream { status: 503, ref message } if message == "Service Unavailable"));
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"unexpected\": true}"))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .current_weather("London")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn unreachable_provider_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let provider =
        OpenWeatherProvider::new("TEST_KEY".into()).with_base_url(format!("http://{addr}"));

    let err = provider.current_weather("London").await.unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)));
}
