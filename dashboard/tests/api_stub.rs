use dashboard::api::ApiClient;
use scopecore::engine::{TrackForm, TrackManager};
use scopecore::error::FetchError;
use serde_json::json;
use std::sync::{Arc, Mutex};
use warp::Filter;

type PushLog = Arc<Mutex<Vec<serde_json::Value>>>;

// In-process stand-in for the simulation backend. The state document is
// deliberately sparse and the motion endpoint always fails, matching the
// conditions the client has to shrug off.
async fn spawn_stub() -> (String, PushLog) {
    let pushes: PushLog = Arc::new(Mutex::new(Vec::new()));
    let pushes_for_filter = pushes.clone();
    let push_filter = warp::any().map(move || pushes_for_filter.clone());

    let config = warp::path!("api" / "config").and(warp::get()).map(|| {
        warp::reply::json(&json!({
            "prf_hz": 1000,
            "max_range_km": 240.0,
            "motion_enabled": false
        }))
    });

    let platforms = warp::path!("api" / "platforms").and(warp::get()).map(|| {
        warp::reply::json(&json!({
            "platforms": [
                {"id": 1, "name": "F-16", "profiles": [
                    {"id": 10, "profile_name": "patrol"}
                ]}
            ]
        }))
    });

    let state = warp::path!("api" / "state").and(warp::get()).map(|| {
        warp::reply::json(&json!({
            "frame_index": 5,
            "targets": [{"target_id": "t-001", "x_m": 120000.0, "y_m": 0.0}]
        }))
    });

    let tracks = warp::path!("api" / "custom-tracks")
        .and(warp::post())
        .and(warp::body::json())
        .and(push_filter)
        .map(|body: serde_json::Value, pushes: PushLog| {
            pushes.lock().unwrap().push(body);
            warp::reply::json(&json!({"count": 0}))
        });

    let motion = warp::path!("api" / "motion").and(warp::post()).map(|| {
        warp::reply::with_status(
            warp::reply(),
            warp::http::StatusCode::INTERNAL_SERVER_ERROR,
        )
    });

    let routes = config.or(platforms).or(state).or(tracks).or(motion);
    let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    (format!("http://{addr}"), pushes)
}

#[tokio::test]
async fn one_shot_loads_decode_reference_data() {
    let (base, _) = spawn_stub().await;
    let api = ApiClient::new(base);

    let config = api.fetch_config().await.unwrap();
    assert_eq!(config.prf_hz, Some(1000));
    assert_eq!(config.max_range_m(), 240_000.0);

    let catalog = api.fetch_platforms().await.unwrap();
    assert_eq!(catalog.platforms.len(), 1);
    assert_eq!(catalog.platforms[0].profiles[0].profile_name, "patrol");
}

#[tokio::test]
async fn sparse_snapshot_decodes_with_defaults() {
    let (base, _) = spawn_stub().await;
    let api = ApiClient::new(base);

    let snapshot = api.fetch_state().await.unwrap();
    assert_eq!(snapshot.frame_index, 5);
    assert!(!snapshot.motion_enabled);
    assert!(snapshot.asterix48.is_empty());
    assert!(snapshot.custom_targets.is_empty());
    assert_eq!(snapshot.total_targets(), 1);
}

#[tokio::test]
async fn clearing_mirrors_a_single_empty_array() {
    let (base, pushes) = spawn_stub().await;
    let api = ApiClient::new(base);

    let mut manager = TrackManager::new();
    let form = TrackForm {
        platform_id: Some(1),
        profile_name: "patrol".into(),
        ..Default::default()
    };

    let first = manager.add(&form).unwrap();
    api.post_custom_tracks(&first).await.unwrap();
    let cleared = manager.clear().unwrap();
    api.post_custom_tracks(&cleared).await.unwrap();

    let recorded = pushes.lock().unwrap();
    assert_eq!(recorded.len(), 2);
    assert_eq!(recorded[0].as_array().unwrap().len(), 1);
    assert_eq!(recorded[0][0]["track_id"], 1);
    assert_eq!(recorded[1], json!([]));
}

#[tokio::test]
async fn failing_motion_push_surfaces_as_transport_error() {
    let (base, _) = spawn_stub().await;
    let api = ApiClient::new(base);

    let error = api.post_motion(true).await.unwrap_err();
    assert!(matches!(error, FetchError::Transport(_)));
}

#[tokio::test]
async fn dead_backend_is_a_transport_error() {
    // Nothing listens on the discard port.
    let api = ApiClient::new("http://127.0.0.1:9");
    let error = api.fetch_state().await.unwrap_err();
    assert!(matches!(error, FetchError::Transport(_)));
}
