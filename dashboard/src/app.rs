use crate::api::ApiClient;
use crate::scope::RadarScope;
use iced::{
    time,
    widget::{
        button, column, pick_list, row, scrollable, text, text_input, Canvas, Column, Container,
    },
    Alignment, Element, Length, Subscription, Task, Theme,
};
use scopecore::engine::{SyncEngine, TrackForm, TrackManager};
use scopecore::error::FetchError;
use scopecore::model::config::DEFAULT_MAX_RANGE_KM;
use scopecore::model::{CustomTrack, Platform, PlatformCatalog, SensorConfig, Snapshot};
use scopecore::projection::{project, ScopePoint, ScopeProjector};
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub fn application_title(_: &Dashboard) -> String {
    "Phoenix Radar Dashboard".into()
}

pub fn application_subscription(_: &Dashboard) -> Subscription<Message> {
    time::every(Duration::from_millis(200)).map(|_| Message::Poll)
}

pub fn application_theme(_: &Dashboard) -> Theme {
    Theme::Dark
}

#[derive(Debug)]
pub struct Dashboard {
    api: ApiClient,
    config: Option<SensorConfig>,
    platforms: Vec<Platform>,
    engine: SyncEngine,
    tracks: TrackManager,
    form: TrackForm,
    projector: ScopeProjector,
    scope_points: Vec<ScopePoint>,
}

#[derive(Debug, Clone)]
pub enum Message {
    ConfigFetched(Result<SensorConfig, FetchError>),
    PlatformsFetched(Result<PlatformCatalog, FetchError>),
    Poll,
    StateFetched(Result<Snapshot, FetchError>),
    MotionToggled,
    MotionPushed(Result<(), FetchError>),
    PlatformSelected(PlatformChoice),
    ProfileSelected(String),
    RangeInputChanged(String),
    AzimuthInputChanged(String),
    HeadingInputChanged(String),
    TrackAdded,
    TrackRemoved(usize),
    TracksCleared,
    TracksPushed(Result<(), FetchError>),
}

/// Pick-list entry for the platform selector.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformChoice {
    pub id: u32,
    pub name: String,
}

impl fmt::Display for PlatformChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Dashboard {
    pub fn boot() -> (Self, Task<Message>) {
        let api = ApiClient::from_env();
        let state = Dashboard {
            api: api.clone(),
            config: None,
            platforms: Vec::new(),
            engine: SyncEngine::new(),
            tracks: TrackManager::new(),
            form: TrackForm::default(),
            projector: ScopeProjector::new(),
            scope_points: Vec::new(),
        };
        // One-shot reference loads plus an immediate first poll; the
        // subscription takes over from there.
        let loads = Task::batch(vec![
            Task::perform(fetch_config(api.clone()), Message::ConfigFetched),
            Task::perform(fetch_platforms(api.clone()), Message::PlatformsFetched),
            Task::perform(fetch_state(api), Message::StateFetched),
        ]);
        (state, loads)
    }

    pub fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::ConfigFetched(Ok(config)) => {
                state.engine.seed_motion(config.motion_enabled);
                state.config = Some(config);
                state.refresh_scope();
                Task::none()
            }
            Message::ConfigFetched(Err(error)) => {
                // Placeholder values render instead; no retry.
                log::debug!("config load abandoned: {error}");
                Task::none()
            }
            Message::PlatformsFetched(Ok(catalog)) => {
                state.platforms = catalog.platforms;
                state.form.seed_from_catalog(&state.platforms);
                Task::none()
            }
            Message::PlatformsFetched(Err(error)) => {
                log::debug!("catalog load abandoned: {error}");
                Task::none()
            }
            Message::Poll => Task::perform(fetch_state(state.api.clone()), Message::StateFetched),
            Message::StateFetched(Ok(snapshot)) => {
                state.engine.apply(snapshot);
                state.refresh_scope();
                Task::none()
            }
            Message::StateFetched(Err(error)) => {
                state.engine.fail(&error);
                Task::none()
            }
            Message::MotionToggled => {
                let enabled = state.engine.toggle_motion();
                Task::perform(push_motion(state.api.clone(), enabled), Message::MotionPushed)
            }
            Message::MotionPushed(result) | Message::TracksPushed(result) => {
                if let Err(error) = result {
                    log::debug!("mutation push abandoned: {error}");
                }
                Task::none()
            }
            Message::PlatformSelected(choice) => {
                state.form.select_platform(choice.id, &state.platforms);
                Task::none()
            }
            Message::ProfileSelected(profile_name) => {
                state.form.select_profile(profile_name);
                Task::none()
            }
            Message::RangeInputChanged(value) => {
                state.form.range_input = value;
                Task::none()
            }
            Message::AzimuthInputChanged(value) => {
                state.form.azimuth_input = value;
                Task::none()
            }
            Message::HeadingInputChanged(value) => {
                state.form.heading_input = value;
                Task::none()
            }
            Message::TrackAdded => {
                let due = state.tracks.add(&state.form);
                state.schedule_push(due)
            }
            Message::TrackRemoved(index) => {
                let due = state.tracks.remove(index);
                state.schedule_push(due)
            }
            Message::TracksCleared => {
                let due = state.tracks.clear();
                state.schedule_push(due)
            }
        }
    }

    pub fn view(state: &Self) -> Element<'_, Message> {
        let snapshot = state.engine.snapshot();
        let config = state.config.as_ref();
        let max_range_m = state.max_range_m();

        let custom_points: Vec<ScopePoint> = snapshot
            .map(|snap| {
                snap.custom_targets
                    .iter()
                    .map(|target| {
                        let (x, y) = project(target.x_m, target.y_m, max_range_m);
                        ScopePoint {
                            id: format!("C{}", target.track_id),
                            x,
                            y,
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        let header = row![
            text("Phoenix / Simulated Radar Targets").size(26),
            text(format!(
                "PRF {} Hz",
                fmt_opt_u32(config.and_then(|c| c.prf_hz))
            ))
            .size(14),
            text(format!(
                "Frame {}",
                snapshot
                    .map(|snap| snap.frame_index.to_string())
                    .unwrap_or_else(|| "-".into())
            ))
            .size(14),
        ]
        .spacing(20)
        .align_y(Alignment::Center);

        let scope = Canvas::new(RadarScope::new(state.scope_points.clone(), custom_points))
            .width(Length::Fill)
            .height(Length::Fixed(420.0));

        let scope_column = column![
            text("Radar Scope").size(20),
            text(format!(
                "Max range: {:.0} km / Updated: {}",
                max_range_m / 1000.0,
                fmt_clock(state.engine.last_updated())
            ))
            .size(12),
            scope,
        ]
        .spacing(8)
        .width(Length::FillPortion(3));

        let counts = column![
            text("Counts").size(16),
            text(format!("Total Targets: {}", state.engine.total_targets())).size(14),
            text(format!(
                "ASTERIX-48 Records: {}",
                snapshot.map(|snap| snap.asterix48.len()).unwrap_or(0)
            ))
            .size(14),
        ]
        .spacing(4);

        let configuration = column![
            text("Configuration").size(16),
            text(format!(
                "Sector Step: {} deg",
                fmt_opt_f64(config.and_then(|c| c.sector_step_deg), 0)
            ))
            .size(14),
            text(format!(
                "Targets per Sector: {}",
                fmt_opt_u32(config.and_then(|c| c.targets_per_sector))
            ))
            .size(14),
            text(format!(
                "RCS Range: {}",
                config
                    .and_then(|c| c.rcs_m2_range)
                    .map(|(low, high)| format!("{low} to {high} m2"))
                    .unwrap_or_else(|| "-".into())
            ))
            .size(14),
        ]
        .spacing(4);

        let motion_label = if state.engine.motion_enabled() {
            "Freeze Targets"
        } else {
            "Enable Motion"
        };
        let status = column![
            text("Status").size(16),
            text(format!(
                "Backend: {}",
                if snapshot.is_some() {
                    "Connected"
                } else {
                    "Waiting"
                }
            ))
            .size(14),
            text(format!("API Base: {}", state.api.base())).size(14),
            button(motion_label).on_press(Message::MotionToggled).padding(6),
        ]
        .spacing(4);

        let platform_choices: Vec<PlatformChoice> = state
            .platforms
            .iter()
            .map(|platform| PlatformChoice {
                id: platform.id,
                name: platform.name.clone(),
            })
            .collect();
        let selected_platform = state.form.platform_id.and_then(|id| {
            platform_choices
                .iter()
                .find(|choice| choice.id == id)
                .cloned()
        });
        let profile_choices: Vec<String> = state
            .form
            .available_profiles(&state.platforms)
            .iter()
            .map(|profile| profile.profile_name.clone())
            .collect();
        let selected_profile = if state.form.profile_name.is_empty() {
            None
        } else {
            Some(state.form.profile_name.clone())
        };

        let track_rows = if state.tracks.is_empty() {
            Column::new().push(text("No custom tracks").size(12))
        } else {
            state.tracks.tracks().iter().enumerate().fold(
                Column::new().spacing(4),
                |col, (index, track)| {
                    col.push(
                        row![
                            text(format!(
                                "{} @ {:.0} m / {:.0} deg",
                                track.profile_name, track.range_m, track.azimuth_deg
                            ))
                            .size(12),
                            button(text("Remove").size(12))
                                .on_press(Message::TrackRemoved(index))
                                .padding(2),
                        ]
                        .spacing(8)
                        .align_y(Alignment::Center),
                    )
                },
            )
        };

        let authoring = column![
            text("Custom Tracks").size(16),
            pick_list(
                platform_choices,
                selected_platform,
                Message::PlatformSelected
            )
            .placeholder("Platform"),
            pick_list(profile_choices, selected_profile, Message::ProfileSelected)
                .placeholder("Profile"),
            row![
                text_input("Range (m)", &state.form.range_input)
                    .on_input(Message::RangeInputChanged)
                    .padding(4),
                text_input("Azimuth (deg)", &state.form.azimuth_input)
                    .on_input(Message::AzimuthInputChanged)
                    .padding(4),
                text_input("Heading (deg)", &state.form.heading_input)
                    .on_input(Message::HeadingInputChanged)
                    .padding(4),
            ]
            .spacing(6),
            row![
                button("Add Track").on_press(Message::TrackAdded).padding(6),
                button("Clear All Tracks")
                    .on_press_maybe((!state.tracks.is_empty()).then_some(Message::TracksCleared))
                    .padding(6),
            ]
            .spacing(8),
            track_rows,
        ]
        .spacing(6);

        let side_column = column![counts, configuration, status, authoring]
            .spacing(16)
            .width(Length::FillPortion(2));

        let master_table = master_table(snapshot);

        let layout = column![
            header,
            row![scope_column, side_column].spacing(20),
            text("ASTERIX-48 Master Table").size(20),
            Container::new(scrollable(master_table).height(Length::Fixed(220.0))).padding(6),
        ]
        .spacing(16)
        .padding(20);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn max_range_m(&self) -> f64 {
        self.config
            .as_ref()
            .map(SensorConfig::max_range_m)
            .unwrap_or(DEFAULT_MAX_RANGE_KM * 1000.0)
    }

    // Reprojects only when the target list or max range changed; the
    // projector no-ops on identical inputs.
    fn refresh_scope(&mut self) {
        let max_range_m = self.max_range_m();
        let targets = self
            .engine
            .snapshot()
            .map(|snapshot| snapshot.targets.as_slice())
            .unwrap_or(&[]);
        self.scope_points = self.projector.points(targets, max_range_m).to_vec();
    }

    fn schedule_push(&mut self, due: Option<Vec<CustomTrack>>) -> Task<Message> {
        match due {
            Some(tracks) => {
                self.engine.metrics().record_push();
                Task::perform(push_tracks(self.api.clone(), tracks), Message::TracksPushed)
            }
            None => Task::none(),
        }
    }
}

fn master_table(snapshot: Option<&Snapshot>) -> Column<'static, Message> {
    let Some(snapshot) = snapshot else {
        return Column::new().push(text("Waiting for snapshot").size(12));
    };
    if snapshot.custom_targets.is_empty() && snapshot.asterix48.is_empty() {
        return Column::new().push(text("No records yet").size(12));
    }

    let mut table = Column::new().spacing(3);
    // Injected tracks lead the table, tagged with a C prefix.
    for target in &snapshot.custom_targets {
        table = table.push(
            text(format!(
                "C{} | {:.2} km @ {:.1} deg | {:.0} m, {:.0} m | {} | {} s | {}",
                target.track_id,
                target.range_m / 1000.0,
                target.azimuth_deg,
                target.x_m,
                target.y_m,
                fmt_rcs(target.rcs_m2),
                fmt_opt_f64(target.time_of_day_s, 2),
                target.raw_hex.as_deref().unwrap_or("-"),
            ))
            .size(12),
        );
    }
    for record in &snapshot.asterix48 {
        table = table.push(
            text(format!(
                "{} | {:.2} km @ {:.1} deg | {:.0} m, {:.0} m | {} | {} s | {}",
                record.track_number,
                record.polar.range_m / 1000.0,
                record.polar.azimuth_deg,
                record.cartesian.x_m,
                record.cartesian.y_m,
                fmt_rcs(record.rcs_m2),
                fmt_opt_f64(record.time_of_day_s, 2),
                record.raw_hex.as_deref().unwrap_or("-"),
            ))
            .size(12),
        );
    }
    table
}

async fn fetch_config(api: ApiClient) -> Result<SensorConfig, FetchError> {
    api.fetch_config().await
}

async fn fetch_platforms(api: ApiClient) -> Result<PlatformCatalog, FetchError> {
    api.fetch_platforms().await
}

async fn fetch_state(api: ApiClient) -> Result<Snapshot, FetchError> {
    api.fetch_state().await
}

async fn push_motion(api: ApiClient, enabled: bool) -> Result<(), FetchError> {
    api.post_motion(enabled).await
}

async fn push_tracks(api: ApiClient, tracks: Vec<CustomTrack>) -> Result<(), FetchError> {
    api.post_custom_tracks(&tracks).await
}

fn fmt_opt_u32(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".into())
}

fn fmt_opt_f64(value: Option<f64>, digits: usize) -> String {
    value
        .map(|v| format!("{v:.digits$}"))
        .unwrap_or_else(|| "-".into())
}

fn fmt_rcs(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.2} m2"))
        .unwrap_or_else(|| "-".into())
}

fn fmt_clock(time: Option<SystemTime>) -> String {
    match time.and_then(|t| t.duration_since(UNIX_EPOCH).ok()) {
        Some(elapsed) => {
            let seconds = elapsed.as_secs() % 86_400;
            format!(
                "{:02}:{:02}:{:02} UTC",
                seconds / 3600,
                (seconds % 3600) / 60,
                seconds % 60
            )
        }
        None => "-".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scopecore::model::{Profile, Target};

    fn dashboard() -> Dashboard {
        let (state, _loads) = Dashboard::boot();
        state
    }

    fn seeded_dashboard() -> Dashboard {
        let mut state = dashboard();
        state.platforms = vec![Platform {
            id: 1,
            name: "F-16".into(),
            profiles: vec![Profile {
                id: 10,
                profile_name: "patrol".into(),
            }],
        }];
        state.form.seed_from_catalog(&state.platforms);
        state
    }

    fn snapshot(frame_index: u64) -> Snapshot {
        Snapshot {
            frame_index,
            targets: vec![Target {
                target_id: "t-001".into(),
                x_m: 120_000.0,
                y_m: 0.0,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn motion_toggle_flips_before_push_settles() {
        let mut state = dashboard();
        assert!(!state.engine.motion_enabled());
        let _pending_push = Dashboard::update(&mut state, Message::MotionToggled);
        // The push future has not run, the displayed flag already has.
        assert!(state.engine.motion_enabled());
        let _ = Dashboard::update(
            &mut state,
            Message::MotionPushed(Err(FetchError::Transport("connection refused".into()))),
        );
        assert!(state.engine.motion_enabled());
    }

    #[test]
    fn applied_snapshot_projects_scope_points() {
        let mut state = dashboard();
        let _ = Dashboard::update(&mut state, Message::StateFetched(Ok(snapshot(1))));
        assert_eq!(state.scope_points.len(), 1);
        assert_eq!(state.scope_points[0].x, 0.5);
        assert_eq!(state.scope_points[0].y, 0.0);
    }

    #[test]
    fn poll_failure_retains_previous_snapshot() {
        let mut state = dashboard();
        let _ = Dashboard::update(&mut state, Message::StateFetched(Ok(snapshot(3))));
        let _ = Dashboard::update(
            &mut state,
            Message::StateFetched(Err(FetchError::Decode("unexpected token".into()))),
        );
        assert_eq!(state.engine.snapshot().unwrap().frame_index, 3);
    }

    #[test]
    fn late_snapshot_after_teardown_is_discarded() {
        let mut state = dashboard();
        let _ = Dashboard::update(&mut state, Message::StateFetched(Ok(snapshot(3))));
        state.engine.teardown();
        let _ = Dashboard::update(&mut state, Message::StateFetched(Ok(snapshot(9))));
        assert_eq!(state.engine.snapshot().unwrap().frame_index, 3);
    }

    #[test]
    fn track_ids_stay_monotonic_across_updates() {
        let mut state = seeded_dashboard();
        let _ = Dashboard::update(&mut state, Message::TrackAdded);
        let _ = Dashboard::update(&mut state, Message::TrackAdded);
        let _ = Dashboard::update(&mut state, Message::TrackAdded);
        let _ = Dashboard::update(&mut state, Message::TrackRemoved(1));
        let _ = Dashboard::update(&mut state, Message::TrackAdded);
        let ids: Vec<u32> = state
            .tracks
            .tracks()
            .iter()
            .map(|track| track.track_id)
            .collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn add_without_catalog_noops() {
        let mut state = dashboard();
        let _ = Dashboard::update(&mut state, Message::TrackAdded);
        assert!(state.tracks.is_empty());
        assert_eq!(state.engine.metrics().counts().2, 0);
    }

    #[test]
    fn clear_counts_one_push_of_empty_list() {
        let mut state = seeded_dashboard();
        let _ = Dashboard::update(&mut state, Message::TrackAdded);
        let pushes_before = state.engine.metrics().counts().2;
        let _ = Dashboard::update(&mut state, Message::TracksCleared);
        assert!(state.tracks.is_empty());
        assert_eq!(state.engine.metrics().counts().2, pushes_before + 1);
        // A second clear has nothing to mirror.
        let _ = Dashboard::update(&mut state, Message::TracksCleared);
        assert_eq!(state.engine.metrics().counts().2, pushes_before + 1);
    }

    #[test]
    fn failed_config_load_leaves_placeholders() {
        let mut state = dashboard();
        let _ = Dashboard::update(
            &mut state,
            Message::ConfigFetched(Err(FetchError::Transport("connection refused".into()))),
        );
        assert!(state.config.is_none());
        assert_eq!(state.max_range_m(), 240_000.0);
    }
}
