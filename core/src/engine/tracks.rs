use crate::engine::selection::TrackForm;
use crate::model::CustomTrack;
use crate::telemetry::SyncLog;

/// Session-scoped identifier source. Ids strictly increase and are
/// never reused, regardless of how many tracks have been removed.
#[derive(Debug)]
pub struct TrackIdAllocator {
    next: u32,
}

impl TrackIdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn allocate(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for TrackIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the operator-authored track list. Each mutation yields the
/// complete replacement list to mirror to the server, never a diff;
/// `None` means the operation no-oped and nothing is due. Push failures
/// are the caller's to swallow and never roll this list back.
#[derive(Debug, Default)]
pub struct TrackManager {
    tracks: Vec<CustomTrack>,
    ids: TrackIdAllocator,
    log: SyncLog,
}

impl TrackManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracks(&self) -> &[CustomTrack] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Appends a track built from the current form, capturing the
    /// numeric inputs by value. No-ops when no platform is selected or
    /// the profile name is empty.
    pub fn add(&mut self, form: &TrackForm) -> Option<Vec<CustomTrack>> {
        let platform_id = form.platform_id?;
        if form.profile_name.is_empty() {
            return None;
        }
        self.tracks.push(CustomTrack {
            track_id: self.ids.allocate(),
            platform_id,
            profile_name: form.profile_name.clone(),
            range_m: form.range_m(),
            azimuth_deg: form.azimuth_deg(),
            heading_deg: form.heading_deg(),
        });
        self.log.push_scheduled(self.tracks.len());
        Some(self.tracks.clone())
    }

    /// Removes the entry at `index`. Out-of-range indices no-op with
    /// nothing due; the remaining list may be empty and is still pushed.
    pub fn remove(&mut self, index: usize) -> Option<Vec<CustomTrack>> {
        if index >= self.tracks.len() {
            return None;
        }
        self.tracks.remove(index);
        self.log.push_scheduled(self.tracks.len());
        Some(self.tracks.clone())
    }

    /// Empties the list. The empty replacement is still mirrored, unless
    /// there was nothing to clear.
    pub fn clear(&mut self) -> Option<Vec<CustomTrack>> {
        if self.tracks.is_empty() {
            return None;
        }
        self.tracks.clear();
        self.log.push_scheduled(0);
        Some(Vec::new())
    }
}
