//! Trip record store - The in-memory trip log mirrored to durable storage.
//!
//! The store owns the ordered trip sequence (newest first) and writes the whole
//! sequence as one JSON document under a single key after every mutation. The
//! in-memory copy is authoritative: if a write fails, the trip is kept and the
//! error is returned so the caller can report it or call [`TripStore::persist`] again.

use crate::{
    core::{
        key_value, seed,
        summary::{self, DashboardStats},
        trip::{Trip, TripDraft, TripId},
    },
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;
use tracing::{info, instrument, warn};

/// Ordered trip collection backed by a key-value document.
#[derive(Debug)]
pub struct TripStore {
    db: DatabaseConnection,
    key: String,
    trips: Vec<Trip>,
}

impl TripStore {
    /// Loads the trip sequence stored under `key`.
    ///
    /// When the key has never been written, the example trips are seeded and
    /// persisted. A stored value that is not a trip list is reported as
    /// `Error::Storage` and left untouched.
    #[instrument(skip(db))]
    pub async fn load(db: DatabaseConnection, key: &str) -> Result<Self> {
        let trips = match key_value::get_value(&db, key).await? {
            Some(document) => decode_trips(&document)?,
            None => {
                info!("No stored trips under '{}', seeding example trips", key);
                let store = Self {
                    db,
                    key: key.to_string(),
                    trips: seed::example_trips(),
                };
                store.persist().await?;
                return Ok(store);
            }
        };

        info!("Loaded {} trips from '{}'", trips.len(), key);
        Ok(Self {
            db,
            key: key.to_string(),
            trips,
        })
    }

    /// All trips, most recently added first.
    #[must_use]
    pub fn list(&self) -> &[Trip] {
        &self.trips
    }

    /// Finds a trip by id.
    #[must_use]
    pub fn get(&self, id: &TripId) -> Option<&Trip> {
        self.trips.iter().find(|trip| &trip.id == id)
    }

    /// Finds a trip by id, failing with `Error::TripNotFound`.
    pub fn require(&self, id: &TripId) -> Result<&Trip> {
        self.get(id).ok_or_else(|| Error::TripNotFound { id: id.to_string() })
    }

    /// Creates a trip from a submission, puts it first and persists the log.
    ///
    /// Building the trip never fails; bad numbers become zero. An error means only
    /// that the write failed. The trip is still in [`list`](Self::list) in that case.
    #[instrument(skip(self, draft), fields(origin = %draft.origin, destination = %draft.destination))]
    pub async fn add(&mut self, draft: &TripDraft) -> Result<Trip> {
        let today = chrono::Local::now().date_naive();
        let trip = Trip::from_draft(draft, TripId::generate(), today);
        self.trips.insert(0, trip.clone());
        info!("Added trip {} ({} trips total)", trip.id, self.trips.len());

        self.persist()
            .await
            .inspect_err(|e| warn!("Trip {} kept in memory but not persisted: {}", trip.id, e))?;
        Ok(trip)
    }

    /// Writes the full trip sequence to durable storage.
    pub async fn persist(&self) -> Result<()> {
        let document = serde_json::to_string(&self.trips)?;
        key_value::set_value(&self.db, &self.key, &document).await
    }

    /// Dashboard totals over the current trips.
    #[must_use]
    pub fn stats(&self) -> DashboardStats {
        summary::compute_stats(&self.trips)
    }
}

fn decode_trips(document: &str) -> Result<Vec<Trip>> {
    serde_json::from_str(document).map_err(|e| Error::Storage {
        message: format!("stored trips are not a valid trip list: {e}"),
    })
}
