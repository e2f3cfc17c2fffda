//! Public face of the engine: ingest tracks and query them.
//!
//! `Repository` is cheap to clone, all clones talk to the same `TrackActor`.
//!

use std::sync::Arc;

use eyre::Result;
use ractor::{call, Actor, ActorRef};
use tracing::{debug, info, trace};

use crate::{
    Field, FieldProjection, IngestReport, StoredTrack, TrackActor, TrackError, TrackId,
    TrackMsg, TrackParser,
};

/// First id handed out.
const FIRST_ID: u64 = 1;

#[derive(Debug)]
pub struct Repository<P: TrackParser> {
    tracks: ActorRef<TrackMsg>,
    parser: Arc<P>,
}

// derive would require `P: Clone`
impl<P: TrackParser> Clone for Repository<P> {
    fn clone(&self) -> Self {
        Repository {
            tracks: self.tracks.clone(),
            parser: Arc::clone(&self.parser),
        }
    }
}

impl<P: TrackParser> Repository<P> {
    /// Start the actor owning the tracks.
    ///
    #[tracing::instrument(skip(parser))]
    pub async fn new(parser: P) -> Result<Self> {
        let (tracks, _handle) = Actor::spawn(None, TrackActor, FIRST_ID).await?;
        trace!("track actor started");
        Ok(Repository {
            tracks,
            parser: Arc::new(parser),
        })
    }

    /// Fetch and parse `url` then store it.
    ///
    /// A URL already stored gives `TrackError::Duplicate` with the existing id, nothing is
    /// changed.  Parsing happens before we talk to the actor so a slow source does not block
    /// readers.
    ///
    #[tracing::instrument(skip(self))]
    pub async fn ingest(&self, url: &str) -> Result<IngestReport, TrackError> {
        let track = self.parser.parse(url).await?;

        let id = call!(self.tracks, TrackMsg::Insert, url.to_string(), track)
            .map_err(|e| TrackError::Store(e.to_string()))??;
        info!("track {id} ingested from {url}");
        Ok(IngestReport {
            id,
            url: url.to_string(),
        })
    }

    /// All ids in insertion order.
    ///
    pub async fn list_ids(&self) -> Result<Vec<TrackId>, TrackError> {
        call!(self.tracks, TrackMsg::List).map_err(|e| TrackError::Store(e.to_string()))
    }

    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: TrackId) -> Result<Arc<StoredTrack>, TrackError> {
        call!(self.tracks, TrackMsg::Get, id)
            .map_err(|e| TrackError::Store(e.to_string()))?
            .ok_or(TrackError::NotFound(id))
    }

    /// Same as `get()` but with the id as received from a client.
    ///
    pub async fn get_by_str(&self, id: &str) -> Result<Arc<StoredTrack>, TrackError> {
        let id: TrackId = id.parse()?;
        self.get(id).await
    }

    /// All fields of one track.
    ///
    pub async fn projection(&self, id: &str) -> Result<FieldProjection, TrackError> {
        Ok(self.get_by_str(id).await?.project())
    }

    /// One field of one track.  The syntax of both names is checked before looking anything
    /// up, then the track must exist before the field name is resolved.
    ///
    #[tracing::instrument(skip(self))]
    pub async fn query_field(&self, id: &str, field: &str) -> Result<String, TrackError> {
        let id: TrackId = id.parse()?;
        Field::check_syntax(field)?;

        let track = self.get(id).await?;
        let value = Field::parse_name(field)?.value_of(&track);
        debug!("{field}={value}");
        Ok(value)
    }

    pub async fn len(&self) -> Result<usize, TrackError> {
        call!(self.tracks, TrackMsg::Count).map_err(|e| TrackError::Store(e.to_string()))
    }

    pub async fn is_empty(&self) -> Result<bool, TrackError> {
        Ok(self.len().await? == 0)
    }

    /// Stop the actor, every clone becomes unusable.
    ///
    pub fn shutdown(&self) {
        self.tracks.stop(None);
    }
}
