//! Actor owning the track collection
//!
//! Every mutation goes through this actor so the duplicate check, the id allocation and the
//! insertion are one step.  Parsing is done by the caller before sending `Insert`.
//!

use std::sync::Arc;

use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use tracing::{debug, trace, warn};

use igcinfo_formats::Track;

use crate::{StoredTrack, TrackError, TrackId};

/// Messages handled by the TrackActor.
///
#[derive(Debug)]
pub enum TrackMsg {
    /// Store a parsed track fetched from the given URL, returns the new id.
    Insert(String, Track, RpcReplyPort<Result<TrackId, TrackError>>),
    /// All ids, in insertion order.
    List(RpcReplyPort<Vec<TrackId>>),
    /// Get one track by its id.
    Get(TrackId, RpcReplyPort<Option<Arc<StoredTrack>>>),
    /// Number of stored tracks.
    Count(RpcReplyPort<usize>),
}

pub struct TrackActor;

#[derive(Debug)]
pub struct TrackState {
    /// Next id to allocate.
    next: u64,
    /// Insertion order, ids are increasing.
    tracks: Vec<Arc<StoredTrack>>,
}

impl TrackState {
    pub fn new(first: u64) -> Self {
        TrackState {
            next: first,
            tracks: Vec::new(),
        }
    }

    /// Check then insert.  An id is consumed only when the track is actually stored.
    ///
    pub fn insert(&mut self, url: String, track: Track) -> Result<TrackId, TrackError> {
        if track.fixes.is_empty() {
            return Err(TrackError::Parse(url, "no fixes".to_string()));
        }
        if let Some(t) = self.tracks.iter().find(|t| t.url == url) {
            return Err(TrackError::Duplicate { id: t.id, url });
        }

        let id = TrackId::new(self.next);
        self.next += 1;
        self.tracks.push(Arc::new(StoredTrack::new(id, url, track)));
        Ok(id)
    }

    pub fn ids(&self) -> Vec<TrackId> {
        self.tracks.iter().map(|t| t.id).collect()
    }

    /// Ids are allocated in increasing order so we can search.
    ///
    pub fn get(&self, id: TrackId) -> Option<Arc<StoredTrack>> {
        self.tracks
            .binary_search_by_key(&id, |t| t.id)
            .ok()
            .map(|i| Arc::clone(&self.tracks[i]))
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[ractor::async_trait]
impl Actor for TrackActor {
    type Msg = TrackMsg;
    type State = TrackState;
    type Arguments = u64;

    #[tracing::instrument(skip(self, _myself))]
    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        args: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        trace!("track actor starting at {args}");
        Ok(TrackState::new(args))
    }

    #[tracing::instrument(skip(self, _myself, state))]
    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        // A caller which went away is not our problem, keep serving the others.
        let delivered = match message {
            TrackMsg::Insert(url, track, sender) => {
                let res = state.insert(url, track);
                debug!("insert: {res:?}");
                sender.send(res).is_ok()
            }
            TrackMsg::List(sender) => sender.send(state.ids()).is_ok(),
            TrackMsg::Get(id, sender) => sender.send(state.get(id)).is_ok(),
            TrackMsg::Count(sender) => sender.send(state.len()).is_ok(),
        };
        if !delivered {
            warn!("reply lost, caller is gone");
        }
        Ok(())
    }
}
