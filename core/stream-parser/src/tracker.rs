//! Index-keyed provider fragments -> ordered start/delta/end events.
//!
//! A track is created once a chunk carries an id for its index. The start
//! event waits until the name is known; argument text seen before that is
//! buffered and replayed right after the start, in arrival order.

use std::collections::BTreeMap;
use std::collections::HashMap;

use tracing::debug;
use tracing::trace;
use tracing::warn;

use crate::event::FinishReason;
use crate::event::RawToolCallChunk;
use crate::event::ToolCallEvent;

#[derive(Debug, Clone)]
struct RawChunkTrack {
    id: String,
    name: Option<String>,
    has_started: bool,
    /// Non-empty only while `has_started` is false.
    delta_buffer: Vec<String>,
}

impl RawChunkTrack {
    fn new(id: String) -> Self {
        Self {
            id,
            name: None,
            has_started: false,
            delta_buffer: Vec::new(),
        }
    }
}

/// Per-turn tracker. Call [`RawChunkTracker::finalize`] once per provider
/// stream; it is the only thing that bounds the tracker's memory.
#[derive(Debug, Default)]
pub struct RawChunkTracker {
    tracks: BTreeMap<i64, RawChunkTrack>,
    /// Argument text for indices whose id has not arrived yet.
    orphan_deltas: HashMap<i64, Vec<String>>,
}

impl RawChunkTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty() && self.orphan_deltas.is_empty()
    }

    pub fn process_chunk(&mut self, chunk: &RawToolCallChunk) -> Vec<ToolCallEvent> {
        let index = chunk.index;
        let arguments = chunk.arguments.as_deref().filter(|a| !a.is_empty());

        if !self.tracks.contains_key(&index) {
            let Some(id) = chunk.id.as_deref().filter(|id| !id.is_empty()) else {
                if let Some(arguments) = arguments {
                    trace!(index, "buffering arguments until the call id arrives");
                    self.orphan_deltas
                        .entry(index)
                        .or_default()
                        .push(arguments.to_string());
                }
                return Vec::new();
            };
            let mut track = RawChunkTrack::new(id.to_string());
            if let Some(orphans) = self.orphan_deltas.remove(&index) {
                track.delta_buffer = orphans;
            }
            self.tracks.insert(index, track);
        }

        let Some(track) = self.tracks.get_mut(&index) else {
            return Vec::new();
        };
        if let Some(id) = chunk.id.as_deref()
            && !id.is_empty()
            && id != track.id
        {
            debug!(index, tracked = %track.id, received = %id, "ignoring id change on tracked index");
        }
        if track.name.is_none()
            && let Some(name) = chunk.name.as_deref().filter(|n| !n.is_empty())
        {
            track.name = Some(name.to_string());
        }

        let mut events = Vec::new();
        if !track.has_started
            && let Some(name) = &track.name
        {
            events.push(ToolCallEvent::Start {
                index,
                id: track.id.clone(),
                name: name.clone(),
            });
            track.has_started = true;
            for delta in std::mem::take(&mut track.delta_buffer) {
                events.push(ToolCallEvent::Delta {
                    index,
                    id: track.id.clone(),
                    delta,
                });
            }
        }

        if let Some(arguments) = arguments {
            if track.has_started {
                events.push(ToolCallEvent::Delta {
                    index,
                    id: track.id.clone(),
                    delta: arguments.to_string(),
                });
            } else {
                track.delta_buffer.push(arguments.to_string());
            }
        }
        events
    }

    /// Ends every started track when the provider reports tool calls are
    /// complete. Tracks still waiting for a name are kept for `finalize`.
    pub fn process_finish(&mut self, reason: FinishReason) -> Vec<ToolCallEvent> {
        if reason != FinishReason::ToolCalls {
            return Vec::new();
        }
        let started: Vec<i64> = self
            .tracks
            .iter()
            .filter(|(_, track)| track.has_started)
            .map(|(index, _)| *index)
            .collect();
        started
            .into_iter()
            .filter_map(|index| self.tracks.remove(&index).map(|track| (index, track)))
            .map(|(index, track)| ToolCallEvent::End {
                index,
                id: track.id,
            })
            .collect()
    }

    /// Ends all started tracks and clears every piece of state. Calling it
    /// again without new chunks emits nothing.
    pub fn finalize(&mut self) -> Vec<ToolCallEvent> {
        let mut events = Vec::new();
        for (index, track) in std::mem::take(&mut self.tracks) {
            if track.has_started {
                events.push(ToolCallEvent::End {
                    index,
                    id: track.id,
                });
            } else {
                warn!(
                    index,
                    call_id = %track.id,
                    buffered = track.delta_buffer.len(),
                    "dropping tool call that never received a name"
                );
            }
        }
        for (index, orphans) in self.orphan_deltas.drain() {
            warn!(index, buffered = orphans.len(), "dropping arguments that never received a call id");
        }
        events
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
        self.orphan_deltas.clear();
    }
}

#[cfg(test)]
#[path = "tracker.test.rs"]
mod tests;
