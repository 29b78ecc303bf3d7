// SPDX-License-Identifier: MPL-2.0
//! In-memory media element.
//!
//! Mirrors the event ordering of a browser media element closely enough to
//! drive the widget without one: commands change state immediately and
//! queue the events a real element would fire.

use super::{MediaElement, MediaEvent, MediaEventSource};
use crate::domain::video::Volume;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct SimulatedMedia {
    current_time: f64,
    duration: f64,
    volume: Volume,
    paused: bool,
    ended: bool,
    pending: VecDeque<MediaEvent>,
}

impl SimulatedMedia {
    /// A paused element with no metadata yet.
    pub fn new(volume: Volume) -> Self {
        Self {
            current_time: 0.0,
            duration: f64::NAN,
            volume,
            paused: true,
            ended: false,
            pending: VecDeque::new(),
        }
    }

    /// Metadata arrived and enough data is buffered to play through.
    pub fn load(&mut self, duration_secs: f64) {
        self.duration = duration_secs;
        self.emit(MediaEvent::DurationChange);
        self.emit(MediaEvent::CanPlay);
        self.emit(MediaEvent::CanPlayThrough);
    }

    /// Playback ran out of buffered data.
    pub fn stall(&mut self) {
        self.emit(MediaEvent::Waiting);
    }

    /// Data arrived again after a stall.
    pub fn resume_buffering(&mut self) {
        self.emit(MediaEvent::CanPlay);
    }

    /// Plays forward by `secs` if playing, ending playback at the duration.
    pub fn advance(&mut self, secs: f64) {
        if self.paused {
            return;
        }

        self.current_time += secs;
        if self.duration.is_nan() || self.current_time < self.duration {
            self.emit(MediaEvent::TimeUpdate);
            return;
        }

        self.current_time = self.duration;
        self.emit(MediaEvent::TimeUpdate);
        self.paused = true;
        self.ended = true;
        self.emit(MediaEvent::Pause);
        self.emit(MediaEvent::Ended);
    }

    /// Number of events waiting to be collected.
    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    fn emit(&mut self, event: MediaEvent) {
        tracing::trace!(%event, "media event queued");
        self.pending.push_back(event);
    }
}

impl Default for SimulatedMedia {
    fn default() -> Self {
        Self::new(Volume::default())
    }
}

impl MediaElement for SimulatedMedia {
    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn volume(&self) -> Volume {
        self.volume
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn is_ended(&self) -> bool {
        self.ended
    }

    fn play(&mut self) {
        if self.ended {
            // Playing an ended element restarts it.
            self.ended = false;
            self.current_time = 0.0;
            self.emit(MediaEvent::TimeUpdate);
        }
        if self.paused {
            self.paused = false;
            self.emit(MediaEvent::Play);
        }
    }

    fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.emit(MediaEvent::Pause);
        }
    }

    fn set_volume(&mut self, volume: Volume) {
        if volume != self.volume {
            self.volume = volume;
            self.emit(MediaEvent::VolumeChange);
        }
    }

    fn set_current_time(&mut self, secs: f64) {
        let upper = if self.duration.is_nan() {
            0.0
        } else {
            self.duration
        };
        self.current_time = secs.clamp(0.0, upper.max(0.0));
        self.ended = false;
        self.emit(MediaEvent::TimeUpdate);
    }
}

impl MediaEventSource for SimulatedMedia {
    fn take_events(&mut self) -> Vec<MediaEvent> {
        self.pending.drain(..).collect()
    }
}
