// SPDX-License-Identifier: MPL-2.0
//! Video block controller.
//!
//! Reacts to media events, clicks, scrubber input and pointer movement,
//! and writes the resulting state into the container markup:
//! - container classes `ready` / `playing` / `paused`, plus `muted` and `idle`
//! - `disabled` attribute and class on every button and input
//! - elapsed/duration label text and the scrubber value

use super::click::{ClickAction, ClickRules, ClickTarget};
use super::state::{WidgetState, DISABLED_CLASS};
use super::template::CONTAINER_CLASS;
use super::time_format::format_clock;
use crate::domain::video::{IdleTimeout, PlaybackState, ScrubberValue, Volume};
use crate::error::{MarkupError, Result};
use crate::markup::{Element, NodePath, Selector};
use crate::media::{MediaElement, MediaEvent, MediaEventSource};
use crate::scheduler::{Scheduler, TimerId};

/// Paths to the parts of the container the controller writes to.
#[derive(Debug, Clone)]
struct Parts {
    elapsed: NodePath,
    duration: NodePath,
    scrubber: NodePath,
}

/// Selectors used after binding.
#[derive(Debug, Clone)]
struct Selectors {
    controls: Selector,
    disabled_controls: Selector,
    click: ClickRules,
}

fn require(container: &Element, source: &str) -> Result<NodePath> {
    let selector = Selector::parse(source)?;
    container.query_selector(&selector).ok_or_else(|| {
        MarkupError::MissingElement {
            selector: source.to_string(),
        }
        .into()
    })
}

/// Returns true for a duration the label and scrubber can use.
fn has_duration(duration: f64) -> bool {
    duration != 0.0 && !duration.is_nan()
}

/// Controller for one video block.
///
/// Owns the container markup, the media element and the idle scheduler.
/// All handlers run to completion and never block.
pub struct VideoBlock<M, S> {
    container: Element,
    parts: Parts,
    selectors: Selectors,
    media: M,
    scheduler: S,
    idle_timeout: IdleTimeout,
    /// Volume at bind time, restored by the unmute button.
    initial_volume: Volume,
    idle_timer: Option<TimerId>,
    scrubber: ScrubberValue,
    state: WidgetState,
}

impl<M: MediaElement, S: Scheduler> VideoBlock<M, S> {
    /// Binds a controller to `container`.
    ///
    /// Fails if the container lacks a `video`, `.elapsed`, `.duration` or
    /// `input[type="range"]` descendant. Marks the widget `ready` and
    /// snapshots the media volume for later unmuting.
    pub fn bind(container: Element, media: M, scheduler: S, idle_timeout: IdleTimeout) -> Result<Self> {
        require(&container, "video")?;
        let parts = Parts {
            elapsed: require(&container, ".elapsed")?,
            duration: require(&container, ".duration")?,
            scrubber: require(&container, "input[type=\"range\"]")?,
        };
        let selectors = Selectors {
            controls: Selector::parse("button, input")?,
            disabled_controls: Selector::parse("button[disabled], input[disabled]")?,
            click: ClickRules::new()?,
        };

        let controls_enabled = container
            .query_selector(&selectors.disabled_controls)
            .is_none();
        let scrubber = container
            .get(&parts.scrubber)
            .and_then(|input| input.attribute("value"))
            .and_then(|value| value.parse::<f64>().ok())
            .map_or_else(ScrubberValue::default, ScrubberValue::new);
        let initial_volume = media.volume();

        let mut block = Self {
            container,
            parts,
            selectors,
            media,
            scheduler,
            idle_timeout,
            initial_volume,
            idle_timer: None,
            scrubber,
            state: WidgetState::new(controls_enabled),
        };
        block.render_classes();

        tracing::debug!(
            volume = initial_volume.value(),
            controls_enabled,
            idle_ms = idle_timeout.as_millis(),
            "video block bound"
        );
        Ok(block)
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn playback(&self) -> PlaybackState {
        self.state.playback()
    }

    /// The container markup with every class, attribute and text written so far.
    pub fn container(&self) -> &Element {
        &self.container
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn initial_volume(&self) -> Volume {
        self.initial_volume
    }

    /// The idle timer currently armed, if any.
    pub fn idle_timer(&self) -> Option<TimerId> {
        self.idle_timer
    }

    pub fn scrubber_value(&self) -> ScrubberValue {
        self.scrubber
    }

    pub fn elapsed_text(&self) -> &str {
        self.text_at(&self.parts.elapsed)
    }

    pub fn duration_text(&self) -> &str {
        self.text_at(&self.parts.duration)
    }

    fn text_at(&self, path: &NodePath) -> &str {
        self.container
            .get(path)
            .map_or("", Element::text_content)
    }

    /// Reacts to one native media event.
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::CanPlay | MediaEvent::CanPlayThrough => self.enable_controls(),
            MediaEvent::Waiting => self.disable_controls(),
            MediaEvent::DurationChange => {
                if has_duration(self.media.duration()) {
                    self.enable_controls();
                }
                self.show_time();
            }
            MediaEvent::TimeUpdate => {
                self.set_scrubber(ScrubberValue::from_position(
                    self.media.current_time(),
                    self.media.duration(),
                ));
                self.show_time();
            }
            MediaEvent::Play => {
                self.state.play();
                tracing::debug!("playing");
                self.render_classes();
            }
            MediaEvent::VolumeChange => {
                let muted = self.media.volume().is_muted();
                self.state.set_muted(muted);
                tracing::debug!(muted, "volume changed");
                self.render_classes();
            }
            MediaEvent::Pause => {
                self.cancel_idle_timer();
                self.state.pause();
                tracing::debug!("paused");
                self.render_classes();
            }
            MediaEvent::Ended => {
                self.cancel_idle_timer();
                self.state.end();
                tracing::debug!("ended");
                self.render_classes();
            }
        }
    }

    /// Reacts to a click on the element at `target`, a path inside the container.
    pub fn handle_click(&mut self, target: &NodePath) -> Result<ClickAction> {
        let chain = self
            .container
            .ancestry(target)
            .ok_or(MarkupError::NodeNotFound)?;

        if chain[0].is_disabled() {
            tracing::debug!("click on disabled control suppressed");
            return Ok(ClickAction::Suppressed);
        }

        let resolved = self.selectors.click.resolve(&chain);
        self.clear_idle();

        let action = match resolved {
            ClickTarget::PlayButton => ClickAction::Play,
            ClickTarget::PauseButton => ClickAction::Pause,
            ClickTarget::MuteButton => ClickAction::Mute,
            ClickTarget::UnmuteButton => ClickAction::Unmute,
            ClickTarget::NativeControl => ClickAction::Native,
            ClickTarget::Surface => {
                if !self.media.is_paused() && !self.media.is_ended() {
                    ClickAction::Pause
                } else {
                    ClickAction::Play
                }
            }
        };

        match action {
            ClickAction::Play => self.media.play(),
            ClickAction::Pause => self.media.pause(),
            ClickAction::Mute => self.media.set_volume(Volume::MUTED),
            ClickAction::Unmute => self.media.set_volume(self.initial_volume),
            ClickAction::Native | ClickAction::Suppressed => {}
        }
        tracing::debug!(?resolved, ?action, "click");
        Ok(action)
    }

    /// Reacts to the scrubber being moved to `value` (0–100).
    pub fn handle_scrub(&mut self, value: f64) {
        let value = ScrubberValue::new(value);
        self.set_scrubber(value);

        let target = value.position_secs(self.media.duration());
        if !target.is_finite() {
            tracing::warn!(value = value.value(), "cannot seek without a finite duration");
            return;
        }
        tracing::debug!(target, "seek");
        self.media.set_current_time(target);
    }

    /// Reacts to pointer movement inside the container.
    ///
    /// While playing this restarts the idle countdown; otherwise it only
    /// clears idle state.
    pub fn handle_pointer_move(&mut self) {
        self.clear_idle();
        if self.media.is_paused() || self.media.is_ended() {
            return;
        }

        let id = self.scheduler.schedule(self.idle_timeout.as_duration());
        tracing::trace!(%id, "idle timer armed");
        self.idle_timer = Some(id);
    }

    /// Reacts to a fired timer. Ids other than the armed idle timer are ignored.
    pub fn handle_idle_timeout(&mut self, id: TimerId) {
        if self.idle_timer != Some(id) {
            tracing::trace!(%id, "stale timer ignored");
            return;
        }
        self.idle_timer = None;

        if self.state.enter_idle() {
            tracing::debug!("idle");
            self.render_classes();
        }
    }

    fn cancel_idle_timer(&mut self) {
        if let Some(id) = self.idle_timer.take() {
            self.scheduler.cancel(id);
        }
    }

    fn clear_idle(&mut self) {
        self.cancel_idle_timer();
        if self.state.is_idle() {
            self.state.leave_idle();
            self.render_classes();
        }
    }

    fn enable_controls(&mut self) {
        for path in self
            .container
            .query_selector_all(&self.selectors.disabled_controls)
        {
            if let Some(control) = self.container.get_mut(&path) {
                control.remove_class(DISABLED_CLASS);
                control.remove_attribute("disabled");
            }
        }
        if !self.state.controls_enabled() {
            tracing::debug!("controls enabled");
        }
        self.state.set_controls_enabled(true);
    }

    fn disable_controls(&mut self) {
        for path in self.container.query_selector_all(&self.selectors.controls) {
            if let Some(control) = self.container.get_mut(&path) {
                control.add_class(DISABLED_CLASS);
                control.set_attribute("disabled", "");
            }
        }
        if self.state.controls_enabled() {
            tracing::debug!("controls disabled");
        }
        self.state.set_controls_enabled(false);
    }

    fn show_time(&mut self) {
        let elapsed = format_clock(self.media.current_time());
        let duration = format_clock(self.media.duration());
        tracing::trace!(?elapsed, ?duration, "time");

        let labels = [
            (self.parts.elapsed.clone(), elapsed),
            (self.parts.duration.clone(), duration),
        ];
        for (path, text) in labels {
            if let (Some(label), Some(text)) = (self.container.get_mut(&path), text) {
                label.set_text_content(text);
            }
        }
    }

    fn set_scrubber(&mut self, value: ScrubberValue) {
        self.scrubber = value;
        if let Some(input) = self.container.get_mut(&self.parts.scrubber) {
            input.set_attribute("value", value.to_string());
        }
    }

    fn render_classes(&mut self) {
        for (class, present) in self.state.classes() {
            self.container.toggle_class(class, present);
        }
    }
}

impl<M: MediaElement + MediaEventSource, S: Scheduler> VideoBlock<M, S> {
    /// Feeds every event the media element queued into the controller.
    ///
    /// Returns the number of events handled.
    pub fn pump_media_events(&mut self) -> usize {
        let mut handled = 0;
        loop {
            let events = self.media.take_events();
            if events.is_empty() {
                return handled;
            }
            handled += events.len();
            for event in events {
                self.handle_media_event(event);
            }
        }
    }
}

/// Binds a controller to every `.video-block` in `document`.
///
/// `attach` supplies the media element and scheduler for each container,
/// given its path in `document`. Nested blocks are bound independently.
pub fn bind_all<M, S, F>(
    document: &Element,
    idle_timeout: IdleTimeout,
    mut attach: F,
) -> Result<Vec<(NodePath, VideoBlock<M, S>)>>
where
    M: MediaElement,
    S: Scheduler,
    F: FnMut(&NodePath, &Element) -> (M, S),
{
    let selector = Selector::parse(&format!(".{CONTAINER_CLASS}"))?;
    let mut paths = document.query_selector_all(&selector);
    if selector.matches(document) {
        paths.insert(0, NodePath::root());
    }

    paths
        .into_iter()
        .filter_map(|path| document.get(&path).map(|el| (path, el)))
        .map(|(path, container)| -> Result<_> {
            let (media, scheduler) = attach(&path, container);
            let block = VideoBlock::bind(container.clone(), media, scheduler, idle_timeout)?;
            Ok((path, block))
        })
        .collect()
}
