//! Capture-detect-render loop.
//!
//! `LiveFeed` is an explicit two-state machine:
//!
//! ```text
//!            start()                      stop()
//!   Idle ------------------> Running ------------------> Idle
//!   (no ticker, no camera)   (ticker on, camera open,    (ticker stopped first,
//!                             model loaded, size cached)  then camera released)
//! ```
//!
//! While running, each due tick reads one frame, resizes it to the size the
//! camera reported at open time, runs the detector, draws overlays for
//! confident detections and presents the result. A tick that gets no frame
//! leaves the display untouched.

use crate::constants::timing::TARGET_FPS;
use crate::error::Result;
use crate::overlay::{Overlay, build_overlays, draw_overlays};
use crate::ticker::FrameTicker;
use crate::traits::{Detector, DetectorLoader, FrameSink, FrameSource, SourceOpener};
use logging::Logger;
use std::time::Instant;

/// Lifecycle state of the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedState {
    Idle,
    Running,
}

/// What a call to [`LiveFeed::poll`] did
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Feed idle or the next tick is not due yet
    NotDue,
    /// The device delivered no frame; nothing was presented
    Skipped,
    /// A frame was annotated and presented
    Rendered(FrameReport),
}

/// Summary of one presented frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Sequence number within the current session, starting at 1
    pub frame_number: u64,
    /// Detections returned by the engine, before filtering
    pub detections: usize,
    /// Overlays drawn, in drawing order
    pub overlays: Vec<Overlay>,
}

/// Resources held while running
struct Session<S, D> {
    source: S,
    detector: D,
    width: i32,
    height: i32,
    frames_rendered: u64,
}

pub struct LiveFeed<O: SourceOpener, L: DetectorLoader> {
    opener: O,
    loader: L,
    ticker: FrameTicker,
    session: Option<Session<O::Source, L::Detector>>,
    logger: Logger,
}

impl<O: SourceOpener, L: DetectorLoader> LiveFeed<O, L> {
    pub fn new(opener: O, loader: L, logger: Logger) -> Self {
        Self {
            opener,
            loader,
            ticker: FrameTicker::new(TARGET_FPS),
            session: None,
            logger,
        }
    }

    pub fn state(&self) -> FeedState {
        if self.session.is_some() {
            FeedState::Running
        } else {
            FeedState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == FeedState::Running
    }

    pub fn is_camera_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn ticker(&self) -> &FrameTicker {
        &self.ticker
    }

    /// Display size recorded when the camera was opened
    pub fn frame_size(&self) -> Option<(i32, i32)> {
        self.session.as_ref().map(|s| (s.width, s.height))
    }

    /// Loads the model, opens the camera and starts the ticker.
    ///
    /// On error the feed stays idle and anything acquired so far is dropped.
    /// Starting an already running feed is a no-op.
    pub fn start(&mut self, now: Instant) -> Result<()> {
        if self.is_running() {
            return Ok(());
        }

        let detector = self.loader.load()?;
        let source = self.opener.open()?;
        let (width, height) = source.frame_size();

        self.session = Some(Session {
            source,
            detector,
            width,
            height,
            frames_rendered: 0,
        });
        self.ticker.start(now);

        self.logger.info(&format!(
            "[LIVE] Feed started at {}x{}, {:.1} ticks/s",
            width,
            height,
            1.0 / self.ticker.interval().as_secs_f64()
        ));
        Ok(())
    }

    /// Stops the ticker, then releases the camera and detector
    pub fn stop(&mut self) {
        self.ticker.stop();

        if let Some(session) = self.session.take() {
            self.logger.info(&format!(
                "[LIVE] Feed stopped after {} frames",
                session.frames_rendered
            ));
        }
    }

    /// Runs a tick if one is due at `now`
    pub fn poll(&mut self, now: Instant, sink: &mut impl FrameSink) -> Result<TickOutcome> {
        if !self.ticker.poll(now) {
            return Ok(TickOutcome::NotDue);
        }
        self.tick(sink)
    }

    /// Runs one capture-detect-render pass regardless of the schedule
    pub fn tick(&mut self, sink: &mut impl FrameSink) -> Result<TickOutcome> {
        let Some(session) = self.session.as_mut() else {
            return Ok(TickOutcome::NotDue);
        };

        let Some(mut frame) = session.source.read_frame()? else {
            self.logger.debug("[LIVE] No frame from camera, tick skipped");
            return Ok(TickOutcome::Skipped);
        };

        frame.resize_to(session.width, session.height)?;

        let detections = session.detector.detect(&frame)?;
        let overlays = build_overlays(&detections, session.width, session.height)?;
        draw_overlays(&mut frame, &overlays)?;

        sink.present(&frame)?;
        session.frames_rendered += 1;

        Ok(TickOutcome::Rendered(FrameReport {
            frame_number: session.frames_rendered,
            detections: detections.len(),
            overlays,
        }))
    }
}

impl<O: SourceOpener, L: DetectorLoader> Drop for LiveFeed<O, L> {
    fn drop(&mut self) {
        self.stop();
    }
}
