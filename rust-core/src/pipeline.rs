//! Scope pipeline: acquire -> filter -> transform -> scale -> render
//!
//! One cycle runs to completion on the caller's thread. Hardware lives behind
//! the injected `SampleSource`, `Renderer` and `Clock` collaborators.

use crate::config::PipelineConfig;
use crate::display::{
    mirrored_bars, normalize, pixel_trace, scale_to_full_scale, scale_to_peak, Clock,
    DisplayFrame, DisplayMode, ModeController, Renderer,
};
use crate::error::{AcquireError, DspError};
use crate::filters::FirFilter;
use crate::spectrum::{AnalyzerConfig, SpectrumAnalyzer};
use tracing::{debug, warn};

/// Supplies one fixed-length frame of samples per cycle
pub trait SampleSource {
    fn acquire(&mut self, len: usize) -> Result<Vec<f64>, AcquireError>;
}

/// How a cycle ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A frame in this mode reached the renderer
    Rendered(DisplayMode),

    /// Acquisition failed; nothing was rendered or kept
    Abandoned(AcquireError),
}

/// Oscilloscope-style pipeline alternating between trace and spectrum
pub struct ScopePipeline<S, R, C> {
    config: PipelineConfig,
    source: S,
    renderer: R,
    clock: C,
    filter: Option<FirFilter>,
    analyzer: SpectrumAnalyzer,
    controller: ModeController,
}

impl<S, R, C> ScopePipeline<S, R, C>
where
    S: SampleSource,
    R: Renderer,
    C: Clock,
{
    /// Build the pipeline, failing fast on any configuration error
    pub fn new(config: PipelineConfig, source: S, renderer: R, clock: C) -> Result<Self, DspError> {
        config.validate()?;

        let filter = match &config.kernel {
            Some(kernel) => Some(FirFilter::new(kernel.clone())?),
            None => None,
        };

        let analyzer = SpectrumAnalyzer::new(AnalyzerConfig {
            transform_len: config.transform_len,
            transform: config.transform,
            remove_dc: true,
            sample_rate: config.sample_rate,
        })?;

        let controller = ModeController::new(config.toggle_interval_ms, clock.now_ms());

        Ok(Self {
            config,
            source,
            renderer,
            clock,
            filter,
            analyzer,
            controller,
        })
    }

    /// Run one acquire/process/render cycle
    pub fn run_cycle(&mut self) -> Result<CycleOutcome, DspError> {
        let expected = self.config.acquisition_len;

        let raw = match self.source.acquire(expected) {
            Ok(samples) if samples.len() == expected => samples,
            Ok(samples) => {
                let err = AcquireError::ShortRead {
                    expected,
                    actual: samples.len(),
                };
                warn!(%err, "abandoning cycle");
                return Ok(CycleOutcome::Abandoned(err));
            }
            Err(err) => {
                warn!(%err, "abandoning cycle");
                return Ok(CycleOutcome::Abandoned(err));
            }
        };

        let samples = match self.filter.as_mut() {
            Some(filter) => filter.filter_sequence(&raw),
            None => raw,
        };

        let mode = self.controller.tick(self.clock.now_ms());
        let frame = match mode {
            DisplayMode::Time => self.time_frame(&samples),
            DisplayMode::Frequency => self.frequency_frame(&samples)?,
        };

        debug!(?mode, "rendering frame");
        self.renderer.render(&frame);

        Ok(CycleOutcome::Rendered(mode))
    }

    /// Run up to `cycles` cycles; abandoned cycles do not stop the loop
    ///
    /// # Returns
    /// Number of frames rendered
    pub fn run(&mut self, cycles: usize) -> Result<usize, DspError> {
        let mut rendered = 0;
        for _ in 0..cycles {
            if let CycleOutcome::Rendered(_) = self.run_cycle()? {
                rendered += 1;
            }
        }
        Ok(rendered)
    }

    /// Every `time_stride`-th sample as one pixel per column
    fn time_frame(&self, samples: &[f64]) -> DisplayFrame {
        let width = self.config.display_width;
        let height = self.config.display_height;

        let thinned: Vec<f64> = samples
            .iter()
            .step_by(self.config.time_stride)
            .take(width)
            .copied()
            .collect();

        let heights = match self.config.adc_full_scale {
            Some(full_scale) => scale_to_full_scale(&thinned, full_scale, height),
            None => normalize(&thinned, 0, height as i32 - 1)
                .into_iter()
                .map(|h| h as usize)
                .collect(),
        };

        pixel_trace(&heights, width, height)
    }

    /// Mirrored magnitude bars of the leading transform window
    fn frequency_frame(&mut self, samples: &[f64]) -> Result<DisplayFrame, DspError> {
        let magnitudes = self.analyzer.analyze(samples)?;
        let heights = scale_to_peak(&magnitudes, self.config.display_height);

        Ok(mirrored_bars(&heights, self.config.display_width, self.config.display_height))
    }

    /// Current display mode
    pub fn mode(&self) -> DisplayMode {
        self.controller.mode()
    }

    /// Rendering collaborator
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Acquisition collaborator
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Active configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{FrameMarks, TextRenderer};
    use crate::spectrum::TransformKind;
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::f64::consts::PI;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct ManualClock(Rc<Cell<u64>>);

    impl ManualClock {
        fn advance(&self, ms: u64) {
            self.0.set(self.0.get() + ms);
        }
    }

    impl Clock for ManualClock {
        fn now_ms(&self) -> u64 {
            self.0.get()
        }
    }

    /// Replays queued frames, then repeats a 12-bit tone around mid-scale
    struct ScriptedSource {
        queued: VecDeque<Result<Vec<f64>, AcquireError>>,
    }

    impl ScriptedSource {
        fn new() -> Self {
            Self {
                queued: VecDeque::new(),
            }
        }
    }

    impl SampleSource for ScriptedSource {
        fn acquire(&mut self, len: usize) -> Result<Vec<f64>, AcquireError> {
            self.queued
                .pop_front()
                .unwrap_or_else(|| Ok(adc_tone(len, 8)))
        }
    }

    /// Tone that completes `cycles` periods every 128 samples
    fn adc_tone(len: usize, cycles: usize) -> Vec<f64> {
        (0..len)
            .map(|i| 2048.0 + 1500.0 * (2.0 * PI * cycles as f64 * i as f64 / 128.0).sin())
            .collect()
    }

    /// Captures frames without drawing
    #[derive(Default)]
    struct FrameLog(Vec<DisplayFrame>);

    impl Renderer for FrameLog {
        fn render(&mut self, frame: &DisplayFrame) {
            self.0.push(frame.clone());
        }
    }

    fn pipeline(
        config: PipelineConfig,
    ) -> (ScopePipeline<ScriptedSource, FrameLog, ManualClock>, ManualClock) {
        let clock = ManualClock::default();
        let pipeline = ScopePipeline::new(config, ScriptedSource::new(), FrameLog::default(), clock.clone())
            .unwrap();
        (pipeline, clock)
    }

    #[test]
    fn test_time_mode_trace() {
        let (mut scope, _clock) = pipeline(PipelineConfig::default());

        assert_eq!(scope.run_cycle().unwrap(), CycleOutcome::Rendered(DisplayMode::Time));

        let frame = &scope.renderer().0[0];
        match &frame.marks {
            FrameMarks::Pixels(points) => {
                assert_eq!(points.len(), 128);
                // First sample is mid-scale: 2048 / 4095 * 31 -> 15 -> row 16
                assert_eq!(points[0], (0, 16));
                assert!(points.iter().all(|&(_, y)| y < 32));
            }
            FrameMarks::Columns(_) => panic!("time view draws pixels"),
        }
    }

    #[test]
    fn test_switches_to_spectrum_after_interval() {
        let (mut scope, clock) = pipeline(PipelineConfig::default());

        scope.run_cycle().unwrap();
        clock.advance(3000);
        assert_eq!(scope.run_cycle().unwrap(), CycleOutcome::Rendered(DisplayMode::Time));
        clock.advance(1);
        assert_eq!(
            scope.run_cycle().unwrap(),
            CycleOutcome::Rendered(DisplayMode::Frequency)
        );

        let frame = scope.renderer().0.last().unwrap();
        match &frame.marks {
            // Bin 8 -> columns 64 + 32 and 63 - 32
            FrameMarks::Columns(cols) => {
                assert_eq!(cols[96], 31);
                assert_eq!(cols[97], 31);
                assert_eq!(cols[31], 31);
                assert_eq!(cols[30], 31);
                assert_eq!(cols[64], 0);
            }
            FrameMarks::Pixels(_) => panic!("spectrum view draws bars"),
        }
    }

    #[test]
    fn test_interrupted_cycle_is_abandoned() {
        let (mut scope, _clock) = pipeline(PipelineConfig::default());
        scope.source_mut().queued.push_back(Err(AcquireError::Interrupted));
        scope.source_mut().queued.push_back(Ok(vec![0.0; 10]));

        assert_eq!(
            scope.run_cycle().unwrap(),
            CycleOutcome::Abandoned(AcquireError::Interrupted)
        );
        assert_eq!(
            scope.run_cycle().unwrap(),
            CycleOutcome::Abandoned(AcquireError::ShortRead {
                expected: 512,
                actual: 10
            })
        );
        assert!(scope.renderer().0.is_empty());

        // The loop carries on with the next good frame
        assert_eq!(scope.run(3).unwrap(), 3);
    }

    #[test]
    fn test_filtered_pipeline() {
        let config = PipelineConfig {
            kernel: Some(vec![0.25, 0.5, 0.25]),
            adc_full_scale: None,
            ..PipelineConfig::default()
        };
        let (mut scope, _clock) = pipeline(config);

        assert_eq!(scope.run(2).unwrap(), 2);
        let frame = &scope.renderer().0[1];
        match &frame.marks {
            FrameMarks::Pixels(points) => {
                // Autoscaled trace reaches both the top and bottom rows
                assert!(points.iter().any(|&(_, y)| y == 0));
                assert!(points.iter().any(|&(_, y)| y == 31));
            }
            FrameMarks::Columns(_) => panic!("time view draws pixels"),
        }
    }

    #[test]
    fn test_transform_paths_render_same_spectrum() {
        let mut frames = Vec::new();

        for transform in [TransformKind::Direct, TransformKind::Radix2, TransformKind::Planned] {
            let config = PipelineConfig {
                transform,
                toggle_interval_ms: 0,
                ..PipelineConfig::default()
            };
            let (mut scope, clock) = pipeline(config);
            clock.advance(1);
            assert_eq!(
                scope.run_cycle().unwrap(),
                CycleOutcome::Rendered(DisplayMode::Frequency)
            );
            frames.push(scope.renderer().0[0].clone());
        }

        assert_eq!(frames[0], frames[1]);
        assert_eq!(frames[1], frames[2]);
    }

    #[test]
    fn test_configuration_errors_fail_fast() {
        let config = PipelineConfig {
            transform_len: 100,
            ..PipelineConfig::default()
        };
        let result = ScopePipeline::new(
            config,
            ScriptedSource::new(),
            TextRenderer::new(),
            ManualClock::default(),
        );
        assert_eq!(result.err(), Some(DspError::NotPowerOfTwo(100)));
    }
}
