//! Extrapolation session
//!
//! Owns the collected points, the current configuration, the selected
//! subset, and the prediction log. A typical run is
//! `collect -> configure -> select_subset -> extrapolate`; each step
//! returns a `Result` instead of leaving unset fields behind.
//!
//! Collecting points or reconfiguring discards the selected subset, so a
//! prediction is always built from a subset chosen for the current
//! configuration. Failed operations leave the prediction log untouched.

use extrapolation_spi::{
    clamp_subset_size, Configuration, DataPoint, ExtrapolationError, Prediction, Result,
    RiskClassifier, SubsetSelector,
};
use tracing::{debug, info};

use crate::evaluator::interpolator_for;
use crate::interpretation::Interpretation;
use crate::narration;
use crate::risk::DissolvedOxygenClassifier;
use crate::selection::NearestSelector;

/// Stateful driver for selecting points and extrapolating.
///
/// Not designed for concurrent use; callers that share a session must
/// serialize access themselves.
pub struct ExtrapolationSession {
    points: Vec<DataPoint>,
    config: Configuration,
    subset: Option<Vec<DataPoint>>,
    predictions: Vec<Prediction>,
    selector: Box<dyn SubsetSelector>,
    classifier: Box<dyn RiskClassifier>,
}

impl ExtrapolationSession {
    /// Empty session using nearest-point selection and dissolved-oxygen grading
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            config: Configuration::default(),
            subset: None,
            predictions: Vec::new(),
            selector: Box::new(NearestSelector),
            classifier: Box::new(DissolvedOxygenClassifier),
        }
    }

    /// Replace the subset selection policy
    pub fn with_selector(mut self, selector: Box<dyn SubsetSelector>) -> Self {
        self.selector = selector;
        self
    }

    /// Replace the risk classifier
    pub fn with_classifier(mut self, classifier: Box<dyn RiskClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Subset chosen by the last successful [`select_subset`](Self::select_subset)
    pub fn subset(&self) -> Option<&[DataPoint]> {
        self.subset.as_deref()
    }

    pub fn predictions(&self) -> &[Prediction] {
        &self.predictions
    }

    pub fn latest_prediction(&self) -> Option<&Prediction> {
        self.predictions.last()
    }

    /// Largest collected x-value
    pub fn max_x(&self) -> Option<f64> {
        self.latest_point().map(|p| p.x)
    }

    /// Collected point with the largest x-value
    pub fn latest_point(&self) -> Option<DataPoint> {
        self.points
            .iter()
            .copied()
            .max_by(|a, b| a.x.total_cmp(&b.x))
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Replace the whole point collection
    pub fn collect<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = DataPoint>,
    {
        self.points = points.into_iter().collect();
        self.subset = None;
        info!(count = self.points.len(), "collected data points");
    }

    /// Append one reading
    pub fn push_point(&mut self, point: DataPoint) {
        self.points.push(point);
        self.subset = None;
        debug!(x = point.x, y = point.y, count = self.points.len(), "added data point");
    }

    /// Remove the reading at `index`, if any
    pub fn remove_point(&mut self, index: usize) -> Option<DataPoint> {
        if index >= self.points.len() {
            return None;
        }
        let point = self.points.remove(index);
        self.subset = None;
        debug!(index, count = self.points.len(), "removed data point");
        Some(point)
    }

    /// Replace the configuration, clamping the subset size to `[2, points]`
    pub fn configure(&mut self, config: Configuration) -> &Configuration {
        self.config = config.clamped(self.points.len());
        self.subset = None;
        debug!(
            method = %self.config.method,
            subset_size = self.config.subset_size,
            target_x = ?self.config.target_x,
            "configured session"
        );
        &self.config
    }

    /// Set the target to `max_x + horizon` and return it.
    ///
    /// Fails with `InsufficientData` on an empty collection rather than
    /// measuring the horizon from x = 0.
    pub fn set_prediction_horizon(&mut self, horizon: f64) -> Result<f64> {
        let max_x = self.max_x().ok_or(ExtrapolationError::InsufficientData {
            required: 1,
            actual: 0,
        })?;
        let target_x = max_x + horizon;

        self.config.target_x = Some(target_x);
        self.subset = None;
        debug!(horizon, target_x, "prediction horizon set");

        Ok(target_x)
    }

    /// Choose the points nearest to the configured target
    pub fn select_subset(&mut self) -> Result<&[DataPoint]> {
        if self.points.len() < 2 {
            return Err(ExtrapolationError::InsufficientData {
                required: 2,
                actual: self.points.len(),
            });
        }
        let target_x = self.config.target_x.ok_or(ExtrapolationError::TargetNotSet)?;
        let n = clamp_subset_size(self.config.subset_size, self.points.len());

        let subset = self.selector.select(&self.points, target_x, n)?;
        debug!(target_x, size = subset.len(), "selected subset");

        Ok(self.subset.insert(subset).as_slice())
    }

    /// Evaluate the configured method on the selected subset and log the prediction
    pub fn extrapolate(&mut self) -> Result<&Prediction> {
        let subset = match self.subset.as_deref() {
            Some(subset) if !subset.is_empty() => subset,
            _ => return Err(ExtrapolationError::SubsetNotSelected),
        };
        let target_x = self.config.target_x.ok_or(ExtrapolationError::TargetNotSet)?;
        let method = self.config.method;

        let xs: Vec<f64> = subset.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = subset.iter().map(|p| p.y).collect();

        let trace = interpolator_for(method).evaluate_traced(&xs, &ys, target_x)?;
        let y = trace.value();

        let prediction = Prediction {
            x: target_x,
            y,
            method,
            subset_size: subset.len(),
            risk: self.classifier.classify(y),
            narrative: narration::render(&xs, &ys, target_x, &trace),
        };
        info!(
            method = %method,
            x = target_x,
            y,
            tier = %prediction.risk.tier,
            "prediction stored"
        );

        let index = self.predictions.len();
        self.predictions.push(prediction);
        Ok(&self.predictions[index])
    }

    /// Select a subset and extrapolate in one call
    pub fn run(&mut self) -> Result<&Prediction> {
        self.select_subset()?;
        self.extrapolate()
    }

    /// Compare the latest collected point with the latest prediction
    pub fn interpret_latest(&self) -> Option<Interpretation> {
        let current = self.latest_point()?;
        let prediction = self.latest_prediction()?;
        Some(Interpretation::with_classifier(
            self.classifier.as_ref(),
            current.x,
            current.y,
            prediction.x,
            prediction.y,
        ))
    }
}

impl Default for ExtrapolationSession {
    fn default() -> Self {
        Self::new()
    }
}
