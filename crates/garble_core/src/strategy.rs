/// A text-quality detector: decides whether text looks like real prose.
///
/// `predict_proba` returns a score in `[0, 1]` where higher means more
/// plausible; `predict` applies the strategy's own decision rule.
pub trait Strategy: Send + Sync {
    /// Stable identifier used in logs and reports.
    fn name(&self) -> &'static str;

    fn predict(&self, text: &str) -> bool;

    fn predict_proba(&self, text: &str) -> f64;

    fn predict_batch(&self, texts: &[&str]) -> Vec<bool> {
        texts.iter().map(|text| self.predict(text)).collect()
    }

    fn predict_proba_batch(&self, texts: &[&str]) -> Vec<f64> {
        texts.iter().map(|text| self.predict_proba(text)).collect()
    }
}
