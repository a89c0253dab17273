use farmlog_log::{MeasureOption, quantity_measure_options};
use farmlog_quick::MeasureOptionSource;

/// The standard quantity measures.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMeasures;

impl MeasureOptionSource for StandardMeasures {
    fn options(&self) -> Vec<MeasureOption> {
        quantity_measure_options()
    }
}
