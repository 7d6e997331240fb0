#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User submitted the current input for analysis.
    AnalyzeClicked,
    /// Ticker fired one progress update.
    Tick,
    /// User asked to discard the report and start a new scan.
    NewScanClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
