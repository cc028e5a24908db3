pub mod analyze;
pub mod export;

use ngramalyzer::config::AnalysisParams;
use ngramalyzer::error::NgResult;
use ngramalyzer::input::RawRow;
use ngramalyzer::session::Session;
use tracing::warn;

/// Builds a session from CLI options and runs one pass over `rows`.
///
/// Warnings are logged and the pass is kept; hard conditions become the error.
pub fn run_session(params: &AnalysisParams, rows: Vec<RawRow>) -> NgResult<Session> {
    let mut session = Session::new();
    session.set_metric_config(params.metric_config()?);
    session.set_ngram_size(params.ngram_size());
    session.set_rows(rows);

    match session.take_message() {
        Some(msg) if msg.is_warning() => warn!("⚠️  {}", msg),
        Some(msg) => return Err(msg),
        None => {}
    }
    Ok(session)
}
