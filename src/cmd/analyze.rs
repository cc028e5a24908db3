use crate::reports;
use clap::Args;
use ngramalyzer::config::AnalysisParams;
use ngramalyzer::error::NgResult;
use ngramalyzer::input::RawRow;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub params: AnalysisParams,

    /// How many ranked n-grams to display
    #[arg(short, long, default_value_t = 10)]
    pub top: usize,
}

pub fn run(args: AnalyzeArgs, rows: Vec<RawRow>) -> NgResult<()> {
    let session = super::run_session(&args.params, rows)?;

    reports::print_top_ngrams(
        session.top(args.top),
        session.config(),
        session.ngram_size(),
    );
    reports::print_summary(session.records().len(), session.rows().len());
    Ok(())
}
