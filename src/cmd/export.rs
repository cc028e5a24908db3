use clap::Args;
use ngramalyzer::config::AnalysisParams;
use ngramalyzer::error::NgResult;
use ngramalyzer::export::{default_export_filename, Quoting};
use ngramalyzer::input::RawRow;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub params: AnalysisParams,

    /// Destination file or directory. Prints to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Quoting::Never)]
    pub quoting: Quoting,
}

pub fn run(args: ExportArgs, rows: Vec<RawRow>) -> NgResult<()> {
    let mut session = super::run_session(&args.params, rows)?;
    let text = session.export_text(args.quoting)?;

    match args.output {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(default_export_filename(session.ngram_size()))
            } else {
                path
            };
            fs::write(&path, format!("{}\n", text))?;
            info!(
                "💾 Wrote {} n-grams to {}",
                session.records().len(),
                path.display()
            );
        }
        None => println!("{}", text),
    }
    Ok(())
}
