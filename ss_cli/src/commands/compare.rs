use crate::error::Result;
use crate::report::reporter::{select_pairs, write_report};
use crate::settings::Settings;
use ss_inference::encoder::SentenceEncoder;
use ss_inference::model::ModelRuntime;
use ss_inference::runner::Runner;
use std::io::Write;
use tracing::debug;

pub fn handle<W: Write>(settings: &Settings, out: &mut W) -> Result<()> {
    let model = ModelRuntime::load(&settings.config)?;
    run(Runner::new(model), settings, out)
}

pub fn run<E: SentenceEncoder, W: Write>(runner: Runner<E>, settings: &Settings, out: &mut W) -> Result<()> {
    let matrix = runner.compare(&settings.source, &settings.target)?;
    let pairs = select_pairs(&settings.source, &settings.target, &matrix, &settings.report)?;
    debug!("reporting {} of {} pairs", pairs.len(), matrix.rows() * matrix.cols());
    write_report(out, &pairs, &settings.report)
}
