use crate::cli::CompareArgs;
use crate::error::Result;
use crate::report::reporter::ReportOptions;
use ss_core::config::Config;
use ss_core::error::ErrorCore;
use ss_core::types::sentence::SentenceList;
use std::fs;
use std::path::Path;

/// Everything a compare run needs, after defaults, config file and flags
/// have been merged in that order.
#[derive(Debug)]
pub struct Settings {
    pub config: Config,
    pub source: SentenceList,
    pub target: SentenceList,
    pub report: ReportOptions,
}

impl Settings {
    pub fn from_args(args: CompareArgs) -> Result<Settings> {
        let mut config = match &args.config {
            Some(path) => Config::from_path(path)?,
            None => Config::default(),
        };

        if let Some(model) = args.model {
            config.model = model;
        }
        if let Some(cache_dir) = args.cache_dir {
            config.cache_dir = Some(cache_dir);
        }
        if let Some(batch_size) = args.batch_size {
            config.batch_size = Some(batch_size);
        }
        if let Some(max_length) = args.max_length {
            config.max_length = max_length;
        }
        config.show_download_progress |= args.show_progress;
        config.validate()?;

        let source = sentence_list("A", args.source, args.source_file.as_deref(), &config.source)?;
        let target = sentence_list("B", args.target, args.target_file.as_deref(), &config.target)?;

        Ok(Settings {
            config,
            source,
            target,
            report: ReportOptions {
                all: args.all,
                rank: args.rank,
                json: args.json,
            },
        })
    }
}

fn sentence_list(
    label: &'static str,
    inline: Vec<String>,
    file: Option<&Path>,
    fallback: &[String],
) -> Result<SentenceList> {
    if let Some(path) = file {
        let text = fs::read_to_string(path).map_err(|source| ErrorCore::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        return Ok(SentenceList::from_lines(label, &text)?);
    }
    if !inline.is_empty() {
        return Ok(SentenceList::new(label, inline)?);
    }
    Ok(SentenceList::new(label, fallback.to_vec())?)
}
