use std::path::Path;

use gua_analysis::AnalysisConfig;
use gua_core::DivinationConfig;

use super::render::render;

pub struct CastArgs<'a> {
    pub topic: &'a str,
    pub seed: Option<u64>,
    pub time: Option<&'a str>,
    pub context: &'a str,
    pub format: &'a str,
    pub template: &'a str,
    pub output: Option<&'a Path>,
    pub texts: Option<&'a Path>,
}

pub fn run(args: &CastArgs<'_>) -> Result<(), String> {
    let analysis = AnalysisConfig::default().with_context(super::parse_context(args.context)?);
    let texts = super::load_texts(args.texts)?;

    let mut divination = DivinationConfig::default()
        .with_topic(args.topic)
        .with_time(super::parse_time(args.time)?);
    if let Some(seed) = args.seed {
        divination = divination.with_seed(seed);
    }

    let hexagram = divination.cast();
    let report = analysis.analyze(&hexagram, &*texts);
    let content = render(&report, args.format, args.template)?;
    super::emit(&content, args.output)
}
