use std::collections::BTreeSet;

use gua_analysis::{AnalysisConfig, TextTable};
use gua_core::Hexagram;

use super::render::render;

pub struct ShowArgs<'a> {
    pub lines: &'a str,
    pub changing: Option<&'a str>,
    pub topic: &'a str,
    pub context: &'a str,
    pub format: &'a str,
    pub template: &'a str,
    pub time: Option<&'a str>,
}

pub fn run(args: &ShowArgs<'_>) -> Result<(), String> {
    let analysis = AnalysisConfig::default().with_context(super::parse_context(args.context)?);
    let lines = parse_lines(args.lines)?;
    let changing = parse_changing(args.changing.unwrap_or(""))?;
    let time = super::parse_time(args.time)?;

    let hexagram =
        Hexagram::from_slice(&lines, changing, args.topic, time).map_err(|e| e.to_string())?;
    let report = analysis.analyze(&hexagram, TextTable::bundled());
    let content = render(&report, args.format, args.template)?;
    print!("{content}");
    Ok(())
}

fn parse_lines(s: &str) -> Result<Vec<u8>, String> {
    s.chars()
        .map(|c| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            _ => Err(format!("invalid line '{c}' in \"{s}\". Use 0 (yin) or 1 (yang)")),
        })
        .collect()
}

fn parse_changing(s: &str) -> Result<BTreeSet<usize>, String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<usize>()
                .map_err(|_| format!("invalid changing-line index: \"{part}\""))
        })
        .collect()
}
