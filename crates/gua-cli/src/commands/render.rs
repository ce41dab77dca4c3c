//! Report rendering: JSON and two Markdown templates.

use gua_analysis::Report;
use gua_analysis::report::HexagramSummary;

pub fn render(report: &Report, format: &str, template: &str) -> Result<String, String> {
    match format {
        "json" => serde_json::to_string_pretty(report)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| format!("JSON serialization error: {e}")),
        "markdown" | "md" => match template {
            "modern" => Ok(modern(report)),
            "traditional" => Ok(traditional(report)),
            _ => Err(format!(
                "unsupported template: \"{template}\". Use: modern, traditional"
            )),
        },
        _ => Err(format!(
            "unsupported format: \"{format}\". Use: markdown, json"
        )),
    }
}

fn title(summary: &HexagramSummary) -> String {
    if summary.name.is_empty() {
        summary.trigrams.clone()
    } else {
        format!("{} ({})", summary.name, summary.trigrams)
    }
}

fn bullets(out: &mut String, items: &[String]) {
    for item in items {
        out.push_str(&format!("- {item}\n"));
    }
    out.push('\n');
}

fn modern(report: &Report) -> String {
    let basic = &report.basic_info;
    let info = &report.hexagram_info;
    let layout = &report.line_layout;
    let rel = &report.relationships;
    let recs = &report.recommendations;
    let mut out = String::new();

    out.push_str(&format!("# Reading: {}\n\n", title(&info.original)));
    if !basic.topic.is_empty() {
        out.push_str(&format!("**Topic:** {}\n\n", basic.topic));
    }
    out.push_str(&format!("**Time:** {} ({})\n\n", basic.time, basic.season));
    out.push_str(&format!("**Context:** {}\n\n", basic.context));
    out.push_str(&format!(
        "**Day master:** {} {}\n\n",
        basic.celestial_stem.name(),
        basic.day_master
    ));

    out.push_str("## Hexagram\n\n");
    if !info.original.description.is_empty() {
        out.push_str(&format!("> {}\n\n", info.original.description));
    }
    if let Some(changed) = &info.changed {
        out.push_str(&format!("**Changes to:** {}\n\n", title(changed)));
    }
    for line in info.lines.iter().rev() {
        out.push_str(&format!("- {}\n", line.explanation));
    }
    out.push('\n');

    out.push_str("## Lines\n\n");
    out.push_str(&format!("**Palace:** {}\n\n", layout.palace));
    out.push_str("| Pos | Line | State | Element | Stem/Branch | Relative | Spirit | Ten god | Strength |\n");
    out.push_str("|-----|------|-------|---------|-------------|----------|--------|---------|----------|\n");
    for line in layout.lines.iter().rev() {
        let marker = if line.position == layout.world_response.world {
            " 世"
        } else if line.position == layout.world_response.response {
            " 应"
        } else {
            ""
        };
        out.push_str(&format!(
            "| {}{} | {} | {} | {} | {} | {} | {} | {} | {:.2} ({}) |\n",
            line.position,
            marker,
            line.polarity,
            line.state,
            line.element,
            line.stem_branch,
            line.six_relative,
            line.six_spirit,
            line.ten_god,
            line.strength.value,
            line.strength.level,
        ));
    }
    out.push('\n');
    out.push_str(&format!(
        "**World/Response:** {} / {}, {}\n\n",
        layout.world_response.world, layout.world_response.response, layout.world_response.description
    ));
    out.push_str(&format!(
        "**Dynamics:** {} ({})\n\n",
        layout.dynamics.level, layout.dynamics.description
    ));

    out.push_str("## Five Elements\n\n");
    let five = &rel.five_elements;
    out.push_str(&format!(
        "**Status:** {} ({:.1}/100), balance {:.2}\n\n",
        five.status.level, five.status.score, five.tally.balance
    ));
    for entry in &five.relations {
        out.push_str(&format!("- {}: {}\n", entry.label, entry.relation.description));
    }
    out.push_str(&format!(
        "- Season: {} ({})\n\n",
        five.seasonal.season,
        if five.seasonal.favorable { "favorable" } else { "unfavorable" }
    ));
    out.push_str(&format!("{}\n\n", rel.comparison.summary));

    out.push_str("## Roles\n\n");
    out.push_str(&format!("- World line: {}\n", rel.world_line.state));
    out.push_str(&format!("- Response line: {}\n", rel.response_line.state));
    out.push_str(&format!(
        "- World/response: {}, {}\n",
        rel.world_response.resonance, rel.world_response.meaning
    ));
    out.push_str(&format!("- Relatives: {}\n", rel.relatives.description));
    out.push_str(&format!("- Ten gods: {}\n\n", rel.ten_gods.meaning));

    out.push_str("## Changes & Trend\n\n");
    out.push_str(&format!(
        "- Changes: {} ({}), {}\n",
        rel.changes.change_type, rel.changes.direction.dominant, rel.changes.temporal.pattern
    ));
    out.push_str(&format!(
        "- Direction: {} ({})\n",
        rel.trend.direction.kind, rel.trend.direction.description
    ));
    out.push_str(&format!(
        "- Energy: {} ({})\n",
        rel.trend.energy.name(),
        rel.trend.energy.description()
    ));
    out.push_str(&format!(
        "- Confidence: {:.2} ({})\n\n",
        rel.trend.confidence, rel.trend.confidence_level.description
    ));

    out.push_str("## Recommendations\n\n");
    out.push_str("### Short term\n\n");
    bullets(&mut out, &recs.short_term);
    out.push_str("### Medium term\n\n");
    bullets(&mut out, &recs.medium_term);
    out.push_str("### Long term\n\n");
    bullets(&mut out, &recs.long_term);
    if !recs.risks.is_empty() {
        out.push_str("### Risks\n\n");
        bullets(&mut out, &recs.risks);
    }
    out.push_str("### Najia\n\n");
    bullets(&mut out, &recs.najia);

    out
}

fn traditional(report: &Report) -> String {
    let basic = &report.basic_info;
    let info = &report.hexagram_info;
    let layout = &report.line_layout;
    let rel = &report.relationships;
    let recs = &report.recommendations;
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", title(&info.original)));
    out.push_str("## 起卦信息\n\n");
    if !basic.topic.is_empty() {
        out.push_str(&format!("- 所问：{}\n", basic.topic));
    }
    out.push_str(&format!("- 时间：{}（{}季）\n", basic.time, basic.season));
    out.push_str(&format!("- 干支：{}\n", basic.stem_branches.join(" ")));
    out.push_str(&format!(
        "- 日主：{}{}\n\n",
        basic.celestial_stem.name(),
        basic.day_master
    ));

    out.push_str("## 卦辞\n\n");
    if !info.original.description.is_empty() {
        out.push_str(&format!("{}\n\n", info.original.description));
    }
    if let Some(changed) = &info.changed {
        out.push_str(&format!("之卦：{}\n\n", title(changed)));
    }

    out.push_str("## 六爻\n\n");
    for line in layout.lines.iter().rev() {
        let symbol = if line.value == 1 { "▅▅▅▅▅" } else { "▅▅ ▅▅" };
        let marker = if line.position == layout.world_response.world {
            "世"
        } else if line.position == layout.world_response.response {
            "应"
        } else {
            "　"
        };
        let moving = if line.changing { "○" } else { "　" };
        out.push_str(&format!(
            "    {} {} {} {} {} {}\n",
            line.six_spirit, line.six_relative, line.stem_branch, symbol, moving, marker
        ));
    }
    out.push('\n');
    out.push_str(&format!(
        "{}宫，{}，{}\n\n",
        layout.palace, layout.world_response.description, layout.dynamics.description
    ));
    for line in &info.lines {
        if !line.text.is_empty() {
            out.push_str(&format!("- {}\n", line.explanation));
        }
    }
    out.push('\n');

    out.push_str("## 五行\n\n");
    let five = &rel.five_elements;
    out.push_str(&format!(
        "综合评分 {:.1}，{}。{}\n\n",
        five.status.score, five.status.level, rel.comparison.summary
    ));
    bullets(&mut out, &five.status.recommendations);

    out.push_str("## 断语\n\n");
    out.push_str(&format!("- {}\n", rel.world_line.state));
    out.push_str(&format!("- {}\n", rel.response_line.state));
    out.push_str(&format!(
        "- {}：{}\n",
        rel.world_response.resonance, rel.world_response.meaning
    ));
    out.push_str(&format!("- {}\n", rel.relatives.description));
    out.push_str(&format!(
        "- {}，{}\n\n",
        rel.trend.energy.description(),
        rel.trend.confidence_level.description
    ));

    out.push_str("## 建议\n\n");
    let advice: Vec<String> = recs
        .short_term
        .iter()
        .chain(&recs.medium_term)
        .chain(&recs.long_term)
        .chain(&recs.najia)
        .cloned()
        .collect();
    bullets(&mut out, &advice);
    if !recs.risks.is_empty() {
        out.push_str("## 注意\n\n");
        bullets(&mut out, &recs.risks);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use gua_analysis::{ContextType, TextTable, analyze};
    use gua_core::Hexagram;
    use std::collections::BTreeSet;

    fn report() -> Report {
        let time = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let changing: BTreeSet<usize> = [0].into_iter().collect();
        let h = Hexagram::from_lines([1; 6], changing, 0, 0, "test", time).unwrap();
        analyze(&h, ContextType::General, TextTable::bundled())
    }

    #[test]
    fn modern_template_headings() {
        let md = render(&report(), "markdown", "modern").unwrap();
        assert!(md.starts_with("# Reading: 乾为天"));
        assert!(md.contains("## Five Elements"));
        assert!(md.contains("**Changes to:**"));
        assert!(md.contains("### Najia"));
        assert!(md.contains("- Response line: 应爻"));
    }

    #[test]
    fn traditional_template_headings() {
        let md = render(&report(), "md", "traditional").unwrap();
        assert!(md.contains("## 六爻"));
        assert!(md.contains("之卦："));
        assert!(md.contains("乾宫"));
    }

    #[test]
    fn json_is_valid() {
        let json = render(&report(), "json", "modern").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["basic_info"]["topic"], "test");
    }

    #[test]
    fn unknown_format_and_template() {
        assert!(render(&report(), "html", "modern").unwrap_err().contains("unsupported format"));
        assert!(
            render(&report(), "markdown", "fancy")
                .unwrap_err()
                .contains("unsupported template")
        );
    }
}
