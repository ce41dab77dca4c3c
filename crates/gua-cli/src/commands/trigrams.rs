use comfy_table::{ContentArrangement, Table};
use gua_core::Trigram;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Symbol", "Name", "Image", "Lines", "Element", "Direction", "Family", "Phase",
    ]);

    for trigram in Trigram::ALL {
        let lines: String = trigram.lines().iter().map(|v| v.to_string()).collect();
        table.add_row(vec![
            trigram.symbol().to_string(),
            format!("{} ({})", trigram.name(), trigram.english()),
            trigram.image().to_string(),
            lines,
            trigram.element().to_string(),
            trigram.direction().to_string(),
            trigram.family().to_string(),
            trigram.phase().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} trigrams, lines bottom first", Trigram::ALL.len());
    Ok(())
}
