use colored::Colorize;
use gua_core::relation::analyze_cycles;
use gua_core::{Element, Relation, cycle};

pub fn run(element: &str, relation: Option<&str>) -> Result<(), String> {
    let start = Element::parse(element).map_err(|e| e.to_string())?;
    let relations = match relation {
        Some(r) => vec![Relation::parse(r).map_err(|e| e.to_string())?],
        None => Relation::CYCLIC.to_vec(),
    };

    for relation in relations {
        let steps = cycle(start, relation).map_err(|e| e.to_string())?;
        let path: Vec<String> = std::iter::once(start)
            .chain(steps.iter().map(|(_, to)| *to))
            .map(|e| e.to_string())
            .collect();
        println!(
            "  {} ({})  {}",
            relation.name().bold(),
            relation.english(),
            path.join(" → ")
        );
    }

    if relation.is_none() {
        println!();
        let stages = analyze_cycles(start).map_err(|e| e.to_string())?;
        for stage in stages {
            println!("  {}{}", start.to_string().cyan(), stage.description);
        }
    }
    Ok(())
}
