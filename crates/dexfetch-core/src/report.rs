//! Console report of the decoded fields.

use crate::model::Pokemon;
use std::fmt::Write;

/// Formats the selected fields, one per line, ending with the stat table.
pub fn format_report(p: &Pokemon) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Pokemon Name: {}", p.name);
    let _ = writeln!(out, "Pokemon BaseExp: {}", p.base_experience);
    let _ = writeln!(out, "Pokemon Height: {}", p.height);
    let _ = writeln!(out, "Pokemon Id: {}", p.id);
    let _ = writeln!(
        out,
        "Pokemon Sprites: front={} back={}",
        p.sprites.front_url().unwrap_or("-"),
        p.sprites.back_url().unwrap_or("-")
    );
    if p.stats.is_empty() {
        let _ = writeln!(out, "Pokemon Stats: -");
    } else {
        let _ = writeln!(out, "Pokemon Stats:");
        for s in &p.stats {
            let _ = writeln!(out, "  {:<18} {:>4}", s.stat.name, s.base_stat);
        }
    }
    out
}
