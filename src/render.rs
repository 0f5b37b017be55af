// Plain-text presentation of finder results for the terminal

use itertools::Itertools;

use crate::catalog::RaceClass;
use crate::config::Theme;
use crate::finder::{Recommendation, WizardStep};

const RESET: &str = "\x1b[0m";
const NO_CLASSES: &str =
    "No matching classes found for this combination. Contact us for guidance.";

fn highlight_style(theme: Theme) -> &'static str {
    match theme {
        // bold red on light backgrounds, bright red on dark ones
        Theme::Light => "\x1b[1;31m",
        Theme::Dark => "\x1b[1;91m",
    }
}

/// Render the chassis, engine and class sections of a recommendation.
pub fn render_recommendation(recommendation: &Recommendation, theme: Theme) -> String {
    let mut out = String::from("Recommended chassis\n");
    if recommendation.chassis.is_empty() {
        out.push_str("  No chassis brands match this budget.\n");
    }
    for chassis in &recommendation.chassis {
        out.push_str(&format!("  {}: {}\n", chassis.name, chassis.description));
    }

    out.push_str("\nRecommended engines\n");
    for engine in &recommendation.engines {
        let name = if engine.highlight {
            format!("{}> {}{}", highlight_style(theme), engine.name, RESET)
        } else {
            engine.name.to_string()
        };
        out.push_str(&format!("  {}\n    {}\n", name, engine.description));
    }

    out.push_str("\nMatching classes\n");
    out.push_str(&render_class_table(&recommendation.classes));
    out
}

/// Render race classes as an aligned table of class, age, weight and tire.
pub fn render_class_table(classes: &[RaceClass]) -> String {
    if classes.is_empty() {
        return format!("  {NO_CLASSES}\n");
    }

    let rows = classes
        .iter()
        .map(|c| {
            [
                format!("{} ({})", c.name, c.engine),
                c.age_label.to_string(),
                format!("{}lbs", c.min_weight_lbs),
                c.tire.to_string(),
            ]
        })
        .collect_vec();
    let header = ["Class", "Age", "Weight", "Tire"].map(str::to_string);

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            std::iter::once(&header)
                .chain(rows.iter())
                .map(|row| row[col].len())
                .max()
                .unwrap_or(0)
        })
        .collect();

    std::iter::once(&header)
        .chain(rows.iter())
        .map(|row| {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{cell:<width$}", width = *width))
                .join("  ");
            format!("  {}\n", line.trim_end())
        })
        .collect()
}

/// Render the prompt for a wizard step with numbered options.
pub fn render_step_prompt(step: WizardStep) -> String {
    let options = step
        .options()
        .iter()
        .enumerate()
        .map(|(i, (code, label))| format!("  {}. {} [{}]", i + 1, label, code))
        .join("\n");
    format!(
        "Step {} of {}: {}\n{}\n",
        step.number(),
        WizardStep::ALL.len(),
        step.question(),
        options
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::{AgeBracket, EnginePreference, Experience, Selections, recommend};

    #[test]
    fn test_empty_classes_render_fallback() {
        let table = render_class_table(&[]);
        assert!(table.contains(NO_CLASSES));
    }

    #[test]
    fn test_class_table_rows() {
        let recommendation = recommend(&Selections {
            age: Some(AgeBracket::Bambino),
            ..Default::default()
        });
        let table = render_class_table(&recommendation.classes);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Class"));
        assert!(lines[1].contains("Piston Kup/T4 Bambino (Tillotson T4)"));
        assert!(lines[1].contains("150lbs"));
        assert!(lines[1].contains("Maxxis T4 Bambino"));
    }

    #[test]
    fn test_highlighted_engine_uses_theme_style() {
        let recommendation = recommend(&Selections {
            experience: Some(Experience::BrandNew),
            engine: Some(EnginePreference::NotSure),
            ..Default::default()
        });
        let dark = render_recommendation(&recommendation, Theme::Dark);
        let light = render_recommendation(&recommendation, Theme::Light);
        assert!(dark.contains("\x1b[1;91m> Our Recommendation"));
        assert!(light.contains("\x1b[1;31m> Our Recommendation"));
    }

    #[test]
    fn test_step_prompt_lists_options() {
        let prompt = render_step_prompt(WizardStep::Budget);
        assert!(prompt.starts_with("Step 4 of 4"));
        assert!(prompt.contains("4. Flexible, show me the options [flexible]"));
    }
}
