//! Rendering and writing of the model decisions file.
//!
//! Format (one keyword per line, quoted datetimes, `!` comments):
//!
//! ```text
//! simulStart              '2005-10-01 00:00'      ! simulation start time
//! simulFinsh              '2006-09-30 23:00'      ! simulation end time
//! astability              louisinv                ! atmospheric stability function
//! ```

use std::path::PathBuf;

use summa_common::{decisions, DecisionSet, RunDescriptor, SummaResult};
use tracing::info;

use crate::layout::SettingsLayout;

const KEYWORD_WIDTH: usize = 24;
const VALUE_WIDTH: usize = 24;

fn line(keyword: &str, value: &str, comment: &str) -> String {
    format!(
        "{:<kw$}{:<val$}! {}\n",
        keyword,
        value,
        comment,
        kw = KEYWORD_WIDTH,
        val = VALUE_WIDTH
    )
}

/// Render the decisions file for a run.
///
/// An empty decision set is fine: the file then holds only the header
/// and the simulation start/end lines, and the model falls back to its
/// defaults for every decision.
pub fn render(descriptor: &RunDescriptor, set: &DecisionSet) -> String {
    let mut out = String::new();
    out.push_str("! ***********************************************************************\n");
    out.push_str(&format!(
        "! Model decisions for site {}, run '{}'\n",
        descriptor.site, descriptor.label
    ));
    out.push_str("! Generated by summa-launch; edits will be overwritten on the next launch.\n");
    out.push_str("! ***********************************************************************\n");
    out.push_str(&line(
        "simulStart",
        &format!("'{}'", descriptor.period.start_formatted()),
        "simulation start time",
    ));
    out.push_str(&line(
        "simulFinsh",
        &format!("'{}'", descriptor.period.end_formatted()),
        "simulation end time",
    ));
    for (keyword, choice) in set.iter() {
        // Keywords in a DecisionSet are catalog-validated at insert.
        let comment = decisions::recognized(keyword)
            .map(|spec| spec.description)
            .unwrap_or("model decision");
        out.push_str(&line(keyword, choice, comment));
    }
    out
}

/// Write the decisions file for a run under the settings directory.
pub fn write(
    layout: &SettingsLayout,
    descriptor: &RunDescriptor,
    set: &DecisionSet,
) -> SummaResult<PathBuf> {
    let contents = render(descriptor, set);
    let path = layout.write_atomic(&SettingsLayout::decisions_file_name(&descriptor.label), &contents)?;
    info!(
        site = %descriptor.site,
        label = %descriptor.label,
        decisions = set.len(),
        "wrote model decisions file"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use summa_common::{RunLabel, RunPeriod, SiteId};

    fn descriptor() -> RunDescriptor {
        RunDescriptor::new(
            SiteId::new("CDP").unwrap(),
            RunLabel::new("test").unwrap(),
            RunPeriod::from_date_strs("2005-10-01", "2006-09-30").unwrap(),
        )
    }

    #[test]
    fn test_render_contains_dates_and_decision() {
        let set = DecisionSet::from_pairs([("astability", "louisinv")]).unwrap();
        let text = render(&descriptor(), &set);
        let line_with = |prefix: &str| {
            text.lines()
                .find(|l| l.starts_with(prefix))
                .unwrap_or_else(|| panic!("no {} line", prefix))
                .to_string()
        };
        assert!(line_with("simulStart").contains("'2005-10-01 00:00'"));
        assert!(line_with("simulFinsh").contains("'2006-09-30 23:00'"));
        assert!(line_with("astability").contains("louisinv"));
    }

    #[test]
    fn test_render_empty_set_has_no_decision_lines() {
        let text = render(&descriptor(), &DecisionSet::new());
        let decision_lines = text
            .lines()
            .filter(|l| !l.starts_with('!') && !l.starts_with("simul"))
            .count();
        assert_eq!(decision_lines, 0);
        assert!(text.contains("simulStart"));
        assert!(text.contains("CDP"));
        assert!(text.contains("'test'"));
    }
}
