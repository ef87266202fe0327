use std::io::Write;

use anyhow::Context as _;

use studyplan_core::GeneratedPlan;
use studyplan_core::Progress;

use crate::context::Context;
use crate::store::StoredData;

/// Export the stored plan as CSV, one row per scheduled task.
pub fn run_export_csv(ctx: &Context, data: &StoredData, output: Option<&str>) -> anyhow::Result<()> {
    let plan = data.plan(&ctx.clock);

    let mut writer: Box<dyn Write> = if let Some(path) = output {
        Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("cannot create output file: {path}"))?,
        )
    } else {
        Box::new(std::io::stdout().lock())
    };

    let rows = write_csv(&mut writer, &plan, &data.completed)?;
    writer.flush()?;

    if let Some(path) = output {
        println!("Exported {rows} rows to {path}");
    }

    Ok(())
}

/// Write the CSV header and rows. Returns the number of rows written.
fn write_csv(out: &mut impl Write, plan: &GeneratedPlan, progress: &Progress) -> std::io::Result<usize> {
    writeln!(out, "date,day,task_id,subject,title,type,estimated_hours,week_index,done")?;

    let mut rows = 0;
    for (day_index, day) in plan.days.iter().enumerate() {
        for task in &day.tasks {
            writeln!(
                out,
                "{},{},{},{},{},{},{},{},{}",
                day.date,
                day_index,
                escape(&task.id),
                escape(&task.subject),
                escape(&task.title),
                task.kind,
                task.estimated_hours,
                task.week_index,
                progress.is_done(&task.id),
            )?;
            rows += 1;
        }
    }
    Ok(rows)
}

/// Quote a field when it contains a delimiter, quote or line break.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use studyplan_core::{PlanSettings, generate_study_plan_with};
    use studyplan_test_utils::{ProfileBuilder, fixed_clock, subject};

    use super::*;

    #[test]
    fn escape_quotes_only_when_needed() {
        assert_eq!(escape("Algebra"), "Algebra");
        assert_eq!(escape("Weekly recap: Math, Bio"), "\"Weekly recap: Math, Bio\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn csv_has_header_and_one_row_per_task() {
        let profile = ProfileBuilder::new()
            .exam_in(1)
            .daily_hours(2.0)
            .subject(subject("Math", &["Algebra", "Geometry, part 2"]))
            .build();
        let plan = generate_study_plan_with(&profile, &PlanSettings::default(), &fixed_clock());
        let mut progress = Progress::new();
        progress.toggle("study-0-0-d0");

        let mut buf = Vec::new();
        let rows = write_csv(&mut buf, &plan, &progress).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(rows, plan.summary.total_tasks);
        assert_eq!(lines.len(), rows + 1);
        assert_eq!(
            lines[0],
            "date,day,task_id,subject,title,type,estimated_hours,week_index,done"
        );
        assert_eq!(lines[1], "2026-10-16,0,study-0-0-d0,Math,Algebra,study,1,0,true");
        assert_eq!(
            lines[2],
            "2026-10-16,0,study-0-1-d0,Math,\"Geometry, part 2\",study,1,0,false"
        );
    }
}
