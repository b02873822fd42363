use plan_core::PlanSummary;
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// `name<TAB>description<TAB>path`
pub fn tab_line(plan: &PlanSummary) -> String {
    format!(
        "{}\t{}\t{}",
        plan.name,
        plan.description,
        plan.path.display()
    )
}

pub fn labeled_lines(plan: &PlanSummary) -> String {
    format!(
        "name: {}\ndescription: {}\npath: {}",
        plan.name,
        plan.description,
        plan.path.display()
    )
}
