pub mod error;
pub mod frontmatter;
pub mod io;
pub mod paths;
pub mod plan;
pub mod template;

pub use error::{FrontmatterError, PlanError, Result};
pub use frontmatter::{parse_frontmatter, Frontmatter};
pub use paths::{validate_plan_name, PlanStoreConfig};
pub use plan::{create_plan, list_plans, read_plan, NewPlan, PlanSummary};
