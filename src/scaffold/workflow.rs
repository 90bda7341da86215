//! Multi-file workflow scaffold: spec, types, pages, API routes, migration,
//! step component, docs and a components index.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::materialize::{materialize, write_file, FileMapping, ScaffoldReport};
use crate::migration::{format_number, next_migration_number, runs_table_file_name};
use crate::naming::NameVariants;
use crate::slug::validate_workflow_slug;
use crate::template::{Replacements, TemplateSource};

/// Inputs for one workflow scaffold. The description is already resolved.
#[derive(Debug, Clone)]
pub struct WorkflowRequest {
    pub slug: String,
    pub description: String,
    pub project_root: PathBuf,
    /// Relative to the project root.
    pub migrations_dir: PathBuf,
    pub templates: TemplateSource,
}

impl WorkflowRequest {
    pub fn new(slug: impl Into<String>, project_root: impl Into<PathBuf>) -> Self {
        let slug = slug.into();
        let description = format!(
            "Multi-step workflow for {}",
            NameVariants::new(&slug).title.to_lowercase()
        );
        Self {
            slug,
            description,
            project_root: project_root.into(),
            migrations_dir: PathBuf::from("lib/db/migrations"),
            templates: TemplateSource::Builtin,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_migrations_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.migrations_dir = dir.into();
        self
    }

    pub fn with_templates(mut self, templates: TemplateSource) -> Self {
        self.templates = templates;
        self
    }
}

/// Placeholder values shared by every workflow template, in substitution order.
pub fn workflow_replacements(
    names: &NameVariants,
    description: &str,
    migration_number: u32,
) -> Replacements {
    Replacements::new()
        .with("workflow_slug", names.slug.as_str())
        .with("WORKFLOW_SLUG", names.slug.as_str())
        .with("WORKFLOW_SLUG_UPPER", names.upper_snake.as_str())
        .with("WORKFLOW_TITLE", names.title.as_str())
        .with("WORKFLOW_TITLE_PASCAL", names.pascal.as_str())
        .with("WORKFLOW_TITLE_CAMEL", names.camel.as_str())
        .with("WORKFLOW_DESCRIPTION", description)
        .with("workflow_snake", names.snake.as_str())
        .with("STEP_ID", "step1")
        .with("STEP_TITLE", "Step 1")
        .with("STEP_TITLE_PASCAL", "Step1")
        .with("MIGRATION_NUMBER", format_number(migration_number))
}

/// Template -> destination pairs, relative to the project root.
pub fn file_mappings(
    names: &NameVariants,
    migrations_dir: &Path,
    migration_file: &str,
) -> Vec<FileMapping> {
    let slug = names.slug.as_str();
    let lib = Path::new("lib").join("workflows").join(slug);
    let page = Path::new("app").join("(chat)").join("workflows").join(slug);
    let api = Path::new("app").join("api").join(slug);

    vec![
        FileMapping::new("spec.template.ts", lib.join("spec.ts")),
        FileMapping::new("types.template.ts", lib.join("types.ts")),
        FileMapping::new("page-server-wrapper.template.tsx", page.join("page.tsx")),
        FileMapping::new(
            "page-client-orchestrator.template.tsx",
            page.join(format!("{}-client.tsx", slug)),
        ),
        FileMapping::new(
            "analyze-route.template.ts",
            api.join("analyze").join("route.ts"),
        ),
        FileMapping::new("crud-route.template.ts", api.join("route.ts")),
        FileMapping::new("crud-id-route.template.ts", api.join("[id]").join("route.ts")),
        FileMapping::new(
            "migration-runs-table.template.sql",
            migrations_dir.join(migration_file),
        ),
        FileMapping::new(
            "step-component.template.tsx",
            Path::new("components").join(slug).join("step1.tsx"),
        ),
        FileMapping::new(
            "readme.template.md",
            Path::new("docs")
                .join("ai-sdk")
                .join("workflows")
                .join(slug)
                .join("README.md"),
        ),
    ]
}

/// `components/<slug>/index.ts`
pub fn components_index(title: &str) -> String {
    format!(
        r#"/**
 * {} Components
 */

export {{ StepComponent as Step1 }} from "./step1";
// Export additional step components here...
"#,
        title
    )
}

/// Render the whole workflow into the project tree.
///
/// Stops at the first write failure; files created before it remain on disk.
pub fn create_workflow<W: Write>(request: &WorkflowRequest, out: &mut W) -> Result<ScaffoldReport> {
    validate_workflow_slug(&request.slug)?;

    let names = NameVariants::new(&request.slug);
    let root = request.project_root.as_path();

    let number = next_migration_number(&root.join(&request.migrations_dir))?;
    let migration_file = runs_table_file_name(number, &names.snake);
    info!("Using migration {}", migration_file);

    let replacements = workflow_replacements(&names, &request.description, number);
    let mappings = file_mappings(&names, &request.migrations_dir, &migration_file);

    let mut report = materialize(&request.templates, &mappings, &replacements, root, out)?;

    let index = Path::new("components").join(&names.slug).join("index.ts");
    write_file(root, &index, &components_index(&names.title))?;
    writeln!(out, "✅ Created: {}", index.display())?;
    report.created.push(index);

    Ok(report)
}

/// Success line, created-file summary and the manual follow-up checklist.
pub fn summary(slug: &str, report: &ScaffoldReport) -> String {
    let mut s = String::new();
    s.push_str(&format!("\n✅ Workflow '{}' created successfully!\n", slug));
    s.push_str(&format!("\n📁 Created {} files:\n", report.created.len()));
    for path in &report.created {
        s.push_str(&format!("   - {}\n", path.display()));
    }
    if !report.skipped.is_empty() {
        s.push_str(&format!(
            "\n⚠️  Skipped {} missing template(s): {}\n",
            report.skipped.len(),
            report.skipped.join(", ")
        ));
    }

    let steps = [
        "\n📋 Next steps:".to_string(),
        "1. Review and customize the generated files".to_string(),
        format!("2. Update step definitions in lib/workflows/{}/spec.ts", slug),
        "   - Define all steps with input/output Zod schemas".to_string(),
        "   - Set dependencies (dependsOn arrays)".to_string(),
        "   - Specify persistence fields (persist arrays)".to_string(),
        format!(
            "3. Customize the workflow client in app/(chat)/workflows/{0}/{0}-client.tsx",
            slug
        ),
        "   - Provide step rendering + input/output wiring for `WorkflowContainer`".to_string(),
        "   - Add additional steps as you expand the spec".to_string(),
        format!("4. Implement step components in components/{}/", slug),
        "   - Keep step components \u{201c}dumb\u{201d}: render input/output, call onChange/onRun"
            .to_string(),
        format!(
            "5. Add/extend server step execution in app/api/{}/analyze/route.ts",
            slug
        ),
        "   - Validate inputs with spec Zod schemas".to_string(),
        "   - Use robustGenerateObject() from @/lib/workflows/schema-repair".to_string(),
        "   - Prefer resolveLanguageModel(modelId) when calling the model".to_string(),
        "6. Add Drizzle schema and queries (scaffolder doesn't auto-edit shared files):"
            .to_string(),
        "   - Add table to lib/db/schema.ts".to_string(),
        "   - Add query helpers to lib/db/queries.ts".to_string(),
        "   - Wire CRUD routes to use queries".to_string(),
        "7. Run type-check: pnpm type-check".to_string(),
        "8. Run linter: pnpm lint".to_string(),
        format!(
            "9. Test workflow at: http://localhost:3000/workflows/{}",
            slug
        ),
        "\n📚 Reference implementations:".to_string(),
        "   - IC Memo: lib/workflows/ic-memo/ (spec-driven V2)".to_string(),
        "   - Market Outlook: lib/workflows/market-outlook/ (spec-driven V2)".to_string(),
        "   - LOI: lib/workflows/loi/ (spec-driven V2)".to_string(),
    ];
    for line in steps {
        s.push_str(&line);
        s.push('\n');
    }
    s
}
