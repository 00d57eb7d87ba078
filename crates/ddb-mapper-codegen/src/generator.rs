//! Generation orchestrator
//!
//! A [`Generator`] holds the options. Each [`GenerationPass`] scans the
//! declarations once, plans every item, and emits files only for plans that
//! validated. Bad declarations end up in [`Diagnostics`]; they never abort
//! the pass.
//!
//! ```
//! use ddb_mapper_codegen::{CodegenOptions, Generator, source};
//!
//! let declarations = source::parse_source(
//!     r#"
//!     #[derive(DynamoDbItem)]
//!     pub struct User {
//!         #[ddb(partition_key)]
//!         pub id: String,
//!     }
//!     "#,
//!     "src/model.rs",
//!     "crate::model",
//! )
//! .unwrap();
//!
//! let generation = Generator::new(CodegenOptions::default()).generate(&declarations);
//!
//! assert!(generation.diagnostics.is_empty());
//! assert!(generation.file("crate::model::mapper::schemas", "user_schema.rs").is_some());
//! ```

use crate::config::CodegenOptions;
use crate::declaration::Declaration;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::SchemaValidationError;
use crate::naming::module_dir;
use crate::plan::{SchemaPlan, build_plan};
use crate::render::{FILE_HEADER, RenderContext, builder, converter, schema};
use crate::scan::{self, ScanOutcome, ScanToken};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Module path the file belongs to, e.g. `crate::model::mapper::schemas`.
    pub module: String,
    pub file_name: String,
    pub contents: String,
}

impl GeneratedFile {
    /// Path relative to the crate source root.
    pub fn relative_path(&self) -> PathBuf {
        Path::new(&module_dir(&self.module)).join(&self.file_name)
    }
}

/// Output of a generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generation {
    pub files: Vec<GeneratedFile>,
    pub diagnostics: Diagnostics,
}

impl Generation {
    pub fn file(&self, module: &str, file_name: &str) -> Option<&GeneratedFile> {
        self.files
            .iter()
            .find(|f| f.module == module && f.file_name == file_name)
    }

    /// Write every file below `out_dir`, mapping `crate::a::b` to `out_dir/a/b/`.
    ///
    /// Files whose contents are unchanged are left untouched. Returns the
    /// paths that were written.
    pub fn write_to(&self, out_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();

        for file in &self.files {
            let path = out_dir.join(file.relative_path());
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {parent:?}"))?;
            }

            if fs::read_to_string(&path).is_ok_and(|existing| existing == file.contents) {
                tracing::debug!(path = %path.display(), "unchanged");
                continue;
            }

            fs::write(&path, &file.contents)
                .with_context(|| format!("Failed to write {path:?}"))?;
            tracing::debug!(path = %path.display(), "wrote generated file");
            written.push(path);
        }

        tracing::info!(
            files = self.files.len(),
            written = written.len(),
            out_dir = %out_dir.display(),
            "wrote generation"
        );

        Ok(written)
    }
}

/// Entry point of the code generator.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    options: CodegenOptions,
}

impl Generator {
    pub fn new(options: CodegenOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CodegenOptions {
        &self.options
    }

    /// Open a pass. Each pass scans at most once.
    pub fn pass(&self) -> GenerationPass<'_> {
        GenerationPass {
            options: &self.options,
            token: Some(ScanToken::new()),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Run a single pass over `declarations`.
    pub fn generate(&self, declarations: &[Declaration]) -> Generation {
        self.pass().run(declarations)
    }

    /// Generate the items for one declaration as inline source.
    ///
    /// The source has no file header and names the record and builder
    /// without paths, so it can be spliced into the record's own module.
    pub fn expand(&self, declaration: &Declaration) -> Result<String, Diagnostics> {
        let mut pass = self.pass();
        let outcome = pass.scan(std::slice::from_ref(declaration));
        pass.diagnostics.extend(outcome.invalid);

        let mut code = String::new();
        for descriptor in &outcome.descriptors {
            match build_plan(descriptor, &self.options) {
                Ok(plan) => code.push_str(&render_inline(&plan)),
                Err(err) => pass.diagnostics.push(Diagnostic::new(
                    descriptor.qualified_name(),
                    descriptor.location.clone(),
                    err,
                )),
            }
        }

        if pass.diagnostics.is_empty() {
            Ok(code)
        } else {
            Err(pass.diagnostics)
        }
    }
}

/// One generation pass: a scan token, the options and a diagnostics sink.
///
/// File placement is checked here and not by [`Generator::expand`]: inline
/// items always live in the record's own module.
#[derive(Debug)]
pub struct GenerationPass<'g> {
    options: &'g CodegenOptions,
    token: Option<ScanToken>,
    diagnostics: Diagnostics,
}

impl GenerationPass<'_> {
    /// Scan `declarations` if this pass has not scanned yet.
    ///
    /// Later calls return an empty outcome.
    pub fn scan(&mut self, declarations: &[Declaration]) -> ScanOutcome {
        match self.token.take() {
            Some(token) => scan::scan(token, declarations),
            None => {
                tracing::debug!("declarations already scanned in this pass, skipping");
                ScanOutcome::default()
            }
        }
    }

    /// Diagnostics recorded so far.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Scan, plan and emit. A second run in the same pass generates nothing.
    pub fn run(&mut self, declarations: &[Declaration]) -> Generation {
        let outcome = self.scan(declarations);
        let recorded = self.diagnostics.len();
        let diagnostics = &mut self.diagnostics;
        diagnostics.extend(outcome.invalid);

        let mut files = Vec::new();
        let mut modules: BTreeMap<String, Vec<ModMember>> = BTreeMap::new();

        for descriptor in &outcome.descriptors {
            let plan = build_plan(descriptor, self.options)
                .and_then(|plan| plan.check_destination().map(|()| plan));
            let plan = match plan {
                Ok(plan) => plan,
                Err(err) => {
                    diagnostics.push(Diagnostic::new(
                        descriptor.qualified_name(),
                        descriptor.location.clone(),
                        err,
                    ));
                    continue;
                }
            };

            let emitted = render_files(&plan);
            let members = modules.entry(plan.destination.clone()).or_default();
            let taken = emitted
                .iter()
                .find(|f| members.iter().any(|member| member.name == module_name(f)));
            if let Some(taken) = taken {
                diagnostics.push(Diagnostic::new(
                    descriptor.qualified_name(),
                    descriptor.location.clone(),
                    SchemaValidationError::GeneratedNameCollision {
                        declaration: descriptor.name.clone(),
                        module: taken.module.clone(),
                        file_name: taken.file_name.clone(),
                    },
                ));
                continue;
            }

            let modifier = RenderContext::file(&plan).modifier;
            members.extend(emitted.iter().map(|file| ModMember {
                name: module_name(file),
                modifier: modifier.clone(),
            }));
            files.extend(emitted);
        }

        for (module, members) in &modules {
            if !members.is_empty() {
                files.push(render_mod_file(module, members));
            }
        }

        let diagnostics: Diagnostics = self.diagnostics.iter().skip(recorded).cloned().collect();
        tracing::info!(
            items = outcome.descriptors.len(),
            files = files.len(),
            diagnostics = diagnostics.len(),
            "generation pass complete"
        );

        Generation { files, diagnostics }
    }
}

/// The schema file and, when needed, the builder file for one plan.
fn render_files(plan: &SchemaPlan) -> Vec<GeneratedFile> {
    let ctx = RenderContext::file(plan);
    let snake = plan.snake_name();

    let mut contents = format!("{FILE_HEADER}\n");
    contents.push_str(&converter::render_converter(&ctx));
    contents.push('\n');
    contents.push_str(&schema::render_schema(&ctx));
    if plan.options.generate_get_table_extension {
        contents.push('\n');
        contents.push_str(&schema::render_table_extension(&ctx));
    }

    let mut files = vec![GeneratedFile {
        module: plan.destination.clone(),
        file_name: format!("{snake}_schema.rs"),
        contents,
    }];

    if plan.needs_builder() {
        files.push(GeneratedFile {
            module: plan.destination.clone(),
            file_name: format!("{snake}_builder.rs"),
            contents: format!("{FILE_HEADER}\n{}", builder::render_builder(&ctx)),
        });
    }

    files
}

/// Everything for one plan, for splicing next to the record.
fn render_inline(plan: &SchemaPlan) -> String {
    let ctx = RenderContext::inline(plan);
    let mut code = converter::render_converter(&ctx);
    code.push_str(&schema::render_schema(&ctx));
    if plan.options.generate_get_table_extension {
        code.push_str(&schema::render_table_extension(&ctx));
    }
    if plan.needs_builder() {
        code.push_str(&builder::render_builder(&ctx));
    }
    code
}

/// A generated module declared by a destination `mod.rs`.
#[derive(Debug, Clone)]
struct ModMember {
    name: String,

    /// Modifier of the items inside, reused for the re-export.
    modifier: String,
}

fn render_mod_file(module: &str, members: &[ModMember]) -> GeneratedFile {
    let mut sorted = members.to_vec();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut contents = format!("{FILE_HEADER}\n");
    for member in &sorted {
        contents.push_str(&format!("mod {};\n", member.name));
    }
    contents.push('\n');
    for member in &sorted {
        // Restricted re-exports warn when the crate never names them.
        if member.modifier != "pub " {
            contents.push_str("#[allow(unused_imports)]\n");
        }
        contents.push_str(&format!("{}use {}::*;\n", member.modifier, member.name));
    }

    GeneratedFile {
        module: module.to_string(),
        file_name: "mod.rs".to_string(),
        contents,
    }
}

fn module_name(file: &GeneratedFile) -> String {
    file.file_name.trim_end_matches(".rs").to_string()
}
