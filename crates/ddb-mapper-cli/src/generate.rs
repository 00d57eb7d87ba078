//! `generate` and `check` commands

use crate::manifest::Manifest;
use anyhow::Result;
use ddb_mapper_codegen::{
    CodegenOptions, Declaration, DestinationPackage, GenerateBuilderClasses, Generation,
    Generator, Visibility, source,
};
use std::path::{Path, PathBuf};

/// Command-line overrides for the manifest's `[codegen]` table
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub always_generate_builders: bool,
    pub visibility: Option<Visibility>,
    pub destination: Option<DestinationPackage>,
    pub no_table_extension: bool,
}

impl Overrides {
    pub fn apply(&self, options: &mut CodegenOptions) {
        if self.always_generate_builders {
            options.generate_builder_classes = GenerateBuilderClasses::Always;
        }
        if let Some(visibility) = self.visibility {
            options.visibility = visibility;
        }
        if let Some(destination) = &self.destination {
            options.destination_package = destination.clone();
        }
        if self.no_table_extension {
            options.generate_get_table_extension = false;
        }
    }
}

/// Arguments shared by `generate` and `check`
#[derive(Debug, Clone)]
pub struct Args {
    pub manifest: PathBuf,
    pub out_dir: Option<PathBuf>,
    pub overrides: Overrides,
    pub deny_diagnostics: bool,
}

/// Generate command implementation
pub fn run(args: &Args) -> Result<()> {
    let (manifest, generation) = load_and_generate(args)?;
    report(&generation);

    let out_dir = output_dir(args, &manifest);
    let written = generation.write_to(&out_dir)?;
    println!(
        "✓ Wrote {} of {} file(s) under {}",
        written.len(),
        generation.files.len(),
        out_dir.display()
    );

    deny(args, &generation)
}

/// Check command implementation: generate in memory, write nothing
pub fn check(args: &Args) -> Result<()> {
    let (_, generation) = load_and_generate(args)?;
    report(&generation);
    deny(args, &generation)?;

    if generation.diagnostics.is_empty() {
        println!("\nAll items are valid!");
    }
    Ok(())
}

fn load_and_generate(args: &Args) -> Result<(Manifest, Generation)> {
    println!("Checking manifest: {}", args.manifest.display());

    let manifest = Manifest::from_file(&args.manifest)?;
    manifest.validate()?;

    let mut options = manifest.codegen.clone();
    args.overrides.apply(&mut options);
    tracing::debug!(?options, "resolved codegen options");

    let declarations = load_declarations(&manifest, base_dir(&args.manifest))?;
    let generation = Generator::new(options).generate(&declarations);

    Ok((manifest, generation))
}

/// Parse every source listed in the manifest, relative to `base`.
pub fn load_declarations(manifest: &Manifest, base: &Path) -> Result<Vec<Declaration>> {
    let mut declarations = Vec::new();
    for entry in &manifest.sources {
        let path = base.join(&entry.path);
        declarations.extend(source::parse_file(&path, &entry.module)?);
    }
    Ok(declarations)
}

/// Directory of the manifest; relative paths in it resolve from here.
fn base_dir(manifest: &Path) -> &Path {
    match manifest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn output_dir(args: &Args, manifest: &Manifest) -> PathBuf {
    match &args.out_dir {
        Some(dir) => dir.clone(),
        None => base_dir(&args.manifest).join(&manifest.output.dir),
    }
}

fn report(generation: &Generation) {
    for diagnostic in &generation.diagnostics {
        println!("✗ {diagnostic}");
    }
    println!("✓ Files: {}", generation.files.len());
    println!("✓ Diagnostics: {}", generation.diagnostics.len());
}

fn deny(args: &Args, generation: &Generation) -> Result<()> {
    if args.deny_diagnostics && !generation.diagnostics.is_empty() {
        anyhow::bail!(
            "{} declaration(s) were skipped, see diagnostics above",
            generation.diagnostics.len()
        );
    }
    Ok(())
}
