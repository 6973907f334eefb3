use crate::{error::SynthesizeError, scalar::TypeUnitBuilder};
use entigen_schema::{
    config::{TypeConfig, TypeEntry},
    registry::{TypeRegistry, generated_type_key, generated_unit_file},
};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

///
/// SynthesisReport
///

#[derive(Debug, Default)]
pub struct SynthesisReport {
    /// Names registered by this call, in configuration order.
    pub created: Vec<String>,

    /// Names skipped because they were already registered.
    pub skipped: Vec<String>,
}

///
/// TypeSynthesizer
///
/// Materializes declared scalar types: one wrapper unit per name, validated,
/// persisted into the output directory, and registered. Each entry is one
/// transactional step; a failure rolls back everything this call did and
/// leaves prior state untouched, so a full re-invocation is always safe.
///

pub struct TypeSynthesizer {
    out_dir: PathBuf,
}

#[derive(Default)]
struct Rollback {
    written: Vec<PathBuf>,
    registered: Vec<String>,
}

impl TypeSynthesizer {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn synthesize(
        &self,
        config: &TypeConfig,
        registry: &mut TypeRegistry,
    ) -> Result<SynthesisReport, SynthesizeError> {
        fs::create_dir_all(&self.out_dir)?;

        let mut report = SynthesisReport::default();
        let mut pass = Rollback::default();

        for entry in config.entries() {
            if let Err(err) = self.synthesize_entry(entry, registry, &mut pass, &mut report) {
                self.roll_back(pass, registry);
                return Err(err);
            }
        }

        Ok(report)
    }

    fn synthesize_entry(
        &self,
        entry: &TypeEntry,
        registry: &mut TypeRegistry,
        pass: &mut Rollback,
        report: &mut SynthesisReport,
    ) -> Result<(), SynthesizeError> {
        if registry.has(&entry.name) {
            log::debug!("scalar type '{}' already registered, skipping", entry.name);
            report.skipped.push(entry.name.clone());
            return Ok(());
        }

        let unit_path = self.out_dir.join(generated_unit_file(&entry.name));
        if unit_path.exists() {
            log::debug!(
                "unit for scalar type '{}' already present at {}",
                entry.name,
                unit_path.display()
            );
        } else {
            self.write_unit(entry, &unit_path)?;
            pass.written.push(unit_path.clone());
            log::info!(
                "synthesized scalar type '{}' at {}",
                entry.name,
                unit_path.display()
            );
        }

        registry.register(&entry.name, generated_type_key(&entry.name))?;
        pass.registered.push(entry.name.clone());
        report.created.push(entry.name.clone());

        Ok(())
    }

    // Render, check the unit actually parses, then move it into place under
    // a fresh OS-unique temporary name so concurrent writers never interleave.
    fn write_unit(&self, entry: &TypeEntry, unit_path: &Path) -> Result<(), SynthesizeError> {
        let source = TypeUnitBuilder::new(&entry.name, &entry.base_type).generate()?;

        syn::parse_file(&source).map_err(|error| SynthesizeError::Parse {
            name: entry.name.clone(),
            error,
        })?;

        let mut tmp = NamedTempFile::new_in(&self.out_dir)?;
        tmp.write_all(source.as_bytes())?;
        tmp.persist(unit_path).map_err(|err| err.error)?;

        Ok(())
    }

    fn roll_back(&self, pass: Rollback, registry: &mut TypeRegistry) {
        for name in &pass.registered {
            registry.remove(name);
        }

        for path in &pass.written {
            if let Err(err) = fs::remove_file(path) {
                log::warn!("rollback could not remove {}: {err}", path.display());
            }
        }
    }
}
