//! The compiler driver.

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use ubx2c_codegen::{build_record, Emitter};
use ubx2c_core::{Catalogs, Message, MessageRegistry};
use ubx2c_icd::{classify, logical_lines, parse_catalog, parse_message_table};

use crate::{error::CompileError, natsort::natural_cmp};

/// Compiles a directory of ICD CSV tables into C message artifacts.
///
/// Construction ingests the whole input directory sequentially in natural
/// filename order, so that continuation pages of one message arrive
/// adjacent to each other; [`IcdCompiler::generate`] then renders every
/// finalized message (or an allow-listed subset) into an output directory.
#[derive(Debug)]
pub struct IcdCompiler {
    catalogs: Catalogs,
    registry: MessageRegistry,
}

/// Counts from one [`IcdCompiler::generate`] run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub messages_built: usize,
    pub headers_written: usize,
    pub sources_written: usize,
}

impl IcdCompiler {
    /// Ingest every `*.csv` file under `input`.
    ///
    /// Catalog files are recognized by their first line and feed the lookup
    /// maps; everything else is a message-layout file. The message being
    /// accumulated when input ends is finalized here.
    pub fn from_dir(input: &Path) -> Result<Self, CompileError> {
        if !input.is_dir() {
            return Err(CompileError::NotADirectory {
                path: input.display().to_string(),
            });
        }

        let mut files: Vec<PathBuf> = fs::read_dir(input)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "csv"))
            .collect();
        files.sort_by(|a, b| natural_cmp(&file_name(a), &file_name(b)));

        let mut catalogs = Catalogs::default();
        let mut registry = MessageRegistry::new();
        for path in &files {
            let text = fs::read_to_string(path)?;
            let lines = logical_lines(&text);
            let Some(first) = lines.first() else {
                continue;
            };
            match classify(first) {
                Some(kind) => parse_catalog(kind, &lines, &mut catalogs),
                None => parse_message_table(&lines, &catalogs, &mut registry)?,
            }
        }
        registry.finalize_current();

        Ok(Self { catalogs, registry })
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    /// Finalized messages in key order.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.registry.finalized()
    }

    /// Build and emit artifacts for every resolvable message under
    /// `out_dir`, invoking `on_build` before each message is rendered.
    ///
    /// Messages whose catalog length is the sentinel `"0"` carry no fixed
    /// payload and are skipped. With `build_only`, only messages whose key
    /// name matches the list are emitted, and any requested name that never
    /// built surfaces as [`CompileError::BuildNamesNotFound`] at the end.
    pub fn generate(
        &self,
        out_dir: &Path,
        build_only: Option<&[String]>,
        mut on_build: impl FnMut(&Message),
    ) -> Result<GenerateSummary, CompileError> {
        let mut emitter = Emitter::create(out_dir)?;
        let mut summary = GenerateSummary::default();
        let mut built: BTreeSet<&str> = BTreeSet::new();

        for message in self.registry.finalized() {
            if message.entry.length == "0" {
                continue;
            }
            if let Some(list) = build_only {
                if !list.iter().any(|n| n == &message.key.name) {
                    continue;
                }
            }
            on_build(message);
            let record = build_record(message)?;
            let outcome = emitter.emit(message, &record)?;
            summary.messages_built += 1;
            summary.headers_written += usize::from(outcome.header.is_some());
            summary.sources_written += usize::from(outcome.source.is_some());
            built.insert(message.key.name.as_str());
        }
        emitter.finish()?;

        if let Some(list) = build_only {
            let missing: Vec<String> = list
                .iter()
                .filter(|n| !built.contains(n.as_str()))
                .cloned()
                .collect();
            if !missing.is_empty() {
                return Err(CompileError::BuildNamesNotFound { names: missing });
            }
        }

        Ok(summary)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
