//! Artifact writing and the aggregated include manifest.

use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use ubx2c_core::Message;

use crate::{builder::MessageRecord, error::CodegenError, render};

/// Name of the aggregated manifest header, one include line per emitted
/// message header.
pub const MANIFEST_NAME: &str = "ubx_msgs.h";

/// Writes message artifacts under `<out_dir>/include` and `<out_dir>/src`.
///
/// The manifest is opened once at construction and appended to for every
/// header written; [`Emitter::finish`] flushes it.
pub struct Emitter {
    out_dir: PathBuf,
    manifest: BufWriter<fs::File>,
}

/// File names written for one message (relative to their directories).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EmitOutcome {
    pub header: Option<String>,
    pub source: Option<String>,
}

impl Emitter {
    pub fn create(out_dir: &Path) -> Result<Self, CodegenError> {
        let include_dir = out_dir.join("include");
        fs::create_dir_all(&include_dir)?;
        fs::create_dir_all(out_dir.join("src"))?;
        let manifest = fs::File::create(include_dir.join(MANIFEST_NAME))?;
        Ok(Self {
            out_dir: out_dir.to_path_buf(),
            manifest: BufWriter::new(manifest),
        })
    }

    /// Write the artifacts for one built message.
    ///
    /// Renders are checked after the fact: an artifact whose body came out
    /// empty is not written. Source files are suppressed for request-style
    /// variants, which carry no payload to parse.
    pub fn emit(
        &mut self,
        message: &Message,
        record: &MessageRecord,
    ) -> Result<EmitOutcome, CodegenError> {
        let mut outcome = EmitOutcome::default();

        let header = render::render_header(message, record);
        if !header.trim().is_empty() {
            let name = render::header_file_name(&message.key);
            fs::write(self.out_dir.join("include").join(&name), &header)?;
            writeln!(self.manifest, "#include <{name}>")?;
            outcome.header = Some(name);
        }

        if message.key.msg_type.has_payload_body() {
            let source = render::render_source(message, record);
            if !source.trim().is_empty() {
                let name = render::source_file_name(&message.key);
                fs::write(self.out_dir.join("src").join(&name), &source)?;
                outcome.source = Some(name);
            }
        }

        Ok(outcome)
    }

    /// Flush the manifest.
    pub fn finish(mut self) -> Result<(), CodegenError> {
        self.manifest.flush()?;
        Ok(())
    }
}
