use crate::types::OutputDocument;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Sink for a finished document. The file-backed implementation is the
/// production writer; tests substitute a capturing one.
pub trait DocumentWriter {
    fn write(&mut self, document: &OutputDocument) -> Result<()>;
}

/// Writes the document to disk: KML text (optionally also packed into a
/// single-entry KMZ archive) for map output, pretty-printed GeoJSON for
/// collection output.
pub struct FileDocumentWriter {
    path: PathBuf,
    kmz: Option<PathBuf>,
}

impl FileDocumentWriter {
    pub fn new(path: PathBuf, kmz: Option<PathBuf>) -> Self {
        Self { path, kmz }
    }
}

impl DocumentWriter for FileDocumentWriter {
    fn write(&mut self, document: &OutputDocument) -> Result<()> {
        match document {
            OutputDocument::Map(kml) => {
                fs::write(&self.path, kml)
                    .with_context(|| format!("Failed to write KML file: {:?}", self.path))?;
                println!("KML file created: {}", self.path.display());

                if let Some(kmz_path) = &self.kmz {
                    write_kmz(kmz_path, &self.path, kml)?;
                    println!("KMZ file created: {}", kmz_path.display());
                }
            }
            OutputDocument::Collection(collection) => {
                let file = File::create(&self.path)
                    .with_context(|| format!("Failed to create GeoJSON file: {:?}", self.path))?;
                serde_json::to_writer_pretty(file, collection)
                    .context("Failed to serialize GeoJSON")?;
                println!("GeoJSON file created: {}", self.path.display());
            }
        }
        Ok(())
    }
}

fn write_kmz(kmz_path: &Path, kml_path: &Path, kml: &str) -> Result<()> {
    let file = File::create(kmz_path)
        .with_context(|| format!("Failed to create KMZ file: {:?}", kmz_path))?;
    let mut archive = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    // The archive holds the single KML document, named after the file.
    let entry_name = kml_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("doc.kml");
    archive.start_file(entry_name, options)?;
    archive.write_all(kml.as_bytes())?;
    archive.finish()?;
    Ok(())
}
