use std::{
    collections::HashMap,
    fs::File,
    io::{self, Cursor, Read},
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{error::ResolveError, lookup::CsvRecord};

/// Opens lookup files for reading.
pub trait Filesystem: Send + Sync {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send>>;
}

/// Files on disk. Relative paths are taken from `root` when one is set.
#[derive(Debug, Clone, Default)]
pub struct LocalFilesystem {
    root: Option<PathBuf>,
}

impl LocalFilesystem {
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        LocalFilesystem {
            root: Some(root.into()),
        }
    }

    fn locate(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl Filesystem for LocalFilesystem {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(File::open(self.locate(path))?))
    }
}

/// Files held in memory, keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    files: HashMap<PathBuf, Arc<[u8]>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        let contents: Vec<u8> = contents.into();
        self.files.insert(path.into(), Arc::from(contents));
    }
}

impl Filesystem for MemoryFilesystem {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send>> {
        match self.files.get(path) {
            Some(contents) => Ok(Box::new(Cursor::new(Arc::clone(contents)))),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "no such file")),
        }
    }
}

/// Forward-only stream of the records of one delimited file.
///
/// Rows are decoded one at a time; the file is closed when the reader is
/// dropped.
pub struct RowReader {
    path: PathBuf,
    reader: csv::Reader<Box<dyn Read + Send>>,
    header: Option<Arc<[String]>>,
    row: csv::StringRecord,
}

impl RowReader {
    /// Opens `path` and, for files with a header, consumes the header row.
    pub fn open(
        filesystem: &dyn Filesystem,
        path: &Path,
        delimiter: char,
        has_header: bool,
    ) -> Result<Self, ResolveError> {
        if !delimiter.is_ascii() {
            return Err(ResolveError::InvalidLookup(format!(
                "delimiter must be a single-byte character, got '{delimiter}'"
            )));
        }
        let file = filesystem.open(path).map_err(|source| ResolveError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter as u8)
            .has_headers(has_header)
            .flexible(true)
            .from_reader(file);

        let header = if has_header {
            let names = reader.headers().map_err(|source| ResolveError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
            Some(names.iter().map(String::from).collect())
        } else {
            None
        };

        Ok(RowReader {
            path: path.to_path_buf(),
            reader,
            header,
            row: csv::StringRecord::new(),
        })
    }

    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }
}

impl Iterator for RowReader {
    type Item = Result<CsvRecord, ResolveError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.row) {
            Ok(true) => Some(Ok(CsvRecord::new(
                self.header.clone(),
                self.row.iter().map(String::from).collect(),
            ))),
            Ok(false) => None,
            Err(source) => Some(Err(ResolveError::Csv {
                path: self.path.clone(),
                source,
            })),
        }
    }
}
