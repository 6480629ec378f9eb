//! GeneratedHeader entity - a composed header ready to be compared or written

use std::path::{Path, PathBuf};

use crate::domain::entities::{AssetEntry, EmbeddedAsset};
use crate::domain::services::HeaderTemplate;
use crate::domain::value_objects::{choose_delimiter, Delimiter, DelimiterChoice};
use crate::error::EntryError;

/// The full text of one `*.gen.h` file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedHeader {
    path: PathBuf,
    content: String,
    delimiter: Delimiter,
}

impl GeneratedHeader {
    /// Pick a delimiter for the payload and render the header text
    pub fn compose(
        entry: &AssetEntry,
        asset: &EmbeddedAsset,
        template: &HeaderTemplate,
    ) -> Result<Self, EntryError> {
        let delimiter = match choose_delimiter(asset.payload()) {
            DelimiterChoice::Chosen(delimiter) => delimiter,
            DelimiterChoice::Exhausted { attempts } => {
                return Err(EntryError::DelimiterExhausted {
                    path: entry.source().to_path_buf(),
                    attempts,
                })
            }
        };

        let content = template.render(
            &entry.file_name(),
            asset.constant(),
            &delimiter,
            asset.payload(),
        );

        Ok(Self {
            path: entry.output().to_path_buf(),
            content,
            delimiter,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn delimiter(&self) -> &Delimiter {
        &self.delimiter
    }

    /// Whether `existing` already holds exactly this content
    pub fn matches(&self, existing: Option<&[u8]>) -> bool {
        existing == Some(self.content.as_bytes())
    }
}
