//! Video domain type

use crate::types::VideoId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog entry
///
/// Identity and metadata are fixed once the catalog is built. The moderation
/// flag is the only mutable part and is changed through
/// [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique video identifier
    pub id: VideoId,

    /// Video title
    pub title: String,

    /// Tags in their original order
    pub tags: Vec<String>,

    /// Flag reason, present while the video is flagged
    #[serde(default)]
    flag: Option<String>,
}

impl Video {
    /// Create a new, unflagged video
    pub fn new<I, S>(id: impl Into<VideoId>, title: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            flag: None,
        }
    }

    /// Whether the video is currently flagged
    pub fn is_flagged(&self) -> bool {
        self.flag.is_some()
    }

    /// Reason given when the video was flagged
    pub fn flag_reason(&self) -> Option<&str> {
        self.flag.as_deref()
    }

    pub(crate) fn set_flag(&mut self, reason: String) {
        self.flag = Some(reason);
    }

    pub(crate) fn clear_flag(&mut self) {
        self.flag = None;
    }

    /// `<title> (<id>) [<tags>]`, without moderation state
    pub fn summary(&self) -> String {
        format!("{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }
}

/// Full listing line: the summary plus ` - FLAGGED (reason: ...)` when flagged
impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())?;
        if let Some(reason) = &self.flag {
            write!(f, " - FLAGGED (reason: {})", reason)?;
        }
        Ok(())
    }
}
