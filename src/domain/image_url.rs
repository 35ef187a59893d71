use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrl(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("imageUrl must not be blank")]
pub struct BlankImageUrl;

impl ImageUrl {
    /// Accepts any non-blank string. Scheme and reachability are left to the
    /// upstream provider.
    pub fn parse(raw: &str) -> Result<Self, BlankImageUrl> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BlankImageUrl);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
