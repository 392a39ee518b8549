use crate::datatypes::Dimension;
use crate::error::Result;
use crate::geometry::multipoint::check_members;
use crate::geometry::LineString;

/// A collection of line strings sharing one dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    line_strings: Vec<LineString>,
    dim: Dimension,
}

impl MultiLineString {
    pub fn try_new(line_strings: Vec<LineString>, dim: Dimension) -> Result<Self> {
        check_members(line_strings.iter().map(LineString::dimension), dim)?;
        Ok(Self { line_strings, dim })
    }

    pub fn empty(dim: Dimension) -> Self {
        Self {
            line_strings: vec![],
            dim,
        }
    }

    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.line_strings.is_empty()
    }
}
