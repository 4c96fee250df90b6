// Geometry module
// Pixel constants for the schedule grid supplied by the scheduling page

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// First grid column used by cabinet cells; column 1 is the time axis.
pub const FIRST_EVENT_COLUMN: usize = 2;

/// Pixel constants that place headers, slots and the time indicator.
///
/// `slot_height` is the height of one hour and acts as the linear scale from
/// minutes-since-midnight to vertical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    pub day_header_height: f32,
    pub cabinet_header_height: f32,
    pub slot_height: f32,
    pub time_column_width: f32,
    pub event_column_width: f32,
    /// Number of event columns the indicator line spans. Zero means
    /// "derive from days × cabinets".
    pub total_columns: usize,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("slot height must be a positive number of pixels, got {0}")]
    NonPositiveSlotHeight(f32),

    #[error("{field} must be a finite, non-negative number of pixels, got {value}")]
    InvalidDimension { field: &'static str, value: f32 },
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            day_header_height: 40.0,
            cabinet_header_height: 32.0,
            slot_height: 60.0,
            time_column_width: 64.0,
            event_column_width: 140.0,
            total_columns: 0,
        }
    }
}

/// A half-open range of grid lines, `start / end` in CSS grid notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpan {
    pub start: usize,
    pub end: usize,
}

impl GridSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Display for GridSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.start, self.end)
    }
}

impl GeometryConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.slot_height.is_finite() || self.slot_height <= 0.0 {
            return Err(GeometryError::NonPositiveSlotHeight(self.slot_height));
        }

        let dimensions = [
            ("day_header_height", self.day_header_height),
            ("cabinet_header_height", self.cabinet_header_height),
            ("time_column_width", self.time_column_width),
            ("event_column_width", self.event_column_width),
        ];
        for (field, value) in dimensions {
            if !value.is_finite() || value < 0.0 {
                return Err(GeometryError::InvalidDimension { field, value });
            }
        }

        Ok(())
    }

    /// Combined height of the day tier and the cabinet tier.
    pub fn header_height(&self) -> f32 {
        self.day_header_height + self.cabinet_header_height
    }

    /// Columns spanned by the indicator line, falling back to the grid size
    /// when no explicit count is configured.
    pub fn resolved_total_columns(&self, day_count: usize, cabinet_count: usize) -> usize {
        if self.total_columns > 0 {
            self.total_columns
        } else {
            day_count * cabinet_count
        }
    }

    /// Left pixel edge of a grid column (1-based grid lines).
    pub fn column_x(&self, column: usize) -> f32 {
        if column < FIRST_EVENT_COLUMN {
            return 0.0;
        }
        self.time_column_width + (column - FIRST_EVENT_COLUMN) as f32 * self.event_column_width
    }

    pub fn span_width(&self, span: GridSpan) -> f32 {
        span.len() as f32 * self.event_column_width
    }

    /// Total pixel height of a full 24 hour day below the headers.
    pub fn day_height(&self) -> f32 {
        24.0 * self.slot_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry_is_valid() {
        assert!(GeometryConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_slot_height_rejected() {
        let geometry = GeometryConfig {
            slot_height: 0.0,
            ..Default::default()
        };
        assert_eq!(
            geometry.validate(),
            Err(GeometryError::NonPositiveSlotHeight(0.0))
        );
    }

    #[test]
    fn test_nan_slot_height_rejected() {
        let geometry = GeometryConfig {
            slot_height: f32::NAN,
            ..Default::default()
        };
        assert!(geometry.validate().is_err());
    }

    #[test]
    fn test_negative_width_rejected() {
        let geometry = GeometryConfig {
            event_column_width: -1.0,
            ..Default::default()
        };
        assert_eq!(
            geometry.validate(),
            Err(GeometryError::InvalidDimension {
                field: "event_column_width",
                value: -1.0
            })
        );
    }

    #[test]
    fn test_column_x_starts_after_time_axis() {
        let geometry = GeometryConfig::default();
        assert_eq!(geometry.column_x(1), 0.0);
        assert_eq!(geometry.column_x(2), 64.0);
        assert_eq!(geometry.column_x(4), 64.0 + 2.0 * 140.0);
    }

    #[test]
    fn test_resolved_total_columns() {
        let mut geometry = GeometryConfig::default();
        assert_eq!(geometry.resolved_total_columns(5, 3), 15);
        geometry.total_columns = 4;
        assert_eq!(geometry.resolved_total_columns(5, 3), 4);
    }

    #[test]
    fn test_grid_span_display() {
        assert_eq!(GridSpan::new(2, 4).to_string(), "2/4");
        assert_eq!(GridSpan::new(2, 4).len(), 2);
    }
}
