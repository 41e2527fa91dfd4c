//! Chart kinds

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownChartKind;

/// Mark style used to draw a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Point,
    Area,
}

impl ChartKind {
    /// Every kind, in picker order
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Point,
        ChartKind::Area,
    ];

    /// Display name, also the stored form
    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar",
            ChartKind::Line => "Line",
            ChartKind::Point => "Point",
            ChartKind::Area => "Area",
        }
    }

    /// One-line explanation shown under the name
    pub fn description(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Compare values across categories",
            ChartKind::Line => "Show how values change in sequence",
            ChartKind::Point => "Show individual values",
            ChartKind::Area => "Show volume under a trend",
        }
    }

    /// Parse a stored name, falling back to [`ChartKind::Bar`]
    ///
    /// Stored configurations may carry names this version does not know.
    pub fn from_stored(name: &str) -> Self {
        name.parse().unwrap_or_else(|e| {
            log::debug!("{}, using Bar", e);
            ChartKind::Bar
        })
    }
}

impl FromStr for ChartKind {
    type Err = UnknownChartKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownChartKind(s.to_string()))
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for kind in ChartKind::ALL {
            assert_eq!(kind.name().parse::<ChartKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("line".parse::<ChartKind>(), Ok(ChartKind::Line));
        assert_eq!(" AREA ".parse::<ChartKind>(), Ok(ChartKind::Area));
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            "Pie".parse::<ChartKind>(),
            Err(UnknownChartKind("Pie".to_string()))
        );
        assert_eq!(ChartKind::from_stored("Pie"), ChartKind::Bar);
        assert_eq!(ChartKind::from_stored("Point"), ChartKind::Point);
    }

    #[test]
    fn test_display() {
        assert_eq!(ChartKind::Area.to_string(), "Area");
        assert_eq!(ChartKind::default(), ChartKind::Bar);
    }
}
