// SPDX-License-Identifier: MPL-2.0
//! Screen anchor shared by every toast.

use iced::alignment::{Horizontal, Vertical};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six screen anchors toasts can stack from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    #[must_use]
    pub fn horizontal(self) -> Horizontal {
        match self {
            Position::TopLeft | Position::BottomLeft => Horizontal::Left,
            Position::TopCenter | Position::BottomCenter => Horizontal::Center,
            Position::TopRight | Position::BottomRight => Horizontal::Right,
        }
    }

    #[must_use]
    pub fn vertical(self) -> Vertical {
        if self.is_top() {
            Vertical::Top
        } else {
            Vertical::Bottom
        }
    }

    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopCenter | Position::TopRight
        )
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPosition(pub String);

impl fmt::Display for UnknownPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown toast position: {}", self.0)
    }
}

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPosition(s.to_string()))
    }
}
