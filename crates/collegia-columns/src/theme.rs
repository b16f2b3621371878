//! Rendering theme for cell colors

use serde::{Deserialize, Serialize};

/// A background/foreground color pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
	/// CSS background color
	pub background: String,
	/// CSS foreground (text) color
	pub foreground: String,
}

impl ColorPair {
	/// Creates a color pair
	pub fn new(background: impl Into<String>, foreground: impl Into<String>) -> Self {
		Self {
			background: background.into(),
			foreground: foreground.into(),
		}
	}
}

/// Theme supplying default colors to cell renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
	/// Neutral pair used when a select label has no color-map entry
	pub muted: ColorPair,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			muted: ColorPair::new("#eeeeee", "#424242"),
		}
	}
}
