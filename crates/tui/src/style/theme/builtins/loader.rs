//! Parsing of the TOML theme files bundled with the crate.
//!
//! A theme file names the theme, its aliases and one style per overlay
//! element. Colours are `#rrggbb` strings and emphasis is a short list of
//! lowercase words; anything else is rejected while deserializing.

use anyhow::{Context, Result, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{Theme, ThemeRegistration};

pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: ElementStyles,
}

/// One style per element of the overlay, mirroring [`Theme`].
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ElementStyles {
	header: ElementStyle,
	row_highlight: ElementStyle,
	prompt: ElementStyle,
	empty: ElementStyle,
	highlight: ElementStyle,
	badge: ElementStyle,
	error: ElementStyle,
}

impl From<ElementStyles> for Theme {
	fn from(styles: ElementStyles) -> Self {
		Theme {
			header: styles.header.into(),
			row_highlight: styles.row_highlight.into(),
			prompt: styles.prompt.into(),
			empty: styles.empty.into(),
			highlight: styles.highlight.into(),
			badge: styles.badge.into(),
			error: styles.error.into(),
		}
	}
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ElementStyle {
	fg: Option<HexColor>,
	bg: Option<HexColor>,
	#[serde(default)]
	modifiers: Vec<Emphasis>,
}

impl From<ElementStyle> for Style {
	fn from(element: ElementStyle) -> Self {
		let mut style = Style::new();
		if let Some(HexColor(fg)) = element.fg {
			style = style.fg(fg);
		}
		if let Some(HexColor(bg)) = element.bg {
			style = style.bg(bg);
		}
		element
			.modifiers
			.into_iter()
			.fold(style, |style, emphasis| style.add_modifier(emphasis.modifier()))
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
struct HexColor(Color);

impl TryFrom<String> for HexColor {
	type Error = String;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		let digits = value
			.strip_prefix('#')
			.filter(|digits| digits.len() == 6 && digits.is_ascii())
			.ok_or_else(|| format!("expected a `#rrggbb` colour, found `{value}`"))?;
		let channel = |range: std::ops::Range<usize>| {
			u8::from_str_radix(&digits[range], 16)
				.map_err(|_| format!("`{value}` is not a hexadecimal colour"))
		};
		Ok(Self(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)))
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Emphasis {
	Bold,
	Dim,
	Italic,
	Underline,
}

impl Emphasis {
	fn modifier(self) -> Modifier {
		match self {
			Self::Bold => Modifier::BOLD,
			Self::Dim => Modifier::DIM,
			Self::Italic => Modifier::ITALIC,
			Self::Underline => Modifier::UNDERLINED,
		}
	}
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut files: Vec<_> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let documents = files
		.into_iter()
		.map(parse_theme_file)
		.collect::<Result<Vec<_>>>()?;
	register(documents)
}

fn parse_theme_file(file: &File) -> Result<ThemeFile> {
	let path = file.path();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("{path:?} is not valid UTF-8"))?;
	toml::from_str(contents).with_context(|| format!("failed to parse built-in theme {path:?}"))
}

/// Build registrations, refusing names that would make `--theme` lookups ambiguous.
fn register(documents: Vec<ThemeFile>) -> Result<BuiltinThemes> {
	let mut registrations: Vec<ThemeRegistration> = Vec::with_capacity(documents.len());
	let mut default_theme: Option<(Theme, String)> = None;

	for document in documents {
		let name = document.name.trim().to_string();
		if name.is_empty() {
			bail!("a built-in theme has an empty name");
		}
		let aliases: Vec<String> = document
			.aliases
			.iter()
			.map(|alias| alias.trim().to_string())
			.filter(|alias| !alias.is_empty())
			.collect();

		for label in std::iter::once(&name).chain(&aliases) {
			if let Some(existing) = registrations
				.iter()
				.find(|registration| registration.answers_to(label))
			{
				bail!("theme name `{label}` of `{name}` is already taken by `{}`", existing.name);
			}
		}

		let theme = Theme::from(document.styles);
		if document.default {
			if let Some((_, existing)) = &default_theme {
				bail!("multiple built-in themes are marked as default (`{existing}` and `{name}`)");
			}
			default_theme = Some((theme, name.clone()));
		}

		registrations.push(
			aliases
				.into_iter()
				.fold(ThemeRegistration::new(name, theme), ThemeRegistration::alias),
		);
	}

	let Some(default_theme) = default_theme
		.map(|(theme, _)| theme)
		.or_else(|| registrations.first().map(|registration| registration.theme))
	else {
		bail!("no built-in theme definitions were found");
	};

	Ok(BuiltinThemes {
		registrations,
		default_theme,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn theme_file(name: &str, extra: &str) -> ThemeFile {
		let source = format!(
			r##"
name = "{name}"
{extra}

[styles]
header = {{ fg = "#ffffff", bg = "#000000", modifiers = ["bold"] }}
row_highlight = {{ bg = "#111111" }}
prompt = {{ fg = "#2563eb" }}
empty = {{ fg = "#6b7280" }}
highlight = {{ fg = "#b45309", modifiers = ["bold", "underline"] }}
badge = {{ fg = "#7c3aed" }}
error = {{ fg = "#b91c1c" }}
"##
		);
		toml::from_str(&source).expect("theme file")
	}

	#[test]
	fn hex_colours_need_six_digits() {
		assert_eq!(
			HexColor::try_from("#0a1B2c".to_string()),
			Ok(HexColor(Color::Rgb(10, 27, 44)))
		);
		assert!(HexColor::try_from("#fff".to_string()).is_err());
		assert!(HexColor::try_from("#gggggg".to_string()).is_err());
		assert!(HexColor::try_from("red".to_string()).is_err());
	}

	#[test]
	fn element_styles_combine_colours_and_emphasis() {
		let theme = Theme::from(theme_file("night", "").styles);
		assert_eq!(
			theme.highlight,
			Style::new()
				.fg(Color::Rgb(0xb4, 0x53, 0x09))
				.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
		);
		assert_eq!(theme.row_highlight.fg, None);
	}

	#[test]
	fn unknown_emphasis_is_rejected() {
		let result: Result<ElementStyle, _> = toml::from_str(r#"modifiers = ["sparkle"]"#);
		assert!(result.is_err());
	}

	#[test]
	fn colliding_aliases_are_rejected() {
		let documents = vec![
			theme_file("night", r#"aliases = ["dark"]"#),
			theme_file("dusk", r#"aliases = ["Dark"]"#),
		];
		let message = register(documents).err().expect("collision").to_string();
		assert!(message.contains("already taken by `night`"), "{message}");
	}

	#[test]
	fn first_theme_is_default_when_none_is_marked() {
		let themes = register(vec![theme_file("night", ""), theme_file("dusk", "")])
			.expect("themes");
		assert_eq!(themes.default_theme, themes.registrations[0].theme);
		assert!(register(Vec::new()).is_err());
	}

	#[test]
	fn bundled_themes_load_with_a_single_default() {
		let themes = load_builtin_themes(&super::super::BUILTIN_THEME_DIR).expect("bundled themes");
		let names: Vec<_> = themes
			.registrations
			.iter()
			.map(|registration| registration.name.as_str())
			.collect();
		assert_eq!(names, vec!["light", "slate", "solarized"]);
		let slate = &themes.registrations[1];
		assert_eq!(themes.default_theme, slate.theme);
		assert!(slate.answers_to("DEFAULT"));
	}
}
