//! Blinc UI (Rust) output
//!
//! Primitives become associated `Color` constants on a unit struct. Semantic
//! accessors read the active scheme from `blinc_theme::ThemeState`, so they
//! follow system dark mode and runtime scheme toggles.

use chroma_core::Argb;

use super::{EmitOptions, EmittedDocument, Emitter, Target, GENERATED_HEADER};
use crate::naming::{Case, Identifier};
use crate::registry::{ColorValue, PrimitiveRegistry, SemanticRegistry};

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use",
    "where", "while", "abstract", "become", "box", "do", "final", "macro", "override", "priv",
    "try", "typeof", "unsized", "virtual", "yield",
];

/// Keywords that cannot be written as raw identifiers
const RESERVED: &[&str] = &["self", "super", "crate"];

pub struct BlincEmitter {
    options: EmitOptions,
}

impl BlincEmitter {
    pub fn new(options: EmitOptions) -> Self {
        Self { options }
    }

    fn module_name(type_name: &str) -> String {
        Identifier::from_words(vec![type_name.to_string()], Case::Pascal).to_snake()
    }

    fn value(&self, value: &ColorValue) -> String {
        match value {
            ColorValue::Primitive(identifier) => format!(
                "{}::{}",
                self.options.primitives_name,
                identifier.to_screaming_snake()
            ),
            ColorValue::Literal(color) => color_expr(*color),
            ColorValue::Unspecified => "Color::TRANSPARENT".to_string(),
        }
    }
}

fn channel(byte: u8) -> String {
    format!("{:.4}", byte as f32 / 255.0)
}

fn color_expr(color: Argb) -> String {
    format!(
        "Color::rgba({}, {}, {}, {})",
        channel(color.red()),
        channel(color.green()),
        channel(color.blue()),
        channel(color.alpha())
    )
}

fn fn_name(identifier: &Identifier) -> String {
    let name = identifier.to_snake();
    if RESERVED.contains(&name.as_str()) {
        format!("{name}_")
    } else if RUST_KEYWORDS.contains(&name.as_str()) {
        format!("r#{name}")
    } else {
        name
    }
}

impl Emitter for BlincEmitter {
    fn target(&self) -> Target {
        Target::Blinc
    }

    fn primitives(&self, registry: &PrimitiveRegistry) -> EmittedDocument {
        let name = &self.options.primitives_name;
        let mut out = format!("//! {GENERATED_HEADER}\n\nuse blinc_core::Color;\n\n");
        out.push_str(&format!("pub struct {name};\n\nimpl {name} {{\n"));
        for entry in registry.iter() {
            out.push_str(&format!("    /// 0x{}\n", entry.color));
            out.push_str(&format!(
                "    pub const {}: Color = {};\n",
                entry.identifier.to_screaming_snake(),
                color_expr(entry.color)
            ));
        }
        out.push_str("}\n");

        EmittedDocument {
            file_name: format!("{}.rs", Self::module_name(name)),
            contents: out,
        }
    }

    fn semantics(&self, registry: &SemanticRegistry) -> EmittedDocument {
        let name = &self.options.semantics_name;
        let primitives = &self.options.primitives_name;

        let mut out = format!("//! {GENERATED_HEADER}\n\n");
        out.push_str("use blinc_core::Color;\nuse blinc_theme::{ColorScheme, ThemeState};\n\n");
        out.push_str(&format!(
            "#[allow(unused_imports)]\nuse super::{}::{primitives};\n\n",
            Self::module_name(primitives)
        ));
        out.push_str(
            "fn is_dark() -> bool {\n    ThemeState::try_get().is_some_and(|theme| theme.scheme() == ColorScheme::Dark)\n}\n\n",
        );
        out.push_str(&format!("pub struct {name};\n\nimpl {name} {{\n"));

        let accessors: Vec<String> = registry
            .iter()
            .map(|entry| {
                format!(
                    "    pub fn {}() -> Color {{\n        if is_dark() {{\n            {}\n        }} else {{\n            {}\n        }}\n    }}\n",
                    fn_name(&entry.identifier),
                    self.value(&entry.dark()),
                    self.value(&entry.light()),
                )
            })
            .collect();
        out.push_str(&accessors.join("\n"));
        out.push_str("}\n");

        EmittedDocument {
            file_name: format!("{}.rs", Self::module_name(name)),
            contents: out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::NamingRules;
    use crate::token::{Mode, TokenPath};
    use pretty_assertions::assert_eq;

    fn options() -> EmitOptions {
        EmitOptions {
            package: None,
            primitives_name: "WelPrimitives".to_string(),
            semantics_name: "WelSemantics".to_string(),
        }
    }

    #[test]
    fn primitives_render_as_associated_consts() {
        let rules = NamingRules::default();
        let mut prims = PrimitiveRegistry::new();
        prims.insert(&rules, TokenPath::from_key("blue-500"), Argb::opaque(0x00, 0x47, 0xAB));

        let doc = BlincEmitter::new(options()).primitives(&prims);
        assert_eq!(doc.file_name, "wel_primitives.rs");
        assert_eq!(
            doc.contents,
            "//! Generated by chroma from design tokens. Do not edit.

use blinc_core::Color;

pub struct WelPrimitives;

impl WelPrimitives {
    /// 0xFF0047AB
    pub const BLUE_500: Color = Color::rgba(0.0000, 0.2784, 0.6706, 1.0000);
}
"
        );
    }

    #[test]
    fn semantics_select_on_theme_scheme() {
        let rules = NamingRules::default();
        let blue = rules.identifier(&TokenPath::from_key("blue-500"));
        let mut sem = SemanticRegistry::new();
        sem.record(
            &rules,
            Mode::Light,
            &TokenPath::from_key("text-default"),
            ColorValue::Primitive(blue),
        );
        sem.record(
            &rules,
            Mode::Dark,
            &TokenPath::from_key("text-default"),
            ColorValue::Literal(Argb::WHITE),
        );

        let doc = BlincEmitter::new(options()).semantics(&sem);
        assert_eq!(doc.file_name, "wel_semantics.rs");
        assert!(doc
            .contents
            .contains("use super::wel_primitives::WelPrimitives;\n"));
        assert!(doc.contents.contains(
            "    pub fn text_default() -> Color {
        if is_dark() {
            Color::rgba(1.0000, 1.0000, 1.0000, 1.0000)
        } else {
            WelPrimitives::BLUE_500
        }
    }
"
        ));
    }

    #[test]
    fn keyword_function_names_are_escaped() {
        let rules = NamingRules::default();
        let ident = rules.identifier(&TokenPath::from_key("type"));
        assert_eq!(fn_name(&ident), "r#type");
        let ident = rules.identifier(&TokenPath::from_key("self"));
        assert_eq!(fn_name(&ident), "self_");
    }
}
