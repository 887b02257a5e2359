//! Jetpack Compose (Kotlin) output
//!
//! Primitives become `val` properties of a Kotlin `object`; semantics become
//! `@Composable` getters switching on `isSystemInDarkTheme()`.

use super::{EmitOptions, EmittedDocument, Emitter, Target, GENERATED_HEADER};
use crate::naming::Identifier;
use crate::registry::{ColorValue, PrimitiveRegistry, SemanticRegistry};

const KOTLIN_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

pub struct ComposeEmitter {
    options: EmitOptions,
}

impl ComposeEmitter {
    pub fn new(options: EmitOptions) -> Self {
        Self { options }
    }

    fn preamble(&self, imports: &[&str]) -> String {
        let mut out = format!("// {GENERATED_HEADER}\n\n");
        if let Some(package) = self.options.package.as_deref().filter(|p| !p.is_empty()) {
            out.push_str(&format!("package {package}\n\n"));
        }
        for import in imports {
            out.push_str(&format!("import {import}\n"));
        }
        out.push('\n');
        out
    }

    fn value(&self, value: &ColorValue) -> String {
        match value {
            ColorValue::Primitive(identifier) => {
                format!("{}.{}", self.options.primitives_name, symbol(identifier))
            }
            ColorValue::Literal(color) => format!("Color(0x{color})"),
            ColorValue::Unspecified => "Color.Unspecified".to_string(),
        }
    }
}

fn symbol(identifier: &Identifier) -> String {
    let name = identifier.name();
    if KOTLIN_KEYWORDS.contains(&name) {
        format!("`{name}`")
    } else {
        name.to_string()
    }
}

impl Emitter for ComposeEmitter {
    fn target(&self) -> Target {
        Target::Compose
    }

    fn primitives(&self, registry: &PrimitiveRegistry) -> EmittedDocument {
        let mut out = self.preamble(&["androidx.compose.ui.graphics.Color"]);
        out.push_str(&format!("object {} {{\n", self.options.primitives_name));
        for entry in registry.iter() {
            out.push_str(&format!(
                "    val {} = Color(0x{})\n",
                symbol(&entry.identifier),
                entry.color
            ));
        }
        out.push_str("}\n");

        EmittedDocument {
            file_name: format!("{}.kt", self.options.primitives_name),
            contents: out,
        }
    }

    fn semantics(&self, registry: &SemanticRegistry) -> EmittedDocument {
        let mut out = self.preamble(&[
            "androidx.compose.foundation.isSystemInDarkTheme",
            "androidx.compose.runtime.Composable",
            "androidx.compose.ui.graphics.Color",
        ]);
        out.push_str(&format!("object {} {{\n", self.options.semantics_name));

        let accessors: Vec<String> = registry
            .iter()
            .map(|entry| {
                format!(
                    "    val {}: Color\n        @Composable\n        get() = if (isSystemInDarkTheme()) {} else {}\n",
                    symbol(&entry.identifier),
                    self.value(&entry.dark()),
                    self.value(&entry.light()),
                )
            })
            .collect();
        out.push_str(&accessors.join("\n"));
        out.push_str("}\n");

        EmittedDocument {
            file_name: format!("{}.kt", self.options.semantics_name),
            contents: out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::{Case, NamingRules};
    use crate::token::{Mode, TokenPath};
    use chroma_core::Argb;
    use pretty_assertions::assert_eq;

    fn options() -> EmitOptions {
        EmitOptions {
            package: Some("com.example.theme".to_string()),
            primitives_name: "WelPrimitives".to_string(),
            semantics_name: "WelSemantics".to_string(),
        }
    }

    #[test]
    fn primitives_render_as_object_vals() {
        let rules = NamingRules::default();
        let mut prims = PrimitiveRegistry::new();
        prims.insert(&rules, TokenPath::from_key("blue-500"), Argb::opaque(0x00, 0x47, 0xAB));
        prims.insert(&rules, TokenPath::from_key("scrim"), Argb::new(0x80, 0, 0, 0));

        let doc = ComposeEmitter::new(options()).primitives(&prims);
        assert_eq!(doc.file_name, "WelPrimitives.kt");
        assert_eq!(
            doc.contents,
            "// Generated by chroma from design tokens. Do not edit.

package com.example.theme

import androidx.compose.ui.graphics.Color

object WelPrimitives {
    val Blue500 = Color(0xFF0047AB)
    val Scrim = Color(0x80000000)
}
"
        );
    }

    #[test]
    fn semantics_render_theme_switching_getters() {
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
            &TokenPath::from_key("surface"),
            ColorValue::Literal(Argb::opaque(0x12, 0x12, 0x12)),
        );

        let doc = ComposeEmitter::new(EmitOptions {
            package: None,
            ..options()
        })
        .semantics(&sem);

        assert_eq!(doc.file_name, "WelSemantics.kt");
        assert_eq!(
            doc.contents,
            "// Generated by chroma from design tokens. Do not edit.

import androidx.compose.foundation.isSystemInDarkTheme
import androidx.compose.runtime.Composable
import androidx.compose.ui.graphics.Color

object WelSemantics {
    val TextDefault: Color
        @Composable
        get() = if (isSystemInDarkTheme()) WelPrimitives.Blue500 else WelPrimitives.Blue500

    val Surface: Color
        @Composable
        get() = if (isSystemInDarkTheme()) Color(0xFF121212) else Color.Unspecified
}
"
        );
    }

    #[test]
    fn keyword_identifiers_are_escaped() {
        let rules = NamingRules {
            case: Case::Camel,
            ..NamingRules::default()
        };
        let mut prims = PrimitiveRegistry::new();
        prims.insert(&rules, TokenPath::from_key("object"), Argb::BLACK);

        let doc = ComposeEmitter::new(options()).primitives(&prims);
        assert!(doc.contents.contains("    val `object` = Color(0xFF000000)\n"));
    }
}
